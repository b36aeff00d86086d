use super::{Config, GridEvent, GridShell, Manager};

impl<C: Config, SHELL: GridShell> Manager<C, SHELL> {
    /// Process one host notification.
    ///
    /// Returns `true` if a redisplay was scheduled.
    pub fn grid_event_handler(&mut self, event: GridEvent) -> bool {
        match event {
            GridEvent::LayoutChanged => self.request_reorder("app grid layout changed"),

            GridEvent::ItemDragEnd => self.request_reorder("app movement detected"),

            GridEvent::FavoritesChanged => self.request_reorder("favourite apps changed"),

            GridEvent::SettingsChanged => {
                self.state.load_config(&self.config);
                self.shell.load_config(&self.config);
                self.request_reorder("extension settings changed")
            }

            GridEvent::InstalledAppsChanged => self.request_reorder("installed apps changed"),

            GridEvent::FoldersChanged => {
                self.state.rebuild_folder_index(&self.config);
                self.refresh_folders();
                self.request_reorder("folders changed")
            }

            // Only the first open after activation triggers a reorder.
            GridEvent::GridShown => {
                if self.state.first_open_pending {
                    self.state.first_open_pending = false;
                    self.request_reorder("app grid opened, one-off reorder")
                } else {
                    false
                }
            }

            GridEvent::Shutdown => {
                self.shutdown_requested = true;
                false
            }
        }
    }
}
