//! Serialized reorder scheduling with a single debounce window.
use tokio::time::{Duration, Instant};

use super::{Config, Folder, GridShell, Manager};

/// Delay before a scheduled redisplay runs. Coalesces bursts of change
/// notifications and stays clear of the host's in-flight animations.
pub const REORDER_DELAY: Duration = Duration::from_millis(100);

impl<C: Config, SHELL: GridShell> Manager<C, SHELL> {
    /// Ask for the grid to be rebuilt once the debounce window passes.
    ///
    /// While an earlier request is still in flight the call is dropped,
    /// keeping concurrent settings writes from fighting each other.
    /// Returns `true` if a redisplay was scheduled.
    pub fn request_reorder(&mut self, reason: &str) -> bool {
        if self.state.busy {
            tracing::debug!("dropped reorder request, already updating: {}", reason);
            return false;
        }
        self.state.busy = true;

        if self.state.logging_enabled {
            tracing::info!("{}, triggering reorder", reason);
        } else {
            tracing::debug!("{}, triggering reorder", reason);
        }

        // Alphabetically order the contents of each folder, if enabled
        if self.state.sort_folder_contents {
            self.sort_folder_contents();
        }

        self.state.pending_redisplay = Some(Instant::now() + REORDER_DELAY);
        true
    }

    /// Body of the debounce timer: redisplay the grid and release the lock.
    pub fn redisplay_handler(&mut self) {
        self.state.pending_redisplay = None;

        // The host's own redisplay step runs first, picking up added and
        // removed entries. Our ordering applies on top of the reconciled
        // grid.
        self.state.reconcile(self.shell.installed_items());
        self.state.sort_grid();
        self.shell.update_grid(&self.state.items);

        self.state.busy = false;
    }

    /// Pull each folder's name and contents from the host.
    pub(crate) fn refresh_folders(&mut self) {
        let folders: Vec<Folder> = self
            .state
            .folder_children
            .iter()
            .map(|id| {
                let name = self
                    .state
                    .items
                    .iter()
                    .find(|item| &item.id == id)
                    .map_or_else(|| id.clone(), |item| item.name.clone());
                Folder {
                    id: id.clone(),
                    name,
                    apps: self.shell.folder_items(id),
                }
            })
            .collect();
        self.state.folders = folders;
    }

    fn sort_folder_contents(&mut self) {
        tracing::debug!("reordering folder contents");
        for folder in &mut self.state.folders {
            folder.sort_contents();
            self.shell.update_folder(folder);
        }
    }

    /// Cancel any pending redisplay and release the lock. Nothing fires
    /// after this returns.
    pub fn teardown(&mut self) {
        if self.state.pending_redisplay.take().is_some() {
            tracing::debug!("cancelled pending redisplay");
        }
        self.state.busy = false;
    }
}
