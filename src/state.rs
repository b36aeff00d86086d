//! Live reorder state for one extension activation.
use std::collections::HashSet;

use tokio::time::Instant;

use crate::compare::compare_items;
use crate::config::{Config, FolderPosition};
use crate::models::{Folder, GridItem};
use crate::utils::helpers::vec_extract;

#[derive(Debug)]
pub struct State {
    pub items: Vec<GridItem>,
    pub folders: Vec<Folder>,
    /// Membership list as stored by the host, in its original order.
    pub folder_children: Vec<String>,
    /// Lookup index over `folder_children`, rebuilt on membership change
    /// and never per comparison.
    pub folder_ids: HashSet<String>,
    pub folder_position: FolderPosition,
    pub sort_folder_contents: bool,
    pub logging_enabled: bool,
    /// Lock preventing the core from fighting itself over settings writes.
    pub busy: bool,
    /// Deadline of the scheduled redisplay, if one is in flight.
    pub pending_redisplay: Option<Instant>,

    pub(crate) first_open_pending: bool,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        let folder_children = config.folder_children();
        let folder_ids = folder_children.iter().cloned().collect();

        Self {
            items: Vec::new(),
            folders: Vec::new(),
            folder_children,
            folder_ids,
            folder_position: config.folder_position(),
            sort_folder_contents: config.sort_folder_contents(),
            logging_enabled: config.logging_enabled(),
            busy: false,
            pending_redisplay: None,
            first_open_pending: true,
        }
    }

    /// Order the top level of the grid with the configured folder placement.
    pub fn sort_grid(&mut self) {
        let position = self.folder_position;
        let folder_ids = &self.folder_ids;
        self.items
            .sort_by(|a, b| compare_items(a, b, position, folder_ids));
    }

    /// Reconcile the grid against the entries installed on the host: drop
    /// what disappeared, append what is new. Survivors keep their position
    /// so repeated redisplays stay stable.
    pub(crate) fn reconcile(&mut self, installed: Vec<GridItem>) {
        let removed = vec_extract(&mut self.items, |item| {
            !installed.iter().any(|entry| entry.id == item.id)
        });
        for item in &removed {
            tracing::debug!("dropped removed entry: {}", item.id);
        }

        for entry in installed {
            match self.items.iter_mut().find(|item| item.id == entry.id) {
                Some(item) => *item = entry,
                None => self.items.push(entry),
            }
        }
    }

    pub(crate) fn load_config(&mut self, config: &impl Config) {
        self.folder_position = config.folder_position();
        self.sort_folder_contents = config.sort_folder_contents();
        self.logging_enabled = config.logging_enabled();
    }

    /// Rebuild the folder membership list and its lookup index.
    pub(crate) fn rebuild_folder_index(&mut self, config: &impl Config) {
        self.folder_children = config.folder_children();
        self.folder_ids = self.folder_children.iter().cloned().collect();
    }
}
