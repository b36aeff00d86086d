use std::cell::RefCell;
use std::collections::HashMap;

use super::Config;
use super::GridShell;
use crate::models::{Folder, GridItem};
use crate::GridEvent;

#[derive(Debug, Default)]
pub struct MockGridShell {
    pub installed: Vec<GridItem>,
    pub folder_contents: HashMap<String, Vec<GridItem>>,
    // Each entry is the list of ids pushed by one update call.
    pub grid_updates: RefCell<Vec<Vec<String>>>,
    pub folder_updates: RefCell<Vec<(String, Vec<String>)>>,
}

impl GridShell for MockGridShell {
    fn new(_: &impl Config) -> Self {
        Self::default()
    }

    // tests feed events straight into the handler, not through the queue
    fn get_next_events(&mut self) -> Vec<GridEvent> {
        vec![]
    }

    fn installed_items(&self) -> Vec<GridItem> {
        self.installed.clone()
    }

    fn folder_items(&self, folder_id: &str) -> Vec<GridItem> {
        self.folder_contents
            .get(folder_id)
            .cloned()
            .unwrap_or_default()
    }

    fn update_grid(&self, items: &[GridItem]) {
        self.grid_updates
            .borrow_mut()
            .push(items.iter().map(|item| item.id.clone()).collect());
    }

    fn update_folder(&self, folder: &Folder) {
        self.folder_updates.borrow_mut().push((
            folder.id.clone(),
            folder.apps.iter().map(|app| app.id.clone()).collect(),
        ));
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        unimplemented!()
    }

    fn flush(&self) {
        unimplemented!()
    }
}
