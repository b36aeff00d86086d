use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::compare::compare_items;
use crate::config::FolderPosition;
use crate::models::GridItem;

/// A named grouping of applications, contents tracked by the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub apps: Vec<GridItem>,
}

impl Folder {
    /// Sort this folder's contents alphabetically, independent of the
    /// top level of the grid.
    pub fn sort_contents(&mut self) {
        // Everything inside a folder is an application, so an empty
        // membership set reduces the comparison to names and ids.
        let no_folders = HashSet::new();
        self.apps
            .sort_by(|a, b| compare_items(a, b, FolderPosition::Alphabetical, &no_folders));
    }
}
