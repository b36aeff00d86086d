use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Application,
    Folder,
}

/// A single entry in the app launcher grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    pub id: String,
    /// Name shown under the icon, used for alphabetic comparison.
    pub name: String,
    pub kind: ItemKind,
}

impl GridItem {
    #[must_use]
    pub fn application(id: &str, name: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            kind: ItemKind::Application,
        }
    }

    #[must_use]
    pub fn folder(id: &str, name: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            kind: ItemKind::Folder,
        }
    }
}
