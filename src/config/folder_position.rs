use serde::{Deserialize, Serialize};

/// Where folders sort relative to applications.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FolderPosition {
    #[default]
    Top,
    Bottom,
    Alphabetical,
}
