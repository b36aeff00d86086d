mod folder_position;
mod settings;

pub use folder_position::FolderPosition;
pub use settings::Settings;

/// Settings the reorder core reads from the host's key-value store.
pub trait Config {
    /// Where folders sort relative to applications.
    fn folder_position(&self) -> FolderPosition;

    /// Whether each folder's contents are kept sorted as well.
    fn sort_folder_contents(&self) -> bool;

    fn logging_enabled(&self) -> bool;

    /// Ordered list of ids currently grouped into folders.
    fn folder_children(&self) -> Vec<String>;
}
