use crate::config::Config;
use crate::models::{Folder, GridItem};
use crate::GridEvent;
use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
mod mock_grid_shell;

#[cfg(test)]
pub use self::mock_grid_shell::MockGridShell;

/// Surface of the host shell the reorder core runs against.
///
/// The host owns the widgets, the rendering and the event loop; this trait
/// is the narrow slice the core needs: a source of change notifications, a
/// source of installed entries, and a sink for computed orderings.
pub trait GridShell {
    fn new(config: &impl Config) -> Self;

    fn get_next_events(&mut self) -> Vec<GridEvent>;

    fn load_config(&mut self, _config: &impl Config) {}

    /// Entries currently installed on the host, in the host's own order.
    fn installed_items(&self) -> Vec<GridItem>;

    /// Current contents of a single folder.
    fn folder_items(&self, folder_id: &str) -> Vec<GridItem>;

    /// Push the computed top-level order back to the host grid.
    fn update_grid(&self, _items: &[GridItem]) {}

    /// Push the content order of one folder back to the host.
    fn update_folder(&self, _folder: &Folder) {}

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);
}
