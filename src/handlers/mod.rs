mod grid_event_handler;
mod reorder_handler;

pub use reorder_handler::REORDER_DELAY;

use super::config::Config;
use super::models::{Folder, Manager};
use super::shells::GridShell;
use super::GridEvent;
