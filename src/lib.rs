//! Reordering core for desktop app launcher grids.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of this crate is to do one thing and to do that one thing
// well: keep the app grid in order.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
mod compare;
pub mod config;
pub mod errors;
mod event_loop;
mod grid_event;
mod handlers;
pub mod models;
pub mod shells;
pub mod state;
pub mod utils;

pub use compare::compare_items;
pub use config::{Config, FolderPosition, Settings};
pub use grid_event::GridEvent;
pub use handlers::REORDER_DELAY;
pub use models::{Folder, GridItem, ItemKind, Manager};
pub use shells::GridShell;
pub use state::State;
