//! Per-layout edit/view mode

pub mod controller;

pub use controller::{EditModeController, EditModeHandle};
