//! Contact picker use case.

pub mod picker;

pub use picker::{ContactPicker, ContactPickerSession};
