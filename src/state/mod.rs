pub mod controller;
pub mod render;
pub mod store;

pub use controller::{Command, Controller, Outcome};
pub use render::NoteListView;
