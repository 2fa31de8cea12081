pub mod app;
pub mod note_form;
pub mod note_list;
pub mod panel_toggle;

pub use app::App;
