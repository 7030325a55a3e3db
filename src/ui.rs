//! Ratatui front-end for the student records manager. The table of students is
//! always on screen; adding, editing, deleting, and searching happen in modal
//! dialogs layered over it.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
