/*
[INPUT]:  Crate modules for controller state, labels, and the terminal UI
[OUTPUT]: Public taskservice-console crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod app;
pub mod labels;
pub mod tui;

// Re-export the controller types integration tests drive directly
pub use app::{ActiveModal, AppEvent, AppState, PAGE_LIMIT};
