/*
[INPUT]:  Controller state, crossterm input, tracing output
[OUTPUT]: Ratatui terminal frontend for the task console
[POS]:    TUI module root
[UPDATE]: When adding TUI submodules or changing the public runtime surface
*/

mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
