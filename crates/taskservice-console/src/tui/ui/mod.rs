/*
[INPUT]:  Controller state and rendering snapshots for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding panels or dialogs
*/

mod filter_bar;
mod layout;
mod logs;
mod task_table;

pub mod modal;

pub(in crate::tui) use filter_bar::{draw_error_banner, draw_filter_bar};
pub(in crate::tui) use layout::draw_tabs;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use task_table::draw_task_table;
