//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core,input,store,term,types}`
//! and hosts the pieces that glue them together for the terminal binary:
//! [`app`] (best score and goal-notice policy), [`config`] (CLI/env) and
//! [`logging`].

pub mod app;
pub mod config;
pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_store as store;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
