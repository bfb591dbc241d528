//! Tauri Command Modules
//!
//! Central hub for all IPC commands, organized into logical groups:
//!
//! - **dialog**: native OS file dialogs (open file picker)
//! - **file_io**: dataset loading from path or uploaded bytes
//! - **dataframe**: row fetching for virtual scroll, closing datasets
//! - **resolve**: missing-value strategy selection and application
//! - **analysis**: profiling and chart-data derivation, report export
//!
//! Each command is a function decorated with `#[tauri::command]`; the
//! frontend calls these via `invoke("command_name", { args })` and return
//! values are automatically serialized to JSON.

pub mod analysis;
pub mod dataframe;
pub mod dialog;
pub mod file_io;
pub mod resolve;

// Re-export all commands for easy access in lib.rs
pub use analysis::*;
pub use dataframe::*;
pub use dialog::*;
pub use file_io::*;
pub use resolve::*;
