//! DataLens - Tauri Application Entry Point
//!
//! Sets up and configures the Tauri application:
//! 1. Initializes plugins (dialog, logging)
//! 2. Creates and manages session state
//! 3. Registers all IPC command handlers
//! 4. Starts the Tauri runtime
//!
//! # Architecture Overview
//!
//! ```text
//! -----------------------------------------------------------------
//! |                      Tauri Application                        |
//! |                                                               |
//! |  -------------  -------------  -----------------------------  |
//! |  |  Plugins  |  |   State   |  |     Command Handlers      |  |
//! |  |  - dialog |  |  AppState |  |  - open_file_dialog       |  |
//! |  |  - log    |  | (managed) |  |  - load_file/upload_file  |  |
//! |  -------------  -------------  |  - get_rows               |  |
//! |                                |  - apply_missing_strategy |  |
//! |                                |  - run_analysis           |  |
//! |                                -----------------------------  |
//! |                                                               |
//! |  ----------------------------------------------------------   |
//! |  |               Events (Rust -> Frontend)                |   |
//! |  |  file:loaded, file:closed, app:loading, app:error      |   |
//! |  |  dataset:resolved                                      |   |
//! |  ----------------------------------------------------------   |
//! |                                                               |
//! |  ----------------------------------------------------------   |
//! |  |             WebView (static page, vanilla JS)          |   |
//! |  |             Communicates via IPC (invoke)              |   |
//! |  ----------------------------------------------------------   |
//! -----------------------------------------------------------------
//! ```

mod commands;
pub mod events;
mod state;

use state::AppState;

/// Tauri mobile entry point attribute.
/// On desktop, it has no effect.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        // Dialog plugin: native file open/save dialogs.
        .plugin(tauri_plugin_dialog::init())
        // Register session state; available to all command handlers via
        // `State<'_, AppState>`.
        .manage(AppState::new())
        // Register all IPC commands the frontend can invoke.
        .invoke_handler(tauri::generate_handler![
            // Dialog commands
            commands::open_file_dialog,
            // File I/O commands
            commands::load_file,
            commands::upload_file,
            commands::get_file_info,
            // DataFrame commands
            commands::get_rows,
            commands::close_file,
            // Missing-value resolution commands
            commands::get_strategies,
            commands::get_selected_strategy,
            commands::set_selected_strategy,
            commands::apply_missing_strategy,
            commands::get_resolve_summary,
            // Analysis commands
            commands::run_analysis,
            commands::export_analysis_report,
        ])
        // Only enable the logging plugin in debug builds.
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            Ok(())
        })
        // generate_context!() reads tauri.conf.json at compile time.
        // This call blocks until the application exits.
        .run(tauri::generate_context!())
        .expect("Error while running Tauri application");
}
