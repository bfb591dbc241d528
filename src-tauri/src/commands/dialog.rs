//! Native File Dialog Commands
//!
//! Native OS dialogs (instead of a web-style `<input type="file">`) give a
//! familiar picker with proper file-system access on all platforms. The
//! dialog plugin requires permissions in `capabilities/default.json`.

use tauri_plugin_dialog::DialogExt;

/// Opens a native file dialog filtered for CSV files.
///
/// # Returns
///
/// - `Some(String)` - the full path to the selected file
/// - `None` - if the user cancelled the dialog
///
/// # Frontend Usage
///
/// ```typescript
/// const filePath = await invoke<string | null>("open_file_dialog");
/// if (filePath) {
///     const info = await invoke("load_file", { path: filePath });
/// }
/// ```
///
/// Uses `blocking_pick_file`, which is fine because Tauri commands run in
/// a thread pool, not on the main thread.
#[tauri::command]
pub async fn open_file_dialog(app: tauri::AppHandle) -> Option<String> {
    let file_path = app
        .dialog()
        .file()
        .add_filter("CSV Files", &["csv"])
        .blocking_pick_file();

    file_path.map(|p| p.to_string())
}
