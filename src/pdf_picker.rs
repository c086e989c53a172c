use std::path::Path;

use tauri::{AppHandle, Emitter};
use tauri_plugin_dialog::DialogExt;

use crate::{MAIN_WINDOW_LABEL, PDF_SELECTED_EVENT};

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct PdfSelectedPayload {
    pub(crate) path: String,
}

pub(crate) fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("pdf"))
}

/// Asks the user for a PDF and forwards the choice to the main window.
pub(crate) fn select_pdf<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Send + 'static,
{
    let emit_handle = app_handle.clone();
    app_handle
        .dialog()
        .file()
        .add_filter("PDF", &["pdf"])
        .pick_file(move |file_path| {
            let Some(file_path) = file_path else {
                log("pdf selection cancelled");
                return;
            };
            let path = match file_path.into_path() {
                Ok(path) => path,
                Err(error) => {
                    log(&format!("selected pdf is not a local file: {error}"));
                    return;
                }
            };
            if !is_pdf_path(&path) {
                log(&format!("ignoring non-pdf selection: {}", path.display()));
                return;
            }

            let payload = PdfSelectedPayload {
                path: path.display().to_string(),
            };
            if let Err(error) = emit_handle.emit_to(MAIN_WINDOW_LABEL, PDF_SELECTED_EVENT, payload) {
                log(&format!("failed to emit {PDF_SELECTED_EVENT}: {error}"));
                return;
            }
            log(&format!("pdf selected: {}", path.display()));
        });
}
