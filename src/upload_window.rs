use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};

use crate::{
    UPLOAD_DOCUMENT_PATH, UPLOAD_WINDOW_HEIGHT, UPLOAD_WINDOW_LABEL, UPLOAD_WINDOW_WIDTH,
};

/// Opens the upload window, or focuses it when it is already open.
pub(crate) fn open_upload_window<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    if let Some(window) = app_handle.get_webview_window(UPLOAD_WINDOW_LABEL) {
        log("upload window already open, focusing it");
        return window
            .set_focus()
            .map_err(|error| format!("Failed to focus upload window: {error}"));
    }

    WebviewWindowBuilder::new(
        app_handle,
        UPLOAD_WINDOW_LABEL,
        WebviewUrl::App(UPLOAD_DOCUMENT_PATH.into()),
    )
    .title("Upload recording")
    .inner_size(UPLOAD_WINDOW_WIDTH, UPLOAD_WINDOW_HEIGHT)
    .resizable(false)
    .center()
    .build()
    .map_err(|error| format!("Failed to create upload window: {error}"))?;

    log("upload window opened");
    Ok(())
}
