use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, media_tools::MediaToolsState, pdf_picker, recording::RecordingState,
    session_bridge, upload_window, AppContext, BridgeResult, RecordingEnvironment,
    SessionSnapshot,
};

fn ensure_authenticated(app_handle: &AppHandle) -> Result<(), String> {
    let authenticated = app_handle
        .try_state::<AppContext>()
        .map(|context| context.is_authenticated())
        .unwrap_or(false);
    if authenticated {
        Ok(())
    } else {
        Err("Login required.".to_string())
    }
}

#[tauri::command]
pub(crate) fn desktop_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn desktop_bridge_get_session_state(
    app_handle: AppHandle,
) -> Result<SessionSnapshot, String> {
    app_handle
        .try_state::<AppContext>()
        .map(|context| context.session_snapshot())
        .ok_or_else(|| "Application context is not initialized.".to_string())
}

#[tauri::command]
pub(crate) fn desktop_bridge_get_recording_environment(app_handle: AppHandle) -> RecordingEnvironment {
    RecordingEnvironment {
        ffmpeg_path: app_handle
            .try_state::<MediaToolsState>()
            .and_then(|state| state.ffmpeg_path.as_ref().map(|path| path.display().to_string())),
        recordings_dir: app_handle
            .try_state::<RecordingState>()
            .map(|state| state.recordings_dir.display().to_string()),
    }
}

#[tauri::command]
pub(crate) fn desktop_bridge_complete_login(app_handle: AppHandle, username: String) -> BridgeResult {
    let result = session_bridge::complete_login(&app_handle, &username, append_desktop_log);
    if let Err(error) = &result {
        append_desktop_log(&format!("login completion failed: {error}"));
    }
    result.into()
}

#[tauri::command]
pub(crate) async fn desktop_bridge_open_upload_window(app_handle: AppHandle) -> BridgeResult {
    ensure_authenticated(&app_handle)
        .and_then(|()| upload_window::open_upload_window(&app_handle, append_desktop_log))
        .into()
}

/// Opens the PDF picker without waiting for the user. `ok` only means the
/// dialog was requested; the chosen file, if any, arrives later as a
/// `pdf-selected` event on the main window. Cancelling emits nothing.
#[tauri::command]
pub(crate) fn desktop_bridge_select_pdf(app_handle: AppHandle) -> BridgeResult {
    if let Err(error) = ensure_authenticated(&app_handle) {
        return BridgeResult::failed(error);
    }

    pdf_picker::select_pdf(&app_handle, append_desktop_log);
    BridgeResult::ok()
}
