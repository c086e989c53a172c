use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tauri::{AppHandle, Manager};

use crate::{AppContext, RECORDINGS_DIR_NAME};

#[derive(Debug)]
pub(crate) struct RecordingState {
    pub(crate) recordings_dir: PathBuf,
}

pub(crate) fn recordings_dir_for_root(root_dir: Option<&Path>) -> PathBuf {
    root_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| env::temp_dir().join("unseen-desktop"))
        .join(RECORDINGS_DIR_NAME)
}

pub(crate) fn ensure_recordings_dir(root_dir: Option<&Path>) -> Result<PathBuf, String> {
    let recordings_dir = recordings_dir_for_root(root_dir);
    fs::create_dir_all(&recordings_dir).map_err(|error| {
        format!(
            "Failed to create recordings directory {}: {}",
            recordings_dir.display(),
            error
        )
    })?;
    Ok(recordings_dir)
}

pub(crate) fn init<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let root_dir = app_handle
        .try_state::<AppContext>()
        .and_then(|context| context.config.root_dir.clone());
    let recordings_dir = ensure_recordings_dir(root_dir.as_deref())?;
    log(&format!(
        "recordings directory ready: {}",
        recordings_dir.display()
    ));

    if !app_handle.manage(RecordingState { recordings_dir }) {
        log("recording state already exists, skipping manage");
    }
    Ok(())
}
