use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use tauri::{AppHandle, Manager};

use crate::FFMPEG_PATH_ENV;

const FFMPEG_EXECUTABLE: &str = if cfg!(target_os = "windows") {
    "ffmpeg.exe"
} else {
    "ffmpeg"
};

#[derive(Debug)]
pub(crate) struct MediaToolsState {
    pub(crate) ffmpeg_path: Option<PathBuf>,
}

pub(crate) fn resolve_ffmpeg_path(
    path_override: Option<&str>,
    search_path: Option<&OsStr>,
) -> Option<PathBuf> {
    if let Some(path) = path_override.map(str::trim).filter(|path| !path.is_empty()) {
        let path = PathBuf::from(path);
        return path.is_file().then_some(path);
    }

    env::split_paths(search_path?)
        .map(|dir| dir.join(FFMPEG_EXECUTABLE))
        .find(|candidate| candidate.is_file())
}

fn describe_ffmpeg_path(path: Option<&Path>) -> String {
    path.map(|path| path.display().to_string())
        .unwrap_or_else(|| "not found".to_string())
}

/// Locates FFmpeg for the recording pipeline. A missing binary is not fatal.
pub(crate) fn init<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let path_override = env::var(FFMPEG_PATH_ENV).ok();
    let search_path = env::var_os("PATH");
    let ffmpeg_path = resolve_ffmpeg_path(path_override.as_deref(), search_path.as_deref());

    if path_override.is_some() && ffmpeg_path.is_none() {
        log(&format!(
            "{FFMPEG_PATH_ENV} does not point to an existing file: {}",
            path_override.as_deref().unwrap_or_default()
        ));
    }
    log(&format!(
        "ffmpeg executable: {}",
        describe_ffmpeg_path(ffmpeg_path.as_deref())
    ));

    if !app_handle.manage(MediaToolsState { ffmpeg_path }) {
        log("media tools state already exists, skipping manage");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn resolve_ffmpeg_path_finds_executable_on_search_path() {
        let empty_dir = tempfile::tempdir().expect("create empty dir");
        let tools_dir = tempfile::tempdir().expect("create tools dir");
        let ffmpeg = tools_dir.path().join(FFMPEG_EXECUTABLE);
        fs::write(&ffmpeg, b"").expect("write fake ffmpeg");

        let search_path =
            env::join_paths([empty_dir.path(), tools_dir.path()]).expect("join paths");
        assert_eq!(
            resolve_ffmpeg_path(None, Some(search_path.as_os_str())),
            Some(ffmpeg)
        );
    }

    #[test]
    fn resolve_ffmpeg_path_prefers_override_and_rejects_missing_file() {
        let tools_dir = tempfile::tempdir().expect("create tools dir");
        let custom = tools_dir.path().join("custom-ffmpeg");
        fs::write(&custom, b"").expect("write fake ffmpeg");
        let override_path = custom.to_string_lossy().to_string();

        assert_eq!(resolve_ffmpeg_path(Some(override_path.as_str()), None), Some(custom));

        let missing = tools_dir.path().join("missing").to_string_lossy().to_string();
        let search_path = tools_dir.path().as_os_str();
        assert_eq!(resolve_ffmpeg_path(Some(missing.as_str()), Some(search_path)), None);
    }

    #[test]
    fn resolve_ffmpeg_path_returns_none_without_search_path() {
        assert_eq!(resolve_ffmpeg_path(None, None), None);
        assert_eq!(resolve_ffmpeg_path(Some("  "), None), None);
    }
}
