use std::{path::PathBuf, sync::OnceLock};

use crate::{logging, runtime_paths, DESKTOP_LOG_FILE};

fn desktop_log_path() -> &'static PathBuf {
    static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
    LOG_PATH.get_or_init(|| {
        logging::resolve_desktop_log_path(
            runtime_paths::default_packaged_root_dir(),
            DESKTOP_LOG_FILE,
        )
    })
}

fn append_log(category: &str, message: &str) {
    if cfg!(debug_assertions) {
        eprintln!("[{category}] {message}");
    }
    if let Err(error) = logging::append_log_line(desktop_log_path(), category, message) {
        eprintln!("{error}");
    }
}

pub(crate) fn append_desktop_log(message: &str) {
    append_log(logging::LOG_CATEGORY_DESKTOP, message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_log(logging::LOG_CATEGORY_STARTUP, message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_log(logging::LOG_CATEGORY_SHUTDOWN, message);
}

pub(crate) fn current_desktop_log_path() -> PathBuf {
    desktop_log_path().clone()
}
