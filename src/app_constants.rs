pub(crate) const APP_DISPLAY_NAME: &str = "The Unseen";

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1000.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 600.0;
pub(crate) const LOGIN_DOCUMENT_PATH: &str = "login/login.html";

pub(crate) const UPLOAD_WINDOW_LABEL: &str = "upload";
pub(crate) const UPLOAD_WINDOW_WIDTH: f64 = 640.0;
pub(crate) const UPLOAD_WINDOW_HEIGHT: f64 = 420.0;
pub(crate) const UPLOAD_DOCUMENT_PATH: &str = "upload/upload.html";

pub(crate) const PDF_SELECTED_EVENT: &str = "pdf-selected";

pub(crate) const ROOT_DIR_ENV: &str = "UNSEEN_ROOT";
pub(crate) const BUILD_MODE_ENV: &str = "UNSEEN_BUILD_MODE";
pub(crate) const DESKTOP_LOG_PATH_ENV: &str = "UNSEEN_DESKTOP_LOG_PATH";
pub(crate) const FFMPEG_PATH_ENV: &str = "UNSEEN_FFMPEG_PATH";

pub(crate) const DEFAULT_ROOT_DIR_NAME: &str = ".unseen-desktop";
pub(crate) const DESKTOP_CONFIG_FILE: &str = "desktop_config.json";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const RECORDINGS_DIR_NAME: &str = "recordings";
