use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, SecondsFormat};

use crate::DESKTOP_LOG_PATH_ENV;

pub(crate) const LOG_CATEGORY_DESKTOP: &str = "desktop";
pub(crate) const LOG_CATEGORY_STARTUP: &str = "startup";
pub(crate) const LOG_CATEGORY_SHUTDOWN: &str = "shutdown";

pub(crate) fn resolve_desktop_log_path(
    packaged_root_dir: Option<PathBuf>,
    log_file_name: &str,
) -> PathBuf {
    if let Ok(path) = env::var(DESKTOP_LOG_PATH_ENV) {
        let path = PathBuf::from(path.trim());
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    packaged_root_dir
        .map(|root| root.join("logs"))
        .unwrap_or_else(|| env::temp_dir().join("unseen-desktop"))
        .join(log_file_name)
}

pub(crate) fn format_log_line(timestamp: DateTime<Local>, category: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, false),
        category,
        message.trim_end()
    )
}

pub(crate) fn append_log_line(path: &Path, category: &str, message: &str) -> Result<(), String> {
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let line = format_log_line(Local::now(), category, message);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;
    file.write_all(line.as_bytes())
        .map_err(|error| format!("Failed to write log file {}: {}", path.display(), error))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::{Local, TimeZone};

    use super::*;

    #[test]
    fn format_log_line_includes_category_and_trims_trailing_whitespace() {
        let timestamp = Local.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let line = format_log_line(timestamp, LOG_CATEGORY_STARTUP, "window created \n");

        assert!(line.starts_with("[2024-05-01T08:30:00.000"));
        assert!(line.ends_with("[startup] window created\n"));
    }

    #[test]
    fn append_log_line_creates_parent_directory_and_appends() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let log_path = temp_dir.path().join("logs").join("desktop.log");

        append_log_line(&log_path, LOG_CATEGORY_DESKTOP, "first").expect("first append");
        append_log_line(&log_path, LOG_CATEGORY_SHUTDOWN, "second").expect("second append");

        let contents = fs::read_to_string(&log_path).expect("read log file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[desktop] first"));
        assert!(lines[1].ends_with("[shutdown] second"));
    }

    #[test]
    fn resolve_desktop_log_path_places_log_under_root_logs_dir() {
        if std::env::var(crate::DESKTOP_LOG_PATH_ENV).is_ok() {
            return;
        }
        let path = resolve_desktop_log_path(
            Some(std::path::PathBuf::from("/opt/unseen")),
            "desktop.log",
        );
        assert_eq!(
            path,
            std::path::PathBuf::from("/opt/unseen")
                .join("logs")
                .join("desktop.log")
        );
    }
}
