use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{runtime_paths, BuildMode, Platform, BUILD_MODE_ENV, DESKTOP_CONFIG_FILE};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DesktopConfigFile {
    pub(crate) build_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StartupConfig {
    pub(crate) build_mode: BuildMode,
    pub(crate) platform: Platform,
    pub(crate) root_dir: Option<PathBuf>,
}

impl StartupConfig {
    /// Resolves the process configuration. Called once, before the Tauri builder runs.
    pub(crate) fn resolve<F>(log: F) -> Self
    where
        F: Fn(&str),
    {
        let root_dir = runtime_paths::default_packaged_root_dir();
        let config_file = read_desktop_config(root_dir.as_deref(), &log);
        let build_mode = resolve_build_mode(
            env::var(BUILD_MODE_ENV).ok().as_deref(),
            config_file.build_mode.as_deref(),
            BuildMode::compiled_default(),
            &log,
        );

        Self {
            build_mode,
            platform: Platform::current(),
            root_dir,
        }
    }
}

pub(crate) fn parse_build_mode(raw: &str) -> Option<BuildMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "development" | "dev" => Some(BuildMode::Development),
        "production" | "prod" => Some(BuildMode::Production),
        _ => None,
    }
}

pub(crate) fn resolve_build_mode<F>(
    env_value: Option<&str>,
    config_value: Option<&str>,
    compiled_default: BuildMode,
    log: F,
) -> BuildMode
where
    F: Fn(&str),
{
    for (source, value) in [(BUILD_MODE_ENV, env_value), (DESKTOP_CONFIG_FILE, config_value)] {
        let Some(raw) = value else {
            continue;
        };
        match parse_build_mode(raw) {
            Some(mode) => return mode,
            None => log(&format!("ignoring unrecognized build mode '{raw}' from {source}")),
        }
    }

    compiled_default
}

fn desktop_config_path(root_dir: Option<&Path>) -> Option<PathBuf> {
    root_dir.map(|root| root.join(DESKTOP_CONFIG_FILE))
}

pub(crate) fn read_desktop_config<F>(root_dir: Option<&Path>, log: F) -> DesktopConfigFile
where
    F: Fn(&str),
{
    let Some(config_path) = desktop_config_path(root_dir) else {
        return DesktopConfigFile::default();
    };

    let raw = match fs::read_to_string(&config_path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return DesktopConfigFile::default();
        }
        Err(error) => {
            log(&format!(
                "failed to read desktop config {}: {}",
                config_path.display(),
                error
            ));
            return DesktopConfigFile::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|error| {
        log(&format!(
            "failed to parse desktop config {}: {}",
            config_path.display(),
            error
        ));
        DesktopConfigFile::default()
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, fs};

    use super::*;

    #[test]
    fn parse_build_mode_accepts_short_and_long_forms() {
        assert_eq!(parse_build_mode(" Development "), Some(BuildMode::Development));
        assert_eq!(parse_build_mode("dev"), Some(BuildMode::Development));
        assert_eq!(parse_build_mode("PROD"), Some(BuildMode::Production));
        assert_eq!(parse_build_mode("staging"), None);
    }

    #[test]
    fn resolve_build_mode_prefers_env_over_config_file() {
        let mode = resolve_build_mode(
            Some("development"),
            Some("production"),
            BuildMode::Production,
            |_| {},
        );
        assert_eq!(mode, BuildMode::Development);
    }

    #[test]
    fn resolve_build_mode_skips_invalid_values_and_logs_them() {
        let messages = RefCell::new(Vec::new());
        let mode = resolve_build_mode(
            Some("nightly"),
            Some("dev"),
            BuildMode::Production,
            |message| messages.borrow_mut().push(message.to_string()),
        );
        assert_eq!(mode, BuildMode::Development);
        assert_eq!(messages.borrow().len(), 1);
        assert!(messages.borrow()[0].contains("nightly"));
    }

    #[test]
    fn resolve_build_mode_uses_compiled_default_when_unset() {
        assert_eq!(
            resolve_build_mode(None, None, BuildMode::Production, |_| {}),
            BuildMode::Production
        );
    }

    #[test]
    fn read_desktop_config_reads_build_mode_field() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        fs::write(
            temp_dir.path().join(DESKTOP_CONFIG_FILE),
            r#"{ "buildMode": "development" }"#,
        )
        .expect("write config");

        let config = read_desktop_config(Some(temp_dir.path()), |_| {});
        assert_eq!(config.build_mode.as_deref(), Some("development"));
    }

    #[test]
    fn read_desktop_config_falls_back_to_default_on_missing_or_invalid_file() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        assert!(read_desktop_config(Some(temp_dir.path()), |_| {})
            .build_mode
            .is_none());

        fs::write(temp_dir.path().join(DESKTOP_CONFIG_FILE), "not json").expect("write config");
        let logged = RefCell::new(false);
        let config = read_desktop_config(Some(temp_dir.path()), |_| *logged.borrow_mut() = true);
        assert!(config.build_mode.is_none());
        assert!(*logged.borrow());
    }
}
