use std::sync::atomic::{AtomicBool, Ordering};

use crate::{exit_state::ExitState, startup_config::StartupConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub(crate) fn compiled_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Platform {
    MacOs,
    Other,
}

impl Platform {
    pub(crate) fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

/// Snapshot of everything the application menu depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuInputs {
    pub(crate) authenticated: bool,
    pub(crate) build_mode: BuildMode,
    pub(crate) platform: Platform,
}

/// Process-wide application context, created once in `app_runtime::run` and
/// handed to Tauri as managed state.
#[derive(Debug)]
pub(crate) struct AppContext {
    pub(crate) config: StartupConfig,
    authenticated: AtomicBool,
    started: AtomicBool,
    exit_state: ExitState,
}

impl AppContext {
    pub(crate) fn new(config: StartupConfig) -> Self {
        Self {
            config,
            authenticated: AtomicBool::new(false),
            started: AtomicBool::new(false),
            exit_state: ExitState::default(),
        }
    }

    /// Returns `true` only for the first caller; the startup sequence runs once.
    pub(crate) fn try_mark_started(&self) -> bool {
        self.started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Acquire)
    }

    /// Returns `true` when this call performed the false -> true transition.
    pub(crate) fn mark_authenticated(&self) -> bool {
        self.authenticated
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.exit_state.is_quitting()
    }

    pub(crate) fn mark_quitting(&self) -> bool {
        self.exit_state.mark_quitting()
    }

    pub(crate) fn menu_inputs(&self) -> MenuInputs {
        MenuInputs {
            authenticated: self.is_authenticated(),
            build_mode: self.config.build_mode,
            platform: self.config.platform,
        }
    }

    pub(crate) fn session_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: self.is_authenticated(),
            build_mode: self.config.build_mode.as_str(),
            quitting: self.is_quitting(),
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionSnapshot {
    pub(crate) authenticated: bool,
    pub(crate) build_mode: &'static str,
    pub(crate) quitting: bool,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordingEnvironment {
    pub(crate) ffmpeg_path: Option<String>,
    pub(crate) recordings_dir: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct BridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl BridgeResult {
    pub(crate) fn ok() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}

impl From<Result<(), String>> for BridgeResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(error) => Self::failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context(build_mode: BuildMode) -> AppContext {
        AppContext::new(StartupConfig {
            build_mode,
            platform: Platform::Other,
            root_dir: None,
        })
    }

    #[test]
    fn try_mark_started_succeeds_only_once() {
        let context = test_context(BuildMode::Production);
        assert!(context.try_mark_started());
        assert!(!context.try_mark_started());
    }

    #[test]
    fn mark_authenticated_is_a_one_way_transition() {
        let context = test_context(BuildMode::Production);
        assert!(!context.is_authenticated());
        assert!(context.mark_authenticated());
        assert!(!context.mark_authenticated());
        assert!(context.is_authenticated());
    }

    #[test]
    fn menu_inputs_reflect_config_and_session() {
        let context = test_context(BuildMode::Development);
        assert_eq!(
            context.menu_inputs(),
            MenuInputs {
                authenticated: false,
                build_mode: BuildMode::Development,
                platform: Platform::Other,
            }
        );

        context.mark_authenticated();
        assert!(context.menu_inputs().authenticated);
    }

    #[test]
    fn session_snapshot_serializes_camel_case() {
        let context = test_context(BuildMode::Production);
        context.mark_quitting();
        let json = serde_json::to_value(context.session_snapshot()).expect("serialize snapshot");
        assert_eq!(
            json,
            serde_json::json!({
                "authenticated": false,
                "buildMode": "production",
                "quitting": true,
            })
        );
    }

    #[test]
    fn bridge_result_from_result_carries_reason() {
        let result = BridgeResult::from(Err::<(), _>("menu failed".to_string()));
        assert!(!result.ok);
        assert_eq!(result.reason.as_deref(), Some("menu failed"));
        assert!(BridgeResult::from(Ok(())).ok);
    }
}
