use tauri::{AppHandle, Manager};

use crate::{
    main_window, media_tools, menu_setup, recording, session_bridge, window_actions,
    AppContext, MenuInputs,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StartupStep {
    CreateMainWindow,
    InitSession,
    RegisterCloseHandler,
    InstallPreLoginMenu,
    InitMedia,
    InitRecording,
}

impl StartupStep {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::CreateMainWindow => "create main window",
            Self::InitSession => "init session",
            Self::RegisterCloseHandler => "register close handler",
            Self::InstallPreLoginMenu => "install pre-login menu",
            Self::InitMedia => "init media",
            Self::InitRecording => "init recording",
        }
    }

    /// A failing critical step aborts startup; the rest are logged and skipped.
    pub(crate) fn is_critical(self) -> bool {
        matches!(
            self,
            Self::CreateMainWindow | Self::RegisterCloseHandler | Self::InstallPreLoginMenu
        )
    }
}

pub(crate) const STARTUP_SEQUENCE: [StartupStep; 6] = [
    StartupStep::CreateMainWindow,
    StartupStep::InitSession,
    StartupStep::RegisterCloseHandler,
    StartupStep::InstallPreLoginMenu,
    StartupStep::InitMedia,
    StartupStep::InitRecording,
];

pub(crate) trait StartupHost {
    fn run_step(&mut self, step: StartupStep) -> Result<(), String>;
}

pub(crate) fn run_startup_sequence<H, F>(host: &mut H, log: F) -> Result<(), String>
where
    H: StartupHost,
    F: Fn(&str),
{
    for step in STARTUP_SEQUENCE {
        match host.run_step(step) {
            Ok(()) => log(&format!("startup step finished: {}", step.name())),
            Err(error) if step.is_critical() => {
                log(&format!("startup step '{}' failed: {}", step.name(), error));
                return Err(format!("Startup step '{}' failed: {}", step.name(), error));
            }
            Err(error) => log(&format!(
                "startup step '{}' failed, continuing: {}",
                step.name(),
                error
            )),
        }
    }
    Ok(())
}

struct TauriStartupHost<'a, F> {
    app_handle: &'a AppHandle,
    log: F,
}

impl<F> StartupHost for TauriStartupHost<'_, F>
where
    F: Fn(&str) + Copy + Send + Sync + 'static,
{
    fn run_step(&mut self, step: StartupStep) -> Result<(), String> {
        let log = self.log;
        match step {
            StartupStep::CreateMainWindow => {
                main_window::create_main_window(self.app_handle).map(|_| ())
            }
            StartupStep::InitSession => session_bridge::init(self.app_handle, log),
            StartupStep::RegisterCloseHandler => {
                window_actions::register_main_window_close_handler(self.app_handle, log)
            }
            StartupStep::InstallPreLoginMenu => menu_setup::install_app_menu(self.app_handle, log),
            StartupStep::InitMedia => media_tools::init(self.app_handle, log),
            StartupStep::InitRecording => recording::init(self.app_handle, log),
        }
    }
}

/// Runs the startup sequence once the platform is ready. Later calls are no-ops.
pub fn start<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str) + Copy + Send + Sync + 'static,
{
    let context = app_handle
        .try_state::<AppContext>()
        .ok_or_else(|| "Application context is not initialized.".to_string())?;
    if !context.try_mark_started() {
        log("start ignored: application already started");
        return Ok(());
    }

    log(&format!(
        "starting application: build_mode={} platform={:?}",
        context.config.build_mode.as_str(),
        context.config.platform
    ));
    let mut host = TauriStartupHost { app_handle, log };
    run_startup_sequence(&mut host, log)
}

/// Installs the post-login menu through `install`, then marks the session
/// authenticated. A failed or skipped install leaves the session unauthenticated.
/// Returns `true` when this call performed the login transition.
pub(crate) fn apply_post_login_menu<I>(context: &AppContext, install: I) -> Result<bool, String>
where
    I: FnOnce(MenuInputs) -> Result<bool, String>,
{
    let inputs = MenuInputs {
        authenticated: true,
        ..context.menu_inputs()
    };
    let installed = install(inputs)?;
    Ok(installed && context.mark_authenticated())
}

/// Switches the application menu to the post-login variant.
pub fn set_real_main_menu<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let context = app_handle
        .try_state::<AppContext>()
        .ok_or_else(|| "Application context is not initialized.".to_string())?;
    let logged_in = apply_post_login_menu(&context, |inputs| {
        menu_setup::install_menu_for_inputs(app_handle, inputs, &log)
    })?;
    if !logged_in {
        log("post-login menu not newly applied: session already authenticated or quitting");
    }
    Ok(())
}
