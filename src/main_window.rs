use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{
    APP_DISPLAY_NAME, LOGIN_DOCUMENT_PATH, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL,
    MAIN_WINDOW_WIDTH,
};

pub(crate) fn get_main_window(app_handle: &AppHandle) -> Option<WebviewWindow> {
    app_handle.get_webview_window(MAIN_WINDOW_LABEL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CreateMainWindowDecision {
    Create,
    RefuseBecauseAlreadyExists,
}

fn decide_create_main_window(main_window_exists: bool) -> CreateMainWindowDecision {
    if main_window_exists {
        CreateMainWindowDecision::RefuseBecauseAlreadyExists
    } else {
        CreateMainWindowDecision::Create
    }
}

/// Creates the single main window and loads the login document into it.
pub(crate) fn create_main_window(app_handle: &AppHandle) -> Result<WebviewWindow, String> {
    match decide_create_main_window(get_main_window(app_handle).is_some()) {
        CreateMainWindowDecision::RefuseBecauseAlreadyExists => {
            return Err(format!(
                "Main window '{MAIN_WINDOW_LABEL}' already exists; refusing to create a second one."
            ));
        }
        CreateMainWindowDecision::Create => {}
    }

    WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App(LOGIN_DOCUMENT_PATH.into()),
    )
    .title(APP_DISPLAY_NAME)
    .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
    .resizable(false)
    .center()
    .build()
    .map_err(|error| format!("Failed to create main window: {error}"))
}

pub(crate) fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = get_main_window(app_handle) else {
        log("reload_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.eval("window.location.reload()") {
        log(&format!("failed to reload main window: {error}"));
    }
}

pub(crate) fn toggle_main_window_devtools<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = get_main_window(app_handle) else {
        log("toggle_main_window_devtools skipped: main window not found");
        return;
    };

    if window.is_devtools_open() {
        window.close_devtools();
    } else {
        window.open_devtools();
    }
}

pub(crate) fn focus_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = get_main_window(app_handle) else {
        log("focus_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}
