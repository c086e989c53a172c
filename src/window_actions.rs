use tauri::{AppHandle, Manager, WindowEvent};

use crate::{main_window, AppContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainWindowEventDecision {
    Ignore,
    ExitProcess,
}

fn decide_main_window_event(window_destroyed: bool, already_quitting: bool) -> MainWindowEventDecision {
    if window_destroyed && !already_quitting {
        MainWindowEventDecision::ExitProcess
    } else {
        MainWindowEventDecision::Ignore
    }
}

/// Exits the process once the main window has been destroyed.
pub fn register_main_window_close_handler<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str) + Send + Sync + 'static,
{
    let window = main_window::get_main_window(app_handle)
        .ok_or_else(|| "Cannot register close handler: main window not found.".to_string())?;

    let app_handle = app_handle.clone();
    window.on_window_event(move |event| {
        let window_destroyed = matches!(event, WindowEvent::Destroyed);
        let context = app_handle.state::<AppContext>();
        match decide_main_window_event(window_destroyed, context.is_quitting()) {
            MainWindowEventDecision::Ignore => {}
            MainWindowEventDecision::ExitProcess => {
                context.mark_quitting();
                log("main window closed, exiting desktop process");
                app_handle.exit(0);
            }
        }
    });
    Ok(())
}

pub fn toggle_devtools<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::toggle_main_window_devtools(app_handle, log);
}

pub fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::reload_main_window(app_handle, log);
}

pub fn focus_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::focus_main_window(app_handle, log);
}
