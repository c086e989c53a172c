use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, append_shutdown_log, menu_actions, pdf_picker, upload_window,
    window_actions, AppContext,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEventDecision {
    IgnoreUnknownMenuId,
    IgnoreBecauseQuitting(menu_actions::MenuAction),
    Dispatch(menu_actions::MenuAction),
}

fn decide_menu_event(action: Option<menu_actions::MenuAction>, quitting: bool) -> MenuEventDecision {
    match action {
        None => MenuEventDecision::IgnoreUnknownMenuId,
        Some(action) if quitting => MenuEventDecision::IgnoreBecauseQuitting(action),
        Some(action) => MenuEventDecision::Dispatch(action),
    }
}

pub fn handle_app_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let quitting = app_handle
        .try_state::<AppContext>()
        .map(|context| context.is_quitting())
        .unwrap_or(false);
    let action = match decide_menu_event(menu_actions::action_from_menu_id(menu_id), quitting) {
        MenuEventDecision::IgnoreUnknownMenuId => return,
        MenuEventDecision::IgnoreBecauseQuitting(action) => {
            append_desktop_log(&format!(
                "menu action {action:?} ignored: application is quitting"
            ));
            return;
        }
        MenuEventDecision::Dispatch(action) => action,
    };

    match action {
        menu_actions::MenuAction::Quit => {
            if let Some(context) = app_handle.try_state::<AppContext>() {
                context.mark_quitting();
            }
            append_shutdown_log("menu quit requested, exiting desktop process");
            app_handle.exit(0);
        }
        menu_actions::MenuAction::UploadRecording => {
            // Building a webview inside the synchronous menu callback deadlocks on Windows.
            let app_handle_cloned = app_handle.clone();
            tauri::async_runtime::spawn(async move {
                if let Err(error) =
                    upload_window::open_upload_window(&app_handle_cloned, append_desktop_log)
                {
                    append_desktop_log(&format!("failed to open upload window: {error}"));
                }
            });
        }
        menu_actions::MenuAction::OpenPdf => {
            pdf_picker::select_pdf(app_handle, append_desktop_log);
        }
        menu_actions::MenuAction::ToggleDevTools => {
            window_actions::toggle_devtools(app_handle, append_desktop_log);
        }
        menu_actions::MenuAction::Reload => {
            window_actions::reload_main_window(app_handle, append_desktop_log);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{decide_menu_event, MenuEventDecision};
    use crate::menu_actions::MenuAction;

    #[test]
    fn decide_menu_event_dispatches_known_actions_while_running() {
        for action in [
            MenuAction::Quit,
            MenuAction::UploadRecording,
            MenuAction::OpenPdf,
            MenuAction::ToggleDevTools,
            MenuAction::Reload,
        ] {
            assert_eq!(
                decide_menu_event(Some(action), false),
                MenuEventDecision::Dispatch(action)
            );
        }
    }

    #[test]
    fn decide_menu_event_ignores_every_action_after_quitting() {
        assert_eq!(
            decide_menu_event(Some(MenuAction::UploadRecording), true),
            MenuEventDecision::IgnoreBecauseQuitting(MenuAction::UploadRecording)
        );
        assert_eq!(
            decide_menu_event(Some(MenuAction::Quit), true),
            MenuEventDecision::IgnoreBecauseQuitting(MenuAction::Quit)
        );
    }

    #[test]
    fn decide_menu_event_ignores_unknown_menu_ids() {
        assert_eq!(
            decide_menu_event(None, false),
            MenuEventDecision::IgnoreUnknownMenuId
        );
        assert_eq!(
            decide_menu_event(None, true),
            MenuEventDecision::IgnoreUnknownMenuId
        );
    }
}
