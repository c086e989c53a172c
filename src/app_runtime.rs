use tauri::RunEvent;

use crate::{
    app_helpers, app_lifecycle, append_desktop_log, append_shutdown_log, append_startup_log,
    menu_handler, startup_config::StartupConfig, window_actions, AppContext,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        app_helpers::current_desktop_log_path().display()
    ));

    let config = StartupConfig::resolve(append_startup_log);
    append_startup_log(&format!(
        "startup config resolved: build_mode={} platform={:?} root_dir={}",
        config.build_mode.as_str(),
        config.platform,
        config
            .root_dir
            .as_deref()
            .map(|root| root.display().to_string())
            .unwrap_or_else(|| "<none>".to_string())
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _args, _cwd| {
            append_desktop_log("second instance launched, focusing main window");
            window_actions::focus_main_window(app_handle, append_desktop_log);
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(AppContext::new(config))
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::desktop_bridge_is_desktop_runtime,
            crate::desktop_bridge_commands::desktop_bridge_get_session_state,
            crate::desktop_bridge_commands::desktop_bridge_get_recording_environment,
            crate::desktop_bridge_commands::desktop_bridge_complete_login,
            crate::desktop_bridge_commands::desktop_bridge_open_upload_window,
            crate::desktop_bridge_commands::desktop_bridge_select_pdf,
        ])
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_app_menu_event(app_handle, event.id().as_ref())
        })
        .setup(|app| {
            app_lifecycle::start(app.handle(), append_startup_log)?;
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, event| {
            if let RunEvent::Exit = event {
                append_shutdown_log("desktop process exited");
            }
        });
}
