#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_lifecycle;
mod app_menu;
mod app_runtime;
mod app_types;
mod desktop_bridge_commands;
mod exit_state;
mod logging;
mod main_window;
mod media_tools;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod pdf_picker;
mod recording;
mod runtime_paths;
mod session_bridge;
mod startup_config;
mod upload_window;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{append_desktop_log, append_shutdown_log, append_startup_log};
pub(crate) use app_types::{
    AppContext, BridgeResult, BuildMode, MenuInputs, Platform, RecordingEnvironment,
    SessionSnapshot,
};

fn main() {
    app_runtime::run();
}
