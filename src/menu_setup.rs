use tauri::{
    menu::{IsMenuItem, Menu, MenuItem, Submenu},
    AppHandle, Manager,
};

use crate::{
    app_menu::{self, MenuDescription, MenuEntry, MenuGroup},
    AppContext, MenuInputs,
};

fn build_menu_item(app_handle: &AppHandle, entry: &MenuEntry) -> Result<MenuItem<tauri::Wry>, String> {
    let (label, accelerator) = match entry {
        MenuEntry::Action {
            label, accelerator, ..
        } => (*label, *accelerator),
        MenuEntry::Role(role) => (role.label(), Some(role.accelerator())),
    };
    let menu_id = entry.menu_action().menu_id();

    MenuItem::with_id(app_handle, menu_id, label, true, accelerator)
        .map_err(|error| format!("Failed to create menu item {menu_id}: {error}"))
}

fn build_submenu(app_handle: &AppHandle, group: &MenuGroup) -> Result<Submenu<tauri::Wry>, String> {
    let items = group
        .items
        .iter()
        .map(|entry| build_menu_item(app_handle, entry))
        .collect::<Result<Vec<_>, _>>()?;
    let item_refs: Vec<&dyn IsMenuItem<tauri::Wry>> = items
        .iter()
        .map(|item| item as &dyn IsMenuItem<tauri::Wry>)
        .collect();

    Submenu::with_items(app_handle, &group.label, true, &item_refs)
        .map_err(|error| format!("Failed to create submenu '{}': {}", group.label, error))
}

pub(crate) fn build_native_menu(
    app_handle: &AppHandle,
    description: &MenuDescription,
) -> Result<Menu<tauri::Wry>, String> {
    let submenus = description
        .groups
        .iter()
        .map(|group| build_submenu(app_handle, group))
        .collect::<Result<Vec<_>, _>>()?;
    let submenu_refs: Vec<&dyn IsMenuItem<tauri::Wry>> = submenus
        .iter()
        .map(|submenu| submenu as &dyn IsMenuItem<tauri::Wry>)
        .collect();

    Menu::with_items(app_handle, &submenu_refs)
        .map_err(|error| format!("Failed to build application menu: {error}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuInstallDecision {
    Install,
    SkipBecauseQuitting,
}

fn decide_menu_install(quitting: bool) -> MenuInstallDecision {
    if quitting {
        MenuInstallDecision::SkipBecauseQuitting
    } else {
        MenuInstallDecision::Install
    }
}

/// Builds and installs the menu for `inputs`. Returns `Ok(false)` when the
/// install was skipped because the application is quitting.
pub(crate) fn install_menu_for_inputs<F>(
    app_handle: &AppHandle,
    inputs: MenuInputs,
    log: F,
) -> Result<bool, String>
where
    F: Fn(&str),
{
    let quitting = app_handle
        .try_state::<AppContext>()
        .map(|context| context.is_quitting())
        .ok_or_else(|| "Application context is not initialized.".to_string())?;
    match decide_menu_install(quitting) {
        MenuInstallDecision::SkipBecauseQuitting => {
            log("menu install skipped: application is quitting");
            return Ok(false);
        }
        MenuInstallDecision::Install => {}
    }

    let description = app_menu::build_menu_description(inputs, &app_handle.package_info().name);
    let menu = build_native_menu(app_handle, &description)?;
    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install application menu: {error}"))?;

    log(&format!(
        "installed application menu: authenticated={} build_mode={} groups={} items={}",
        inputs.authenticated,
        inputs.build_mode.as_str(),
        description.groups.len(),
        description.actions().count()
    ));
    Ok(true)
}

/// Rebuilds the application menu from the current session state and installs it.
pub fn install_app_menu<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let inputs = app_handle
        .try_state::<AppContext>()
        .map(|context| context.menu_inputs())
        .ok_or_else(|| "Application context is not initialized.".to_string())?;
    install_menu_for_inputs(app_handle, inputs, log).map(|_| ())
}
