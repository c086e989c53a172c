//! Data-only description of the application menu.
//!
//! The menu is rebuilt from [`MenuInputs`] whenever they change; nothing here
//! touches Tauri, so `menu_setup` owns the native rendering and
//! `menu_handler` owns the behavior behind each [`MenuAction`].

use crate::{menu_actions::MenuAction, BuildMode, MenuInputs, Platform, APP_DISPLAY_NAME};

pub(crate) const UPLOAD_GROUP_LABEL: &str = "Upload";
pub(crate) const PDF_GROUP_LABEL: &str = "PDF";
pub(crate) const DEV_TOOLS_GROUP_LABEL: &str = "Dev Tools";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuRole {
    Reload,
}

impl MenuRole {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Reload => "Reload",
        }
    }

    pub(crate) fn accelerator(self) -> &'static str {
        match self {
            Self::Reload => "CmdOrCtrl+R",
        }
    }

    pub(crate) fn action(self) -> MenuAction {
        match self {
            Self::Reload => MenuAction::Reload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuEntry {
    Action {
        action: MenuAction,
        label: &'static str,
        accelerator: Option<&'static str>,
    },
    Role(MenuRole),
}

impl MenuEntry {
    fn action(action: MenuAction, label: &'static str, accelerator: Option<&'static str>) -> Self {
        Self::Action {
            action,
            label,
            accelerator,
        }
    }

    pub(crate) fn menu_action(&self) -> MenuAction {
        match self {
            Self::Action { action, .. } => *action,
            Self::Role(role) => role.action(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuGroup {
    pub(crate) label: String,
    pub(crate) items: Vec<MenuEntry>,
}

impl MenuGroup {
    fn new(label: impl Into<String>, items: Vec<MenuEntry>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuDescription {
    pub(crate) groups: Vec<MenuGroup>,
}

impl MenuDescription {
    #[cfg(test)]
    pub(crate) fn group(&self, label: &str) -> Option<&MenuGroup> {
        self.groups.iter().find(|group| group.label == label)
    }

    pub(crate) fn actions(&self) -> impl Iterator<Item = MenuAction> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.items.iter().map(MenuEntry::menu_action))
    }
}

type GroupPredicate = fn(&MenuInputs) -> bool;
type GroupBuilder = fn(&str) -> MenuGroup;

// Evaluated first: the macOS application menu slot is always the leftmost group.
const LEADING_RULES: &[(GroupPredicate, GroupBuilder)] = &[(is_macos, macos_app_menu_group)];

const BODY_RULES: &[(GroupPredicate, GroupBuilder)] = &[
    (always, app_group),
    (is_authenticated, upload_group),
    (is_authenticated, pdf_group),
    (is_development, dev_tools_group),
];

fn always(_: &MenuInputs) -> bool {
    true
}

fn is_macos(inputs: &MenuInputs) -> bool {
    inputs.platform == Platform::MacOs
}

fn is_authenticated(inputs: &MenuInputs) -> bool {
    inputs.authenticated
}

fn is_development(inputs: &MenuInputs) -> bool {
    inputs.build_mode == BuildMode::Development
}

// macOS takes the first submenu as the application menu, so it stays empty.
fn macos_app_menu_group(_: &str) -> MenuGroup {
    MenuGroup::new(APP_DISPLAY_NAME, Vec::new())
}

fn app_group(app_name: &str) -> MenuGroup {
    MenuGroup::new(
        app_name,
        vec![MenuEntry::action(
            MenuAction::Quit,
            "Quit",
            Some("CmdOrCtrl+Q"),
        )],
    )
}

fn upload_group(_: &str) -> MenuGroup {
    MenuGroup::new(
        UPLOAD_GROUP_LABEL,
        vec![MenuEntry::action(
            MenuAction::UploadRecording,
            "Upload recording",
            None,
        )],
    )
}

fn pdf_group(_: &str) -> MenuGroup {
    MenuGroup::new(
        PDF_GROUP_LABEL,
        vec![MenuEntry::action(
            MenuAction::OpenPdf,
            "Open",
            Some("CmdOrCtrl+O"),
        )],
    )
}

fn dev_tools_group(_: &str) -> MenuGroup {
    MenuGroup::new(
        DEV_TOOLS_GROUP_LABEL,
        vec![
            MenuEntry::action(MenuAction::ToggleDevTools, "Toggle", Some("CmdOrCtrl+I")),
            MenuEntry::Role(MenuRole::Reload),
        ],
    )
}

pub(crate) fn build_menu_description(inputs: MenuInputs, app_name: &str) -> MenuDescription {
    let groups = LEADING_RULES
        .iter()
        .chain(BODY_RULES)
        .filter(|(applies, _)| applies(&inputs))
        .map(|(_, build_group)| build_group(app_name))
        .collect();

    MenuDescription { groups }
}
