pub const APP_MENU_QUIT: &str = "app_menu_quit";
pub const APP_MENU_UPLOAD_RECORDING: &str = "app_menu_upload_recording";
pub const APP_MENU_OPEN_PDF: &str = "app_menu_open_pdf";
pub const APP_MENU_TOGGLE_DEVTOOLS: &str = "app_menu_toggle_devtools";
pub const APP_MENU_RELOAD: &str = "app_menu_reload";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Quit,
    UploadRecording,
    OpenPdf,
    ToggleDevTools,
    Reload,
}

impl MenuAction {
    pub fn menu_id(self) -> &'static str {
        match self {
            Self::Quit => APP_MENU_QUIT,
            Self::UploadRecording => APP_MENU_UPLOAD_RECORDING,
            Self::OpenPdf => APP_MENU_OPEN_PDF,
            Self::ToggleDevTools => APP_MENU_TOGGLE_DEVTOOLS,
            Self::Reload => APP_MENU_RELOAD,
        }
    }
}

pub fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        APP_MENU_QUIT => Some(MenuAction::Quit),
        APP_MENU_UPLOAD_RECORDING => Some(MenuAction::UploadRecording),
        APP_MENU_OPEN_PDF => Some(MenuAction::OpenPdf),
        APP_MENU_TOGGLE_DEVTOOLS => Some(MenuAction::ToggleDevTools),
        APP_MENU_RELOAD => Some(MenuAction::Reload),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        assert_eq!(action_from_menu_id(APP_MENU_QUIT), Some(MenuAction::Quit));
        assert_eq!(
            action_from_menu_id(APP_MENU_UPLOAD_RECORDING),
            Some(MenuAction::UploadRecording)
        );
        assert_eq!(
            action_from_menu_id(APP_MENU_OPEN_PDF),
            Some(MenuAction::OpenPdf)
        );
        assert_eq!(
            action_from_menu_id(APP_MENU_TOGGLE_DEVTOOLS),
            Some(MenuAction::ToggleDevTools)
        );
        assert_eq!(
            action_from_menu_id(APP_MENU_RELOAD),
            Some(MenuAction::Reload)
        );
    }

    #[test]
    fn menu_id_round_trips_through_lookup() {
        for action in [
            MenuAction::Quit,
            MenuAction::UploadRecording,
            MenuAction::OpenPdf,
            MenuAction::ToggleDevTools,
            MenuAction::Reload,
        ] {
            assert_eq!(action_from_menu_id(action.menu_id()), Some(action));
        }
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
    }
}
