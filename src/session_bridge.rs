use tauri::{AppHandle, Manager};

use crate::{app_lifecycle, AppContext, LOGIN_DOCUMENT_PATH};

pub(crate) fn normalize_username(raw: &str) -> Result<&str, String> {
    let username = raw.trim();
    if username.is_empty() {
        return Err("Missing username.".to_string());
    }
    Ok(username)
}

pub(crate) fn init<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let context = app_handle
        .try_state::<AppContext>()
        .ok_or_else(|| "Application context is not initialized.".to_string())?;
    log(&format!(
        "session initialized: authenticated={} login_document={}",
        context.is_authenticated(),
        LOGIN_DOCUMENT_PATH
    ));
    Ok(())
}

/// Called once the login page reports a successful login.
pub(crate) fn complete_login<F>(app_handle: &AppHandle, username: &str, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let username = normalize_username(username)?;
    let context = app_handle
        .try_state::<AppContext>()
        .ok_or_else(|| "Application context is not initialized.".to_string())?;
    if context.is_quitting() {
        return Err("Application is quitting.".to_string());
    }

    log(&format!("login completed for user '{username}'"));
    app_lifecycle::set_real_main_menu(app_handle, log)
}

#[cfg(test)]
mod tests {
    use super::normalize_username;

    #[test]
    fn normalize_username_trims_and_rejects_blank_input() {
        assert_eq!(normalize_username("  alice "), Ok("alice"));
        assert_eq!(
            normalize_username("   "),
            Err("Missing username.".to_string())
        );
    }
}
