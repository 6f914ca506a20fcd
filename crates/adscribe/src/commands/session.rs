use crate::auth::{Authenticator, Credentials};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AdScribeError, Result};
use crate::store::backend::StorageBackend;
use crate::store::PersistentStore;

pub fn login<B: StorageBackend>(
    persistence: &PersistentStore<B>,
    authenticator: &dyn Authenticator,
    credentials: &Credentials,
) -> Result<CmdResult> {
    let user = authenticator.authenticate(credentials)?;
    persistence.write_user(&user)?;
    tracing::debug!(email = %user.email, "Logged in");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Welcome, {}", user.name)));
    result.user = Some(user);
    Ok(result)
}

pub fn logout<B: StorageBackend>(persistence: &PersistentStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let was_logged_in = matches!(persistence.read_user(), Ok(Some(_)));
    persistence.clear_user()?;
    if was_logged_in {
        result.add_message(CmdMessage::success("Logged out"));
    } else {
        result.add_message(CmdMessage::info("Not logged in"));
    }
    Ok(result)
}

/// The persisted session, if any. An unreadable session counts as logged out.
pub fn current_user<B: StorageBackend>(persistence: &PersistentStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match persistence.read_user() {
        Ok(user) => result.user = user,
        Err(AdScribeError::Parse { key, source }) => {
            tracing::warn!(%key, error = %source, "Discarding unreadable session");
            result.add_message(CmdMessage::warning(
                "Stored session is unreadable, please log in again",
            ));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}
