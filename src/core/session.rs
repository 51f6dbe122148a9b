//! Session lifecycle: login, load at startup, logout.
//!
//! The session is never held in a global: commands load it explicitly from
//! local storage and pass it to every networked operation.

use crate::api::{Credentials, TimesheetApi};
use crate::db::storage::LocalStorage;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const USER_NAME_KEY: &str = "userName";
pub const EMAIL_KEY: &str = "email";
pub const IS_MANAGER_KEY: &str = "isManager";

pub struct SessionLogic;

impl SessionLogic {
    /// Authenticate and mirror the session into local storage.
    /// Nothing is stored when the server refuses the credentials.
    pub fn login(
        api: &dyn TimesheetApi,
        storage: &LocalStorage,
        username: &str,
        password: &str,
    ) -> AppResult<Session> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        let session = api.login(&credentials)?;
        if !session.has_token() {
            return Err(AppError::AuthFailed("Login failed".to_string()));
        }

        Self::store(storage, &session)?;
        storage.audit("login", &session.user_name, "Session stored");
        tracing::info!(user = %session.user_name, manager = session.is_manager, "logged in");
        Ok(session)
    }

    pub fn store(storage: &LocalStorage, session: &Session) -> AppResult<()> {
        storage.set(TOKEN_KEY, &session.token)?;
        storage.set(USER_ID_KEY, &session.user_id.to_string())?;
        storage.set(USER_NAME_KEY, &session.user_name)?;
        storage.set(EMAIL_KEY, &session.email)?;
        storage.set(
            IS_MANAGER_KEY,
            if session.is_manager { "true" } else { "false" },
        )?;
        Ok(())
    }

    /// Restore the session persisted by a previous login, if any.
    pub fn load(storage: &LocalStorage) -> AppResult<Option<Session>> {
        let Some(token) = storage.get(TOKEN_KEY)? else {
            return Ok(None);
        };

        let user_id = storage
            .get(USER_ID_KEY)?
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Ok(Some(Session {
            token,
            user_id,
            user_name: storage.get(USER_NAME_KEY)?.unwrap_or_default(),
            email: storage.get(EMAIL_KEY)?.unwrap_or_default(),
            is_manager: storage.get(IS_MANAGER_KEY)?.as_deref() == Some("true"),
        }))
    }

    /// Like [`SessionLogic::load`], failing when no usable token is stored.
    pub fn require(storage: &LocalStorage) -> AppResult<Session> {
        match Self::load(storage)? {
            Some(s) if s.has_token() => Ok(s),
            _ => Err(AppError::MissingToken),
        }
    }

    /// Forget the session together with every other stored preference.
    pub fn logout(storage: &LocalStorage) -> AppResult<bool> {
        let had_session = storage.get(TOKEN_KEY)?.is_some();
        let user = storage.get(USER_NAME_KEY)?.unwrap_or_default();
        storage.clear()?;
        if had_session {
            storage.audit("logout", &user, "Local storage cleared");
        }
        Ok(had_session)
    }
}
