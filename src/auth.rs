//! Admin gate: a cosmetic credential check guarding the admin view.
//!
//! The credentials are compared with exact string equality against a fixed
//! pair; no hashing, no rate limiting, no expiry. This is not a security
//! boundary. The persisted flag is an opaque [`SessionToken`] so a real
//! auth provider can be slotted in later without changing callers.

use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::logging::{json_log, obj, v_str, Domain};
use crate::settings::SettingsStore;
use crate::store::SlotStore;

/// Opaque session marker. Verification is presence-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    fn mint(username: &str, minted_ms: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(username.as_bytes());
        hasher.update(minted_ms.to_le_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of a login attempt. A rejected pair is an inline error state on
/// the page, never an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authorized,
    InvalidCredentials,
}

/// Admin-view access decision, checked on every admin-view load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// Bounce to the main view; the hash marks login intent.
    Redirect { location: &'static str },
}

pub const LOGIN_REDIRECT: &str = "index.html#admin";

pub struct AdminGate {
    username: String,
    password: String,
}

impl AdminGate {
    pub fn new(cfg: &Config) -> Self {
        Self {
            username: cfg.admin_user.clone(),
            password: cfg.admin_pass.clone(),
        }
    }

    /// Exact match mints and persists a token; anything else leaves the
    /// store untouched.
    pub fn login<S: SlotStore>(
        &self,
        settings: &mut SettingsStore<S>,
        username: &str,
        password: &str,
    ) -> LoginOutcome {
        let username = username.trim();
        let password = password.trim();
        if username == self.username && password == self.password {
            let token = SessionToken::mint(username, crate::logging::ts_epoch_ms());
            settings.set_session_token(token.as_str());
            json_log(
                Domain::Auth,
                "login",
                obj(&[("user", v_str(username)), ("result", v_str("authorized"))]),
            );
            LoginOutcome::Authorized
        } else {
            json_log(
                Domain::Auth,
                "login",
                obj(&[("user", v_str(username)), ("result", v_str("rejected"))]),
            );
            LoginOutcome::InvalidCredentials
        }
    }

    pub fn logout<S: SlotStore>(&self, settings: &mut SettingsStore<S>) {
        settings.clear_session_token();
        json_log(Domain::Auth, "logout", obj(&[]));
    }

    pub fn authorize<S: SlotStore>(&self, settings: &SettingsStore<S>) -> AccessDecision {
        match settings.session_token() {
            Some(_) => AccessDecision::Allow,
            None => AccessDecision::Redirect {
                location: LOGIN_REDIRECT,
            },
        }
    }
}
