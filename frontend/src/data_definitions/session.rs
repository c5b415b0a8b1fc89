//! Client-side session state for authentication-gated routes.

use common::user::{AuthSession, UserProfile};
use dioxus::prelude::*;

const STORAGE_KEY: &str = "modelcraft_session";

/// Context object holding the signed-in session, if any. Mutation goes
/// through [`SessionState::set`] so local storage stays in sync.
#[derive(Clone, Copy)]
pub struct SessionState {
    session: Signal<Option<AuthSession>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
        }
    }

    pub fn current(&self) -> Option<AuthSession> {
        self.session.read().clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.token.clone())
    }

    pub fn set(&mut self, session: Option<AuthSession>) {
        persist_session(&session);
        self.session.set(session);
    }

    /// Load a previously persisted session and return whatever session is in
    /// effect afterwards. Only meaningful on the web target; elsewhere this
    /// is a no-op. A restored token still has to be revalidated against the
    /// server, see [`reconcile_session`].
    pub fn restore(&mut self) -> Option<AuthSession> {
        if let Some(existing) = self.session.peek().clone() {
            return Some(existing);
        }
        let session = load_session()?;
        self.session.set(Some(session.clone()));
        Some(session)
    }
}

/// Fold the server's answer to a token introspection back into the session:
/// an accepted token keeps the session with the freshly fetched profile, a
/// rejected one drops it.
pub fn reconcile_session<E>(
    stored: AuthSession,
    verified: Result<UserProfile, E>,
) -> Option<AuthSession> {
    match verified {
        Ok(user) => Some(AuthSession {
            token: stored.token,
            user,
        }),
        Err(_) => None,
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn persist_session(session: &Option<AuthSession>) {
    let Some(storage) = local_storage() else {
        return;
    };
    match session {
        Some(session) => {
            if let Ok(serialized) = serde_json::to_string(session) {
                let _ = storage.set_item(STORAGE_KEY, &serialized);
            }
        }
        None => {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_session() -> Option<AuthSession> {
    let storage = local_storage()?;
    let serialized = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&serialized).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_session(_session: &Option<AuthSession>) {}

#[cfg(not(target_arch = "wasm32"))]
fn load_session() -> Option<AuthSession> {
    let _ = STORAGE_KEY;
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_session() -> AuthSession {
        AuthSession {
            token: "tok-1".to_string(),
            user: UserProfile {
                _id: "u1".to_string(),
                name: "Ada".to_string(),
                role: "admin".to_string(),
                ..UserProfile::default()
            },
        }
    }

    #[test]
    fn rejected_token_drops_the_restored_session() {
        let reconciled = reconcile_session(stored_session(), Err("invalid token"));
        assert_eq!(reconciled, None);
    }

    #[test]
    fn accepted_token_keeps_the_token_and_refreshes_the_profile() {
        let mut current = stored_session().user;
        current.role = "customer".to_string();
        let reconciled =
            reconcile_session::<&str>(stored_session(), Ok(current.clone())).unwrap();
        assert_eq!(reconciled.token, "tok-1");
        assert_eq!(reconciled.user, current);
        assert!(!reconciled.user.is_staff());
    }
}
