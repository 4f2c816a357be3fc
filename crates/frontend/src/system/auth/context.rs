use contracts::system::auth::{LoginResponse, Role, SessionUser};
use leptos::prelude::*;

use super::storage;
use crate::shared::api::{ApiClient, ApiError};
use crate::shared::toast::ToastService;

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<SessionUser>,
}

/// One session slot per role. Restored from localStorage once at start-up
/// and shared through context; pages never read storage directly.
#[derive(Clone, Copy)]
pub struct Sessions {
    slots: [RwSignal<Option<Session>>; 5],
}

fn slot_index(role: Role) -> usize {
    match role {
        Role::Admin => 0,
        Role::Vendor => 1,
        Role::Partner => 2,
        Role::Agent => 3,
        Role::Corporate => 4,
    }
}

impl Sessions {
    pub fn restore() -> Self {
        let slots = Role::ALL.map(|role| {
            let session = storage::get_token(role).map(|token| Session {
                token,
                user: storage::get_user(role),
            });
            if session.is_some() {
                log::debug!("restored {} session", role);
            }
            RwSignal::new(session)
        });
        Self { slots }
    }

    fn slot(&self, role: Role) -> RwSignal<Option<Session>> {
        self.slots[slot_index(role)]
    }

    pub fn is_signed_in(&self, role: Role) -> bool {
        self.slot(role).with(|s| s.is_some())
    }

    pub fn token(&self, role: Role) -> Option<String> {
        self.slot(role).with(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn user(&self, role: Role) -> Option<SessionUser> {
        self.slot(role).with(|s| s.as_ref().and_then(|s| s.user.clone()))
    }

    pub fn sign_in(&self, role: Role, response: LoginResponse) {
        storage::save_token(role, &response.token);
        storage::save_user(role, &response.user);
        log::info!("signed in to {} console as {}", role, response.user.name);
        self.slot(role).set(Some(Session {
            token: response.token,
            user: Some(response.user),
        }));
    }

    pub fn sign_out(&self, role: Role) {
        storage::clear(role);
        log::info!("signed out of {} console", role);
        self.slot(role).set(None);
    }

    /// Client carrying the role's current token (read untracked)
    pub fn client(&self, role: Role) -> ApiClient {
        let token = self
            .slot(role)
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
        ApiClient::new(role, token)
    }

    /// Fetch failures end here: a toast for the user, and an expired
    /// token drops the role's session.
    pub fn report_error(&self, toasts: ToastService, role: Role, context: &str, err: &ApiError) {
        if matches!(err, ApiError::Unauthorized) {
            self.sign_out(role);
        }
        toasts.error(format!("{}: {}", context, err));
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(Sessions::restore());
    children()
}

pub fn use_sessions() -> Sessions {
    use_context::<Sessions>().expect("SessionProvider not found in component tree")
}
