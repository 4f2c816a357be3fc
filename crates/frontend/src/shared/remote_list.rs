//! Loading a collection from the API for a list screen
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::toast::{use_toasts, ToastService};
use crate::system::auth::context::{use_sessions, Sessions};

/// Records of one endpoint plus a loading flag.
///
/// A failed fetch leaves an empty collection behind and reports through a
/// toast, so the table always gets something to render.
pub struct RemoteCollection<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    role: Role,
    path: &'static str,
    requests: StoredValue<RequestSequence>,
    sessions: Sessions,
    toasts: ToastService,
}

impl<T: Send + Sync + 'static> Clone for RemoteCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteCollection<T> {}

impl<T> RemoteCollection<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    pub fn reload(&self) {
        let this = *self;
        let client = this.sessions.client(this.role);
        let ticket = this.requests.try_update_value(|requests| requests.begin()).unwrap_or_default();
        this.loading.set(true);

        spawn_local(async move {
            let result = client.get_json::<Vec<T>>(this.path).await;
            let current = this
                .requests
                .try_with_value(|requests| requests.is_current(ticket))
                .unwrap_or(false);
            if !current {
                log::debug!("dropping superseded response from {}", this.path);
                return;
            }

            match result {
                Ok(rows) => {
                    log::debug!("loaded {} rows from {}", rows.len(), this.path);
                    let _ = this.items.try_set(rows);
                }
                Err(e) => {
                    this.sessions
                        .report_error(this.toasts, this.role, "Failed to load data", &e);
                    let _ = this.items.try_set(Vec::new());
                }
            }
            let _ = this.loading.try_set(false);
        });
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn sessions(&self) -> Sessions {
        self.sessions
    }

    pub fn toasts(&self) -> ToastService {
        self.toasts
    }
}

/// Fetches `<role prefix><path>` now and on every `reload()`
pub fn use_remote_collection<T>(role: Role, path: &'static str) -> RemoteCollection<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let collection = RemoteCollection {
        items: RwSignal::new(Vec::new()),
        loading: RwSignal::new(false),
        role,
        path,
        requests: StoredValue::new(RequestSequence::default()),
        sessions: use_sessions(),
        toasts: use_toasts(),
    };
    collection.reload();
    collection
}

/// Numbers fetches so that only the most recent one may publish its result.
#[derive(Clone, Copy, Debug, Default)]
struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slow_earlier_fetch_is_superseded() {
        let mut requests = RequestSequence::default();
        let slow = requests.begin();
        let fast = requests.begin();

        // the later request resolves first and may publish
        assert!(requests.is_current(fast));
        // the earlier one resolves afterwards and must not overwrite it
        assert!(!requests.is_current(slow));
    }

    #[test]
    fn test_single_fetch_is_current() {
        let mut requests = RequestSequence::default();
        let only = requests.begin();
        assert!(requests.is_current(only));
        assert!(!requests.is_current(only + 1));
    }
}
