//! Shared application resources initialized once at startup.
//!
//! The data source is selected here, exactly once per session: a signed-in
//! user with a configured store gets the live adapter; everyone else gets
//! the demo dataset. Nothing downstream branches on the source again.

use std::sync::Arc;

use hearth_auth::{AuthSession, AuthState};
use hearth_config::PortalConfig;
use hearth_core::identity::UserIdentity;
use hearth_data::{DemoStore, ProjectRepository, RemoteStore};

use crate::portal::Portal;
use crate::ui;
use crate::views::Theme;

pub struct AppContext {
    pub repo: Arc<dyn ProjectRepository>,
    pub auth: AuthSession,
    pub identity: Option<UserIdentity>,
    pub config: PortalConfig,
    /// True when the demo dataset is the active source.
    pub demo: bool,
}

impl AppContext {
    /// Resolve the stored session and pick the data source.
    ///
    /// This is the portal's only global blocking point: nothing renders
    /// until the auth state is known.
    #[must_use]
    pub fn init(config: PortalConfig, force_demo: bool) -> Self {
        let mut auth = AuthSession::new();
        let state = auth.resolve();

        let (repo, identity, demo): (Arc<dyn ProjectRepository>, _, _) = match state {
            AuthState::SignedIn(identity) if force_demo => {
                tracing::debug!("--demo overrides the signed-in session");
                (Arc::new(DemoStore::new()), Some(identity), true)
            }
            AuthState::SignedIn(identity) => {
                if config.store.is_configured() {
                    let mut store =
                        RemoteStore::new(&config.store.base_url, &config.store.anon_key);
                    if let Some(token) = auth.token() {
                        store = store.with_bearer(token);
                    }
                    (Arc::new(store), Some(identity), false)
                } else {
                    tracing::warn!(
                        "signed in but no store configured (set HEARTH_STORE__BASE_URL and \
                         HEARTH_STORE__ANON_KEY); showing demo data"
                    );
                    (Arc::new(DemoStore::new()), Some(identity), true)
                }
            }
            AuthState::SignedOut | AuthState::Resolving => (Arc::new(DemoStore::new()), None, true),
        };

        Self {
            repo,
            auth,
            identity,
            config,
            demo,
        }
    }

    /// A portal over the selected source.
    #[must_use]
    pub fn portal(&self) -> Portal {
        Portal::new(
            Arc::clone(&self.repo),
            self.identity.as_ref().map(|i| i.user_id.clone()),
            self.demo,
        )
    }

    /// Rendering theme from config plus terminal prefs.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_config(&self.config.ui, ui::prefs().color)
    }
}
