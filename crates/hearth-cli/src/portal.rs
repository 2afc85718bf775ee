//! The portal's view-state controller.
//!
//! One [`Portal`] exists per session. It owns the current [`View`], drives
//! data loading on selection changes, and is the only thing that mutates
//! view state — the renderers in [`crate::views`] just read it.
//!
//! The data source behind [`Portal`] is fixed at construction (live store or
//! demo), so every transition below behaves identically in both modes.

use std::sync::Arc;

use hearth_core::entities::{Customer, Milestone, Project, ProjectUpdate};
use hearth_core::progress::{
    ProgressSummary, milestones_in_display_order, updates_in_display_order,
};
use hearth_data::{DataError, ProjectRepository};

/// Detail sub-view selector, not persisted across `back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Milestones,
    Updates,
}

/// The project list and its owning customer.
#[derive(Debug, Clone)]
pub struct ListView {
    /// `None` when no customer record exists for this user yet.
    pub customer: Option<Customer>,
    /// Newest-created-first.
    pub projects: Vec<Project>,
    /// Whether this is the read-only demo.
    pub demo: bool,
}

/// One project's fully loaded detail.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub project: Project,
    /// `order_index` ascending.
    pub milestones: Vec<Milestone>,
    /// Newest-first.
    pub updates: Vec<ProjectUpdate>,
    pub summary: ProgressSummary,
    pub tab: Tab,
}

/// Everything the renderer can be asked to show.
#[derive(Debug, Clone)]
pub enum View {
    /// A load is in flight; partial results are never shown.
    Loading,
    List(ListView),
    Detail(DetailView),
    /// Demo-only hand-off to the external sign-in flow.
    LoginPrompt,
    /// The requested project does not exist. Terminal for that id.
    Missing { project_id: String },
    /// A load failed. Left by re-entering the same transition.
    Unavailable {
        /// What was being loaded, for the failure message.
        what: &'static str,
        reason: String,
        /// Transport-class failures may heal on retry; integrity ones won't.
        retryable: bool,
    },
}

/// Session state machine driving the portal.
pub struct Portal {
    repo: Arc<dyn ProjectRepository>,
    user_id: Option<String>,
    demo: bool,
    view: View,
    cached_list: Option<ListView>,
}

impl Portal {
    /// Create a portal over an already-selected data source.
    #[must_use]
    pub fn new(repo: Arc<dyn ProjectRepository>, user_id: Option<String>, demo: bool) -> Self {
        Self {
            repo,
            user_id,
            demo,
            view: View::Loading,
            cached_list: None,
        }
    }

    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    #[must_use]
    pub const fn is_demo(&self) -> bool {
        self.demo
    }

    /// Load customer + projects and enter the list view.
    ///
    /// A user without a customer record lands in the empty list view — that
    /// is a zero state, not an error and not a perpetual spinner.
    pub async fn load_dashboard(&mut self) {
        self.view = View::Loading;
        let repo = Arc::clone(&self.repo);

        let customer = match repo.customer_for_user(self.user_key()).await {
            Ok(customer) => customer,
            Err(error) => return self.fail("your projects", &error),
        };

        let Some(customer) = customer else {
            self.enter_list(ListView {
                customer: None,
                projects: Vec::new(),
                demo: self.demo,
            });
            return;
        };

        match repo.projects_for_customer(&customer.id).await {
            Ok(projects) => self.enter_list(ListView {
                customer: Some(customer),
                projects,
                demo: self.demo,
            }),
            Err(error) => self.fail("your projects", &error),
        }
    }

    /// Open one project: load project, milestones, and updates concurrently,
    /// entering the detail view only once all three have resolved.
    pub async fn select(&mut self, project_id: &str) {
        self.view = View::Loading;
        let repo = Arc::clone(&self.repo);

        let loads = tokio::try_join!(
            repo.project_by_id(project_id),
            repo.milestones_for_project(project_id),
            repo.updates_for_project(project_id),
        );

        match loads {
            Err(error) => self.fail("project detail", &error),
            Ok((None, _, _)) => {
                self.view = View::Missing {
                    project_id: project_id.to_string(),
                };
            }
            Ok((Some(project), milestones, updates)) => {
                let milestones = milestones_in_display_order(milestones);
                let updates = updates_in_display_order(updates);
                let summary = ProgressSummary::from_milestones(&milestones);
                self.view = View::Detail(DetailView {
                    project,
                    milestones,
                    updates,
                    summary,
                    tab: Tab::Milestones,
                });
            }
        }
    }

    /// Return to the cached list without re-fetching. Discards detail state,
    /// including the active tab.
    pub fn back(&mut self) {
        if matches!(self.view, View::List(_)) {
            return;
        }
        if let Some(list) = &self.cached_list {
            self.view = View::List(list.clone());
        }
    }

    /// Toggle the detail sub-view. No-op outside the detail view.
    pub fn set_tab(&mut self, tab: Tab) {
        if let View::Detail(detail) = &mut self.view {
            detail.tab = tab;
        }
    }

    /// Demo list → login prompt. Pure view swap; no data call is made.
    pub fn open_login(&mut self) {
        if self.demo && matches!(self.view, View::List(_)) {
            self.view = View::LoginPrompt;
        }
    }

    /// Replace the data source after a sign-in/out event, discarding every
    /// cached view so the next load cannot serve another user's data.
    pub fn switch_source(
        &mut self,
        repo: Arc<dyn ProjectRepository>,
        user_id: Option<String>,
        demo: bool,
    ) {
        self.repo = repo;
        self.user_id = user_id;
        self.demo = demo;
        self.cached_list = None;
        self.view = View::Loading;
    }

    fn enter_list(&mut self, list: ListView) {
        self.cached_list = Some(list.clone());
        self.view = View::List(list);
    }

    fn fail(&mut self, what: &'static str, error: &DataError) {
        tracing::warn!(%error, what, "portal load failed");
        self.view = View::Unavailable {
            what,
            reason: error.to_string(),
            retryable: error.is_retryable(),
        };
    }

    fn user_key(&self) -> &str {
        self.user_id.as_deref().unwrap_or("demo-visitor")
    }
}
