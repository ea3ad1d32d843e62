//! Project-list state for the sidebar.
//!
//! DESIGN
//! ======
//! The list is a transient cache of backend records. Create and update are
//! followed by a full re-fetch (`replace_all`); delete filters the local list.
//! There is no incremental patching and no conflict handling: the last
//! re-fetch wins.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::{Project, ProjectDraft};

/// Shared project list state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    /// A create/update request is in flight; the submit control is disabled.
    pub submitting: bool,
    pub error: Option<String>,
    /// Row under the pointer; its menu button is emphasized.
    pub hovered: Option<String>,
}

impl ProjectsState {
    /// Replace the cache with a fresh listing.
    pub fn replace_all(&mut self, items: Vec<Project>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed listing. The original UI shows an empty list.
    pub fn fail_listing(&mut self, message: String) {
        self.items.clear();
        self.loading = false;
        self.error = Some(message);
    }

    /// Drop `id` from the cache after a successful delete.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
        self.items.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Claim the submit slot. Returns `false` when a request is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

/// Which project modal is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Closed,
    Create,
    Edit(Project),
}

impl ModalMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Edit(_) => "Edit Project",
            Self::Create | Self::Closed => "Create New Project",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Edit(_) => "Update project information",
            Self::Create | Self::Closed => "Add a new project to your workspace",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Edit(_) => "Save Changes",
            Self::Create | Self::Closed => "Create Project",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Edit(_) => "Project updated successfully",
            Self::Create | Self::Closed => "Project added successfully",
        }
    }

    /// Initial form values: pre-filled when editing, blank otherwise.
    pub fn initial_draft(&self) -> ProjectDraft {
        match self {
            Self::Edit(project) => ProjectDraft::from_project(project),
            Self::Create | Self::Closed => ProjectDraft::default(),
        }
    }
}

/// Per-field validation messages for the project modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub name: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Check a draft and return the trimmed request body.
///
/// # Errors
///
/// Returns per-field messages when the name or description is blank.
pub fn validate_draft(draft: &ProjectDraft) -> Result<ProjectDraft, DraftErrors> {
    let name = draft.name.trim();
    let description = draft.description.trim();
    let errors = DraftErrors {
        name: name.is_empty().then_some("Project name is required"),
        description: description.is_empty().then_some("Project description is required"),
    };
    if errors.is_empty() {
        Ok(ProjectDraft { name: name.to_owned(), description: description.to_owned() })
    } else {
        Err(errors)
    }
}

/// Delay between the modal's success message and the list refresh.
pub const MODAL_SUCCESS_DELAY_MS: u64 = 1_500;
/// Modal fade-out before it is unmounted.
pub const MODAL_CLOSE_DELAY_MS: u64 = 200;
