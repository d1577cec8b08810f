//! Theme selection state.
//!
//! [`ThemeController`] owns the active theme and the pending transition. A
//! change is two-phase: [`ThemeController::request_change`] marks a transition
//! and hands back a [`PendingChange`] ticket, and [`ThemeController::commit`]
//! applies it once the transition delay has elapsed. Commit updates the active
//! theme, clears the transition and persists the preference in one step.
//!
//! [`ThemeContext`] wires the controller into the Dioxus tree and drives the
//! delay with a cancellable task.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use thiserror::Error;
use tracing::debug;

use super::storage::{LocalStorage, PreferenceStore};
use super::timer;

/// Preference key holding the selected theme.
pub const STORAGE_KEY: &str = "selectedTheme";

/// Delay between a selection and its commit.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(150);

/// One of the three visual themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeId {
    /// Theme 1 - Clean & Minimal
    #[default]
    Minimal,
    /// Theme 2 - Dark Sidebar
    DarkSidebar,
    /// Theme 3 - Playful & Colorful
    Playful,
}

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [ThemeId::Minimal, ThemeId::DarkSidebar, ThemeId::Playful];

    /// Persisted symbol, also used as the class-name suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "1",
            Self::DarkSidebar => "2",
            Self::Playful => "3",
        }
    }

    /// Human-readable label for the theme selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Theme 1 - Clean & Minimal",
            Self::DarkSidebar => "Theme 2 - Dark Sidebar",
            Self::Playful => "Theme 3 - Playful & Colorful",
        }
    }

    /// `"{base} {base}_{id}"`, the themed class pair used across the views.
    pub fn class(self, base: &str) -> String {
        format!("{base} {base}_{}", self.as_str())
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is not one of the three theme symbols.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Minimal),
            "2" => Ok(Self::DarkSidebar),
            "3" => Ok(Self::Playful),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Read the persisted theme. Absent, unreadable or unknown values yield the default.
pub fn initial_theme<S: PreferenceStore>(store: &S) -> ThemeId {
    store
        .get(STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Ticket for a requested change awaiting its commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingChange {
    requested: ThemeId,
    ticket: u64,
}

/// Active theme plus the in-flight transition, backed by a preference store.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    active: ThemeId,
    pending: Option<PendingChange>,
    next_ticket: u64,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Seed the active theme from the store.
    pub fn initialize(store: S) -> Self {
        let active = initial_theme(&store);
        debug!(theme = %active, "Theme initialized");
        Self {
            store,
            active,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn active(&self) -> ThemeId {
        self.active
    }

    /// Theme waiting to be committed, if any.
    pub fn pending(&self) -> Option<ThemeId> {
        self.pending.map(|p| p.requested)
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a transition to `requested`.
    ///
    /// Returns `None` when `requested` is already active; an in-flight
    /// transition is left alone in that case. Otherwise any pending change is
    /// superseded and the new ticket must be passed to [`Self::commit`].
    pub fn request_change(&mut self, requested: ThemeId) -> Option<PendingChange> {
        if requested == self.active {
            return None;
        }

        self.next_ticket += 1;
        let change = PendingChange {
            requested,
            ticket: self.next_ticket,
        };
        if let Some(previous) = self.pending.replace(change) {
            debug!(superseded = %previous.requested, "Pending theme change superseded");
        }
        debug!(from = %self.active, to = %requested, "Theme transition started");
        Some(change)
    }

    /// Apply a pending change. Stale tickets are ignored and return `false`.
    pub fn commit(&mut self, change: PendingChange) -> bool {
        if self.pending != Some(change) {
            debug!(theme = %change.requested, "Ignoring stale theme commit");
            return false;
        }

        self.active = change.requested;
        self.pending = None;
        if let Err(e) = self.store.set(STORAGE_KEY, self.active.as_str()) {
            debug!("Theme preference not persisted: {}", e);
        }
        debug!(theme = %self.active, "Theme committed");
        true
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Shared theme state provided at the app root.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: Signal<ThemeController<LocalStorage>>,
    pending_task: Signal<Option<Task>>,
}

impl ThemeContext {
    pub fn active(&self) -> ThemeId {
        self.controller.read().active()
    }

    pub fn is_transitioning(&self) -> bool {
        self.controller.read().is_transitioning()
    }

    /// Forward a selection to the controller and schedule its commit.
    pub fn request_change(&mut self, requested: ThemeId) {
        let Some(change) = self.controller.write().request_change(requested) else {
            return;
        };

        if let Some(task) = self.pending_task.write().take() {
            task.cancel();
        }

        let mut controller = self.controller;
        let mut pending_task = self.pending_task;
        let task = spawn(async move {
            timer::sleep(TRANSITION_DELAY).await;
            controller.write().commit(change);
            pending_task.set(None);
        });
        self.pending_task.set(Some(task));
    }
}

/// Install the theme context. Call once at the app root.
pub fn use_theme_provider() -> ThemeContext {
    use_context_provider(|| ThemeContext {
        controller: Signal::new(ThemeController::initialize(LocalStorage::open())),
        pending_task: Signal::new(None),
    })
}

/// Access the theme context from any descendant of the app root.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
