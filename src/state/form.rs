//! Per-form submission status: phase, in-flight flag, visible error.
//!
//! DESIGN
//! ======
//! The flow writes status through `StatusCell` so pages can back it with an
//! `RwSignal` while tests use a `RefCell`. `InFlight` is the scope guard that
//! owns the in-flight flag for one attempt and clears it on drop, whatever
//! path the attempt took.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::RefCell;

use leptos::prelude::*;

/// Where a form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    /// Registration only: the profile image is being uploaded.
    Uploading,
    Submitting,
    Success,
    Failed,
}

impl SubmitPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

/// Status snapshot rendered by a login or signup page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub phase: SubmitPhase,
    /// In-flight flag; disables the submit control and shows the spinner.
    pub busy: bool,
    pub error: Option<String>,
}

impl FormStatus {
    /// Error line to render; only an attempt that has ended shows one.
    pub fn visible_error(&self) -> Option<&str> {
        if self.phase.is_terminal() { self.error.as_deref() } else { None }
    }
}

/// Storage for a `FormStatus` the flow can read and mutate in place.
pub trait StatusCell {
    fn snapshot(&self) -> FormStatus;
    fn modify(&self, apply: impl FnOnce(&mut FormStatus));

    fn set_phase(&self, phase: SubmitPhase) {
        self.modify(|status| status.phase = phase);
    }
}

impl StatusCell for RefCell<FormStatus> {
    fn snapshot(&self) -> FormStatus {
        self.borrow().clone()
    }

    fn modify(&self, apply: impl FnOnce(&mut FormStatus)) {
        apply(&mut *self.borrow_mut());
    }
}

impl StatusCell for RwSignal<FormStatus> {
    fn snapshot(&self) -> FormStatus {
        self.get_untracked()
    }

    fn modify(&self, apply: impl FnOnce(&mut FormStatus)) {
        self.update(apply);
    }
}

/// Holds the in-flight flag for one submission attempt.
pub struct InFlight<'a, C: StatusCell> {
    cell: &'a C,
}

impl<'a, C: StatusCell> InFlight<'a, C> {
    /// Claim the form for a new attempt, entering `Validating` with the
    /// previous error cleared. Returns `None` while another attempt holds it.
    pub fn begin(cell: &'a C) -> Option<Self> {
        if cell.snapshot().busy {
            return None;
        }
        cell.modify(|status| {
            status.busy = true;
            status.phase = SubmitPhase::Validating;
            status.error = None;
        });
        Some(Self { cell })
    }

    pub fn succeed(&self) {
        self.cell.set_phase(SubmitPhase::Success);
    }

    pub fn fail(&self, message: String) {
        self.cell.modify(|status| {
            status.phase = SubmitPhase::Failed;
            status.error = Some(message);
        });
    }

    /// End the attempt with nothing to show; the form returns to `Idle`.
    pub fn abandon(&self) {
        self.cell.modify(|status| {
            status.phase = SubmitPhase::Idle;
            status.error = None;
        });
    }
}

impl<C: StatusCell> Drop for InFlight<'_, C> {
    fn drop(&mut self) {
        self.cell.modify(|status| status.busy = false);
    }
}
