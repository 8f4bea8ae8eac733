// src/state.rs
// Client-side interaction state: contact submission lifecycle, per-section
// visibility, mobile navigation, scroll threshold. Pure Rust, no browser
// bindings, so everything here is testable natively.

use std::collections::HashSet;

use thiserror::Error;

/// Scroll offset (px) past which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// How long the success message stays up before reverting to idle.
pub const SUCCESS_FEEDBACK_MS: u32 = 3_000;

// ============================================================================
// Contact form
// ============================================================================

/// The message a visitor composes. All four fields must be non-empty before
/// a submission is allowed; presence is the only validation at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl ContactMessage {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.subject.is_empty()
            && !self.body.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Body,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("all fields are required")]
    Incomplete,
}

/// Sole owner of the message fields and the submission state machine.
///
/// `Idle -> Submitting -> Succeeded | Failed`; `Succeeded` reverts to `Idle`
/// via `acknowledge_success` after the feedback window, `Failed` persists
/// until the next submit attempt.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    message: ContactMessage,
    state: SubmissionState,
    revert_token: u64,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.message.name,
            Field::Email => &self.message.email,
            Field::Subject => &self.message.subject,
            Field::Body => &self.message.body,
        }
    }

    /// Last write wins; no side effects beyond the one field.
    pub fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.message.name = value,
            Field::Email => self.message.email = value,
            Field::Subject => self.message.subject = value,
            Field::Body => self.message.body = value,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Starts a submission, clearing any prior terminal state. The disabled
    /// submit button is advisory UI state; this guard is authoritative, so a
    /// re-entrant submit while one is in flight never reaches the relay.
    /// Returns a snapshot of the message for sending.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitRejected> {
        if self.state == SubmissionState::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        if !self.message.is_complete() {
            return Err(SubmitRejected::Incomplete);
        }
        self.state = SubmissionState::Submitting;
        Ok(self.message.clone())
    }

    /// Delivery accepted: fields reset so the form is empty again. Returns
    /// the token the one-shot revert timer must present.
    pub fn resolve_success(&mut self) -> u64 {
        self.state = SubmissionState::Succeeded;
        self.message = ContactMessage::default();
        self.revert_token += 1;
        self.revert_token
    }

    /// Delivery failed: fields are left intact so the visitor can retry
    /// without retyping.
    pub fn resolve_failure(&mut self) {
        self.state = SubmissionState::Failed;
    }

    /// Timer callback target. Only reverts to `Idle` if the form is still
    /// showing the success the token belongs to; stale timers are no-ops.
    pub fn acknowledge_success(&mut self, token: u64) {
        if self.state == SubmissionState::Succeeded && self.revert_token == token {
            self.state = SubmissionState::Idle;
        }
    }
}

// ============================================================================
// Presentation state
// ============================================================================

/// Sticky-header predicate. Unlike section entry this is not monotonic; it
/// flips back when the visitor scrolls up.
pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Scroll-addressable regions of the page. The id strings are the public
/// deep-linking contract; renaming one is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Projects, Section::Skills, Section::Contact];

    pub const fn id(self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Projects => "#projects",
            Section::Skills => "#skills",
            Section::Contact => "#contact",
        }
    }
}

/// Per-section `NotEntered -> Entered` state machine, terminal once entered.
/// Entry animations key off the first transition and never replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTracker {
    entered: HashSet<Section>,
}

impl SectionTracker {
    /// Returns true exactly once per section, on the first transition.
    pub fn mark_entered(&mut self, section: Section) -> bool {
        self.entered.insert(section)
    }

    pub fn is_entered(&self, section: Section) -> bool {
        self.entered.contains(&section)
    }
}

/// Mobile navigation panel. Closed is the resting state after any
/// navigation action, whether via a link or the contact shortcut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.update_field(Field::Name, "Ada".into());
        form.update_field(Field::Email, "ada@example.com".into());
        form.update_field(Field::Subject, "Hello".into());
        form.update_field(Field::Body, "A question about your work.".into());
        form
    }

    // ============================================================================
    // Field updates
    // ============================================================================

    #[test]
    fn test_update_field_last_write_wins() {
        let mut form = ContactForm::default();
        form.update_field(Field::Name, "first".into());
        form.update_field(Field::Name, "second".into());
        assert_eq!(form.field(Field::Name), "second");
    }

    #[test]
    fn test_update_field_no_cross_field_interference() {
        let mut form = filled_form();
        form.update_field(Field::Subject, "Changed".into());
        assert_eq!(form.field(Field::Name), "Ada");
        assert_eq!(form.field(Field::Email), "ada@example.com");
        assert_eq!(form.field(Field::Subject), "Changed");
        assert_eq!(form.field(Field::Body), "A question about your work.");
    }

    #[test]
    fn test_fields_start_empty() {
        let form = ContactForm::default();
        for field in [Field::Name, Field::Email, Field::Subject, Field::Body] {
            assert_eq!(form.field(field), "");
        }
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    // ============================================================================
    // Submission lifecycle
    // ============================================================================

    #[test]
    fn test_submit_with_empty_field_rejected_before_relay() {
        let mut form = filled_form();
        form.update_field(Field::Email, String::new());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Incomplete));
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_submit_while_in_flight_is_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_begin_submit_snapshots_message() {
        let mut form = filled_form();
        let snapshot = form.begin_submit().unwrap();
        assert_eq!(snapshot.name, "Ada");
        assert_eq!(snapshot.subject, "Hello");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_success_clears_fields_then_reverts_to_idle() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let token = form.resolve_success();
        assert_eq!(form.state(), SubmissionState::Succeeded);
        for field in [Field::Name, Field::Email, Field::Subject, Field::Body] {
            assert_eq!(form.field(field), "");
        }
        form.acknowledge_success(token);
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.field(Field::Name), "");
    }

    #[test]
    fn test_failure_keeps_fields_for_retry() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.resolve_failure();
        assert_eq!(form.state(), SubmissionState::Failed);
        assert_eq!(form.field(Field::Name), "Ada");
        assert_eq!(form.field(Field::Body), "A question about your work.");
    }

    #[test]
    fn test_failed_state_persists_until_resubmit() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.resolve_failure();
        // No revert timer exists for failures; only a new submit clears it.
        form.acknowledge_success(1);
        assert_eq!(form.state(), SubmissionState::Failed);
        form.begin_submit().unwrap();
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_stale_revert_token_is_ignored() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let stale = form.resolve_success();
        // The visitor retypes and resubmits before the first timer fires.
        form.update_field(Field::Name, "Ada".into());
        form.update_field(Field::Email, "ada@example.com".into());
        form.update_field(Field::Subject, "Again".into());
        form.update_field(Field::Body, "Second message.".into());
        form.begin_submit().unwrap();
        let fresh = form.resolve_success();
        form.acknowledge_success(stale);
        assert_eq!(form.state(), SubmissionState::Succeeded);
        form.acknowledge_success(fresh);
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    // ============================================================================
    // Presentation state
    // ============================================================================

    #[test]
    fn test_scroll_threshold_flips_both_ways() {
        assert!(!past_threshold(0.0, HEADER_SCROLL_THRESHOLD));
        assert!(past_threshold(80.0, HEADER_SCROLL_THRESHOLD));
        assert!(!past_threshold(0.0, HEADER_SCROLL_THRESHOLD));
        // The boundary itself is not past.
        assert!(!past_threshold(50.0, HEADER_SCROLL_THRESHOLD));
    }

    #[test]
    fn test_section_entry_fires_exactly_once() {
        let mut tracker = SectionTracker::default();
        assert!(tracker.mark_entered(Section::Projects));
        // Leaves the viewport and comes back.
        assert!(!tracker.mark_entered(Section::Projects));
        assert!(tracker.is_entered(Section::Projects));
        assert!(!tracker.is_entered(Section::Skills));
    }

    #[test]
    fn test_sections_track_independently() {
        let mut tracker = SectionTracker::default();
        for section in Section::ALL {
            assert!(tracker.mark_entered(section));
        }
        for section in Section::ALL {
            assert!(tracker.is_entered(section));
            assert!(!tracker.mark_entered(section));
        }
    }

    #[test]
    fn test_nav_menu_closes_on_selection() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        // Closing an already-closed menu stays closed.
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_section_anchor_matches_id() {
        for section in Section::ALL {
            assert_eq!(section.anchor(), format!("#{}", section.id()));
        }
    }
}
