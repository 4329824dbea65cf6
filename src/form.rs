use std::rc::Rc;

use log::info;
use serde::Serialize;
use yew::Reducible;

use crate::config;
use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    /// Matches the `name` attribute rendered on each control.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "service" => Some(Field::Service),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

pub enum FormAction {
    Set(Field, String),
    Submit,
    /// Fired by the timer armed for the current phase.
    Advance,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn has_value(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

/// Lifecycle of the submit button around the simulated send.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmitPhase {
    pub fn begin(self) -> Result<SubmitPhase, SiteError> {
        match self {
            SubmitPhase::Idle => Ok(SubmitPhase::Submitting),
            _ => Err(SiteError::SubmissionInFlight),
        }
    }

    /// Timed step out of a busy phase. Only `begin` leaves `Idle`.
    fn next(self) -> SubmitPhase {
        match self {
            SubmitPhase::Idle => SubmitPhase::Idle,
            SubmitPhase::Submitting => SubmitPhase::Submitted,
            SubmitPhase::Submitted => SubmitPhase::Idle,
        }
    }

    /// How long the phase is held before the next `Advance`.
    pub fn hold_ms(self) -> Option<u32> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Submitting => Some(config::SUBMIT_DELAY_MS),
            SubmitPhase::Submitted => Some(config::SUBMITTED_HOLD_MS),
        }
    }

    pub fn is_busy(self) -> bool {
        self != SubmitPhase::Idle
    }

    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Submitting => "Sending...",
            SubmitPhase::Submitted => "Message Sent!",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "idle",
            SubmitPhase::Submitting => "submitting",
            SubmitPhase::Submitted => "submitted",
        }
    }
}

/// The form fields together with where the simulated send stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub phase: SubmitPhase,
}

impl ContactState {
    /// Applies `action` in place. Fields are only cleared when a send
    /// finishes its Submitted hold.
    pub fn apply(&mut self, action: FormAction) -> Result<(), SiteError> {
        match action {
            FormAction::Set(field, value) => self.form.set(field, value),
            FormAction::Submit => self.phase = self.phase.begin()?,
            FormAction::Advance => {
                let next = self.phase.next();
                if self.phase == SubmitPhase::Submitted && next == SubmitPhase::Idle {
                    self.form.clear();
                    info!("contact form reset after simulated send");
                }
                self.phase = next;
            }
        }
        Ok(())
    }
}

impl Reducible for ContactState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            Ok(()) if next != *self => Rc::new(next),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: [Field; 5] = [Field::Name, Field::Email, Field::Phone, Field::Service, Field::Message];

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Sarah Johnson".into());
        form.set(Field::Email, "sarah@example.com".into());
        form.set(Field::Service, "home".into());
        form
    }

    #[test]
    fn field_names_round_trip() {
        for field in FIELDS {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("fax"), None);
    }

    #[test]
    fn set_touches_only_one_field() {
        let form = filled();
        assert_eq!(form.get(Field::Name), "Sarah Johnson");
        assert_eq!(form.get(Field::Service), "home");
        assert!(form.has_value(Field::Email));
        assert!(!form.has_value(Field::Phone));
        assert!(!form.has_value(Field::Message));
    }

    fn state() -> ContactState {
        ContactState { form: filled(), phase: SubmitPhase::Idle }
    }

    #[test]
    fn reducer_updates_per_keystroke() {
        let state = Rc::new(ContactState::default());
        let state = state.reduce(FormAction::Set(Field::Message, "H".into()));
        let state = state.reduce(FormAction::Set(Field::Message, "Hi".into()));
        assert_eq!(state.form.message, "Hi");
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn submit_cycle_order() {
        let mut state = state();
        let mut labels = vec![state.phase.label()];
        state.apply(FormAction::Submit).expect("idle form can submit");
        while state.phase.is_busy() {
            labels.push(state.phase.label());
            state.apply(FormAction::Advance).expect("advance never fails");
        }
        labels.push(state.phase.label());
        assert_eq!(labels, vec!["Send Message", "Sending...", "Message Sent!", "Send Message"]);
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn advance_never_starts_a_send() {
        let mut state = state();
        state.apply(FormAction::Advance).expect("advance never fails");
        assert_eq!(state, self::state());

        let rc = Rc::new(self::state());
        assert!(Rc::ptr_eq(&rc, &rc.clone().reduce(FormAction::Advance)));
    }

    #[test]
    fn hold_times_follow_the_phase() {
        assert_eq!(SubmitPhase::Idle.hold_ms(), None);
        assert_eq!(SubmitPhase::Submitting.hold_ms(), Some(config::SUBMIT_DELAY_MS));
        assert_eq!(SubmitPhase::Submitted.hold_ms(), Some(config::SUBMITTED_HOLD_MS));
    }

    #[test]
    fn cannot_resubmit_while_busy() {
        assert!(!SubmitPhase::Idle.is_busy());
        assert!(SubmitPhase::Submitting.is_busy());
        assert!(SubmitPhase::Submitted.is_busy());
        assert_eq!(SubmitPhase::Submitting.begin(), Err(SiteError::SubmissionInFlight));
        assert_eq!(SubmitPhase::Submitted.begin(), Err(SiteError::SubmissionInFlight));

        let mut state = state();
        state.apply(FormAction::Submit).expect("idle form can submit");
        assert_eq!(state.apply(FormAction::Submit), Err(SiteError::SubmissionInFlight));
        assert_eq!(state.phase, SubmitPhase::Submitting);

        let busy = Rc::new(state);
        assert!(Rc::ptr_eq(&busy, &busy.clone().reduce(FormAction::Submit)));
    }

    #[test]
    fn fields_survive_until_cycle_completes() {
        let state = Rc::new(self::state()).reduce(FormAction::Submit);
        assert_eq!(state.form, filled());

        let state = state.reduce(FormAction::Advance);
        assert_eq!(state.phase, SubmitPhase::Submitted);
        assert_eq!(state.form, filled());

        let state = state.reduce(FormAction::Advance);
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn payload_serializes_every_field() {
        let json = serde_json::to_value(filled()).expect("serializable");
        assert_eq!(json["name"], "Sarah Johnson");
        assert_eq!(json["service"], "home");
        assert_eq!(json["phone"], "");
        assert_eq!(json.as_object().map(|o| o.len()), Some(5));
    }
}
