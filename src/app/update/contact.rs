use super::super::state::{App, ContactStatus};
use super::Effect;
use crate::contact::ContactOutcome;
use iced::widget::text_editor;
use tracing::warn;

const MSG_REQUIRED: &str = "All fields are required.";
const MSG_UNREACHABLE: &str = "Could not reach the contact service. Please try again later.";

impl App {
    pub(super) fn handle_contact_name_changed(&mut self, name: String) {
        self.contact.name = name;
    }

    pub(super) fn handle_contact_email_changed(&mut self, email: String) {
        self.contact.email = email;
    }

    pub(super) fn handle_contact_message_edited(&mut self, action: text_editor::Action) {
        self.contact.message.perform(action);
    }

    pub(super) fn handle_submit_contact(&mut self, effects: &mut Vec<Effect>) {
        if self.contact.is_sending() {
            return;
        }
        let request = self.contact.request();
        if !request.is_complete() {
            self.show_contact_status(ContactStatus::Failed(MSG_REQUIRED.to_string()), effects);
            return;
        }
        self.contact.status = ContactStatus::Sending;
        effects.push(Effect::SubmitContact(request));
    }

    pub(super) fn handle_contact_finished(
        &mut self,
        result: Result<ContactOutcome, String>,
        effects: &mut Vec<Effect>,
    ) {
        let status = match result {
            Ok(ContactOutcome::Sent(receipt)) => {
                self.contact.clear_fields();
                ContactStatus::Sent(receipt.message)
            }
            Ok(ContactOutcome::Rejected { error, .. }) => ContactStatus::Failed(error),
            Err(err) => {
                warn!("Contact submission failed: {err}");
                ContactStatus::Failed(MSG_UNREACHABLE.to_string())
            }
        };
        self.show_contact_status(status, effects);
    }

    pub(super) fn handle_contact_status_expired(&mut self, generation: u64) {
        if generation == self.contact.status_generation && !self.contact.is_sending() {
            self.contact.status = ContactStatus::Idle;
        }
    }

    fn show_contact_status(&mut self, status: ContactStatus, effects: &mut Vec<Effect>) {
        self.contact.status = status;
        self.contact.status_generation = self.contact.status_generation.wrapping_add(1);
        effects.push(Effect::ScheduleStatusClear {
            generation: self.contact.status_generation,
        });
    }
}
