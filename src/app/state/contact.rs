use folio_core::ContactRequest;
use iced::widget::text_editor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContactStatus {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

pub(crate) struct ContactFormState {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) message: text_editor::Content,
    pub(crate) status: ContactStatus,
    /// Bumped whenever a status is shown so stale clear timers are ignored.
    pub(crate) status_generation: u64,
}

impl ContactFormState {
    pub(crate) fn new() -> Self {
        ContactFormState {
            name: String::new(),
            email: String::new(),
            message: text_editor::Content::new(),
            status: ContactStatus::Idle,
            status_generation: 0,
        }
    }

    pub(crate) fn request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.text().trim().to_string(),
        }
    }

    pub(crate) fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message = text_editor::Content::new();
    }

    pub(crate) fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }
}
