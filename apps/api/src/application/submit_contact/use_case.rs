use super::dto::ContactRequest;
use crate::domain::contact::value_objects::ContactMessage;
use crate::domain::notice::channel::NoticeChannel;
use crate::domain::notice::entity::{Notice, Severity};
use crate::domain::shared::errors::DomainError;
use std::sync::Arc;

pub struct SubmitContactUseCase {
    notices: Arc<dyn NoticeChannel>,
}

impl SubmitContactUseCase {
    pub fn new(notices: Arc<dyn NoticeChannel>) -> Self {
        Self { notices }
    }

    /// Validates the form and acknowledges it. Submissions are logged, not stored.
    pub fn execute(&self, request: ContactRequest) -> Result<Notice, DomainError> {
        let contact = ContactMessage::new(
            request.name,
            request.email,
            request.message,
            request.message_type,
        )
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        tracing::info!(
            message_type = ?contact.message_type,
            message_length = contact.message.len(),
            "contact form submitted"
        );

        Ok(self.notices.notify(
            Severity::Success,
            "Success!",
            "Your message has been submitted.",
        ))
    }
}
