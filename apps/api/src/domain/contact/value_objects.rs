use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

lazy_static! {
    static ref CONTACT_NAME_REGEX: regex::Regex =
        regex::Regex::new(r"^[\p{L}\p{M}][\p{L}\p{M} .'\-]*$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MessageType {
    Enquiry,
    Feedback,
    Suggestion,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = 100), regex(path = *CONTACT_NAME_REGEX))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
    pub message_type: MessageType,
}

impl ContactMessage {
    pub fn new(
        name: String,
        email: String,
        message: String,
        message_type: MessageType,
    ) -> Result<Self, validator::ValidationErrors> {
        let contact = Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
            message_type,
        };
        contact.validate()?;
        Ok(contact)
    }
}
