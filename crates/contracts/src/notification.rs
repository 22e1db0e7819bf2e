//! NotificationRequest - one publish to one topic

use bytes::Bytes;

/// Ephemeral request built per publish call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Topic the message goes to
    pub topic: String,

    /// Message text, sent as raw UTF-8
    pub body: String,
}

impl NotificationRequest {
    pub fn new(topic: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            body: body.into(),
        }
    }

    /// Request body as wire bytes
    pub fn payload(&self) -> Bytes {
        Bytes::from(self.body.clone().into_bytes())
    }
}
