use crate::core::notice::Notice;

/// Shown when the endpoint is missing or malformed
pub const CONFIGURATION_ERROR_MESSAGE: &str =
    "Configuration error: the contact form endpoint is not set up. Please try again later.";

/// Shown when the delivery call fails
pub const DELIVERY_ERROR_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

/// Why the configured endpoint can't be used
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("no contact endpoint configured")]
    Missing,

    #[error("contact endpoint {0:?} does not use http or https")]
    NotHttp(String),

    #[error("contact endpoint {url:?} is not a valid URL: {reason}")]
    Malformed { url: String, reason: String },
}

/// Contact submission errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// Endpoint missing or malformed, permanent for the page's lifetime
    #[error("configuration error: {0}")]
    Configuration(#[from] EndpointError),

    /// Transport-level failure of the delivery call
    #[error("delivery error: {0}")]
    Delivery(String),
}

impl ContactError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, ContactError::Configuration(_))
    }

    /// Generic, user-facing message for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            ContactError::Configuration(_) => CONFIGURATION_ERROR_MESSAGE,
            ContactError::Delivery(_) => DELIVERY_ERROR_MESSAGE,
        }
    }

    pub fn notice(&self) -> Notice {
        Notice::error(self.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notice::NoticeKind;

    #[test]
    fn test_user_messages_differ() {
        let config = ContactError::from(EndpointError::Missing);
        let delivery = ContactError::Delivery("offline".to_string());

        assert!(config.is_configuration());
        assert!(!delivery.is_configuration());
        assert_ne!(config.user_message(), delivery.user_message());
        assert!(config.user_message().starts_with("Configuration error"));
    }

    #[test]
    fn test_notice_is_error_kind() {
        let notice = ContactError::Delivery("timeout".to_string()).notice();

        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, DELIVERY_ERROR_MESSAGE);
    }

    #[test]
    fn test_details_stay_out_of_user_message() {
        let err = ContactError::Delivery("TypeError: Failed to fetch".to_string());

        assert!(err.to_string().contains("Failed to fetch"));
        assert!(!err.user_message().contains("Failed to fetch"));
    }
}
