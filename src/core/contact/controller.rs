//! Contact form submission state machine
//!
//! [`SubmissionController`] owns the submit button's presentation and walks
//! one attempt at a time through:
//!
//! ```text
//! Idle ──begin──▶ Submitting ──settle(Ok)──▶ Succeeded ──recover──▶ Idle
//!   │                  └──────settle(Err)──▶ Failed    ──recover──▶ Idle
//!   └─begin with a bad endpoint: stays Idle, returns ContactError::Configuration
//! ```
//!
//! Validation happens synchronously inside [`SubmissionController::begin`].
//! Every accepted attempt bumps a generation counter and hands out an
//! [`AttemptToken`]; `settle` and `recover` ignore tokens from older attempts,
//! so a stale cooldown timer can never revert a newer attempt's button.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use url::Url;

use super::{ContactError, ContactFields, Endpoint, EndpointError, SubmissionRequest};
use crate::core::config::SiteConfig;
use crate::core::notice::Notice;

/// Button label while the delivery call is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Button label after a successful delivery
pub const SENT_LABEL: &str = "Message Sent! ✓";

/// Button label after a failed delivery
pub const RETRY_LABEL: &str = "Error - Try Again";

/// Notification shown after a successful delivery
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Where the current attempt stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Background treatment of the submit button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonTone {
    #[default]
    Neutral,
    Success,
    Error,
}

impl ButtonTone {
    pub fn background(&self) -> Option<&'static str> {
        match self {
            ButtonTone::Neutral => None,
            ButtonTone::Success => Some("#4caf50"),
            ButtonTone::Error => Some("#f44336"),
        }
    }
}

/// Presentation state of the submit button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    /// Reduced opacity while sending
    pub dimmed: bool,
    pub tone: ButtonTone,
}

impl SubmitButton {
    fn neutral(label: &str) -> Self {
        Self {
            label: label.to_string(),
            disabled: false,
            dimmed: false,
            tone: ButtonTone::Neutral,
        }
    }

    /// Inline style for the button element
    pub fn style(&self) -> String {
        let opacity = if self.dimmed { "0.7" } else { "1" };
        match self.tone.background() {
            Some(color) => format!("opacity: {opacity}; background-color: {color};"),
            None => format!("opacity: {opacity};"),
        }
    }
}

/// Identifies one accepted submission attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttemptToken(u64);

/// An accepted attempt, ready for its delivery call
#[derive(Clone, Debug)]
pub struct PendingDelivery {
    pub token: AttemptToken,
    pub request: SubmissionRequest,
    pub url: Url,
}

/// What the page should do once an attempt has settled
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub token: AttemptToken,
    /// `Succeeded` or `Failed`
    pub phase: SubmitPhase,
    pub notice: Notice,
    /// Empty the form fields
    pub clear_form: bool,
}

/// Drives the submit button through one attempt at a time
#[derive(Clone, Debug)]
pub struct SubmissionController {
    endpoint: Result<Endpoint, EndpointError>,
    original_label: String,
    button: SubmitButton,
    phase: SubmitPhase,
    generation: u64,
}

impl SubmissionController {
    /// Create a controller. The endpoint is validated once, here.
    pub fn new(config: &SiteConfig, label: impl Into<String>) -> Self {
        let original_label = label.into();
        Self {
            endpoint: Endpoint::parse(config.contact_endpoint.as_deref()),
            button: SubmitButton::neutral(&original_label),
            original_label,
            phase: SubmitPhase::Idle,
            generation: 0,
        }
    }

    pub fn endpoint(&self) -> Result<&Endpoint, &EndpointError> {
        self.endpoint.as_ref()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn original_label(&self) -> &str {
        &self.original_label
    }

    /// Start an attempt.
    ///
    /// With a usable endpoint the button switches to its sending look and the
    /// returned [`PendingDelivery`] carries the request URL. Otherwise the
    /// button is restored to neutral straight away and a configuration error
    /// is returned; no delivery must be made.
    pub fn begin<Tz>(
        &mut self,
        fields: ContactFields,
        at: DateTime<Tz>,
    ) -> Result<PendingDelivery, ContactError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let endpoint = match &self.endpoint {
            Ok(endpoint) => endpoint,
            Err(err) => {
                // a bad endpoint also invalidates any pending cooldown
                self.generation += 1;
                self.phase = SubmitPhase::Idle;
                self.button = SubmitButton::neutral(&self.original_label);
                return Err(ContactError::Configuration(err.clone()));
            }
        };

        self.generation += 1;
        let token = AttemptToken(self.generation);

        let request = SubmissionRequest::new(fields, at);
        let url = request.delivery_url(endpoint);

        self.phase = SubmitPhase::Submitting;
        self.button = SubmitButton {
            label: SENDING_LABEL.to_string(),
            disabled: true,
            dimmed: true,
            tone: ButtonTone::Neutral,
        };

        Ok(PendingDelivery {
            token,
            request,
            url,
        })
    }

    /// Apply the outcome of the delivery call for `token`.
    ///
    /// Returns `None` when a newer attempt has started since.
    pub fn settle(
        &mut self,
        token: AttemptToken,
        result: Result<(), ContactError>,
    ) -> Option<Settlement> {
        if !self.is_current(token) || self.phase != SubmitPhase::Submitting {
            tracing::debug!("Ignoring settlement of stale attempt {:?}", token);
            return None;
        }

        let settlement = match result {
            Ok(()) => {
                self.phase = SubmitPhase::Succeeded;
                // stays disabled until the cooldown ends
                self.button = SubmitButton {
                    label: SENT_LABEL.to_string(),
                    disabled: true,
                    dimmed: false,
                    tone: ButtonTone::Success,
                };
                Settlement {
                    token,
                    phase: SubmitPhase::Succeeded,
                    notice: Notice::success(SUCCESS_MESSAGE),
                    clear_form: true,
                }
            }
            Err(err) => {
                self.phase = SubmitPhase::Failed;
                self.button = SubmitButton {
                    label: RETRY_LABEL.to_string(),
                    disabled: false,
                    dimmed: false,
                    tone: ButtonTone::Error,
                };
                Settlement {
                    token,
                    phase: SubmitPhase::Failed,
                    notice: err.notice(),
                    clear_form: false,
                }
            }
        };

        Some(settlement)
    }

    /// End the cooldown for `token`, returning the button to neutral.
    ///
    /// Returns false for stale tokens and attempts that haven't settled.
    pub fn recover(&mut self, token: AttemptToken) -> bool {
        if !self.is_current(token)
            || !matches!(self.phase, SubmitPhase::Succeeded | SubmitPhase::Failed)
        {
            tracing::debug!("Ignoring stale cooldown for attempt {:?}", token);
            return false;
        }

        self.phase = SubmitPhase::Idle;
        self.button = SubmitButton::neutral(&self.original_label);
        true
    }

    fn is_current(&self, token: AttemptToken) -> bool {
        token.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::{DELIVERY_ERROR_MESSAGE, PHONE_PLACEHOLDER};
    use crate::core::notice::NoticeKind;
    use chrono::Utc;

    const LABEL: &str = "Send Message";

    fn configured() -> SubmissionController {
        let config = SiteConfig {
            contact_endpoint: Some("https://script.google.com/macros/s/abc/exec".to_string()),
            ..SiteConfig::default()
        };
        SubmissionController::new(&config, LABEL)
    }

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            message: "Hi".to_string(),
        }
    }

    fn assert_neutral(controller: &SubmissionController) {
        let button = controller.button();
        assert_eq!(button.label, LABEL);
        assert!(!button.disabled);
        assert!(!button.dimmed);
        assert_eq!(button.tone, ButtonTone::Neutral);
    }

    #[test]
    fn test_new_controller_is_idle() {
        let controller = configured();

        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert_eq!(controller.original_label(), LABEL);
        assert!(controller.endpoint().is_ok());
        assert_neutral(&controller);
    }

    #[test]
    fn test_begin_without_endpoint_is_configuration_error() {
        let mut controller = SubmissionController::new(&SiteConfig::default(), LABEL);

        let err = controller.begin(fields(), Utc::now()).unwrap_err();

        assert_eq!(err, ContactError::Configuration(EndpointError::Missing));
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert_neutral(&controller);
    }

    #[test]
    fn test_begin_enters_submitting() {
        let mut controller = configured();

        let pending = controller.begin(fields(), Utc::now()).unwrap();

        assert_eq!(controller.phase(), SubmitPhase::Submitting);
        let button = controller.button();
        assert_eq!(button.label, SENDING_LABEL);
        assert!(button.disabled);
        assert!(button.dimmed);
        assert_eq!(button.style(), "opacity: 0.7;");
        assert_eq!(pending.request.phone(), PHONE_PLACEHOLDER);
        assert!(
            pending
                .url
                .as_str()
                .starts_with("https://script.google.com/macros/s/abc/exec?timestamp=")
        );
    }

    #[test]
    fn test_success_path() {
        let mut controller = configured();
        let pending = controller.begin(fields(), Utc::now()).unwrap();

        let settlement = controller.settle(pending.token, Ok(())).unwrap();

        assert_eq!(settlement.phase, SubmitPhase::Succeeded);
        assert!(settlement.clear_form);
        assert_eq!(settlement.notice, Notice::success(SUCCESS_MESSAGE));
        assert_eq!(controller.button().label, SENT_LABEL);
        assert!(controller.button().disabled);
        assert_eq!(controller.button().style(), "opacity: 1; background-color: #4caf50;");

        assert!(controller.recover(settlement.token));
        assert_eq!(controller.phase(), SubmitPhase::Idle);
        assert_neutral(&controller);
    }

    #[test]
    fn test_failure_reenables_immediately() {
        let mut controller = configured();
        let pending = controller.begin(fields(), Utc::now()).unwrap();

        let settlement = controller
            .settle(pending.token, Err(ContactError::Delivery("offline".to_string())))
            .unwrap();

        assert_eq!(settlement.phase, SubmitPhase::Failed);
        assert!(!settlement.clear_form);
        assert_eq!(settlement.notice.kind, NoticeKind::Error);
        assert_eq!(settlement.notice.message, DELIVERY_ERROR_MESSAGE);
        assert_eq!(controller.button().label, RETRY_LABEL);
        assert!(!controller.button().disabled);
        assert_eq!(controller.button().tone, ButtonTone::Error);

        assert!(controller.recover(settlement.token));
        assert_neutral(&controller);
    }

    #[test]
    fn test_recover_before_settle_is_ignored() {
        let mut controller = configured();
        let pending = controller.begin(fields(), Utc::now()).unwrap();

        assert!(!controller.recover(pending.token));
        assert_eq!(controller.phase(), SubmitPhase::Submitting);
    }

    #[test]
    fn test_stale_cooldown_does_not_revert_new_attempt() {
        let mut controller = configured();
        let first = controller.begin(fields(), Utc::now()).unwrap();
        let first = controller
            .settle(first.token, Err(ContactError::Delivery("offline".to_string())))
            .unwrap();

        // retry during the cooldown window
        let second = controller.begin(fields(), Utc::now()).unwrap();

        assert!(!controller.recover(first.token));
        assert_eq!(controller.button().label, SENDING_LABEL);
        assert!(controller.settle(second.token, Ok(())).is_some());
    }

    #[test]
    fn test_stale_settlement_is_ignored() {
        let mut controller = configured();
        let first = controller.begin(fields(), Utc::now()).unwrap();
        let second = controller.begin(fields(), Utc::now()).unwrap();

        assert!(controller.settle(first.token, Ok(())).is_none());
        assert_eq!(controller.phase(), SubmitPhase::Submitting);
        assert!(controller.settle(second.token, Ok(())).is_some());
        // settling twice does nothing
        assert!(controller.settle(second.token, Ok(())).is_none());
    }

    #[test]
    fn test_configuration_error_cancels_pending_cooldown() {
        let mut controller = configured();
        let pending = controller.begin(fields(), Utc::now()).unwrap();
        let settlement = controller
            .settle(pending.token, Err(ContactError::Delivery("offline".to_string())))
            .unwrap();

        controller.endpoint = Err(EndpointError::Missing);
        assert!(controller.begin(fields(), Utc::now()).is_err());

        assert_neutral(&controller);
        assert!(!controller.recover(settlement.token));
    }
}
