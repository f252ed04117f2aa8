//! Contact form delivery
//!
//! - [`Endpoint`]: validated delivery URL
//! - [`SubmissionRequest`]: per-attempt payload and its query string
//! - [`SubmissionController`]: submit button state machine
//! - [`Delivery`]: transport seam, [`FetchDelivery`] in the browser

mod controller;
mod delivery;
mod endpoint;
mod error;
mod request;

pub use controller::{
    AttemptToken, ButtonTone, PendingDelivery, RETRY_LABEL, SENDING_LABEL, SENT_LABEL,
    SUCCESS_MESSAGE, Settlement, SubmissionController, SubmitButton, SubmitPhase,
};
pub use delivery::{Delivery, FetchDelivery, dispatch, response_outcome};
pub use endpoint::Endpoint;
pub use error::{
    CONFIGURATION_ERROR_MESSAGE, ContactError, DELIVERY_ERROR_MESSAGE, EndpointError,
};
pub use request::{ContactFields, PHONE_PLACEHOLDER, SubmissionRequest, TIMESTAMP_FORMAT};
