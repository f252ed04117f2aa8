//! Outbound delivery call

use url::Url;

use super::{ContactError, PendingDelivery};
use crate::core::config::DeliveryMode;

/// Transport for the delivery call
#[allow(async_fn_in_trait)]
pub trait Delivery {
    /// Issue a GET to `url`. `Ok` means the transport completed.
    async fn deliver(&self, url: &Url) -> Result<(), ContactError>;
}

/// Browser `fetch` transport
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchDelivery {
    mode: DeliveryMode,
}

impl FetchDelivery {
    pub fn new(mode: DeliveryMode) -> Self {
        Self { mode }
    }
}

/// Map a completed fetch to the delivery outcome for `mode`.
///
/// An opaque response always reports status 0, so only `Verified` looks at it.
pub fn response_outcome(
    mode: DeliveryMode,
    ok: bool,
    status: u16,
    status_text: &str,
) -> Result<(), ContactError> {
    match mode {
        DeliveryMode::Opaque => Ok(()),
        DeliveryMode::Verified if ok => Ok(()),
        DeliveryMode::Verified => Err(ContactError::Delivery(format!(
            "endpoint answered {status} {status_text}"
        ))),
    }
}

impl Delivery for FetchDelivery {
    async fn deliver(&self, url: &Url) -> Result<(), ContactError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestMode;

            let request_mode = match self.mode {
                DeliveryMode::Opaque => RequestMode::NoCors,
                DeliveryMode::Verified => RequestMode::Cors,
            };

            let response = Request::get(url.as_str())
                .mode(request_mode)
                .send()
                .await
                .map_err(|e| ContactError::Delivery(e.to_string()))?;

            response_outcome(
                self.mode,
                response.ok(),
                response.status(),
                &response.status_text(),
            )
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ContactError::Delivery(
                "fetch is only available in the browser".to_string(),
            ))
        }
    }
}

/// Run the delivery call for `pending`, logging the outcome
pub async fn dispatch<D: Delivery>(
    delivery: &D,
    pending: &PendingDelivery,
) -> Result<(), ContactError> {
    tracing::info!("Submitting contact form ({:?})", pending.token);

    let result = delivery.deliver(&pending.url).await;
    match &result {
        Ok(()) => tracing::info!("Contact form delivered ({:?})", pending.token),
        Err(e) => tracing::error!("Error submitting form: {}", e),
    }
    result
}
