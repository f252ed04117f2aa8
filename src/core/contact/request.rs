//! Contact form payload

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use url::Url;

use super::Endpoint;

/// Sent in place of an empty phone number
pub const PHONE_PLACEHOLDER: &str = "N/A";

/// Matches the browser's en-US `toLocaleString()`, e.g. `3/7/2026, 3:04:05 PM`
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Raw values of the four contact form fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// One submission attempt's payload. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRequest {
    timestamp: String,
    name: String,
    email: String,
    phone: String,
    message: String,
}

impl SubmissionRequest {
    /// Build a request stamped with `at`
    pub fn new<Tz>(fields: ContactFields, at: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let phone = if fields.phone.trim().is_empty() {
            PHONE_PLACEHOLDER.to_string()
        } else {
            fields.phone
        };

        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            name: fields.name,
            email: fields.email,
            phone,
            message: fields.message,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Query parameters in wire order
    pub fn query_pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("timestamp", self.timestamp.as_str()),
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("message", self.message.as_str()),
        ]
    }

    /// `endpoint` with the payload appended as form-urlencoded query parameters
    pub fn delivery_url(&self, endpoint: &Endpoint) -> Url {
        let mut url = endpoint.url().clone();
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 3, 7, hour, 4, 5)
            .unwrap()
    }

    fn fields() -> ContactFields {
        ContactFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            message: "Hello & welcome".to_string(),
        }
    }

    #[test]
    fn test_timestamp_format() {
        let afternoon = SubmissionRequest::new(fields(), at(15));
        let midnight = SubmissionRequest::new(fields(), at(0));

        assert_eq!(afternoon.timestamp(), "3/7/2026, 3:04:05 PM");
        assert_eq!(midnight.timestamp(), "3/7/2026, 12:04:05 AM");
    }

    #[test]
    fn test_empty_phone_uses_placeholder() {
        let request = SubmissionRequest::new(
            ContactFields {
                phone: String::new(),
                ..fields()
            },
            at(9),
        );

        assert_eq!(request.phone(), PHONE_PLACEHOLDER);
    }

    #[test]
    fn test_blank_phone_uses_placeholder() {
        let request = SubmissionRequest::new(
            ContactFields {
                phone: "   ".to_string(),
                ..fields()
            },
            at(9),
        );

        assert_eq!(request.phone(), "N/A");
    }

    #[test]
    fn test_fields_kept_verbatim() {
        let request = SubmissionRequest::new(fields(), at(9));

        assert_eq!(request.name(), "Jane Doe");
        assert_eq!(request.email(), "jane@example.com");
        assert_eq!(request.phone(), "+1 555 0100");
        assert_eq!(request.message(), "Hello & welcome");
    }

    #[test]
    fn test_query_pairs_order() {
        let request = SubmissionRequest::new(fields(), at(9));
        let keys: Vec<&str> = request.query_pairs().iter().map(|(k, _)| *k).collect();

        assert_eq!(keys, ["timestamp", "name", "email", "phone", "message"]);
    }

    #[test]
    fn test_delivery_url_encoding() {
        let endpoint =
            Endpoint::parse(Some("https://script.google.com/macros/s/abc/exec")).unwrap();
        let url = SubmissionRequest::new(fields(), at(15)).delivery_url(&endpoint);

        assert_eq!(
            url.as_str(),
            "https://script.google.com/macros/s/abc/exec\
             ?timestamp=3%2F7%2F2026%2C+3%3A04%3A05+PM\
             &name=Jane+Doe\
             &email=jane%40example.com\
             &phone=%2B1+555+0100\
             &message=Hello+%26+welcome"
        );
    }

    #[test]
    fn test_delivery_url_keeps_existing_query() {
        let endpoint = Endpoint::parse(Some("https://example.com/hook?sheet=leads")).unwrap();
        let url = SubmissionRequest::new(fields(), at(15)).delivery_url(&endpoint);

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("sheet".to_string(), "leads".to_string()));
        assert_eq!(pairs[1].0, "timestamp");
        assert_eq!(pairs[5], ("message".to_string(), "Hello & welcome".to_string()));
    }
}
