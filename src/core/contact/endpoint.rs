//! Delivery endpoint validation

use url::Url;

use super::EndpointError;

/// A validated http(s) delivery endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Validate the configured endpoint value.
    ///
    /// The value must be non-empty, start with `http://` or `https://` and
    /// parse as an absolute URL.
    pub fn parse(raw: Option<&str>) -> Result<Self, EndpointError> {
        let raw = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(EndpointError::Missing)?;

        let lower = raw.to_ascii_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(EndpointError::NotHttp(raw.to_string()));
        }

        let url = Url::parse(raw).map_err(|e| EndpointError::Malformed {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self(url))
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        let endpoint =
            Endpoint::parse(Some("https://script.google.com/macros/s/abc/exec")).unwrap();

        assert_eq!(endpoint.url().host_str(), Some("script.google.com"));
        assert_eq!(endpoint.url().as_str(), "https://script.google.com/macros/s/abc/exec");
    }

    #[test]
    fn test_accepts_http_and_trims() {
        assert!(Endpoint::parse(Some("  http://localhost:8080/hook ")).is_ok());
        assert!(Endpoint::parse(Some("HTTPS://EXAMPLE.COM")).is_ok());
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(Endpoint::parse(None), Err(EndpointError::Missing));
        assert_eq!(Endpoint::parse(Some("")), Err(EndpointError::Missing));
        assert_eq!(Endpoint::parse(Some("   ")), Err(EndpointError::Missing));
    }

    #[test]
    fn test_rejects_other_schemes() {
        for raw in [
            "ftp://example.com",
            "script.google.com/macros/s/abc/exec",
            "YOUR_GOOGLE_SCRIPT_URL",
            "javascript:alert(1)",
            "httpx://example.com",
        ] {
            assert!(
                matches!(Endpoint::parse(Some(raw)), Err(EndpointError::NotHttp(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_http() {
        let err = Endpoint::parse(Some("http://")).unwrap_err();
        assert!(matches!(err, EndpointError::Malformed { .. }));
    }
}
