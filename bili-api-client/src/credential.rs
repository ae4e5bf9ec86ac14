//! Bilibili session credential.
//!
//! A `Credential` bundles the login cookies a caller already holds. It is
//! read-only from this crate's perspective: clients borrow it per call and
//! never store or refresh it. Operations that need a specific cookie check
//! for it up front, before any request is sent.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential has no SESSDATA cookie")]
    MissingSessdata,

    #[error("credential has no bili_jct cookie")]
    MissingBiliJct,
}

/// Login cookie bundle.
///
/// All fields are optional; unauthenticated calls work with an empty
/// credential.
#[derive(Debug, Clone, Default)]
pub struct Credential {
    pub sessdata: Option<String>,
    pub bili_jct: Option<String>,
    pub buvid3: Option<String>,
    pub dedeuserid: Option<String>,
}

impl Credential {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sessdata(mut self, sessdata: impl Into<String>) -> Self {
        self.sessdata = Some(sessdata.into());
        self
    }

    #[must_use]
    pub fn with_bili_jct(mut self, bili_jct: impl Into<String>) -> Self {
        self.bili_jct = Some(bili_jct.into());
        self
    }

    #[must_use]
    pub fn with_buvid3(mut self, buvid3: impl Into<String>) -> Self {
        self.buvid3 = Some(buvid3.into());
        self
    }

    #[must_use]
    pub fn with_dedeuserid(mut self, dedeuserid: impl Into<String>) -> Self {
        self.dedeuserid = Some(dedeuserid.into());
        self
    }

    #[must_use]
    pub fn has_sessdata(&self) -> bool {
        self.sessdata.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Fail fast when the session token is absent.
    ///
    /// Called before any request that needs SESSDATA, so a missing login
    /// never costs a network round trip.
    pub fn require_sessdata(&self) -> Result<(), CredentialError> {
        if self.has_sessdata() {
            Ok(())
        } else {
            Err(CredentialError::MissingSessdata)
        }
    }

    /// Fail fast when the CSRF token is absent.
    pub fn require_bili_jct(&self) -> Result<(), CredentialError> {
        match self.bili_jct.as_deref() {
            Some(s) if !s.is_empty() => Ok(()),
            _ => Err(CredentialError::MissingBiliJct),
        }
    }

    /// CSRF form field value, if present.
    #[must_use]
    pub fn csrf(&self) -> Option<&str> {
        self.bili_jct.as_deref()
    }

    /// Cookie header value joining all present cookies.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        let pairs = [
            ("SESSDATA", self.sessdata.as_deref()),
            ("bili_jct", self.bili_jct.as_deref()),
            ("buvid3", self.buvid3.as_deref()),
            ("DedeUserID", self.dedeuserid.as_deref()),
        ];
        let cookie = pairs
            .iter()
            .filter_map(|(name, value)| value.map(|v| format!("{name}={v}")))
            .collect::<Vec<_>>()
            .join("; ");

        if cookie.is_empty() {
            None
        } else {
            Some(cookie)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_sessdata_missing() {
        let credential = Credential::new();
        assert!(matches!(
            credential.require_sessdata(),
            Err(CredentialError::MissingSessdata)
        ));
    }

    #[test]
    fn test_require_sessdata_empty_string() {
        let credential = Credential::new().with_sessdata("");
        assert!(credential.require_sessdata().is_err());
        assert!(!credential.has_sessdata());
    }

    #[test]
    fn test_require_sessdata_present() {
        let credential = Credential::new().with_sessdata("token");
        assert!(credential.require_sessdata().is_ok());
    }

    #[test]
    fn test_require_bili_jct() {
        let credential = Credential::new().with_sessdata("token");
        assert!(credential.require_bili_jct().is_err());
        let credential = credential.with_bili_jct("csrf");
        assert!(credential.require_bili_jct().is_ok());
        assert_eq!(credential.csrf(), Some("csrf"));
    }

    #[test]
    fn test_cookie_header_joins_present_cookies() {
        let credential = Credential::new()
            .with_sessdata("abc")
            .with_buvid3("xyz");
        assert_eq!(
            credential.cookie_header().as_deref(),
            Some("SESSDATA=abc; buvid3=xyz")
        );
    }

    #[test]
    fn test_cookie_header_empty() {
        assert_eq!(Credential::new().cookie_header(), None);
    }
}
