use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::CheckError;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader {
    token: String,
}

impl AuthHeader {
    pub fn bearer(token: impl Into<String>) -> Self {
        AuthHeader {
            token: token.into(),
        }
    }

    pub fn value(&self) -> String {
        format!("{BEARER_PREFIX}{}", self.token)
    }

    pub fn header_map(&self) -> Result<HeaderMap, CheckError> {
        let mut value = HeaderValue::from_str(&self.value())
            .map_err(|_| CheckError::Config("bearer token is not a valid header value".into()))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    pub fn matches(&self, header: &str) -> bool {
        let Some(token) = header.strip_prefix(BEARER_PREFIX) else {
            return false;
        };

        token == self.token
    }
}

impl std::fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeader").field("token", &"<redacted>").finish()
    }
}
