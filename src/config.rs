use crate::auth::AuthHeader;

pub const BASE_URL_VAR: &str = "CLOUD_API_BASE_URL";
pub const TOKEN_VAR: &str = "CLOUD_API_TOKEN";

pub const DEFAULT_BASE_URL: &str = "https://example-cloud-api.com";
pub const DEFAULT_TOKEN: &str = "your_token_here";

#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    auth: AuthHeader,
}

impl Config {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: AuthHeader::bearer(token),
        }
    }

    pub fn from_env() -> Self {
        let base_url = env_or(BASE_URL_VAR, DEFAULT_BASE_URL);
        let token = env_or(TOKEN_VAR, DEFAULT_TOKEN);

        Config::new(base_url, token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth(&self) -> &AuthHeader {
        &self.auth
    }

    pub fn resources_url(&self) -> String {
        format!("{}/resources", self.base_url)
    }

    pub fn resource_url(&self, id: &str) -> String {
        format!("{}/resources/{id}", self.base_url)
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var_os(var)
        .and_then(|value| value.into_string().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_onto_base() {
        let config = Config::new("http://127.0.0.1:8080/", "token");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(config.resources_url(), "http://127.0.0.1:8080/resources");
        assert_eq!(
            config.resource_url("res-7"),
            "http://127.0.0.1:8080/resources/res-7"
        );
    }

    #[test]
    fn unset_variable_uses_default() {
        assert_eq!(
            env_or("CUMULUS_TEST_SURELY_UNSET", DEFAULT_BASE_URL),
            DEFAULT_BASE_URL
        );
    }
}
