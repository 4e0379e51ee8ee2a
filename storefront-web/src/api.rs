use once_cell::unsync::OnceCell;
use reqwest::{Client, Error};
use shared::models::OAuthProvider;

const DEFAULT_BASE_URL: &str = "/api";

thread_local! {
    static SHARED_CLIENT: OnceCell<AuthClient> = OnceCell::new();
}

/// Lightweight client for the storefront auth endpoints.
#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
    client: Client,
}

impl AuthClient {
    /// Create a new client against the provided base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Process-wide client against the default base URL.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(DEFAULT_BASE_URL)).clone())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sign out of the external identity `provider`.
    ///
    /// Succeeds only when the endpoint acknowledges the sign-out; callers
    /// gate user-visible confirmation on the result.
    pub async fn sign_out(&self, provider: OAuthProvider) -> Result<(), Error> {
        let url = self.api_url(&format!("auth/{}/signout", provider.as_str()));
        self.client
            .post(url)
            .send()
            .await?
            .error_for_status()
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_segments() {
        let client = AuthClient::new("/api");
        assert_eq!(
            client.api_url("auth/google/signout"),
            "/api/auth/google/signout"
        );
        assert_eq!(
            client.api_url("/auth/google/signout"),
            "/api/auth/google/signout"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = AuthClient::new("https://shop.example/api/");
        assert_eq!(
            client.api_url("auth/facebook/signout"),
            "https://shop.example/api/auth/facebook/signout"
        );
    }
}
