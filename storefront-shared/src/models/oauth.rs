use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// External identity providers the storefront can sign in through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    /// Canonical provider name used in sign-out endpoint paths.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuthProvider {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            _ => Err("unknown oauth provider"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn provider_roundtrip() {
        for (text, provider) in [
            ("google", OAuthProvider::Google),
            ("facebook", OAuthProvider::Facebook),
        ] {
            assert_eq!(provider.as_str(), text);
            assert_eq!(provider.to_string(), text);
            assert_eq!(OAuthProvider::from_str(text).unwrap(), provider);
        }
    }

    #[test]
    fn provider_invalid() {
        assert!(OAuthProvider::from_str("github").is_err());
    }

    #[test]
    fn provider_serde_uses_canonical_names() {
        let serialized = serde_json::to_string(&OAuthProvider::Google).unwrap();
        assert_eq!(serialized, "\"google\"");

        let deserialized: OAuthProvider = serde_json::from_str("\"facebook\"").unwrap();
        assert_eq!(deserialized, OAuthProvider::Facebook);
    }
}
