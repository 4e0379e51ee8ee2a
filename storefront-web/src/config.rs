//! Frontend configuration module
//!
//! Contact points and external profile links surfaced by the navigation
//! bar.

/// Frontend configuration for contact and social links
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Customer-service email address
    pub contact_email: String,
    /// Customer-service phone number
    pub contact_phone: String,
    /// Company profile URL
    pub linkedin_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            contact_email: option_env!("STOREFRONT_CONTACT_EMAIL")
                .unwrap_or("service@storefront.example")
                .to_string(),
            contact_phone: option_env!("STOREFRONT_CONTACT_PHONE")
                .unwrap_or("+886-2-2345-6789")
                .to_string(),
            linkedin_url: option_env!("STOREFRONT_LINKEDIN_URL")
                .unwrap_or("https://www.linkedin.com/company/storefront")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the customer-service email address
    #[must_use]
    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    /// Get the customer-service phone number
    #[must_use]
    pub fn contact_phone(&self) -> &str {
        &self.contact_phone
    }

    /// Get the company profile URL
    #[must_use]
    pub fn linkedin_url(&self) -> &str {
        &self.linkedin_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(config.contact_email().contains('@'));
        assert!(!config.contact_phone().is_empty());
        assert!(config.linkedin_url().starts_with("http"));
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.contact_email(), config2.contact_email());
        assert_eq!(config1.linkedin_url(), config2.linkedin_url());
    }
}
