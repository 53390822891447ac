//! Frontend Configuration
//!
//! Endpoint paths and UI constants, provided via context by each page root.

/// Runtime configuration for API calls and notifications
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Prefix prepended to every endpoint path (empty = same origin)
    pub base_url: String,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// Name of the hidden input carrying the CSRF token
    pub csrf_field: String,
    /// Header the CSRF token is sent in
    pub csrf_header: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            toast_duration_ms: 5000,
            csrf_field: "csrfmiddlewaretoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, with `data-api-base` on the mount root overriding the base URL
    pub fn from_root(root: &web_sys::Element) -> Self {
        let mut config = Self::default();
        if let Some(base) = root.get_attribute("data-api-base") {
            config.base_url = base.trim_end_matches('/').to_string();
        }
        config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn precreation_url(&self) -> String {
        self.url("/account-precreation/data/")
    }

    pub fn create_customer_url(&self) -> String {
        self.url("/customer/create/")
    }

    pub fn create_guarantor_url(&self) -> String {
        self.url("/guarantor/create/")
    }

    pub fn create_account_url(&self) -> String {
        self.url("/account/create/")
    }

    pub fn make_payment_url(&self, account_number: &str) -> String {
        self.url(&format!("/account/get/{}/make-payment/", account_number))
    }
}
