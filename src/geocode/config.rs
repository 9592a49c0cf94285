use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("isochrone-viewer/", env!("CARGO_PKG_VERSION"));

// Same set as JavaScript's encodeURIComponent, which CORS proxies expect
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Settings for the Nominatim geocoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeConfig {
    /// Base URL of the Nominatim API (without `/search`)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Nominatim's usage policy requires an identifying User-Agent
    pub user_agent: String,
    /// Optional CORS proxy prefix; the search endpoint is percent-encoded and
    /// appended to it
    pub cors_proxy: Option<String>,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cors_proxy: None,
        }
    }
}

impl GeocodeConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Empty strings count as "no proxy"
    pub fn with_cors_proxy(mut self, proxy: Option<String>) -> Self {
        self.cors_proxy = proxy.filter(|p| !p.trim().is_empty());
        self
    }

    /// URL the search request is sent to
    pub fn search_url(&self) -> String {
        let endpoint = format!("{}/search", self.base_url.trim_end_matches('/'));
        match &self.cors_proxy {
            Some(proxy) => {
                format!("{}{}", proxy, utf8_percent_encode(&endpoint, COMPONENT_ENCODE_SET))
            }
            None => endpoint,
        }
    }
}
