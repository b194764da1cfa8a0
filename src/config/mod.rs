use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::{Error, Result};

#[cfg(test)]
mod tests;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings applied to every request a helper sends.
///
/// Base address, timeout and cache directive are read each time a request is
/// sent, so changing them affects the next request. `use_proxy` is only read
/// when the underlying client is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_address: Option<Url>,
    timeout: Duration,
    cache_enabled: bool,
    use_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_address: None,
            timeout: DEFAULT_TIMEOUT,
            cache_enabled: true,
            use_proxy: false,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Honour system proxy settings when the client is created.
    pub fn use_proxy(mut self, use_proxy: bool) -> Self {
        self.use_proxy = use_proxy;
        self
    }

    pub fn proxy_enabled(&self) -> bool {
        self.use_proxy
    }

    pub fn base_address(&self) -> Option<&Url> {
        self.base_address.as_ref()
    }

    /// Returns `Ok(false)` for an empty address and leaves the current one in
    /// place. An address that does not parse is an error.
    pub fn set_base_address(&mut self, address: &str) -> Result<bool> {
        if address.is_empty() {
            warn!("null/empty base address");
            return Ok(false);
        }

        let url = Url::parse(address).map_err(|source| Error::MalformedTarget {
            target: address.to_string(),
            source,
        })?;
        self.base_address = Some(url);
        Ok(true)
    }

    pub fn set_base_url(&mut self, url: Url) {
        self.base_address = Some(url);
    }

    pub fn clear_base_address(&mut self) {
        self.base_address = None;
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn set_timeout_secs(&mut self, seconds: i64) -> bool {
        if seconds < 0 {
            warn!(seconds, "negative timeout rejected");
            return false;
        }

        self.timeout = Duration::from_secs(seconds as u64);
        true
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    pub fn enable_cache(&mut self) {
        self.cache_enabled = true;
    }

    /// Requests go out with `Cache-Control: no-cache` until the cache is
    /// enabled again.
    pub fn disable_cache(&mut self) {
        self.cache_enabled = false;
    }
}
