/// Name of the variable holding the data service base address.
pub const API_URL_ENV: &str = "OPENATLAS_API_URL";

/// Where the data service lives.
///
/// The address is baked in at build time (the web bundle has no process
/// environment). Native builds may override it at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Option<String>,
}

impl ApiConfig {
    /// Build from an optional raw address. Blank addresses count as
    /// missing and a trailing `/` is dropped so endpoint paths join cleanly.
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(|raw| raw.trim().trim_end_matches('/'))
            .filter(|trimmed| !trimmed.is_empty())
            .map(str::to_string);
        Self { base_url }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(Some(base_url))
    }

    pub fn unconfigured() -> Self {
        Self { base_url: None }
    }

    /// Read `OPENATLAS_API_URL`: process environment first on native
    /// targets, then the value captured at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(raw) = std::env::var(API_URL_ENV) {
                let runtime = Self::new(Some(&raw));
                if runtime.is_configured() {
                    return runtime;
                }
            }
        }

        Self::new(option_env!("OPENATLAS_API_URL"))
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_and_whitespace_are_trimmed() {
        let config = ApiConfig::new(Some("  https://api.openatlas.test/ "));
        assert_eq!(config.base_url(), Some("https://api.openatlas.test"));
    }

    #[test]
    fn blank_address_counts_as_missing() {
        assert!(!ApiConfig::new(Some("   ")).is_configured());
        assert!(!ApiConfig::new(None).is_configured());
        assert!(!ApiConfig::unconfigured().is_configured());
    }
}
