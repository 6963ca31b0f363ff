use url::Url;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SidebarError;

/// Site-level settings the sidebar needs: origin, base URL and behaviour flags.
///
/// With the `serde` feature enabled, this type derives `Serialize`/`Deserialize`
/// using camelCase keys (`url`, `baseUrl`, `autoCollapseCategories`). Call
/// [`SidebarConfig::validate`] after deserializing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarConfig {
    /// Absolute origin of the site, e.g. `https://docs.example.com`.
    #[cfg_attr(feature = "serde", serde(default, rename = "url"))]
    pub site_url: Option<Url>,
    /// Path prefix under which the site is served; starts and ends with `/`.
    #[cfg_attr(feature = "serde", serde(default = "default_base_url"))]
    pub base_url: String,
    /// Keep at most one category expanded per level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub auto_collapse_categories: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            site_url: None,
            base_url: "/".to_string(),
            auto_collapse_categories: false,
        }
    }
}

impl SidebarConfig {
    /// Creates a configuration served under `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SidebarError> {
        let config = Self {
            base_url: base_url.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the site origin used to classify absolute links as internal.
    pub fn with_site_url(mut self, site_url: &str) -> Result<Self, SidebarError> {
        let parsed = Url::parse(site_url)?;
        self.site_url = Some(parsed);
        self.validate()?;
        Ok(self)
    }

    #[must_use]
    pub const fn with_auto_collapse_categories(mut self, enabled: bool) -> Self {
        self.auto_collapse_categories = enabled;
        self
    }

    /// Checks the invariants that deserialization cannot express.
    pub fn validate(&self) -> Result<(), SidebarError> {
        if !self.base_url.starts_with('/') {
            return Err(SidebarError::InvalidBaseUrl {
                base_url: self.base_url.clone(),
                reason: "must start with '/'",
            });
        }
        if !self.base_url.ends_with('/') {
            return Err(SidebarError::InvalidBaseUrl {
                base_url: self.base_url.clone(),
                reason: "must end with '/'",
            });
        }
        if let Some(site_url) = &self.site_url
            && !matches!(site_url.scheme(), "http" | "https")
        {
            return Err(SidebarError::SiteUrlNotOrigin(site_url.to_string()));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
fn default_base_url() -> String {
    "/".to_string()
}
