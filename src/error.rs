use thiserror::Error;

/// Errors raised at the edges of the crate (configuration and loading).
///
/// Rendering itself never fails.
#[derive(Debug, Error)]
pub enum SidebarError {
    /// The base URL does not start and end with `/`.
    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: &'static str },
    /// The site URL could not be parsed.
    #[error("invalid site URL: {0}")]
    InvalidSiteUrl(#[from] url::ParseError),
    /// The site URL parsed but is not an http(s) origin.
    #[error("site URL '{0}' must be an absolute http(s) URL")]
    SiteUrlNotOrigin(String),
    /// Sidebar JSON could not be deserialized.
    #[cfg(feature = "serde")]
    #[error("sidebar deserialization error: {0}")]
    Parse(#[from] serde_json::Error),
}
