use url::Url;

use crate::config::SidebarConfig;

/// A link target after base-URL resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedHref {
    /// Final navigable target.
    pub href: String,
    /// `true` when the target belongs to this site.
    pub internal: bool,
}

/// Turns an item's `href` into a navigable target.
pub trait LinkResolver {
    /// Resolves `href`, prefixing the base URL when `auto_add_base_url` is set
    /// and the target is site-relative.
    fn resolve(&self, href: &str, auto_add_base_url: bool) -> ResolvedHref;
}

impl LinkResolver for SidebarConfig {
    fn resolve(&self, href: &str, auto_add_base_url: bool) -> ResolvedHref {
        let internal = is_internal_url(href, self.site_url.as_ref());
        let href = if internal && auto_add_base_url && href.starts_with('/') {
            with_base_url(&self.base_url, href)
        } else {
            href.to_string()
        };
        ResolvedHref { href, internal }
    }
}

/// Returns `true` if `href` stays on the site.
///
/// Targets without a scheme (and not protocol-relative) are internal. Absolute
/// targets are internal only when they share the site's origin.
pub fn is_internal_url(href: &str, site_url: Option<&Url>) -> bool {
    if let Some(rest) = href.strip_prefix("//") {
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        return site_url
            .and_then(Url::host_str)
            .is_some_and(|site_host| site_host.eq_ignore_ascii_case(host));
    }
    if !has_scheme(href) {
        return true;
    }
    match (Url::parse(href), site_url) {
        (Ok(target), Some(site)) => target.origin() == site.origin(),
        _ => false,
    }
}

// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"
fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn with_base_url(base_url: &str, href: &str) -> String {
    if href == base_url.trim_end_matches('/') {
        return base_url.to_string();
    }
    if href.starts_with(base_url) {
        return href.to_string();
    }
    let mut resolved = String::with_capacity(base_url.len() + href.len());
    resolved.push_str(base_url);
    resolved.push_str(href.trim_start_matches('/'));
    resolved
}
