use std::borrow::Cow;

use rustc_hash::FxHashMap;

/// Text glyphs used by the terminal preview.
#[derive(Clone, Copy, Debug)]
pub struct SidebarGlyphs<'a> {
    pub indent: &'a str,
    pub leaf: &'a str,
    pub expanded: &'a str,
    pub collapsed: &'a str,
    pub external: &'a str,
}

impl SidebarGlyphs<'static> {
    pub const fn unicode() -> Self {
        Self {
            indent: "  ",
            leaf: "•",
            expanded: "▼",
            collapsed: "▶",
            external: "↗",
        }
    }

    pub const fn ascii() -> Self {
        Self {
            indent: "  ",
            leaf: "*",
            expanded: "v",
            collapsed: ">",
            external: "^",
        }
    }
}

impl Default for SidebarGlyphs<'static> {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Maps an icon identifier from `customProps.icon` to a glyph.
///
/// The identifier may be absent (the item has custom props but no icon), in
/// which case implementations return a fallback or nothing.
pub trait IconResolver {
    fn glyph(&self, icon: Option<&str>) -> Option<Cow<'_, str>>;
}

impl<F> IconResolver for F
where
    F: Fn(Option<&str>) -> Option<String>,
{
    #[inline]
    fn glyph(&self, icon: Option<&str>) -> Option<Cow<'_, str>> {
        self(icon).map(Cow::Owned)
    }
}

/// Resolver that never renders an icon.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIcons;

impl IconResolver for NoIcons {
    #[inline]
    fn glyph(&self, _icon: Option<&str>) -> Option<Cow<'_, str>> {
        None
    }
}

/// Lookup table from icon identifier to glyph, with an optional fallback.
///
/// For HTML output the glyphs are inserted as markup (e.g. inline SVG); for the
/// terminal preview they are printed as text.
#[derive(Clone, Debug, Default)]
pub struct IconMap {
    glyphs: FxHashMap<String, String>,
    fallback: Option<String>,
}

impl IconMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, icon: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.glyphs.insert(icon.into(), glyph.into());
        self
    }

    /// Glyph used for unknown or missing identifiers.
    #[must_use]
    pub fn with_fallback(mut self, glyph: impl Into<String>) -> Self {
        self.fallback = Some(glyph.into());
        self
    }
}

impl IconResolver for IconMap {
    fn glyph(&self, icon: Option<&str>) -> Option<Cow<'_, str>> {
        icon.and_then(|icon| self.glyphs.get(icon))
            .or(self.fallback.as_ref())
            .map(|glyph| Cow::Borrowed(glyph.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_map_tolerates_missing_identifier() {
        let icons = IconMap::new().with("book", "📖");
        assert_eq!(icons.glyph(Some("book")).as_deref(), Some("📖"));
        assert_eq!(icons.glyph(Some("rocket")), None);
        assert_eq!(icons.glyph(None), None);

        let icons = icons.with_fallback("·");
        assert_eq!(icons.glyph(None).as_deref(), Some("·"));
        assert_eq!(icons.glyph(Some("rocket")).as_deref(), Some("·"));
    }

    #[test]
    fn closures_resolve_icons() {
        let icons = |icon: Option<&str>| icon.map(|name| format!("[{name}]"));
        assert_eq!(icons.glyph(Some("cog")).as_deref(), Some("[cog]"));
        assert_eq!(icons.glyph(None), None);
        assert_eq!(NoIcons.glyph(Some("cog")), None);
    }
}
