use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry of a sidebar tree.
///
/// The tree is owned by the host and only read during rendering. Kinds this
/// crate does not know deserialize into [`SidebarItem::Unknown`] and render as
/// nothing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
#[derive(Clone, Debug, PartialEq)]
pub enum SidebarItem {
    /// Link to a page or an external target.
    Link(LinkItem),
    /// Reference to a doc page; rendered exactly like a link.
    Ref(LinkItem),
    /// Group of child items with an optional page of its own.
    Category(CategoryItem),
    /// Raw markup inserted verbatim.
    Html(HtmlItem),
    /// Any other kind; skipped by the walker.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl SidebarItem {
    /// Returns the display label, if the item kind has one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Link(link) | Self::Ref(link) => Some(&link.label),
            Self::Category(category) => Some(&category.label),
            Self::Html(_) | Self::Unknown => None,
        }
    }

    /// Returns the item's own target, if any.
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Link(link) | Self::Ref(link) => Some(&link.href),
            Self::Category(category) => category.href.as_deref(),
            Self::Html(_) | Self::Unknown => None,
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link(LinkItem::new(label, href))
    }

    pub fn category(label: impl Into<String>, items: Vec<Self>) -> Self {
        Self::Category(CategoryItem::new(label, items))
    }

    pub fn html(value: impl Into<String>) -> Self {
        Self::Html(HtmlItem::new(value))
    }
}

/// Data shared by `link` and `ref` items.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom_props: Option<CustomProps>,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub auto_add_base_url: bool,
}

impl LinkItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            class_name: None,
            custom_props: None,
            auto_add_base_url: true,
        }
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn with_custom_props(mut self, props: CustomProps) -> Self {
        self.custom_props = Some(props);
        self
    }

    #[must_use]
    pub const fn with_auto_add_base_url(mut self, enabled: bool) -> Self {
        self.auto_add_base_url = enabled;
        self
    }
}

/// A category box and its ordered children.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryItem {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub href: Option<String>,
    pub items: Vec<SidebarItem>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom_props: Option<CustomProps>,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub auto_add_base_url: bool,
    /// Whether the category can be toggled at all.
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub collapsible: bool,
    /// Initial state when nothing else decides it.
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub collapsed: bool,
}

impl CategoryItem {
    pub fn new(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            label: label.into(),
            href: None,
            items,
            class_name: None,
            custom_props: None,
            auto_add_base_url: true,
            collapsible: true,
            collapsed: true,
        }
    }

    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn with_custom_props(mut self, props: CustomProps) -> Self {
        self.custom_props = Some(props);
        self
    }

    #[must_use]
    pub const fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    #[must_use]
    pub const fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }
}

/// Raw markup entry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlItem {
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class_name: Option<String>,
    /// Adds the regular list-item class next to `class_name`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_style: bool,
}

impl HtmlItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            class_name: None,
            default_style: false,
        }
    }
}

/// Renderer-specific extensions attached to an item.
///
/// `icon` is lifted out because the renderers consume it directly; a
/// non-string `icon` is treated as absent. Other string values are kept as-is,
/// any other JSON value as its compact JSON text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawCustomProps"))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomProps {
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<String>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extra: FxHashMap<String, String>,
}

impl CustomProps {
    pub fn with_icon(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            extra: FxHashMap::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(transparent)]
struct RawCustomProps(FxHashMap<String, serde_json::Value>);

#[cfg(feature = "serde")]
impl From<RawCustomProps> for CustomProps {
    fn from(RawCustomProps(mut values): RawCustomProps) -> Self {
        let icon = match values.remove("icon") {
            Some(serde_json::Value::String(icon)) => Some(icon),
            _ => None,
        };
        let extra = values
            .into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(text) => (key, text),
                other => (key, other.to_string()),
            })
            .collect();
        Self { icon, extra }
    }
}

#[cfg(feature = "serde")]
const fn default_true() -> bool {
    true
}

/// The page the reader is currently on.
///
/// Comparison ignores case (Unicode lowercasing) and a trailing slash, so
/// `/docs/Über` and `/Docs/über/` are the same location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivePath(String);

impl ActivePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `href` points at this location.
    pub fn matches(&self, href: &str) -> bool {
        is_same_path(&self.0, href)
    }
}

impl From<&str> for ActivePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

fn is_same_path(left: &str, right: &str) -> bool {
    let left = left.strip_suffix('/').unwrap_or(left);
    let right = right.strip_suffix('/').unwrap_or(right);
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// Decides whether one item is the current page.
pub trait ActiveMatcher {
    /// Returns `true` if `item` itself matches `active_path`.
    fn is_active(&self, item: &SidebarItem, active_path: &ActivePath) -> bool;
}

impl<F> ActiveMatcher for F
where
    F: Fn(&SidebarItem, &ActivePath) -> bool,
{
    #[inline]
    fn is_active(&self, item: &SidebarItem, active_path: &ActivePath) -> bool {
        self(item, active_path)
    }
}

/// Matches links, refs and category pages by their own href.
///
/// Descendants are not consulted; the walker handles those.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathMatcher;

impl ActiveMatcher for PathMatcher {
    #[inline]
    fn is_active(&self, item: &SidebarItem, active_path: &ActivePath) -> bool {
        match item {
            SidebarItem::Link(_) | SidebarItem::Ref(_) | SidebarItem::Category(_) => {
                item.href().is_some_and(|href| active_path.matches(href))
            }
            SidebarItem::Html(_) | SidebarItem::Unknown => false,
        }
    }
}
