#[cfg(feature = "tui")]
use ratatui::style::{Modifier, Style};
#[cfg(feature = "tui")]
use ratatui::text::Line;
#[cfg(feature = "tui")]
use ratatui::widgets::Borders;

/// Host-specific class names used by the HTML renderer.
///
/// The `menu__*` and `theme-doc-sidebar-*` classes are fixed; these are the
/// hooks a site's stylesheet defines itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarClassNames<'a> {
    /// Added to `<a>` of external targets.
    pub external_link: &'a str,
    /// Added to `<a>` of items carrying custom props.
    pub custom_link: &'a str,
    /// Added to `<li>` of highlighted items (active descendant below the root).
    pub active_descendant: &'a str,
    /// Wraps the icon glyph.
    pub icon: &'a str,
    /// Added to html items with `defaultStyle`.
    pub html_item: &'a str,
}

impl Default for SidebarClassNames<'_> {
    fn default() -> Self {
        Self {
            external_link: "menu__link--external",
            custom_link: "menu__link--custom",
            active_descendant: "menu__list-item--active-descendant",
            icon: "menu__link-icon",
            html_item: "menu__list-item--html",
        }
    }
}

/// Visual settings of the terminal preview.
#[cfg(feature = "tui")]
#[derive(Clone, Debug)]
pub struct SidebarPreviewStyle<'a> {
    pub title: Option<Line<'a>>,
    pub block_style: Style,
    pub border_style: Style,
    pub borders: Borders,
    pub item_style: Style,
    /// Applied to the current page.
    pub active_style: Style,
    /// Applied to highlighted items (active descendant below the root).
    pub highlight_style: Style,
    pub category_style: Style,
    pub html_style: Style,
    pub external_style: Style,
}

#[cfg(feature = "tui")]
impl Default for SidebarPreviewStyle<'_> {
    fn default() -> Self {
        Self {
            title: None,
            block_style: Style::default(),
            border_style: Style::default(),
            borders: Borders::ALL,
            item_style: Style::default(),
            active_style: Style::default().add_modifier(Modifier::REVERSED),
            highlight_style: Style::default().add_modifier(Modifier::BOLD),
            category_style: Style::default(),
            html_style: Style::default().add_modifier(Modifier::DIM),
            external_style: Style::default().add_modifier(Modifier::ITALIC),
        }
    }
}
