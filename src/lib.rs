//! Documentation sidebar renderer with active-descendant tracking.
//!
//! [`SidebarItems`] walks a tree of [`SidebarItem`]s, decides which entry is
//! the current page and whether each sibling list contains it, and hands every
//! node to a [`SidebarRenderer`]. [`HtmlRenderer`] emits Docusaurus-compatible
//! markup.
//!
//! Feature flags:
//! - `tui`: ratatui-based [`TuiRenderer`] and [`SidebarPreview`] widget.
//! - `serde`: serde support for items, [`SidebarConfig`] and
//!   [`SidebarExpandedSnapshot`], plus [`load_sidebar`].

mod action;
mod config;
mod context;
mod error;
mod glyphs;
mod link;
#[cfg(feature = "serde")]
mod load;
mod model;
pub mod prelude;
mod render;
mod state;
mod style;
mod walker;
#[cfg(feature = "tui")]
mod widget;

pub use action::{CallbackSelect, ItemSelect, SelectedItem};
pub use config::SidebarConfig;
pub use context::SidebarItemContext;
pub use error::SidebarError;
pub use glyphs::{IconMap, IconResolver, NoIcons, SidebarGlyphs};
pub use link::{LinkResolver, ResolvedHref, is_internal_url};
#[cfg(feature = "serde")]
pub use load::load_sidebar;
pub use model::{
    ActiveMatcher, ActivePath, CategoryItem, CustomProps, HtmlItem, LinkItem, PathMatcher,
    SidebarItem,
};
pub use render::{HtmlRenderer, SidebarRenderer, sidebar_menu};
pub use state::{ExpandedScope, ItemPath, SidebarExpandedSnapshot, SidebarExpandedState};
#[cfg(feature = "tui")]
pub use style::SidebarPreviewStyle;
pub use style::SidebarClassNames;
pub use walker::{RenderedItems, SidebarItems, has_active_descendant};
#[cfg(feature = "tui")]
pub use widget::{SidebarPreview, TuiRenderer};
