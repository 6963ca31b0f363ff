pub use crate::{
    ActiveMatcher, ActivePath, CallbackSelect, CategoryItem, CustomProps, ExpandedScope,
    HtmlItem, HtmlRenderer, IconMap, IconResolver, ItemPath, ItemSelect, LinkItem, LinkResolver,
    NoIcons, PathMatcher, RenderedItems, ResolvedHref, SelectedItem, SidebarClassNames,
    SidebarConfig, SidebarError, SidebarExpandedSnapshot, SidebarExpandedState, SidebarGlyphs,
    SidebarItem, SidebarItemContext, SidebarItems, SidebarRenderer, has_active_descendant,
    is_internal_url, sidebar_menu,
};

#[cfg(feature = "tui")]
pub use crate::{SidebarPreview, SidebarPreviewStyle, TuiRenderer};

#[cfg(feature = "serde")]
pub use crate::load_sidebar;
