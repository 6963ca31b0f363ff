use std::borrow::Cow;

use crate::link::ResolvedHref;

/// Everything a renderer needs to know about one item besides its data.
#[derive(Clone, Debug)]
pub struct SidebarItemContext<'a> {
    /// Depth of the item's sibling list, root = 1.
    pub level: u16,
    /// Position among siblings.
    pub index: usize,
    /// The item itself is the current page.
    pub is_active: bool,
    /// Some item in the sibling list (or below it) is the current page.
    pub active_descendant: bool,
    /// The item or anything under it is the current page.
    pub subtree_active: bool,
    /// Categories only: the children list is open.
    pub is_expanded: bool,
    /// Resolved own target; `None` for categories without a page.
    pub target: Option<ResolvedHref>,
    /// Icon glyph, present only for items carrying custom props.
    pub icon: Option<Cow<'a, str>>,
    /// `onclick` script for internal targets.
    pub on_click: Option<String>,
}

impl SidebarItemContext<'_> {
    /// Returns `true` if the target is external.
    pub fn is_external(&self) -> bool {
        self.target.as_ref().is_some_and(|target| !target.internal)
    }

    /// Nested-highlight treatment: an active descendant below the root list,
    /// never for external targets.
    pub fn highlight(&self) -> bool {
        self.active_descendant && self.level > 1 && !self.is_external()
    }

    pub fn href(&self) -> Option<&str> {
        self.target.as_ref().map(|target| target.href.as_str())
    }
}
