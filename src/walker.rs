use std::borrow::Cow;

use tracing::{debug, trace};

use crate::action::{ItemSelect, SelectedItem};
use crate::config::SidebarConfig;
use crate::context::SidebarItemContext;
use crate::glyphs::{IconResolver, NoIcons};
use crate::link::{LinkResolver, ResolvedHref};
use crate::model::{
    ActiveMatcher, ActivePath, CategoryItem, CustomProps, HtmlItem, LinkItem, PathMatcher,
    SidebarItem,
};
use crate::render::{HtmlRenderer, SidebarRenderer};
use crate::state::{ExpandedScope, ItemPath, SidebarExpandedState};

/// Returns `true` if any item in `items`, or any nested descendant, is the
/// current page.
///
/// Html and unknown items never match. This walks every subtree it enters;
/// [`SidebarItems::render`] reports the same value without re-walking.
pub fn has_active_descendant<M>(items: &[SidebarItem], active_path: &ActivePath, matcher: &M) -> bool
where
    M: ActiveMatcher + ?Sized,
{
    items.iter().any(|item| match item {
        SidebarItem::Category(category) => {
            matcher.is_active(item, active_path)
                || has_active_descendant(&category.items, active_path, matcher)
        }
        SidebarItem::Link(_) | SidebarItem::Ref(_) => matcher.is_active(item, active_path),
        SidebarItem::Html(_) | SidebarItem::Unknown => false,
    })
}

/// Rendered nodes of one sibling list plus its active-descendant flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedItems<O> {
    /// One node per renderable item, in input order.
    pub nodes: Vec<O>,
    /// Some item in the list, or below it, is the current page.
    pub active_descendant: bool,
    /// Category elected to stay open when auto-collapse is on: the first one
    /// whose subtree holds the current page.
    pub expanded_item: Option<usize>,
}

/// Sidebar tree walker.
///
/// Holds the host collaborators for one render pass; [`render`](Self::render)
/// walks the items bottom-up and hands every node to the renderer.
pub struct SidebarItems<'a, R = HtmlRenderer<'a>> {
    items: &'a [SidebarItem],
    active_path: &'a ActivePath,
    level: u16,
    links: &'a dyn LinkResolver,
    matcher: &'a dyn ActiveMatcher,
    icons: &'a dyn IconResolver,
    on_item_click: Option<&'a dyn ItemSelect>,
    auto_collapse: bool,
    renderer: R,
}

// Item whose subtree is walked but whose own node still waits for the
// sibling list's flag.
enum Pending<'i, O> {
    Link {
        index: usize,
        link: &'i LinkItem,
        is_active: bool,
    },
    Category {
        index: usize,
        category: &'i CategoryItem,
        is_active: bool,
        children: RenderedItems<O>,
    },
    Html {
        index: usize,
        html: &'i HtmlItem,
    },
}

impl<O> Pending<'_, O> {
    const fn subtree_active(&self) -> bool {
        match self {
            Self::Link { is_active, .. } => *is_active,
            Self::Category {
                is_active,
                children,
                ..
            } => *is_active || children.active_descendant,
            Self::Html { .. } => false,
        }
    }
}

impl<'a> SidebarItems<'a, HtmlRenderer<'a>> {
    /// Creates a walker over the root list using `config` for link resolution.
    pub fn new(
        items: &'a [SidebarItem],
        active_path: &'a ActivePath,
        config: &'a SidebarConfig,
    ) -> Self {
        Self {
            items,
            active_path,
            level: 1,
            links: config,
            matcher: &PathMatcher,
            icons: &NoIcons,
            on_item_click: None,
            auto_collapse: config.auto_collapse_categories,
            renderer: HtmlRenderer::new(),
        }
    }
}

impl<'a, R> SidebarItems<'a, R>
where
    R: SidebarRenderer,
{
    /// Depth of the list being rendered; clamped to at least 1.
    #[must_use]
    pub fn level(mut self, level: u16) -> Self {
        self.level = level.max(1);
        self
    }

    #[must_use]
    pub fn on_item_click(mut self, select: &'a dyn ItemSelect) -> Self {
        self.on_item_click = Some(select);
        self
    }

    #[must_use]
    pub fn matcher(mut self, matcher: &'a dyn ActiveMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    #[must_use]
    pub fn links(mut self, links: &'a dyn LinkResolver) -> Self {
        self.links = links;
        self
    }

    #[must_use]
    pub fn icons(mut self, icons: &'a dyn IconResolver) -> Self {
        self.icons = icons;
        self
    }

    #[must_use]
    pub const fn auto_collapse_categories(mut self, enabled: bool) -> Self {
        self.auto_collapse = enabled;
        self
    }

    /// Swaps the presentation backend.
    pub fn renderer<R2: SidebarRenderer>(self, renderer: R2) -> SidebarItems<'a, R2> {
        SidebarItems {
            items: self.items,
            active_path: self.active_path,
            level: self.level,
            links: self.links,
            matcher: self.matcher,
            icons: self.icons,
            on_item_click: self.on_item_click,
            auto_collapse: self.auto_collapse,
            renderer,
        }
    }

    /// Renders the whole list. Unknown item kinds produce no node.
    pub fn render(&self, state: &SidebarExpandedState) -> RenderedItems<R::Output> {
        let mut path = ItemPath::new();
        let rendered = self.walk(self.items, self.level, &mut path, state);
        debug!(
            items = self.items.len(),
            level = self.level,
            active_descendant = rendered.active_descendant,
            "rendered sidebar items"
        );
        rendered
    }

    /// Renders a single item of this list (and its subtree, for categories).
    ///
    /// `active_descendant` and `expanded_item` describe the item's sibling
    /// list, as returned in [`RenderedItems`] by [`render`](Self::render);
    /// with both taken from there the node equals the one `render` produced.
    pub fn render_item(
        &self,
        item: &SidebarItem,
        index: usize,
        active_descendant: bool,
        expanded_item: Option<usize>,
        state: &SidebarExpandedState,
    ) -> Option<R::Output> {
        let mut path = ItemPath::new();
        let pending = self.prepare(item, index, self.level, &mut path, state)?;
        let scope = ExpandedScope::with_expanded_item(self.auto_collapse, expanded_item);
        Some(self.finish(pending, self.level, active_descendant, &scope, &mut path, state))
    }

    fn walk(
        &self,
        items: &[SidebarItem],
        level: u16,
        path: &mut ItemPath,
        state: &SidebarExpandedState,
    ) -> RenderedItems<R::Output> {
        let mut scope = ExpandedScope::new(self.auto_collapse);
        let mut active_descendant = false;
        let mut pending = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let Some(entry) = self.prepare(item, index, level, path, state) else {
                continue;
            };
            if entry.subtree_active() {
                active_descendant = true;
                if matches!(entry, Pending::Category { .. }) {
                    scope.elect(index);
                }
            }
            pending.push(entry);
        }

        let mut nodes = Vec::with_capacity(pending.len());
        for entry in pending {
            nodes.push(self.finish(entry, level, active_descendant, &scope, path, state));
        }

        trace!(level, nodes = nodes.len(), active_descendant, "walked sidebar level");
        RenderedItems {
            nodes,
            active_descendant,
            expanded_item: scope.expanded_item(),
        }
    }

    fn prepare<'i>(
        &self,
        item: &'i SidebarItem,
        index: usize,
        level: u16,
        path: &mut ItemPath,
        state: &SidebarExpandedState,
    ) -> Option<Pending<'i, R::Output>> {
        match item {
            SidebarItem::Link(link) | SidebarItem::Ref(link) => Some(Pending::Link {
                index,
                link,
                is_active: self.matcher.is_active(item, self.active_path),
            }),
            SidebarItem::Category(category) => {
                let is_active = self.matcher.is_active(item, self.active_path);
                path.push(index);
                let children = self.walk(&category.items, level.saturating_add(1), path, state);
                path.pop();
                Some(Pending::Category {
                    index,
                    category,
                    is_active,
                    children,
                })
            }
            SidebarItem::Html(html) => Some(Pending::Html { index, html }),
            SidebarItem::Unknown => {
                trace!(index, level, "skipping sidebar item of unknown kind");
                None
            }
        }
    }

    fn finish(
        &self,
        pending: Pending<'_, R::Output>,
        level: u16,
        active_descendant: bool,
        scope: &ExpandedScope,
        path: &mut ItemPath,
        state: &SidebarExpandedState,
    ) -> R::Output {
        let subtree_active = pending.subtree_active();
        match pending {
            Pending::Link {
                index,
                link,
                is_active,
            } => {
                let target = self.links.resolve(&link.href, link.auto_add_base_url);
                let ctx = SidebarItemContext {
                    level,
                    index,
                    is_active,
                    active_descendant,
                    subtree_active,
                    is_expanded: false,
                    on_click: self.click_handler(&link.label, &target, level),
                    icon: self.icon(link.custom_props.as_ref()),
                    target: Some(target),
                };
                self.renderer.link(link, &ctx)
            }
            Pending::Category {
                index,
                category,
                is_active,
                children,
            } => {
                path.push(index);
                let is_expanded = scope.is_expanded(state, path, index, category, subtree_active);
                path.pop();

                let target = category
                    .href
                    .as_deref()
                    .map(|href| self.links.resolve(href, category.auto_add_base_url));
                let on_click = target
                    .as_ref()
                    .and_then(|target| self.click_handler(&category.label, target, level));
                let ctx = SidebarItemContext {
                    level,
                    index,
                    is_active,
                    active_descendant,
                    subtree_active,
                    is_expanded,
                    target,
                    icon: self.icon(category.custom_props.as_ref()),
                    on_click,
                };
                self.renderer.category(category, &ctx, children.nodes)
            }
            Pending::Html { index, html } => {
                let ctx = SidebarItemContext {
                    level,
                    index,
                    is_active: false,
                    active_descendant,
                    subtree_active: false,
                    is_expanded: false,
                    target: None,
                    icon: None,
                    on_click: None,
                };
                self.renderer.html(html, &ctx)
            }
        }
    }

    fn click_handler(&self, label: &str, target: &ResolvedHref, level: u16) -> Option<String> {
        if !target.internal {
            return None;
        }
        self.on_item_click.map(|select| {
            select.handler(SelectedItem {
                label,
                href: &target.href,
                level,
            })
        })
    }

    // Items with custom props always ask the resolver, even without an icon id.
    fn icon(&self, props: Option<&CustomProps>) -> Option<Cow<'a, str>> {
        let icons = self.icons;
        props.and_then(|props| icons.glyph(props.icon.as_deref()))
    }
}
