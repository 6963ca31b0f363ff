use std::borrow::Cow;

use maud::{Markup, PreEscaped, html};
use smallvec::SmallVec;

use crate::context::SidebarItemContext;
use crate::model::{CategoryItem, HtmlItem, LinkItem};
use crate::style::SidebarClassNames;
use crate::walker::RenderedItems;

/// Presentation backend for sidebar nodes.
///
/// The walker computes every flag and resolved value up front; implementations
/// only branch on the item kind and the context.
pub trait SidebarRenderer {
    type Output;

    /// Renders a `link` or `ref` entry.
    fn link(&self, link: &LinkItem, ctx: &SidebarItemContext<'_>) -> Self::Output;

    /// Renders a category box around its already rendered children.
    fn category(
        &self,
        category: &CategoryItem,
        ctx: &SidebarItemContext<'_>,
        children: Vec<Self::Output>,
    ) -> Self::Output;

    /// Renders a raw markup entry.
    fn html(&self, html: &HtmlItem, ctx: &SidebarItemContext<'_>) -> Self::Output;
}

/// Emits Docusaurus-compatible `<li>` markup.
#[derive(Clone, Debug, Default)]
pub struct HtmlRenderer<'a> {
    classes: SidebarClassNames<'a>,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_class_names(mut self, classes: SidebarClassNames<'a>) -> Self {
        self.classes = classes;
        self
    }

    fn icon(&self, ctx: &SidebarItemContext<'_>) -> Markup {
        html! {
            @if let Some(icon) = &ctx.icon {
                span class=(self.classes.icon) { (PreEscaped(icon.as_ref())) }
            }
        }
    }
}

impl SidebarRenderer for HtmlRenderer<'_> {
    type Output = Markup;

    fn link(&self, link: &LinkItem, ctx: &SidebarItemContext<'_>) -> Markup {
        let external = ctx.is_external();

        let mut item_class = ClassList::new();
        item_class.push("theme-doc-sidebar-item-link");
        item_class.push(format!("theme-doc-sidebar-item-link-level-{}", ctx.level));
        item_class.push("menu__list-item");
        item_class.push_opt(link.class_name.as_deref());
        item_class.push_if(ctx.highlight(), self.classes.active_descendant);

        let mut link_class = ClassList::new();
        link_class.push_if(link.custom_props.is_some(), self.classes.custom_link);
        link_class.push("menu__link");
        link_class.push_if(external, self.classes.external_link);
        link_class.push_if(ctx.is_active, "menu__link--active");

        html! {
            li class=(item_class.into_string()) {
                a class=(link_class.into_string())
                    href=[ctx.href()]
                    aria-current=[ctx.is_active.then_some("page")]
                    target=[external.then_some("_blank")]
                    rel=[external.then_some("noopener noreferrer")]
                    onclick=[ctx.on_click.as_deref()] {
                    (self.icon(ctx))
                    (link.label)
                    @if external {
                        (external_link_icon())
                    }
                }
            }
        }
    }

    fn category(
        &self,
        category: &CategoryItem,
        ctx: &SidebarItemContext<'_>,
        children: Vec<Markup>,
    ) -> Markup {
        let external = ctx.is_external();
        let has_page = ctx.target.is_some();
        let caret_button = category.collapsible && has_page;
        let expanded = bool_attr(ctx.is_expanded);

        let mut item_class = ClassList::new();
        item_class.push("theme-doc-sidebar-item-category");
        item_class.push(format!("theme-doc-sidebar-item-category-level-{}", ctx.level));
        item_class.push("menu__list-item");
        item_class.push_if(!ctx.is_expanded, "menu__list-item--collapsed");
        item_class.push_opt(category.class_name.as_deref());
        item_class.push_if(ctx.highlight(), self.classes.active_descendant);

        let mut collapsible_class = ClassList::new();
        collapsible_class.push("menu__list-item-collapsible");
        collapsible_class.push_if(ctx.is_active, "menu__list-item-collapsible--active");

        let mut link_class = ClassList::new();
        link_class.push_if(category.custom_props.is_some(), self.classes.custom_link);
        link_class.push("menu__link");
        link_class.push_if(category.collapsible, "menu__link--sublist");
        link_class.push_if(category.collapsible && !has_page, "menu__link--sublist-caret");
        link_class.push_if(ctx.subtree_active, "menu__link--active");
        link_class.push_if(external, self.classes.external_link);

        html! {
            li class=(item_class.into_string()) {
                div class=(collapsible_class.into_string()) {
                    a class=(link_class.into_string())
                        href=(ctx.href().unwrap_or("#"))
                        role=[(!has_page).then_some("button")]
                        aria-expanded=[(category.collapsible && !has_page).then_some(expanded)]
                        aria-current=[ctx.is_active.then_some("page")]
                        target=[external.then_some("_blank")]
                        rel=[external.then_some("noopener noreferrer")]
                        onclick=[ctx.on_click.as_deref()] {
                        (self.icon(ctx))
                        (category.label)
                        @if external {
                            (external_link_icon())
                        }
                    }
                    @if caret_button {
                        button type="button"
                            class="clean-btn menu__caret"
                            aria-label=(format!("Toggle the collapsible sidebar category '{}'", category.label))
                            aria-expanded=(expanded) {}
                    }
                }
                ul class="menu__list" hidden[!ctx.is_expanded] {
                    @for child in &children {
                        (child)
                    }
                }
            }
        }
    }

    fn html(&self, item: &HtmlItem, _ctx: &SidebarItemContext<'_>) -> Markup {
        let mut class = ClassList::new();
        class.push_if(item.default_style, "menu__list-item");
        class.push_if(item.default_style, self.classes.html_item);
        class.push_opt(item.class_name.as_deref());

        html! {
            li class=[class.into_option()] { (PreEscaped(item.value.as_str())) }
        }
    }
}

/// Wraps rendered root items in the sidebar's `<nav>` and top-level list.
pub fn sidebar_menu(items: &RenderedItems<Markup>) -> Markup {
    html! {
        nav class="menu thin-scrollbar" aria-label="Docs sidebar" {
            ul class="theme-doc-sidebar-menu menu__list" {
                @for node in &items.nodes {
                    (node)
                }
            }
        }
    }
}

fn external_link_icon() -> Markup {
    html! {
        svg width="13.5" height="13.5" aria-hidden="true" viewBox="0 0 24 24" class="iconExternalLink" {
            path fill="currentColor"
                d="M21 13v10h-21v-19h12v2h-10v15h17v-8h2zm3-12h-10.988l4.035 4-6.977 7.07 2.828 2.828 6.977-7.07 4.125 4.172v-11z" {}
        }
    }
}

const fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Space-separated class attribute builder.
#[derive(Default)]
struct ClassList<'a> {
    classes: SmallVec<[Cow<'a, str>; 8]>,
}

impl<'a> ClassList<'a> {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, class: impl Into<Cow<'a, str>>) {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
    }

    fn push_if(&mut self, condition: bool, class: &'a str) {
        if condition {
            self.push(class);
        }
    }

    fn push_opt(&mut self, class: Option<&'a str>) {
        if let Some(class) = class {
            self.push(class);
        }
    }

    fn into_string(self) -> String {
        self.classes.join(" ")
    }

    fn into_option(self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.into_string())
    }
}
