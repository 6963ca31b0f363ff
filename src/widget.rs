use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::context::SidebarItemContext;
use crate::glyphs::SidebarGlyphs;
use crate::model::{CategoryItem, HtmlItem, LinkItem};
use crate::render::SidebarRenderer;
use crate::style::SidebarPreviewStyle;
use crate::walker::RenderedItems;

/// Renders sidebar nodes as terminal lines.
///
/// Collapsed categories show only their own line.
pub struct TuiRenderer<'a> {
    style: SidebarPreviewStyle<'a>,
    glyphs: SidebarGlyphs<'a>,
}

impl<'a> TuiRenderer<'a> {
    pub const fn new(style: SidebarPreviewStyle<'a>) -> Self {
        Self {
            style,
            glyphs: SidebarGlyphs::unicode(),
        }
    }

    #[must_use]
    pub const fn glyphs(mut self, glyphs: SidebarGlyphs<'a>) -> Self {
        self.glyphs = glyphs;
        self
    }

    fn entry_style(&self, base: Style, ctx: &SidebarItemContext<'_>) -> Style {
        let mut style = base;
        if ctx.is_external() {
            style = style.patch(self.style.external_style);
        }
        if ctx.highlight() {
            style = style.patch(self.style.highlight_style);
        }
        if ctx.is_active {
            style = style.patch(self.style.active_style);
        }
        style
    }

    fn entry_line(
        &self,
        ctx: &SidebarItemContext<'_>,
        marker: &str,
        label: &str,
        style: Style,
    ) -> Line<'static> {
        let mut spans = Vec::with_capacity(ctx.level as usize + 5);
        for _ in 1..ctx.level {
            spans.push(Span::raw(self.glyphs.indent.to_string()));
        }
        spans.push(Span::raw(format!("{marker} ")));
        if let Some(icon) = &ctx.icon {
            spans.push(Span::raw(format!("{icon} ")));
        }
        spans.push(Span::styled(label.to_string(), style));
        if ctx.is_external() {
            spans.push(Span::styled(
                format!(" {}", self.glyphs.external),
                self.style.external_style,
            ));
        }
        Line::from(spans)
    }
}

impl Default for TuiRenderer<'_> {
    fn default() -> Self {
        Self::new(SidebarPreviewStyle::default())
    }
}

impl SidebarRenderer for TuiRenderer<'_> {
    type Output = Vec<Line<'static>>;

    fn link(&self, link: &LinkItem, ctx: &SidebarItemContext<'_>) -> Self::Output {
        let style = self.entry_style(self.style.item_style, ctx);
        vec![self.entry_line(ctx, self.glyphs.leaf, &link.label, style)]
    }

    fn category(
        &self,
        category: &CategoryItem,
        ctx: &SidebarItemContext<'_>,
        children: Vec<Self::Output>,
    ) -> Self::Output {
        let marker = if ctx.is_expanded {
            self.glyphs.expanded
        } else {
            self.glyphs.collapsed
        };
        let mut style = self.entry_style(self.style.category_style, ctx);
        if ctx.subtree_active && !ctx.is_active {
            style = style.patch(self.style.highlight_style);
        }
        let mut lines = vec![self.entry_line(ctx, marker, &category.label, style)];
        if ctx.is_expanded {
            lines.extend(children.into_iter().flatten());
        }
        lines
    }

    fn html(&self, html: &HtmlItem, ctx: &SidebarItemContext<'_>) -> Self::Output {
        let indent = self.glyphs.indent.repeat(usize::from(ctx.level.saturating_sub(1)));
        vec![Line::from(vec![
            Span::raw(indent),
            Span::styled(html.value.clone(), self.style.html_style),
        ])]
    }
}

/// Terminal preview of a rendered sidebar.
pub struct SidebarPreview<'a> {
    lines: Vec<Line<'static>>,
    style: SidebarPreviewStyle<'a>,
}

impl<'a> SidebarPreview<'a> {
    /// Flattens the root nodes produced with a [`TuiRenderer`].
    pub fn new(items: RenderedItems<Vec<Line<'static>>>, style: SidebarPreviewStyle<'a>) -> Self {
        Self {
            lines: items.nodes.into_iter().flatten().collect(),
            style,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }
}

impl Widget for SidebarPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default().borders(self.style.borders);
        if let Some(title) = self.style.title.clone() {
            block = block.title(title);
        }
        block = block
            .style(self.style.block_style)
            .border_style(self.style.border_style);

        Paragraph::new(Text::from(self.lines))
            .block(block)
            .render(area, buf);
    }
}
