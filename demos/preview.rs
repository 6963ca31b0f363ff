// Terminal preview: renders the sidebar into an in-memory ratatui buffer.
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use docs_sidebar::{
    ActivePath, SidebarConfig, SidebarExpandedState, SidebarItem, SidebarItems, SidebarPreview,
    SidebarPreviewStyle, TuiRenderer,
};

fn main() {
    let items = vec![
        SidebarItem::category(
            "Guides",
            vec![
                SidebarItem::link("Intro", "/docs/intro"),
                SidebarItem::link("Setup", "/docs/setup"),
            ],
        ),
        SidebarItem::category("Reference", vec![SidebarItem::link("CLI", "/docs/cli")]),
        SidebarItem::link("FAQ", "/docs/faq"),
    ];
    let active = ActivePath::new("/docs/setup");
    let config = SidebarConfig::default();

    // Expand "Reference" even though nothing in it is active.
    let mut state = SidebarExpandedState::new();
    state.set_expanded(&[1], true);

    let style = SidebarPreviewStyle {
        title: Some(Line::from("Docs")),
        ..SidebarPreviewStyle::default()
    };
    let rendered = SidebarItems::new(&items, &active, &config)
        .renderer(TuiRenderer::new(style.clone()))
        .render(&state);
    let widget = SidebarPreview::new(rendered, style);

    let area = Rect::new(0, 0, 32, 10);
    let mut buffer = Buffer::empty(area);
    widget.render(area, &mut buffer);

    for y in 0..area.height {
        let row: String = (0..area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect();
        println!("{row}");
    }
}
