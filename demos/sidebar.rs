// Renders a small sidebar to HTML and prints it.
use docs_sidebar::{
    ActivePath, CallbackSelect, CategoryItem, CustomProps, IconMap, LinkItem, SidebarConfig,
    SidebarError, SidebarExpandedState, SidebarItem, SidebarItems, sidebar_menu,
};

fn main() -> Result<(), SidebarError> {
    // Host data: the tree, where the reader is, and how the site is served.
    let items = vec![
        SidebarItem::link("Introduction", "/docs/intro"),
        SidebarItem::Category(
            CategoryItem::new(
                "Guides",
                vec![
                    SidebarItem::link("Installation", "/docs/guides/install"),
                    SidebarItem::Link(
                        LinkItem::new("Configuration", "/docs/guides/config")
                            .with_custom_props(CustomProps::with_icon("cog")),
                    ),
                ],
            )
            .with_href("/docs/guides"),
        ),
        SidebarItem::html("<hr/>"),
        SidebarItem::link("GitHub", "https://github.com/org/repo"),
    ];
    let active = ActivePath::new("/docs/guides/config");
    let config = SidebarConfig::new("/project/")?.with_site_url("https://docs.example.com")?;

    // Collaborators: icons and the mobile-sidebar close hook.
    let icons = IconMap::new().with("cog", "⚙");
    let select = CallbackSelect::new("closeMobileSidebar");

    let rendered = SidebarItems::new(&items, &active, &config)
        .icons(&icons)
        .on_item_click(&select)
        .render(&SidebarExpandedState::new());

    println!("{}", sidebar_menu(&rendered).into_string());
    Ok(())
}
