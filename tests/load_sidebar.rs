use docs_sidebar::prelude::*;

const SIDEBAR: &str = r#"[
    {"type": "link", "label": "Overview", "href": "/docs/"},
    {"type": "category", "label": "Guides", "items": [
        {"type": "link", "label": "Install", "href": "/docs/guides/install"},
        {"type": "category", "label": "Deploy", "href": "/docs/guides/deploy", "items": [
            {"type": "ref", "label": "Docker", "href": "/docs/guides/deploy/docker",
             "customProps": {"icon": "whale"}}
        ]}
    ]},
    {"type": "link", "label": "Changelog", "href": "https://github.com/org/repo/releases"},
    {"type": "html", "value": "<span class=\"sep\"></span>"},
    {"type": "unsupported"}
]"#;

const CONFIG: &str = r#"{"url": "https://docs.example.com", "baseUrl": "/project/", "autoCollapseCategories": true}"#;

#[test]
fn renders_loaded_sidebar_as_html() -> Result<(), SidebarError> {
    let items = load_sidebar(SIDEBAR)?;
    let config: SidebarConfig = serde_json::from_str(CONFIG)?;
    config.validate()?;

    let active = ActivePath::new("/docs/guides/deploy/docker");
    let icons = IconMap::new().with("whale", "<i class=\"whale\"></i>");
    let select = CallbackSelect::new("closeSidebar");
    let rendered = SidebarItems::new(&items, &active, &config)
        .icons(&icons)
        .on_item_click(&select)
        .render(&SidebarExpandedState::new());

    assert!(rendered.active_descendant);
    assert_eq!(rendered.nodes.len(), 4);

    let html = sidebar_menu(&rendered).into_string();
    assert!(html.contains(r#"href="/project/docs/guides/deploy/docker""#));
    assert!(html.contains(r#"onclick="closeSidebar('/project/docs/guides/install')""#));
    assert!(html.contains(r#"<i class="whale"></i></span>Docker"#));
    assert!(html.contains(r#"<span class="sep"></span>"#));
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
    assert!(!html.contains("closeSidebar('https://github.com"));
    Ok(())
}

#[test]
fn snapshot_survives_json() -> Result<(), SidebarError> {
    let mut state = SidebarExpandedState::new();
    state.set_expanded(&[1, 1], false);
    let json = serde_json::to_string(&state.snapshot())?;

    let mut restored = SidebarExpandedState::new();
    restored.restore(serde_json::from_str(&json)?);
    assert_eq!(restored.get(&[1, 1]), Some(false));
    Ok(())
}

#[test]
fn invalid_base_url_in_config_is_rejected() -> Result<(), SidebarError> {
    let config: SidebarConfig = serde_json::from_str(r#"{"baseUrl": "project"}"#)?;
    assert!(matches!(
        config.validate(),
        Err(SidebarError::InvalidBaseUrl { .. })
    ));
    Ok(())
}
