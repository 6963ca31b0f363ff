use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use docs_sidebar::{
    ActivePath, PathMatcher, SidebarConfig, SidebarExpandedState, SidebarItem, SidebarItems,
    has_active_descendant,
};

// `breadth` links plus one nested category per level, `depth` levels deep.
fn build_tree(depth: usize, breadth: usize) -> Vec<SidebarItem> {
    let mut items = vec![SidebarItem::link("Target", "/target")];
    for level in (0..depth).rev() {
        let mut siblings: Vec<SidebarItem> = (0..breadth)
            .map(|idx| SidebarItem::link(format!("Page {level}.{idx}"), format!("/p/{level}/{idx}")))
            .collect();
        siblings.push(SidebarItem::category(format!("Level {level}"), items));
        items = siblings;
    }
    items
}

// What a walker that re-checks every level from scratch would pay.
fn per_level_checks(items: &[SidebarItem], active: &ActivePath) -> usize {
    let mut hits = usize::from(has_active_descendant(items, active, &PathMatcher));
    for item in items {
        if let SidebarItem::Category(category) = item {
            hits += per_level_checks(&category.items, active);
        }
    }
    hits
}

fn bench_active_descendant(c: &mut Criterion) {
    let items = build_tree(12, 40);
    let active = ActivePath::new("/target");
    let config = SidebarConfig::default();
    let state = SidebarExpandedState::new();

    c.bench_function("per_level_has_active_descendant", |b| {
        b.iter(|| per_level_checks(black_box(&items), black_box(&active)));
    });

    c.bench_function("render_html_bottom_up", |b| {
        b.iter(|| {
            SidebarItems::new(black_box(&items), black_box(&active), &config)
                .render(&state)
                .active_descendant
        });
    });
}

criterion_group!(benches, bench_active_descendant);
criterion_main!(benches);
