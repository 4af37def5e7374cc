//! Window benchmark: range math and full render passes.
//!
//! Target: a scroll step over 1M rows stays well under a frame (16ms).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rowport::terminal::{LineTarget, RowElement, Style, TerminalViewport};
use rowport::{compute_visible_range, Geometry, ScrollContainer, VirtualScrollConfig, VirtualScrollManager};

fn visible_range(c: &mut Criterion) {
    let geometry = Geometry::new(1_234_567.0, 900.0);

    c.bench_function("visible_range_1m", |b| {
        b.iter(|| compute_visible_range(black_box(geometry), black_box(50.0), black_box(1_000_000), 5))
    });
}

fn scroll_step(c: &mut Criterion) {
    let items: Vec<u32> = (0..1_000_000).collect();
    let mut manager = VirtualScrollManager::builder()
        .target(LineTarget::new())
        .container(TerminalViewport::new(60, 0))
        .config(VirtualScrollConfig::default().with_item_extent(1.0))
        .items(items)
        .create(|item: &u32, _| RowElement::new(item.to_string(), Style::PLAIN))
        .update(|row: &mut RowElement, item: &u32, _| row.set(item.to_string(), Style::PLAIN))
        .build()
        .expect("valid manager");

    let mut offset = 0.0;
    c.bench_function("scroll_step_1m_rows", |b| {
        b.iter(|| {
            offset = (offset + 3.0) % 999_000.0;
            manager.container_mut().set_scroll_offset(offset);
            black_box(manager.flush())
        })
    });

    c.bench_function("page_jump_1m_rows", |b| {
        b.iter(|| {
            offset = (offset + 7_919.0) % 999_000.0;
            manager.container_mut().set_scroll_offset(offset);
            black_box(manager.flush())
        })
    });
}

criterion_group!(benches, visible_range, scroll_step);
criterion_main!(benches);
