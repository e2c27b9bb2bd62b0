use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shapemesh_core::geometry::generate;
use shapemesh_core::types::Vec3;
use shapemesh_core::{tessellate, LineCaps, LineStyle, Path, PointStyle, PointSymbol};

fn zigzag(anchors: usize) -> Path {
    let points: Vec<Vec3> = (0..anchors)
        .map(|i| Vec3::planar(i as f32 * 2.0, if i % 2 == 0 { 0.0 } else { 3.0 }))
        .collect();
    Path::from_anchors(points, false)
}

fn bench_tessellate(c: &mut Criterion) {
    let path = zigzag(1000);
    for caps in [LineCaps::Sharp, LineCaps::Round, LineCaps::Bevel] {
        let style = LineStyle::new(0.5, caps);
        c.bench_function(&format!("tessellate_1000_{caps:?}"), |b| {
            b.iter(|| tessellate(black_box(&path), black_box(&style)));
        });
    }
}

fn bench_symbol(c: &mut Criterion) {
    let mut style = PointStyle::new(2.0, PointSymbol::Circle);
    style.circle_corners = 64;
    c.bench_function("circle_64", |b| b.iter(|| generate(black_box(&style))));
}

criterion_group!(benches, bench_tessellate, bench_symbol);
criterion_main!(benches);
