use criterion::{Criterion, black_box, criterion_group, criterion_main};
use card_atlas_core::prelude::*;

fn bench_render_sheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_sheet");
    let cfg = AtlasConfig::default();

    let builtin = FontSet::builtin(cfg.corner_font_px, cfg.center_font_px);
    group.bench_function("builtin_font", |b| {
        b.iter(|| black_box(render_with_fonts(&cfg, &builtin).expect("render")));
    });

    // system font if one of the candidates exists, builtin otherwise
    let resolved = resolve_fonts(&cfg.font_candidates, cfg.corner_font_px, cfg.center_font_px);
    group.bench_function("resolved_font", |b| {
        b.iter(|| black_box(render_with_fonts(&cfg, &resolved).expect("render")));
    });

    group.finish();
}

criterion_group!(benches, bench_render_sheet);
criterion_main!(benches);
