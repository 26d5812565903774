use std::path::PathBuf;

use card_atlas_core::prelude::*;

#[test]
fn builtin_render_is_pixel_identical_across_runs() {
    let cfg = AtlasConfig::builder()
        .font_candidates(Vec::<PathBuf>::new())
        .build();
    let a = render_atlas(&cfg).expect("render a");
    let b = render_atlas(&cfg).expect("render b");
    assert_eq!(a.rgba.dimensions(), b.rgba.dimensions());
    assert!(a.rgba.as_raw() == b.rgba.as_raw(), "renders differ");
}

#[test]
fn default_fonts_render_is_pixel_identical_across_runs() {
    // whatever font this machine resolves, the result must be stable
    let cfg = AtlasConfig::default();
    let a = render_atlas(&cfg).expect("render a");
    let b = render_atlas(&cfg).expect("render b");
    assert_eq!(a.sheet.meta.font, b.sheet.meta.font);
    assert_eq!(a.rgba.dimensions(), (1024, 1024));
    assert!(a.rgba.as_raw() == b.rgba.as_raw(), "renders differ");
}

#[test]
fn frames_are_identical_across_font_sources() {
    let builtin = render_with_fonts(&AtlasConfig::default(), &FontSet::builtin(30.0, 70.0))
        .expect("render");
    let resolved = render_atlas(&AtlasConfig::default()).expect("render");
    for (a, b) in builtin.sheet.frames.iter().zip(&resolved.sheet.frames) {
        assert_eq!(a.key, b.key);
        assert_eq!(a.frame, b.frame);
    }
}
