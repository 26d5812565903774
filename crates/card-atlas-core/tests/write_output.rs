use std::path::{Path, PathBuf};

use card_atlas_core::prelude::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("card-atlas-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn cfg_at(path: &Path) -> AtlasConfig {
    AtlasConfig::builder()
        .output_path(path)
        .font_candidates(Vec::<PathBuf>::new())
        .build()
}

#[test]
fn creates_missing_directories_and_writes_rgba_png() {
    let dir = scratch_dir("png");
    let png = dir.join("content").join("images").join("cards_sheet.png");
    let cfg = cfg_at(&png);

    let out = generate_atlas(&cfg).expect("generate");
    assert!(png.is_file());

    let img = image::open(&png).expect("decode");
    assert_eq!(img.color(), image::ColorType::Rgba8);
    let rgba = img.to_rgba8();
    assert_eq!(rgba.dimensions(), (1024, 1024));
    assert_eq!(rgba.get_pixel(0, 0)[3], 0);
    assert!(rgba.as_raw() == out.rgba.as_raw(), "written PNG differs from rendered canvas");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn writes_layout_sidecar_next_to_png() {
    let dir = scratch_dir("layout");
    let png = dir.join("cards_sheet.png");
    let cfg = cfg_at(&png);
    generate_atlas(&cfg).expect("generate");

    let json_path = dir.join("cards_sheet.json");
    assert_eq!(cfg.layout_path(), json_path);
    let text = std::fs::read_to_string(&json_path).expect("read json");
    let v: serde_json::Value = serde_json::from_str(&text).expect("parse json");

    let frames = v["frames"].as_object().expect("frames");
    assert_eq!(frames.len(), 52);
    assert_eq!(v["frames"]["AS"]["frame"]["x"], 0);
    assert_eq!(v["frames"]["AS"]["frame"]["y"], 0);
    assert_eq!(v["frames"]["KD"]["frame"]["x"], 12 * 1024 / 13);
    assert_eq!(v["frames"]["KD"]["frame"]["y"], 768);
    assert_eq!(v["frames"]["10H"]["suit"], "hearts");
    assert_eq!(v["meta"]["image"], "cards_sheet.png");
    assert_eq!(v["meta"]["columns"], 13);
    assert_eq!(v["meta"]["rows"], 4);
    assert_eq!(v["meta"]["font"]["kind"], "builtin");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn layout_sidecar_can_be_disabled() {
    let dir = scratch_dir("nolayout");
    let png = dir.join("cards_sheet.png");
    let cfg = AtlasConfig {
        write_layout: false,
        ..cfg_at(&png)
    };
    generate_atlas(&cfg).expect("generate");
    assert!(png.is_file());
    assert!(!dir.join("cards_sheet.json").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rerunning_overwrites_with_identical_bytes() {
    let dir = scratch_dir("rerun");
    let png = dir.join("cards_sheet.png");
    let cfg = cfg_at(&png);

    generate_atlas(&cfg).expect("first");
    let first = std::fs::read(&png).expect("read first");
    generate_atlas(&cfg).expect("second");
    let second = std::fs::read(&png).expect("read second");
    assert!(first == second, "PNG bytes changed between runs");

    let _ = std::fs::remove_dir_all(&dir);
}
