//! Tests for rendering a whole preset gallery to disk.

mod common;

use common::{fixtures, TestWorkspace};
use filterplay::error::RenderError;
use filterplay::models::GalleryConfig;
use filterplay::rendering::render_gallery;
use pretty_assertions::assert_eq;

#[test]
fn test_default_gallery_writes_every_preset() {
    let ws = TestWorkspace::new();
    let image = fixtures::gradient(16, 8);

    let report =
        render_gallery(&image, &GalleryConfig::default(), &ws.path().join("out")).unwrap();

    assert!(report.is_complete(), "failures: {:?}", report.failed);
    assert_eq!(
        ws.list("out"),
        vec![
            "atkinson.png",
            "gamma.png",
            "sepia.png",
            "shading.png",
            "solarize.png",
            "stencil.png",
            "tint.png",
        ]
    );
    for path in &report.written {
        let out = ws.read_png(path);
        assert_eq!(out.dimensions(), image.dimensions());
    }
}

#[test]
fn test_broken_preset_does_not_stop_the_rest() {
    let ws = TestWorkspace::new();
    let config = ws.config(fixtures::MIXED_PRESETS);

    let report =
        render_gallery(&fixtures::gray(4, 4, 90), &config, &ws.path().join("out")).unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "broken");
    assert!(matches!(report.failed[0].1, RenderError::Step(_)));
    assert_eq!(ws.list("out"), vec!["negative.png", "poster.png"]);

    let negative = ws.read_png("out/negative.png");
    assert_eq!(negative, fixtures::gray(4, 4, 165));
    common::assert_bilevel(&ws.read_png("out/poster.png"));
}

#[test]
fn test_unreadable_config_falls_back_to_defaults() {
    let ws = TestWorkspace::new();
    let config = ws.config("presets: [unterminated");

    assert_eq!(config, GalleryConfig::default());
}

#[test]
fn test_output_dir_is_created() {
    let ws = TestWorkspace::new();
    let nested = ws.path().join("a").join("b");

    let report =
        render_gallery(&fixtures::gray(2, 2, 10), &GalleryConfig::default(), &nested).unwrap();

    assert_eq!(report.written.len(), 7);
    assert!(nested.is_dir());
}
