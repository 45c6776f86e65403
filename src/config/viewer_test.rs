use super::*;

#[test]
fn embedded_viewer_config_parses() {
    let cfg = load_viewer_config().expect("embedded viewer.json must parse");
    assert_eq!(cfg.window.width, 1024.0);
    assert_eq!(cfg.window.height, 768.0);
    assert_eq!(cfg.window.title, "Map");
    assert!(cfg.image.default_path.is_none());
}

#[test]
fn default_path_accepts_a_pinned_image() {
    let raw = r#"{
        "window": { "width": 800.0, "height": 600.0, "title": "Map" },
        "image": { "default_path": "/tmp/map.jpg" }
    }"#;
    let cfg: ViewerConfig = serde_json::from_str(raw).unwrap();
    assert_eq!(cfg.image.default_path.as_deref(), Some("/tmp/map.jpg"));
}
