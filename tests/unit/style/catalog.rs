use super::*;

#[test]
fn builtin_catalog_has_the_four_frames() {
    let catalog = FrameCatalog::builtin();
    let ids: Vec<&str> = catalog.ids().collect();
    assert_eq!(ids, vec!["frame1", "frame2", "frame3", "frameCNX"]);
}

#[test]
fn frame1_carries_the_original_texts() {
    let catalog = FrameCatalog::builtin();
    let style = catalog.get("frame1").unwrap();
    assert_eq!(style.header_text, "인생 네컷");
    assert_eq!(style.footer_text, "나만의 특별한 순간");
    assert_eq!(style.border, "#ff6b6b".parse().unwrap());
    assert_eq!(style.background, "#f8f8f8".parse().unwrap());
}

#[test]
fn unknown_id_is_a_config_error() {
    let catalog = FrameCatalog::builtin();
    let err = catalog.get("frame9").unwrap_err();
    assert!(matches!(err, FourcutError::Config(_)));
    assert!(err.to_string().contains("frame9"));
}

#[test]
fn catalog_round_trips_through_json() {
    let catalog = FrameCatalog::builtin();
    let json = serde_json::to_string(&catalog).unwrap();
    let back: FrameCatalog = serde_json::from_str(&json).unwrap();
    assert_eq!(back, catalog);
}

#[test]
fn insert_overrides_and_extends() {
    let mut catalog = FrameCatalog::new();
    catalog.insert(
        "custom",
        FrameStyle {
            background: Color::WHITE,
            border: Color::rgb(0, 0, 0),
            text: Color::rgb(0, 0, 0),
            header_text: "HI".to_string(),
            footer_text: "BYE".to_string(),
        },
    );
    assert_eq!(catalog.get("custom").unwrap().header_text, "HI");
    assert!(catalog.get("frame1").is_err());
}
