use super::*;

#[test]
fn canonical_specs_validate() {
    OutputSpec::print().validate().unwrap();
    OutputSpec::download().validate().unwrap();
}

#[test]
fn download_is_a_scaled_print() {
    let print = OutputSpec::print();
    let download = OutputSpec::download();
    assert_eq!(print.width * 16 / 10, download.width);
    assert_eq!(print.height * 16 / 10, download.height);
    assert_eq!(download.gap / print.gap, 1.5);
}

#[test]
fn zero_dimension_is_rejected() {
    let mut spec = OutputSpec::print();
    spec.height = 0;
    let err = spec.validate().unwrap_err();
    assert!(matches!(err, FourcutError::Config(_)));
}

#[test]
fn negative_fields_are_rejected() {
    for mutate in [
        (|s: &mut OutputSpec| s.padding = -80.0) as fn(&mut OutputSpec),
        |s| s.border_width = 0.0,
        |s| s.gap = f64::NAN,
        |s| s.corner_radius = -8.0,
        |s| s.header_font_px = 0.0,
    ] {
        let mut spec = OutputSpec::print();
        mutate(&mut spec);
        assert!(matches!(
            spec.validate().unwrap_err(),
            FourcutError::Config(_)
        ));
    }
}

#[test]
fn degenerate_slot_room_is_rejected() {
    let mut spec = OutputSpec::print();
    spec.padding = 495.0; // slot width 10 <= 2 * photo inset
    assert!(spec.validate().is_err());

    let mut spec = OutputSpec::print();
    spec.text_reserve_px = 1990.0;
    assert!(spec.validate().is_err());
}

#[test]
fn slot_math_follows_the_invariant() {
    let spec = OutputSpec::print();
    let gaps = spec.gap * 3.0;
    let expected = ((f64::from(spec.height) - spec.text_reserve_px - gaps) / 4.0).floor();
    assert_eq!(spec.slot_height(), expected);
}

#[test]
fn selection_requires_exactly_four_indices() {
    assert!(Selection::new(&[0, 1, 2]).is_err());
    assert!(Selection::new(&[0, 1, 2, 3, 4]).is_err());
    assert!(Selection::new(&[]).is_err());

    let sel = Selection::new(&[2, 0, 3, 1]).unwrap();
    assert_eq!(sel.indices(), &[2, 0, 3, 1]);
}

#[test]
fn selection_arity_error_names_the_count() {
    let err = Selection::new(&[7]).unwrap_err();
    assert!(matches!(err, FourcutError::Selection(_)));
    assert!(err.to_string().contains("got 1"));
}

#[test]
fn selection_serde_enforces_arity() {
    let sel: Selection = serde_json::from_str("[2,0,3,1]").unwrap();
    assert_eq!(sel.indices(), &[2, 0, 3, 1]);
    assert!(serde_json::from_str::<Selection>("[0,1]").is_err());
    assert_eq!(serde_json::to_string(&sel).unwrap(), "[2,0,3,1]");
}

#[test]
fn duplicate_indices_are_allowed() {
    // The booth lets the same capture fill several slots.
    assert!(Selection::new(&[1, 1, 1, 1]).is_ok());
}
