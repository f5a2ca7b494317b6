use monumap_core::{
    Coordinates, EcosystemMember, FilterCategory, FocusIntent, Monument, ViewEngine,
    MIN_FOCUS_ZOOM,
};

fn engine_with_selectables() -> ViewEngine {
    let mut mapped = Monument::new("m-mapped", "Statue of Liberty");
    mapped.coordinates = Some(Coordinates::new(40.6892, -74.0445));

    let unmapped = Monument::new("m-unmapped", "Proposed Spire");

    let patron = EcosystemMember::new("e-patron", "Doane Robinson", "Person");

    ViewEngine::from_collections(vec![mapped, unmapped], vec![patron])
}

#[test]
fn selecting_a_mapped_monument_emits_detail_and_pan_intents() {
    let mut engine = engine_with_selectables();
    let intents = engine.select_item("m-mapped");

    assert_eq!(engine.selected(), Some("m-mapped"));
    assert_eq!(
        intents,
        vec![
            FocusIntent::OpenDetail {
                id: "m-mapped".to_string()
            },
            FocusIntent::PanTo {
                coordinates: Coordinates::new(40.6892, -74.0445),
                min_zoom: MIN_FOCUS_ZOOM,
            },
        ]
    );
}

#[test]
fn selecting_an_unmapped_monument_opens_detail_without_map_motion() {
    let mut engine = engine_with_selectables();
    let intents = engine.select_item("m-unmapped");

    assert_eq!(engine.selected(), Some("m-unmapped"));
    assert_eq!(
        intents,
        vec![FocusIntent::OpenDetail {
            id: "m-unmapped".to_string()
        }]
    );
}

#[test]
fn selecting_an_ecosystem_member_clears_selection() {
    let mut engine = engine_with_selectables();
    engine.select_item("m-mapped");

    let intents = engine.select_item("e-patron");
    assert!(intents.is_empty());
    assert_eq!(engine.selected(), None);
}

#[test]
fn selecting_an_unknown_id_clears_selection() {
    let mut engine = engine_with_selectables();
    engine.select_item("m-mapped");

    let intents = engine.select_item("missing");
    assert!(intents.is_empty());
    assert_eq!(engine.selected(), None);
}

#[test]
fn changing_the_search_term_clears_a_valid_selection() {
    let mut engine = engine_with_selectables();
    engine.set_search_term("arch");
    engine.select_item("m-mapped");
    assert_eq!(engine.selected(), Some("m-mapped"));

    engine.set_search_term("");
    assert_eq!(engine.selected(), None);
}

#[test]
fn changing_the_filter_clears_selection_even_to_the_same_value() {
    let mut engine = engine_with_selectables();
    engine.select_item("m-mapped");

    engine.set_filter(engine.active_filter());
    assert_eq!(engine.selected(), None);

    engine.select_item("m-mapped");
    engine.set_filter(FilterCategory::Patrons);
    assert_eq!(engine.selected(), None);
}

#[test]
fn pan_intent_serializes_for_the_presentation_boundary() {
    let intent = FocusIntent::PanTo {
        coordinates: Coordinates::new(43.9695, -99.9018),
        min_zoom: MIN_FOCUS_ZOOM,
    };
    let json = serde_json::to_value(&intent).expect("intent should serialize");

    assert_eq!(json["intent"], "pan_to");
    assert_eq!(json["coordinates"], serde_json::json!([43.9695, -99.9018]));
    assert_eq!(json["min_zoom"], 8);
}
