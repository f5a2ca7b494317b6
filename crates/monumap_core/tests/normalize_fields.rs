use monumap_core::{
    normalize_ecosystem, normalize_ecosystem_member, normalize_monument, normalize_monuments,
    resolve_tags, strip_markup,
};
use serde_json::json;

#[test]
fn monument_fields_resolve_through_lowercase_aliases() {
    let record = json!({
        "id": "m-1",
        "fieldData": {
            "name": "Statue of Liberty",
            "status": "Built",
            "location": "New York, NY",
            "locationcoords": "40.6892, -74.0445",
            "description": "<p>Colossal <em>neoclassical</em> sculpture</p>",
            "year": "1886",
            "height": "93 m",
            "built-by": "Gustave Eiffel",
            "funded-by": "Public subscription",
            "conceptualized-by": "Édouard de Laboulaye",
            "tags": "landmark, liberty",
            "link": "https://example.org/liberty"
        }
    });

    let monument = normalize_monument(&record);

    assert_eq!(monument.id, "m-1");
    assert_eq!(monument.name, "Statue of Liberty");
    assert_eq!(monument.status.as_deref(), Some("Built"));
    assert_eq!(monument.location.as_deref(), Some("New York, NY"));
    assert_eq!(monument.description, "Colossal neoclassical sculpture");
    assert_eq!(monument.year.as_deref(), Some("1886"));
    assert_eq!(monument.height.as_deref(), Some("93 m"));
    assert_eq!(monument.built_by.as_deref(), Some("Gustave Eiffel"));
    assert_eq!(monument.funded_by.as_deref(), Some("Public subscription"));
    assert_eq!(
        monument.conceptualized_by.as_deref(),
        Some("Édouard de Laboulaye")
    );
    assert_eq!(monument.tags, vec!["landmark", "liberty"]);
    assert_eq!(monument.link.as_deref(), Some("https://example.org/liberty"));

    let coords = monument.coordinates.expect("pair string should resolve");
    assert_eq!((coords.lat, coords.lon), (40.6892, -74.0445));
}

#[test]
fn monument_fields_resolve_through_capitalized_aliases() {
    let record = json!({
        "_id": "m-2",
        "Name": "Mount Rushmore",
        "Status": "Built",
        "Location": "South Dakota",
        "Description": "Carved granite faces",
        "Year": 1941,
        "Built By": "Gutzon Borglum",
        "Funded By": "Federal funds",
        "Conceptualized By": "Doane Robinson",
        "Tags": ["granite", "presidents"],
        "Link": "https://example.org/rushmore"
    });

    let monument = normalize_monument(&record);

    assert_eq!(monument.id, "m-2");
    assert_eq!(monument.name, "Mount Rushmore");
    assert_eq!(monument.year.as_deref(), Some("1941"));
    assert_eq!(monument.built_by.as_deref(), Some("Gutzon Borglum"));
    assert_eq!(monument.funded_by.as_deref(), Some("Federal funds"));
    assert_eq!(monument.conceptualized_by.as_deref(), Some("Doane Robinson"));
    assert_eq!(monument.tags, vec!["granite", "presidents"]);
    assert_eq!(monument.link.as_deref(), Some("https://example.org/rushmore"));

    // No coordinate alias present; the Location label resolves via the
    // fixed place table.
    let coords = monument.coordinates.expect("place label should resolve");
    assert_eq!((coords.lat, coords.lon), (43.9695, -99.9018));
}

#[test]
fn link_prefers_link_2_alias() {
    let record = json!({
        "id": "m-3",
        "link-2": "https://example.org/preferred",
        "link": "https://example.org/fallback"
    });

    let monument = normalize_monument(&record);
    assert_eq!(monument.link.as_deref(), Some("https://example.org/preferred"));
}

#[test]
fn id_prefers_id_over_underscore_id_on_the_outer_record() {
    let record = json!({
        "id": "outer",
        "_id": "legacy",
        "fieldData": {"id": "inner", "name": "Arch"}
    });

    assert_eq!(normalize_monument(&record).id, "outer");
}

#[test]
fn missing_fields_under_every_alias_are_absent_not_errors() {
    let monument = normalize_monument(&json!({"id": "m-4"}));

    assert_eq!(monument.name, "");
    assert_eq!(monument.status, None);
    assert_eq!(monument.location, None);
    assert_eq!(monument.coordinates, None);
    assert_eq!(monument.description, "");
    assert_eq!(monument.year, None);
    assert_eq!(monument.height, None);
    assert_eq!(monument.built_by, None);
    assert_eq!(monument.funded_by, None);
    assert_eq!(monument.conceptualized_by, None);
    assert!(monument.tags.is_empty());
    assert_eq!(monument.link, None);
}

#[test]
fn null_alias_values_are_treated_as_missing() {
    let record = json!({
        "id": "m-5",
        "status": null,
        "Status": "Proposed",
        "description": null
    });

    let monument = normalize_monument(&record);
    assert_eq!(monument.status.as_deref(), Some("Proposed"));
    assert_eq!(monument.description, "");
}

#[test]
fn ecosystem_member_resolves_both_alias_families() {
    let record = json!({
        "id": "e-1",
        "fieldData": {
            "Name": "Monument Trust",
            "type": "Organization",
            "Category": "Preservation",
            "association": "National",
            "Website": "https://example.org/trust",
            "description": "<div>Keeps <b>stone</b> standing</div>",
            "Tags": "heritage, advocacy"
        }
    });

    let member = normalize_ecosystem_member(&record);

    assert_eq!(member.id, "e-1");
    assert_eq!(member.name, "Monument Trust");
    assert_eq!(member.member_type, "Organization");
    assert_eq!(member.category.as_deref(), Some("Preservation"));
    assert_eq!(member.association.as_deref(), Some("National"));
    assert_eq!(member.website.as_deref(), Some("https://example.org/trust"));
    assert_eq!(member.description, "Keeps stone standing");
    assert_eq!(member.tags, vec!["heritage", "advocacy"]);
}

#[test]
fn batch_normalization_drops_only_id_less_records() {
    let records = vec![
        json!({"id": "m-1", "name": "Arch"}),
        json!({"name": "Anonymous"}),
        json!({"_id": "m-2", "name": "Obelisk"}),
    ];

    let monuments = normalize_monuments(&records);
    let ids: Vec<&str> = monuments.iter().map(|monument| monument.id.as_str()).collect();
    assert_eq!(ids, vec!["m-1", "m-2"]);

    let members = normalize_ecosystem(&[json!({"name": "No Id", "type": "Person"})]);
    assert!(members.is_empty());
}

#[test]
fn tag_resolution_contract() {
    assert_eq!(resolve_tags(Some(&json!("A, B ,C"))), vec!["A", "B", "C"]);
    assert_eq!(resolve_tags(Some(&json!(["x"]))), vec!["x"]);
    assert!(resolve_tags(Some(&json!(null))).is_empty());
    assert!(resolve_tags(None).is_empty());
}

#[test]
fn markup_stripping_contract() {
    assert_eq!(strip_markup(Some("<h1>Title</h1> body")), "Title body");
    assert_eq!(strip_markup(Some("  plain  ")), "plain");
    assert_eq!(strip_markup(None), "");
}
