use serde_json::{json, Value};

use super::*;

// --- Range Tests ---

#[test]
fn test_range_span_serializes_as_pair() {
    let range = Range::span(42, 108);
    assert_eq!(serde_json::to_value(&range).unwrap(), json!([42, 108]));
}

#[test]
fn test_range_complement_serializes_as_object() {
    let range = Range::complement(Range::span(5, 40));
    assert_eq!(
        serde_json::to_value(&range).unwrap(),
        json!({ "complement": [5, 40] })
    );
}

#[test]
fn test_range_joined_serializes_as_object() {
    let range = Range::joined([Range::span(1, 5), Range::span(10, 15)]);
    assert_eq!(
        serde_json::to_value(&range).unwrap(),
        json!({ "joined": [[1, 5], [10, 15]] })
    );
}

#[test]
fn test_range_nested_roundtrip() {
    let range = Range::complement(Range::joined([
        Range::span(1, 5),
        Range::complement(Range::span(10, 15)),
        Range::span(20, 20),
    ]));
    let value = serde_json::to_value(&range).unwrap();
    let back: Range = serde_json::from_value(value).unwrap();
    assert_eq!(back, range);
}

#[test]
fn test_range_deserialize_rejects_bad_shapes() {
    assert!(serde_json::from_value::<Range>(json!([1])).is_err());
    assert!(serde_json::from_value::<Range>(json!([1, 2, 3])).is_err());
    assert!(serde_json::from_value::<Range>(json!({ "reverse": [1, 2] }))
        .is_err());
}

#[test]
fn test_range_display() {
    assert_eq!(Range::span(7, 7).to_string(), "7");
    assert_eq!(Range::span(1, 10).to_string(), "1..10");
    assert_eq!(
        Range::complement(Range::joined([
            Range::span(1, 5),
            Range::span(8, 12)
        ]))
        .to_string(),
        "complement(join(1..5,8..12))"
    );
}

// --- RawFeature Tests ---

#[test]
fn test_raw_feature_duplicate_keys_get_dollar_slots() {
    let mut feature = RawFeature::new("misc_feature", "1..10");
    feature.insert_qualifier("host", "first".to_string());
    feature.insert_qualifier("host", "second".to_string());
    feature.insert_qualifier("host", "third".to_string());

    let keys: Vec<&str> = feature
        .qualifiers
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["host", "host$", "host$$"]);
    assert_eq!(feature.qualifiers["host"], "first");
    assert_eq!(feature.qualifiers["host$"], "second");
    assert_eq!(feature.qualifiers["host$$"], "third");
}

#[test]
fn test_raw_feature_keys_lowercased_and_trimmed() {
    let mut feature = RawFeature::new("gene", "1..10");
    feature.insert_qualifier(" Locus_Tag ", "T001".to_string());
    assert_eq!(feature.qualifiers["locus_tag"], "T001");
}

// --- Feature Tests ---

fn leaf(
    id: u64,
    feature_type: &str,
) -> Feature {
    Feature {
        id,
        parent: None,
        feature_type: feature_type.to_string(),
        range: Range::span(1, 10),
        qualifiers: Default::default(),
        children: Vec::new(),
    }
}

#[test]
fn test_feature_serializes_flat_without_children_key() {
    let mut feature = leaf(2, "gene");
    feature
        .qualifiers
        .insert("gene".to_string(), "testA".to_string());

    let value = serde_json::to_value(&feature).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "i2",
            "type": "gene",
            "range": [1, 10],
            "gene": "testA",
        })
    );
    // parent never surfaces, even when set.
    let mut feature = leaf(3, "exon");
    feature.parent = Some("i2".to_string());
    let value = serde_json::to_value(&feature).unwrap();
    assert!(value.get("parent").is_none());
}

#[test]
fn test_feature_serializes_children_under_features_key() {
    let mut parent = leaf(1, "gene");
    parent.children.push(leaf(2, "exon"));

    let value = serde_json::to_value(&parent).unwrap();
    let children = value
        .get("features")
        .and_then(Value::as_array)
        .unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["id"], "i2");
}

// --- Document Tests ---

#[test]
fn test_default_source_matches_schema_defaults() {
    let value = serde_json::to_value(Source::default()).unwrap();
    assert_eq!(
        value,
        json!({
            "range": [0, 0],
            "organism": "",
            "mol_type": "genomic DNA",
        })
    );
}

#[test]
fn test_format_info_defaults() {
    let info = FormatInfo::default();
    assert_eq!(info.name, "GBSON");
    assert_eq!(info.version, "1.0.6");
    assert_eq!(
        info.url,
        "https://github.com/lehwark/GBSON/blob/master/GBSON.d.ts"
    );
}

// --- Reference Tests ---

#[test]
fn test_reference_skips_absent_fields() {
    let mut reference = Reference::new("Direct Submission");
    reference.index = Some(2);
    reference.range = Some((1, 60));

    let value = serde_json::to_value(&reference).unwrap();
    assert_eq!(
        value,
        json!({
            "title": "Direct Submission",
            "index": 2,
            "range": [1, 60],
        })
    );
}
