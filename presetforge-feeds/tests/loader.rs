//! Unit tests for feed loaders.

use camino::Utf8PathBuf;
use presetforge_feeds::{
    DEFAULT_FAMILIES, FeedError, JsonFileSchema, SchemaSource, StaticSchema, default_batch,
    load_batch_descriptor, load_taxonomy_table,
};
use presetforge_types::schema::{GeometryKind, SchemaEntry};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

fn root(temp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
}

fn schema_feed() -> &'static str {
    r#"[
        {
            "name": "PAL015",
            "fcode": "AL015",
            "desc": "General Building",
            "geom": "Point",
            "columns": [
                {
                    "name": "FFN",
                    "desc": "Feature Function",
                    "type": "enumeration",
                    "defValue": "0",
                    "enumerations": [{ "name": "Unknown", "value": "0" }]
                }
            ]
        },
        {
            "fcode": "BH140",
            "desc": "River",
            "geom": "Line",
            "columns": []
        }
    ]"#
}

#[test]
fn json_schema_loads_entries_in_order() {
    let temp = create_temp_dir();
    let path = root(&temp).join("schema.json");
    fs::write(&path, schema_feed()).unwrap();

    let entries = JsonFileSchema::new(path).get_schema().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].fcode, "AL015");
    assert_eq!(entries[1].geom, GeometryKind::Line);
}

#[test]
fn missing_schema_is_reported_with_path() {
    let temp = create_temp_dir();
    let path = root(&temp).join("nope.json");

    let err = JsonFileSchema::new(path.clone()).get_schema().unwrap_err();
    assert_eq!(err, FeedError::Missing { path: path.clone() });
    assert_eq!(err.path(), &path);
}

#[test]
fn malformed_schema_is_a_json_error() {
    let temp = create_temp_dir();
    let path = root(&temp).join("bad.json");
    fs::write(&path, "[{ not valid json }").unwrap();

    let err = JsonFileSchema::new(path).get_schema().unwrap_err();
    assert!(matches!(err, FeedError::Json { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn schema_missing_required_field_is_a_json_error() {
    let temp = create_temp_dir();
    let path = root(&temp).join("incomplete.json");
    fs::write(&path, r#"[{ "desc": "No code", "geom": "Point" }]"#).unwrap();

    let err = JsonFileSchema::new(path).get_schema().unwrap_err();
    match err {
        FeedError::Json { message, .. } => assert!(message.contains("fcode")),
        other => panic!("expected json error, got {other:?}"),
    }
}

#[test]
fn static_schema_returns_its_entries() {
    let entry = SchemaEntry::new("AL015", GeometryKind::Point, "General Building", vec![]);
    let source = StaticSchema::new(vec![entry.clone()]);
    assert_eq!(source.get_schema().unwrap(), vec![entry]);
}

#[test]
fn taxonomy_table_loads_in_declaration_order() {
    let temp = create_temp_dir();
    let path = root(&temp).join("subgroups.json");
    fs::write(
        &path,
        r#"{
            "AL": { "title": "Miscellaneous Feature", "icon": "presets/al.png" },
            "AK": { "title": "Recreation", "icon": "presets/ak.png" }
        }"#,
    )
    .unwrap();

    let table = load_taxonomy_table(&path).unwrap();
    let codes: Vec<&str> = table.keys().map(String::as_str).collect();
    assert_eq!(codes, vec!["AL", "AK"]);
    assert_eq!(table["AK"].title, "Recreation");
}

#[test]
fn batch_descriptor_loads() {
    let temp = create_temp_dir();
    let path = root(&temp).join("batch.json");
    fs::write(
        &path,
        r#"{ "Custom": { "schema": "feeds/custom.json", "name": "Custom Schema", "icon": "c.png" } }"#,
    )
    .unwrap();

    let batch = load_batch_descriptor(&path).unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch["Custom"].name, "Custom Schema");
    assert_eq!(batch["Custom"].schema, Utf8PathBuf::from("feeds/custom.json"));
}

#[test]
fn default_batch_lists_six_families() {
    let batch = default_batch(&Utf8PathBuf::from("schemas"));
    let families: Vec<&str> = batch.keys().map(String::as_str).collect();
    assert_eq!(
        families,
        vec!["TDSv40", "TDSv61", "TDSv70", "TDSv71", "MGCP", "GGDMv30"]
    );
    assert_eq!(batch.len(), DEFAULT_FAMILIES.len());
    assert_eq!(
        batch["MGCP"].schema,
        Utf8PathBuf::from("schemas/mgcp_schema.json")
    );
    assert_eq!(batch["MGCP"].icon, "presets/misc/MGCP_logo.png");
    assert_eq!(batch["GGDMv30"].icon, "presets/misc/usace_logo.png");
    assert_eq!(batch["TDSv61"].name, "TDSv61");
}
