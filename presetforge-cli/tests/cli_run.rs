//! End-to-end runs of the `presetforge` binary against the shared fixtures.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn presetforge() -> Command {
    Command::cargo_bin("presetforge").expect("presetforge binary")
}

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("tests")
        .join("fixtures")
}

fn copy_file(from: &Path, to: &Path) {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::copy(from, to).unwrap();
}

/// Temp working directory laid out like a real checkout: taxonomy tables, feeds, batch file.
fn create_workdir() -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    let root = td.path();
    let fx = fixtures();

    for table in ["facc_groups.json", "facc_subgroups.json"] {
        copy_file(
            &fx.join("taxonomy").join(table),
            &root.join("taxonomy").join(table),
        );
    }
    copy_file(
        &fx.join("schemas").join("sample_schema.json"),
        &root.join("schemas").join("sample_schema.json"),
    );
    copy_file(&fx.join("batch.json"), &root.join("batch.json"));

    td
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

#[test]
fn batch_run_writes_preset_and_reports_it() {
    let temp = create_workdir();

    presetforge()
        .current_dir(temp.path())
        .arg("batch.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("SAMPLE_preset.xml file has been saved."));

    let xml = read(&temp.path().join("SAMPLE_preset.xml"));
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains(r#"<group name="Sample Schema" icon="presets/misc/nga_logo.png">"#));
}

#[test]
fn shared_columns_become_single_chunks() {
    let temp = create_workdir();
    presetforge()
        .current_dir(temp.path())
        .arg("batch.json")
        .assert()
        .success();

    let xml = read(&temp.path().join("SAMPLE_preset.xml"));
    assert_eq!(xml.matches(r#"<text key="NAM""#).count(), 1);
    assert_eq!(xml.matches(r#"<text key="F_CODE""#).count(), 1);
    assert_eq!(xml.matches(r#"<combo key="FFN""#).count(), 1);
}

#[test]
fn enumerations_are_sorted() {
    let temp = create_workdir();
    presetforge()
        .current_dir(temp.path())
        .arg("batch.json")
        .assert()
        .success();

    let xml = read(&temp.path().join("SAMPLE_preset.xml"));
    let pos = |needle: &str| {
        xml.find(needle)
            .unwrap_or_else(|| panic!("missing {needle} in\n{xml}"))
    };

    assert!(pos(r#"value="-999999""#) < pos(r#"value="1""#));
    assert!(pos(r#"value="1""#) < pos(r#"value="10""#));
    assert!(pos(r#"value="abandoned""#) < pos(r#"value="damaged""#));
    assert!(pos(r#"value="damaged""#) < pos(r#"value="Functional""#));
}

#[test]
fn ambiguous_code_gets_markers_and_unused_groups_are_pruned() {
    let temp = create_workdir();
    presetforge()
        .current_dir(temp.path())
        .arg("batch.json")
        .assert()
        .success();

    let xml = read(&temp.path().join("SAMPLE_preset.xml"));
    assert_eq!(xml.matches("OSMTAGS").count(), 2);
    assert!(xml.contains(
        r#"<item name="River - Area" type="closedway,multipolygon" preset_name_label="true">"#
    ));
    assert!(xml.contains(
        r#"<item name="River - Line" type="way,closedway" preset_name_label="true">"#
    ));

    assert!(xml.contains(r#"name="Miscellaneous Feature""#));
    assert!(xml.contains(r#"name="Inland Water""#));
    assert!(!xml.contains(r#"name="Vegetation""#));
    assert!(!xml.contains(r#"name="Railway""#));
}

#[test]
fn unmatched_code_lands_in_fallback_subgroup() {
    let temp = create_workdir();
    presetforge()
        .current_dir(temp.path())
        .arg("batch.json")
        .assert()
        .success();

    let xml = read(&temp.path().join("SAMPLE_preset.xml"));
    let misc = xml.find(r#"<group name="Miscellaneous" icon"#).unwrap();
    let tower = xml.find(r#"<item name="Unclassified Tower - Point""#).unwrap();
    assert!(misc < tower);
    assert!(xml.contains(r#"<key key="F_CODE" value="QZ999"/>"#));
}

#[test]
fn missing_schema_fails_without_output() {
    let temp = create_workdir();
    fs::write(
        temp.path().join("broken.json"),
        r#"{"GONE": {"schema": "schemas/missing.json", "name": "Gone", "icon": "x.png"}}"#,
    )
    .unwrap();

    presetforge()
        .current_dir(temp.path())
        .arg("broken.json")
        .assert()
        .failure()
        .code(1);

    assert!(!temp.path().join("GONE_preset.xml").exists());
}

#[test]
fn families_written_before_a_failure_are_reported() {
    let temp = create_workdir();
    fs::write(
        temp.path().join("mixed.json"),
        r#"{
  "GOOD": {"schema": "schemas/sample_schema.json", "name": "Good", "icon": "g.png"},
  "GONE": {"schema": "schemas/missing.json", "name": "Gone", "icon": "x.png"}
}"#,
    )
    .unwrap();

    presetforge()
        .current_dir(temp.path())
        .arg("mixed.json")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("GOOD_preset.xml file has been saved."));

    assert!(temp.path().join("GOOD_preset.xml").exists());
    assert!(!temp.path().join("GONE_preset.xml").exists());
}

#[test]
fn missing_batch_descriptor_fails() {
    let temp = create_workdir();

    presetforge()
        .current_dir(temp.path())
        .arg("nope.json")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn invalid_config_fails() {
    let temp = create_workdir();
    fs::write(temp.path().join("presetforge.toml"), "[paths\n").unwrap();

    presetforge()
        .current_dir(temp.path())
        .arg("batch.json")
        .assert()
        .failure();
}

#[test]
fn default_batch_runs_every_family_from_config() {
    let temp = create_workdir();
    let root = temp.path();
    fs::write(
        root.join("presetforge.toml"),
        r#"
[paths]
schema_dir = "feeds"
out_dir = "out"
"#,
    )
    .unwrap();
    for feed in [
        "tds40_full_schema.json",
        "tds61_full_schema.json",
        "tds70_full_schema.json",
        "tds71_full_schema.json",
        "mgcp_schema.json",
        "ggdm30_full_schema.json",
    ] {
        copy_file(
            &root.join("schemas").join("sample_schema.json"),
            &root.join("feeds").join(feed),
        );
    }

    presetforge().current_dir(root).assert().success();

    for family in ["TDSv40", "TDSv61", "TDSv70", "TDSv71", "MGCP", "GGDMv30"] {
        assert!(
            root.join("out").join(format!("{family}_preset.xml")).exists(),
            "{family} not written"
        );
    }
    let mgcp = read(&root.join("out").join("MGCP_preset.xml"));
    assert!(mgcp.contains(r#"<key key="FCODE" value="AL015"/>"#));
    assert!(mgcp.contains(r#"icon="presets/misc/MGCP_logo.png""#));
    let tds = read(&root.join("out").join("TDSv71_preset.xml"));
    assert!(tds.contains(r#"<key key="F_CODE" value="AL015"/>"#));
}

#[test]
fn help_mentions_batch_argument() {
    presetforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[BATCH]"));
}

#[test]
fn unknown_flag_is_rejected() {
    presetforge().arg("--apply").assert().failure();
}
