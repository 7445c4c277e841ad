//! Integration test: tables loaded from TOML files.

use rendezvous::{Builder, ConfigError, Fnv1a32, Table, TableConfig};
use rendezvous_integration_tests::keys;

const KEY: &str = "mac:112233445566";

fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("table.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
#[ntest::timeout(10000)]
fn test_file_config_routes_like_builder() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
strategy = "fnv1a32"

[[members]]
name = "foo.com"

[[members]]
name = "bar.net"
"#,
    );

    let from_file = TableConfig::load(&path).unwrap().build();
    let direct = Builder::<String>::new()
        .hash32(Fnv1a32::new)
        .add_string_members(["foo.com", "bar.net"])
        .build();

    assert_eq!(from_file.get_str(KEY).map(String::as_str), Some("bar.net"));
    for key in keys(1_000) {
        assert_eq!(from_file.get(&key), direct.get(&key));
    }
}

#[test]
#[ntest::timeout(10000)]
fn test_config_membership_change_diff() {
    let old = TableConfig::from_toml(
        r#"members = [{ name = "a" }, { name = "b" }, { name = "c" }]"#,
    )
    .unwrap()
    .build();
    let new = TableConfig::from_toml(r#"members = [{ name = "a" }, { name = "c" }]"#)
        .unwrap()
        .build();

    let keys = keys(2_000);
    let moves = Table::diff(&old, &new, &keys);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.from.map(String::as_str) == Some("b")));
}

#[test]
#[ntest::timeout(10000)]
fn test_invalid_file_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "members = \"not a list\"\n");

    let err = TableConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
#[ntest::timeout(10000)]
fn test_round_trip_through_toml() {
    let config = TableConfig::from_toml(
        r#"
strategy = "fnv1a32"
members = [{ name = "x", digest = "x-digest" }, { name = "y" }]
"#,
    )
    .unwrap();

    let serialized = toml::to_string(&config).unwrap();
    assert_eq!(TableConfig::from_toml(&serialized).unwrap(), config);
}
