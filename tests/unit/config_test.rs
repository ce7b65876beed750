//! Tests for project configuration loading

use docshape::config::Config;
use docshape::validator::DEFAULT_EXTENSIONS;
use tempfile::TempDir;

#[test]
fn defaults_when_file_is_missing() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(temp.path());
    assert_eq!(config.structure.extensions, DEFAULT_EXTENSIONS);
}

#[test]
fn file_overrides_extensions() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".docshape.toml"),
        r#"
[structure]
extensions = [".md", ".rst"]
"#,
    )
    .unwrap();

    let config = Config::load(temp.path());
    assert_eq!(config.structure.extensions, vec![".md", ".rst"]);
}

#[test]
fn missing_section_keeps_default_extensions() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".docshape.toml"), "# no overrides\n").unwrap();

    let config = Config::load(temp.path());
    assert_eq!(config.structure.extensions, DEFAULT_EXTENSIONS);
}

#[test]
fn unparseable_file_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".docshape.toml"), "this is {{{ not toml").unwrap();

    let config = Config::load(temp.path());
    assert_eq!(config.structure.extensions, DEFAULT_EXTENSIONS);
}

#[test]
fn default_matches_validator_defaults() {
    let config = Config::default();
    assert_eq!(config.structure.extensions, DEFAULT_EXTENSIONS);
}
