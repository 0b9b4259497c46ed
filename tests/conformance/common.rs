use std::path::PathBuf;

/// Directory holding the YAML fixture suites.
pub fn fixtures_dir() -> PathBuf {
    std::env::var("DRAFT4_FIXTURES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// A group of cases sharing one schema.
#[derive(Debug, serde::Deserialize)]
pub struct Group {
    pub description: String,
    pub schema: serde_json::Value,
    pub tests: Vec<Case>,
}

#[derive(Debug, serde::Deserialize)]
pub struct Case {
    pub description: String,
    pub data: serde_json::Value,
    pub valid: bool,
    /// Expected data errors, matched by kind and (when given) path.
    #[serde(default)]
    pub errors: Option<Vec<ExpectedError>>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ExpectedError {
    pub kind: String,
    #[serde(default)]
    pub path: Option<String>,
}

pub fn load_suite(name: &str) -> Vec<Group> {
    let path = fixtures_dir().join(name);
    assert!(path.exists(), "fixture not found: {:?}", path);
    let content = std::fs::read_to_string(&path).unwrap();
    serde_saphyr::from_str(&content).unwrap()
}
