/// Loader for the JSON table of grammar expectations in `urls.json`.
///
/// The table mixes comment strings with test objects; an object holds the
/// input plus any number of expected components keyed by component name.
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case
    UrlTest {
        input: String,
        #[serde(default)]
        failure: bool,
        #[serde(flatten)]
        expected: BTreeMap<String, String>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct FixtureFailure {
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failures.len())
    }
}

pub fn load_url_fixtures() -> Vec<TestCase> {
    serde_json::from_str(include_str!("urls.json")).expect("urls.json must be valid")
}
