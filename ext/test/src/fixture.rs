//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the res core. A fixture is a
//! list of patterns (one filter set) plus documents with their expected
//! outcome. Expected highlights use `[` and `]` in place of the terminal
//! escape markers, e.g. `"p[od]xyz"`.

use res::prelude::*;
use res::{HIGHLIGHT_BEGIN, HIGHLIGHT_END};
use serde::Deserialize;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Raw patterns, one filter each. Empty means "match everything".
    #[serde(default)]
    pub patterns: Vec<String>,
    pub cases: Vec<TestCase>,
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub document: Document,
    pub expect: bool,
    /// Expected best kind highlight, in bracket notation.
    #[serde(default)]
    pub kind_highlight: Option<String>,
    /// Expected best name highlight, in bracket notation.
    #[serde(default)]
    pub name_highlight: Option<String>,
}

/// What a case expects, or what the engine produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub matched: bool,
    pub kind_highlight: Option<String>,
    pub name_highlight: Option<String>,
}

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: Outcome,
    pub actual: Outcome,
}

/// Replace the terminal markers with `[` / `]`.
#[must_use]
pub fn bracketed(text: &str) -> String {
    text.replace(HIGHLIGHT_BEGIN, "[").replace(HIGHLIGHT_END, "]")
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Compile this fixture's patterns
    pub fn filters(&self) -> FilterSet {
        FilterSet::from_patterns(self.patterns.iter().map(String::as_str))
    }

    /// Run all test cases and return results
    pub fn run(&self) -> Vec<CaseResult> {
        let filters = self.filters();
        self.cases
            .iter()
            .map(|case| {
                let doc = &case.document;
                let kind = bracketed(filters.highlight_kind(get_kind(doc)).text());
                let name = bracketed(filters.highlight_name(get_name(doc)).text());

                let expected = Outcome {
                    matched: case.expect,
                    kind_highlight: case.kind_highlight.clone(),
                    name_highlight: case.name_highlight.clone(),
                };
                // Only compare highlights the case pins down.
                let actual = Outcome {
                    matched: filters.matches_any(doc),
                    kind_highlight: case.kind_highlight.as_ref().map(|_| kind),
                    name_highlight: case.name_highlight.as_ref().map(|_| name),
                };

                CaseResult {
                    case_name: case.name.clone(),
                    passed: actual == expected,
                    expected,
                    actual,
                }
            })
            .collect()
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self.run();
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {:?}, got {:?}",
                self.name, result.case_name, result.expected, result.actual
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
name: inline
patterns: ["Pod/", "/svc"]
cases:
  - name: pod
    document: {kind: Pod, metadata: {name: other}}
    expect: true
    kind_highlight: "[Pod]"
    name_highlight: "other"
  - name: job
    document: {kind: Job, metadata: {name: other}}
    expect: false
"#;

    #[test]
    fn parses_and_runs_inline_fixture() {
        let fixture = Fixture::from_yaml(FIXTURE).unwrap();
        assert_eq!(fixture.cases.len(), 2);
        fixture.run_and_assert();
    }

    #[test]
    fn reports_failures() {
        let yaml = FIXTURE.replace("expect: false", "expect: true");
        let fixture = Fixture::from_yaml(&yaml).unwrap();
        let results = fixture.run();
        assert!(results[0].passed);
        assert!(!results[1].passed);
        assert!(!results[1].actual.matched);
    }

    #[test]
    fn multi_document_fixtures() {
        let yaml = format!("{FIXTURE}\n---\n{FIXTURE}");
        let fixtures = Fixture::from_yaml_multi(&yaml).unwrap();
        assert_eq!(fixtures.len(), 2);
    }

    #[test]
    fn bracket_notation() {
        let marked = format!("p{HIGHLIGHT_BEGIN}od{HIGHLIGHT_END}");
        assert_eq!(bracketed(&marked), "p[od]");
    }
}
