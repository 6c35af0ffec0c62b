//! String method generation
//!
//! A `GenerationJob` names a package, the structs to cover (in declaration
//! order) and the `--method` identifier. `generate` resolves the identifier to a
//! `GenerationStrategy` and emits one `String() string` method per struct.
//! The output is raw text; the formatter normalizes imports and layout.

mod strategy;
mod templates;

pub use strategy::GenerationStrategy;

use crate::error::{Error, Result};
use crate::extractors::Extraction;
use std::str::FromStr;
use tracing::debug;

/// A struct that gets a generated method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    pub name: String,
    pub type_params: Vec<String>,
}

impl RecordType {
    pub fn new(name: impl Into<String>, type_params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            type_params,
        }
    }
}

/// Immutable description of one file's worth of generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationJob {
    package: String,
    records: Vec<RecordType>,
    method: String,
}

impl GenerationJob {
    pub fn new(package: impl Into<String>, records: Vec<RecordType>, method: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            records,
            method: method.into(),
        }
    }

    /// Build a job from the included candidates of an extraction
    pub fn from_extraction(extraction: &Extraction, method: &str) -> Self {
        let records = extraction
            .included()
            .map(|c| RecordType::new(c.name.clone(), c.type_params.clone()))
            .collect();
        Self::new(extraction.package.clone(), records, method)
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn records(&self) -> &[RecordType] {
        &self.records
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}

/// Raw generated text plus the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub text: String,
    pub strategy: GenerationStrategy,
}

/// Generate the String methods for a job
///
/// Fails with `UnsupportedStrategy` for an unknown method and with `EmptyJob`
/// when there is nothing to generate; callers skip empty extractions before
/// getting here.
pub fn generate(job: &GenerationJob) -> Result<GeneratedSource> {
    let strategy = GenerationStrategy::from_str(job.method())?;

    if job.records().is_empty() {
        return Err(Error::EmptyJob(job.package().to_string()));
    }

    let mut out = templates::Emitter::new();
    templates::write_file_header(&mut out, job.package(), strategy);

    for record in job.records() {
        out.blank();
        templates::write_method(&mut out, record, strategy);
    }

    debug!(
        "Generated {} String methods for package {} using {}",
        job.records().len(),
        job.package(),
        strategy
    );

    Ok(GeneratedSource {
        text: out.into_string(),
        strategy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn job(names: &[&str], method: &str) -> GenerationJob {
        let records = names.iter().map(|n| RecordType::new(*n, Vec::new())).collect();
        GenerationJob::new("main", records, method)
    }

    #[test]
    fn test_gen_json() {
        let out = generate(&job(&["MyStruct"], "json")).unwrap();
        let expected = r#"package main

import (
	"encoding/json"
)

// String returns the JSON encoding of m.
func (m *MyStruct) String() string {
	data, err := json.Marshal(m)
	if err != nil {
		return "!ERROR(" + err.Error() + ")"
	}
	return string(data)
}
"#;
        assert_eq!(out.text, expected);
        assert_eq!(out.strategy, GenerationStrategy::ReflectiveMarshal);
    }

    #[test]
    fn test_gen_jsoniter() {
        let out = generate(&job(&["MyStruct"], "jsoniter")).unwrap();
        let expected = r#"package main

import (
	jsoniter "github.com/json-iterator/go"
)

// String returns the JSON encoding of m, produced by jsoniter.
func (m *MyStruct) String() string {
	data, err := jsoniter.ConfigCompatibleWithStandardLibrary.Marshal(m)
	if err != nil {
		return "!ERROR(" + err.Error() + ")"
	}
	return string(data)
}
"#;
        assert_eq!(out.text, expected);
    }

    #[test]
    fn test_gen_fmt() {
        let out = generate(&job(&["MyStruct"], "fmt")).unwrap();
        let expected = r#"package main

import (
	"fmt"
)

// String returns a field-by-field dump of m.
func (m *MyStruct) String() string {
	if m == nil {
		return "<nil>"
	}
	return fmt.Sprintf("%+v", *m)
}
"#;
        assert_eq!(out.text, expected);
    }

    #[test]
    fn test_methods_follow_job_order() {
        let out = generate(&job(&["Zed", "Alpha", "Mid"], "json")).unwrap();
        let positions: Vec<usize> = ["(z *Zed)", "(a *Alpha)", "(m *Mid)"]
            .iter()
            .map(|sig| out.text.find(sig).expect("method should be emitted"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let j = job(&["A", "B"], "fmt");
        assert_eq!(generate(&j).unwrap(), generate(&j).unwrap());
    }

    #[test]
    fn test_unknown_method_fails() {
        let err = generate(&job(&["A"], "xml")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedStrategy(_)), "got {:?}", err);
    }

    #[test]
    fn test_empty_job_is_rejected() {
        let err = generate(&job(&[], "json")).unwrap_err();
        assert!(matches!(err, Error::EmptyJob(ref pkg) if pkg == "main"), "got {:?}", err);
    }

    #[test]
    fn test_empty_method_and_empty_job_still_fails() {
        assert!(generate(&GenerationJob::new("", Vec::new(), "")).is_err());
    }

    #[test]
    fn test_generic_receiver() {
        let records = vec![RecordType::new("Page", vec!["T".to_string()])];
        let out = generate(&GenerationJob::new("models", records, "json")).unwrap();
        assert!(out.text.contains("func (p *Page[T]) String() string {"));
        assert!(out.text.contains("json.Marshal(p)"));
    }
}
