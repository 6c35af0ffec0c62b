use super::templates::Emitter;
use crate::error::Error;
use crate::formatter::ImportSpec;
use std::fmt;
use std::str::FromStr;

/// Interchangeable ways of rendering a struct as text
///
/// Every strategy produces a `String() string` method on the pointer receiver;
/// they differ in encoder and output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationStrategy {
    /// `encoding/json`; cycles between instances surface as a marshal error
    ReflectiveMarshal,
    /// `github.com/json-iterator/go` in standard-library compatible mode
    AlternateMarshal,
    /// `fmt.Sprintf("%+v")` field dump, not meant to be parsed back
    FormattedDump,
}

impl GenerationStrategy {
    pub const ALL: [GenerationStrategy; 3] = [
        GenerationStrategy::ReflectiveMarshal,
        GenerationStrategy::AlternateMarshal,
        GenerationStrategy::FormattedDump,
    ];

    /// Value accepted by `--method`
    pub fn identifier(&self) -> &'static str {
        match self {
            GenerationStrategy::ReflectiveMarshal => "json",
            GenerationStrategy::AlternateMarshal => "jsoniter",
            GenerationStrategy::FormattedDump => "fmt",
        }
    }

    /// Import the generated bodies depend on
    pub fn required_import(&self) -> ImportSpec {
        match self {
            GenerationStrategy::ReflectiveMarshal => ImportSpec::new("encoding/json"),
            GenerationStrategy::AlternateMarshal => {
                ImportSpec::aliased("jsoniter", "github.com/json-iterator/go")
            }
            GenerationStrategy::FormattedDump => ImportSpec::new("fmt"),
        }
    }

    pub(super) fn doc_comment(&self, recv: &str) -> String {
        match self {
            GenerationStrategy::ReflectiveMarshal => {
                format!("// String returns the JSON encoding of {}.", recv)
            }
            GenerationStrategy::AlternateMarshal => {
                format!("// String returns the JSON encoding of {}, produced by jsoniter.", recv)
            }
            GenerationStrategy::FormattedDump => {
                format!("// String returns a field-by-field dump of {}.", recv)
            }
        }
    }

    pub(super) fn write_body(&self, out: &mut Emitter, recv: &str) {
        match self {
            GenerationStrategy::ReflectiveMarshal => {
                write_marshal_body(out, &format!("json.Marshal({})", recv))
            }
            GenerationStrategy::AlternateMarshal => write_marshal_body(
                out,
                &format!("jsoniter.ConfigCompatibleWithStandardLibrary.Marshal({})", recv),
            ),
            GenerationStrategy::FormattedDump => {
                // *recv has a value method set, so %+v cannot call back into String
                out.line(format!("\tif {} == nil {{", recv));
                out.line("\t\treturn \"<nil>\"");
                out.line("\t}");
                out.line(format!("\treturn fmt.Sprintf(\"%+v\", *{})", recv));
            }
        }
    }
}

fn write_marshal_body(out: &mut Emitter, marshal_call: &str) {
    out.line(format!("\tdata, err := {}", marshal_call));
    out.line("\tif err != nil {");
    out.line("\t\treturn \"!ERROR(\" + err.Error() + \")\"");
    out.line("\t}");
    out.line("\treturn string(data)");
}

impl FromStr for GenerationStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenerationStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.identifier() == s)
            .ok_or_else(|| Error::UnsupportedStrategy(s.to_string()))
    }
}

impl fmt::Display for GenerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
