use super::strategy::GenerationStrategy;
use super::RecordType;

/// Line-oriented text buffer for generated Go
#[derive(Debug, Default)]
pub struct Emitter {
    buf: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, s: impl AsRef<str>) {
        self.buf.push_str(s.as_ref());
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Pick the receiver identifier for a type
///
/// Lowercased first letter of the type name, the Go convention. Falls back to
/// `r` then `recv` when that is not a plain letter (`_hidden`, non-ASCII case
/// folding) or is shadowed by a type parameter.
pub fn receiver_name(record: &RecordType) -> String {
    let letter: Option<String> = record
        .name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .filter(|s: &String| s.chars().count() == 1 && s.chars().all(char::is_alphabetic));

    letter
        .into_iter()
        .chain(["r".to_string(), "recv".to_string()])
        .find(|candidate| !record.type_params.iter().any(|p| p == candidate))
        .unwrap_or_else(|| "recv_".to_string())
}

/// `*Name` or `*Name[K, V]` for generic records
pub fn receiver_type(record: &RecordType) -> String {
    if record.type_params.is_empty() {
        format!("*{}", record.name)
    } else {
        format!("*{}[{}]", record.name, record.type_params.join(", "))
    }
}

pub fn write_file_header(out: &mut Emitter, package: &str, strategy: GenerationStrategy) {
    out.line(format!("package {}", package));
    out.blank();
    out.line("import (");
    out.line(format!("\t{}", strategy.required_import().render()));
    out.line(")");
}

pub fn write_method(out: &mut Emitter, record: &RecordType, strategy: GenerationStrategy) {
    let recv = receiver_name(record);
    out.line(strategy.doc_comment(&recv));
    out.line(format!(
        "func ({} {}) String() string {{",
        recv,
        receiver_type(record)
    ));
    strategy.write_body(out, &recv);
    out.line("}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, params: &[&str]) -> RecordType {
        RecordType::new(name, params.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_receiver_is_lowercased_first_letter() {
        assert_eq!(receiver_name(&record("MyStruct", &[])), "m");
        assert_eq!(receiver_name(&record("user", &[])), "u");
    }

    #[test]
    fn test_receiver_fallbacks() {
        assert_eq!(receiver_name(&record("_hidden", &[])), "r");
        assert_eq!(
            receiver_name(&record("Box", &["b"])),
            "r",
            "Type parameter b would shadow the receiver"
        );
        assert_eq!(receiver_name(&record("Rack", &["r"])), "recv");
    }

    #[test]
    fn test_receiver_type_with_params() {
        assert_eq!(receiver_type(&record("A", &[])), "*A");
        assert_eq!(receiver_type(&record("Pair", &["K", "V"])), "*Pair[K, V]");
    }

    #[test]
    fn test_write_method_shape() {
        let mut out = Emitter::new();
        write_method(&mut out, &record("Pair", &["K", "V"]), GenerationStrategy::FormattedDump);
        let text = out.into_string();
        assert!(text.starts_with("// String returns"));
        assert!(text.contains("func (p *Pair[K, V]) String() string {\n"));
        assert!(text.ends_with("}\n"));
    }
}
