//! Parsing and rendering of the inline YAML blocks attached to propositions
//! (`{certainty: 0.9, tags: [a, b]}`), and of the structured `{uses: [...], with: ..., from: [...]}`
//! data attached to inferences.

use crate::error::ParseError;
use crate::tree::{InferenceYaml, Yaml};
use indexmap::IndexMap;

/// Parses a `{...}` block (braces included) into an ordered mapping, preserving the key order as
/// written so re-serializing reproduces the original text.
pub fn parse_inline_yaml(text: &str, line: usize) -> Result<Yaml, ParseError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|source| ParseError::YamlParseFailed { line, source })?;
    let mapping = value.as_mapping().ok_or_else(|| ParseError::Malformed {
        line,
        reason: format!("expected a flow mapping, found: {text}"),
    })?;

    let mut out = IndexMap::new();
    for (k, v) in mapping {
        let key = k.as_str().ok_or_else(|| ParseError::Malformed {
            line,
            reason: "yaml mapping keys must be strings".to_string(),
        })?;
        out.insert(key.to_string(), v.clone());
    }
    Ok(out)
}

/// Renders an ordered mapping back into its flow-style `{k: v, ...}` textual form, preserving key
/// order literally.
pub fn render_inline_yaml(yaml: &Yaml) -> String {
    let mut parts = Vec::with_capacity(yaml.len());
    for (k, v) in yaml {
        parts.push(format!("{k}: {}", render_scalar(v)));
    }
    format!("{{{}}}", parts.join(", "))
}

fn render_scalar(v: &serde_yaml::Value) -> String {
    match v {
        serde_yaml::Value::String(s) => render_string_scalar(s),
        serde_yaml::Value::Sequence(seq) => {
            let items: Vec<String> = seq.iter().map(render_scalar).collect();
            format!("[{}]", items.join(", "))
        }
        serde_yaml::Value::Mapping(map) => {
            let parts: Vec<String> = map
                .iter()
                .filter_map(|(k, v)| k.as_str().map(|k| format!("{k}: {}", render_scalar(v))))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
        other => {
            // Plain scalars (numbers, bools) round-trip fine through serde_yaml's own
            // rendering; we just need to strip the trailing newline it always appends.
            serde_yaml::to_string(other)
                .unwrap_or_default()
                .trim_end()
                .to_string()
        }
    }
}

/// Renders a string scalar, quoting it if a bare plain scalar wouldn't parse back to the same
/// string (e.g. it's empty, has leading/trailing whitespace, contains flow-mapping punctuation,
/// or reads as a number/bool/null). Used only as a fallback when no original `{...}` substring
/// was captured at parse time -- see [`crate::serializer`], which prefers that raw text whenever
/// it's available.
fn render_string_scalar(s: &str) -> String {
    if needs_quoting(s) {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        s.to_string()
    }
}

fn needs_quoting(s: &str) -> bool {
    if s.is_empty() || s.trim() != s {
        return true;
    }
    if s.parse::<f64>().is_ok() {
        return true;
    }
    if matches!(
        s,
        "true" | "false" | "True" | "False" | "null" | "Null" | "~" | "yes" | "no" | "Yes" | "No"
    ) {
        return true;
    }
    s.chars().any(|c| {
        matches!(
            c,
            ':' | ',' | '{' | '}' | '[' | ']' | '#' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%' | '@' | '`'
        )
    })
}

/// Interprets an already-parsed inline YAML mapping as structured inference data
/// (`{uses: [...], with: ..., from: [...]}`), if it has that shape.
pub fn as_inference_yaml(yaml: &Yaml) -> Option<InferenceYaml> {
    if yaml.is_empty() {
        return None;
    }
    let to_ints = |v: &serde_yaml::Value| -> Vec<i64> {
        v.as_sequence()
            .map(|seq| seq.iter().filter_map(|x| x.as_i64()).collect())
            .unwrap_or_default()
    };
    Some(InferenceYaml {
        uses: yaml.get("uses").map(to_ints).unwrap_or_default(),
        with: yaml
            .get("with")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()),
        from: yaml.get("from").map(to_ints).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_word_round_trips_unquoted() {
        let mut yaml = Yaml::new();
        yaml.insert("tag".to_string(), serde_yaml::Value::String("important".to_string()));
        assert_eq!(render_inline_yaml(&yaml), "{tag: important}");
    }

    #[test]
    fn string_needing_quotes_is_requoted() {
        let mut yaml = Yaml::new();
        yaml.insert("tag".to_string(), serde_yaml::Value::String("foo, bar".to_string()));
        assert_eq!(render_inline_yaml(&yaml), "{tag: \"foo, bar\"}");
    }

    #[test]
    fn sequence_and_mapping_values_render_in_flow_style() {
        let parsed = parse_inline_yaml("{from: [1, 2], with: {a: 1}}", 1).unwrap();
        assert_eq!(render_inline_yaml(&parsed), "{from: [1, 2], with: {a: 1}}");
    }
}
