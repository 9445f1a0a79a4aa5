//! The chain-of-thought formatter: wraps an ordered list of [`Step`]s into the final textual
//! trace, a fixed preamble and closing sentence stitched around fenced, versioned code blocks.

use crate::strategy::Step;

const PREAMBLE: &str = "Let me build the Argdown code snippet step by step.";

/// Renders the full trace for a non-empty step list.
pub fn format_trace(steps: &[Step]) -> String {
    let mut out = String::new();
    out.push_str(PREAMBLE);
    out.push_str("\n\n");

    for step in steps {
        out.push_str(&step.explanation);
        out.push_str("\n\n");
        out.push_str("```argdown {version='");
        out.push_str(&step.version);
        out.push_str("'}\n");
        out.push_str(&step.content);
        out.push_str("\n```\n\n");
    }

    let last_version = steps
        .last()
        .map(|s| s.version.as_str())
        .unwrap_or("v1");
    out.push_str(&format!(
        "I've created the Argdown code snippet and may submit version='{last_version}'."
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_preamble_and_closing_sentence() {
        let steps = vec![Step {
            version: "v1".to_string(),
            content: "[Root]: A claim.".to_string(),
            explanation: "Here is the claim.".to_string(),
        }];
        let trace = format_trace(&steps);
        assert!(trace.starts_with(PREAMBLE));
        assert!(trace.contains("```argdown {version='v1'}"));
        assert!(trace.ends_with("may submit version='v1'."));
    }
}
