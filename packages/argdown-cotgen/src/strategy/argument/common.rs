//! Shared utilities for the argument strategies: building the fully-populated final view and
//! rendering an ordered list of views into numbered steps.

use crate::serializer::serialize_argument;
use crate::strategy::phrases::argument_explanation;
use crate::strategy::{dedup_consecutive_stages, number_steps, Step};
use crate::tree::{ArgumentDoc, Statement};
use crate::view::StatementView;
use std::collections::HashMap;

/// The fully-populated view: every statement, inference info, YAML and comments shown.
pub fn final_view(doc: &ArgumentDoc) -> StatementView {
    let mut view = StatementView::new();
    for statement in &doc.statements {
        view.included.insert(statement.number());
    }
    view.show_inference_info = true;
    view
}

/// Renders an ordered list of `(view, stage tag)` pairs into a numbered `Vec<Step>`, deduplicating
/// any consecutive stages whose content turns out identical (e.g. an argument with no inference
/// info to add). The stage tag (`"title"`, `"premises"`, `"expand"`, ...) -- not the view's
/// position in the list -- picks the explanation, since a strategy's expansion rounds can vary in
/// number from one argument to the next.
pub fn render_steps(
    doc: &ArgumentDoc,
    strategy_name: &'static str,
    views: Vec<(StatementView, &'static str)>,
) -> Vec<Step> {
    let mut stages: Vec<(String, String)> = views
        .iter()
        .map(|(view, stage)| {
            (
                serialize_argument(doc, view),
                argument_explanation(strategy_name, stage),
            )
        })
        .collect();
    dedup_consecutive_stages(&mut stages);
    number_steps(stages)
}

/// For every conclusion (intermediate or final), the statement numbers its inference directly
/// draws on. When the inference carries explicit `from:` YAML, that list is authoritative.
/// Otherwise, falls back to every premise in the contiguous run since the previous conclusion (or
/// the start of the document), which is the only segmentation implicit in a plain separator-based
/// chain with no structured data.
pub fn default_premises_of(doc: &ArgumentDoc) -> HashMap<usize, Vec<usize>> {
    let mut out = HashMap::new();
    let mut segment: Vec<usize> = Vec::new();
    for statement in &doc.statements {
        match statement {
            Statement::Premise { number, .. } => segment.push(*number),
            Statement::IntermediateConclusion { number, inference, .. }
            | Statement::FinalConclusion { number, inference, .. } => {
                let from = inference
                    .structured
                    .as_ref()
                    .filter(|s| !s.from.is_empty())
                    .map(|s| s.from.iter().map(|n| *n as usize).collect())
                    .unwrap_or_else(|| segment.clone());
                out.insert(*number, from);
                segment.clear();
            }
        }
    }
    out
}
