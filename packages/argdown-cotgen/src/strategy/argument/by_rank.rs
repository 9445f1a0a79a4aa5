use super::common::{default_premises_of, render_steps};
use crate::error::StrategyError;
use crate::strategy::phrases::argument_premises_pending;
use crate::strategy::{Step, Strategy};
use crate::tree::{Statement, Tree};
use crate::view::StatementView;
use std::collections::HashSet;

/// Builds the argument from its final conclusion outward: first the conclusion's direct
/// premises, then, for each of those that is itself an intermediate conclusion, the premises of
/// *its* inference, and so on until every statement is reachable from the final conclusion.
pub struct ByRank;

impl Strategy for ByRank {
    fn name(&self) -> &'static str {
        "by_rank"
    }

    fn generate(&self, tree: &Tree) -> Result<Vec<Step>, StrategyError> {
        let doc = match tree {
            Tree::Argument(d) => d,
            _ => return Err(StrategyError::WrongTreeKind { strategy: self.name() }),
        };

        let final_number = doc
            .statements
            .iter()
            .find(|s| matches!(s, Statement::FinalConclusion { .. }))
            .map(Statement::number);

        let mut base = StatementView::new();
        base.suppress_yaml = true;
        base.suppress_comments = true;

        let mut views: Vec<(StatementView, &'static str)> = vec![(base.clone(), "title")];

        let mut stage2 = base.clone();
        if let Some(n) = final_number {
            stage2.included.insert(n);
        }
        stage2.placeholder_comment = Some(argument_premises_pending().to_string());
        views.push((stage2, "scaffold"));

        let premises_of = default_premises_of(doc);
        let by_number: std::collections::HashMap<usize, &Statement> = doc
            .statements
            .iter()
            .map(|s| (s.number(), s))
            .collect();

        let total = doc.statements.len();
        let mut included: HashSet<usize> = HashSet::new();
        if let Some(n) = final_number {
            included.insert(n);
        }
        let mut frontier: Vec<usize> = final_number.into_iter().collect();
        let mut first_round = true;

        while !frontier.is_empty() {
            let mut next_frontier = Vec::new();
            for &n in &frontier {
                for &p in premises_of.get(&n).map(Vec::as_slice).unwrap_or(&[]) {
                    if included.insert(p) {
                        next_frontier.push(p);
                    }
                }
            }
            if next_frontier.is_empty() {
                break;
            }
            let mut view = base.clone();
            view.included = included.clone();
            views.push((view, if first_round { "premises" } else { "expand" }));
            first_round = false;
            frontier = next_frontier
                .into_iter()
                .filter(|n| {
                    matches!(
                        by_number.get(n),
                        Some(Statement::IntermediateConclusion { .. })
                    )
                })
                .collect();
        }

        // The expansion loop only reaches statements reachable from the final conclusion
        // through `from:`-derived premise links; anything it already covers doesn't need a
        // redundant supplemental step.
        if included.len() < total {
            let mut everything = base.clone();
            for s in &doc.statements {
                everything.included.insert(s.number());
            }
            views.push((everything, "expand"));
        }

        let mut with_inference = base.clone();
        for s in &doc.statements {
            with_inference.included.insert(s.number());
        }
        with_inference.show_inference_info = true;

        let mut with_yaml = with_inference.clone();
        with_yaml.suppress_yaml = false;

        let mut with_comments = with_yaml.clone();
        with_comments.suppress_comments = false;

        views.push((with_inference, "inference"));
        views.push((with_yaml, "yaml"));
        views.push((with_comments, "comments"));

        Ok(render_steps(doc, self.name(), views))
    }
}
