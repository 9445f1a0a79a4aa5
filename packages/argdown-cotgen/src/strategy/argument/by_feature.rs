use super::common::render_steps;
use crate::error::StrategyError;
use crate::strategy::phrases::argument_premises_pending;
use crate::strategy::{Step, Strategy};
use crate::tree::{ArgumentDoc, Statement, Tree};
use crate::view::StatementView;

/// Builds the argument up feature by feature: title, then a final-conclusion scaffold, then all
/// premises as a flat list, then intermediate conclusions, then inference info, then YAML, then
/// comments.
///
/// With `defer_title` set, the title+gist preamble is held back instead of shown first: every
/// other feature appears before it, and it's added in only on the final step alongside comments.
pub struct ByFeature {
    pub defer_title: bool,
}

impl Strategy for ByFeature {
    fn name(&self) -> &'static str {
        if self.defer_title {
            "by_feature_title_last"
        } else {
            "by_feature"
        }
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
        base.suppress_title = self.defer_title;

        let mut views: Vec<(StatementView, &'static str)> = Vec::new();

        if !self.defer_title {
            // 1. title + gist only.
            views.push((base.clone(), "title"));
        }

        // scaffold: final conclusion with a placeholder premise region.
        let mut scaffold = base.clone();
        if let Some(n) = final_number {
            scaffold.included.insert(n);
        }
        scaffold.placeholder_comment = Some(argument_premises_pending().to_string());
        views.push((scaffold, "scaffold"));

        // all premises, flat, above a single separator, then the final conclusion.
        let mut premises = base.clone();
        for s in &doc.statements {
            if matches!(s, Statement::Premise { .. }) {
                premises.included.insert(s.number());
            }
        }
        if let Some(n) = final_number {
            premises.included.insert(n);
        }
        views.push((premises, "premises"));

        // intermediate conclusions inserted, with their own separators.
        let mut intermediate = base.clone();
        for s in &doc.statements {
            intermediate.included.insert(s.number());
        }
        views.push((intermediate.clone(), "intermediate"));

        // inference info populated.
        let mut inference = intermediate;
        inference.show_inference_info = true;
        views.push((inference, "inference"));

        // YAML inline data.
        let mut yaml = views.last().unwrap().0.clone();
        yaml.suppress_yaml = false;
        views.push((yaml, "yaml"));

        // comments and misc; the title-last variant also reveals the title here.
        let mut comments = views.last().unwrap().0.clone();
        comments.suppress_comments = false;
        if self.defer_title {
            comments.suppress_title = false;
            views.push((comments, "comments_and_title"));
        } else {
            views.push((comments, "comments"));
        }

        Ok(render_steps(doc, self.name(), views))
    }
}
