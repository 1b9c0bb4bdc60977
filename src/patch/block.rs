use regex::Regex;
use tracing::debug;

use super::{Step, StepOutcome};
use crate::error::SpliceResult;

/// Regex rewrite of a multi-line fragment, skipped when `marker` is present.
///
/// Patterns are compiled with dot-matches-newline. The template is expanded
/// with capture groups (`${1}`), so a literal `$` must be written `$$`.
pub struct BlockRewrite {
    label: &'static str,
    pattern: Regex,
    template: &'static str,
    marker: &'static str,
}

impl BlockRewrite {
    pub fn new(
        label: &'static str,
        pattern: &str,
        template: &'static str,
        marker: &'static str,
    ) -> SpliceResult<Self> {
        let pattern = Regex::new(&format!("(?s){}", pattern))?;

        Ok(Self {
            label,
            pattern,
            template,
            marker,
        })
    }

    /// Replace every match, ignoring the marker guard
    pub(crate) fn rewrite(&self, content: &mut String) -> bool {
        if !self.pattern.is_match(content.as_str()) {
            return false;
        }

        let rewritten = self.pattern.replace_all(content.as_str(), self.template).into_owned();
        *content = rewritten;
        true
    }
}

impl Step for BlockRewrite {
    fn label(&self) -> &str {
        self.label
    }

    fn is_applied(&self, content: &str) -> bool {
        content.contains(self.marker)
    }

    fn apply(&self, content: &mut String) -> StepOutcome {
        if self.is_applied(content) {
            debug!(marker = self.marker, "marker present, skipping rewrite");
            return StepOutcome::AlreadyApplied;
        }

        if self.rewrite(content) {
            StepOutcome::Rewritten
        } else {
            StepOutcome::PatternMissing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_rewrite() -> BlockRewrite {
        BlockRewrite::new(
            "wrap",
            r"children: \[\s*item\(\),",
            "children: [\n  ...[\n    item(),\n  ],",
            "...[",
        )
        .unwrap()
    }

    #[test]
    fn test_rewrites_across_lines() {
        let mut content = "children: [\n\n      item(),\n]".to_string();

        assert_eq!(wrap_rewrite().apply(&mut content), StepOutcome::Rewritten);
        assert_eq!(content, "children: [\n  ...[\n    item(),\n  ],\n]");
    }

    #[test]
    fn test_marker_short_circuits() {
        let original = "children: [ item(), ...[] ]";
        let mut content = original.to_string();

        assert_eq!(wrap_rewrite().apply(&mut content), StepOutcome::AlreadyApplied);
        assert_eq!(content, original);
    }

    #[test]
    fn test_missing_pattern_is_reported() {
        let mut content = "children: [ other() ]".to_string();

        assert_eq!(wrap_rewrite().apply(&mut content), StepOutcome::PatternMissing);
        assert_eq!(content, "children: [ other() ]");
    }

    #[test]
    fn test_template_expands_captures() {
        let rewrite = BlockRewrite::new("append", r"(first\(\),)", "${1}\nsecond(),", "second(").unwrap();
        let mut content = "first(),".to_string();

        assert_eq!(rewrite.apply(&mut content), StepOutcome::Rewritten);
        assert_eq!(content, "first(),\nsecond(),");
    }

    #[test]
    fn test_dot_spans_newlines() {
        let rewrite = BlockRewrite::new("span", r"start.+end", "done", "done").unwrap();
        let mut content = "start\nmiddle\nend".to_string();

        assert_eq!(rewrite.apply(&mut content), StepOutcome::Rewritten);
        assert_eq!(content, "done");
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(BlockRewrite::new("bad", r"(unclosed", "", "x").is_err());
    }
}
