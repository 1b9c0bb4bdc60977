//! Nests `EmailFeedbackWidget` inside the `_scanResult != null` conditional,
//! so feedback only shows once there is an analysis result.

use super::{BlockRewrite, ImportInserter, Step, FEEDBACK_WIDGET_PATH, LOCALIZATION_IMPORT};
use crate::error::SpliceResult;

const BODY_PATTERN: &str = concat!(
    r"body: SingleChildScrollView\(\s*child: Column\(\s*children: \[\s*",
    r"if \(_scanResult != null\) _buildAnalysisResult\(\),\s*",
    r"_buildEmailContent\(\),",
);

const BODY_TEMPLATE: &str = "body: SingleChildScrollView(
        child: Column(
          children: [
            if (_scanResult != null) ...[
              _buildAnalysisResult(),
              EmailFeedbackWidget(
                emailId: widget.email.id,
                onReanalyze: _analyzeEmail,
              ),
            ],
            _buildEmailContent(),";

/// Present once the analysis result has been turned into a spread block
pub const SPREAD_MARKER: &str = "if (_scanResult != null) ...[";

pub fn steps() -> SpliceResult<Vec<Box<dyn Step>>> {
    let steps: Vec<Box<dyn Step>> = vec![
        Box::new(ImportInserter::new(LOCALIZATION_IMPORT, FEEDBACK_WIDGET_PATH)),
        Box::new(BlockRewrite::new(
            "nest EmailFeedbackWidget under analysis result",
            BODY_PATTERN,
            BODY_TEMPLATE,
            SPREAD_MARKER,
        )?),
    ];

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{Patch, PatchKind, StepOutcome};
    use pretty_assertions::assert_eq;

    const SCREEN: &str = "import 'package:flutter/material.dart';
import '../localization/app_localizations.dart';

class _EmailDetailScreenState extends State<EmailDetailScreen> {
  @override
  Widget build(BuildContext context) {
    return Scaffold(
      body: SingleChildScrollView(
        child: Column(
          children: [
            if (_scanResult != null) _buildAnalysisResult(),
            _buildEmailContent(),
          ],
        ),
      ),
    );
  }
}
";

    #[test]
    fn test_nests_feedback_inside_conditional() -> SpliceResult<()> {
        let report = Patch::new(PatchKind::Feedback)?.apply(SCREEN);

        let outcomes: Vec<_> = report.steps.iter().map(|s| s.outcome).collect();
        assert_eq!(outcomes, vec![StepOutcome::Inserted, StepOutcome::Rewritten]);

        let expected = "import 'package:flutter/material.dart';
import '../localization/app_localizations.dart';
import '../widgets/email_feedback_widget.dart';

class _EmailDetailScreenState extends State<EmailDetailScreen> {
  @override
  Widget build(BuildContext context) {
    return Scaffold(
      body: SingleChildScrollView(
        child: Column(
          children: [
            if (_scanResult != null) ...[
              _buildAnalysisResult(),
              EmailFeedbackWidget(
                emailId: widget.email.id,
                onReanalyze: _analyzeEmail,
              ),
            ],
            _buildEmailContent(),
          ],
        ),
      ),
    );
  }
}
";
        assert_eq!(report.content, expected);
        Ok(())
    }

    #[test]
    fn test_second_run_changes_nothing() -> SpliceResult<()> {
        let patch = Patch::new(PatchKind::Feedback)?;
        let first = patch.apply(SCREEN);
        let second = patch.apply(&first.content);

        assert!(!second.changed());
        assert!(patch.is_applied(&second.content));
        assert!(second
            .steps
            .iter()
            .all(|s| s.outcome == StepOutcome::AlreadyApplied));
        Ok(())
    }

    #[test]
    fn test_compact_whitespace_still_matches() -> SpliceResult<()> {
        let compact = "body: SingleChildScrollView(child: Column(children: [if (_scanResult != null) _buildAnalysisResult(), _buildEmailContent(),";
        let report = Patch::new(PatchKind::Feedback)?.apply(compact);

        assert_eq!(report.steps[1].outcome, StepOutcome::Rewritten);
        assert!(report.content.contains(SPREAD_MARKER));
        Ok(())
    }
}
