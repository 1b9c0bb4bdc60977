//! Adds `EmailSafetyWidget` right after the analysis result, ahead of the
//! feedback widget.

use super::{BlockRewrite, ImportInserter, Step, SAFETY_WIDGET_PATH};
use crate::error::SpliceResult;

const FEEDBACK_IMPORT: &str = "import '../widgets/email_feedback_widget.dart';";

const ANALYSIS_PATTERN: &str = r"(if \(_scanResult != null\) \.\.\.\[\s+_buildAnalysisResult\(\),)";

const SAFETY_TEMPLATE: &str = "${1}
              EmailSafetyWidget(
                emailSubject: widget.email.subject,
                emailBody: widget.email.body ?? '',
              ),";

pub const SAFETY_MARKER: &str = "EmailSafetyWidget(";

pub fn steps() -> SpliceResult<Vec<Box<dyn Step>>> {
    let steps: Vec<Box<dyn Step>> = vec![
        Box::new(ImportInserter::new(FEEDBACK_IMPORT, SAFETY_WIDGET_PATH)),
        Box::new(BlockRewrite::new(
            "add EmailSafetyWidget after analysis result",
            ANALYSIS_PATTERN,
            SAFETY_TEMPLATE,
            SAFETY_MARKER,
        )?),
    ];

    Ok(steps)
}
