pub mod block;
pub mod feedback;
pub mod import;
pub mod safety;
pub mod threats;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::SpliceResult;
pub use block::BlockRewrite;
pub use import::ImportInserter;
pub use threats::ThreatsRewrite;

/// The three edit passes shipped with the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchKind {
    /// Nest the feedback widget inside the analysis-result conditional
    Feedback,
    /// Add the safety widget after the analysis result
    Safety,
    /// Replace the detected-threats section with the safety widget
    Threats,
}

impl PatchKind {
    pub const ALL: [PatchKind; 3] = [PatchKind::Feedback, PatchKind::Safety, PatchKind::Threats];

    pub fn name(&self) -> &'static str {
        match self {
            PatchKind::Feedback => "feedback",
            PatchKind::Safety => "safety",
            PatchKind::Threats => "threats",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PatchKind::Feedback => "Move EmailFeedbackWidget inside the analysis result conditional",
            PatchKind::Safety => "Add EmailSafetyWidget after the analysis result",
            PatchKind::Threats => "Replace the Detected Threats section with EmailSafetyWidget",
        }
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatchKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown patch '{}' (expected one of: feedback, safety, threats)",
                    s
                )
            })
    }
}

/// What a single step did to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new line was inserted
    Inserted,
    /// The primary pattern matched and was replaced
    Rewritten,
    /// The primary pattern missed and the literal fallback ran instead
    FallbackApplied,
    /// The guard found the transformed shape already in place
    AlreadyApplied,
    /// The anchor line to insert after was not found
    AnchorMissing,
    /// Nothing matched the pattern (or its fallback)
    PatternMissing,
}

impl StepOutcome {
    pub fn changed(&self) -> bool {
        matches!(
            self,
            StepOutcome::Inserted | StepOutcome::Rewritten | StepOutcome::FallbackApplied
        )
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StepOutcome::Inserted => "inserted",
            StepOutcome::Rewritten => "rewritten",
            StepOutcome::FallbackApplied => "applied with fallback",
            StepOutcome::AlreadyApplied => "already applied",
            StepOutcome::AnchorMissing => "anchor not found",
            StepOutcome::PatternMissing => "pattern not found",
        };
        f.write_str(text)
    }
}

/// One guarded edit against the in-memory buffer
pub trait Step {
    /// Human-readable label used in status output
    fn label(&self) -> &str;

    /// Whether the transformed shape is already present
    fn is_applied(&self, content: &str) -> bool;

    /// Mutate `content` in place. Never fails on a missing pattern.
    fn apply(&self, content: &mut String) -> StepOutcome;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub label: String,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone)]
pub struct PatchReport {
    pub kind: PatchKind,
    pub steps: Vec<StepReport>,
    pub original: String,
    pub content: String,
}

impl PatchReport {
    pub fn changed(&self) -> bool {
        self.original != self.content
    }
}

/// An ordered list of steps run against one buffer
pub struct Patch {
    kind: PatchKind,
    steps: Vec<Box<dyn Step>>,
}

impl Patch {
    pub fn new(kind: PatchKind) -> SpliceResult<Self> {
        let steps = match kind {
            PatchKind::Feedback => feedback::steps()?,
            PatchKind::Safety => safety::steps()?,
            PatchKind::Threats => threats::steps()?,
        };

        Ok(Self { kind, steps })
    }

    pub fn kind(&self) -> PatchKind {
        self.kind
    }

    pub fn steps(&self) -> &[Box<dyn Step>] {
        &self.steps
    }

    /// Run every step in order against a copy of `content`.
    ///
    /// Steps always see `\n` line endings; a CRLF file gets CRLF back.
    pub fn apply(&self, content: &str) -> PatchReport {
        let crlf = content.contains("\r\n");
        let mut buffer = if crlf {
            content.replace("\r\n", "\n")
        } else {
            content.to_string()
        };
        let mut steps = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let outcome = step.apply(&mut buffer);
            debug!(patch = %self.kind, step = step.label(), %outcome, "step finished");
            steps.push(StepReport {
                label: step.label().to_string(),
                outcome,
            });
        }

        let patched = if !steps.iter().any(|s: &StepReport| s.outcome.changed()) {
            content.to_string()
        } else if crlf {
            buffer.replace('\n', "\r\n")
        } else {
            buffer
        };

        PatchReport {
            kind: self.kind,
            steps,
            original: content.to_string(),
            content: patched,
        }
    }

    /// True when every step finds its transformed shape in `content`
    pub fn is_applied(&self, content: &str) -> bool {
        self.steps.iter().all(|step| step.is_applied(content))
    }
}

/// Import line every screen already carries, used as the first anchor
pub(crate) const LOCALIZATION_IMPORT: &str = "import '../localization/app_localizations.dart';";

pub(crate) const FEEDBACK_WIDGET_PATH: &str = "../widgets/email_feedback_widget.dart";

pub(crate) const SAFETY_WIDGET_PATH: &str = "../widgets/email_safety_widget.dart";
