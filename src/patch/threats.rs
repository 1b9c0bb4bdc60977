//! Replaces the "Detected Threats" chip list with `EmailSafetyWidget`.
//!
//! The primary tier rewrites the whole section by regex. When the section has
//! drifted from that shape, the fallback disables it behind `if (false)` and
//! inserts the safety widget as its preceding sibling.

use tracing::debug;

use super::{BlockRewrite, Step, StepOutcome};
use crate::error::SpliceResult;

const SECTION_PATTERN: &str = concat!(
    r"if \(_scanResult!\.detectedThreats\.isNotEmpty\) \.\.\.\[",
    "\n",
    r"\s+const SizedBox\(height: 16\),",
    "\n",
    r"\s+Text\(",
    "\n",
    r"\s+l\.t\('email_detail_detected_threats'\),",
    "\n",
    r"\s+style: const TextStyle\(",
    "\n",
    r"\s+fontSize: 15,",
    "\n",
    r"\s+fontWeight: FontWeight\.bold,",
    "\n",
    r"\s+\),",
    "\n",
    r"\s+\),",
    "\n",
    r"\s+const SizedBox\(height: 8\),",
    "\n",
    r"\s+Wrap\(",
    "\n",
    r"\s+spacing: 8,",
    "\n",
    r"\s+runSpacing: 8,",
    "\n",
    r"\s+children: _scanResult!\.detectedThreats\.map\(\(threat\) =>[^}]+\}\.toList\(\),",
    "\n",
    r"\s+\),",
    "\n",
    r"\s+\],",
);

/// Leading comment of the primary rewrite
pub const SECTION_MARKER: &str = "// Safety Check Widget (replaces detected threats)";

const SECTION_TEMPLATE: &str = "// Safety Check Widget (replaces detected threats)
            const SizedBox(height: 16),
            EmailSafetyWidget(
              emailSubject: widget.email.subject,
              emailBody: widget.email.body ?? '',
            ),";

/// Localization key that only the threats section uses
pub const THREATS_KEY: &str = "email_detail_detected_threats";

/// Opening line of the threats section, matched literally by the fallback
pub const THREATS_GUARD: &str = "if (_scanResult!.detectedThreats.isNotEmpty) ...[";

/// Comment the fallback leaves in front of the disabled section
pub const FALLBACK_MARKER: &str = "// Replaced with EmailSafetyWidget";

const DISABLED_GUARD: &str = "// Replaced with EmailSafetyWidget
          if (false) ...[";

const FALLBACK_BLOCK: &str = "// Email Safety Check
          const SizedBox(height: 16),
          EmailSafetyWidget(
            emailSubject: widget.email.subject,
            emailBody: widget.email.body ?? '',
          ),
          // Replaced with EmailSafetyWidget (old threats section below)";

/// Two-tier rewrite of the detected-threats section
pub struct ThreatsRewrite {
    primary: BlockRewrite,
}

impl ThreatsRewrite {
    pub fn new() -> SpliceResult<Self> {
        let primary = BlockRewrite::new(
            "replace Detected Threats with EmailSafetyWidget",
            SECTION_PATTERN,
            SECTION_TEMPLATE,
            SECTION_MARKER,
        )?;

        Ok(Self { primary })
    }

    fn fallback_applies(content: &str) -> bool {
        content.contains(THREATS_KEY) && content.contains(THREATS_GUARD)
    }

    /// Disable the old section, then put the safety widget in front of it
    fn apply_fallback(content: &mut String) {
        let disabled = content.replace(THREATS_GUARD, DISABLED_GUARD);
        *content = disabled.replace(FALLBACK_MARKER, FALLBACK_BLOCK);
    }
}

impl Step for ThreatsRewrite {
    fn label(&self) -> &str {
        self.primary.label()
    }

    fn is_applied(&self, content: &str) -> bool {
        content.contains(SECTION_MARKER) || content.contains(FALLBACK_MARKER)
    }

    fn apply(&self, content: &mut String) -> StepOutcome {
        if self.is_applied(content) {
            return StepOutcome::AlreadyApplied;
        }

        if self.primary.rewrite(content) {
            return StepOutcome::Rewritten;
        }

        debug!("threats section pattern not found, trying literal fallback");
        if Self::fallback_applies(content) {
            Self::apply_fallback(content);
            StepOutcome::FallbackApplied
        } else {
            StepOutcome::PatternMissing
        }
    }
}

pub fn steps() -> SpliceResult<Vec<Box<dyn Step>>> {
    let steps: Vec<Box<dyn Step>> = vec![Box::new(ThreatsRewrite::new()?)];

    Ok(steps)
}
