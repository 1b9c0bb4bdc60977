use tracing::debug;

use super::{Step, StepOutcome};

/// Inserts `import '<path>';` on the line after an anchor import
pub struct ImportInserter {
    label: String,
    anchor: &'static str,
    import_path: &'static str,
}

impl ImportInserter {
    pub fn new(anchor: &'static str, import_path: &'static str) -> Self {
        let file_name = import_path.rsplit('/').next().unwrap_or(import_path);

        Self {
            label: format!("import {}", file_name),
            anchor,
            import_path,
        }
    }

    pub fn import_line(&self) -> String {
        format!("import '{}';", self.import_path)
    }
}

impl Step for ImportInserter {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_applied(&self, content: &str) -> bool {
        content.contains(self.import_path)
    }

    fn apply(&self, content: &mut String) -> StepOutcome {
        if self.is_applied(content) {
            return StepOutcome::AlreadyApplied;
        }

        let Some(position) = content.find(self.anchor) else {
            debug!(anchor = self.anchor, "anchor import not found");
            return StepOutcome::AnchorMissing;
        };

        let insert_at = position + self.anchor.len();
        content.insert_str(insert_at, &format!("\n{}", self.import_line()));

        StepOutcome::Inserted
    }
}
