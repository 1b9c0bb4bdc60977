use pretty_assertions::assert_eq;
use screen_splice::{PatchKind, Splicer, StepOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/email_detail_screen.dart");

fn setup() -> anyhow::Result<(TempDir, Splicer, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let (splicer, _) = Splicer::init(temp_dir.path())?;

    let target = splicer.target(None);
    fs::create_dir_all(target.parent().unwrap())?;
    fs::write(&target, FIXTURE)?;

    Ok((temp_dir, splicer, target))
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_feedback_nests_widget_in_conditional() -> anyhow::Result<()> {
    let (_temp_dir, splicer, target) = setup()?;

    let report = splicer.apply(PatchKind::Feedback, &target)?;
    assert!(report.changed());

    let content = read(&target);
    assert!(content.contains(
        "import '../localization/app_localizations.dart';\nimport '../widgets/email_feedback_widget.dart';\n"
    ));
    assert!(content.contains(
        "            if (_scanResult != null) ...[
              _buildAnalysisResult(),
              EmailFeedbackWidget(
                emailId: widget.email.id,
                onReanalyze: _analyzeEmail,
              ),
            ],
            _buildEmailContent(),
          ],"
    ));
    assert!(!content.contains("if (_scanResult != null) _buildAnalysisResult(),"));

    Ok(())
}

#[test]
fn test_all_patches_in_sequence() -> anyhow::Result<()> {
    let (_temp_dir, splicer, target) = setup()?;

    splicer.apply(PatchKind::Feedback, &target)?;
    let safety = splicer.apply(PatchKind::Safety, &target)?;
    let threats = splicer.apply(PatchKind::Threats, &target)?;

    assert_eq!(safety.steps[1].outcome, StepOutcome::Rewritten);
    assert_eq!(threats.steps.len(), 1);
    assert_eq!(threats.steps[0].outcome, StepOutcome::Rewritten);

    let content = read(&target);
    assert_eq!(content.matches("import '../widgets/email_safety_widget.dart';").count(), 1);
    assert_eq!(content.matches("EmailSafetyWidget(").count(), 2);
    assert!(content.contains("// Safety Check Widget (replaces detected threats)"));
    assert!(!content.contains("email_detail_detected_threats"));

    let status = splicer.status(&target)?;
    assert!(status.iter().all(|(_, applied)| *applied));

    Ok(())
}

#[test]
fn test_every_patch_is_idempotent() -> anyhow::Result<()> {
    for kind in PatchKind::ALL {
        let (_temp_dir, splicer, target) = setup()?;

        splicer.apply(kind, &target)?;
        let after_first = read(&target);

        let second = splicer.apply(kind, &target)?;
        assert!(!second.changed(), "{} changed content on second run", kind);
        assert_eq!(read(&target), after_first);
    }

    Ok(())
}

#[test]
fn test_preview_leaves_file_alone() -> anyhow::Result<()> {
    let (_temp_dir, splicer, target) = setup()?;

    let report = splicer.preview(PatchKind::Threats, &target)?;

    assert!(report.changed());
    assert_eq!(report.original, FIXTURE);
    assert_eq!(read(&target), FIXTURE);

    Ok(())
}

#[test]
fn test_threats_status_without_safety_import() -> anyhow::Result<()> {
    let (_temp_dir, splicer, target) = setup()?;

    splicer.apply(PatchKind::Threats, &target)?;

    let content = read(&target);
    assert!(!content.contains("email_safety_widget.dart"));

    let status = splicer.status(&target)?;
    assert!(status.contains(&(PatchKind::Threats, true)));
    assert!(status.contains(&(PatchKind::Safety, false)));

    Ok(())
}

#[test]
fn test_crlf_fixture_takes_primary_tier() -> anyhow::Result<()> {
    let (_temp_dir, splicer, target) = setup()?;
    fs::write(&target, FIXTURE.replace('\n', "\r\n"))?;

    let report = splicer.apply(PatchKind::Threats, &target)?;

    assert_eq!(report.steps[0].outcome, StepOutcome::Rewritten);
    let content = read(&target);
    assert!(!content.contains("if (false)"));
    assert_eq!(content.matches('\n').count(), content.matches("\r\n").count());

    Ok(())
}

#[test]
fn test_init_reports_existing_config() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let (_, created) = Splicer::init(temp_dir.path())?;
    assert!(created);

    let (_, created) = Splicer::init(temp_dir.path())?;
    assert!(!created);

    Ok(())
}

#[test]
fn test_status_before_any_patch() -> anyhow::Result<()> {
    let (_temp_dir, splicer, target) = setup()?;

    let status = splicer.status(&target)?;

    assert_eq!(status.len(), 3);
    assert!(status.iter().all(|(_, applied)| !applied));

    Ok(())
}
