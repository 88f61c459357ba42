use formative::domain::{Assessment, AssessmentStatus, OutputFormat, QuestionFormat};

fn assessment(output_format: OutputFormat, consolidated: bool) -> Assessment {
    Assessment::new(
        "Midterm".to_string(),
        "Midterm Batch".to_string(),
        "MIDTERMB_0001".to_string(),
        QuestionFormat::TrueFalse,
        5,
        output_format,
        "Physics Fundamentals".to_string(),
        vec!["Mechanics".to_string()],
        consolidated,
        25,
    )
}

#[test]
fn given_new_assessment_when_created_then_starts_processing_without_artifact() {
    let assessment = assessment(OutputFormat::Gift, false);

    assert_eq!(assessment.status, AssessmentStatus::Processing);
    assert_eq!(assessment.progress, 25);
    assert!(assessment.completed_at.is_none());
    assert!(assessment.download_url().is_none());
}

#[test]
fn given_full_initial_progress_when_created_then_clamps_below_completed() {
    let assessment = Assessment::new(
        "Midterm".to_string(),
        "Midterm Batch".to_string(),
        "MIDTERMB_0001".to_string(),
        QuestionFormat::TrueFalse,
        5,
        OutputFormat::Gift,
        "Physics Fundamentals".to_string(),
        vec!["Mechanics".to_string()],
        false,
        100,
    );

    assert_eq!(assessment.progress, 99);
    assert_eq!(assessment.status, AssessmentStatus::Processing);
}

#[test]
fn given_processing_assessment_when_completed_then_carries_artifact() {
    let mut assessment = assessment(OutputFormat::Csv, false);

    assessment.complete("/downloads/abc.csv".to_string());

    assert_eq!(assessment.status, AssessmentStatus::Completed);
    assert_eq!(assessment.progress, 100);
    assert!(assessment.completed_at.is_some());
    assert_eq!(assessment.download_url(), Some("/downloads/abc.csv"));
}

#[test]
fn given_processing_assessment_when_failed_then_has_no_artifact() {
    let mut assessment = assessment(OutputFormat::Gift, false);

    assessment.fail("generator crashed".to_string());

    assert_eq!(assessment.status, AssessmentStatus::Failed);
    assert!(assessment.download_url().is_none());
    assert!(assessment.completed_at.is_none());
    assert_eq!(assessment.error_message.as_deref(), Some("generator crashed"));
}

#[test]
fn given_consolidated_output_when_resolving_extension_then_uses_zip() {
    assert_eq!(assessment(OutputFormat::Gift, true).artifact_extension(), "zip");
}

#[test]
fn given_plain_output_when_resolving_extension_then_follows_format() {
    assert_eq!(assessment(OutputFormat::Gift, false).artifact_extension(), "gift");
    assert_eq!(assessment(OutputFormat::Csv, false).artifact_extension(), "csv");
}
