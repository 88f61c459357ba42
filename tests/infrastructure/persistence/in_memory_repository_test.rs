use formative::application::ports::{AssessmentRepository, RepositoryError};
use formative::domain::{
    Assessment, AssessmentId, AssessmentStatus, OutputFormat, QuestionFormat,
};
use formative::infrastructure::persistence::InMemoryAssessmentRepository;

fn assessment(batch_name: &str, sequence: u64) -> Assessment {
    Assessment::new(
        format!("{} assessment", batch_name),
        batch_name.to_string(),
        format!("{}_{:04}", batch_name.to_uppercase(), sequence),
        QuestionFormat::MatchTheFollowing,
        7,
        OutputFormat::Gift,
        "Business Analytics".to_string(),
        vec!["Statistical Methods".to_string()],
        false,
        30,
    )
}

#[tokio::test]
async fn given_created_assessment_when_fetching_by_id_then_returns_it() {
    let repository = InMemoryAssessmentRepository::new();
    let record = assessment("batch", 0);

    repository.create(&record).await.unwrap();

    let fetched = repository.get_by_id(record.id).await.unwrap().unwrap();
    assert_eq!(fetched.batch_code, record.batch_code);
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_returns_none() {
    let repository = InMemoryAssessmentRepository::new();

    let fetched = repository.get_by_id(AssessmentId::new()).await.unwrap();

    assert!(fetched.is_none());
}

#[tokio::test]
async fn given_duplicate_id_when_creating_then_rejects() {
    let repository = InMemoryAssessmentRepository::new();
    let record = assessment("batch", 0);

    repository.create(&record).await.unwrap();
    let result = repository.create(&record).await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[tokio::test]
async fn given_several_creates_when_listing_then_newest_comes_first() {
    let repository = InMemoryAssessmentRepository::new();
    repository.create(&assessment("first", 0)).await.unwrap();
    repository.create(&assessment("second", 1)).await.unwrap();
    repository.create(&assessment("third", 2)).await.unwrap();

    let page = repository.list_page(1, 10).await.unwrap();

    let names: Vec<&str> = page.assessments.iter().map(|a| a.batch_name.as_str()).collect();
    assert_eq!(names, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn given_twenty_five_assessments_when_paginating_then_windows_partition_the_collection() {
    let repository = InMemoryAssessmentRepository::new();
    for i in 0..25 {
        repository.create(&assessment("batch", i)).await.unwrap();
    }

    let mut seen = 0;
    let first = repository.list_page(1, 10).await.unwrap();
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.total_assessments, 25);

    for page_number in 1..=first.total_pages {
        let page = repository.list_page(page_number, 10).await.unwrap();
        assert!(page.assessments.len() <= 10);
        seen += page.assessments.len();
    }
    assert_eq!(seen, 25);

    let last = repository.list_page(3, 10).await.unwrap();
    assert_eq!(last.assessments.len(), 5);
}

#[tokio::test]
async fn given_out_of_range_page_when_listing_then_returns_empty_with_totals() {
    let repository = InMemoryAssessmentRepository::new();
    for i in 0..5 {
        repository.create(&assessment("batch", i)).await.unwrap();
    }

    let page = repository.list_page(7, 10).await.unwrap();

    assert!(page.assessments.is_empty());
    assert_eq!(page.current_page, 7);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total_assessments, 5);
}

#[tokio::test]
async fn given_limit_beyond_total_when_listing_then_single_page_holds_everything() {
    let repository = InMemoryAssessmentRepository::new();
    for i in 0..3 {
        repository.create(&assessment("batch", i)).await.unwrap();
    }

    let page = repository.list_page(1, 50).await.unwrap();

    assert_eq!(page.assessments.len(), 3);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn given_issued_codes_when_collecting_then_returns_all_of_them() {
    let repository = InMemoryAssessmentRepository::new();
    repository.create(&assessment("alpha", 0)).await.unwrap();
    repository.create(&assessment("beta", 1)).await.unwrap();

    let codes = repository.batch_codes().await.unwrap();

    assert_eq!(codes.len(), 2);
    assert!(codes.contains(&"ALPHA_0000".to_string()));
    assert!(codes.contains(&"BETA_0001".to_string()));
}

#[tokio::test]
async fn given_processing_assessment_when_marking_completed_then_transition_is_visible() {
    let repository = InMemoryAssessmentRepository::new();
    let record = assessment("batch", 0);
    repository.create(&record).await.unwrap();

    repository
        .mark_completed(record.id, "/downloads/abc.gift")
        .await
        .unwrap();

    let fetched = repository.get_by_id(record.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, AssessmentStatus::Completed);
    assert_eq!(fetched.progress, 100);
    assert_eq!(fetched.download_url(), Some("/downloads/abc.gift"));
}

#[tokio::test]
async fn given_unknown_id_when_marking_completed_then_reports_not_found() {
    let repository = InMemoryAssessmentRepository::new();

    let result = repository
        .mark_completed(AssessmentId::new(), "/downloads/abc.gift")
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn given_processing_assessment_when_marking_failed_then_records_the_error() {
    let repository = InMemoryAssessmentRepository::new();
    let record = assessment("batch", 0);
    repository.create(&record).await.unwrap();

    repository
        .mark_failed(record.id, "generator crashed")
        .await
        .unwrap();

    let fetched = repository.get_by_id(record.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, AssessmentStatus::Failed);
    assert_eq!(fetched.error_message.as_deref(), Some("generator crashed"));
    assert!(fetched.download_url().is_none());
}

#[tokio::test]
async fn given_populated_store_when_clearing_then_collection_empties() {
    let repository = InMemoryAssessmentRepository::new();
    repository.create(&assessment("batch", 0)).await.unwrap();

    repository.clear().await;

    let page = repository.list_page(1, 10).await.unwrap();
    assert_eq!(page.total_assessments, 0);
}
