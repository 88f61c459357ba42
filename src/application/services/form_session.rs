use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use crate::domain::{Assessment, AssessmentDraft};

use super::{AssessmentService, SubmissionError};

/// One form screen's draft. Submission is serialized per session: while one
/// submit is in flight, further submits are rejected rather than queued.
pub struct FormSession {
    service: Arc<AssessmentService>,
    draft: Mutex<AssessmentDraft>,
    in_flight: AtomicBool,
}

impl FormSession {
    pub fn new(service: Arc<AssessmentService>) -> Self {
        Self {
            service,
            draft: Mutex::new(AssessmentDraft::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub async fn update<F>(&self, edit: F)
    where
        F: FnOnce(&mut AssessmentDraft),
    {
        let mut draft = self.draft.lock().await;
        edit(&mut draft);
    }

    /// Snapshot of the current draft.
    pub async fn draft(&self) -> AssessmentDraft {
        self.draft.lock().await.clone()
    }

    pub async fn reset(&self) {
        self.draft.lock().await.reset();
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submits the draft. On success the draft resets to defaults; on failure
    /// it is preserved so the user can correct and retry.
    pub async fn submit(&self) -> Result<Assessment, SessionError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(SessionError::SubmissionInFlight);
        }

        let draft = self.draft.lock().await.clone();
        let result = self.service.submit(&draft).await;

        if result.is_ok() {
            self.draft.lock().await.reset();
        }
        self.in_flight.store(false, Ordering::SeqCst);

        result.map_err(SessionError::Submission)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("submission: {0}")]
    Submission(#[from] SubmissionError),
}
