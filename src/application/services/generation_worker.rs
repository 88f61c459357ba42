use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;

use crate::application::ports::{AssessmentRepository, RepositoryError};
use crate::domain::AssessmentId;

pub struct GenerationMessage {
    pub assessment_id: AssessmentId,
}

/// Consumes the generation queue and drives the processing -> completed
/// transition through the repository, so every read path observes it.
pub struct GenerationWorker {
    receiver: mpsc::Receiver<GenerationMessage>,
    repository: Arc<dyn AssessmentRepository>,
    min_duration: Duration,
    max_duration: Duration,
}

impl GenerationWorker {
    pub fn new(
        receiver: mpsc::Receiver<GenerationMessage>,
        repository: Arc<dyn AssessmentRepository>,
        min_duration: Duration,
        max_duration: Duration,
    ) -> Self {
        Self {
            receiver,
            repository,
            min_duration,
            max_duration,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Generation worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "generation_job",
                assessment_id = %msg.assessment_id.as_uuid(),
            );
            let _guard = span.enter();

            if let Err(e) = self.process_job(msg).await {
                tracing::error!(error = %e, "Generation job failed");
            }
        }
        tracing::info!("Generation worker stopped: channel closed");
    }

    async fn process_job(&self, msg: GenerationMessage) -> Result<(), GenerationWorkerError> {
        let id = msg.assessment_id;

        let assessment = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(GenerationWorkerError::JobVanished(id))?;

        let duration = self.generation_duration();
        tracing::debug!(
            duration_ms = duration.as_millis() as u64,
            "Generating assessment"
        );
        tokio::time::sleep(duration).await;

        let download_url = format!(
            "/downloads/{}.{}",
            id.as_uuid(),
            assessment.artifact_extension()
        );
        self.repository.mark_completed(id, &download_url).await?;

        tracing::info!(download_url = %download_url, "Assessment generation completed");
        Ok(())
    }

    fn generation_duration(&self) -> Duration {
        if self.max_duration <= self.min_duration {
            return self.min_duration;
        }
        let spread = (self.max_duration - self.min_duration).as_millis() as u64;
        let jitter = rand::thread_rng().gen_range(0..=spread);
        self.min_duration + Duration::from_millis(jitter)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationWorkerError {
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("assessment vanished before generation: {}", .0.as_uuid())]
    JobVanished(AssessmentId),
}
