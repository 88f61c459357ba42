mod assessment_service;
mod form_session;
mod generation_worker;
mod view_controller;

pub use assessment_service::{AssessmentService, SubmissionError};
pub use form_session::{FormSession, SessionError};
pub use generation_worker::{GenerationMessage, GenerationWorker, GenerationWorkerError};
pub use view_controller::{DownloadError, View, ViewController};
