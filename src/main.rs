use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use formative::application::ports::{AssessmentRepository, CourseCatalog, UserDirectory};
use formative::application::services::{AssessmentService, GenerationWorker};
use formative::infrastructure::catalog::StaticCourseCatalog;
use formative::infrastructure::directory::StaticUserDirectory;
use formative::infrastructure::observability::{TracingConfig, init_tracing};
use formative::infrastructure::persistence::InMemoryAssessmentRepository;
use formative::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            json_format: settings.logging.json_format,
        },
        settings.server.port,
    );

    let repository: Arc<dyn AssessmentRepository> = Arc::new(InMemoryAssessmentRepository::new());
    let catalog: Arc<dyn CourseCatalog> = Arc::new(StaticCourseCatalog::new());
    let user_directory: Arc<dyn UserDirectory> = Arc::new(StaticUserDirectory::default());

    let (generation_sender, generation_receiver) =
        mpsc::channel(settings.generation.queue_capacity);

    let worker = GenerationWorker::new(
        generation_receiver,
        Arc::clone(&repository),
        settings.generation.min_duration,
        settings.generation.max_duration,
    );
    tokio::spawn(worker.run());

    let assessment_service = Arc::new(AssessmentService::new(
        Arc::clone(&repository),
        Arc::clone(&catalog),
        generation_sender,
    ));

    let state = AppState {
        assessment_service,
        repository,
        catalog,
        user_directory,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
