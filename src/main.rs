use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use sitereport::application::ports::{ProjectRepository, ReportRenderer};
use sitereport::application::services::{
    ProjectService, ReportAssembler, ReportPublisher, ReportService, TranscriptionService,
};
use sitereport::infrastructure::audio::TranscriptionEngineFactory;
use sitereport::infrastructure::observability::{TracingConfig, init_tracing};
use sitereport::infrastructure::persistence::{
    InMemoryProjectRepository, PgProjectRepository, create_pool,
};
use sitereport::infrastructure::rendering::HandlebarsReportRenderer;
use sitereport::infrastructure::storage::BlobStoreFactory;
use sitereport::presentation::config::{PersistenceProviderSetting, Settings};
use sitereport::presentation::{AppState, Environment, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::new(environment, &settings.logging),
        settings.server.port,
    );

    let blob_store =
        BlobStoreFactory::create(&settings.storage).context("Failed to initialize blob store")?;

    let repository: Arc<dyn ProjectRepository> = match settings.persistence.provider {
        PersistenceProviderSetting::Memory => {
            tracing::warn!("Using in-memory project store; data is lost on restart");
            Arc::new(InMemoryProjectRepository::new())
        }
        PersistenceProviderSetting::Postgres => {
            let url = settings
                .persistence
                .database_url
                .as_deref()
                .context("persistence.database_url is required for postgres")?;
            let pool = create_pool(url, settings.persistence.max_connections)
                .await
                .context("Failed to connect to database")?;
            Arc::new(PgProjectRepository::new(pool))
        }
    };

    let transcription_service = match TranscriptionEngineFactory::create(&settings.transcription)
    {
        Ok(engine) => Arc::new(TranscriptionService::new(engine)),
        Err(e) => {
            tracing::warn!(error = %e, "Transcription disabled");
            Arc::new(TranscriptionService::unconfigured())
        }
    };

    let renderer: Arc<dyn ReportRenderer> = match &settings.report.template_path {
        Some(path) => Arc::new(HandlebarsReportRenderer::from_file(path)?),
        None => Arc::new(HandlebarsReportRenderer::new()?),
    };

    let project_service = Arc::new(ProjectService::new(
        Arc::clone(&repository),
        Arc::clone(&blob_store),
    ));

    let report_service = Arc::new(ReportService::new(
        Arc::clone(&project_service),
        ReportAssembler::new(
            settings.report.placeholder_cover_url.clone(),
            settings.report.product_name.clone(),
        ),
        renderer,
        ReportPublisher::new(Arc::clone(&blob_store), Arc::clone(&repository)),
    ));

    let state = AppState {
        project_service,
        report_service,
        transcription_service,
        blob_store,
    };

    let router = create_router(state);

    let host: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .context("server.host is not an IP address")?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
