use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

use pathsmith::config::Settings;
use pathsmith::corpus::KnowledgeBase;
use pathsmith::polish::{GeminiPolisher, Polisher};
use pathsmith::server;
use pathsmith::service::GuidanceService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let settings = Settings::from_env()?;

    let knowledge = Arc::new(KnowledgeBase::new(settings.seeds_dir.clone()));
    let polisher: Option<Arc<dyn Polisher>> = match &settings.gemini_api_key {
        Some(api_key) => {
            let gemini = GeminiPolisher::new(
                settings.gemini_api_base.clone(),
                settings.gemini_model.clone(),
                api_key.clone(),
                settings.polish_timeout,
            )?;
            tracing::info!(model = %settings.gemini_model, "polish pass enabled");
            Some(Arc::new(gemini))
        }
        None => {
            tracing::info!("no GEMINI_API_KEY set; answers stay deterministic");
            None
        }
    };

    let service = Arc::new(GuidanceService::new(knowledge, polisher));
    let router = server::router(service);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("serving career guidance on http://{}", settings.bind_addr);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
