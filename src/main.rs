use stylebot_rust::service::types::{GenerateRequest, UploadFile, UploadRequest};
use stylebot_rust::{AppCoordinator, AppError, Settings};
use tracing::{info, Level};

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

// Demo driver: analyzes the images passed on the command line and prints
// the outfit combinations for the configured default occasion.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_logging();
    let settings = Settings::load()?;
    let default_occasion = settings.default_occasion.clone();
    let mut coordinator = AppCoordinator::builder(settings).build();

    let health = coordinator.health().await?;
    info!("stylebot {} ({})", health.version, health.status);

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        info!("Usage: stylebot-rust <image> <image> [image ..]");
        coordinator.shutdown();
        return Ok(());
    }

    let mut files = Vec::new();
    for path in &paths {
        let bytes = tokio::fs::read(path).await?;
        let name = std::path::Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path)
            .to_string();
        files.push(UploadFile { name, bytes });
    }

    let upload = coordinator.upload(UploadRequest { files }).await?;
    info!("Analyzed {} image(s)", upload.images.len());

    if upload.images.len() < 2 {
        info!("Need at least 2 images to suggest combinations");
        coordinator.shutdown();
        return Ok(());
    }

    let request = GenerateRequest {
        images: upload.images.iter().map(|i| i.id).collect(),
        occasion: default_occasion,
        clothing_type: None,
        color_preference: None,
    };
    if let Some(response) = coordinator.generate(request).await? {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    coordinator.shutdown();
    Ok(())
}
