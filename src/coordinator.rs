use crate::config::Settings;
use crate::error::AppError;
use crate::service::types::{
    AnalyzeRequest, AnalyzeResponse, GenerateRequest, GenerateResponse, HealthRequest,
    HealthResponse, UploadRequest, UploadResponse,
};
use crate::service::{
    AnalyzeService, GenerateService, HealthService, RequestSequence, UploadService,
};
use crate::wardrobe::{Wardrobe, WardrobeHandle, WardrobeItem};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower::Service;
use tracing::{info, warn};
use uuid::Uuid;

/// Owns the session: the wardrobe task plus the service operations that
/// work against it. One coordinator per session; calling `shutdown` ends
/// the working set.
pub struct AppCoordinator {
    wardrobe: WardrobeHandle,
    wardrobe_task: JoinHandle<()>,
    upload: UploadService,
    generate: GenerateService,
    analyze: AnalyzeService,
    health: HealthService,
}

impl AppCoordinator {
    pub fn builder(settings: Settings) -> CoordinatorBuilder {
        CoordinatorBuilder::new(settings)
    }

    pub async fn upload(&mut self, request: UploadRequest) -> Result<UploadResponse, AppError> {
        self.upload.call(request).await
    }

    /// Runs a generation request. Returns `None` when a newer request
    /// finished first; only the newest response should be displayed.
    pub async fn generate(
        &mut self,
        request: GenerateRequest,
    ) -> Result<Option<GenerateResponse>, AppError> {
        let outcome = self.generate.call(request).await?;
        if outcome.current {
            Ok(Some(outcome.response))
        } else {
            warn!("Dropping superseded generation response {}", outcome.ticket);
            Ok(None)
        }
    }

    pub async fn analyze(&mut self, request: AnalyzeRequest) -> Result<AnalyzeResponse, AppError> {
        self.analyze.call(request).await
    }

    pub async fn health(&mut self) -> Result<HealthResponse, AppError> {
        self.health.call(HealthRequest).await
    }

    pub async fn remove_item(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.wardrobe.remove_item(id).await?)
    }

    pub async fn clear(&self) -> Result<(), AppError> {
        Ok(self.wardrobe.clear().await?)
    }

    pub async fn list_items(&self) -> Result<Vec<WardrobeItem>, AppError> {
        Ok(self.wardrobe.list_items().await?)
    }

    pub fn shutdown(self) {
        info!("Shutting down session coordinator");
        self.wardrobe_task.abort();
    }
}

pub struct CoordinatorBuilder {
    settings: Settings,
}

impl CoordinatorBuilder {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    // Overrides the clustering seed, for sessions that need distinct but
    // reproducible extractions.
    pub fn kmeans_seed(mut self, seed: u64) -> Self {
        self.settings.kmeans_seed = seed;
        self
    }

    pub fn max_combinations(mut self, max_combinations: usize) -> Self {
        self.settings.max_combinations = max_combinations;
        self
    }

    pub fn max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.settings.max_upload_bytes = max_upload_bytes;
        self
    }

    pub fn build(self) -> AppCoordinator {
        let (wardrobe, wardrobe_task) = Wardrobe::spawn(self.settings.wardrobe_buffer_size);
        let sequence = Arc::new(RequestSequence::new());
        AppCoordinator {
            upload: UploadService::new(&self.settings, wardrobe.clone()),
            generate: GenerateService::new(&self.settings, wardrobe.clone(), sequence),
            analyze: AnalyzeService::new(&self.settings),
            health: HealthService::new(),
            wardrobe,
            wardrobe_task,
        }
    }
}
