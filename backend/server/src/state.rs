use std::sync::Arc;

use tokio::sync::RwLock;

use super::{
    camera::{CameraDevice, FfmpegCamera},
    config::Config,
    recipes::RecipeCatalog,
    render::{HtmlRenderer, Renderer},
    stock::StockStore,
    temperature::TemperatureLog,
};

pub struct AppState {
    pub config: Config,
    pub stock: RwLock<StockStore>,
    pub temperature_log: RwLock<TemperatureLog>,
    pub recipes: RecipeCatalog,
    pub camera: Arc<dyn CameraDevice>,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        Self::with_components(config, Arc::new(FfmpegCamera), Arc::new(HtmlRenderer))
    }

    pub fn with_components(
        config: Config,
        camera: Arc<dyn CameraDevice>,
        renderer: Arc<dyn Renderer>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            stock: RwLock::new(StockStore::new()),
            temperature_log: RwLock::new(TemperatureLog::new()),
            recipes: RecipeCatalog::default(),
            camera,
            renderer,
        })
    }
}
