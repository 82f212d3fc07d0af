use crate::config::Config;
use crate::utils::generator::AdGenerator;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub generator: AdGenerator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = AdGenerator::new(config.store.clone());
        Self { config, generator }
    }
}

impl FromRef<AppState> for AdGenerator {
    fn from_ref(state: &AppState) -> Self {
        state.generator.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
