use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::AppConfig;
use crate::models::FormSession;
use crate::services::backend::FeedbackBackend;

pub struct AppState {
    pub config: AppConfig,
    pub backend: Box<dyn FeedbackBackend>,
    pub sessions: Mutex<HashMap<String, FormSession>>,
}
