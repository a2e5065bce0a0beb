// src/state.rs
use std::sync::Arc;

use crate::services::model::ChatModel;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub model: Box<dyn ChatModel>,
}

impl AppState {
    pub fn new(model: impl ChatModel + 'static) -> Self {
        Self { model: Box::new(model) }
    }
}
