use std::sync::Arc;

use crate::pipeline::IntakePipeline;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<IntakePipeline>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(pipeline: Arc<IntakePipeline>, max_body_bytes: usize) -> Self {
        Self {
            pipeline,
            max_body_bytes,
        }
    }
}
