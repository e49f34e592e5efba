#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use lexbrief::ai::{GenerateError, GenerationRequest, GenerationResponse, GenerativeModel};

/// Model double that replays scripted outcomes and records every request.
#[derive(Default)]
pub struct ScriptedModel {
    outcomes: Mutex<VecDeque<Result<GenerationResponse, GenerateError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedModel {
    pub fn new(outcomes: Vec<Result<GenerationResponse, GenerateError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerateError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerateError::Failed("no scripted outcome left".to_string())))
    }
}
