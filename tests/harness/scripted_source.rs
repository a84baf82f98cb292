use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use surescan::domain::OddsQuote;
use surescan::error::{Error, Result};
use surescan::port::OddsSource;

/// Deterministic odds source: hands out scripted batches in order, then
/// empty batches once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Vec<OddsQuote>>>>,
    calls: Mutex<usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_quotes(&self, quotes: Vec<OddsQuote>) {
        self.script.lock().expect("lock script").push_back(Ok(quotes));
    }

    pub fn push_error(&self, error: impl Into<Error>) {
        self.script
            .lock()
            .expect("lock script")
            .push_back(Err(error.into()));
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("lock calls")
    }
}

#[async_trait]
impl OddsSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<OddsQuote>> {
        *self.calls.lock().expect("lock calls") += 1;
        self.script
            .lock()
            .expect("lock script")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
