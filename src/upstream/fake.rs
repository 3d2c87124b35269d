//! Scripted upstream used by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::RemoteClient;
use crate::error::{Result, UpstreamError};

/// Counts calls and answers from per-URL scripts.
///
/// URLs without a script get `{"url": <url>, "call": <n>}` so each refresh is
/// distinguishable from the previous one.
#[derive(Default)]
pub struct FakeClient {
    calls: AtomicUsize,
    scripted: Mutex<HashMap<String, Result<Value>>>,
    requested: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every request with `payload`, regardless of URL.
    pub fn always(payload: Value) -> Self {
        let fake = Self::new();
        fake.script("*", Ok(payload));
        fake
    }

    /// Fails every request with `err`.
    pub fn failing(err: UpstreamError) -> Self {
        let fake = Self::new();
        fake.script("*", Err(err));
        fake
    }

    /// Sets the answer for `url`; `"*"` matches any URL without its own script.
    pub fn script(&self, url: &str, answer: Result<Value>) {
        self.scripted.lock().unwrap().insert(url.to_string(), answer);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteClient for FakeClient {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.requested.lock().unwrap().push(url.to_string());

        let scripted = self.scripted.lock().unwrap();
        match scripted.get(url).or_else(|| scripted.get("*")) {
            Some(answer) => answer.clone(),
            None => Ok(json!({ "url": url, "call": call })),
        }
    }
}
