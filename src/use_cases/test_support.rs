use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::{Clock, ConfigSource, RecordSink};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) i64);

impl Clock for FixedClock {
    fn now_epoch_millis(&self) -> i64 {
        self.0
    }
}

// In-memory record sink that captures attachments for inspection.
#[derive(Clone)]
pub(crate) struct RecordingSink {
    attachments: Arc<Mutex<Vec<(String, String)>>>,
    // Toggle used by negative-path tests to simulate platform failure.
    should_fail: bool,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self {
            attachments: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            attachments: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    pub(crate) fn attachments(&self) -> Vec<(String, String)> {
        let guard = self.attachments.lock().expect("attachments mutex poisoned");
        guard.clone()
    }
}

#[async_trait]
impl RecordSink for RecordingSink {
    async fn attach(&self, label: &str, value: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("attach failed".to_string());
        }

        let mut guard = self.attachments.lock().expect("attachments mutex poisoned");
        guard.push((label.to_string(), value.to_string()));
        Ok(())
    }
}

// Map-backed configuration source for use-case tests.
pub(crate) struct MapConfig {
    entries: HashMap<String, String>,
}

impl MapConfig {
    pub(crate) fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub(crate) fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl ConfigSource for MapConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
