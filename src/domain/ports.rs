use async_trait::async_trait;

// Port for attaching a labeled note to the visit record on the platform.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn attach(&self, label: &str, value: &str) -> Result<(), String>;
}

// Port for reading upstream platform configuration values.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_millis(&self) -> i64;
}
