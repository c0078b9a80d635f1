use std::sync::{Arc, Mutex};

use artisan_cron::sink::{LogSink, Status};

/// A log sink that keeps every line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// invoker and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<(Status, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Status, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|(_, m)| m).collect()
    }
}

impl LogSink for RecordingSink {
    fn write_line(&mut self, status: Status, _timestamp: &str, message: &str) -> anyhow::Result<()> {
        self.lines.lock().unwrap().push((status, message.to_string()));
        Ok(())
    }
}
