//! JSONL file writer for submitted orders.
//!
//! Each [`SubmissionPayload`] is serialized as a single JSON line with a
//! `submitted_at` field, appended to the file via a buffered writer.

use async_trait::async_trait;
use quote_application::ports::order_submitter::{
    OrderSubmitter, SubmissionError, SubmissionPayload, SubmissionReceipt,
};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};

/// Outbox that appends one JSON object per submitted order.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record.
pub struct JsonlOutbox {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlOutbox {
    /// Open (or create) the outbox at `path` in append mode.
    ///
    /// Parent directories are created as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SubmissionError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create outbox directory {}: {}",
                parent.display(),
                e
            );
            return Err(e.into());
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        info!("Order outbox: {}", path.display());

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the outbox file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        let receipt = SubmissionReceipt::now(payload.service, self.path.display().to_string());

        let mut record = serde_json::to_value(payload)?;
        if let serde_json::Value::Object(map) = &mut record {
            map.insert(
                "submitted_at".to_string(),
                serde_json::Value::String(
                    receipt
                        .submitted_at
                        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                ),
            );
        }
        let line = serde_json::to_string(&record)?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| SubmissionError::Rejected("outbox writer poisoned".to_string()))?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;

        Ok(receipt)
    }
}

#[async_trait]
impl OrderSubmitter for JsonlOutbox {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.append(payload)
    }
}

impl Drop for JsonlOutbox {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
