//! Contact sink adapters
//!
//! - [`LogSink`] writes each submission to the log and keeps nothing
//! - [`OutboxSink`] appends each submission as one JSON line to a file,
//!   for whatever delivery job is pointed at that file

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::models::ContactMessage;
use crate::core::ports::ContactSink;

/// Which sink to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Log and discard (default)
    #[default]
    Log,
    /// Append to a JSON-lines file
    Outbox,
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Log => write!(f, "log"),
            Self::Outbox => write!(f, "outbox"),
        }
    }
}

/// Build the configured sink
#[must_use]
pub fn sink_for(kind: SinkKind, outbox: &Path) -> Box<dyn ContactSink> {
    match kind {
        SinkKind::Log => Box::new(LogSink),
        SinkKind::Outbox => Box::new(OutboxSink::new(outbox.to_path_buf())),
    }
}

/// Sink that only logs submissions
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    fn deliver(&self, message: &ContactMessage) -> anyhow::Result<()> {
        info!(
            "Contact from {} <{}> ({} chars)",
            message.name,
            message.email,
            message.message.chars().count()
        );
        Ok(())
    }
}

/// Sink that appends submissions to a JSON-lines file
#[derive(Debug)]
pub struct OutboxSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl OutboxSink {
    /// Create a sink writing to `path`; the file is created on first use
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// File submissions are appended to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every stored submission
    pub fn read_all(&self) -> anyhow::Result<Vec<ContactMessage>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        fs::read_to_string(&self.path)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(Into::into))
            .collect()
    }
}

impl ContactSink for OutboxSink {
    fn name(&self) -> &'static str {
        "outbox"
    }

    fn deliver(&self, message: &ContactMessage) -> anyhow::Result<()> {
        let line = serde_json::to_string(message)?;
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow::anyhow!("outbox lock poisoned"))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{line}")?;

        info!("Queued contact from <{}> in {}", message.email, self.path.display());
        Ok(())
    }
}
