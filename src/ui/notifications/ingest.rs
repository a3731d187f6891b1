// SPDX-License-Identifier: MPL-2.0
//! Bridge for messages prepared before the toast manager starts.
//!
//! A host can render a batch of flash messages (text plus level) ahead of
//! time. The manager takes that batch exactly once: taking it removes it,
//! so a second ingestion finds nothing.
//!
//! # Flash file formats
//!
//! TOML (any extension other than `.json`):
//!
//! ```toml
//! [[message]]
//! text = "Welcome back"
//! level = "success"
//! ```
//!
//! JSON:
//!
//! ```json
//! [{ "text": "Welcome back", "level": "success" }]
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A message rendered by the host before startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub text: String,
    /// Level tag such as `success` or `debug`. Missing means `info`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl FlashMessage {
    pub fn new(text: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: Some(level.into()),
        }
    }

    #[must_use]
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }
}

/// Supplier of a one-time batch of flash messages.
pub trait MessageSource {
    /// Takes the pending batch.
    ///
    /// Returns `Ok(None)` when there is no batch, either because none was
    /// rendered or because it was already taken.
    fn take_batch(&mut self) -> Result<Option<Vec<FlashMessage>>>;
}

/// Batch held in memory.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedMessages {
    batch: Option<Vec<FlashMessage>>,
}

impl EmbeddedMessages {
    #[must_use]
    pub fn new(messages: Vec<FlashMessage>) -> Self {
        Self {
            batch: Some(messages),
        }
    }

    /// Source without any batch.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.batch.is_some()
    }
}

impl MessageSource for EmbeddedMessages {
    fn take_batch(&mut self) -> Result<Option<Vec<FlashMessage>>> {
        Ok(self.batch.take())
    }
}

/// Batch stored in a file, deleted once read.
#[derive(Debug, Clone)]
pub struct FlashFile {
    path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct TomlBatch {
    #[serde(default, rename = "message")]
    messages: Vec<FlashMessage>,
}

impl FlashFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }

    fn parse(&self, content: &str) -> Result<Vec<FlashMessage>> {
        if self.is_json() {
            Ok(serde_json::from_str(content)?)
        } else {
            let batch: TomlBatch = toml::from_str(content)?;
            Ok(batch.messages)
        }
    }
}

impl MessageSource for FlashFile {
    /// Reads and deletes the file. The file is deleted before parsing, so a
    /// malformed batch is reported once and never re-processed.
    fn take_batch(&mut self) -> Result<Option<Vec<FlashMessage>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path)?;
        fs::remove_file(&self.path)?;
        let content = String::from_utf8(bytes)
            .map_err(|err| Error::Ingest(format!("flash file is not UTF-8: {err}")))?;
        self.parse(&content).map(Some)
    }
}
