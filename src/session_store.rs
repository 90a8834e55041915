// ABOUTME: File-backed session persistence storing one JSON record per session
// ABOUTME: Saves, loads, lists, and deletes sessions with atomic replace-on-write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session persistence
//!
//! Each session lives in `<data_dir>/<name>.json` as a plain structured
//! record. Writes go to a temp file in the same directory which is then
//! persisted over the record, so a reader sees either the old session or the
//! new one. A failed write drops the temp file.

use crate::errors::{AppError, AppResult};
use crate::logging::PlanLogger;
use crate::session::{Session, SessionSummary};
use musclemap_core::validation::validate_session_name;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

const RECORD_EXTENSION: &str = "json";

/// Directory of session records
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    /// Open a store, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}",
                root.display()
            ))
            .with_source(e)
        })?;
        debug!(data_dir = %root.display(), "opened session store");
        Ok(Self { root })
    }

    /// Directory holding the records
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, name: &str) -> AppResult<PathBuf> {
        validate_session_name(name)?;
        Ok(self.root.join(format!("{name}.{RECORD_EXTENSION}")))
    }

    /// Whether a record exists for the session name
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a valid session name
    pub fn exists(&self, name: &str) -> AppResult<bool> {
        Ok(self.record_path(name)?.is_file())
    }

    /// Write a session, replacing any existing record with the same name
    ///
    /// # Errors
    ///
    /// Returns a serialization or storage error if the record cannot be written
    pub fn save(&self, session: &Session) -> AppResult<()> {
        let path = self.record_path(session.name())?;
        let json = serde_json::to_string_pretty(session)?;

        let result = self.write_record(&path, json.as_bytes());
        PlanLogger::log_storage_operation("save", session.name(), result.is_ok());
        result
    }

    fn write_record(&self, path: &Path, contents: &[u8]) -> AppResult<()> {
        let mut tmp = NamedTempFile::new_in(&self.root).map_err(|e| {
            AppError::storage(format!("Failed to create temp file in {}", self.root.display()))
                .with_source(e)
        })?;
        tmp.write_all(contents).map_err(|e| {
            AppError::storage(format!("Failed to write {}", tmp.path().display())).with_source(e)
        })?;
        tmp.persist(path).map_err(|e| {
            AppError::storage(format!("Failed to replace {}", path.display())).with_source(e.error)
        })?;
        Ok(())
    }

    /// Read a session record
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no record exists, or a serialization,
    /// storage or validation error if the record cannot be used
    pub fn load(&self, name: &str) -> AppResult<Session> {
        let path = self.record_path(name)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::not_found(format!("Session '{name}'")));
            }
            Err(e) => {
                return Err(
                    AppError::storage(format!("Failed to read {}", path.display())).with_source(e),
                );
            }
        };

        let session: Session = serde_json::from_str(&json)?;
        session.validate()?;
        Ok(session)
    }

    /// Summaries of every readable session, sorted by name
    ///
    /// Records that fail to parse are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be read
    pub fn list(&self) -> AppResult<Vec<SessionSummary>> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            AppError::storage(format!("Failed to read {}", self.root.display())).with_source(e)
        })?;

        let mut summaries = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match self.load(name) {
                Ok(session) => summaries.push(session.summary()),
                Err(e) => warn!(record = %path.display(), error = %e, "skipping unreadable session"),
            }
        }

        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    /// Remove a session record
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no record exists, or a storage error
    pub fn delete(&self, name: &str) -> AppResult<()> {
        let path = self.record_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                PlanLogger::log_storage_operation("delete", name, true);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::not_found(format!("Session '{name}'")))
            }
            Err(e) => {
                PlanLogger::log_storage_operation("delete", name, false);
                Err(AppError::storage(format!("Failed to delete {}", path.display())).with_source(e))
            }
        }
    }
}
