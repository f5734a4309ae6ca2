//! Filesystem codec for Open Ledger Format trees.
//!
//! The file extension selects the codec — `.json`, or `.yaml`/`.yml` —
//! and anything else is rejected before any I/O happens. Writes land in a
//! sibling temp file first and are renamed into place, so a failed write
//! never leaves a half-serialized ledger behind.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use olf_domain::{Ledger, LegacyLedger};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unsupported file format `{extension}`: {}", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize ledger: {message}")]
    Serialize { message: String },
}

/// Codec selected from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, StorageError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(StorageError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Reads a ledger tree in the current format.
pub fn read_ledger(path: &Path) -> Result<Ledger, StorageError> {
    read_document(path)
}

/// Reads a legacy (v1) ledger tree.
pub fn read_legacy_ledger(path: &Path) -> Result<LegacyLedger, StorageError> {
    read_document(path)
}

/// Writes a ledger tree, atomically replacing any existing file.
pub fn write_ledger(ledger: &Ledger, path: &Path) -> Result<(), StorageError> {
    let data = serialize(ledger, Format::from_path(path)?)?;
    write_atomic(path, &data)?;
    debug!(path = %path.display(), "wrote ledger");
    Ok(())
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let format = Format::from_path(path)?;
    let data = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "read ledger file");

    let parsed = match format {
        Format::Json => serde_json::from_str(&data).map_err(|err| err.to_string()),
        Format::Yaml => serde_yaml::from_str(&data).map_err(|err| err.to_string()),
    };
    parsed.map_err(|message| StorageError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

fn serialize<T: Serialize>(value: &T, format: Format) -> Result<String, StorageError> {
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(value)
            .map(|mut out| {
                out.push('\n');
                out
            })
            .map_err(|err| err.to_string()),
        Format::Yaml => serde_yaml::to_string(value).map_err(|err| err.to_string()),
    };
    rendered.map_err(|message| StorageError::Serialize { message })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data).map_err(|source| StorageError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}
