//! Loading metadata entry dumps.
//!
//! A dump is a JSON array in which each record names its chunk and either
//! carries `key` and `text` separately or a single `description` of the form
//! `key:text`, as metadata readers report tags.

use std::path::Path;

use anyhow::Context;
use bri_types::{ChunkKind, RawEntry};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum EntryRecord {
    Split {
        chunk: ChunkKind,
        key: String,
        text: String,
    },
    Tagged {
        chunk: ChunkKind,
        description: String,
    },
}

impl From<EntryRecord> for RawEntry {
    fn from(record: EntryRecord) -> Self {
        match record {
            EntryRecord::Split { chunk, key, text } => RawEntry::new(chunk, key, text),
            EntryRecord::Tagged { chunk, description } => {
                RawEntry::from_tag_description(chunk, &description)
            }
        }
    }
}

/// Read the preset-relevant entries of a dump, dropping other chunk kinds.
pub fn load_entries(path: &Path) -> anyhow::Result<Vec<RawEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading metadata dump {}", path.display()))?;
    parse_entries(&text).with_context(|| format!("parsing metadata dump {}", path.display()))
}

fn parse_entries(text: &str) -> anyhow::Result<Vec<RawEntry>> {
    let records: Vec<EntryRecord> = serde_json::from_str(text)?;
    let total = records.len();
    let entries: Vec<RawEntry> = records
        .into_iter()
        .map(RawEntry::from)
        .filter(|entry| entry.chunk.is_preset_text())
        .collect();
    debug!(total, kept = entries.len(), "loaded metadata entries");
    Ok(entries)
}
