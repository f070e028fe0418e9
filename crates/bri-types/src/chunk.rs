//! Raw metadata entries as produced by a PNG metadata reader.
//!
//! Only the two text chunk families matter for brush presets: uncompressed
//! `tEXt` chunks and compressed `zTXt` chunks. Anything else is carried
//! through as [`ChunkKind::Other`] and classifies as unknown.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Directory name a metadata reader reports for uncompressed text chunks.
pub const PLAIN_TEXT_CHUNK: &str = "PNG-tEXt";

/// Directory name a metadata reader reports for compressed text chunks.
pub const COMPRESSED_TEXT_CHUNK: &str = "PNG-zTXt";

/// The metadata container a raw entry was read from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChunkKind {
    /// An uncompressed text chunk.
    PlainText,
    /// A compressed text chunk. Holds JSON documents and base64 images.
    CompressedText,
    /// Any other container name, kept verbatim.
    Other(String),
}

impl ChunkKind {
    /// Parse a container name. Accepts both the reader's directory names and
    /// the short `plain-text` / `compressed-text` aliases.
    pub fn parse(name: &str) -> Self {
        match name {
            PLAIN_TEXT_CHUNK | "plain-text" => Self::PlainText,
            COMPRESSED_TEXT_CHUNK | "compressed-text" => Self::CompressedText,
            other => Self::Other(other.to_string()),
        }
    }

    /// The canonical container name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PlainText => PLAIN_TEXT_CHUNK,
            Self::CompressedText => COMPRESSED_TEXT_CHUNK,
            Self::Other(name) => name,
        }
    }

    /// Returns `true` for the two chunk kinds that carry preset settings.
    pub fn is_preset_text(&self) -> bool {
        matches!(self, Self::PlainText | Self::CompressedText)
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ChunkKind {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<&str> for ChunkKind {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<ChunkKind> for String {
    fn from(kind: ChunkKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One `(chunk, key, text)` triple supplied by a metadata reader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub chunk: ChunkKind,
    pub key: String,
    pub text: String,
}

impl RawEntry {
    pub fn new(chunk: impl Into<ChunkKind>, key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chunk: chunk.into(),
            key: key.into(),
            text: text.into(),
        }
    }

    /// Build an entry from a tag description of the form `key:text`.
    ///
    /// The description is split at the first `:`. A description without a
    /// colon yields an empty key and empty text.
    pub fn from_tag_description(chunk: impl Into<ChunkKind>, description: &str) -> Self {
        let (key, text) = description.split_once(':').unwrap_or(("", ""));
        Self::new(chunk, key, text)
    }
}
