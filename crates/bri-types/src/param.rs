//! The typed parameter tree.
//!
//! A [`Parameter`] is one named node classified from a raw metadata entry or
//! from a value nested inside an entry's JSON. Composite nodes (objects and
//! arrays) own their children; every other node is a leaf.
//!
//! # Invariants
//!
//! - `children` is `Some` exactly when the kind is [`ParamKind::Object`] or
//!   [`ParamKind::Array`].
//! - Every child sits one level below its parent.
//! - Children are sorted by name (ordinal byte order) once the node exists.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::chunk::ChunkKind;
use crate::error::{TypeError, TypeResult};

/// Byte that frames base64 image payloads inside rendered text.
pub const IMAGE_DELIMITER: char = '\0';

/// Line terminator used by every rendering in this workspace.
pub const NL: &str = "\n";

/// The classified payload kind of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Unknown,
    Text,
    Object,
    Array,
    Image,
    Curve,
}

impl ParamKind {
    /// Returns `true` for kinds that own a child list.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }

    /// Returns `true` for kinds whose rendering embeds an image payload.
    pub fn embeds_image(self) -> bool {
        matches!(self, Self::Image | Self::Curve)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Text => "text",
            Self::Object => "object",
            Self::Array => "array",
            Self::Image => "image",
            Self::Curve => "curve",
        };
        f.write_str(name)
    }
}

/// Where a parameter's text came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// A top-level metadata chunk of the given kind.
    FlatText(ChunkKind),
    /// A member or element synthesized from a parent's JSON.
    NestedJson,
}

/// One node of the parameter tree.
///
/// Nodes are immutable once built. Equality is structural: name, value,
/// kind, level and children (in order) must all match. The source kind and
/// any recorded defect do not take part.
#[derive(Clone, Debug, Serialize)]
pub struct Parameter {
    level: u32,
    name: String,
    source: SourceKind,
    raw_value: String,
    kind: ParamKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defect: Option<String>,
}

impl Parameter {
    /// Build a leaf node. The value is stored as given; callers trim it.
    pub fn leaf(
        level: u32,
        source: SourceKind,
        name: impl Into<String>,
        raw_value: impl Into<String>,
        kind: ParamKind,
    ) -> TypeResult<Self> {
        if kind.is_composite() {
            return Err(TypeError::MissingChildren(kind));
        }
        Ok(Self {
            level,
            name: name.into(),
            source,
            raw_value: raw_value.into(),
            kind,
            children: None,
            defect: None,
        })
    }

    /// Build an object or array node from its (unsorted) children.
    ///
    /// The children are sorted by name before the node is returned.
    pub fn composite(
        level: u32,
        source: SourceKind,
        name: impl Into<String>,
        raw_value: impl Into<String>,
        kind: ParamKind,
        mut children: Vec<Parameter>,
    ) -> TypeResult<Self> {
        if !kind.is_composite() {
            return Err(TypeError::UnexpectedChildren(kind));
        }
        if let Some(child) = children.iter().find(|c| c.level != level + 1) {
            return Err(TypeError::LevelMismatch {
                name: child.name.clone(),
                expected: level + 1,
                actual: child.level,
            });
        }
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self {
            level,
            name: name.into(),
            source,
            raw_value: raw_value.into(),
            kind,
            children: Some(children),
            defect: None,
        })
    }

    /// Build an [`ParamKind::Unknown`] node for a payload that could not be
    /// decoded, recording why.
    pub fn unparsed(
        level: u32,
        source: SourceKind,
        name: impl Into<String>,
        raw_value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            level,
            name: name.into(),
            source,
            raw_value: raw_value.into(),
            kind: ParamKind::Unknown,
            children: None,
            defect: Some(reason.into()),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &SourceKind {
        &self.source
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// The sorted children, or `None` for leaf kinds.
    pub fn children(&self) -> Option<&[Parameter]> {
        self.children.as_deref()
    }

    /// Why the payload could not be decoded, if it could not.
    pub fn defect(&self) -> Option<&str> {
        self.defect.as_deref()
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Parameter> {
        let children = self.children.as_ref()?;
        children
            .binary_search_by(|c| c.name.as_str().cmp(name))
            .ok()
            .map(|i| &children[i])
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .unwrap_or_default()
            .iter()
            .map(Parameter::node_count)
            .sum::<usize>()
    }

    /// Number of nodes in this subtree whose rendering embeds an image.
    pub fn image_count(&self) -> usize {
        let own = usize::from(self.kind.embeds_image());
        own + self
            .children()
            .unwrap_or_default()
            .iter()
            .map(Parameter::image_count)
            .sum::<usize>()
    }

    /// The value part of this node's rendered line.
    pub fn value_text(&self) -> Cow<'_, str> {
        match self.kind {
            ParamKind::Unknown => match &self.defect {
                Some(reason) => Cow::Owned(format!("Unknown (Error parsing: {reason})")),
                None => Cow::Borrowed("Unknown"),
            },
            ParamKind::Object | ParamKind::Array => Cow::Borrowed(""),
            ParamKind::Image => Cow::Owned(format!(
                "{IMAGE_DELIMITER}{}{IMAGE_DELIMITER}",
                self.raw_value
            )),
            ParamKind::Text | ParamKind::Curve => Cow::Borrowed(&self.raw_value),
        }
    }

    /// Render this node as `name: value` lines.
    ///
    /// Each line starts with `tab` repeated `level - 1` times followed by
    /// `prefix`. When `with_children` is set, every child's rendering is
    /// appended behind this node's indent, so the first line of a child
    /// carries its parent's indent on top of its own.
    pub fn describe(&self, prefix: &str, with_children: bool, tab: &str) -> String {
        let mut indent = tab.repeat(self.level.saturating_sub(1) as usize);
        indent.push_str(prefix);

        let mut out = String::new();
        out.push_str(&indent);
        out.push_str(&self.name);
        out.push_str(": ");
        out.push_str(&self.value_text());
        out.push_str(NL);

        if with_children {
            for child in self.children().unwrap_or_default() {
                out.push_str(&indent);
                out.push_str(&child.describe(prefix, true, tab));
            }
        }
        out
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.raw_value == other.raw_value
            && self.kind == other.kind
            && self.level == other.level
            && self.children == other.children
    }
}

impl Eq for Parameter {}

/// Indent `text` the way [`Parameter::describe`] indents a node at `level`,
/// and terminate it with a newline.
pub fn indented(text: &str, level: u32, tab: &str) -> String {
    let mut out = tab.repeat(level.saturating_sub(1) as usize);
    out.push_str(text);
    out.push_str(NL);
    out
}
