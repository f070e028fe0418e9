//! Kind inference and recursive decomposition of parameter text.
//!
//! Classification never fails: a payload that claims to be JSON but cannot be
//! decoded becomes an unknown node carrying the reason, and the enclosing
//! build carries on.

use bri_curve::{compose_display, CurveDescriptor, CurveRenderer, PlaceholderRenderer};
use bri_types::{ChunkKind, ParamKind, Parameter, SourceKind};
use serde_json::Value;
use tracing::warn;

use crate::config::ClassifierConfig;
use crate::error::{TreeError, TreeResult};

static PLACEHOLDER: PlaceholderRenderer = PlaceholderRenderer;

/// Classifies raw parameter text into typed [`Parameter`] trees.
pub struct Classifier<'r> {
    config: ClassifierConfig,
    renderer: &'r dyn CurveRenderer,
}

impl Classifier<'static> {
    /// A classifier that embeds empty image frames for curves.
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            renderer: &PLACEHOLDER,
        }
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl<'r> Classifier<'r> {
    /// A classifier that asks `renderer` for curve images.
    pub fn with_renderer(config: ClassifierConfig, renderer: &'r dyn CurveRenderer) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one piece of parameter text, decomposing it recursively.
    pub fn classify(&self, level: u32, source: SourceKind, name: &str, raw_text: &str) -> Parameter {
        let text = raw_text.trim();
        let kind = self.infer_kind(&source, name, text);
        match self.build(level, source.clone(), name, text, kind) {
            Ok(param) => param,
            Err(err) => {
                warn!(param = name, depth = level, %kind, error = %err, "could not decode parameter payload");
                Parameter::unparsed(level, source, name, text, err.to_string())
            }
        }
    }

    /// Decide the kind of a trimmed piece of text.
    pub fn infer_kind(&self, source: &SourceKind, name: &str, text: &str) -> ParamKind {
        match source {
            SourceKind::FlatText(ChunkKind::PlainText) => ParamKind::Text,
            SourceKind::FlatText(ChunkKind::CompressedText) => {
                if text.starts_with('{') {
                    ParamKind::Object
                } else if text.chars().count() <= self.config.text_threshold {
                    ParamKind::Text
                } else {
                    ParamKind::Image
                }
            }
            SourceKind::NestedJson => {
                if text.starts_with('{') {
                    if name.contains(self.config.curve_marker.as_str()) {
                        ParamKind::Curve
                    } else {
                        ParamKind::Object
                    }
                } else if text.starts_with('[') {
                    ParamKind::Array
                } else {
                    ParamKind::Text
                }
            }
            SourceKind::FlatText(ChunkKind::Other(_)) => ParamKind::Unknown,
        }
    }

    fn build(
        &self,
        level: u32,
        source: SourceKind,
        name: &str,
        text: &str,
        kind: ParamKind,
    ) -> TreeResult<Parameter> {
        match kind {
            ParamKind::Object => {
                let children = self.object_children(level, text)?;
                Ok(Parameter::composite(level, source, name, text, kind, children)?)
            }
            ParamKind::Array => {
                let children = self.array_children(level, name, text)?;
                Ok(Parameter::composite(level, source, name, text, kind, children)?)
            }
            ParamKind::Curve => {
                let curve = CurveDescriptor::parse(text)?;
                let display = compose_display(&curve, &self.config.curve_tab, self.renderer)?;
                Ok(Parameter::leaf(level, source, name, display, kind)?)
            }
            ParamKind::Unknown | ParamKind::Text | ParamKind::Image => {
                Ok(Parameter::leaf(level, source, name, text, kind)?)
            }
        }
    }

    fn object_children(&self, level: u32, text: &str) -> TreeResult<Vec<Parameter>> {
        let members = match serde_json::from_str::<Value>(text)? {
            Value::Object(members) => members,
            other => {
                return Err(TreeError::UnexpectedShape {
                    expected: "object",
                    found: json_type_name(&other),
                })
            }
        };
        Ok(members
            .iter()
            .map(|(key, value)| {
                self.classify(level + 1, SourceKind::NestedJson, key, &member_text(value))
            })
            .collect())
    }

    /// Object elements are named `[n]`, counting object elements only.
    fn array_children(&self, level: u32, name: &str, text: &str) -> TreeResult<Vec<Parameter>> {
        let elements = match serde_json::from_str::<Value>(text)? {
            Value::Array(elements) => elements,
            other => {
                return Err(TreeError::UnexpectedShape {
                    expected: "array",
                    found: json_type_name(&other),
                })
            }
        };
        let mut children = Vec::new();
        let mut objects = 0usize;
        for element in &elements {
            match element {
                Value::Object(_) => {
                    objects += 1;
                    let label = format!("[{objects}]");
                    children.push(self.classify(
                        level + 1,
                        SourceKind::NestedJson,
                        &label,
                        &member_text(element),
                    ));
                }
                other => {
                    warn!(array = name, token = json_type_name(other), "skipping unexpected array element");
                }
            }
        }
        Ok(children)
    }
}

/// Re-serialize a JSON value the way nested parameter text is stored:
/// strings without quotes, containers pretty-printed, `null` as nothing.
fn member_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Object(_) | Value::Array(_) => format!("{value:#}"),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
