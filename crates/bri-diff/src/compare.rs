//! The merged two-sided parameter tree.
//!
//! Both presets are folded into one [`CompareMap`] keyed by parameter name.
//! Each [`CompareEntry`] borrows the parameter found at that key on the left
//! (first preset) and/or the right (second preset) and owns a child map built
//! the same way. A side's children are folded in whether or not the other
//! side has the parent key, so a key can gain its counterpart below a parent
//! that exists on one side only.

use std::collections::btree_map::{self, BTreeMap};

use bri_types::{indented, ParamKind, Parameter};
use serde::Serialize;

use crate::config::ReportConfig;
use crate::summary::{DiffSummary, Verdict};

/// Which preset a parameter belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The 1-based number used in labels and markers.
    pub fn number(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
        }
    }

    /// Map `1` / `2` onto a side.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Left),
            2 => Some(Self::Right),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One key of the merged tree.
#[derive(Clone, Debug)]
pub struct CompareEntry<'a> {
    left: Option<&'a Parameter>,
    right: Option<&'a Parameter>,
    children: CompareMap<'a>,
}

impl<'a> CompareEntry<'a> {
    fn new(side: Side, param: &'a Parameter) -> Self {
        let mut entry = Self {
            left: None,
            right: None,
            children: CompareMap::new(),
        };
        entry.set(side, param);
        entry
    }

    fn set(&mut self, side: Side, param: &'a Parameter) {
        match side {
            Side::Left => self.left = Some(param),
            Side::Right => self.right = Some(param),
        }
    }

    pub fn left(&self) -> Option<&'a Parameter> {
        self.left
    }

    pub fn right(&self) -> Option<&'a Parameter> {
        self.right
    }

    pub fn get(&self, side: Side) -> Option<&'a Parameter> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn children(&self) -> &CompareMap<'a> {
        &self.children
    }

    /// The parameter that decides level and kind: left if present, else right.
    pub fn anchor(&self) -> Option<&'a Parameter> {
        self.left.or(self.right)
    }

    pub fn level(&self) -> Option<u32> {
        self.anchor().map(Parameter::level)
    }

    pub fn kind(&self) -> Option<ParamKind> {
        self.anchor().map(Parameter::kind)
    }

    /// Returns `true` when both sides are present and structurally equal,
    /// children included.
    pub fn is_deep_equal(&self) -> bool {
        matches!((self.left, self.right), (Some(l), Some(r)) if l == r)
    }

    /// Render one side of this entry without its children.
    ///
    /// A missing side is rendered as a `<Not in N>` marker at the level of the
    /// side that is present.
    pub fn side_text(&self, side: Side, config: &ReportConfig) -> String {
        let label = config.label(side);
        match (self.get(side), self.get(side.other())) {
            (Some(param), _) => param.describe(label, false, &config.diff_tab),
            (None, Some(other)) => indented(
                &format!("{label}{}: <Not in {}>", other.name(), side.number()),
                other.level(),
                &config.diff_tab,
            ),
            (None, None) => String::new(),
        }
    }

    /// Returns `true` when the single-level renderings of the two sides differ.
    pub fn single_level_differs(&self, config: &ReportConfig) -> bool {
        texts_differ(
            &self.side_text(Side::Left, config),
            &self.side_text(Side::Right, config),
            config,
        )
    }

    /// Classify this key by the same rules the difference report uses.
    pub fn verdict(&self, config: &ReportConfig) -> Verdict {
        match (self.left, self.right) {
            (Some(_), None) => Verdict::LeftOnly,
            (None, Some(_)) => Verdict::RightOnly,
            _ if self.single_level_differs(config) => Verdict::Different,
            _ if self.kind() == Some(ParamKind::Object) && !self.is_deep_equal() => {
                Verdict::NestedDifferent
            }
            _ => Verdict::Same,
        }
    }
}

/// Compare two side renderings, ignoring everything up to and including
/// each side's label.
pub(crate) fn texts_differ(left: &str, right: &str, config: &ReportConfig) -> bool {
    strip_label(left, &config.left_label) != strip_label(right, &config.right_label)
}

fn strip_label<'t>(text: &'t str, label: &str) -> &'t str {
    match text.find(label) {
        Some(index) => &text[index + label.len()..],
        None => text,
    }
}

/// The merged tree: entries keyed by parameter name in natural string order.
#[derive(Clone, Debug, Default)]
pub struct CompareMap<'a> {
    entries: BTreeMap<&'a str, CompareEntry<'a>>,
}

impl<'a> CompareMap<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every left root, then every right root, into a fresh map.
    pub fn build(left: &'a [Parameter], right: &'a [Parameter]) -> Self {
        let mut map = Self::new();
        for param in left {
            map.merge(Side::Left, param);
        }
        for param in right {
            map.merge(Side::Right, param);
        }
        map
    }

    /// Fold `param` and, recursively, its children into this map on `side`.
    ///
    /// An existing entry's slot for `side` is overwritten, so at most one tree
    /// per side may be merged into a map.
    pub fn merge(&mut self, side: Side, param: &'a Parameter) {
        let entry = match self.entries.entry(param.name()) {
            btree_map::Entry::Occupied(occupied) => {
                let entry = occupied.into_mut();
                entry.set(side, param);
                entry
            }
            btree_map::Entry::Vacant(vacant) => vacant.insert(CompareEntry::new(side, param)),
        };
        for child in param.children().unwrap_or_default() {
            entry.children.merge(side, child);
        }
    }

    pub fn get(&self, key: &str) -> Option<&CompareEntry<'a>> {
        self.entries.get(key)
    }

    /// Entries in natural key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &CompareEntry<'a>)> + '_ {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tally the verdict of every key, recursively.
    pub fn summary(&self, config: &ReportConfig) -> DiffSummary {
        let mut summary = DiffSummary::default();
        self.tally(config, &mut summary);
        summary
    }

    fn tally(&self, config: &ReportConfig, summary: &mut DiffSummary) {
        for entry in self.entries.values() {
            summary.record(entry.verdict(config));
            entry.children.tally(config, summary);
        }
    }

    /// Every key whose verdict is not [`Verdict::Same`], as `/`-joined paths.
    pub fn differences(&self, config: &ReportConfig) -> Vec<(String, Verdict)> {
        let mut out = Vec::new();
        self.collect_differences("", config, &mut out);
        out
    }

    fn collect_differences(&self, parent: &str, config: &ReportConfig, out: &mut Vec<(String, Verdict)>) {
        for (key, entry) in &self.entries {
            let path = if parent.is_empty() {
                (*key).to_string()
            } else {
                format!("{parent}/{key}")
            };
            let verdict = entry.verdict(config);
            if verdict.is_difference() {
                out.push((path.clone(), verdict));
            }
            entry.children.collect_differences(&path, config, out);
        }
    }
}
