//! Input case model
//!
//! An input case is produced by the upstream extractor. Every section is a flat,
//! ordered map of attributes; inferred attributes are stored as a triplet of keys
//! (`type`, `type_confidence`, `type_provenance`).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Sentinel the extractor writes when it classified a value as unknown
pub const UNKNOWN: &str = "unknown";

/// Key suffix carrying an attribute's confidence
pub const CONFIDENCE_SUFFIX: &str = "_confidence";

/// Key suffix carrying an attribute's provenance
pub const PROVENANCE_SUFFIX: &str = "_provenance";

/// The five top-level sections of an input case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Nanoparticle core (type, surface charge)
    Nanoparticle,
    /// Ligand (type, polarity, charge)
    Ligand,
    /// Cargo biomolecule (type)
    Biomolecule,
    /// Surface coating (material, charge)
    Surface,
    /// Pass-through identifying metadata
    Context,
}

impl SectionKind {
    /// All sections, in record order
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Nanoparticle,
        SectionKind::Ligand,
        SectionKind::Biomolecule,
        SectionKind::Surface,
        SectionKind::Context,
    ];

    /// Section name as it appears in the record
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Nanoparticle => "nanoparticle",
            SectionKind::Ligand => "ligand",
            SectionKind::Biomolecule => "biomolecule",
            SectionKind::Surface => "surface",
            SectionKind::Context => "context",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reading of a single attribute value
///
/// The extractor overloads `"unknown"` as both a classification and an implicit
/// null. `Observed` keeps those apart from a field that is simply absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observed<'a> {
    /// Key absent or explicitly `null`
    Missing,
    /// The `"unknown"` sentinel
    Unknown,
    /// A text value other than the sentinel
    Known(&'a str),
    /// A non-text value (number, bool, array, object)
    Other(&'a Value),
}

impl<'a> Observed<'a> {
    fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Observed::Missing,
            Some(Value::String(s)) if s == UNKNOWN => Observed::Unknown,
            Some(Value::String(s)) => Observed::Known(s.as_str()),
            Some(other) => Observed::Other(other),
        }
    }

    /// True when the value is text equal to `expected`
    pub fn is(&self, expected: &str) -> bool {
        matches!(self, Observed::Known(s) if *s == expected)
    }

    /// True when the value is text equal to any of `candidates`
    pub fn is_one_of(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|c| self.is(c))
    }

    /// True when the value is neither missing nor the unknown sentinel
    pub fn is_set(&self) -> bool {
        matches!(self, Observed::Known(_) | Observed::Other(_))
    }

    /// Case-insensitive substring test on text values
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        match self {
            Observed::Known(s) => s.to_lowercase().contains(&needle.to_lowercase()),
            _ => false,
        }
    }

    /// Text value, if any
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Observed::Known(s) => Some(s),
            Observed::Unknown => Some(UNKNOWN),
            _ => None,
        }
    }
}

/// Triplet view of one inferred attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute<'a> {
    /// The attribute value
    pub value: Observed<'a>,
    /// `<name>_confidence`, when numeric
    pub confidence: Option<f64>,
    /// `<name>_provenance`, when text
    pub provenance: Option<&'a str>,
}

/// One section of an input case
///
/// Keys keep their insertion order. A missing or `null` section deserializes
/// to an empty map, so conditions can always look keys up directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Section(Map<String, Value>);

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Option::<Map<String, Value>>::deserialize(deserializer)?;
        Ok(Self(fields.unwrap_or_default()))
    }
}

impl Section {
    /// Create an empty section
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a raw key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw value lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Read a value as an [`Observed`]
    pub fn text(&self, key: &str) -> Observed<'_> {
        Observed::from_value(self.0.get(key))
    }

    /// Read the value/confidence/provenance triplet of `name`
    pub fn attribute(&self, name: &str) -> Attribute<'_> {
        let confidence = self
            .0
            .get(&format!("{name}{CONFIDENCE_SUFFIX}"))
            .and_then(Value::as_f64);
        let provenance = self
            .0
            .get(&format!("{name}{PROVENANCE_SUFFIX}"))
            .and_then(Value::as_str);

        Attribute {
            value: self.text(name),
            confidence,
            provenance,
        }
    }

    /// Write all three keys of an inferred attribute
    pub fn set_attribute(&mut self, name: &str, value: &str, confidence: f64, provenance: &str) {
        self.insert(name, value);
        self.insert(format!("{name}{CONFIDENCE_SUFFIX}"), confidence);
        self.insert(format!("{name}{PROVENANCE_SUFFIX}"), provenance);
    }

    /// Builder-style [`Section::set_attribute`]
    pub fn with_attribute(mut self, name: &str, value: &str, confidence: f64, provenance: &str) -> Self {
        self.set_attribute(name, value, confidence, provenance);
        self
    }

    /// Iterate keys and values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the section has no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Section {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A structured record describing one formulation to classify
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputCase {
    /// Nanoparticle core attributes
    #[serde(default)]
    pub nanoparticle: Section,
    /// Ligand attributes
    #[serde(default)]
    pub ligand: Section,
    /// Cargo biomolecule attributes
    #[serde(default)]
    pub biomolecule: Section,
    /// Surface coating attributes
    #[serde(default)]
    pub surface: Section,
    /// Identifying metadata, ignored by the confidence model
    #[serde(default)]
    pub context: Section,
}

impl InputCase {
    /// Create a case with all sections empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a section by kind
    pub fn section(&self, kind: SectionKind) -> &Section {
        match kind {
            SectionKind::Nanoparticle => &self.nanoparticle,
            SectionKind::Ligand => &self.ligand,
            SectionKind::Biomolecule => &self.biomolecule,
            SectionKind::Surface => &self.surface,
            SectionKind::Context => &self.context,
        }
    }

    /// Mutably borrow a section by kind
    pub fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        match kind {
            SectionKind::Nanoparticle => &mut self.nanoparticle,
            SectionKind::Ligand => &mut self.ligand,
            SectionKind::Biomolecule => &mut self.biomolecule,
            SectionKind::Surface => &mut self.surface,
            SectionKind::Context => &mut self.context,
        }
    }

    /// `context.display_name`
    pub fn display_name(&self) -> Observed<'_> {
        self.context.text("display_name")
    }
}
