//! Core types for QTN
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Wire labels, ordered wire sets and the complex precision of a device.

use crate::error::{QtnError, QtnResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Rotation angle in radians
/// Gantree: Angle // pub type Angle = f64
pub type Angle = f64;

/// Parameter vector of an operation
pub type ParamVec = Vec<f64>;

// ============================================================================
// WireLabel
// ============================================================================

/// Hashable wire label: integers or names
/// Gantree: WireLabel // 와이어 라벨
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireLabel {
    /// Integer label (the usual case)
    Int(i64),
    /// Named label
    Str(String),
}

impl fmt::Display for WireLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireLabel::Int(i) => write!(f, "{}", i),
            WireLabel::Str(s) => write!(f, "'{}'", s),
        }
    }
}

macro_rules! int_wire_label {
    ($($t:ty),*) => {
        $(
            impl From<$t> for WireLabel {
                fn from(value: $t) -> Self {
                    WireLabel::Int(value as i64)
                }
            }
        )*
    };
}

int_wire_label!(i32, i64, u32, usize);

impl From<&str> for WireLabel {
    fn from(value: &str) -> Self {
        WireLabel::Str(value.to_string())
    }
}

impl From<String> for WireLabel {
    fn from(value: String) -> Self {
        WireLabel::Str(value)
    }
}

// ============================================================================
// Wires (ordered set)
// ============================================================================

/// Ordered set of wire labels
///
/// Order is insertion order and is what a backend uses for indexing.
/// Building from an iterator keeps the first occurrence of each label;
/// [`Wires::new`] rejects duplicates instead.
/// Gantree: Wires // 순서 있는 와이어 집합
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireList", into = "WireList")]
pub struct Wires {
    labels: Vec<WireLabel>,
}

/// Serialized wire list, checked through [`Wires::new`] on the way in
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct WireList(Vec<WireLabel>);

impl TryFrom<WireList> for Wires {
    type Error = QtnError;

    fn try_from(list: WireList) -> QtnResult<Self> {
        Wires::new(list.0)
    }
}

impl From<Wires> for WireList {
    fn from(wires: Wires) -> Self {
        WireList(wires.labels)
    }
}

impl Wires {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create from explicit labels, rejecting duplicates
    pub fn new<I, L>(labels: I) -> QtnResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<WireLabel>,
    {
        let mut wires = Self::empty();
        for label in labels {
            let label = label.into();
            if wires.contains(&label) {
                return Err(QtnError::InvalidWires(format!(
                    "wire {} appears more than once",
                    label
                )));
            }
            wires.labels.push(label);
        }
        Ok(wires)
    }

    /// Empty wire set
    pub fn empty() -> Self {
        Self { labels: Vec::new() }
    }

    /// Consecutive integer wires `0..count`
    pub fn range(count: usize) -> Self {
        Self {
            labels: (0..count).map(WireLabel::from).collect(),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of wires
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if there are no wires
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate labels in order
    pub fn iter(&self) -> std::slice::Iter<'_, WireLabel> {
        self.labels.iter()
    }

    /// Labels as a slice
    pub fn labels(&self) -> &[WireLabel] {
        &self.labels
    }

    /// Membership test
    pub fn contains(&self, label: &WireLabel) -> bool {
        self.labels.contains(label)
    }

    /// Position of a label
    pub fn index_of(&self, label: &WireLabel) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Check if every wire of `other` is in `self`
    pub fn contains_all(&self, other: &Wires) -> bool {
        other.iter().all(|l| self.contains(l))
    }

    /// Wires of `self` that are not in `other`, in order
    pub fn difference(&self, other: &Wires) -> Wires {
        self.iter()
            .filter(|l| !other.contains(l))
            .cloned()
            .collect()
    }

    // ========================================================================
    // Combinators
    // ========================================================================

    /// Union preserving first-appearance order
    pub fn union(&self, other: &Wires) -> Wires {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Union of many wire sets
    pub fn all_wires<'a>(sets: impl IntoIterator<Item = &'a Wires>) -> Wires {
        sets.into_iter().flat_map(|w| w.iter()).cloned().collect()
    }

    /// Append a label if it is not present yet
    pub fn insert(&mut self, label: WireLabel) -> bool {
        if self.contains(&label) {
            false
        } else {
            self.labels.push(label);
            true
        }
    }
}

impl FromIterator<WireLabel> for Wires {
    fn from_iter<T: IntoIterator<Item = WireLabel>>(iter: T) -> Self {
        let mut wires = Wires::empty();
        for label in iter {
            wires.insert(label);
        }
        wires
    }
}

impl<'a> IntoIterator for &'a Wires {
    type Item = &'a WireLabel;
    type IntoIter = std::slice::Iter<'a, WireLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

impl fmt::Display for Wires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.labels.iter().map(|l| l.to_string()).collect();
        write!(f, "Wires([{}])", labels.join(", "))
    }
}

macro_rules! single_wire {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Wires {
                fn from(value: $t) -> Self {
                    Wires { labels: vec![WireLabel::from(value)] }
                }
            }
        )*
    };
}

single_wire!(i32, i64, u32, usize, &str, String);

impl From<WireLabel> for Wires {
    fn from(value: WireLabel) -> Self {
        Wires {
            labels: vec![value],
        }
    }
}

impl<const N: usize> From<[usize; N]> for Wires {
    fn from(value: [usize; N]) -> Self {
        value.into_iter().map(WireLabel::from).collect()
    }
}

impl From<&[usize]> for Wires {
    fn from(value: &[usize]) -> Self {
        value.iter().copied().map(WireLabel::from).collect()
    }
}

impl From<Vec<usize>> for Wires {
    fn from(value: Vec<usize>) -> Self {
        value.into_iter().map(WireLabel::from).collect()
    }
}

impl From<Vec<WireLabel>> for Wires {
    fn from(value: Vec<WireLabel>) -> Self {
        value.into_iter().collect()
    }
}

// ============================================================================
// CDtype
// ============================================================================

/// Complex precision of device results and tensors
/// Gantree: CDtype // 복소수 정밀도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CDtype {
    /// Two 32-bit floats
    Complex64,
    /// Two 64-bit floats
    #[default]
    Complex128,
}

impl CDtype {
    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            CDtype::Complex64 => "complex64",
            CDtype::Complex128 => "complex128",
        }
    }

    /// Total size in bits
    pub fn bits(&self) -> u32 {
        match self {
            CDtype::Complex64 => 64,
            CDtype::Complex128 => 128,
        }
    }

    /// Round a real result to the precision of this dtype
    pub fn round(&self, value: f64) -> f64 {
        match self {
            CDtype::Complex64 => value as f32 as f64,
            CDtype::Complex128 => value,
        }
    }
}

impl FromStr for CDtype {
    type Err = QtnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .trim()
            .trim_start_matches("numpy.")
            .trim_start_matches("np.");
        match name {
            "complex64" => Ok(CDtype::Complex64),
            "complex128" => Ok(CDtype::Complex128),
            _ => Err(QtnError::InvalidDataType(s.to_string())),
        }
    }
}

impl fmt::Display for CDtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
