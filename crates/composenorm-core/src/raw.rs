//! The untyped input tree and its total accessors.
//!
//! `RawValue` is the only place in the engine that knows about the shape of
//! loader output. Every field normalizer reads through the accessors below,
//! which never fail: a value of the wrong shape reads as absent.

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// A string-keyed mapping in document order.
pub type RawMapping = IndexMap<String, RawValue>;

/// Shared `Null` handed out by accessors for absent keys.
static NULL: RawValue = RawValue::Null;

/// One node of a loosely-typed compose document.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RawValue {
    /// Explicit null, or an empty YAML value.
    #[default]
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// Any integer in `i64` or `u64` range.
    Integer(i128),
    /// Any other number (`version: 3.8` is the usual source).
    Float(f64),
    /// A string scalar.
    String(String),
    /// An ordered sequence.
    Sequence(Vec<RawValue>),
    /// A string-keyed mapping in document order.
    Mapping(RawMapping),
}

impl RawValue {
    /// Returns the value at `key`, or `Null` when the key is absent or
    /// `self` is not a mapping.
    pub fn get(&self, key: &str) -> &Self {
        self.get_or(key, &NULL)
    }

    /// Returns the value at `key`, or `default` when the key is absent or
    /// `self` is not a mapping.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Self) -> &'a Self {
        match self {
            Self::Mapping(map) => map.get(key).unwrap_or(default),
            _ => default,
        }
    }

    /// Views the value as a list.
    ///
    /// Sequences are returned as-is, `Null` is empty, and any other value
    /// (scalars, and a lone long-form mapping) is a one-element list.
    pub fn as_list(&self) -> &[Self] {
        match self {
            Self::Sequence(items) => items,
            Self::Null => &[],
            other => std::slice::from_ref(other),
        }
    }

    /// Stringifies a scalar; `Null`, sequences, and mappings yield `None`.
    pub fn as_string_or_null(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Integer(n) => Some(n.to_string()),
            Self::Float(f) => Some(render_float(*f)),
            Self::Bool(b) => Some(b.to_string()),
            Self::Null | Self::Sequence(_) | Self::Mapping(_) => None,
        }
    }

    /// Returns the mapping if this is one.
    pub const fn as_mapping(&self) -> Option<&RawMapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns `true` for `Null`.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

/// Whole floats keep one decimal so `3.0` does not collapse to `3`.
#[allow(clippy::float_cmp)]
fn render_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        Self::Integer(n.into())
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<serde_yaml::Value> for RawValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => number(n.as_i64(), n.as_u64(), n.as_f64()),
            Value::String(s) => Self::String(s),
            Value::Sequence(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Mapping(map) => Self::Mapping(
                map.into_iter()
                    .filter_map(|(k, v)| mapping_key(Self::from(k)).map(|k| (k, Self::from(v))))
                    .collect(),
            ),
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => number(n.as_i64(), n.as_u64(), n.as_f64()),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// Integers keep their exact value; only true fractions become floats.
fn number(signed: Option<i64>, unsigned: Option<u64>, float: Option<f64>) -> RawValue {
    match (signed, unsigned) {
        (Some(n), _) => RawValue::Integer(n.into()),
        (None, Some(n)) => RawValue::Integer(n.into()),
        (None, None) => RawValue::Float(float.unwrap_or(f64::NAN)),
    }
}

/// YAML permits non-string keys; scalars are stringified, the rest dropped.
fn mapping_key(key: RawValue) -> Option<String> {
    let name = key.as_string_or_null();
    if name.is_none() {
        tracing::debug!(kind = key.kind(), "dropping mapping entry with non-scalar key");
    }
    name
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => match (i64::try_from(*n), u64::try_from(*n)) {
                (Ok(n), _) => serializer.serialize_i64(n),
                (_, Ok(n)) => serializer.serialize_u64(n),
                _ => serializer.serialize_i128(*n),
            },
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::Sequence(items) => serializer.collect_seq(items),
            Self::Mapping(map) => map.serialize(serializer),
        }
    }
}
