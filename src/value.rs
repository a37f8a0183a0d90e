//! Configuration values
//!
//! Every stored value is exactly one of a scalar leaf, an atomic list leaf,
//! or a mapping whose named children path traversal descends into. A mapping
//! also carries an optional self value in its own slot, separate from the
//! named children, so no key segment can ever address it by name.

use serde::{Deserialize, Deserializer};

/// Opaque leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// A value stored in a configuration tree
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Leaf value
    Scalar(Scalar),
    /// Ordered sequence; always an atomic leaf, never traversed by path
    List(Vec<Value>),
    /// Branch node with an optional self value and named children
    Mapping(Mapping),
}

/// Branch node of a configuration tree
///
/// Children keep insertion order. Replacing an existing child keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    value: Option<Box<Value>>,
    children: Vec<(String, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored at this node itself
    pub fn self_value(&self) -> Option<&Value> {
        self.value.as_deref()
    }

    pub fn set_self_value(&mut self, value: Value) {
        self.value = Some(Box::new(value));
    }

    pub fn take_self_value(&mut self) -> Option<Value> {
        self.value.take().map(|boxed| *boxed)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.children
            .iter_mut()
            .find(|(child, _)| child == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Insert or replace a named child, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.children[idx].1, value)),
            None => {
                self.children.push((name, value));
                None
            }
        }
    }

    /// Remove a named child together with everything below it.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let idx = self.position(name)?;
        Some(self.children.remove(idx).1)
    }

    /// Named children in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.children
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of named children (the self value is not counted)
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when the node has neither children nor a self value
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.value.is_none()
    }

    pub fn clear(&mut self) {
        self.value = None;
        self.children.clear();
    }

    /// Named child as a mutable mapping, creating it if missing.
    ///
    /// A child currently holding a scalar or list is replaced by an empty
    /// mapping; the previous value is discarded.
    pub(crate) fn child_mapping_mut(&mut self, name: &str) -> &mut Mapping {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.children
                    .push((name.to_string(), Value::Mapping(Mapping::new())));
                self.children.len() - 1
            }
        };

        let slot = &mut self.children[idx].1;
        if !slot.is_mapping() {
            *slot = Value::Mapping(Mapping::new());
        }
        match slot {
            Value::Mapping(mapping) => mapping,
            _ => unreachable!("slot was just replaced by a mapping"),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|(child, _)| child == name)
    }
}

/// Consumes the named children in insertion order; the self value is dropped.
impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (name, value) in iter {
            mapping.insert(name, value);
        }
        mapping
    }
}

impl Value {
    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Scalar(Scalar::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Scalar(Scalar::Float(f)) => Some(*f),
            Value::Scalar(Scalar::Integer(i)) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Value::Mapping(mapping)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

macro_rules! integer_into_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Scalar(Scalar::Integer(i64::from(i)))
                }
            }
        )*
    };
}

integer_into_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Scalar(Scalar::Float(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_else(Value::null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => i.into(),
                // u64 beyond i64::MAX and all non-integers
                None => n.as_f64().map(Value::from).unwrap_or_else(Value::null),
            },
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(map.into_iter().collect()),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(toml: toml::Value) -> Self {
        match toml {
            toml::Value::String(s) => s.into(),
            toml::Value::Integer(i) => i.into(),
            toml::Value::Float(f) => f.into(),
            toml::Value::Boolean(b) => b.into(),
            toml::Value::Datetime(dt) => dt.to_string().into(),
            toml::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            toml::Value::Table(table) => Value::Mapping(table.into_iter().collect()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)
            .map(|map| map.into_iter().collect())
    }
}
