use std::fmt;

use indexmap::IndexMap;
use serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::kind::NodeKind;

/// Any value that can appear in an ESTree graph. Validation accepts arbitrary values so that
/// malformed trees can be represented and rejected instead of refused at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// Full IEEE-754 double, so NaN, infinities and negative zero are representable.
    Number(f64),
    String(String),
    RegExp(RegExpValue),
    Array(Vec<Value>),
    Object(Node),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegExpValue {
    pub pattern: String,
    pub flags: String,
}

/// An object in the ESTree graph. Fields keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    fields: IndexMap<String, Value>,
}

impl Value {
    /// Parse a JSON document with no limit on nesting. Long operator chains nest one level per
    /// operand, so deep trees are common. The parser grows its stack on the heap as needed.
    pub fn from_json_str(contents: &str) -> serde_json::Result<Value> {
        let mut deserializer = serde_json::Deserializer::from_str(contents);
        deserializer.disable_recursion_limit();

        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;

        Ok(value)
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Object(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The node kind of this value, if it is a node of a recognized type.
    pub fn kind(&self) -> Option<NodeKind> {
        self.as_node().and_then(Node::kind)
    }

    /// Short human readable description used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Value::Null => "null".to_owned(),
            Value::Bool(_) => "boolean".to_owned(),
            Value::Number(_) => "number".to_owned(),
            Value::String(_) => "string".to_owned(),
            Value::RegExp(_) => "regular expression".to_owned(),
            Value::Array(_) => "array".to_owned(),
            Value::Object(node) => match node.type_name() {
                Some(type_name) => type_name.to_owned(),
                None => "object".to_owned(),
            },
        }
    }
}

impl Node {
    pub fn new() -> Node {
        Node { fields: IndexMap::new() }
    }

    /// Build a node from its fields. A well-formed ESTree `regex` member replaces the `value` of
    /// the node, since JSON cannot carry a regular expression value directly.
    pub fn from_fields(mut fields: IndexMap<String, Value>) -> Node {
        let regexp = match fields.get("regex") {
            Some(Value::Object(regex)) => match (regex.get("pattern"), regex.get("flags")) {
                (Some(Value::String(pattern)), Some(Value::String(flags))) => {
                    Some(RegExpValue { pattern: pattern.clone(), flags: flags.clone() })
                }
                _ => None,
            },
            _ => None,
        };

        if let Some(regexp) = regexp {
            fields.insert("value".to_owned(), Value::RegExp(regexp));
        }

        Node { fields }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// A field that is present and not `null`. Missing and `null` fields are both absent.
    pub fn child(&self, name: &str) -> Option<&Value> {
        match self.fields.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    pub fn type_name(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }

    pub fn kind(&self) -> Option<NodeKind> {
        self.type_name().and_then(NodeKind::from_type_name)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => Value::Number(number.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(string) => Value::String(string),
            serde_json::Value::Array(values) => {
                Value::Array(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let fields = map
                    .into_iter()
                    .map(|(name, value)| (name, Value::from(value)))
                    .collect();
                Value::Object(Node::from_fields(fields))
            }
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Value {
        Value::Object(node)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Value {
        Value::Number(number)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Value {
        Value::String(string.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Value {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Value {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an ESTree value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Value, E> {
        Ok(Value::Number(value as f64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Value, E> {
        Ok(Value::Number(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Value, E> {
        Ok(Value::String(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }

        Ok(Value::Array(values))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut fields = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            fields.insert(name, value);
        }

        Ok(Value::Object(Node::from_fields(fields)))
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Number(number) => serializer.serialize_f64(*number),
            Value::String(string) => serializer.serialize_str(string),
            // Regular expressions are carried by the sibling `regex` member
            Value::RegExp(_) => serializer.serialize_unit(),
            Value::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Value::Object(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
