use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

/// Identifier of one entity, taken from its id attribute.
///
/// Servers hand out both numeric and string keys, so either is accepted.
/// Numbers compare by value: `1` and `1.0` are the same id, and integers
/// past `i64::MAX` still identify their entity. Any other JSON type in the
/// id attribute means the entity has no id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceId {
    Int(i64),
    /// Only for integers above `i64::MAX`.
    UInt(u64),
    /// Non-integral number, held as its `f64` bit pattern.
    Float(u64),
    Str(String),
}

impl ResourceId {
    /// Extracts an id from a JSON value (number or string only).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::from_number(n)),
            Value::String(s) => Some(ResourceId::Str(s.clone())),
            _ => None,
        }
    }

    fn from_number(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            ResourceId::Int(i)
        } else if let Some(u) = n.as_u64() {
            ResourceId::UInt(u)
        } else {
            ResourceId::from(n.as_f64().unwrap_or(f64::NAN))
        }
    }

    /// Reads an object key back into an id the way a numeric id prints.
    pub fn from_key(key: String) -> Self {
        if let Ok(i) = key.parse::<i64>() {
            return ResourceId::Int(i);
        }
        if let Ok(u) = key.parse::<u64>() {
            return ResourceId::UInt(u);
        }
        match key.parse::<f64>() {
            Ok(f) if f.is_finite() && f.to_string() == key => ResourceId::from(f),
            _ => ResourceId::Str(key),
        }
    }

    /// The numeric value of a non-integral id.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ResourceId::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResourceId::Int(n) => serializer.serialize_i64(*n),
            ResourceId::UInt(n) => serializer.serialize_u64(*n),
            ResourceId::Float(bits) => serializer.serialize_f64(f64::from_bits(*bits)),
            ResourceId::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ResourceId::from_value(&value)
            .ok_or_else(|| de::Error::custom(format!("expected a number or string id, got {value}")))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Int(n) => write!(f, "{n}"),
            ResourceId::UInt(n) => write!(f, "{n}"),
            ResourceId::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            ResourceId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        ResourceId::Int(id)
    }
}

impl From<i32> for ResourceId {
    fn from(id: i32) -> Self {
        ResourceId::Int(i64::from(id))
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        ResourceId::Int(i64::from(id))
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        i64::try_from(id).map_or(ResourceId::UInt(id), ResourceId::Int)
    }
}

/// Integral values land in the integer variants so `2.0` matches `2`.
impl From<f64> for ResourceId {
    fn from(id: f64) -> Self {
        const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
        const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;
        if id.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&id) {
            ResourceId::Int(id as i64)
        } else if id.fract() == 0.0 && (0.0..TWO_POW_64).contains(&id) {
            ResourceId::UInt(id as u64)
        } else {
            ResourceId::Float(id.to_bits())
        }
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId::Str(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId::Str(id)
    }
}

impl From<ResourceId> for Value {
    fn from(id: ResourceId) -> Self {
        match id {
            ResourceId::Int(n) => Value::from(n),
            ResourceId::UInt(n) => Value::from(n),
            ResourceId::Float(bits) => Value::from(f64::from_bits(bits)),
            ResourceId::Str(s) => Value::String(s),
        }
    }
}
