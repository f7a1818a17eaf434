use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Model or construction year of a car or track.
///
/// Vendor files store the year as a number, as a quoted number, or not at all.
/// Anything that is not a whole number becomes [`Year::Unknown`], which
/// serializes as the string `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Year {
    Known(i32),
    #[default]
    Unknown,
}

impl Year {
    /// Interpret an optional JSON value as a year.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .and_then(|n| i32::try_from(n).ok())
                .map_or(Self::Unknown, Self::Known),
            Some(Value::String(s)) => s.trim().parse().map_or(Self::Unknown, Self::Known),
            _ => Self::Unknown,
        }
    }

    /// The numeric year, if known.
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Known(y) => Some(*y),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(y) => write!(f, "{}", y),
            Self::Unknown => f.write_str(crate::UNKNOWN),
        }
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(y) => serializer.serialize_i32(*y),
            Self::Unknown => serializer.serialize_str(crate::UNKNOWN),
        }
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(Some(&value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_numeric_strings_are_known() {
        assert_eq!(Year::from_value(Some(&json!(2023))), Year::Known(2023));
        assert_eq!(Year::from_value(Some(&json!(" 1998 "))), Year::Known(1998));
        assert_eq!(Year::from_value(Some(&json!(2004.0))), Year::Known(2004));
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(Year::from_value(None), Year::Unknown);
        assert_eq!(Year::from_value(Some(&json!("late 90s"))), Year::Unknown);
        assert_eq!(Year::from_value(Some(&json!(null))), Year::Unknown);
        assert_eq!(Year::from_value(Some(&json!(1999.5))), Year::Unknown);
    }

    #[test]
    fn serializes_as_number_or_placeholder() {
        assert_eq!(serde_json::to_value(Year::Known(2016)).unwrap(), json!(2016));
        assert_eq!(serde_json::to_value(Year::Unknown).unwrap(), json!("Unknown"));
    }
}
