//! Raw values as they arrive from the caller
//!
//! Recipe records carry amounts either as JSON numbers or as free text
//! ("1 1/2", "0.25"). Absence is modelled with `Option<RawValue>`.

use serde::{Deserialize, Serialize};

/// An amount before parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Whitespace-only text carries no amount
    pub fn is_blank(&self) -> bool {
        matches!(self, RawValue::Text(s) if s.trim().is_empty())
    }
}

// ========== Conversions ==========

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(RawValue::from(2), RawValue::Number(2.0));
        assert_eq!(RawValue::from("1 1/2"), RawValue::Text("1 1/2".to_string()));
        assert_eq!(RawValue::from(String::from("3/4")), RawValue::Text("3/4".to_string()));
    }

    #[test]
    fn test_is_blank() {
        assert!(RawValue::from("   ").is_blank());
        assert!(!RawValue::from("0").is_blank());
        assert!(!RawValue::from(0.0).is_blank());
    }

    #[test]
    fn test_untagged_deserialize() {
        let n: RawValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(n, RawValue::Number(2.5));
        let t: RawValue = serde_json::from_str("\"1/2\"").unwrap();
        assert_eq!(t, RawValue::Text("1/2".to_string()));
    }
}
