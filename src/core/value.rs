use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    None,
    Text(String),
    Bool(bool),
    Number(i64),
    List(Vec<String>),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(v) => v.trim().is_empty(),
            Self::List(v) => v.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Text form used by text fields and pattern validators.
    pub fn to_text(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Text(v) => v.clone(),
            Self::Bool(v) => v.to_string(),
            Self::Number(v) => v.to_string(),
            Self::List(v) => v.join(", "),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn whitespace_text_counts_as_empty() {
        assert!(Value::Text("   ".to_string()).is_empty());
        assert!(!Value::Text("CV-2024-17".to_string()).is_empty());
        assert!(!Value::Bool(false).is_empty());
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_value(Value::from("Jane Doe")).expect("serialize");
        assert_eq!(json, serde_json::json!("Jane Doe"));
        let json = serde_json::to_value(Value::None).expect("serialize");
        assert_eq!(json, serde_json::Value::Null);
    }
}
