use crate::core::{FieldId, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange {
    pub target: FieldId,
    pub value: Value,
}

impl ValueChange {
    pub fn new(target: impl Into<FieldId>, value: Value) -> Self {
        Self {
            target: target.into(),
            value,
        }
    }
}
