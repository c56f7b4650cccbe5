//! Payload validation shared by the forum entities.
//!
//! Request bodies arrive as loose JSON. Each entity declares the string
//! fields it needs; [`Payload::require`] checks presence for every field
//! first and types second, so a payload that is both incomplete and mistyped
//! is reported as incomplete.

use serde_json::{Map, Value};
use std::fmt;

/// Which entity a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    NewThread,
    NewComment,
    NewReply,
}

impl EntityKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NewThread => "NEW_THREAD",
            Self::NewComment => "NEW_COMMENT",
            Self::NewReply => "NEW_REPLY",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            Self::NewThread => "thread",
            Self::NewComment => "comment",
            Self::NewReply => "reply",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    MissingProperty,
    WrongType,
}

impl ValidationKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            Self::WrongType => "NOT_MEET_DATA_TYPE_SPECIFICATIONS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    pub entity: EntityKind,
    pub kind: ValidationKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity.code(), self.kind.code())
    }
}

impl ValidationError {
    pub fn new(entity: EntityKind, kind: ValidationKind) -> Self {
        Self { entity, kind }
    }

    pub fn missing(entity: EntityKind) -> Self {
        Self::new(entity, ValidationKind::MissingProperty)
    }

    pub fn wrong_type(entity: EntityKind) -> Self {
        Self::new(entity, ValidationKind::WrongType)
    }

    /// Client-facing message for this error code.
    pub fn message(&self) -> String {
        let noun = self.entity.noun();
        match self.kind {
            ValidationKind::MissingProperty => {
                format!("cannot create a new {noun} because a required property is missing")
            }
            ValidationKind::WrongType => {
                format!("cannot create a new {noun} because a property has the wrong data type")
            }
        }
    }
}

/// A borrowed JSON object being validated for one entity.
pub struct Payload<'a> {
    entity: EntityKind,
    fields: &'a Map<String, Value>,
}

impl<'a> Payload<'a> {
    /// Anything other than a JSON object carries none of the needed properties.
    pub fn new(entity: EntityKind, value: &'a Value) -> Result<Self, ValidationError> {
        let fields = value
            .as_object()
            .ok_or_else(|| ValidationError::missing(entity))?;
        Ok(Self { entity, fields })
    }

    /// Null and empty-string values count as absent.
    pub fn require(&self, fields: &[&str]) -> Result<(), ValidationError> {
        let absent = fields.iter().any(|name| match self.fields.get(*name) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        });
        if absent {
            return Err(ValidationError::missing(self.entity));
        }

        let mistyped = fields
            .iter()
            .any(|name| !self.fields.get(*name).is_some_and(Value::is_string));
        if mistyped {
            return Err(ValidationError::wrong_type(self.entity));
        }

        Ok(())
    }

    pub fn string(&self, name: &str) -> Result<String, ValidationError> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ValidationError::wrong_type(self.entity))
    }
}

/// Checks that every identity-like value handed in by the caller is non-empty.
pub fn require_non_empty(entity: EntityKind, values: &[&str]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.is_empty()) {
        return Err(ValidationError::missing(entity));
    }
    Ok(())
}
