use crate::utils::error::{Result, RosterError};
use serde_json::Value;

/// One individual on the roster.
///
/// The fields are private so that every `Person` in circulation has gone
/// through [`Person::new`] or [`Person::from_value_at`]: both reject blank
/// text fields, and `age` cannot be negative by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
    occupation: String,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, occupation: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let occupation = occupation.into();
        for (field, value) in [("name", &name), ("occupation", &occupation)] {
            if is_blank(value) {
                return Err(RosterError::InvalidPerson {
                    field: field.to_string(),
                    reason: BLANK_TEXT.to_string(),
                });
            }
        }
        Ok(Self {
            name,
            age,
            occupation,
        })
    }

    /// Checks an untyped value against the `Person` shape. `index` is the
    /// record's position in its source and is only used for error reporting.
    pub fn from_value_at(index: usize, value: &Value) -> Result<Self> {
        let fields = value.as_object().ok_or_else(|| {
            RosterError::shape_mismatch(
                index,
                "<record>",
                format!("expected an object, found {}", type_name(value)),
            )
        })?;

        let name = text_field(index, fields, "name")?;
        let age = age_field(index, fields)?;
        let occupation = text_field(index, fields, "occupation")?;

        Ok(Self {
            name,
            age,
            occupation,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn occupation(&self) -> &str {
        &self.occupation
    }
}

impl TryFrom<&Value> for Person {
    type Error = RosterError;

    fn try_from(value: &Value) -> Result<Self> {
        Person::from_value_at(0, value)
    }
}

const BLANK_TEXT: &str = "must be a non-empty string";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn text_field(index: usize, fields: &serde_json::Map<String, Value>, field: &str) -> Result<String> {
    match fields.get(field) {
        Some(Value::String(s)) if is_blank(s) => {
            Err(RosterError::shape_mismatch(index, field, BLANK_TEXT))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(RosterError::shape_mismatch(
            index,
            field,
            format!("expected a string, found {}", type_name(other)),
        )),
        None => Err(RosterError::shape_mismatch(index, field, "missing field")),
    }
}

fn age_field(index: usize, fields: &serde_json::Map<String, Value>) -> Result<u32> {
    let value = fields
        .get("age")
        .ok_or_else(|| RosterError::shape_mismatch(index, "age", "missing field"))?;

    let Value::Number(number) = value else {
        return Err(RosterError::shape_mismatch(
            index,
            "age",
            format!("expected an integer, found {}", type_name(value)),
        ));
    };

    if let Some(age) = number.as_u64() {
        return u32::try_from(age).map_err(|_| {
            RosterError::shape_mismatch(index, "age", format!("{} is out of range", age))
        });
    }

    if number.as_i64().is_some() {
        Err(RosterError::shape_mismatch(
            index,
            "age",
            format!("must be non-negative, found {}", number),
        ))
    } else {
        Err(RosterError::shape_mismatch(
            index,
            "age",
            format!("expected an integer, found {}", number),
        ))
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
