use crate::domain::model::Person;
use crate::utils::error::{Result, RosterError};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::io::Read;
use std::sync::OnceLock;

/// Ordered, read-only collection of people. Iteration order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// The two built-in users.
    pub fn sample() -> Self {
        Self::new(vec![
            sample_person("Max Mustermann", 25, "Chimney sweep"),
            sample_person("Kate Müller", 23, "Astronaut"),
        ])
    }

    /// Shape-checks every value, failing on the first one that does not conform.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let people = values
            .iter()
            .enumerate()
            .map(|(index, value)| Person::from_value_at(index, value))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!("Accepted {} records", people.len());
        Ok(Self::new(people))
    }

    /// Accepts either a top-level array or an object with a `users` array. An
    /// object without `users` is an empty roster.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content)?;
        Self::from_values(users_array(document)?)
    }

    /// Expects `[[users]]` tables; a document without any is an empty roster.
    /// `${VAR}` placeholders are replaced from the environment first; unset
    /// variables are left untouched.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        let document: toml::Table = toml::from_str(&processed)?;
        let document = serde_json::to_value(document)?;
        Self::from_values(users_array(document)?)
    }

    /// Reads a CSV with a `name,age,occupation` header. Column order is free and
    /// extra columns are ignored. Repeated column names are rejected.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut seen = HashSet::new();
        if let Some(duplicate) = headers.iter().find(|header| !seen.insert(*header)) {
            return Err(RosterError::InvalidDocument {
                message: format!("duplicate CSV column `{}`", duplicate),
            });
        }

        let mut values = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            let mut fields = serde_json::Map::new();
            for (header, cell) in headers.iter().zip(row.iter()) {
                let cell_value = match header {
                    "age" => cell
                        .parse::<i64>()
                        .map(Value::from)
                        .unwrap_or_else(|_| Value::String(cell.to_string())),
                    _ => Value::String(cell.to_string()),
                };
                fields.insert(header.to_string(), cell_value);
            }
            values.push(Value::Object(fields));
        }

        Self::from_values(values)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.people.iter()
    }
}

fn sample_person(name: &str, age: u32, occupation: &str) -> Person {
    match Person::new(name, age, occupation) {
        Ok(person) => person,
        Err(e) => unreachable!("sample user is invalid: {}", e),
    }
}

fn users_array(document: Value) -> Result<Vec<Value>> {
    match document {
        Value::Array(items) => Ok(items),
        Value::Object(mut fields) => match fields.remove("users") {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(RosterError::InvalidDocument {
                message: "`users` must be an array of records".to_string(),
            }),
            None => Ok(Vec::new()),
        },
        _ => Err(RosterError::InvalidDocument {
            message: "roster document must be an array or an object with `users`".to_string(),
        }),
    }
}

fn substitute_env_vars(content: &str) -> String {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER
        .get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder pattern"));

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_order() {
        let roster = Roster::sample();
        let names: Vec<&str> = roster.iter().map(Person::name).collect();
        assert_eq!(names, ["Max Mustermann", "Kate Müller"]);
        assert_eq!(roster.as_slice()[1].occupation(), "Astronaut");
    }

    #[test]
    fn test_iteration_is_repeatable() {
        let roster = Roster::sample();
        let first: Vec<_> = roster.iter().cloned().collect();
        let second: Vec<_> = (&roster).into_iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_values_reports_first_bad_index() {
        let err = Roster::from_values(vec![
            json!({ "name": "Max Mustermann", "age": 25, "occupation": "Chimney sweep" }),
            json!({ "name": "Kate Müller", "occupation": "Astronaut" }),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            RosterError::ShapeMismatch { index: 1, ref field, .. } if field == "age"
        ));
    }

    #[test]
    fn test_json_array_and_users_object() {
        let array = r#"[{"name":"A","age":1,"occupation":"x"},{"name":"B","age":2,"occupation":"y"}]"#;
        let object = r#"{"users":[{"name":"A","age":1,"occupation":"x"},{"name":"B","age":2,"occupation":"y"}]}"#;
        assert_eq!(
            Roster::from_json_str(array).unwrap(),
            Roster::from_json_str(object).unwrap()
        );
    }

    #[test]
    fn test_document_without_users_is_empty() {
        assert!(Roster::from_json_str(r#"{"people":[]}"#).unwrap().is_empty());
        assert!(Roster::from_toml_str("").unwrap().is_empty());
        assert!(Roster::from_toml_str("title = \"crew\"\n").unwrap().is_empty());
        assert!(Roster::from_csv_reader("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_documents_are_rejected() {
        assert!(matches!(
            Roster::from_json_str(r#"{"users":{"name":"Max"}}"#),
            Err(RosterError::InvalidDocument { .. })
        ));
        assert!(matches!(
            Roster::from_toml_str("users = \"Max\"\n"),
            Err(RosterError::InvalidDocument { .. })
        ));
        assert!(matches!(
            Roster::from_json_str("42"),
            Err(RosterError::InvalidDocument { .. })
        ));
        assert!(matches!(
            Roster::from_json_str("not json"),
            Err(RosterError::SerializationError(_))
        ));
    }

    #[test]
    fn test_empty_roster_is_valid() {
        let roster = Roster::from_json_str("[]").unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_toml_users() {
        let content = r#"
[[users]]
name = "Max Mustermann"
age = 25
occupation = "Chimney sweep"

[[users]]
name = "Kate Müller"
age = 23
occupation = "Astronaut"
"#;
        assert_eq!(Roster::from_toml_str(content).unwrap(), Roster::sample());
    }

    #[test]
    fn test_toml_env_var_substitution() {
        std::env::set_var("USER_ROSTER_TEST_OCCUPATION", "Lighthouse keeper");
        let content = r#"
[[users]]
name = "Ada"
age = 36
occupation = "${USER_ROSTER_TEST_OCCUPATION}"
"#;
        let roster = Roster::from_toml_str(content).unwrap();
        assert_eq!(roster.as_slice()[0].occupation(), "Lighthouse keeper");
        std::env::remove_var("USER_ROSTER_TEST_OCCUPATION");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        assert_eq!(
            substitute_env_vars("x = \"${USER_ROSTER_SURELY_UNSET_VAR}\""),
            "x = \"${USER_ROSTER_SURELY_UNSET_VAR}\""
        );
    }

    #[test]
    fn test_toml_wrong_age_type() {
        let content = r#"
[[users]]
name = "Max"
age = "twenty"
occupation = "x"
"#;
        assert!(matches!(
            Roster::from_toml_str(content),
            Err(RosterError::ShapeMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn test_csv_columns_in_any_order() {
        let data = "occupation,name,age,team\nChimney sweep,Max Mustermann,25,a\nAstronaut,Kate Müller,23,b\n";
        assert_eq!(Roster::from_csv_reader(data.as_bytes()).unwrap(), Roster::sample());
    }

    #[test]
    fn test_csv_bad_age_and_missing_column() {
        let bad_age = "name,age,occupation\nMax,old,Sweep\n";
        assert!(matches!(
            Roster::from_csv_reader(bad_age.as_bytes()),
            Err(RosterError::ShapeMismatch { ref field, .. }) if field == "age"
        ));

        let duplicate = "name,age,occupation,name\nMax,25,x,\n";
        assert!(matches!(
            Roster::from_csv_reader(duplicate.as_bytes()),
            Err(RosterError::InvalidDocument { ref message }) if message.contains("`name`")
        ));

        let no_occupation = "name,age\nMax,25\n";
        assert!(matches!(
            Roster::from_csv_reader(no_occupation.as_bytes()),
            Err(RosterError::ShapeMismatch { ref field, .. }) if field == "occupation"
        ));
    }
}
