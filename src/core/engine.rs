use crate::core::printer::{print_roster_with_header, DEFAULT_HEADER};
use crate::core::roster::Roster;
use crate::core::RosterSource;
use crate::utils::error::Result;
use std::io::Write;

/// Loads a roster from its source and prints it under a header.
pub struct RosterEngine<S: RosterSource> {
    source: S,
    header: String,
}

impl<S: RosterSource> RosterEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_header(source, DEFAULT_HEADER)
    }

    pub fn with_header(source: S, header: impl Into<String>) -> Self {
        Self {
            source,
            header: header.into(),
        }
    }

    pub fn load(&self) -> Result<Roster> {
        tracing::debug!("Loading users from {}", self.source.describe());
        let roster = Roster::new(self.source.load()?);
        tracing::debug!("Loaded {} users", roster.len());
        Ok(roster)
    }

    /// Returns the number of users printed.
    pub fn run<W: Write>(&self, writer: &mut W) -> Result<usize> {
        let roster = self.load()?;
        print_roster_with_header(writer, &self.header, &roster)?;
        Ok(roster.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Person;
    use crate::utils::error::RosterError;

    struct FixedSource(Vec<Person>);

    impl RosterSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        fn load(&self) -> Result<Vec<Person>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    impl RosterSource for BrokenSource {
        fn describe(&self) -> String {
            "broken".to_string()
        }

        fn load(&self) -> Result<Vec<Person>> {
            Err(RosterError::shape_mismatch(0, "age", "missing field"))
        }
    }

    #[test]
    fn test_run_prints_in_source_order() {
        let source = FixedSource(vec![
            Person::new("B", 2, "y").unwrap(),
            Person::new("A", 1, "x").unwrap(),
        ]);
        let mut out = Vec::new();
        let printed = RosterEngine::new(source).run(&mut out).unwrap();

        assert_eq!(printed, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Users:\n - B, 2\n - A, 1\n");
    }

    #[test]
    fn test_custom_header() {
        let mut out = Vec::new();
        RosterEngine::with_header(FixedSource(vec![]), "Crew:")
            .run(&mut out)
            .unwrap();
        assert_eq!(out, b"Crew:\n");
    }

    #[test]
    fn test_failure_writes_nothing() {
        let mut out = Vec::new();
        let result = RosterEngine::new(BrokenSource).run(&mut out);
        assert!(matches!(result, Err(RosterError::ShapeMismatch { .. })));
        assert!(out.is_empty());
    }
}
