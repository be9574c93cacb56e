use crate::core::roster::Roster;
use crate::domain::model::Person;
use crate::utils::error::Result;
use serde_json::Value;
use std::io::Write;

pub const DEFAULT_HEADER: &str = "Users:";

/// ` - <name>, <age>`. Occupation is not rendered.
pub fn format_person(person: &Person) -> String {
    format!(" - {}, {}", person.name(), person.age())
}

/// Formats an untyped value, rejecting anything that is not Person-shaped.
pub fn format_value(value: &Value) -> Result<String> {
    let person = Person::try_from(value)?;
    Ok(format_person(&person))
}

pub fn log_person<W: Write>(writer: &mut W, person: &Person) -> Result<()> {
    writeln!(writer, "{}", format_person(person))?;
    Ok(())
}

pub fn print_roster<W: Write>(writer: &mut W, roster: &Roster) -> Result<()> {
    print_roster_with_header(writer, DEFAULT_HEADER, roster)
}

pub fn print_roster_with_header<W: Write>(
    writer: &mut W,
    header: &str,
    roster: &Roster,
) -> Result<()> {
    writeln!(writer, "{}", header)?;
    for person in roster {
        log_person(writer, person)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn render_roster(roster: &Roster) -> String {
    let mut lines = Vec::with_capacity(roster.len() + 1);
    lines.push(DEFAULT_HEADER.to_string());
    lines.extend(roster.iter().map(format_person));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
