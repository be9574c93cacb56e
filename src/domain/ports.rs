use crate::domain::model::Person;
use crate::utils::error::Result;

/// Anything that can produce the people for a roster, in display order.
pub trait RosterSource {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Vec<Person>>;
}
