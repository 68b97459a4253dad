/*!
Courses and the schedule-conflict predicate.
*/
use std::fmt;

use time::{format_description::FormatItem, macros::format_description, Time};

/// Wall-clock format of the course times, e.g. "9:00" or "16:30".
pub const TIME_FMT: &[FormatItem] = format_description!("[hour padding:none]:[minute]");

#[derive(Clone, Debug)]
pub struct Course {
    /// Immutable identifier, globally unique across the catalogue.
    pub id: String,
    pub name: String,
    /// Id of the professor giving the course. A reference, not owned; the
    /// registry does not guarantee it resolves (see `Store::delete_professor`).
    pub professor: String,
    /// Weekday tokens; each character is an independently meaningful day,
    /// so "MW" means Monday-or-Wednesday.
    pub days: String,
    pub start: Time,
    pub end: Time,
    /// Stored and displayed, never enforced.
    pub capacity: u32,
    students: Vec<String>,
}

impl Course {
    pub fn new(
        id: String,
        name: String,
        professor: String,
        days: String,
        start: Time,
        end: Time,
        capacity: u32,
    ) -> Self {
        Self {
            id, name, professor, days, start, end, capacity,
            students: Vec::new(),
        }
    }

    /// Ids of the students on the roster.
    pub fn students(&self) -> &[String] { &self.students }

    /// Put a student on the roster.
    ///
    /// False for an empty id or a student already on the roster; capacity
    /// is not checked.
    pub fn add_student(&mut self, student_id: &str) -> bool {
        if student_id.is_empty() {
            return false;
        }
        if self.students.iter().any(|s| s == student_id) {
            return false;
        }

        self.students.push(student_id.to_owned());
        true
    }

    /// Take a student off the roster; false if they weren't on it.
    pub fn remove_student(&mut self, student_id: &str) -> bool {
        if student_id.is_empty() {
            return false;
        }
        match self.students.iter().position(|s| s == student_id) {
            Some(n) => {
                self.students.remove(n);
                true
            },
            None => false,
        }
    }

    /**
    Whether two courses cannot both be scheduled for the same person.

    The weekday strings are compared character-by-character; if the two
    courses share no day there is no conflict regardless of time. Otherwise
    the closed intervals [start, end] are tested for overlap, so two
    back-to-back courses sharing a boundary instant DO conflict.

    Symmetric: `a.conflicts_with(b) == b.conflicts_with(a)` for all inputs.
    */
    pub fn conflicts_with(&self, other: &Course) -> bool {
        if !self.shares_day(other) {
            return false;
        }

        let latest_start = self.start.max(other.start);
        let earliest_end = self.end.min(other.end);
        latest_start <= earliest_end
    }

    fn shares_day(&self, other: &Course) -> bool {
        self.days.chars().any(|day| other.days.contains(day))
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let start = self.start.format(&TIME_FMT).map_err(|_| fmt::Error)?;
        let end = self.end.format(&TIME_FMT).map_err(|_| fmt::Error)?;

        write!(
            f,
            "{}|{}, {}-{} on {}, with course capacity: {}, students: {}",
            self.id, self.name, start, end, self.days, self.capacity,
            self.students.len()
        )
    }
}
