/*!
The in-memory registry.

A single [`Store`] owns every course and user for the lifetime of the
process and enforces the uniqueness invariants: course ids are globally
unique across the catalogue, and within each role's collection both the id
and the username are unique (a student and a professor may share either).

There is no hidden global instance; the store is constructed explicitly and
passed by reference to every component. Test isolation is a fresh
`Store::new()`, not a reset.

Rejected mutations return `false` and leave the store untouched; the reason
goes to the log channel, never to the caller.
*/
use std::collections::HashMap;

use indexmap::IndexMap;

use crate::course::Course;
use crate::user::{BaseUser, Student};

mod admin;
mod enroll;
mod users;

#[derive(Debug, Default)]
pub struct Store {
    /// Catalogue in insertion order; "view all courses" follows file order.
    courses: IndexMap<String, Course>,
    students: HashMap<String, Student>,
    professors: HashMap<String, BaseUser>,
    admins: HashMap<String, BaseUser>,
    // Secondary indexes, uname -> id, one uniqueness domain per role.
    student_unames: HashMap<String, String>,
    professor_unames: HashMap<String, String>,
    admin_unames: HashMap<String, String>,
    /// Professor id -> ids of courses they give. Entries survive professor
    /// deletion; ids of deleted courses are skipped at resolution time.
    professor_courses: HashMap<String, Vec<String>>,
}

impl Store {
    pub fn new() -> Self {
        log::trace!("Store::new() called.");
        Self::default()
    }

    /**
    Add a course to the catalogue and record it against its professor.

    False (and no mutation) if the professor reference is empty or the
    course id is already taken. Schedule conflicts are NOT checked here;
    that is the admin operation's job (`Store::add_new_course`).
    */
    pub fn add_course(&mut self, course: Course) -> bool {
        log::trace!("Store::add_course( {:?} ) called.", &course.id);

        if course.professor.is_empty() {
            log::warn!("Add course {:?} failed: no professor reference.", &course.id);
            return false;
        }
        if self.courses.contains_key(&course.id) {
            log::warn!("Add course {:?} failed: duplicated ID.", &course.id);
            return false;
        }

        self.professor_courses
            .entry(course.professor.clone())
            .or_default()
            .push(course.id.clone());
        self.courses.insert(course.id.clone(), course);
        true
    }

    /// True iff a course with that id existed and was removed. The
    /// professor-course index and student enrollment lists are untouched.
    pub fn delete_course(&mut self, id: &str) -> bool {
        log::trace!("Store::delete_course( {:?} ) called.", id);

        if id.is_empty() {
            return false;
        }
        self.courses.shift_remove(id).is_some()
    }

    /// An empty id is "not found", not an error.
    pub fn get_course_by_id(&self, id: &str) -> Option<&Course> {
        if id.is_empty() {
            return None;
        }
        self.courses.get(id)
    }

    pub(crate) fn get_course_by_id_mut(&mut self, id: &str) -> Option<&mut Course> {
        if id.is_empty() {
            return None;
        }
        self.courses.get_mut(id)
    }

    /// All courses in catalogue order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// The courses a professor gives, in the order they were added.
    ///
    /// Ids of since-deleted courses drop out here; an unknown or empty
    /// professor id yields an empty list.
    pub fn courses_by_professor(&self, professor_id: &str) -> Vec<&Course> {
        if professor_id.is_empty() {
            return Vec::new();
        }
        match self.professor_courses.get(professor_id) {
            Some(ids) => ids.iter()
                .filter_map(|id| self.courses.get(id))
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tests::ensure_logging;

    use time::macros::time;

    pub fn test_course(id: &str, name: &str, professor: &str) -> Course {
        Course::new(
            id.to_owned(),
            name.to_owned(),
            professor.to_owned(),
            "MW".to_owned(),
            time!(9:00),
            time!(10:30),
            30,
        )
    }

    #[test]
    fn duplicate_course_id_rejected() {
        ensure_logging();
        let mut store = Store::new();

        assert!(store.add_course(test_course("CIT5920", "Math", "001")));
        assert_eq!(store.course_count(), 1);
        assert_eq!(
            store.get_course_by_id("CIT5920").unwrap().name,
            "Math"
        );

        // Same id again: rejected, catalogue size unchanged.
        assert!(!store.add_course(test_course("CIT5920", "Math", "001")));
        assert_eq!(store.course_count(), 1);
    }

    #[test]
    fn course_without_professor_rejected() {
        ensure_logging();
        let mut store = Store::new();

        assert!(!store.add_course(test_course("CIT5920", "Math", "")));
        assert_eq!(store.course_count(), 0);
    }

    #[test]
    fn delete_course_twice() {
        ensure_logging();
        let mut store = Store::new();
        store.add_course(test_course("CIT5920", "Math", "001"));

        assert!(store.delete_course("CIT5920"));
        assert!(!store.delete_course("CIT5920"));
        assert!(!store.delete_course(""));
        assert!(store.get_course_by_id("CIT5920").is_none());
    }

    #[test]
    fn catalogue_keeps_insertion_order() {
        ensure_logging();
        let mut store = Store::new();
        for id in ["MATH301", "MATH101", "MATH201"] {
            store.add_course(test_course(id, "Mathematics", "003"));
        }
        store.delete_course("MATH101");

        let ids: Vec<&str> = store.courses().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["MATH301", "MATH201"]);
    }

    #[test]
    fn courses_by_professor_tracks_ownership() {
        ensure_logging();
        let mut store = Store::new();
        store.add_course(test_course("MATH101", "Mathematics 101", "003"));
        store.add_course(test_course("PHYS101", "Physics 101", "002"));
        store.add_course(test_course("MATH201", "Mathematics 201", "003"));

        let ids: Vec<&str> = store.courses_by_professor("003")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["MATH101", "MATH201"]);

        assert!(store.courses_by_professor("houdini").is_empty());
        assert!(store.courses_by_professor("").is_empty());

        // A deleted course drops out of its professor's listing.
        store.delete_course("MATH101");
        let ids: Vec<&str> = store.courses_by_professor("003")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["MATH201"]);
    }
}
