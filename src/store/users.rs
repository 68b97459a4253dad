/*
`Store` methods for the three kinds of users.

Each role is its own uniqueness domain: an id or uname taken by a student
does not block a professor from using it, and vice versa.
*/
use std::collections::HashMap;

use crate::user::{BaseUser, Student, User};

use super::Store;

/// Shared insert path for one role's (map, uname index) pair.
fn insert_into_domain<T>(
    map: &mut HashMap<String, T>,
    unames: &mut HashMap<String, String>,
    id: String,
    uname: String,
    entry: T,
    shown: &str,
) -> bool {
    if map.contains_key(&id) {
        log::warn!("Add new {} failed: duplicated ID.", shown);
        return false;
    }
    if unames.contains_key(&uname) {
        log::warn!("Add new {} failed: duplicated username.", shown);
        return false;
    }

    unames.insert(uname, id.clone());
    map.insert(id, entry);
    true
}

impl Store {
    /**
    Add a user to its role's collection and uname index.

    False if a user of the same concrete role already holds that id or
    that username; collisions across roles are permitted.
    */
    pub fn add_user(&mut self, user: User) -> bool {
        log::trace!("Store::add_user( {} {:?} ) called.", user.role(), user.id());

        let shown = user.to_string();
        match user {
            User::Admin(base) => insert_into_domain(
                &mut self.admins,
                &mut self.admin_unames,
                base.id.clone(),
                base.uname.clone(),
                base,
                &shown,
            ),
            User::Professor(base) => insert_into_domain(
                &mut self.professors,
                &mut self.professor_unames,
                base.id.clone(),
                base.uname.clone(),
                base,
                &shown,
            ),
            User::Student(student) => insert_into_domain(
                &mut self.students,
                &mut self.student_unames,
                student.base.id.clone(),
                student.base.uname.clone(),
                student,
                &shown,
            ),
        }
    }

    pub fn get_student_by_id(&self, id: &str) -> Option<&Student> {
        if id.is_empty() {
            return None;
        }
        self.students.get(id)
    }

    pub(crate) fn get_student_by_id_mut(&mut self, id: &str) -> Option<&mut Student> {
        if id.is_empty() {
            return None;
        }
        self.students.get_mut(id)
    }

    pub fn get_student_by_uname(&self, uname: &str) -> Option<&Student> {
        if uname.is_empty() {
            return None;
        }
        let id = self.student_unames.get(uname)?;
        self.students.get(id)
    }

    pub fn get_professor_by_id(&self, id: &str) -> Option<&BaseUser> {
        if id.is_empty() {
            return None;
        }
        self.professors.get(id)
    }

    pub fn get_professor_by_uname(&self, uname: &str) -> Option<&BaseUser> {
        if uname.is_empty() {
            return None;
        }
        let id = self.professor_unames.get(uname)?;
        self.professors.get(id)
    }

    /// Linear scan by display name; used by the course import, where course
    /// records name their professor rather than referencing an id.
    pub fn get_professor_by_name(&self, name: &str) -> Option<&BaseUser> {
        if name.is_empty() {
            return None;
        }
        self.professors.values().find(|p| p.name == name)
    }

    pub fn get_admin_by_id(&self, id: &str) -> Option<&BaseUser> {
        if id.is_empty() {
            return None;
        }
        self.admins.get(id)
    }

    pub fn get_admin_by_uname(&self, uname: &str) -> Option<&BaseUser> {
        if uname.is_empty() {
            return None;
        }
        let id = self.admin_unames.get(uname)?;
        self.admins.get(id)
    }

    /// True iff a student with that id existed and was removed. Course
    /// rosters naming the student are untouched.
    pub fn delete_student(&mut self, id: &str) -> bool {
        log::trace!("Store::delete_student( {:?} ) called.", id);

        if id.is_empty() {
            return false;
        }
        match self.students.remove(id) {
            Some(s) => {
                self.student_unames.remove(&s.base.uname);
                true
            },
            None => false,
        }
    }

    /// True iff a professor with that id existed and was removed.
    ///
    /// Does NOT cascade: their courses keep the dangling professor id and
    /// the professor-course index keeps its entry.
    pub fn delete_professor(&mut self, id: &str) -> bool {
        log::trace!("Store::delete_professor( {:?} ) called.", id);

        if id.is_empty() {
            return false;
        }
        match self.professors.remove(id) {
            Some(p) => {
                self.professor_unames.remove(&p.uname);
                true
            },
            None => false,
        }
    }

    pub fn delete_admin(&mut self, id: &str) -> bool {
        log::trace!("Store::delete_admin( {:?} ) called.", id);

        if id.is_empty() {
            return false;
        }
        match self.admins.remove(id) {
            Some(a) => {
                self.admin_unames.remove(&a.uname);
                true
            },
            None => false,
        }
    }

    pub fn student_count(&self) -> usize { self.students.len() }
    pub fn professor_count(&self) -> usize { self.professors.len() }
    pub fn admin_count(&self) -> usize { self.admins.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::ensure_logging;

    fn base(id: &str, name: &str, uname: &str) -> BaseUser {
        BaseUser::new(
            id.to_owned(),
            name.to_owned(),
            uname.to_owned(),
            "password".to_owned(),
        )
    }

    #[test]
    fn duplicate_id_and_uname_rejected_within_role() {
        ensure_logging();
        let mut store = Store::new();

        assert!(store.add_user(base("1", "John", "john123").into_student()));

        // Same id, different uname.
        assert!(!store.add_user(base("1", "Jane", "jane456").into_student()));
        // Different id, same uname.
        assert!(!store.add_user(base("2", "Johnny", "john123").into_student()));
        assert_eq!(store.student_count(), 1);
    }

    #[test]
    fn collisions_across_roles_permitted() {
        ensure_logging();
        let mut store = Store::new();

        assert!(store.add_user(base("1", "John", "spiderman").into_student()));
        assert!(store.add_user(base("1", "Dr. Smith", "spiderman").into_professor()));
        assert!(store.add_user(base("1", "Thelma", "spiderman").into_admin()));

        assert_eq!(store.get_student_by_uname("spiderman").unwrap().base.name, "John");
        assert_eq!(store.get_professor_by_uname("spiderman").unwrap().name, "Dr. Smith");
        assert_eq!(store.get_admin_by_uname("spiderman").unwrap().name, "Thelma");
    }

    #[test]
    fn lookup_by_id_uname_and_name() {
        ensure_logging();
        let mut store = Store::new();
        store.add_user(base("001", "Peter Parker", "spidey").into_professor());

        assert!(store.get_professor_by_id("001").is_some());
        assert!(store.get_professor_by_id("002").is_none());
        assert!(store.get_professor_by_id("").is_none());

        assert!(store.get_professor_by_uname("spidey").is_some());
        assert!(store.get_professor_by_uname("venom").is_none());
        assert!(store.get_professor_by_uname("").is_none());

        assert!(store.get_professor_by_name("Peter Parker").is_some());
        assert!(store.get_professor_by_name("Peter").is_none());
    }

    #[test]
    fn delete_frees_id_and_uname() {
        ensure_logging();
        let mut store = Store::new();
        store.add_user(base("001", "Peter Parker", "spidey").into_professor());

        assert!(store.delete_professor("001"));
        assert!(!store.delete_professor("001"));
        assert!(store.get_professor_by_uname("spidey").is_none());

        // The domain is free for re-registration after deletion.
        assert!(store.add_user(base("001", "Miles Morales", "spidey").into_professor()));
    }

    #[test]
    fn delete_with_bad_id() {
        ensure_logging();
        let mut store = Store::new();

        assert!(!store.delete_student(""));
        assert!(!store.delete_admin("nobody"));
    }
}
