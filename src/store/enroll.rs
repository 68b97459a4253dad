/*!
The enrollment-eligibility policy.

These are the student-facing decision functions. They live on [`Store`]
because an enrollment touches two entities at once (the student's list and
the course's roster); the store is the only place that can see both sides.

All outcomes follow the boolean contract: `false` means rejected, with the
reason on the log channel.
*/
use crate::course::Course;
use crate::user::Student;

use super::Store;

impl Store {
    /**
    Enroll a student in a course.

    Rejected when the course id is empty or unknown, already present in
    the student's list, in schedule conflict with any currently enrolled
    course, or already finished — where "finished" means the course id
    itself is graded, or any catalogue course sharing its *name* is graded
    for this student.

    An enrolled course sharing the candidate's name (under a different id)
    only logs a warning; name collision alone does not reject.
    */
    pub fn enroll_course(&mut self, student_id: &str, course_id: &str) -> bool {
        log::trace!(
            "Store::enroll_course( {:?}, {:?} ) called.",
            student_id, course_id
        );

        if course_id.is_empty() {
            log::warn!("Enroll failed: course id cannot be empty.");
            return false;
        }
        let course = match self.get_course_by_id(course_id) {
            Some(c) => c,
            None => {
                log::warn!("Enroll failed: no such course: {}", course_id);
                return false;
            },
        };
        let student = match self.get_student_by_id(student_id) {
            Some(s) => s,
            None => {
                log::warn!("Enroll failed: no such student: {}", student_id);
                return false;
            },
        };

        if !self.can_enroll(student, course) {
            return false;
        }

        // Roster first, then the student's own list, as a single mutation.
        if let Some(course) = self.get_course_by_id_mut(course_id) {
            course.add_student(student_id);
        }
        if let Some(student) = self.get_student_by_id_mut(student_id) {
            student.courses.push(course_id.to_owned());
        }
        true
    }

    fn can_enroll(&self, student: &Student, course: &Course) -> bool {
        for enrolled_id in &student.courses {
            let enrolled = match self.get_course_by_id(enrolled_id) {
                Some(c) => c,
                // An enrolled course deleted from the catalogue can no
                // longer constrain anything.
                None => continue,
            };

            if enrolled.id == course.id {
                log::warn!("Enroll {:?} rejected: course ID conflicted.", &course.id);
                return false;
            }
            if course.conflicts_with(enrolled) {
                log::warn!(
                    "Enroll {:?} rejected: schedule conflict with {:?}.",
                    &course.id, &enrolled.id
                );
                return false;
            }
            if course.name == enrolled.name {
                // Warning only: a name collision alone does not reject.
                log::warn!(
                    "Courses {:?} and {:?} share the name {:?}.",
                    &course.id, &enrolled.id, &course.name
                );
            }
        }

        if self.is_finished(student, &course.id) {
            log::warn!("Enroll {:?} rejected: course already graded.", &course.id);
            return false;
        }

        true
    }

    /// Whether a course counts as finished for this student: its own id is
    /// graded, or some catalogue course with the same name is.
    fn is_finished(&self, student: &Student, course_id: &str) -> bool {
        if course_id.is_empty() {
            return false;
        }
        if student.grades.contains_key(course_id) {
            return true;
        }

        let course = match self.get_course_by_id(course_id) {
            Some(c) => c,
            None => { return false; },
        };

        self.courses()
            .any(|c| c.name == course.name && student.grades.contains_key(&c.id))
    }

    /**
    Drop a student from a course.

    False for an empty or unknown course id. Otherwise the student comes
    off the roster, and the return value says whether the id was actually
    in the student's enrolled list.
    */
    pub fn drop_course(&mut self, student_id: &str, course_id: &str) -> bool {
        log::trace!(
            "Store::drop_course( {:?}, {:?} ) called.",
            student_id, course_id
        );

        if course_id.is_empty() {
            return false;
        }
        let course = match self.get_course_by_id_mut(course_id) {
            Some(c) => c,
            None => { return false; },
        };
        course.remove_student(student_id);

        let student = match self.get_student_by_id_mut(student_id) {
            Some(s) => s,
            None => { return false; },
        };
        match student.courses.iter().position(|c| c == course_id) {
            Some(n) => {
                student.courses.remove(n);
                true
            },
            None => false,
        }
    }

    /**
    Record (or overwrite) a letter grade for a course id.

    Quietly does nothing if the course id or grade is empty. Grading is
    independent of enrollment: the course need not be in the student's
    list, nor even in the catalogue.
    */
    pub fn record_grade(&mut self, student_id: &str, course_id: &str, grade: &str) {
        log::trace!(
            "Store::record_grade( {:?}, {:?}, {:?} ) called.",
            student_id, course_id, grade
        );

        if course_id.is_empty() || grade.is_empty() {
            return;
        }
        if let Some(student) = self.get_student_by_id_mut(student_id) {
            student.grades.insert(course_id.to_owned(), grade.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::Course;
    use crate::store::tests::test_course;
    use crate::tests::ensure_logging;
    use crate::user::BaseUser;

    use time::macros::time;

    fn scheduled(id: &str, name: &str, days: &str, start: time::Time, end: time::Time) -> Course {
        Course::new(
            id.to_owned(),
            name.to_owned(),
            "001".to_owned(),
            days.to_owned(),
            start,
            end,
            30,
        )
    }

    fn store_with_student() -> Store {
        let mut store = Store::new();
        let student = BaseUser::new(
            "Student001".to_owned(),
            "Tobey Maguire".to_owned(),
            "tobey".to_owned(),
            "123456".to_owned(),
        );
        assert!(store.add_user(student.into_student()));
        store
    }

    fn enrolled_ids(store: &Store) -> Vec<String> {
        store.get_student_by_id("Student001").unwrap().courses().to_vec()
    }

    #[test]
    fn enroll_and_duplicate_rejection() {
        ensure_logging();
        let mut store = store_with_student();
        store.add_course(test_course("CIT591", "Intro to Programming", "001"));

        assert!(store.enroll_course("Student001", "CIT591"));
        assert_eq!(enrolled_ids(&store), ["CIT591"]);
        assert_eq!(
            store.get_course_by_id("CIT591").unwrap().students(),
            &["Student001".to_owned()]
        );

        // Second attempt fails; the list grows by exactly one overall.
        assert!(!store.enroll_course("Student001", "CIT591"));
        assert_eq!(enrolled_ids(&store), ["CIT591"]);
    }

    #[test]
    fn enroll_unknown_course_or_student() {
        ensure_logging();
        let mut store = store_with_student();

        assert!(!store.enroll_course("Student001", ""));
        assert!(!store.enroll_course("Student001", "CIT999"));

        store.add_course(test_course("CIT591", "Intro to Programming", "001"));
        assert!(!store.enroll_course("Student999", "CIT591"));
        assert!(store.get_course_by_id("CIT591").unwrap().students().is_empty());
    }

    #[test]
    fn schedule_conflict_rejected_without_mutation() {
        ensure_logging();
        let mut store = store_with_student();
        store.add_course(scheduled("CIT591", "Intro to Programming", "MW", time!(9:00), time!(10:30)));
        store.add_course(scheduled("CIT593", "Computer Systems", "MW", time!(10:00), time!(11:45)));

        assert!(store.enroll_course("Student001", "CIT591"));
        assert!(!store.enroll_course("Student001", "CIT593"));

        assert_eq!(enrolled_ids(&store), ["CIT591"]);
        assert!(store.get_course_by_id("CIT593").unwrap().students().is_empty());
    }

    #[test]
    fn same_name_different_id_warns_but_enrolls() {
        ensure_logging();
        let mut store = store_with_student();
        store.add_course(scheduled("CIT591", "Programming", "MW", time!(9:00), time!(10:30)));
        store.add_course(scheduled("CIT591X", "Programming", "TR", time!(9:00), time!(10:30)));

        assert!(store.enroll_course("Student001", "CIT591"));
        // Shares the name but neither the id nor the schedule: allowed.
        assert!(store.enroll_course("Student001", "CIT591X"));
        assert_eq!(enrolled_ids(&store), ["CIT591", "CIT591X"]);
    }

    #[test]
    fn graded_course_rejected() {
        ensure_logging();
        let mut store = store_with_student();
        store.add_course(test_course("CIT591", "Intro to Programming", "001"));
        store.record_grade("Student001", "CIT591", "A");

        assert!(!store.enroll_course("Student001", "CIT591"));
        assert!(enrolled_ids(&store).is_empty());
    }

    #[test]
    fn name_equivalent_graded_course_rejected() {
        ensure_logging();
        let mut store = store_with_student();
        store.add_course(scheduled("CIT591", "Programming", "MW", time!(9:00), time!(10:30)));
        store.add_course(scheduled("CIT591X", "Programming", "TR", time!(9:00), time!(10:30)));
        store.record_grade("Student001", "CIT591X", "B+");

        // CIT591 itself was never graded, but a course with the same name was.
        assert!(!store.enroll_course("Student001", "CIT591"));
        assert!(enrolled_ids(&store).is_empty());
    }

    #[test]
    fn grade_recording_is_independent_of_enrollment() {
        ensure_logging();
        let mut store = store_with_student();

        // Never enrolled, course not even in the catalogue.
        store.record_grade("Student001", "CIT000", "A-");
        let grades = store.get_student_by_id("Student001").unwrap().grades();
        assert_eq!(grades.get("CIT000").map(String::as_str), Some("A-"));

        // Overwrite.
        store.record_grade("Student001", "CIT000", "B");
        let grades = store.get_student_by_id("Student001").unwrap().grades();
        assert_eq!(grades.get("CIT000").map(String::as_str), Some("B"));

        // Empty pieces are quietly ignored.
        store.record_grade("Student001", "", "A");
        store.record_grade("Student001", "CIT001", "");
        let grades = store.get_student_by_id("Student001").unwrap().grades();
        assert_eq!(grades.len(), 1);
    }

    #[test]
    fn drop_course_round_trip() {
        ensure_logging();
        let mut store = store_with_student();
        store.add_course(test_course("CIT591", "Intro to Programming", "001"));
        store.enroll_course("Student001", "CIT591");

        assert!(store.drop_course("Student001", "CIT591"));
        assert!(enrolled_ids(&store).is_empty());
        assert!(store.get_course_by_id("CIT591").unwrap().students().is_empty());

        // Not in the list any more.
        assert!(!store.drop_course("Student001", "CIT591"));
        assert!(!store.drop_course("Student001", ""));
        assert!(!store.drop_course("Student001", "CIT999"));
    }
}
