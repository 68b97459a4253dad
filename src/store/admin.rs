/*!
Admin-level mutations.

Thin orchestration over the registry primitives. The one real rule here is
the schedule check in [`Store::add_new_course`]: a professor cannot be
given two courses that conflict with each other. This is deliberately the
admin operation's job, not `add_course`'s, so imports and tests can seed
arbitrary catalogues.
*/
use time::Time;

use crate::course::Course;
use crate::user::BaseUser;

use super::Store;

impl Store {
    /**
    Create a course and add it to the catalogue.

    False for any empty textual argument, an unknown professor id, or a
    schedule conflict with a course that professor already gives.
    */
    #[allow(clippy::too_many_arguments)]
    pub fn add_new_course(
        &mut self,
        id: &str,
        name: &str,
        professor_id: &str,
        days: &str,
        start: Time,
        end: Time,
        capacity: u32,
    ) -> bool {
        log::trace!(
            "Store::add_new_course( {:?}, {:?}, {:?}, {:?} ) called.",
            id, name, professor_id, days
        );

        if id.is_empty() || name.is_empty() || professor_id.is_empty() || days.is_empty() {
            return false;
        }
        if self.get_professor_by_id(professor_id).is_none() {
            log::warn!("Add course {:?} failed: professor {:?} doesn't exist.", id, professor_id);
            return false;
        }

        let course = Course::new(
            id.to_owned(),
            name.to_owned(),
            professor_id.to_owned(),
            days.to_owned(),
            start,
            end,
            capacity,
        );

        for given in self.courses_by_professor(professor_id) {
            if course.conflicts_with(given) {
                log::warn!(
                    "Add course {:?} failed: time conflict with course {}.",
                    id, given
                );
                return false;
            }
        }

        self.add_course(course)
    }

    /// False for any empty argument or a duplicated id/username.
    pub fn add_new_professor(
        &mut self,
        id: &str,
        name: &str,
        uname: &str,
        password: &str,
    ) -> bool {
        if id.is_empty() || name.is_empty() || uname.is_empty() || password.is_empty() {
            return false;
        }
        let professor = BaseUser::new(
            id.to_owned(),
            name.to_owned(),
            uname.to_owned(),
            password.to_owned(),
        );
        self.add_user(professor.into_professor())
    }

    /// False for any empty argument or a duplicated id/username.
    pub fn add_new_student(
        &mut self,
        id: &str,
        name: &str,
        uname: &str,
        password: &str,
    ) -> bool {
        if id.is_empty() || name.is_empty() || uname.is_empty() || password.is_empty() {
            return false;
        }
        let student = BaseUser::new(
            id.to_owned(),
            name.to_owned(),
            uname.to_owned(),
            password.to_owned(),
        );
        self.add_user(student.into_student())
    }
}
