/*!
The professor menu.
*/
use crate::store::Store;

use super::ask_for;

pub(super) fn menu(store: &mut Store, professor_id: &str) {
    println!("1 -- View given courses");
    println!("2 -- View student list of the given course");
    println!("3 -- Return to the previous menu");

    loop {
        println!();
        let option = ask_for("Please enter your option, eg. '1'.");
        println!();
        match option.as_str() {
            "1" => { view_given_courses(store, professor_id); },
            "2" => { view_course_roster(store); },
            "3" => { return; },
            _ => { println!("Invalid option. Please try again."); },
        }
    }
}

fn view_given_courses(store: &Store, professor_id: &str) {
    let courses = store.courses_by_professor(professor_id);
    if courses.is_empty() {
        println!("No given courses");
        return;
    }
    for course in courses {
        println!("{} {}", course.id, course.name);
    }
}

fn view_course_roster(store: &Store) {
    let course = loop {
        let course_id = ask_for("Please enter the course ID to view students, eg. 'CIT590'.");
        if course_id == "q" {
            return;
        }
        match store.get_course_by_id(&course_id) {
            Some(c) => { break c; },
            None => { println!("Invalid course ID"); },
        }
    };

    println!("Students in your course {} {}:", course.id, course.name);
    for student_id in course.students() {
        if let Some(student) = store.get_student_by_id(student_id) {
            println!("{} {}", student.base.id, student.base.name);
        }
    }
}
