/*!
The student menu.
*/
use crate::store::Store;

use super::{ask_for, view_all_courses};

pub(super) fn menu(store: &mut Store, student_id: &str) {
    println!("1 -- View all courses");
    println!("2 -- Add courses to your list");
    println!("3 -- View selected courses");
    println!("4 -- Drop courses in your list");
    println!("5 -- View grades");
    println!("6 -- Return to previous menu");

    loop {
        println!();
        let option = ask_for("Please enter your option, eg. '1'.");
        match option.as_str() {
            "1" => { view_all_courses(store); },
            "2" => { add_courses(store, student_id); },
            "3" => { view_enrolled_courses(store, student_id); },
            "4" => { drop_courses(store, student_id); },
            "5" => { view_grades(store, student_id); },
            "6" => { return; },
            _ => { println!("Invalid option. Please try again."); },
        }
    }
}

fn add_courses(store: &mut Store, student_id: &str) {
    loop {
        let course_id = ask_for(
            "Please select the course ID you want to add to your list, \
             eg. 'CIT590'. or enter 'q' to return to the previous menu."
        );
        if course_id == "q" {
            return;
        }
        if store.enroll_course(student_id, &course_id) {
            println!("Course enrolled successfully");
        }
    }
}

fn drop_courses(store: &mut Store, student_id: &str) {
    loop {
        let course_id = ask_for(
            "Please select the course ID you want to drop from your list, \
             eg. 'CIT590'. or enter 'q' to return to the previous menu."
        );
        if course_id == "q" {
            return;
        }
        if store.drop_course(student_id, &course_id) {
            println!("Course dropped successfully");
        } else {
            println!("The course isn't in your schedule.");
        }
    }
}

fn view_enrolled_courses(store: &Store, student_id: &str) {
    let student = match store.get_student_by_id(student_id) {
        Some(s) => s,
        None => { return; },
    };

    println!("The courses in your list:");
    for id in student.courses() {
        if let Some(course) = store.get_course_by_id(id) {
            println!("{} {}", course.id, course.name);
        }
    }
}

fn view_grades(store: &Store, student_id: &str) {
    let student = match store.get_student_by_id(student_id) {
        Some(s) => s,
        None => { return; },
    };

    let grades = student.grades();
    if grades.is_empty() {
        println!("No grades available.");
        return;
    }

    println!("Here are the courses you already taken, with your grade in a letter format:");
    for (course_id, grade) in grades {
        match store.get_course_by_id(course_id) {
            Some(course) => {
                println!("Grade of {}: {}", course.name, grade);
            },
            None => {
                println!("Course with ID {} not found.", course_id);
            },
        }
    }
}
