/*!
The admin menu.
*/
use time::Time;

use crate::course::TIME_FMT;
use crate::store::Store;

use super::{ask_for, view_all_courses};

pub(super) fn menu(store: &mut Store) {
    println!("1 -- View all courses");
    println!("2 -- Add new courses");
    println!("3 -- Delete courses");
    println!("4 -- Add new professor");
    println!("5 -- Delete professor");
    println!("6 -- Add new student");
    println!("7 -- Delete student");
    println!("8 -- Return to previous menu");

    loop {
        println!();
        let option = ask_for("Please enter your option, eg. '1'.");
        println!();
        match option.as_str() {
            "1" => { view_all_courses(store); },
            "2" => { add_new_courses(store); },
            "3" => { delete_courses(store); },
            "4" => { add_new_professor(store); },
            "5" => { delete_professor(store); },
            "6" => { add_new_student(store); },
            "7" => { delete_student(store); },
            "8" => { return; },
            _ => { println!("Invalid option. Please try again."); },
        }
    }
}

/// Re-prompt until the answer parses as an H:mm time; None means 'q'.
fn ask_for_time(message: &str) -> Option<Time> {
    let mut answer = ask_for(message);
    loop {
        if answer == "q" {
            return None;
        }
        match Time::parse(&answer, &TIME_FMT) {
            Ok(t) => { return Some(t); },
            Err(_) => { answer = ask_for("Invalid time format"); },
        }
    }
}

fn ask_for_capacity(message: &str) -> Option<u32> {
    let mut answer = ask_for(message);
    loop {
        if answer == "q" {
            return None;
        }
        match answer.parse() {
            Ok(n) => { return Some(n); },
            Err(_) => { answer = ask_for("Invalid capacity, eg. '72'"); },
        }
    }
}

fn add_new_courses(store: &mut Store) {
    loop {
        let id = ask_for(
            "Please enter the course ID you want to add to your list, \
             eg. 'CIT590'. or enter 'q' to return to the previous menu."
        );
        if id == "q" {
            return;
        }
        let name = ask_for("Please enter the course name, or type 'q' to end.");
        if name == "q" {
            return;
        }
        let start = match ask_for_time(
            "Please enter the course start time, or type 'q' to end. eg. '19:00'"
        ) {
            Some(t) => t,
            None => { return; },
        };
        let end = match ask_for_time(
            "Please enter the course end time, or type 'q' to end. eg. '20:00'"
        ) {
            Some(t) => t,
            None => { return; },
        };
        let days = ask_for("Please enter the course date, or type 'q' to end. eg. 'MW'");
        if days == "q" {
            return;
        }
        let capacity = match ask_for_capacity(
            "Please enter the course capacity, or type 'q' to end. eg. '72'"
        ) {
            Some(n) => n,
            None => { return; },
        };
        let professor_id = ask_for(
            "Please enter the course lecturer's id, or type 'q' to end. eg. '001'"
        );
        if professor_id == "q" {
            return;
        }

        if store.add_new_course(&id, &name, &professor_id, &days, start, end, capacity) {
            println!("Course with ID {} has been successfully added.", id);
        }
    }
}

fn delete_courses(store: &mut Store) {
    loop {
        let course_id = ask_for(
            "Please enter the course ID you want to delete, eg. 'CIT590'. \
             or enter 'q' to return to the previous menu."
        );
        if course_id == "q" {
            return;
        }

        if store.delete_course(&course_id) {
            println!("Course with ID {} has been successfully deleted.", course_id);
            println!();
        } else {
            println!("You enter a wrong course ID, try again.");
        }
    }
}

fn add_new_professor(store: &mut Store) {
    let id = ask_for("Please enter the professor's id, or type 'q' to quit");
    if id == "q" {
        return;
    }
    let name = ask_for("Please enter professor's name, or type 'q' to end");
    if name == "q" {
        return;
    }
    let uname = ask_for("Please enter the username");
    if uname == "q" {
        return;
    }
    let password = ask_for("Please enter a password");
    if password == "q" {
        return;
    }

    if store.add_new_professor(&id, &name, &uname, &password) {
        println!("Add new professor success");
    }
}

fn delete_professor(store: &mut Store) {
    let professor_id = ask_for(
        "Please enter the ID of the professor you want to delete, or type 'q' to quit."
    );
    if professor_id == "q" {
        return;
    }
    if store.delete_professor(&professor_id) {
        println!("Professor with ID {} has been successfully deleted.", professor_id);
    }
}

fn add_new_student(store: &mut Store) {
    let id = ask_for("Please enter the student's id, or type 'q' to quit");
    if id == "q" {
        return;
    }
    let name = ask_for("Please enter student's name, or type 'q' to end");
    if name == "q" {
        return;
    }
    let uname = ask_for("Please enter the username");
    if uname == "q" {
        return;
    }
    let password = ask_for("Please enter a password");
    if password == "q" {
        return;
    }

    if store.add_new_student(&id, &name, &uname, &password) {
        println!("Student with ID {} has been successfully added.", id);
    }

    // Optionally record courses the student already finished elsewhere.
    println!("Please enter ID of a course which this student already took, one in a time");
    let mut course_id = ask_for("Type 'q' to quit, type 'n' to stop adding.");
    while course_id != "n" {
        if course_id == "q" {
            return;
        }
        let grade = ask_for("Please enter the grade, eg. 'A'");
        store.record_grade(&id, &course_id, &grade);

        course_id = ask_for("Type 'q' to quit, type 'n' to stop adding.");
    }
}

fn delete_student(store: &mut Store) {
    let student_id = ask_for(
        "Please enter the ID of the student you want to delete, or type 'q' to quit."
    );
    if student_id == "q" {
        return;
    }
    if store.delete_student(&student_id) {
        println!("Student with ID {} has been successfully deleted.", student_id);
    }
}
