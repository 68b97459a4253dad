/*!
The text-menu front end.

Line-based stdin/stdout only. This layer holds no business rules: every
decision is delegated to the store, and the menus only render outcomes.
Policy diagnostics arrive on the log channel, which the binary points at
stdout.
*/
use std::io::{self, BufRead};

use crate::auth::{self, AuthResult};
use crate::store::Store;
use crate::user::Role;

mod admin;
mod professor;
mod student;

const BANNER: &str = "---------------------------";

/// Prompt for one line of input, trimmed. EOF on stdin quits the program.
fn ask_for(message: &str) -> String {
    println!("{}", message);

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => quit(),
        Ok(_) => line.trim().to_owned(),
        Err(e) => {
            log::error!("Error reading from stdin: {}", &e);
            quit()
        },
    }
}

fn quit() -> ! {
    println!("Shutting down the Student Management System...");
    std::process::exit(0);
}

/// The top-level role-selection loop. Returns only via [`quit`].
pub fn run(store: &mut Store) {
    log::trace!("inter::run( S ) called.");

    loop {
        println!("{}", BANNER);
        println!("Students Management System");
        println!("{}", BANNER);
        println!("1 -- Login as a student");
        println!("2 -- Login as a professor");
        println!("3 -- Login as an admin");
        println!("4 -- Quit the system");
        println!();

        let mut option = ask_for("Please enter your option, eg. '1'.");
        while !matches!(option.as_str(), "1" | "2" | "3" | "4") {
            option = ask_for(
                "Invalid option. Please try again. Please enter your option, eg. '1'."
            );
        }

        match option.as_str() {
            "1" => login(store, Role::Student),
            "2" => login(store, Role::Professor),
            "3" => login(store, Role::Admin),
            _ => quit(),
        }
    }
}

fn login(store: &mut Store, role: Role) {
    let uname = ask_for("Please enter your username, or type 'q' to quit");
    if uname == "q" {
        return;
    }
    let password = ask_for("Please enter your password, or type 'q' to quit");
    if password == "q" {
        return;
    }

    let principal = match auth::authenticate(store, role, &uname, &password) {
        AuthResult::Ok(p) => p,
        // NoSuchUser and BadPassword render identically.
        _ => {
            println!("Wrong username or password!");
            return;
        },
    };

    println!("{}", BANNER);
    println!(" Welcome, {}", &principal.name);
    println!("{}", BANNER);

    match principal.role {
        Role::Student => student::menu(store, &principal.id),
        Role::Professor => professor::menu(store, &principal.id),
        Role::Admin => admin::menu(store),
    }
}

/// Shared by the student and admin menus.
fn view_all_courses(store: &Store) {
    for course in store.courses() {
        println!("{}", course);
    }
}
