/*!
In-memory course-registration manager.

The [`store::Store`] is the single authoritative registry of courses and
users; [`auth`] establishes a logged-in principal against it, and the
role-specific operations live as method groups on the `Store` itself
(`store::enroll`, `store::admin`). The text-menu front end ([`inter`]) and
the flat-file loader ([`import`]) are pure callers of that core and hold no
business rules.
*/

pub mod auth;
pub mod config;
pub mod course;
pub mod import;
pub mod inter;
pub mod store;
pub mod user;

pub fn log_level_from_env() -> simplelog::LevelFilter {
    use simplelog::LevelFilter;

    let mut level_string = match std::env::var("LOG_LEVEL") {
        Err(_) => { return LevelFilter::Warn; },
        Ok(s) => s,
    };

    level_string.make_ascii_lowercase();
    match level_string.as_str() {
        "max" => LevelFilter::max(),
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}
