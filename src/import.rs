/*!
Loading the flat seed files into the registry.

Four semicolon-delimited files, read once at startup in the order
admin -> professor -> course -> student, so that course records can resolve
their professor by display name and student records can carry grades for
courses by id. Lines starting with `#` are comments; fields are trimmed.

A malformed line produces an [`ImportError`] naming the file, line and
reason. In strict mode the first such error aborts the whole load; in
lenient mode bad lines are collected in the [`LoadSummary`] while the rest
of the file loads. A course whose professor cannot be resolved is not a
parse error: it is logged and skipped in either mode.
*/
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use time::Time;

use crate::config::Cfg;
use crate::course::{Course, TIME_FMT};
use crate::store::Store;
use crate::user::{BaseUser, Student, User};

#[derive(Debug, PartialEq, Eq)]
pub struct ImportError {
    pub file: String,
    /// 1-based line in the file; 0 when the file itself was unreadable.
    pub line: u64,
    pub reason: String,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}: {}", self.file, self.reason)
        } else {
            write!(f, "{}, line {}: {}", self.file, self.line, self.reason)
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadSummary {
    pub admins: usize,
    pub professors: usize,
    pub courses: usize,
    pub students: usize,
    /// Per-line errors collected in lenient mode (always empty in strict
    /// mode, where the first one aborts the load instead).
    pub skipped: Vec<ImportError>,
}

/// Load all four seed files per the configuration.
pub fn load_files(store: &mut Store, cfg: &Cfg) -> Result<LoadSummary, ImportError> {
    log::trace!("load_files( S, {:?} ... ) called.", &cfg.admin_file);

    let strict = cfg.strict_import;
    let mut summary = LoadSummary::default();

    summary.admins = load_path(
        &cfg.admin_file, strict, &mut summary.skipped,
        |row| apply_admin(store, row),
    )?;
    summary.professors = load_path(
        &cfg.professor_file, strict, &mut summary.skipped,
        |row| apply_professor(store, row),
    )?;
    summary.courses = load_path(
        &cfg.course_file, strict, &mut summary.skipped,
        |row| apply_course(store, row),
    )?;
    summary.students = load_path(
        &cfg.student_file, strict, &mut summary.skipped,
        |row| apply_student(store, row),
    )?;

    log::info!(
        "Loaded {} admins, {} professors, {} courses, {} students ({} lines skipped).",
        summary.admins, summary.professors, summary.courses, summary.students,
        summary.skipped.len()
    );
    Ok(summary)
}

fn load_path<F>(
    path: &Path,
    strict: bool,
    skipped: &mut Vec<ImportError>,
    apply: F,
) -> Result<usize, ImportError>
where
    F: FnMut(&csv::StringRecord) -> Result<bool, String>,
{
    let label = path.display().to_string();
    let f = File::open(path).map_err(|e| ImportError {
        file: label.clone(),
        line: 0,
        reason: format!("unable to open: {}", e),
    })?;

    load_lines(f, &label, strict, skipped, apply)
}

/**
Feed each record of one file through `apply`, which reports the record as
loaded (`Ok(true)`), quietly skipped (`Ok(false)`), or malformed
(`Err(reason)`). Returns the number of loaded records.
*/
fn load_lines<R, F>(
    r: R,
    file_label: &str,
    strict: bool,
    skipped: &mut Vec<ImportError>,
    mut apply: F,
) -> Result<usize, ImportError>
where
    R: Read,
    F: FnMut(&csv::StringRecord) -> Result<bool, String>,
{
    log::trace!("load_lines( R, {:?}, strict: {} ) called.", file_label, strict);

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .has_headers(false)
        .from_reader(r);

    let mut n_loaded: usize = 0;

    for (n, res) in csv_reader.records().enumerate() {
        let outcome = match res {
            Ok(record) => {
                let line = match record.position() {
                    Some(p) => p.line(),
                    None => (n + 1) as u64,
                };
                match apply(&record) {
                    Ok(true) => {
                        n_loaded += 1;
                        continue;
                    },
                    Ok(false) => { continue; },
                    Err(reason) => ImportError {
                        file: file_label.to_owned(),
                        line,
                        reason,
                    },
                }
            },
            Err(e) => {
                let line = match e.position() {
                    Some(p) => p.line(),
                    None => (n + 1) as u64,
                };
                ImportError {
                    file: file_label.to_owned(),
                    line,
                    reason: format!("{}", &e),
                }
            },
        };

        if strict {
            return Err(outcome);
        }
        log::warn!("Skipping bad import line: {}", &outcome);
        skipped.push(outcome);
    }

    log::trace!("    ...load_lines() loaded {} records.", n_loaded);
    Ok(n_loaded)
}

fn field(row: &csv::StringRecord, n: usize, what: &str) -> Result<String, String> {
    match row.get(n) {
        Some(s) if !s.is_empty() => Ok(s.to_owned()),
        Some(_) => Err(format!("empty {}", what)),
        None => Err(format!("no {}", what)),
    }
}

fn parse_time(s: &str, what: &str) -> Result<Time, String> {
    Time::parse(s, &TIME_FMT)
        .map_err(|_| format!("unable to parse {} {:?} as H:mm time", what, s))
}

/// `id;name;username;password`
fn apply_admin(store: &mut Store, row: &csv::StringRecord) -> Result<bool, String> {
    let base = BaseUser::new(
        field(row, 0, "id")?,
        field(row, 1, "name")?,
        field(row, 2, "username")?,
        field(row, 3, "password")?,
    );
    Ok(store.add_user(base.into_admin()))
}

/// `name;id;username;password` — note the order differs from the admin file.
fn apply_professor(store: &mut Store, row: &csv::StringRecord) -> Result<bool, String> {
    let name = field(row, 0, "name")?;
    let id = field(row, 1, "id")?;
    let base = BaseUser::new(
        id,
        name,
        field(row, 2, "username")?,
        field(row, 3, "password")?,
    );
    Ok(store.add_user(base.into_professor()))
}

/// `id;name;professorName;weekdayTokens;start;end;capacity`
fn apply_course(store: &mut Store, row: &csv::StringRecord) -> Result<bool, String> {
    let id = field(row, 0, "id")?;
    let name = field(row, 1, "name")?;
    let professor_name = field(row, 2, "professor name")?;
    let days = field(row, 3, "weekday tokens")?;
    let start = parse_time(&field(row, 4, "start time")?, "start time")?;
    let end = parse_time(&field(row, 5, "end time")?, "end time")?;
    let capacity: u32 = field(row, 6, "capacity")?
        .parse()
        .map_err(|_| format!("unable to parse capacity {:?} as a number", row.get(6).unwrap_or("")))?;

    let professor_id = match store.get_professor_by_name(&professor_name) {
        Some(p) => p.id.clone(),
        None => {
            log::warn!(
                "Skipping course {:?}: no professor named {:?}.",
                &id, &professor_name
            );
            return Ok(false);
        },
    };

    let course = Course::new(id, name, professor_id, days, start, end, capacity);
    Ok(store.add_course(course))
}

/// `id;name;username;password;courseId1:grade1,courseId2:grade2,...`
///
/// The fifth field may be absent or empty: a student with no finished
/// courses yet.
fn apply_student(store: &mut Store, row: &csv::StringRecord) -> Result<bool, String> {
    let base = BaseUser::new(
        field(row, 0, "id")?,
        field(row, 1, "name")?,
        field(row, 2, "username")?,
        field(row, 3, "password")?,
    );
    let mut student = Student::new(base);

    if let Some(token) = row.get(4) {
        for (course_id, grade) in grade_pairs(token)? {
            student.grades.insert(course_id, grade);
        }
    }

    Ok(store.add_user(User::Student(student)))
}

fn grade_pairs(token: &str) -> Result<Vec<(String, String)>, String> {
    let mut pairs = Vec::new();
    for chunk in token.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        match chunk.split_once(':') {
            Some((id, grade)) if !id.trim().is_empty() && !grade.trim().is_empty() => {
                pairs.push((id.trim().to_owned(), grade.trim().to_owned()));
            },
            _ => {
                return Err(format!("malformed course:grade pair {:?}", chunk));
            },
        }
    }
    Ok(pairs)
}
