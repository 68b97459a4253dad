/*!
Configuration data.
*/
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct ConfigFile {
    admin_file: Option<String>,
    professor_file: Option<String>,
    course_file: Option<String>,
    student_file: Option<String>,
    strict_import: Option<bool>,
}

#[derive(Debug)]
pub struct Cfg {
    pub admin_file: PathBuf,
    pub professor_file: PathBuf,
    pub course_file: PathBuf,
    pub student_file: PathBuf,
    /// When true (the default), the first malformed import line aborts the
    /// whole load; when false, bad lines are collected and reported while
    /// the rest of the file loads.
    pub strict_import: bool,
}

impl std::default::Default for Cfg {
    fn default() -> Self {
        Self {
            admin_file: PathBuf::from("data/admininfo.txt"),
            professor_file: PathBuf::from("data/profinfo.txt"),
            course_file: PathBuf::from("data/courseinfo.txt"),
            student_file: PathBuf::from("data/studentinfo.txt"),
            strict_import: true,
        }
    }
}

impl Cfg {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Unable to read config file: {}", &e))?;
        let cf: ConfigFile = toml::from_str(&file_contents)
            .map_err(|e| format!("Unable to deserialize config file: {}", &e))?;

        let mut c = Self::default();

        if let Some(s) = cf.admin_file {
            c.admin_file = PathBuf::from(s);
        }
        if let Some(s) = cf.professor_file {
            c.professor_file = PathBuf::from(s);
        }
        if let Some(s) = cf.course_file {
            c.course_file = PathBuf::from(s);
        }
        if let Some(s) = cf.student_file {
            c.student_file = PathBuf::from(s);
        }
        if let Some(b) = cf.strict_import {
            c.strict_import = b;
        }

        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::ensure_logging;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        ensure_logging();

        let c = Cfg::from_file("test/registrar.toml").unwrap();

        assert_eq!(c.course_file, PathBuf::from("test/good_courses_0.txt"));
        assert!(!c.strict_import);
        // Keys absent from the file keep their defaults.
        assert_eq!(c.admin_file, PathBuf::from("data/admininfo.txt"));
        assert_eq!(c.professor_file, PathBuf::from("data/profinfo.txt"));
    }

    #[test]
    fn missing_file_is_an_error() {
        ensure_logging();
        assert!(Cfg::from_file("no/such/registrar.toml").is_err());
    }
}
