/*!
Registry users.

The three concrete roles share a [`BaseUser`] attribute set; [`User`] is the
sum type over them. Only students carry extra state (their enrollment list
and grade map), which is mutated exclusively through the enrollment methods
on [`crate::store::Store`].
*/
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Professor,
    Student,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let token = match self {
            Role::Admin     => "Admin",
            Role::Professor => "Professor",
            Role::Student   => "Student",
        };

        write!(f, "{}", token)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BaseUser {
    /// Immutable identifier, the primary key within the role's collection.
    pub id: String,
    /// Display name ("Brandon Krakowsky").
    pub name: String,
    /// Login name, the secondary key within the role's collection.
    pub uname: String,
    /// Opaque string, compared verbatim at login.
    pub password: String,
}

impl BaseUser {
    pub fn new(id: String, name: String, uname: String, password: String) -> Self {
        Self { id, name, uname, password }
    }

    pub fn into_admin(self) -> User { User::Admin(self) }
    pub fn into_professor(self) -> User { User::Professor(self) }
    pub fn into_student(self) -> User { User::Student(Student::new(self)) }
}

#[derive(Clone, Debug)]
pub struct Student {
    pub base: BaseUser,
    /// Ids of currently enrolled courses, in enrollment order, no duplicates.
    pub(crate) courses: Vec<String>,
    /// Course id -> letter grade. Presence here means "finished".
    pub(crate) grades: HashMap<String, String>,
}

impl Student {
    pub fn new(base: BaseUser) -> Self {
        Self {
            base,
            courses: Vec::new(),
            grades: HashMap::new(),
        }
    }

    /// Ids of the courses this student is currently enrolled in.
    pub fn courses(&self) -> &[String] { &self.courses }

    /// Grades of finished courses, keyed by course id.
    pub fn grades(&self) -> &HashMap<String, String> { &self.grades }
}

#[derive(Clone, Debug)]
pub enum User {
    Admin(BaseUser),
    Professor(BaseUser),
    Student(Student),
}

impl User {
    pub fn id(&self) -> &str {
        match self {
            User::Admin(base) => &base.id,
            User::Professor(base) => &base.id,
            User::Student(s) => &s.base.id,
        }
    }

    pub fn uname(&self) -> &str {
        match self {
            User::Admin(base) => &base.uname,
            User::Professor(base) => &base.uname,
            User::Student(s) => &s.base.uname,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            User::Admin(base) => &base.name,
            User::Professor(base) => &base.name,
            User::Student(s) => &s.base.name,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            User::Admin(_) => Role::Admin,
            User::Professor(_) => Role::Professor,
            User::Student(_) => Role::Student,
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.role(), self.name())
    }
}
