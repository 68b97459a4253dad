/*!
Authenticating users against the registry.

Passwords are opaque strings compared verbatim; there is no hashing and no
key material. The two failure outcomes are distinguished here for logging,
but the front end must render them identically so that nothing leaks about
whether a username exists.
*/
use crate::store::Store;
use crate::user::Role;

/// A logged-in user: the concrete role plus the id to act under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Principal {
    pub role: Role,
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthResult {
    Ok(Principal),
    NoSuchUser,
    BadPassword,
}

impl AuthResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, AuthResult::Ok(_))
    }
}

/// Look the user up by (role, username) and check the password exactly.
pub fn authenticate(
    store: &Store,
    role: Role,
    uname: &str,
    password: &str,
) -> AuthResult {
    log::trace!("authenticate( {}, {:?}, [password] ) called.", role, uname);

    let base = match role {
        Role::Student => store.get_student_by_uname(uname).map(|s| &s.base),
        Role::Professor => store.get_professor_by_uname(uname),
        Role::Admin => store.get_admin_by_uname(uname),
    };

    let base = match base {
        Some(b) => b,
        None => {
            log::warn!("Login failed: no {} with uname {:?}.", role, uname);
            return AuthResult::NoSuchUser;
        },
    };

    if base.password != password {
        log::warn!("Login failed: bad password for {} {:?}.", role, uname);
        return AuthResult::BadPassword;
    }

    AuthResult::Ok(Principal {
        role,
        id: base.id.clone(),
        name: base.name.clone(),
    })
}
