use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

/// General email syntax (RFC 5322): a dot-atom or quoted local part, then a
/// dotted hostname or a bracketed address literal.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r##"^(?i)(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"##,
        r##"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"##,
        r##"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"##,
        r##"|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}"##,
        r##"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?"##,
        r##"|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"##,
    ))
    .expect("email pattern must compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn check_email(email: &str) -> Result<(), Error> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(Error::Flag(format!("bad email {:?}", email)))
    }
}

/// What the identity service needs to issue a token. Immutable once built.
pub struct Credentials {
    project_key: String,
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(project_key: &str, email: &str, password: &str) -> Result<Self, Error> {
        if project_key.is_empty() {
            return Err(Error::Flag("missing required flags [--project-key]".into()));
        }
        check_email(email)?;
        if password.is_empty() {
            return Err(Error::Flag("empty password".into()));
        }
        Ok(Credentials {
            project_key: project_key.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("project_key", &"<redacted>")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
