use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, PartialEq, Clone)]
pub struct AdminForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Debug for AdminForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AdminForm {{name={}, email={}, password=MASKED}}",
            self.name, self.email
        )
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Debug for LoginForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoginForm {{email={}, password=MASKED}}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mask_password() {
        let form = LoginForm {
            email: "admin@ngo.org".to_owned(),
            password: "secret".to_owned(),
        };
        let debug = format!("{form:?}");
        assert!(debug.contains("admin@ngo.org"));
        assert!(!debug.contains("secret"));
    }
}
