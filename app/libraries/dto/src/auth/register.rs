use app_error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct PostRegisterInput {
    pub email: String,
    pub password: String,
}

impl PostRegisterInput {
    pub fn validate(&self) -> Result<(), AppError> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') || email.chars().any(char::is_control) {
            return Err(AppError::bad_request("A valid email is required"));
        }
        if self.password.is_empty() {
            return Err(AppError::bad_request("Password is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PostRegisterOutput {
    pub message: String,
}

#[cfg(test)]
mod test {
    use super::*;

    fn input(email: &str, password: &str) -> PostRegisterInput {
        PostRegisterInput {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn register_validation() {
        assert!(input("a@b.io", "pw").validate().is_ok());
        assert!(input("", "pw").validate().is_err());
        assert!(input("no-at-sign", "pw").validate().is_err());
        assert!(input("a@b.io", "").validate().is_err());
        assert!(input("mallory\u{7f}@bank.io", "pw").validate().is_err());
        assert!(input("a\n@b.io", "pw").validate().is_err());
    }
}
