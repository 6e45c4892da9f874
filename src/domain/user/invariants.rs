use super::entity::User;
use crate::domain::{DomainError, DomainResult};

/// Validates all User invariants
pub fn validate_user(user: &User) -> DomainResult<()> {
    if user.nickname.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "User nickname cannot be empty".to_string(),
        ));
    }
    if user.password.is_empty() {
        return Err(DomainError::InvariantViolation(
            "User password cannot be empty".to_string(),
        ));
    }
    if let Some(role) = user.roles.iter().find(|role| role.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(format!(
            "Role tag cannot be blank: {:?}",
            role
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user() {
        let user = User::new("barista", "hashed-secret").with_role("STAFF");
        assert!(validate_user(&user).is_ok());
    }

    #[test]
    fn test_user_without_roles_is_valid() {
        assert!(validate_user(&User::new("guest", "x")).is_ok());
    }

    #[test]
    fn test_empty_nickname_fails() {
        assert!(validate_user(&User::new("", "x")).is_err());
    }

    #[test]
    fn test_blank_role_fails() {
        let user = User::new("barista", "x").with_role("  ");
        assert!(validate_user(&user).is_err());
    }
}
