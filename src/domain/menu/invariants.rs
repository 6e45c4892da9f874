use super::entity::Menu;
use crate::domain::{DomainError, DomainResult};

/// Validates all Menu invariants
pub fn validate_menu(menu: &Menu) -> DomainResult<()> {
    if menu.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Menu name cannot be empty".to_string(),
        ));
    }
    if menu.category.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Menu category cannot be empty".to_string(),
        ));
    }
    if menu.price < 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Menu price cannot be negative, got {}",
            menu.price
        )));
    }
    Ok(())
}

/// Invariants that must hold true for Menu domain:
///
/// 1. Name and category are never blank
/// 2. Price is zero or positive
/// 3. Image is optional

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_menu() {
        let menu = Menu::new("Iced Latte", 1000, "coffee");
        assert!(validate_menu(&menu).is_ok());
    }

    #[test]
    fn test_free_item_is_valid() {
        let menu = Menu::new("Water", 0, "drinks");
        assert!(validate_menu(&menu).is_ok());
    }

    #[test]
    fn test_blank_name_fails() {
        let menu = Menu::new("   ", 1000, "coffee");
        assert!(validate_menu(&menu).is_err());
    }

    #[test]
    fn test_negative_price_fails() {
        let menu = Menu::new("Americano", -1, "coffee");
        assert!(validate_menu(&menu).is_err());
    }
}
