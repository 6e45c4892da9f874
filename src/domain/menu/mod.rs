pub mod entity;
pub mod invariants;

pub use entity::Menu;
pub use invariants::validate_menu;
