pub mod loader;
pub mod types;

pub use loader::{house_menu, MenuLoader, MenuSource, HOUSE_MENU};
pub use types::MenuConfig;
