pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod menu;
pub mod order;
pub mod session;

pub use error::{Result, SipError};
pub use menu::Menu;
pub use session::CafeSession;
