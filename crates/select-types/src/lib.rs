pub mod config;
pub mod error;
pub mod form;
pub mod select;
pub mod select_state;

pub use config::*;
pub use error::*;
pub use form::*;
pub use select::*;
pub use select_state::*;
