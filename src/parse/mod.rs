mod category;
mod clean;
mod date;
mod error;
mod meal;
mod menu_page;
mod remove_excess_whitespace;
pub(crate) mod static_pattern;

pub use error::{Error, Result};
pub use remove_excess_whitespace::remove_excess_whitespace;
