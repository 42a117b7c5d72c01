#[allow(clippy::module_inception)]
mod cli;
mod query;

pub use cli::*;
pub use query::*;
