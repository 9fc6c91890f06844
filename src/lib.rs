pub mod config;
pub mod data;
pub mod output;

pub use data::Data;
pub use output::format_value_line;
