use crate::config::OUTPUT_LABEL;

pub fn format_value_line(value: i32) -> String {
    format!("{}: {}", OUTPUT_LABEL, value)
}
