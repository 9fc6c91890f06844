/// Value the entry point wraps before printing.
pub const DEFAULT_VALUE: i32 = 42;

/// Label written in front of the adjusted value.
pub const OUTPUT_LABEL: &str = "Value";
