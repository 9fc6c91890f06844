use log::debug;

/// Holds a single integer that is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Data {
    value: i32,
}

impl Data {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns the stored value if it is even, otherwise the next even value.
    ///
    /// The increment wraps, so `i32::MAX` adjusts to `i32::MIN`.
    pub fn adjusted_value(&self) -> i32 {
        // Remainder is -1 for negative odd values, so compare against zero.
        if self.value % 2 == 0 {
            return self.value;
        }

        let adjusted = self.value.wrapping_add(1);
        debug!("Rounded odd value {} up to {}", self.value, adjusted);
        adjusted
    }
}
