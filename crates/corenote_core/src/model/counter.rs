//! Auxiliary counter shown above the quick-notes list.

use serde::{Deserialize, Serialize};

/// Plain integer counter with increment/decrement/reset.
///
/// Arithmetic saturates at the `i64` bounds instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) -> i64 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.saturating_sub(1);
        self.value
    }

    pub fn reset(&mut self) -> i64 {
        self.value = 0;
        self.value
    }

    pub fn set(&mut self, value: i64) -> i64 {
        self.value = value;
        self.value
    }
}
