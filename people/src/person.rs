//! Person value type

use tracing::trace;

// ============================================================================
// Person
// ============================================================================

/// A named individual with an age.
///
/// Both values are stored exactly as given and cannot be changed after
/// construction.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        let name = name.into();
        trace!(name = %name, age, "person created");
        Self { name, age }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}
