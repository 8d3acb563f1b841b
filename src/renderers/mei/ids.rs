//! `xml:id` generation for MEI export

/// Prefix of every generated identifier
pub const ID_PREFIX: &str = "m-";

/// Sequential identifier source, one per export
///
/// Starts at 1 and advances by exactly one per [`IdGenerator::next_id`].
#[derive(Debug, Clone)]
pub struct IdGenerator {
    counter: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { counter: 1 }
    }

    /// Return the next identifier and advance the counter
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", ID_PREFIX, self.counter);
        self.counter += 1;
        id
    }

    /// Counter value the next call will use
    pub fn peek(&self) -> u64 {
        self.counter
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric part of an identifier produced by [`IdGenerator`]
pub fn id_number(id: &str) -> Option<u64> {
    id.strip_prefix(ID_PREFIX)?.parse().ok()
}
