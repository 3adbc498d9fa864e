use std::collections::VecDeque;

/// How many past evaluations the screen remembers.
pub const HISTORY_CAPACITY: usize = 2;

/// Past evaluations as `expr=result` lines, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an evaluation, evicting the oldest entry past capacity.
    pub fn record(&mut self, expression: &str, result: &str) {
        self.entries.push_front(format!("{expression}={result}"));
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}
