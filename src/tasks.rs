//! Minimal list-backed task model

/// Background shade of a list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShade {
    Light,
    White,
}

/// Alternating shade: even rows light, odd rows white
#[must_use]
pub const fn row_shade(row: usize) -> RowShade {
    if row % 2 == 0 {
        RowShade::Light
    } else {
        RowShade::White
    }
}

/// Ordered list of task descriptions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<String>,
}

impl TaskList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task, returning the row it was inserted at
    ///
    /// Input is trimmed; blank input is ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<usize> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let row = self.tasks.len();
        self.tasks.push(text.to_string());
        Some(row)
    }

    #[must_use]
    pub fn get(&self, row: usize) -> Option<&str> {
        self.tasks.get(row).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(String::as_str)
    }
}
