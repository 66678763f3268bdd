use serde::{Deserialize, Serialize};

/// Ordered duty roster. Position in the list is the rotation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Appends the trimmed name. Blank input is ignored and reported as `false`.
    pub fn add(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.names.push(trimmed.to_string());
        tracing::info!("Added {} to rotation at position {}", trimmed, self.names.len());
        true
    }

    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index >= self.names.len() {
            tracing::warn!("Ignoring removal at {} from a roster of {}", index, self.names.len());
            return None;
        }
        let removed = self.names.remove(index);
        tracing::info!("Removed {} from rotation", removed);
        Some(removed)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn replace(&mut self, names: Vec<String>) {
        self.names = names;
    }
}

impl From<Vec<String>> for Roster {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}
