/// Session-history abstraction. Entries are bare location strings (path
/// without leading separator, plus query); no state payload is ever stored
/// alongside them, so the dispatcher re-derives everything from the path.
pub trait History {
    /// The current location. Stable across repeated calls while the
    /// location is unchanged.
    fn current_location(&self) -> String;

    /// Append a new entry after the current one, discarding any forward
    /// entries.
    fn push(&mut self, path: &str);

    /// Overwrite the current entry in place.
    fn replace(&mut self, path: &str);

    /// Move one entry back, returning the new current location. The caller
    /// is expected to re-dispatch it as a history replay.
    fn back(&mut self) -> Option<String>;

    /// Move one entry forward, returning the new current location.
    fn forward(&mut self) -> Option<String>;
}

/// In-process history with a cursor, mirroring browser session history:
/// pushing truncates the forward branch, back/forward move the cursor.
pub struct SessionHistory {
    entries: Vec<String>,
    index: usize,
}

impl SessionHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![normalize(initial)],
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new("")
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches('/').to_string()
}

impl History for SessionHistory {
    fn current_location(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(normalize(path));
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.index] = normalize(path);
    }

    fn back(&mut self) -> Option<String> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current_location())
    }

    fn forward(&mut self) -> Option<String> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current_location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let mut history = SessionHistory::new("");
        history.push("key");
        history.push("og");
        assert_eq!(history.current_location(), "og");
        assert_eq!(history.back(), Some("key".to_string()));
        assert_eq!(history.back(), Some(String::new()));
        assert_eq!(history.back(), None);
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let mut history = SessionHistory::new("");
        history.replace("steps");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_location(), "steps");
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = SessionHistory::new("");
        history.push("key");
        history.push("og");
        history.back();
        history.push("steps");
        assert_eq!(history.forward(), None);
        assert_eq!(history.back(), Some(String::new()));
        assert_eq!(history.forward(), Some("key".to_string()));
        assert_eq!(history.forward(), Some("steps".to_string()));
    }

    #[test]
    fn test_leading_separator_is_stripped() {
        let mut history = SessionHistory::new("/og?url=x");
        assert_eq!(history.current_location(), "og?url=x");
        history.push("/key");
        assert_eq!(history.current_location(), "key");
    }

    #[test]
    fn test_current_location_is_stable() {
        let history = SessionHistory::new("key");
        assert_eq!(history.current_location(), history.current_location());
    }
}
