// src/memory/mod.rs

/// Labeled log of generation attempts. Suppressed failures (rate
/// limits, the no-key path) land here instead of the error banner.
pub trait Memory {
    fn log(&mut self, label: &str, content: &str);
    fn read_all(&self) -> Vec<(String, String)>;
}

/// In-memory, session-lifetime implementation.
#[derive(Default, Debug)]
pub struct AttemptLog {
    entries: Vec<(String, String)>,
}

impl AttemptLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry recorded under the given label.
    pub fn latest(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(l, _)| l == label)
            .map(|(_, content)| content.as_str())
    }
}

impl Memory for AttemptLog {
    fn log(&mut self, label: &str, content: &str) {
        self.entries.push((label.to_string(), content.to_string()));
    }

    fn read_all(&self) -> Vec<(String, String)> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_returns_the_newest_entry_for_a_label() {
        let mut log = AttemptLog::new();
        log.log("gemini", "haiku generated");
        log.log("config", "no api key, serving local haiku");
        log.log("gemini", "rate limited, serving local haiku");

        assert_eq!(log.len(), 3);
        assert_eq!(
            log.latest("gemini"),
            Some("rate limited, serving local haiku")
        );
        assert_eq!(log.latest("session"), None);
    }
}
