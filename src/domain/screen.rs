use serde::Serialize;

/// What the display area shows at one moment.
///
/// Taken as an immutable snapshot of the engine so the presentation layer
/// never holds on to engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// The primary line.
    pub expression: String,
    /// Past evaluations, most recent first.
    pub history: Vec<String>,
}

impl Screen {
    pub fn newer(&self) -> &str {
        self.history.first().map(String::as_str).unwrap_or_default()
    }

    pub fn older(&self) -> &str {
        self.history.get(1).map(String::as_str).unwrap_or_default()
    }

    /// Display lines top-down: the older history entry sits above the newer
    /// one, the primary line last. Missing history shows as empty lines.
    pub fn lines(&self) -> [&str; 3] {
        [self.older(), self.newer(), self.expression.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_put_older_history_on_top() {
        let screen = Screen {
            expression: "7".to_string(),
            history: vec!["5×2=10".to_string(), "2+3=5".to_string()],
        };
        assert_eq!(screen.lines(), ["2+3=5", "5×2=10", "7"]);
    }

    #[test]
    fn test_lines_with_partial_history() {
        let screen = Screen {
            expression: "0".to_string(),
            history: vec!["1=1".to_string()],
        };
        assert_eq!(screen.lines(), ["", "1=1", "0"]);
    }
}
