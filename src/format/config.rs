//! Tree dump configuration

/// Tree dump configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Number of spaces per nesting level
    pub indent_width: usize,
    /// Whether to print one blank line between top-level declarations
    pub blank_line_between_declarations: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            blank_line_between_declarations: false,
        }
    }
}

impl DumpConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Separate top-level declarations with a blank line
    pub fn with_blank_line_between_declarations(mut self, enabled: bool) -> Self {
        self.blank_line_between_declarations = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DumpConfig::default();
        assert_eq!(config.indent_width, 2);
        assert!(!config.blank_line_between_declarations);
    }

    #[test]
    fn test_builder_chain() {
        let config = DumpConfig::new()
            .with_indent_width(4)
            .with_blank_line_between_declarations(true);
        assert_eq!(config.indent_width, 4);
        assert!(config.blank_line_between_declarations);
    }
}
