//! Output writer with indentation tracking
//!
//! Every dump line is written whole, so the writer only tracks the current nesting level.

use super::config::DumpConfig;

/// Writer that tracks indentation and builds the dump text
pub struct TreeWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Configuration
    config: DumpConfig,
}

impl TreeWriter {
    /// Create a new writer with the given config
    pub fn new(config: DumpConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
        }
    }

    /// Get the finished output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write one indented line
    pub fn line(&mut self, s: &str) {
        let width = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write an empty line (never indented)
    pub fn blank_line(&mut self) {
        self.output.push('\n');
    }

    /// Run `f` one level deeper
    pub fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent();
        f(self);
        self.dedent();
    }

    /// Get the configuration
    pub fn config(&self) -> &DumpConfig {
        &self.config
    }
}
