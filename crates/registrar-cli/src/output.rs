// Output formatting and styling

use colored::{ColoredString, Colorize};

type Painter = fn(&str) -> ColoredString;

/// Output styling configuration
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Styling for a terminal, with colours only when both stdout is a tty
    /// and the configuration allows them
    pub fn for_terminal(colors_enabled: bool) -> Self {
        Self {
            use_colors: colors_enabled && atty::is(atty::Stream::Stdout),
        }
    }

    /// Uncoloured output
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        self.tagged("✓", |tag| tag.green().bold(), msg)
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        self.tagged("✗", |tag| tag.red().bold(), msg)
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        self.tagged("⚠", |tag| tag.yellow(), msg)
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        self.tagged("ℹ", |tag| tag.blue(), msg)
    }

    /// Identifiers such as course and student IDs
    pub fn code(&self, code: &str) -> String {
        self.paint(code, |text| text.cyan())
    }

    /// Input prompt, followed by a space
    pub fn prompt(&self, prompt: &str) -> String {
        format!("{} ", self.paint(prompt, |text| text.magenta().bold()))
    }

    /// Format header
    pub fn header(&self, title: &str) -> String {
        self.paint(title, |text| text.bold())
    }

    /// `--- title ---` banner above a listing
    pub fn section(&self, title: &str) -> String {
        self.paint(&format!("--- {} ---", title), |text| text.bold())
    }

    /// Dimmed text for empty placeholders
    pub fn muted(&self, msg: &str) -> String {
        self.paint(msg, |text| text.dimmed())
    }

    fn tagged(&self, tag: &str, paint: Painter, msg: &str) -> String {
        format!("{} {}", self.paint(tag, paint), msg)
    }

    fn paint(&self, text: &str, paint: Painter) -> String {
        if self.use_colors {
            paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Print an error to stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}
