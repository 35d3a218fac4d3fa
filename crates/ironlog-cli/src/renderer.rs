//! Terminal rendering for the markdown produced by the core's Display impls.
//!
//! Rich output goes through termimad; `--no-color` prints the markdown as is.

use std::fmt::Display;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders anything displayable either through termimad or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Format `value` and print it.
    pub fn render<T: Display + ?Sized>(&self, value: &T) -> Result<()> {
        print!("{}", self.to_terminal(&value.to_string()));
        Ok(())
    }

    fn to_terminal(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }
        let mut out = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            // Headers keep their hashes so nesting stays visible
            if line.starts_with('#') {
                out.push_str(&format!("\x1b[36m{line}\x1b[0m\n"));
            } else {
                out.push_str(&format!("{}\n", self.skin.inline(line)));
            }
        }
        out
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_is_unchanged() {
        let renderer = TerminalRenderer::new(false);
        let markdown = "# Legs\n\n- **squat**: 100 × 5\n";
        assert_eq!(renderer.to_terminal(markdown), markdown);
    }

    #[test]
    fn test_rich_output_colors_headers() {
        let renderer = TerminalRenderer::new(true);
        let output = renderer.to_terminal("## Notes\nplain line");
        assert!(output.starts_with("\x1b[36m## Notes\x1b[0m\n"));
        assert!(output.contains("plain line"));
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
