//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait applies ANSI styling via the `colored` crate.
//! Implementations for `&str` and `String` are provided so string literals can
//! be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn harm_style(&self) -> ColoredString;
    fn terminal_style(&self) -> ColoredString;
    fn system_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn success_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn harm_style(&self) -> ColoredString {
        self.bold().truecolor(230, 80, 80)
    }
    fn terminal_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
    fn system_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(220, 180, 40)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_str().room_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn harm_style(&self) -> ColoredString {
        self.as_str().harm_style()
    }
    fn terminal_style(&self) -> ColoredString {
        self.as_str().terminal_style()
    }
    fn system_style(&self) -> ColoredString {
        self.as_str().system_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Wrapping options for ordinary message blocks.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth()).subsequent_indent("  ")
}

/// Wrapping options for text shown beneath a heading.
pub fn indented_block() -> Options<'static> {
    Options::new(termwidth()).initial_indent("    ").subsequent_indent("    ")
}
