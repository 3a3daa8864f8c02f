use std::io::{self, Stdout, Write};

use colored::Colorize;

/// Visual role of a line of console output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Info,
    Success,
    Banner,
    Error,
}

/// Maps a [`Tone`] to terminal styling. Holds no state besides the on/off switch.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Painter {
    enabled: bool,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }

        let styled = match tone {
            Tone::Plain => return text.to_string(),
            Tone::Info => text.blue().bold(),
            Tone::Success => text.green().bold(),
            Tone::Banner => text.cyan().bold(),
            Tone::Error => text.red().bold(),
        };
        styled.to_string()
    }
}

/// Line-oriented writer used for everything the user sees.
pub struct Console<W: Write> {
    out: W,
    painter: Painter,
}

impl Console<Stdout> {
    pub fn stdout(painter: Painter) -> Self {
        Self::new(io::stdout(), painter)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, painter: Painter) -> Self {
        Self { out, painter }
    }

    pub fn line(&mut self, tone: Tone, text: impl AsRef<str>) -> io::Result<()> {
        let painted = self.painter.paint(text.as_ref(), tone);
        writeln!(self.out, "{painted}")
    }

    pub fn plain(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        self.line(Tone::Plain, text)
    }

    pub fn error(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        self.line(Tone::Error, text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Write `text` without a trailing newline and flush so it shows before input is read.
    pub fn prompt(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        write!(self.out, "{}", text.as_ref())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Console<Vec<u8>> {
    /// Everything written so far, for buffered consoles.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_default() {
        assert_eq!(Tone::default(), Tone::Plain);
    }

    #[test]
    fn test_painter_disabled_returns_text_unchanged() {
        let painter = Painter::plain();
        for tone in [
            Tone::Plain,
            Tone::Info,
            Tone::Success,
            Tone::Banner,
            Tone::Error,
        ] {
            assert_eq!(painter.paint("hello", tone), "hello");
        }
    }

    #[test]
    fn test_painter_plain_tone_never_styled() {
        let painter = Painter::new(true);
        assert_eq!(painter.paint("hello", Tone::Plain), "hello");
    }

    #[test]
    fn test_painter_enabled_keeps_text() {
        let painter = Painter::new(true);
        assert!(painter.paint("Goodbye!", Tone::Success).contains("Goodbye!"));
    }

    #[test]
    fn test_console_writes_lines() {
        let mut console = Console::new(Vec::new(), Painter::plain());
        console.line(Tone::Info, "first").unwrap();
        console.blank().unwrap();
        console.plain("second").unwrap();
        console.error("third").unwrap();

        assert_eq!(console.contents(), "first\n\nsecond\nthird\n");
    }

    #[test]
    fn test_console_prompt_has_no_newline() {
        let mut console = Console::new(Vec::new(), Painter::plain());
        console.prompt("Enter your choice: ").unwrap();
        assert_eq!(console.contents(), "Enter your choice: ");
    }

    #[test]
    fn test_console_into_inner() {
        let mut console = Console::new(Vec::new(), Painter::plain());
        console.plain("x").unwrap();
        assert_eq!(console.into_inner(), b"x\n".to_vec());
    }
}
