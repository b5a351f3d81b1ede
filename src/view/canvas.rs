use std::io::{self, Write};

use crate::{pos, world::DEAD_CHAR, Pos};

/// A rectangle of characters, one frame worth of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    /// A canvas filled with dead cells.
    pub fn new(width: usize, height: usize) -> Self {
        let rows = (0..height).map(|_| vec![DEAD_CHAR; width]).collect();
        Self { rows }
    }

    pub fn message(text: &str) -> Self {
        let rows = vec![text.chars().collect()];
        Self { rows }
    }

    #[cfg(test)]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// paints every local position `f` returns a character for, `x` is the row.
    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<char>) {
        for (x, row) in self.rows.iter_mut().enumerate() {
            for (y, slot) in row.iter_mut().enumerate() {
                if let Some(char) = f(pos!(x as i64, y as i64)) {
                    *slot = char;
                }
            }
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }

    /// Writes the frame, either over a cleared terminal or followed by a blank line.
    pub fn display(&self, out: &mut impl Write, clear: bool) -> io::Result<()> {
        if clear {
            let clear = termion::clear::All;
            write!(out, "{clear}")?;
            for (index, line) in self.lines().iter().enumerate() {
                let row = u16::try_from(index + 1).unwrap_or(u16::MAX);
                let goto = termion::cursor::Goto(1, row);
                writeln!(out, "{goto}{line}")?;
            }
        } else {
            for line in self.lines() {
                writeln!(out, "{line}")?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}
