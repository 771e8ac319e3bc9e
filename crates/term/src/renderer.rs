//! TerminalRenderer: flushes text frames to a terminal (or any writer).
//!
//! Output is line-oriented; the menu loop reads from cooked stdin, so the
//! renderer never enters raw mode or the alternate screen.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::frame::{piece_color, Rgb, Span, TextFrame};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Write every line of `frame`.
    pub fn draw(&mut self, frame: &TextFrame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write a prompt without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a frame into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// With `color` off the output is exactly [`TextFrame::to_plain_string`].
pub fn encode_frame_into(frame: &TextFrame, color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in frame.lines() {
        for span in line {
            if color {
                encode_styled_span(span, out)?;
            } else {
                out.queue(Print(&span.text))?;
            }
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn encode_styled_span(span: &Span, out: &mut Vec<u8>) -> Result<()> {
    let styled = span.piece.is_some() || span.bold;
    if let Some(kind) = span.piece {
        out.queue(SetForegroundColor(rgb_to_color(piece_color(kind))))?;
    }
    if span.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    out.queue(Print(&span.text))?;
    if styled {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
