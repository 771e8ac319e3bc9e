//! Text frame and style types for terminal rendering.

use crate::types::PieceKind;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Display color for a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
    }
}

/// A run of text. Piece spans carry their kind so the renderer can color them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub piece: Option<PieceKind>,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            piece: None,
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            piece: None,
            bold: true,
        }
    }

    pub fn piece(kind: PieceKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            piece: Some(kind),
            bold: false,
        }
    }
}

pub type Line = Vec<Span>;

/// Lines of styled spans, built by the view and flushed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFrame {
    lines: Vec<Line>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.lines.push(vec![Span::plain(text)]);
    }

    pub fn push_blank(&mut self) {
        self.lines.push(Vec::new());
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Unstyled text, one `\n`-terminated row per line.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            for span in line {
                out.push_str(&span.text);
            }
            out.push('\n');
        }
        out
    }
}
