//! Content-stream backed page surface

use crate::layout::{Rect, encode_win_ansi, helvetica_text_width};

use super::{Surface, SurfaceHandle};

/// Resource name of the page font
pub(crate) const FONT_RESOURCE: &str = "F1";

/// A clickable area on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLink {
    pub rect: Rect,
    pub target: SurfaceHandle,
}

/// One page of the planner, recorded as PDF content stream operators.
#[derive(Debug, Clone)]
pub struct PageCanvas {
    width: f32,
    height: f32,
    content: String,
    links: Vec<PageLink>,
}

impl PageCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            content: String::new(),
            links: Vec::new(),
        }
    }

    /// The content stream drawn so far
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn links(&self) -> &[PageLink] {
        &self.links
    }

    pub(crate) fn into_parts(self) -> (String, Vec<PageLink>) {
        (self.content, self.links)
    }
}

impl Surface for PageCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_line_width(&mut self, width: f32) {
        self.content.push_str(&format!("{} w\n", width));
    }

    fn set_gray_stroke(&mut self, gray: f32) {
        self.content.push_str(&format!("{} G\n", gray));
    }

    fn set_dash(&mut self, pattern: &[f32], phase: f32) {
        let pattern: Vec<String> = pattern.iter().map(|v| v.to_string()).collect();
        self.content
            .push_str(&format!("[{}] {} d\n", pattern.join(" "), phase));
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.content.push_str(&format!("{} {} m\n", x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.content.push_str(&format!("{} {} l\n", x, y));
    }

    fn stroke(&mut self) {
        self.content.push_str("S\n");
    }

    fn fill_rect(&mut self, rect: Rect, gray: f32) {
        self.content.push_str(&format!(
            "q {} g {} {} {} {} re f Q\n",
            gray, rect.x, rect.y, rect.width, rect.height
        ));
    }

    fn show_text(&mut self, x: f32, y: f32, font_size: f32, text: &str) {
        self.content.push_str(&format!(
            "BT /{} {} Tf {} {} Td ({}) Tj ET\n",
            FONT_RESOURCE,
            font_size,
            x,
            y,
            escape_pdf_string(text)
        ));
    }

    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        helvetica_text_width(text, font_size)
    }

    fn link(&mut self, rect: Rect, target: SurfaceHandle) {
        self.links.push(PageLink { rect, target });
    }
}

/// Encode `text` for the page font as the body of a PDF literal string.
///
/// Bytes outside printable ASCII are written as octal escapes so the content
/// stream stays ASCII.
fn escape_pdf_string(text: &str) -> String {
    let encoded = encode_win_ansi(text);
    let mut escaped = String::with_capacity(encoded.len());
    for byte in encoded {
        match byte {
            b'(' | b')' | b'\\' => {
                escaped.push('\\');
                escaped.push(byte as char);
            }
            0x20..=0x7E => escaped.push(byte as char),
            _ => escaped.push_str(&format!("\\{:03o}", byte)),
        }
    }
    escaped
}
