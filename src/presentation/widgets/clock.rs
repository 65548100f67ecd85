use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::model::indicator::{EMPTY, FILLED};

/// Start and end colours of the filled part of a bar.
pub const GRADIENT: ((u8, u8, u8), (u8, u8, u8)) = ((0x5a, 0x56, 0xe0), (0xee, 0x6f, 0xf8));
/// Colour of the empty track.
pub const EMPTY_COLOR: Color = Color::Rgb(0x60, 0x60, 0x60);

/// Draws the text produced by `ClockView::render`, colouring bar cells.
///
/// Filled cells take a colour along the gradient according to their
/// position in the full bar width; empty cells are grey.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockWidget<'a> {
    text: &'a str,
}

impl<'a> ClockWidget<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    fn styled_line(line: &'a str) -> Line<'a> {
        let bar_len = line.chars().filter(|c| *c == FILLED || *c == EMPTY).count();
        if bar_len == 0 {
            return Line::raw(line);
        }

        let mut spans = Vec::with_capacity(line.len());
        let mut position = 0;
        for c in line.chars() {
            let span = match c {
                FILLED => {
                    let color = gradient_at(position, bar_len);
                    position += 1;
                    Span::styled(c.to_string(), Style::default().fg(color))
                }
                EMPTY => {
                    position += 1;
                    Span::styled(c.to_string(), Style::default().fg(EMPTY_COLOR))
                }
                _ => Span::raw(c.to_string()),
            };
            spans.push(span);
        }
        Line::from(spans)
    }
}

/// Colour of cell `position` in a bar `len` cells wide.
pub fn gradient_at(position: usize, len: usize) -> Color {
    let ((r0, g0, b0), (r1, g1, b1)) = GRADIENT;
    let t = if len <= 1 {
        0.0
    } else {
        position.min(len - 1) as f64 / (len - 1) as f64
    };
    let mix = |from: u8, to: u8| -> u8 {
        (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
    };
    Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

impl Widget for ClockWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let lines: Vec<Line> = self.text.split('\n').map(Self::styled_line).collect();
        Paragraph::new(Text::from(lines)).render(area, buf);
    }
}
