/// Widest bar an indicator will draw, in cells.
pub const DEFAULT_MAX_WIDTH: u16 = 180;
/// Share of the terminal width given to a bar.
pub const DEFAULT_WIDTH_RATIO: f64 = 0.9;
/// Left margin in front of every rendered line.
pub const DEFAULT_PADDING: u16 = 2;

pub const FILLED: char = '█';
pub const EMPTY: char = '░';

// Fraction of the remaining distance the animated bar covers per render.
const EASING: f64 = 0.5;
const SNAP_DISTANCE: f64 = 0.005;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ValueChanged(u32),
    TerminalResized { width: u16 },
}

/// A single progress bar tracking one clock unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressIndicator {
    label: String,
    value: u32,
    max_value: u32,
    width: u16,
    max_width: u16,
    width_ratio: f64,
    padding: u16,
    shown_percent: f64,
}

impl ProgressIndicator {
    pub fn new(label: impl Into<String>, max_value: u32) -> Self {
        Self {
            label: label.into(),
            value: 0,
            max_value,
            width: DEFAULT_MAX_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            width_ratio: DEFAULT_WIDTH_RATIO,
            padding: DEFAULT_PADDING,
            shown_percent: 0.0,
        }
    }

    /// Caps the bar width. The current width is clamped right away.
    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width;
        self.width = self.width.min(max_width);
        self
    }

    pub fn width_ratio(mut self, width_ratio: f64) -> Self {
        self.width_ratio = width_ratio;
        self
    }

    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn shown_percent(&self) -> f64 {
        self.shown_percent
    }

    /// Ratio of value to max value. Not clamped: a value past the maximum
    /// yields a percent above 1.0.
    pub fn percent(&self) -> f64 {
        if self.max_value == 0 {
            return 0.0;
        }
        f64::from(self.value) / f64::from(self.max_value)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ValueChanged(value) => self.value = value,
            Message::TerminalResized { width } => self.set_width(width),
        }
    }

    /// Sizes the bar to a share of the terminal width, capped at `max_width`.
    pub fn set_width(&mut self, terminal_width: u16) {
        let scaled = (f64::from(terminal_width) * self.width_ratio).floor();
        let scaled = if scaled.is_finite() && scaled > 0.0 {
            scaled.min(f64::from(u16::MAX)) as u16
        } else {
            0
        };
        self.width = scaled.min(self.max_width);
    }

    /// Two bar lines, each preceded by a newline and the left margin.
    ///
    /// The first line shows the exact percent. The second shows the animated
    /// percent, which moves a step closer to the exact one on every call.
    pub fn render(&mut self) -> String {
        let pad = " ".repeat(usize::from(self.padding));
        let percent = self.percent();
        self.shown_percent = ease(self.shown_percent, percent);

        format!(
            "\n{pad}{}\n{pad}{}",
            self.bar(percent),
            self.bar(self.shown_percent)
        )
    }

    /// Number of filled cells for the given percent. The fill never
    /// exceeds the bar width, however large the percent is.
    pub fn filled_cells(&self, percent: f64) -> usize {
        let width = usize::from(self.width);
        let filled = (width as f64 * percent.clamp(0.0, 1.0)).round() as usize;
        filled.min(width)
    }

    fn bar(&self, percent: f64) -> String {
        let width = usize::from(self.width);
        let filled = self.filled_cells(percent);

        let mut bar = String::with_capacity(width * FILLED.len_utf8());
        bar.extend(std::iter::repeat_n(FILLED, filled));
        bar.extend(std::iter::repeat_n(EMPTY, width - filled));
        bar
    }
}

fn ease(shown: f64, target: f64) -> f64 {
    let next = shown + (target - shown) * EASING;
    if (target - next).abs() < SNAP_DISTANCE {
        target
    } else {
        next
    }
}
