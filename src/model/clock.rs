use chrono::Timelike;

use crate::core::cmd::{Cmd, TuiCommand};
use crate::core::msg::Msg;
use crate::infrastructure::config::ClockConfig;
use crate::model::indicator::{Message as IndicatorMessage, ProgressIndicator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
pub enum ClockStatus {
    #[default]
    Running,
    Terminated,
}

/// Three indicators (hour, minute, second) driven by wall-clock ticks.
///
/// Running until the first key press, then Terminated for good: once
/// terminated every message is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockView {
    hour: ProgressIndicator,
    minute: ProgressIndicator,
    second: ProgressIndicator,
    padding: u16,
    status: ClockStatus,
}

impl ClockView {
    pub fn new() -> Self {
        Self::with_config(&ClockConfig::default())
    }

    pub fn with_config(config: &ClockConfig) -> Self {
        let indicator = |label: &str, max_value: u32| {
            ProgressIndicator::new(label, max_value)
                .max_width(config.max_width)
                .width_ratio(config.width_ratio)
                .padding(config.padding)
        };
        Self {
            hour: indicator("hour", 24),
            minute: indicator("minute", 60),
            second: indicator("second", 60),
            padding: config.padding,
            status: ClockStatus::Running,
        }
    }

    pub fn hour(&self) -> &ProgressIndicator {
        &self.hour
    }

    pub fn minute(&self) -> &ProgressIndicator {
        &self.minute
    }

    pub fn second(&self) -> &ProgressIndicator {
        &self.second
    }

    pub fn status(&self) -> ClockStatus {
        self.status
    }

    pub fn is_terminated(&self) -> bool {
        self.status == ClockStatus::Terminated
    }

    fn indicators_mut(&mut self) -> [&mut ProgressIndicator; 3] {
        [&mut self.hour, &mut self.minute, &mut self.second]
    }

    /// Size every bar to a terminal `width` columns wide.
    pub fn fit_width(&mut self, width: u16) {
        for indicator in self.indicators_mut() {
            indicator.update(IndicatorMessage::TerminalResized { width });
        }
    }

    pub fn update(&mut self, msg: Msg) -> Cmd {
        if self.is_terminated() {
            log::trace!("clock terminated, dropping {msg:?}");
            return Cmd::None;
        }

        match msg {
            Msg::Init => Cmd::RequestRender,
            Msg::Tick(now) => {
                self.hour
                    .update(IndicatorMessage::ValueChanged(now.hour()));
                self.minute
                    .update(IndicatorMessage::ValueChanged(now.minute()));
                self.second
                    .update(IndicatorMessage::ValueChanged(now.second()));
                Cmd::RequestRender
            }
            Msg::Resize { width, height } => {
                self.fit_width(width);
                Cmd::batch(vec![
                    Cmd::Tui(TuiCommand::Resize { width, height }),
                    Cmd::RequestRender,
                ])
            }
            Msg::Key(key) => {
                log::info!("Key {:?} pressed, stopping clock", key.code);
                self.status = ClockStatus::Terminated;
                Cmd::Quit
            }
            Msg::Ignored(kind) => {
                log::debug!("Ignoring {kind} event");
                Cmd::None
            }
        }
    }

    /// `H:M:S` without zero padding.
    pub fn header(&self) -> String {
        format!(
            "{}:{}:{}",
            self.hour.value(),
            self.minute.value(),
            self.second.value()
        )
    }

    /// Header line followed by the two bar lines of each indicator.
    pub fn render(&mut self) -> String {
        let pad = " ".repeat(usize::from(self.padding));
        let mut view = format!("\n{pad}{}\n", self.header());
        for indicator in self.indicators_mut() {
            view.push_str(&indicator.render());
        }
        view
    }
}

impl Default for ClockView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 1, 15, hour, minute, second)
            .single()
            .expect("unambiguous local time")
    }

    fn key() -> Msg {
        Msg::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
    }

    #[test]
    fn test_new_clock() {
        let clock = ClockView::new();
        assert_eq!(clock.status(), ClockStatus::Running);
        assert_eq!(clock.hour().max_value(), 24);
        assert_eq!(clock.minute().max_value(), 60);
        assert_eq!(clock.second().max_value(), 60);
        assert_eq!(clock.hour().label(), "hour");
        assert_eq!(clock.header(), "0:0:0");
    }

    #[test]
    fn test_with_config() {
        let config = ClockConfig {
            max_width: 50,
            padding: 4,
            ..Default::default()
        };
        let mut clock = ClockView::with_config(&config);
        assert_eq!(clock.second().width(), 50);
        assert!(clock.render().starts_with("\n    0:0:0\n"));
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(13, 5, 9)]
    #[case(23, 59, 59)]
    #[case(12, 30, 0)]
    fn test_tick_sets_components(#[case] h: u32, #[case] m: u32, #[case] s: u32) {
        let mut clock = ClockView::new();
        let cmd = clock.update(Msg::Tick(at(h, m, s)));
        assert_eq!(cmd, Cmd::RequestRender);
        assert_eq!(clock.hour().value(), h);
        assert_eq!(clock.minute().value(), m);
        assert_eq!(clock.second().value(), s);
    }

    #[test]
    fn test_header_has_no_zero_padding() {
        let mut clock = ClockView::new();
        clock.update(Msg::Tick(at(13, 5, 9)));
        assert_eq!(clock.header(), "13:5:9");
    }

    #[test]
    fn test_resize_updates_all_widths() {
        let mut clock = ClockView::new();
        let cmd = clock.update(Msg::Resize {
            width: 100,
            height: 30,
        });
        assert_eq!(
            cmd,
            Cmd::Batch(vec![
                Cmd::Tui(TuiCommand::Resize {
                    width: 100,
                    height: 30
                }),
                Cmd::RequestRender,
            ])
        );
        assert_eq!(clock.hour().width(), 90);
        assert_eq!(clock.minute().width(), 90);
        assert_eq!(clock.second().width(), 90);
    }

    #[test]
    fn test_fit_width() {
        let mut clock = ClockView::new();
        clock.fit_width(80);
        assert_eq!(clock.hour().width(), 72);
        assert_eq!(clock.minute().width(), 72);
        assert_eq!(clock.second().width(), 72);
        assert_eq!(clock.status(), ClockStatus::Running);
    }

    #[test]
    fn test_resize_does_not_change_values() {
        let mut clock = ClockView::new();
        clock.update(Msg::Tick(at(8, 7, 6)));
        clock.update(Msg::Resize {
            width: 0,
            height: 0,
        });
        assert_eq!(clock.header(), "8:7:6");
    }

    #[test]
    fn test_init_requests_render() {
        let mut clock = ClockView::new();
        assert_eq!(clock.update(Msg::Init), Cmd::RequestRender);
    }

    #[test]
    fn test_ignored_is_noop() {
        let mut clock = ClockView::new();
        clock.update(Msg::Tick(at(1, 2, 3)));
        let before = clock.clone();
        assert_eq!(clock.update(Msg::Ignored("Mouse")), Cmd::None);
        assert_eq!(clock, before);
    }

    #[test]
    fn test_key_terminates_once() {
        let mut clock = ClockView::new();
        assert_eq!(clock.update(key()), Cmd::Quit);
        assert!(clock.is_terminated());
        assert_eq!(clock.update(key()), Cmd::None);
        assert_eq!(clock.status(), ClockStatus::Terminated);
    }

    #[test]
    fn test_messages_after_termination_are_noops() {
        let mut clock = ClockView::new();
        clock.update(Msg::Tick(at(10, 10, 10)));
        clock.update(key());
        let before = clock.clone();

        assert_eq!(clock.update(Msg::Tick(at(11, 11, 11))), Cmd::None);
        assert_eq!(
            clock.update(Msg::Resize {
                width: 40,
                height: 10
            }),
            Cmd::None
        );
        assert_eq!(clock.update(Msg::Init), Cmd::None);
        assert_eq!(clock, before);
    }

    #[test]
    fn test_render_layout() {
        let config = ClockConfig {
            max_width: 12,
            ..Default::default()
        };
        let mut clock = ClockView::with_config(&config);
        clock.update(Msg::Tick(at(6, 30, 15)));

        let view = clock.render();
        let lines: Vec<&str> = view.split('\n').collect();
        // blank, header, blank, then two bar lines per indicator
        assert_eq!(lines.len(), 3 + 3 * 2);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "  6:30:15");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "  ███░░░░░░░░░");
        assert_eq!(lines[5], "  ██████░░░░░░");
        assert_eq!(lines[7], "  ███░░░░░░░░░");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ClockStatus::Running.to_string(), "Running");
        assert_eq!(ClockStatus::Terminated.to_string(), "Terminated");
    }
}
