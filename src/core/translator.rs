use crate::core::msg::Msg;
use crate::infrastructure::tui::Event;

/// Translate a terminal or ticker event into a domain message.
///
/// Events the clock does not react to become `Msg::Ignored` carrying the
/// event kind, so the update function can log them without acting.
pub fn translate_event(event: Event) -> Msg {
    match event {
        Event::Init => Msg::Init,
        Event::Tick(at) => Msg::Tick(at),
        Event::Resize(width, height) => Msg::Resize { width, height },
        Event::Key(key) => Msg::Key(key),
        other => Msg::Ignored(other.kind()),
    }
}
