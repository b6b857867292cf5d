//! Control events published by input handlers and the settings panel.

use crate::model::color::Rgb;

/// High-level control actions, drained and applied on the main loop.
///
/// The variants map one-to-one onto the session's external entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Toggle dot visibility (Ctrl+Alt+D).
    ToggleDot,

    /// Toggle the settings panel open/closed (Ctrl+Alt+S or panel close).
    ToggleSettings,

    /// Change the dot fill color.
    SetFillColor(Rgb),

    /// Change the dot ring color.
    SetRingColor(Rgb),

    /// Quit the application gracefully.
    Exit,
}

impl ControlEvent {
    /// Short human-readable label used in debug logging.
    pub fn description(&self) -> &'static str {
        match self {
            ControlEvent::ToggleDot => "toggle dot visibility",
            ControlEvent::ToggleSettings => "toggle settings panel",
            ControlEvent::SetFillColor(_) => "set fill color",
            ControlEvent::SetRingColor(_) => "set ring color",
            ControlEvent::Exit => "request exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_equality() {
        assert_eq!(ControlEvent::ToggleDot, ControlEvent::ToggleDot);
        assert_ne!(ControlEvent::ToggleDot, ControlEvent::ToggleSettings);
        assert_ne!(
            ControlEvent::SetFillColor(Rgb::new(1, 2, 3)),
            ControlEvent::SetFillColor(Rgb::new(3, 2, 1)),
        );
    }

    #[test]
    fn all_events_have_descriptions() {
        let events = [
            ControlEvent::ToggleDot,
            ControlEvent::ToggleSettings,
            ControlEvent::SetFillColor(Rgb::new(0, 255, 255)),
            ControlEvent::SetRingColor(Rgb::new(255, 0, 0)),
            ControlEvent::Exit,
        ];
        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
