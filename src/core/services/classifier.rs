use crate::core::models::event::EventCategory;

/// A message resolved to its display category and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEvent {
    pub category: EventCategory,
    /// Fixed label for canonical events; the raw message for anything
    /// else. The raw form is producer-supplied and untrusted.
    pub display: String,
}

/// Map a raw log message to its category and display text.
///
/// The five canonical phrases match exactly. Any other message (custom
/// events from external producers) falls back to substring heuristics,
/// checked in priority order so that e.g. "logged in permanently" wins
/// over the looser "logged in".
pub fn classify(message: &str) -> ClassifiedEvent {
    let (category, display) = match message {
        "logged off" => (EventCategory::Off, "logged off"),
        "logged in permanently" => (EventCategory::Perm, "logged in permanently"),
        "logged in temporarily" => (EventCategory::Temp, "logged in temporarily"),
        "failed login attempt" => (EventCategory::Fail, "failed login attempt"),
        "has been automatically logged off" => (EventCategory::Off, "automatically logged off"),
        custom => {
            let category = if custom.contains("logged off") {
                EventCategory::Off
            } else if custom.contains("logged in permanently") {
                EventCategory::Perm
            } else if custom.contains("logged in") {
                EventCategory::Temp
            } else if custom.contains("failed") {
                EventCategory::Fail
            } else {
                EventCategory::Unknown
            };
            return ClassifiedEvent {
                category,
                display: custom.to_string(),
            };
        }
    };

    ClassifiedEvent {
        category,
        display: display.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::event::AuthEvent;

    #[test]
    fn canonical_messages_match_exactly() {
        assert_eq!(classify("logged off").category, EventCategory::Off);
        assert_eq!(
            classify("logged in permanently").category,
            EventCategory::Perm
        );
        assert_eq!(
            classify("logged in temporarily").category,
            EventCategory::Temp
        );
        assert_eq!(classify("failed login attempt").category, EventCategory::Fail);
        assert_eq!(
            classify("has been automatically logged off").category,
            EventCategory::Off
        );
    }

    #[test]
    fn autologoff_gets_its_own_label() {
        let event = classify(AuthEvent::AutoLoggedOff.message());
        assert_eq!(event.category, EventCategory::Off);
        assert_eq!(event.display, "automatically logged off");
    }

    #[test]
    fn custom_messages_use_substring_heuristics() {
        assert_eq!(classify("custom: failed probe").category, EventCategory::Fail);
        assert_eq!(
            classify("user logged off by admin").category,
            EventCategory::Off
        );
        assert_eq!(
            classify("sso user logged in via token").category,
            EventCategory::Temp
        );
    }

    #[test]
    fn permanent_substring_beats_plain_login() {
        let event = classify("bot logged in permanently via api");
        assert_eq!(event.category, EventCategory::Perm);
    }

    #[test]
    fn unmatched_messages_are_unknown() {
        assert_eq!(classify("something else").category, EventCategory::Unknown);
        assert_eq!(classify("").category, EventCategory::Unknown);
    }

    #[test]
    fn custom_display_is_the_raw_message() {
        let event = classify("password changed");
        assert_eq!(event.display, "password changed");
    }
}
