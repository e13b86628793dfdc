//! Modal open/close transitions.
//!
//! States are `Hidden` and `Visible`. A trigger click always shows the
//! overlay; a window click hides it only when it lands on a dismissal area
//! that is not also the trigger, and only while the overlay is shown.

use crate::models::{ClickTarget, ModalVisibility};

/// State after the trigger button is clicked.
pub fn on_trigger_click(_state: ModalVisibility) -> ModalVisibility {
    ModalVisibility::Visible
}

/// Whether a window click should hide the modal.
pub fn should_close(target: ClickTarget, state: ModalVisibility) -> bool {
    target.is_dismissal_area() && !target.trigger && state.is_visible()
}

/// State after a window click on `target`.
pub fn on_window_click(target: ClickTarget, state: ModalVisibility) -> ModalVisibility {
    if should_close(target, state) {
        ModalVisibility::Hidden
    } else {
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERLAY: ClickTarget = ClickTarget {
        overlay: true,
        ..ClickTarget::UNRELATED
    };
    const CLOSE: ClickTarget = ClickTarget {
        close_button: true,
        ..ClickTarget::UNRELATED
    };
    const WRAPPER: ClickTarget = ClickTarget {
        wrapper: true,
        ..ClickTarget::UNRELATED
    };
    const TRIGGER: ClickTarget = ClickTarget {
        trigger: true,
        ..ClickTarget::UNRELATED
    };

    #[test]
    fn test_trigger_opens() {
        assert_eq!(on_trigger_click(ModalVisibility::Hidden), ModalVisibility::Visible);
        assert_eq!(on_trigger_click(ModalVisibility::Visible), ModalVisibility::Visible);
    }

    #[test]
    fn test_dismissal_areas_close_when_visible() {
        for target in [OVERLAY, CLOSE, WRAPPER] {
            assert_eq!(
                on_window_click(target, ModalVisibility::Visible),
                ModalVisibility::Hidden,
                "{target:?}"
            );
        }
    }

    #[test]
    fn test_hidden_stays_hidden() {
        for target in [OVERLAY, CLOSE, WRAPPER, TRIGGER, ClickTarget::UNRELATED] {
            assert_eq!(
                on_window_click(target, ModalVisibility::Hidden),
                ModalVisibility::Hidden
            );
        }
    }

    #[test]
    fn test_trigger_and_unrelated_do_not_close() {
        assert!(!should_close(TRIGGER, ModalVisibility::Visible));
        assert!(!should_close(ClickTarget::UNRELATED, ModalVisibility::Visible));
    }

    #[test]
    fn test_trigger_role_vetoes_dismissal() {
        // An element that is both wrapper and trigger never closes the modal.
        let both = ClickTarget {
            wrapper: true,
            trigger: true,
            ..ClickTarget::UNRELATED
        };
        assert!(!should_close(both, ModalVisibility::Visible));
    }

    #[test]
    fn test_full_truth_table() {
        for bits in 0u8..16 {
            let target = ClickTarget {
                overlay: bits & 1 != 0,
                close_button: bits & 2 != 0,
                wrapper: bits & 4 != 0,
                trigger: bits & 8 != 0,
            };
            for state in [ModalVisibility::Hidden, ModalVisibility::Visible] {
                let expected = (target.overlay | target.close_button | target.wrapper)
                    && !target.trigger
                    && state == ModalVisibility::Visible;
                assert_eq!(should_close(target, state), expected, "{target:?} {state:?}");
            }
        }
    }

    #[test]
    fn test_open_close_cycle() {
        let mut state = ModalVisibility::default();
        for _ in 0..3 {
            state = on_trigger_click(state);
            assert_eq!(state, ModalVisibility::Visible);
            state = on_window_click(TRIGGER, state);
            assert_eq!(state, ModalVisibility::Visible);
            state = on_window_click(CLOSE, state);
            assert_eq!(state, ModalVisibility::Hidden);
        }
    }
}
