pub const HOME_STAGGER_MS: u32 = 300;
pub const PAGE_STAGGER_MS: u32 = 250;
pub const LATEST_WORK_STAGGER_MS: u32 = 200;

/// Entrance presets, expressed as the tailwind classes of the hidden and shown states.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Motion {
    #[default]
    FadeIn,
    SlideUp,
    ScaleUp,
}

/// What reveals an element: hydration of the page or scrolling it into view.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealTrigger {
    Mount,
    #[default]
    InView,
}

impl RevealTrigger {
    /// Only `InView` needs an intersection observer on the element.
    pub fn observes_viewport(&self) -> bool {
        matches!(self, RevealTrigger::InView)
    }

    /// Whether the element should be revealed, `in_view` is only read for `InView`.
    pub fn fires(&self, in_view: bool) -> bool {
        match self {
            RevealTrigger::Mount => true,
            RevealTrigger::InView => in_view,
        }
    }
}

impl Motion {
    pub fn transition_class(&self) -> &'static str {
        match self {
            Motion::FadeIn => "transition-opacity duration-1000 ease-in-out",
            Motion::SlideUp => "transition-all duration-700 ease-out",
            Motion::ScaleUp => "transition-all duration-500 ease-out",
        }
    }

    pub fn hidden_class(&self) -> &'static str {
        match self {
            Motion::FadeIn => "opacity-0",
            Motion::SlideUp => "opacity-0 translate-y-16",
            Motion::ScaleUp => "opacity-0 scale-[0.8]",
        }
    }

    pub fn shown_class(&self) -> &'static str {
        match self {
            Motion::FadeIn => "opacity-100",
            Motion::SlideUp => "opacity-100 translate-y-0",
            Motion::ScaleUp => "opacity-100 scale-100",
        }
    }

    pub fn class(&self, revealed: bool, extra: &str) -> String {
        let state = if revealed {
            self.shown_class()
        } else {
            self.hidden_class()
        };
        if extra.is_empty() {
            format!("{} {}", self.transition_class(), state)
        } else {
            format!("{} {} {}", self.transition_class(), state, extra)
        }
    }
}

pub fn stagger_delay_ms(step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    step_ms.saturating_mul(index)
}

#[cfg(test)]
mod motion_tests {
    use super::{stagger_delay_ms, Motion, RevealTrigger, LATEST_WORK_STAGGER_MS};

    #[test]
    fn class_switches_between_states() {
        let motion = Motion::SlideUp;
        assert_eq!(
            motion.class(false, ""),
            "transition-all duration-700 ease-out opacity-0 translate-y-16"
        );
        assert_eq!(
            motion.class(true, "text-center"),
            "transition-all duration-700 ease-out opacity-100 translate-y-0 text-center"
        );
        assert_eq!(Motion::default(), Motion::FadeIn);
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay_ms(LATEST_WORK_STAGGER_MS, 0), 0);
        assert_eq!(stagger_delay_ms(LATEST_WORK_STAGGER_MS, 1), 200);
        assert_eq!(stagger_delay_ms(300, 2), 600);
        assert_eq!(stagger_delay_ms(300, usize::MAX), u32::MAX);
    }

    #[test]
    fn only_in_view_trigger_observes_viewport() {
        assert!(!RevealTrigger::Mount.observes_viewport());
        assert!(RevealTrigger::InView.observes_viewport());
        assert!(RevealTrigger::Mount.fires(false));
        assert!(!RevealTrigger::InView.fires(false));
        assert!(RevealTrigger::InView.fires(true));
    }
}
