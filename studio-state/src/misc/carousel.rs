use chrono::TimeDelta;
use thiserror::Error;
use tracing::{debug, trace};

pub const CAROUSEL_PERIOD_MS: i64 = 5000;

#[derive(Error, Debug, PartialEq)]
pub enum CarouselErr {
    #[error("carousel needs at least one image")]
    NoImages,

    #[error("carousel period must be positive, got {0}ms")]
    InvalidPeriod(i64),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayerOpacity {
    Opaque,
    Transparent,
}

impl LayerOpacity {
    pub fn class(&self) -> &'static str {
        match self {
            LayerOpacity::Opaque => "opacity-100",
            LayerOpacity::Transparent => "opacity-0",
        }
    }
}

/// Stacked hero images, only `current_index` is shown.
#[derive(Clone, PartialEq, Debug)]
pub struct CarouselState {
    images: Vec<String>,
    current_index: usize,
}

impl CarouselState {
    pub fn new(images: Vec<String>) -> Result<Self, CarouselErr> {
        if images.is_empty() {
            return Err(CarouselErr::NoImages);
        }
        Ok(Self {
            images,
            current_index: 0,
        })
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.current_index]
    }

    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    pub fn advance_by(&mut self, ticks: u64) {
        let len = self.images.len() as u64;
        let next = (self.current_index as u64 + ticks % len) % len;
        trace!("carousel: {} -> {} after {} ticks", self.current_index, next, ticks);
        self.current_index = next as usize;
    }

    pub fn layer_opacity(&self, index: usize) -> LayerOpacity {
        if index == self.current_index {
            LayerOpacity::Opaque
        } else {
            LayerOpacity::Transparent
        }
    }

    pub fn layers(&self) -> impl Iterator<Item = (usize, &str, LayerOpacity)> + '_ {
        self.images
            .iter()
            .enumerate()
            .map(|(index, url)| (index, url.as_str(), self.layer_opacity(index)))
    }
}

/// Timer driving a [`CarouselState`] for the lifetime of the view that owns it.
///
/// Every firing of the interval is one frame, no matter what the wall clock
/// says. The view activates it when mounted and deactivates it on every
/// teardown path; once inactive, `tick` never moves the carousel again.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CarouselTimer {
    #[default]
    Inactive,
    Active {
        period: TimeDelta,
        fired: u64,
    },
}

impl CarouselTimer {
    pub fn activate(&mut self, period: TimeDelta) -> Result<(), CarouselErr> {
        if period <= TimeDelta::zero() {
            return Err(CarouselErr::InvalidPeriod(period.num_milliseconds()));
        }
        debug!("carousel timer: activated with {}ms period", period.num_milliseconds());
        *self = CarouselTimer::Active { period, fired: 0 };
        Ok(())
    }

    pub fn deactivate(&mut self) {
        if let CarouselTimer::Active { fired, .. } = self {
            debug!("carousel timer: deactivated after {} ticks", fired);
        }
        *self = CarouselTimer::Inactive;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CarouselTimer::Active { .. })
    }

    pub fn period(&self) -> Option<TimeDelta> {
        match self {
            CarouselTimer::Active { period, .. } => Some(*period),
            CarouselTimer::Inactive => None,
        }
    }

    /// One firing of the interval. Advances `state` by exactly one frame and
    /// returns `true`, or does nothing and returns `false` once inactive.
    pub fn tick(&mut self, state: &mut CarouselState) -> bool {
        let CarouselTimer::Active { fired, .. } = self else {
            trace!("carousel timer: tick ignored, timer is inactive");
            return false;
        };
        *fired = fired.saturating_add(1);
        state.advance();
        true
    }
}

#[cfg(test)]
mod carousel_tests {
    use std::str::FromStr;

    use chrono::TimeDelta;

    use super::{CarouselErr, CarouselState, CarouselTimer, LayerOpacity, CAROUSEL_PERIOD_MS};

    fn images() -> Vec<String> {
        (1..=4)
            .map(|i| format!("https://images.example.com/hero-{}.jpg", i))
            .collect()
    }

    fn period() -> TimeDelta {
        TimeDelta::try_milliseconds(CAROUSEL_PERIOD_MS).unwrap()
    }

    #[test]
    fn index_after_ticks_wraps() {
        let mut carousel = CarouselState::new(images()).unwrap();
        for t in 0..25 {
            assert_eq!(carousel.current_index(), t % 4);
            carousel.advance();
        }

        let mut carousel = CarouselState::new(images()).unwrap();
        carousel.advance_by(1_000_003);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.current_image(), "https://images.example.com/hero-4.jpg");
    }

    #[test]
    fn exactly_one_layer_is_opaque() {
        let mut carousel = CarouselState::new(images()).unwrap();
        for t in 0..9 {
            let opaque: Vec<usize> = carousel
                .layers()
                .filter(|(_, _, opacity)| *opacity == LayerOpacity::Opaque)
                .map(|(index, _, _)| index)
                .collect();
            assert_eq!(opaque, vec![t % 4]);
            assert_eq!(carousel.layers().count(), 4);
            carousel.advance();
        }
    }

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(CarouselState::new(Vec::new()), Err(CarouselErr::NoImages));
    }

    #[test]
    fn every_tick_advances_one_frame() {
        init_logger();
        let mut carousel = CarouselState::new(images()).unwrap();
        let mut timer = CarouselTimer::default();
        timer.activate(period()).unwrap();
        assert_eq!(timer.period(), Some(period()));

        for n in 1..=12 {
            assert!(timer.tick(&mut carousel));
            assert_eq!(carousel.current_index(), n % 4);
        }
        assert_eq!(timer, CarouselTimer::Active { period: period(), fired: 12 });
    }

    #[test]
    fn deactivated_timer_never_advances() {
        init_logger();
        let mut carousel = CarouselState::new(images()).unwrap();
        let mut timer = CarouselTimer::default();
        assert!(!timer.tick(&mut carousel));

        timer.activate(period()).unwrap();
        timer.tick(&mut carousel);
        timer.tick(&mut carousel);
        assert_eq!(carousel.current_index(), 2);

        timer.deactivate();
        assert!(!timer.is_active());
        assert_eq!(timer.period(), None);
        for _ in 0..5 {
            assert!(!timer.tick(&mut carousel));
        }
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn reactivation_restarts_the_count() {
        let mut carousel = CarouselState::new(images()).unwrap();
        let mut timer = CarouselTimer::default();
        timer.activate(period()).unwrap();
        timer.tick(&mut carousel);
        timer.deactivate();

        timer.activate(period()).unwrap();
        assert_eq!(timer, CarouselTimer::Active { period: period(), fired: 0 });
        assert!(timer.tick(&mut carousel));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn non_positive_period_is_rejected() {
        let mut timer = CarouselTimer::default();
        assert_eq!(timer.activate(TimeDelta::zero()), Err(CarouselErr::InvalidPeriod(0)));
        assert!(!timer.is_active());
    }

    fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .event_format(
                tracing_subscriber::fmt::format()
                    .with_file(true)
                    .with_line_number(true),
            )
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or(tracing_subscriber::EnvFilter::from_str("studio_state=trace").unwrap()),
            )
            .with_test_writer()
            .try_init();
    }
}
