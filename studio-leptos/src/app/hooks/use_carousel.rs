use chrono::TimeDelta;
use leptos::*;
use studio_state::misc::carousel::{CarouselState, CarouselTimer};
use tracing::{debug, error, trace};

/// Drives `carousel` with a browser interval for as long as the calling view is alive.
///
/// The interval is acquired in a client-only effect and released by the effect's
/// cleanup, which runs when the view is unmounted or its owner is disposed. The
/// cleanup also deactivates the [`CarouselTimer`], so a callback that was already
/// queued when the view went away cannot move the index.
pub fn use_carousel(carousel: CarouselState, period: TimeDelta) -> RwSignal<CarouselState> {
    let carousel = create_rw_signal(carousel);
    let timer = StoredValue::new(CarouselTimer::default());

    create_effect(move |_| {
        if !activate_carousel(timer, period) {
            return;
        }

        let interval = match period.to_std() {
            Ok(interval) => interval,
            Err(err) => {
                error!("carousel: invalid interval: {}", err);
                release_carousel(timer);
                return;
            }
        };

        let handle = set_interval_with_handle(
            move || {
                let advanced = tick_carousel(timer, carousel);
                trace!("carousel: interval fired, advanced: {}", advanced);
            },
            interval,
        );
        let handle = match handle {
            Ok(handle) => handle,
            Err(err) => {
                error!("carousel: failed to start interval: {:?}", err);
                release_carousel(timer);
                return;
            }
        };
        debug!("carousel: interval acquired");

        on_cleanup(move || {
            handle.clear();
            release_carousel(timer);
            debug!("carousel: interval released");
        });
    });

    carousel
}

fn activate_carousel(timer: StoredValue<CarouselTimer>, period: TimeDelta) -> bool {
    match timer.try_update_value(|timer| timer.activate(period)) {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            error!("carousel: failed to activate timer: {}", err);
            false
        }
        None => false,
    }
}

/// Body of the interval callback: one firing, one frame.
fn tick_carousel(timer: StoredValue<CarouselTimer>, carousel: RwSignal<CarouselState>) -> bool {
    let Some(mut current) = timer.try_get_value() else {
        return false;
    };
    if !current.is_active() {
        trace!("carousel: interval fired after release");
        return false;
    }
    let advanced = carousel
        .try_update(|carousel| current.tick(carousel))
        .unwrap_or(false);
    timer.try_set_value(current);
    advanced
}

fn release_carousel(timer: StoredValue<CarouselTimer>) {
    timer.try_update_value(|timer| timer.deactivate());
}

#[cfg(test)]
mod use_carousel_tests {
    use chrono::TimeDelta;
    use leptos::*;
    use studio_state::misc::carousel::{CarouselState, CarouselTimer};

    use super::{activate_carousel, release_carousel, tick_carousel};

    fn carousel() -> CarouselState {
        CarouselState::new((1..=4).map(|i| format!("/hero-{}.jpg", i)).collect()).unwrap()
    }

    fn period() -> TimeDelta {
        TimeDelta::try_milliseconds(5000).unwrap()
    }

    #[test]
    fn interval_callback_advances_one_frame() {
        let runtime = create_runtime();
        let carousel = create_rw_signal(carousel());
        let timer = StoredValue::new(CarouselTimer::default());

        assert!(!tick_carousel(timer, carousel));
        assert!(activate_carousel(timer, period()));
        for n in 1..=9 {
            assert!(tick_carousel(timer, carousel));
            assert_eq!(carousel.with_untracked(|c| c.current_index()), n % 4);
        }

        runtime.dispose();
    }

    #[test]
    fn released_carousel_ignores_queued_callbacks() {
        let runtime = create_runtime();
        let carousel = create_rw_signal(carousel());
        let timer = StoredValue::new(CarouselTimer::default());

        assert!(activate_carousel(timer, period()));
        tick_carousel(timer, carousel);
        release_carousel(timer);

        for _ in 0..4 {
            assert!(!tick_carousel(timer, carousel));
        }
        assert_eq!(carousel.with_untracked(|c| c.current_index()), 1);
        assert!(!timer.get_value().is_active());

        runtime.dispose();
    }

    #[test]
    fn invalid_period_is_not_activated() {
        let runtime = create_runtime();
        let timer = StoredValue::new(CarouselTimer::default());

        assert!(!activate_carousel(timer, TimeDelta::zero()));
        assert!(!timer.get_value().is_active());

        runtime.dispose();
    }
}
