use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::state::{ViewAction, ViewState};

pub fn next_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

/// Advances the testimonial index every `interval_ms` for as long as the
/// calling component is mounted. Manual selection goes through the same
/// reducer and leaves the interval's phase alone.
#[hook]
pub fn use_carousel_ticker(dispatcher: UseReducerDispatcher<ViewState>, interval_ms: u32) {
    use_effect_with_deps(
        move |interval_ms| {
            let interval_ms = *interval_ms;
            log::info!("Carousel ticker started ({} ms)", interval_ms);
            let interval = Interval::new(interval_ms, move || {
                dispatcher.dispatch(ViewAction::AdvanceTestimonial);
            });
            move || {
                drop(interval);
                log::info!("Carousel ticker stopped");
            }
        },
        interval_ms,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CAROUSEL_INTERVAL_MS;
    use crate::content::TESTIMONIALS;

    #[test]
    fn twelve_seconds_cycle_back_to_start() {
        let ticks = 12_000 / DEFAULT_CAROUSEL_INTERVAL_MS;
        let mut index = 0;
        let mut visited = Vec::new();
        for _ in 0..ticks {
            index = next_index(index, TESTIMONIALS.len());
            visited.push(index);
        }
        assert_eq!(visited, [1, 2, 0]);
    }

    #[test]
    fn index_after_n_ticks_is_modular() {
        let count = TESTIMONIALS.len();
        for initial in 0..count {
            let mut index = initial;
            for ticks in 1..20 {
                index = next_index(index, count);
                assert_eq!(index, (initial + ticks) % count);
            }
        }
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
    }
}
