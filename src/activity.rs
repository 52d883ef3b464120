//! Bounded newest-first activity feed.
//!
//! The visible list is capped at five entries; eviction happens at render
//! time only and never touches the persisted sequence.

use rand::Rng;

use crate::logging::{json_log, obj, v_str, Domain};

pub const VISIBLE_CAP: usize = 5;

/// Probability that one simulation tick injects an entry.
const TICK_CHANCE: f64 = 0.3;

/// Fixed catalog the simulation draws from, uniformly.
pub const SIMULATED: [(&str, &str); 5] = [
    ("Soil test completed in Field A", "fa-flask"),
    ("Irrigation system maintenance", "fa-tools"),
    ("New crop planted in Field B", "fa-seedling"),
    ("Weather alert received", "fa-exclamation-triangle"),
    ("Harvest recorded for tomatoes", "fa-apple-alt"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleActivity {
    pub title: String,
    pub icon: String,
}

/// Newest-first visible feed, fed by simulated events and admin entries.
#[derive(Debug, Default)]
pub struct ActivityFeed {
    visible: Vec<VisibleActivity>,
}

impl ActivityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front; drop the oldest once the cap is exceeded.
    pub fn push(&mut self, title: &str, icon: &str) {
        self.visible.insert(
            0,
            VisibleActivity {
                title: title.to_string(),
                icon: icon.to_string(),
            },
        );
        if self.visible.len() > VISIBLE_CAP {
            self.visible.pop();
        }
    }

    /// 30% chance of injecting one uniformly-chosen catalog entry.
    pub fn simulate_tick<R: Rng>(&mut self, rng: &mut R) {
        if rng.gen::<f64>() >= TICK_CHANCE {
            return;
        }
        let (title, icon) = SIMULATED[rng.gen_range(0..SIMULATED.len())];
        self.push(title, icon);
        json_log(
            Domain::Sim,
            "activity_injected",
            obj(&[("title", v_str(title)), ("icon", v_str(icon))]),
        );
    }

    pub fn visible(&self) -> &[VisibleActivity] {
        &self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn six_pushes_keep_five_newest_first() {
        let mut feed = ActivityFeed::new();
        for i in 1..=6 {
            feed.push(&format!("event {}", i), "fa-seedling");
        }
        let visible = feed.visible();
        assert_eq!(visible.len(), VISIBLE_CAP);
        assert_eq!(visible[0].title, "event 6");
        assert_eq!(visible[4].title, "event 2");
        // "event 1" (6th-from-last) was evicted.
        assert!(visible.iter().all(|a| a.title != "event 1"));
    }

    #[test]
    fn tick_draws_only_from_catalog() {
        let mut feed = ActivityFeed::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            feed.simulate_tick(&mut rng);
        }
        assert!(!feed.visible().is_empty());
        for entry in feed.visible() {
            assert!(SIMULATED
                .iter()
                .any(|(title, icon)| *title == entry.title && *icon == entry.icon));
        }
    }

    #[test]
    fn tick_probability_is_roughly_thirty_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut injected = 0usize;
        for _ in 0..10_000 {
            let mut feed = ActivityFeed::new();
            feed.simulate_tick(&mut rng);
            if !feed.visible().is_empty() {
                injected += 1;
            }
        }
        let rate = injected as f64 / 10_000.0;
        assert!((0.27..0.33).contains(&rate), "rate {} outside band", rate);
    }
}
