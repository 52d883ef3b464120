//! Simulated weather and field readouts.
//!
//! These feed the dashboard widgets on fixed intervals. None of it is
//! correctness-critical; any randomness source with the stated
//! distributions is acceptable, so the RNG is injected for tests.

use rand::Rng;

use crate::logging::{json_log, obj, v_num, v_str, Domain};
use crate::page::Page;

const BASE_TEMP_C: i32 = 24;
pub const CONDITIONS: [&str; 4] = ["Sunny", "Partly Cloudy", "Cloudy", "Light Rain"];

pub const MOISTURE_MIN: i32 = 20;
pub const MOISTURE_MAX: i32 = 100;

/// (css class, text) pairs a field status can flip to.
pub const FIELD_STATUSES: [(&str, &str); 4] = [
    ("healthy", "Healthy"),
    ("warning", "Needs Water"),
    ("healthy", "Ready for Harvest"),
    ("warning", "Pest Alert"),
];

/// Chance per tick that any one field status changes.
const STATUS_FLIP_CHANCE: f64 = 0.1;

/// Temperature wanders within ±3 °C of the base; condition is a uniform
/// pick.
pub fn update_weather<R: Rng>(page: &mut Page, rng: &mut R) {
    let variation = rng.gen_range(-3..3);
    page.weather.temperature_c = BASE_TEMP_C + variation;
    page.weather.condition = CONDITIONS[rng.gen_range(0..CONDITIONS.len())].to_string();
    json_log(
        Domain::Sim,
        "weather",
        obj(&[
            ("temperature_c", v_num(page.weather.temperature_c as f64)),
            ("condition", v_str(&page.weather.condition)),
        ]),
    );
}

/// Each moisture bar drifts a few points, clamped to the displayable band;
/// each status slot has a small chance of flipping.
pub fn drift_fields<R: Rng>(page: &mut Page, rng: &mut R) {
    for bar in &mut page.moisture_bars {
        let variation = rng.gen_range(-3..3);
        bar.percent = (bar.percent + variation).clamp(MOISTURE_MIN, MOISTURE_MAX);
    }
    for slot in &mut page.field_statuses {
        if rng.gen::<f64>() < STATUS_FLIP_CHANCE {
            let (class, text) = FIELD_STATUSES[rng.gen_range(0..FIELD_STATUSES.len())];
            slot.class = class.to_string();
            slot.text = text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn weather_stays_in_band_and_catalog() {
        let mut page = Page::main();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            update_weather(&mut page, &mut rng);
            assert!((BASE_TEMP_C - 3..=BASE_TEMP_C + 2).contains(&page.weather.temperature_c));
            assert!(CONDITIONS.contains(&page.weather.condition.as_str()));
        }
    }

    #[test]
    fn moisture_never_leaves_clamp_band() {
        let mut page = Page::main();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..5_000 {
            drift_fields(&mut page, &mut rng);
            for bar in &page.moisture_bars {
                assert!((MOISTURE_MIN..=MOISTURE_MAX).contains(&bar.percent));
            }
        }
    }

    #[test]
    fn statuses_only_flip_to_catalog_entries() {
        let mut page = Page::main();
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..1_000 {
            drift_fields(&mut page, &mut rng);
        }
        for slot in &page.field_statuses {
            assert!(FIELD_STATUSES
                .iter()
                .any(|(class, text)| *class == slot.class && *text == slot.text));
        }
    }
}
