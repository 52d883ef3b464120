//! The long-lived page session: initial load, then the three uncoordinated
//! interval timers (weather, field drift, activity injection) until the
//! process is stopped.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::{interval, Duration};

use crate::config::Config;
use crate::logging::{json_log, obj, v_num, v_str, Domain};
use crate::page::{NavbarStyle, Page};
use crate::render::DashboardRenderer;
use crate::settings::SettingsStore;
use crate::sim;
use crate::store::SqliteStore;

/// Scroll offset past which the navbar switches to its translucent style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Trailing-edge debouncer for the scroll-driven restyle: rapid triggers
/// collapse into one firing, delay after the last trigger.
pub struct Debouncer {
    delay_ms: u64,
    pending: Option<(u64, f64)>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn trigger(&mut self, now_ms: u64, offset: f64) {
        self.pending = Some((now_ms + self.delay_ms, offset));
    }

    /// The latest offset, once the delay since the last trigger elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<f64> {
        match self.pending {
            Some((due, offset)) if now_ms >= due => {
                self.pending = None;
                Some(offset)
            }
            _ => None,
        }
    }
}

pub fn apply_scroll_style(page: &mut Page, offset: f64) {
    page.navbar = if offset > NAVBAR_SCROLL_THRESHOLD {
        NavbarStyle::Translucent
    } else {
        NavbarStyle::Solid
    };
}

/// Full main-page load: settings → chart specs → painted page.
pub fn load_main_page(settings: &SettingsStore<SqliteStore>) -> DashboardRenderer {
    let mut renderer = DashboardRenderer::new(Page::main());
    let specs = renderer.chart_specs(settings);
    for spec in &specs {
        json_log(
            Domain::Charts,
            "spec_handed_to_renderer",
            obj(&[
                ("labels", v_num(spec.labels.len() as f64)),
                ("datasets", v_num(spec.datasets.len() as f64)),
            ]),
        );
    }
    renderer.apply_all(settings);
    renderer
}

/// Runs the session until the process is stopped. The timers are
/// uncoordinated and may interleave arbitrarily; none of them blocks.
pub async fn run(cfg: Config) -> Result<()> {
    let store = SqliteStore::open(&cfg.sqlite_path)?;
    let settings = SettingsStore::new(store);
    let mut renderer = load_main_page(&settings);

    json_log(
        Domain::System,
        "startup",
        obj(&[
            ("db", v_str(&cfg.sqlite_path)),
            ("weather_secs", v_num(cfg.weather_secs as f64)),
            ("drift_secs", v_num(cfg.drift_secs as f64)),
            ("activity_secs", v_num(cfg.activity_secs as f64)),
        ]),
    );

    let mut rng = StdRng::from_entropy();
    let mut weather_tick = interval(Duration::from_secs(cfg.weather_secs));
    let mut drift_tick = interval(Duration::from_secs(cfg.drift_secs));
    let mut activity_tick = interval(Duration::from_secs(cfg.activity_secs));

    // Initial weather readout; the feed greets with a boot entry like the
    // original page did.
    sim::update_weather(&mut renderer.page, &mut rng);
    renderer
        .page
        .activity
        .push("System initialized successfully", "fa-check-circle");

    loop {
        tokio::select! {
            _ = weather_tick.tick() => {
                sim::update_weather(&mut renderer.page, &mut rng);
            }
            _ = drift_tick.tick() => {
                sim::drift_fields(&mut renderer.page, &mut rng);
            }
            _ = activity_tick.tick() => {
                renderer.page.activity.simulate_tick(&mut rng);
            }
        }
    }
}
