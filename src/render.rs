//! Applies stored settings to the page on main-page load.

use chrono::DateTime;

use crate::charts::{self, ChartSpec};
use crate::logging::{json_log, obj, v_bool, v_num, v_str, Domain};
use crate::page::{InventoryCard, Page};
use crate::settings::{Section, SettingsStore};
use crate::store::SlotStore;

/// Owns the render targets; settings are read through the store facade on
/// each apply pass.
pub struct DashboardRenderer {
    pub page: Page,
}

impl DashboardRenderer {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// The full main-page load sequence: visibility, metrics, content,
    /// synced inventory, synced activities.
    pub fn apply_all<S: SlotStore>(&mut self, settings: &SettingsStore<S>) {
        self.apply_visibility(settings);
        self.apply_metrics(settings);
        self.apply_content(settings);
        self.apply_inventory(settings);
        self.apply_activities(settings);
    }

    /// Chart specs for the external renderer, in card order.
    pub fn chart_specs<S: SlotStore>(&self, settings: &SettingsStore<S>) -> [ChartSpec; 4] {
        let chart_settings = settings.chart_settings();
        json_log(
            Domain::Charts,
            "specs_built",
            obj(&[
                ("yield_type", v_str(&String::from(chart_settings.yield_type))),
                ("revenue_type", v_str(&String::from(chart_settings.revenue_type))),
                ("cost_scenario", v_str(&String::from(chart_settings.cost_scenario))),
                ("yield_scenario", v_str(&String::from(chart_settings.yield_scenario))),
            ]),
        );
        charts::build_all(&chart_settings)
    }

    pub fn apply_visibility<S: SlotStore>(&mut self, settings: &SettingsStore<S>) {
        let vis = settings.visibility();
        for section in Section::ALL {
            let visible = vis.is_visible(section);
            if let Some(card) = self.page.section_mut(section.card_id()) {
                card.visible = visible;
            }
            json_log(
                Domain::Render,
                "section_visibility",
                obj(&[
                    ("card", v_str(section.card_id())),
                    ("visible", v_bool(visible)),
                ]),
            );
        }
    }

    /// Overwrites the metric texts only when the page carries the full
    /// metrics grid. Each stored field overwrites its own slot; a field
    /// absent from the stored object leaves that slot's default alone.
    pub fn apply_metrics<S: SlotStore>(&mut self, settings: &SettingsStore<S>) {
        let Some(metrics) = settings.metrics() else {
            return;
        };
        let slots = self.page.metric_slots_mut();
        if slots.len() < 4 {
            return;
        }
        if let Some(revenue) = &metrics.revenue {
            slots[0].text = format_currency(revenue);
        }
        if let Some(costs) = &metrics.costs {
            slots[1].text = format_currency(costs);
        }
        if let Some(profit) = &metrics.profit {
            slots[2].text = format_currency(profit);
        }
        if let Some(roi) = &metrics.roi {
            slots[3].text = format!("{}%", roi);
        }
    }

    /// Overwrites each editable text node only when the override is present
    /// and non-empty.
    pub fn apply_content<S: SlotStore>(&mut self, settings: &SettingsStore<S>) {
        let content = settings.content();
        let overrides = [
            ("hero-title", content.hero_title),
            ("hero-subtitle", content.hero_subtitle),
            ("corn-harvest", content.corn_harvest),
            ("apple-pest-alert", content.apple_pest_alert),
            ("footer-tagline", content.footer_tagline),
        ];
        for (id, value) in overrides {
            if let Some(text) = value.filter(|t| !t.trim().is_empty()) {
                self.page.set_text(id, &text);
            }
        }
    }

    /// Renders a card per stored item whose category matches a tab
    /// container; items with no matching container stay stored but produce
    /// nothing on screen.
    pub fn apply_inventory<S: SlotStore>(&mut self, settings: &SettingsStore<S>) {
        let mut dropped = 0u32;
        for item in settings.inventory() {
            let card = InventoryCard {
                name: item.name.clone(),
                status: item.status.clone(),
                quantity: item.quantity.clone(),
                added: format_added_date(&item.added),
            };
            if !self.page.append_inventory_card(&item.category, card) {
                dropped += 1;
                json_log(
                    Domain::Render,
                    "inventory_card_dropped",
                    obj(&[
                        ("category", v_str(&item.category)),
                        ("name", v_str(&item.name)),
                    ]),
                );
            }
        }
        if dropped > 0 {
            json_log(
                Domain::Render,
                "inventory_sync",
                obj(&[("dropped_from_view", v_num(dropped as f64))]),
            );
        }
    }

    /// Replays the persisted sequence through the feed so the screen shows
    /// stored newest-first order: oldest entries are pushed first and end
    /// up at the bottom.
    pub fn apply_activities<S: SlotStore>(&mut self, settings: &SettingsStore<S>) {
        for entry in settings.activities().iter().rev() {
            let icon = if entry.icon.is_empty() {
                "fa-seedling"
            } else {
                &entry.icon
            };
            self.page.activity.push(&entry.title, icon);
        }
    }
}

/// `$`-prefixed with grouping separators; non-numeric input renders as
/// `$NaN`, an empty field as `$0` (both matching the original's
/// `Number(...).toLocaleString()`).
pub fn format_currency(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "$0".to_string();
    }
    match trimmed.parse::<f64>() {
        Ok(n) => format!("${}", format_grouped(n)),
        Err(_) => "$NaN".to_string(),
    }
}

/// Thousands grouping with up to three fractional digits, trailing zeros
/// trimmed.
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let negative = value < 0.0;
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let int_part = rounded.trunc() as u64;
    let digits = int_part.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    let frac = format!("{:.3}", rounded.fract());
    let frac = frac.trim_start_matches('0').trim_end_matches('0');
    if frac.len() > 1 {
        out.push_str(frac);
    }
    out
}

/// Added-date for inventory cards; unparseable input is shown as-is.
fn format_added_date(added: &str) -> String {
    match DateTime::parse_from_rfc3339(added) {
        Ok(dt) => dt.format("%-m/%-d/%Y").to_string(),
        Err(_) => added.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use crate::settings::{
        ActivityEntry, DashboardVisibility, InventoryItem, Metrics, Section, SettingsStore,
    };
    use crate::store::MemoryStore;

    fn renderer() -> DashboardRenderer {
        DashboardRenderer::new(Page::main())
    }

    #[test]
    fn one_false_key_hides_exactly_that_section() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        let mut vis = DashboardVisibility::default();
        vis.set(Section::Cost, false);
        settings.set_visibility(&vis);

        let mut r = renderer();
        r.apply_visibility(&settings);
        assert!(!r.page.section("cost-card").unwrap().visible);
        for id in ["yield-card", "revenue-card", "yield-comparison-card"] {
            assert!(r.page.section(id).unwrap().visible, "{} was hidden", id);
        }
    }

    #[test]
    fn metrics_overwrite_formats_currency_and_roi() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        settings.set_metrics(&Metrics {
            revenue: Some("125400".into()),
            costs: Some("78200.5".into()),
            profit: Some("not-a-number".into()),
            roi: Some("60.4".into()),
        });
        let mut r = renderer();
        r.apply_metrics(&settings);
        let slots = r.page.metric_slots();
        assert_eq!(slots[0].text, "$125,400");
        assert_eq!(slots[1].text, "$78,200.5");
        assert_eq!(slots[2].text, "$NaN");
        assert_eq!(slots[3].text, "60.4%");
    }

    #[test]
    fn metrics_missing_fields_keep_slot_defaults() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        settings
            .raw_mut()
            .set_raw(crate::store::METRICS_KEY, r#"{"revenue":"200000"}"#);
        let mut r = renderer();
        r.apply_metrics(&settings);
        let slots = r.page.metric_slots();
        assert_eq!(slots[0].text, "$200,000");
        assert_eq!(slots[1].text, "$78,200");
        assert_eq!(slots[2].text, "$47,200");
        assert_eq!(slots[3].text, "60.4%");
    }

    #[test]
    fn absent_metrics_leave_page_defaults() {
        let settings = SettingsStore::new(MemoryStore::new());
        let mut r = renderer();
        r.apply_metrics(&settings);
        assert_eq!(r.page.metric_slots()[0].text, "$125,400");
    }

    #[test]
    fn empty_override_never_renders_empty() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        settings.raw_mut().set_raw(
            crate::store::CONTENT_KEY,
            r#"{"heroTitle":"Custom Farm","heroSubtitle":""}"#,
        );
        let mut r = renderer();
        r.apply_content(&settings);
        assert_eq!(r.page.text("hero-title"), Some("Custom Farm"));
        assert_eq!(
            r.page.text("hero-subtitle"),
            Some("Monitor fields, orchards, and operations in one place")
        );
    }

    #[test]
    fn nonexistent_category_stays_stored_renders_nothing() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        settings.push_inventory(InventoryItem {
            id: 1,
            category: "nonexistent".into(),
            name: "Mystery Crate".into(),
            quantity: "3".into(),
            status: "Low Stock".into(),
            added: "2025-08-25T10:00:00Z".into(),
        });
        settings.push_inventory(InventoryItem {
            id: 2,
            category: "seeds".into(),
            name: "Corn Seeds".into(),
            quantity: "15".into(),
            status: "Low Stock".into(),
            added: "2025-08-25T10:00:00Z".into(),
        });

        let mut r = renderer();
        r.apply_inventory(&settings);
        let seeds = r.page.inventory_tab("seeds").unwrap();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].name, "Corn Seeds");
        assert_eq!(seeds[0].added, "8/25/2025");
        // Still stored, just invisible.
        assert_eq!(settings.inventory().len(), 2);
    }

    #[test]
    fn activity_replay_preserves_newest_first() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        for i in 1..=3u64 {
            settings.push_activity_front(ActivityEntry {
                id: i,
                title: format!("stored {}", i),
                icon: String::new(),
            });
        }
        // Stored order is newest-first: [3, 2, 1].
        let mut r = renderer();
        r.apply_activities(&settings);
        let visible = r.page.activity.visible();
        assert_eq!(visible[0].title, "stored 3");
        assert_eq!(visible[1].title, "stored 2");
        assert_eq!(visible[2].title, "stored 1");
        // Blank icons pick up the default leaf.
        assert_eq!(visible[0].icon, "fa-seedling");
    }

    #[test]
    fn grouping_matches_locale_output() {
        assert_eq!(format_grouped(125400.0), "125,400");
        assert_eq!(format_grouped(1000000.0), "1,000,000");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(60.4), "60.4");
        assert_eq!(format_grouped(-1234.5), "-1,234.5");
        assert_eq!(format_currency(""), "$0");
        assert_eq!(format_currency("abc"), "$NaN");
    }
}
