//! Typed accessors over the fixed slot set.
//!
//! Every read is total: malformed stored JSON is absorbed into the slot's
//! documented default and never surfaced. Writes serialize the full value
//! and replace the slot.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::logging::{json_log, obj, v_str, Domain};
use crate::store::{
    SlotStore, ACTIVITIES_KEY, ADMIN_AUTH_KEY, CHARTS_KEY, CONTENT_KEY, DASH_VIS_KEY,
    INVENTORY_KEY, METRICS_KEY,
};

// ---------------------------------------------------------------------------
// Chart settings
// ---------------------------------------------------------------------------

/// Render mode for the monthly yield chart. Any unrecognized stored value
/// falls back to `Line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum YieldType {
    #[default]
    Line,
    Bar,
    Area,
}

impl From<String> for YieldType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "bar" => YieldType::Bar,
            "area" => YieldType::Area,
            "line" => YieldType::Line,
            _ => YieldType::default(),
        }
    }
}

impl From<YieldType> for String {
    fn from(t: YieldType) -> String {
        match t {
            YieldType::Line => "line",
            YieldType::Bar => "bar",
            YieldType::Area => "area",
        }
        .to_string()
    }
}

/// Render mode for the quarterly revenue chart. Falls back to `Bar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RevenueType {
    #[default]
    Bar,
    Line,
}

impl From<String> for RevenueType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "line" => RevenueType::Line,
            "bar" => RevenueType::Bar,
            _ => RevenueType::default(),
        }
    }
}

impl From<RevenueType> for String {
    fn from(t: RevenueType) -> String {
        match t {
            RevenueType::Bar => "bar",
            RevenueType::Line => "line",
        }
        .to_string()
    }
}

/// Preset selecting one row of the cost breakdown table. Falls back to
/// `Baseline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CostScenario {
    #[default]
    Baseline,
    FertilizerIncrease,
    LaborIncrease,
}

impl From<String> for CostScenario {
    fn from(s: String) -> Self {
        match s.as_str() {
            "fertilizerIncrease" => CostScenario::FertilizerIncrease,
            "laborIncrease" => CostScenario::LaborIncrease,
            "baseline" => CostScenario::Baseline,
            _ => CostScenario::default(),
        }
    }
}

impl From<CostScenario> for String {
    fn from(s: CostScenario) -> String {
        match s {
            CostScenario::Baseline => "baseline",
            CostScenario::FertilizerIncrease => "fertilizerIncrease",
            CostScenario::LaborIncrease => "laborIncrease",
        }
        .to_string()
    }
}

/// Preset selecting one row pair of the yield-comparison table. Falls back
/// to `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum YieldScenario {
    #[default]
    Normal,
    Drought,
    Bumper,
}

impl From<String> for YieldScenario {
    fn from(s: String) -> Self {
        match s.as_str() {
            "drought" => YieldScenario::Drought,
            "bumper" => YieldScenario::Bumper,
            "normal" => YieldScenario::Normal,
            _ => YieldScenario::default(),
        }
    }
}

impl From<YieldScenario> for String {
    fn from(s: YieldScenario) -> String {
        match s {
            YieldScenario::Normal => "normal",
            YieldScenario::Drought => "drought",
            YieldScenario::Bumper => "bumper",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartSettings {
    pub yield_type: YieldType,
    pub revenue_type: RevenueType,
    pub cost_scenario: CostScenario,
    pub yield_scenario: YieldScenario,
}

// ---------------------------------------------------------------------------
// Dashboard visibility
// ---------------------------------------------------------------------------

/// The four toggleable dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Yield,
    Revenue,
    Cost,
    YieldComparison,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Yield,
        Section::Revenue,
        Section::Cost,
        Section::YieldComparison,
    ];

    /// Element id of the card this section renders into.
    pub fn card_id(&self) -> &'static str {
        match self {
            Section::Yield => "yield-card",
            Section::Revenue => "revenue-card",
            Section::Cost => "cost-card",
            Section::YieldComparison => "yield-comparison-card",
        }
    }
}

fn visible() -> bool {
    true
}

/// Per-section visibility. A key missing from storage reads as visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardVisibility {
    #[serde(rename = "yield")]
    pub yield_chart: bool,
    pub revenue: bool,
    pub cost: bool,
    #[serde(rename = "yieldComparison")]
    pub yield_comparison: bool,
}

impl Default for DashboardVisibility {
    fn default() -> Self {
        Self {
            yield_chart: visible(),
            revenue: visible(),
            cost: visible(),
            yield_comparison: visible(),
        }
    }
}

impl DashboardVisibility {
    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::Yield => self.yield_chart,
            Section::Revenue => self.revenue,
            Section::Cost => self.cost,
            Section::YieldComparison => self.yield_comparison,
        }
    }

    pub fn set(&mut self, section: Section, visible: bool) {
        match section {
            Section::Yield => self.yield_chart = visible,
            Section::Revenue => self.revenue = visible,
            Section::Cost => self.cost = visible,
            Section::YieldComparison => self.yield_comparison = visible,
        }
    }
}

// ---------------------------------------------------------------------------
// Metrics, inventory, activities, content
// ---------------------------------------------------------------------------

/// Admin-entered headline numbers. Kept as strings: no numeric validation
/// is applied, and a non-numeric value renders as NaN downstream. A field
/// absent from the stored object leaves its page default untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub revenue: Option<String>,
    pub costs: Option<String>,
    pub profit: Option<String>,
    pub roi: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Epoch-millisecond timestamp; uniqueness is best-effort only.
    pub id: u64,
    pub category: String,
    pub name: String,
    pub quantity: String,
    pub status: String,
    /// RFC3339 timestamp of the admin submit.
    pub added: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub icon: String,
}

/// Optional text overrides for the editable page copy. An absent or empty
/// field leaves the page default in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentOverrides {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub corn_harvest: Option<String>,
    pub apple_pest_alert: Option<String>,
    pub footer_tagline: Option<String>,
}

fn keep_non_empty(prior: &mut Option<String>, submitted: Option<String>) {
    match submitted {
        Some(s) if !s.trim().is_empty() => *prior = Some(s),
        _ => {}
    }
}

impl ContentOverrides {
    /// Merge a submitted form into the stored overrides. Blank inputs keep
    /// the prior value so a resubmit cannot silently erase set fields.
    pub fn merge(&mut self, submitted: ContentOverrides) {
        keep_non_empty(&mut self.hero_title, submitted.hero_title);
        keep_non_empty(&mut self.hero_subtitle, submitted.hero_subtitle);
        keep_non_empty(&mut self.corn_harvest, submitted.corn_harvest);
        keep_non_empty(&mut self.apple_pest_alert, submitted.apple_pest_alert);
        keep_non_empty(&mut self.footer_tagline, submitted.footer_tagline);
    }
}

// ---------------------------------------------------------------------------
// SettingsStore
// ---------------------------------------------------------------------------

/// Typed read/write facade over a [`SlotStore`].
pub struct SettingsStore<S: SlotStore> {
    store: S,
}

impl<S: SlotStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Direct access to the underlying key→string map.
    pub fn raw(&self) -> &S {
        &self.store
    }

    pub fn raw_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn read_slot<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.store.get_raw(key) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                json_log(
                    Domain::Store,
                    "parse_recovered",
                    obj(&[
                        ("key", v_str(key)),
                        ("error", v_str(&err.to_string())),
                    ]),
                );
                T::default()
            }
        }
    }

    fn write_slot<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.set_raw(key, &raw),
            Err(err) => json_log(
                Domain::Store,
                "serialize_failed",
                obj(&[("key", v_str(key)), ("error", v_str(&err.to_string()))]),
            ),
        }
    }

    pub fn chart_settings(&self) -> ChartSettings {
        self.read_slot(CHARTS_KEY)
    }

    pub fn set_chart_settings(&mut self, settings: &ChartSettings) {
        self.write_slot(CHARTS_KEY, settings);
    }

    pub fn visibility(&self) -> DashboardVisibility {
        self.read_slot(DASH_VIS_KEY)
    }

    pub fn set_visibility(&mut self, vis: &DashboardVisibility) {
        self.write_slot(DASH_VIS_KEY, vis);
    }

    /// Metrics are optional: the renderer leaves the page defaults alone
    /// when nothing was ever stored.
    pub fn metrics(&self) -> Option<Metrics> {
        self.store.get_raw(METRICS_KEY)?;
        Some(self.read_slot(METRICS_KEY))
    }

    pub fn set_metrics(&mut self, metrics: &Metrics) {
        self.write_slot(METRICS_KEY, metrics);
    }

    pub fn inventory(&self) -> Vec<InventoryItem> {
        self.read_slot(INVENTORY_KEY)
    }

    /// Append one item to the stored sequence. Items are never edited or
    /// removed.
    pub fn push_inventory(&mut self, item: InventoryItem) {
        let mut items = self.inventory();
        items.push(item);
        self.write_slot(INVENTORY_KEY, &items);
    }

    pub fn activities(&self) -> Vec<ActivityEntry> {
        self.read_slot(ACTIVITIES_KEY)
    }

    /// Insert an admin-entered entry at the front (stored order is
    /// newest-first, with no cap on the stored sequence).
    pub fn push_activity_front(&mut self, entry: ActivityEntry) {
        let mut entries = self.activities();
        entries.insert(0, entry);
        self.write_slot(ACTIVITIES_KEY, &entries);
    }

    pub fn content(&self) -> ContentOverrides {
        self.read_slot(CONTENT_KEY)
    }

    /// Merge-on-write: blank submitted fields preserve prior values.
    pub fn submit_content(&mut self, submitted: ContentOverrides) {
        let mut current = self.content();
        current.merge(submitted);
        self.write_slot(CONTENT_KEY, &current);
    }

    // The session slot holds an opaque token string, not JSON.

    pub fn session_token(&self) -> Option<String> {
        self.store.get_raw(ADMIN_AUTH_KEY)
    }

    pub fn set_session_token(&mut self, token: &str) {
        self.store.set_raw(ADMIN_AUTH_KEY, token);
    }

    pub fn clear_session_token(&mut self) {
        self.store.remove(ADMIN_AUTH_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn fresh() -> SettingsStore<MemoryStore> {
        SettingsStore::new(MemoryStore::new())
    }

    #[test]
    fn unknown_enum_values_fall_back_to_documented_defaults() {
        let parsed: ChartSettings = serde_json::from_str(
            r#"{"yieldType":"sparkline","revenueType":"pie",
                "costScenario":"hyperinflation","yieldScenario":"locusts"}"#,
        )
        .unwrap();
        assert_eq!(parsed.yield_type, YieldType::Line);
        assert_eq!(parsed.revenue_type, RevenueType::Bar);
        assert_eq!(parsed.cost_scenario, CostScenario::Baseline);
        assert_eq!(parsed.yield_scenario, YieldScenario::Normal);
    }

    #[test]
    fn known_enum_values_parse_exactly() {
        let parsed: ChartSettings = serde_json::from_str(
            r#"{"yieldType":"area","revenueType":"line",
                "costScenario":"laborIncrease","yieldScenario":"bumper"}"#,
        )
        .unwrap();
        assert_eq!(parsed.yield_type, YieldType::Area);
        assert_eq!(parsed.revenue_type, RevenueType::Line);
        assert_eq!(parsed.cost_scenario, CostScenario::LaborIncrease);
        assert_eq!(parsed.yield_scenario, YieldScenario::Bumper);
    }

    #[test]
    fn malformed_slot_reads_as_default() {
        let mut settings = fresh();
        settings.store.set_raw(CHARTS_KEY, "{not json");
        assert_eq!(settings.chart_settings(), ChartSettings::default());
        settings.store.set_raw(DASH_VIS_KEY, "[]");
        assert_eq!(settings.visibility(), DashboardVisibility::default());
    }

    #[test]
    fn missing_visibility_key_defaults_to_visible() {
        let parsed: DashboardVisibility =
            serde_json::from_str(r#"{"revenue":false}"#).unwrap();
        assert!(parsed.yield_chart);
        assert!(!parsed.revenue);
        assert!(parsed.cost);
        assert!(parsed.yield_comparison);
    }

    #[test]
    fn chart_settings_serialize_with_storage_field_names() {
        let json = serde_json::to_string(&ChartSettings::default()).unwrap();
        assert!(json.contains("\"yieldType\":\"line\""));
        assert!(json.contains("\"revenueType\":\"bar\""));
        assert!(json.contains("\"costScenario\":\"baseline\""));
        assert!(json.contains("\"yieldScenario\":\"normal\""));
    }

    #[test]
    fn metrics_absent_vs_stored() {
        let mut settings = fresh();
        assert!(settings.metrics().is_none());
        settings.set_metrics(&Metrics {
            revenue: Some("125400".into()),
            costs: Some("78200".into()),
            profit: Some("47200".into()),
            roi: Some("60.4".into()),
        });
        assert_eq!(settings.metrics().unwrap().roi.as_deref(), Some("60.4"));
    }

    #[test]
    fn partial_metrics_object_parses_with_absent_fields() {
        let mut settings = fresh();
        settings.store.set_raw(METRICS_KEY, r#"{"revenue":"200000"}"#);
        let metrics = settings.metrics().unwrap();
        assert_eq!(metrics.revenue.as_deref(), Some("200000"));
        assert_eq!(metrics.costs, None);
        assert_eq!(metrics.roi, None);
    }

    #[test]
    fn content_merge_keeps_prior_on_blank_resubmit() {
        let mut settings = fresh();
        settings.submit_content(ContentOverrides {
            hero_title: Some("Orchard Ops".into()),
            hero_subtitle: Some("Season 2025".into()),
            ..Default::default()
        });
        // Resubmit with only one field filled; the blank hero_subtitle must
        // not erase the stored value.
        settings.submit_content(ContentOverrides {
            hero_title: Some("Orchard Ops II".into()),
            hero_subtitle: Some("   ".into()),
            ..Default::default()
        });
        let content = settings.content();
        assert_eq!(content.hero_title.as_deref(), Some("Orchard Ops II"));
        assert_eq!(content.hero_subtitle.as_deref(), Some("Season 2025"));
        assert_eq!(content.footer_tagline, None);
    }

    #[test]
    fn activity_storage_is_newest_first_and_uncapped() {
        let mut settings = fresh();
        for i in 0..8u64 {
            settings.push_activity_front(ActivityEntry {
                id: i,
                title: format!("entry {}", i),
                icon: "fa-seedling".into(),
            });
        }
        let stored = settings.activities();
        assert_eq!(stored.len(), 8);
        assert_eq!(stored[0].title, "entry 7");
        assert_eq!(stored[7].title, "entry 0");
    }
}
