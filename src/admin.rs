//! Admin-panel write path: form submits that persist through the settings
//! store. The main page picks the changes up on its next load.

use crate::logging::{json_log, obj, v_bool, v_str, Domain};
use crate::settings::{
    ActivityEntry, ChartSettings, ContentOverrides, InventoryItem, Metrics, Section,
    SettingsStore,
};
use crate::store::SlotStore;

pub struct AdminPanel;

impl AdminPanel {
    /// One visibility toggle flipped; the full map is persisted.
    pub fn toggle_section<S: SlotStore>(
        settings: &mut SettingsStore<S>,
        section: Section,
        visible: bool,
    ) {
        let mut vis = settings.visibility();
        vis.set(section, visible);
        settings.set_visibility(&vis);
        json_log(
            Domain::Store,
            "visibility_toggled",
            obj(&[
                ("section", v_str(section.card_id())),
                ("visible", v_bool(visible)),
            ]),
        );
    }

    /// Chart settings form: whole-object replace.
    pub fn submit_chart_settings<S: SlotStore>(
        settings: &mut SettingsStore<S>,
        submitted: ChartSettings,
    ) {
        settings.set_chart_settings(&submitted);
    }

    /// Metrics form: whole-object replace, no numeric validation.
    pub fn submit_metrics<S: SlotStore>(settings: &mut SettingsStore<S>, submitted: Metrics) {
        settings.set_metrics(&submitted);
    }

    /// Inventory form: appends one item. Category and name are presence
    /// checked; anything else passes through verbatim.
    pub fn submit_inventory<S: SlotStore>(
        settings: &mut SettingsStore<S>,
        category: &str,
        name: &str,
        quantity: &str,
        status: &str,
    ) -> bool {
        let name = name.trim();
        if category.is_empty() || name.is_empty() {
            return false;
        }
        settings.push_inventory(InventoryItem {
            id: crate::logging::ts_epoch_ms(),
            category: category.to_string(),
            name: name.to_string(),
            quantity: quantity.trim().to_string(),
            status: status.trim().to_string(),
            added: crate::logging::ts_now(),
        });
        true
    }

    /// Activity form: inserts at the front of the stored sequence.
    pub fn submit_activity<S: SlotStore>(
        settings: &mut SettingsStore<S>,
        title: &str,
        icon: &str,
    ) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        settings.push_activity_front(ActivityEntry {
            id: crate::logging::ts_epoch_ms(),
            title: title.to_string(),
            icon: icon.to_string(),
        });
        true
    }

    /// Content form: merge-on-write (blank inputs keep prior values).
    pub fn submit_content<S: SlotStore>(
        settings: &mut SettingsStore<S>,
        submitted: ContentOverrides,
    ) {
        settings.submit_content(submitted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn toggle_persists_full_map() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        AdminPanel::toggle_section(&mut settings, Section::Revenue, false);
        let vis = settings.visibility();
        assert!(!vis.is_visible(Section::Revenue));
        assert!(vis.is_visible(Section::Yield));
        assert!(vis.is_visible(Section::Cost));
        assert!(vis.is_visible(Section::YieldComparison));
    }

    #[test]
    fn inventory_submit_requires_category_and_name() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        assert!(!AdminPanel::submit_inventory(&mut settings, "", "Seeds", "5", "Good"));
        assert!(!AdminPanel::submit_inventory(&mut settings, "seeds", "  ", "5", "Good"));
        assert!(AdminPanel::submit_inventory(&mut settings, "seeds", "Corn Seeds", "5", "Good"));
        let items = settings.inventory();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Corn Seeds");
        assert!(items[0].id > 0);
    }

    #[test]
    fn activity_submit_goes_to_front() {
        let mut settings = SettingsStore::new(MemoryStore::new());
        assert!(AdminPanel::submit_activity(&mut settings, "first", "fa-flask"));
        assert!(AdminPanel::submit_activity(&mut settings, "second", "fa-tools"));
        assert!(!AdminPanel::submit_activity(&mut settings, "   ", "fa-tools"));
        let stored = settings.activities();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].title, "second");
    }

    #[test]
    fn chart_submit_replaces_whole_object() {
        use crate::settings::{CostScenario, YieldType};
        let mut settings = SettingsStore::new(MemoryStore::new());
        AdminPanel::submit_chart_settings(
            &mut settings,
            ChartSettings {
                yield_type: YieldType::Area,
                cost_scenario: CostScenario::LaborIncrease,
                ..Default::default()
            },
        );
        let stored = settings.chart_settings();
        assert_eq!(stored.yield_type, YieldType::Area);
        assert_eq!(stored.cost_scenario, CostScenario::LaborIncrease);
    }
}
