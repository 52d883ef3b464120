//! Owned model of the rendered page.
//!
//! The original looked every element up ambiently in the document; here the
//! renderer holds an explicit [`Page`] whose node lookups are guarded and
//! return `Option`. A missing target means the operation is silently
//! skipped, matching the original's null-checked DOM access.

use std::collections::HashMap;

use crate::activity::ActivityFeed;
use crate::settings::Section;

/// One dashboard card that can be hidden by the visibility settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCard {
    pub id: &'static str,
    pub visible: bool,
}

/// A headline metric slot in the metrics grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSlot {
    pub label: &'static str,
    pub text: String,
}

/// A rendered inventory card inside one tab container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryCard {
    pub name: String,
    pub status: String,
    pub quantity: String,
    pub added: String,
}

/// Navbar style switched by the debounced scroll handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Solid,
    Translucent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherWidget {
    pub temperature_c: i32,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoistureBar {
    pub field: &'static str,
    pub percent: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatusSlot {
    pub class: String,
    pub text: String,
}

/// Inventory tab container ids. An item whose category matches none of
/// these renders nowhere.
pub const INVENTORY_TABS: [&str; 3] = ["seeds", "fertilizers", "equipment"];

/// Editable text node ids and their shipped defaults.
const TEXT_DEFAULTS: [(&str, &str); 5] = [
    ("hero-title", "Farm & Orchard Management"),
    ("hero-subtitle", "Monitor fields, orchards, and operations in one place"),
    ("corn-harvest", "Corn harvest expected in 2 weeks"),
    ("apple-pest-alert", "Pest alert active in the apple orchard"),
    ("footer-tagline", "Growing smarter, season after season"),
];

pub struct Page {
    sections: Vec<SectionCard>,
    metric_slots: Vec<MetricSlot>,
    text_nodes: HashMap<&'static str, String>,
    inventory_tabs: HashMap<&'static str, Vec<InventoryCard>>,
    pub activity: ActivityFeed,
    pub navbar: NavbarStyle,
    pub weather: WeatherWidget,
    pub moisture_bars: Vec<MoistureBar>,
    pub field_statuses: Vec<FieldStatusSlot>,
}

impl Page {
    /// The main dashboard page with all default content in place.
    pub fn main() -> Self {
        let sections = Section::ALL
            .iter()
            .map(|s| SectionCard {
                id: s.card_id(),
                visible: true,
            })
            .collect();
        let metric_slots = vec![
            MetricSlot { label: "Revenue", text: "$125,400".to_string() },
            MetricSlot { label: "Costs", text: "$78,200".to_string() },
            MetricSlot { label: "Profit", text: "$47,200".to_string() },
            MetricSlot { label: "ROI", text: "60.4%".to_string() },
        ];
        let text_nodes = TEXT_DEFAULTS
            .iter()
            .map(|(id, text)| (*id, text.to_string()))
            .collect();
        let inventory_tabs = INVENTORY_TABS.iter().map(|tab| (*tab, Vec::new())).collect();
        Self {
            sections,
            metric_slots,
            text_nodes,
            inventory_tabs,
            activity: ActivityFeed::new(),
            navbar: NavbarStyle::Solid,
            weather: WeatherWidget {
                temperature_c: 24,
                condition: "Sunny".to_string(),
            },
            moisture_bars: vec![
                MoistureBar { field: "Field A", percent: 75 },
                MoistureBar { field: "Field B", percent: 45 },
                MoistureBar { field: "Field C", percent: 60 },
                MoistureBar { field: "Orchard", percent: 80 },
            ],
            field_statuses: [
                ("healthy", "Healthy"),
                ("warning", "Needs Water"),
                ("healthy", "Ready for Harvest"),
                ("warning", "Pest Alert"),
            ]
            .iter()
            .map(|(class, text)| FieldStatusSlot {
                class: class.to_string(),
                text: text.to_string(),
            })
            .collect(),
        }
    }

    pub fn section(&self, id: &str) -> Option<&SectionCard> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut SectionCard> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn metric_slots(&self) -> &[MetricSlot] {
        &self.metric_slots
    }

    pub fn metric_slots_mut(&mut self) -> &mut [MetricSlot] {
        &mut self.metric_slots
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.text_nodes.get(id).map(|s| s.as_str())
    }

    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(node) = self.text_nodes.get_mut(id) {
            *node = text.to_string();
        }
    }

    pub fn inventory_tab(&self, category: &str) -> Option<&[InventoryCard]> {
        self.inventory_tabs.get(category).map(|v| v.as_slice())
    }

    /// Append a card to a tab container; `false` when the category has no
    /// matching container.
    pub fn append_inventory_card(&mut self, category: &str, card: InventoryCard) -> bool {
        match self.inventory_tabs.get_mut(category) {
            Some(cards) => {
                cards.push(card);
                true
            }
            None => false,
        }
    }
}
