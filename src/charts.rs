//! Declarative chart specs handed to the external renderer.
//!
//! Everything here is a pure function of [`ChartSettings`]: fixed labels,
//! fixed literal series, and a scenario lookup selecting which literals to
//! show. The renderer consumes the serialized spec and is never read back.

use serde::Serialize;

use crate::settings::{ChartSettings, CostScenario, RevenueType, YieldScenario, YieldType};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
pub const QUARTER_LABELS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];
pub const COST_LABELS: [&str; 5] = ["Labor", "Seeds", "Fertilizer", "Equipment", "Other"];
pub const CROP_LABELS: [&str; 5] = ["Corn", "Wheat", "Soybeans", "Tomatoes", "Apples"];

const YIELD_TONNAGE: [f64; 12] = [
    12.0, 19.0, 3.0, 5.0, 2.0, 3.0, 8.0, 15.0, 25.0, 30.0, 28.0, 20.0,
];
const QUARTER_REVENUE: [f64; 4] = [25_000.0, 35_000.0, 40_000.0, 30_000.0];

const GREEN: &str = "#2d7d32";
const ORANGE: &str = "#ffa726";
const GREEN_FILL_AREA: &str = "rgba(45, 125, 50, 0.25)";
const GREEN_FILL_LIGHT: &str = "rgba(45, 125, 50, 0.1)";
const GREEN_FILL_LINE: &str = "rgba(45, 125, 50, 0.15)";
const GREEN_FILL_RADAR: &str = "rgba(45, 125, 50, 0.2)";
const ORANGE_FILL_RADAR: &str = "rgba(255, 167, 38, 0.2)";
const COST_SEGMENT_COLORS: [&str; 5] =
    ["#2d7d32", "#4caf50", "#66bb6a", "#81c784", "#a5d6a7"];

/// Wire shape of one chart: `{type, labels, datasets, options}`.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
    Radar,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub background_colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radial_max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Legend {
    Hidden,
    Bottom,
}

fn labels(src: &[&str]) -> Vec<String> {
    src.iter().map(|s| s.to_string()).collect()
}

/// Monthly yield prediction. `area` is a line render with fill enabled and
/// a translucent fill color; the other modes use the literal type with
/// fill disabled.
pub fn yield_spec(settings: &ChartSettings) -> ChartSpec {
    let is_area = settings.yield_type == YieldType::Area;
    let kind = match settings.yield_type {
        YieldType::Bar => ChartKind::Bar,
        YieldType::Line | YieldType::Area => ChartKind::Line,
    };
    ChartSpec {
        kind,
        labels: labels(&MONTH_LABELS),
        datasets: vec![Dataset {
            label: Some("Expected Yield (tons)".to_string()),
            data: YIELD_TONNAGE.to_vec(),
            border_color: Some(GREEN.to_string()),
            background_color: Some(
                if is_area { GREEN_FILL_AREA } else { GREEN_FILL_LIGHT }.to_string(),
            ),
            tension: Some(0.4),
            fill: Some(is_area),
            ..Dataset::default()
        }],
        options: Options {
            legend: Legend::Hidden,
            y_begin_at_zero: Some(true),
            radial_max: None,
        },
    }
}

/// Quarterly revenue. Bar vs line changes fill, background, and cornering
/// only; the values never change.
pub fn revenue_spec(settings: &ChartSettings) -> ChartSpec {
    let is_line = settings.revenue_type == RevenueType::Line;
    ChartSpec {
        kind: if is_line { ChartKind::Line } else { ChartKind::Bar },
        labels: labels(&QUARTER_LABELS),
        datasets: vec![Dataset {
            label: Some("Revenue ($)".to_string()),
            data: QUARTER_REVENUE.to_vec(),
            background_color: Some(
                if is_line { GREEN_FILL_LINE } else { GREEN }.to_string(),
            ),
            border_color: Some(GREEN.to_string()),
            border_width: Some(2),
            border_radius: Some(if is_line { 0 } else { 8 }),
            fill: Some(is_line),
            ..Dataset::default()
        }],
        options: Options {
            legend: Legend::Hidden,
            y_begin_at_zero: Some(true),
            radial_max: None,
        },
    }
}

/// Cost-breakdown 5-tuples; every row sums to 100.
pub fn cost_scenario_data(scenario: CostScenario) -> [f64; 5] {
    match scenario {
        CostScenario::FertilizerIncrease => [25.0, 18.0, 30.0, 17.0, 10.0],
        CostScenario::LaborIncrease => [40.0, 15.0, 15.0, 20.0, 10.0],
        CostScenario::Baseline => [30.0, 20.0, 15.0, 25.0, 10.0],
    }
}

/// Fixed 5-category cost doughnut.
pub fn cost_spec(settings: &ChartSettings) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: labels(&COST_LABELS),
        datasets: vec![Dataset {
            data: cost_scenario_data(settings.cost_scenario).to_vec(),
            background_colors: COST_SEGMENT_COLORS.iter().map(|c| c.to_string()).collect(),
            border_width: Some(0),
            ..Dataset::default()
        }],
        options: Options {
            legend: Legend::Bottom,
            y_begin_at_zero: None,
            radial_max: None,
        },
    }
}

/// (current year, previous year) series per yield scenario.
pub fn yield_scenario_data(scenario: YieldScenario) -> ([f64; 5], [f64; 5]) {
    match scenario {
        YieldScenario::Drought => (
            [55.0, 45.0, 40.0, 60.0, 50.0],
            [75.0, 65.0, 55.0, 80.0, 70.0],
        ),
        YieldScenario::Bumper => (
            [95.0, 90.0, 85.0, 98.0, 92.0],
            [85.0, 70.0, 60.0, 90.0, 75.0],
        ),
        YieldScenario::Normal => (
            [85.0, 70.0, 60.0, 90.0, 75.0],
            [75.0, 65.0, 55.0, 80.0, 70.0],
        ),
    }
}

/// 5-crop radar comparing current vs previous year.
pub fn comparison_spec(settings: &ChartSettings) -> ChartSpec {
    let (current, previous) = yield_scenario_data(settings.yield_scenario);
    ChartSpec {
        kind: ChartKind::Radar,
        labels: labels(&CROP_LABELS),
        datasets: vec![
            Dataset {
                label: Some("Current Year".to_string()),
                data: current.to_vec(),
                border_color: Some(GREEN.to_string()),
                background_color: Some(GREEN_FILL_RADAR.to_string()),
                point_background_color: Some(GREEN.to_string()),
                ..Dataset::default()
            },
            Dataset {
                label: Some("Previous Year".to_string()),
                data: previous.to_vec(),
                border_color: Some(ORANGE.to_string()),
                background_color: Some(ORANGE_FILL_RADAR.to_string()),
                point_background_color: Some(ORANGE.to_string()),
                ..Dataset::default()
            },
        ],
        options: Options {
            legend: Legend::Bottom,
            y_begin_at_zero: None,
            radial_max: Some(100.0),
        },
    }
}

/// All four specs for a page load, in card order.
pub fn build_all(settings: &ChartSettings) -> [ChartSpec; 4] {
    [
        yield_spec(settings),
        revenue_spec(settings),
        cost_spec(settings),
        comparison_spec(settings),
    ]
}
