//! Single shared overlay, swapped per invoked action.
//!
//! The embedded forms are inert: submitting any of them closes the overlay
//! without persisting the form data anywhere. That mirrors the original's
//! placeholder behavior and is a recorded product decision, not an
//! oversight in this module.

use crate::logging::{json_log, obj, v_str, Domain};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
}

/// Where a click landed relative to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

/// Crop card actions, each producing its own body template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropAction {
    ViewDetails,
    AddNote,
    ScheduleSpray,
    RecordHarvest,
}

#[derive(Debug, Default)]
pub struct ModalController {
    content: Option<ModalContent>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, title: &str, body: &str) {
        self.content = Some(ModalContent {
            title: title.to_string(),
            body: body.to_string(),
        });
        json_log(Domain::Modal, "open", obj(&[("title", v_str(title))]));
    }

    pub fn close(&mut self) {
        if self.content.take().is_some() {
            json_log(Domain::Modal, "close", obj(&[]));
        }
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    /// Backdrop clicks close the overlay; content clicks do not.
    pub fn handle_click(&mut self, target: ClickTarget) {
        if matches!(target, ClickTarget::Backdrop) {
            self.close();
        }
    }

    /// Embedded form submit: close only, nothing is persisted.
    pub fn submit_form(&mut self) {
        self.close();
    }

    pub fn open_crop_action(&mut self, action: Option<CropAction>, crop: &str) {
        match action {
            Some(CropAction::ViewDetails) => self.open(
                &format!("{} - Details", crop),
                &crop_details_body(crop),
            ),
            Some(CropAction::AddNote) => self.open(
                &format!("{} - Add Note", crop),
                "Field note form: scouting notes, issues observed, actions taken.",
            ),
            Some(CropAction::ScheduleSpray) => self.open(
                &format!("{} - Schedule Spray", crop),
                "Spray form: product, application date, rates and safety notes.",
            ),
            Some(CropAction::RecordHarvest) => self.open(
                &format!("{} - Record Harvest", crop),
                "Harvest form: date, quantity harvested, quality notes.",
            ),
            None => self.open(crop, "No action defined."),
        }
    }

    pub fn open_inventory_reorder(&mut self, item: &str) {
        self.open(
            "Reorder Inventory",
            &format!(
                "Reorder request for {}: requested quantity, target delivery date.",
                item
            ),
        );
    }

    pub fn open_equipment_maintenance(&mut self, equipment: &str) {
        self.open(
            "Equipment Maintenance",
            &format!(
                "Maintenance log for {}: work performed, technician, next service date.",
                equipment
            ),
        );
    }
}

fn crop_details_body(crop: &str) -> String {
    format!(
        "Latest information for {}: health status, growth stage, soil moisture, \
         last field operations, and yield expectations.",
        crop
    )
}
