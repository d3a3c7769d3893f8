//! Shared type definitions for the Flowdeck dashboard.
//!
//! Everything here is plain data: the fixed stage catalog driving the
//! integration demo, the static inventory dataset, the mock payloads that
//! stand in for backend responses, and the `Msg`/`Effect` enums the UI loop
//! routes. No module in this crate performs I/O.

use chrono::{Local, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;

/// One named step of the fixed five-step integration sequence.
///
/// Stages are defined once at startup and never created or destroyed at
/// runtime. Ordering is significant: stages execute strictly in array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
}

impl Stage {
    /// Synthetic API endpoint for this stage: the stage name with spaces
    /// removed, lowercased, under `/api/`.
    pub fn endpoint(&self) -> String {
        format!("/api/{}", self.name.replace(' ', "").to_lowercase())
    }
}

const STAGES: [Stage; 5] = [
    Stage {
        id: 1,
        name: "Login ERP",
        description: "Authenticate with the ERP cloud tenant",
    },
    Stage {
        id: 2,
        name: "Create Order",
        description: "Sales order created through the ERP API",
    },
    Stage {
        id: 3,
        name: "Update Shipping",
        description: "Shipping carrier assigned, tracking details updated",
    },
    Stage {
        id: 4,
        name: "Create Payment",
        description: "Incoming payment posted against the order",
    },
    Stage {
        id: 5,
        name: "Create Delivery + Invoice",
        description: "Delivery note and AR invoice created successfully",
    },
];

/// The fixed stage catalog, in execution order.
pub fn stages() -> &'static [Stage] {
    &STAGES
}

/// Number of stages in the demo sequence.
pub fn stage_count() -> usize {
    STAGES.len()
}

/// Purchase status of an inventory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Available,
    NotPurchased,
}

impl ItemStatus {
    /// Display label, matching the filter selector wording.
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Available => "Available",
            ItemStatus::NotPurchased => "Not Purchased",
        }
    }
}

/// A single record of the static inventory dataset.
///
/// The dataset is an immutable reference set; the UI only filters it and
/// never mutates a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub sku: String,
    pub name: String,
    pub vendor: String,
    pub stock: u32,
    pub status: ItemStatus,
}

impl InventoryItem {
    fn new(sku: &str, name: &str, vendor: &str, stock: u32, status: ItemStatus) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            vendor: vendor.into(),
            stock,
            status,
        }
    }
}

static BASE_INVENTORY: Lazy<Vec<InventoryItem>> = Lazy::new(|| {
    use ItemStatus::{Available, NotPurchased};
    vec![
        InventoryItem::new("SAP-1001", "Surgical Mask Box", "MedLife", 120, Available),
        InventoryItem::new("SAP-1002", "Gloves Pack", "CarePlus", 0, NotPurchased),
        InventoryItem::new("SAP-1003", "Sanitizer Bottle", "CleanPro", 45, Available),
        InventoryItem::new("SAP-1004", "Thermal Scanner", "TechMed", 0, NotPurchased),
        InventoryItem::new("SAP-1005", "Face Shield", "CarePlus", 80, Available),
    ]
});

/// The fixed five-record inventory dataset.
pub fn base_inventory() -> &'static [InventoryItem] {
    &BASE_INVENTORY
}

/// One timestamped line of the activity log. Append-only; insertion order is
/// display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local wall-clock time the entry was appended, `HH:MM:SS`.
    pub timestamp: String,
    pub message: String,
}

impl LogEntry {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
        }
    }
}

/// Payload of a successful mock call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
    pub message: String,
    pub doc_entry: u32,
    pub duration_ms: u32,
}

/// Synthetic response standing in for a successful backend call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockResponse {
    pub timestamp: String,
    pub endpoint: String,
    pub status: String,
    pub payload: ResponsePayload,
}

impl MockResponse {
    pub fn new(stage: &Stage, doc_entry: u32, duration_ms: u32) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            endpoint: stage.endpoint(),
            status: "200 OK".into(),
            payload: ResponsePayload {
                message: format!("{} completed successfully", stage.name),
                doc_entry,
                duration_ms,
            },
        }
    }
}

/// Synthetic error standing in for a failed backend call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockError {
    pub error: String,
    pub status: String,
}

impl MockError {
    pub fn new(stage: &Stage) -> Self {
        Self {
            error: format!("{} failed at backend", stage.name),
            status: "500 ERROR".into(),
        }
    }
}

/// Outcome of one simulated call, kept as the most recent response object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MockOutcome {
    Response(MockResponse),
    Error(MockError),
}

impl MockOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MockOutcome::Response(_))
    }
}

/// Top-level display modes, mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Integration,
    Inventory,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Integration => "Integration",
            View::Inventory => "Inventory",
        }
    }
}

/// Messages that update the application state.
///
/// Every user action and system event is expressed as a `Msg` and routed
/// through the single update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Switch to a specific view
    SwitchView(View),
    /// Switch to the other view
    NextView,
    /// Run the next integration step (or retry the failed one)
    RunStep,
    /// The simulated call latency elapsed; draw and apply the outcome
    StepElapsed,
    /// The post-success settle delay elapsed; advance to the next stage
    StepSettled,
    /// Add a character to the inventory search input
    SearchChar(char),
    /// Remove a character from the inventory search input
    SearchBackspace,
    /// Clear the inventory search input
    SearchClear,
    /// Cycle the vendor selector by the given offset
    CycleVendor(isize),
    /// Cycle the status selector by the given offset
    CycleStatus(isize),
    /// Periodic UI tick (spinner animation)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

/// Side effects requested by state updates.
///
/// Effects describe what should happen outside the pure update path; the
/// runtime turns them into scheduled timer tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start the simulated-latency timer for the step in flight
    ScheduleElapsed,
    /// Start the settle timer that advances past a successful step
    ScheduleSettle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_catalog_is_ordered() {
        let ids: Vec<u8> = stages().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(stage_count(), 5);
    }

    #[test]
    fn endpoint_drops_spaces_and_lowercases() {
        assert_eq!(stages()[0].endpoint(), "/api/loginerp");
        assert_eq!(stages()[1].endpoint(), "/api/createorder");
        assert_eq!(stages()[4].endpoint(), "/api/createdelivery+invoice");
    }

    #[test]
    fn inventory_skus_are_unique() {
        let items = base_inventory();
        assert_eq!(items.len(), 5);
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.sku, b.sku);
            }
        }
    }

    #[test]
    fn every_item_has_exactly_one_status() {
        let available = base_inventory()
            .iter()
            .filter(|i| i.status == ItemStatus::Available)
            .count();
        let not_purchased = base_inventory()
            .iter()
            .filter(|i| i.status == ItemStatus::NotPurchased)
            .count();
        assert_eq!(available + not_purchased, base_inventory().len());
    }

    #[test]
    fn mock_response_serializes_with_camel_case_payload() {
        let stage = &stages()[1];
        let response = MockResponse::new(stage, 42, 750);
        let json = serde_json::to_value(&response).expect("serialize MockResponse");
        assert_eq!(json["status"], "200 OK");
        assert_eq!(json["endpoint"], "/api/createorder");
        assert_eq!(json["payload"]["docEntry"], 42);
        assert_eq!(json["payload"]["durationMs"], 750);
        assert_eq!(json["payload"]["message"], "Create Order completed successfully");
    }

    #[test]
    fn mock_error_serializes_flat() {
        let error = MockError::new(&stages()[0]);
        let json = serde_json::to_value(&error).expect("serialize MockError");
        assert_eq!(json["status"], "500 ERROR");
        assert_eq!(json["error"], "Login ERP failed at backend");
    }

    #[test]
    fn outcome_serializes_untagged() {
        let outcome = MockOutcome::Error(MockError::new(&stages()[0]));
        let json = serde_json::to_value(&outcome).expect("serialize MockOutcome");
        assert!(json.get("error").is_some());
        assert!(json.get("Error").is_none());
    }
}
