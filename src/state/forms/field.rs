//! Form field keys and value objects

use crate::catalog::{BillingCycle, IndustryId, PlanId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every field the wizard collects.
///
/// The set is closed: industry questions are variants here as well and are
/// bound to their industry by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    // Contact
    FirstName,
    LastName,
    Email,
    Phone,
    // Organization
    Company,
    Role,
    CompanySize,
    Industry,
    // Industry questions
    FleetSize,
    FleetType,
    ShipmentVolume,
    WarehouseCount,
    EquipmentCount,
    SiteCount,
    AgencyType,
    ProcurementVehicle,
    // Planning
    Plan,
    BillingCycle,
    Timeline,
    Challenges,
    // Consent
    Terms,
    Privacy,
    Marketing,
}

impl FieldKey {
    pub const COUNT: usize = 23;

    pub const ALL: [FieldKey; Self::COUNT] = [
        FieldKey::FirstName,
        FieldKey::LastName,
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::Company,
        FieldKey::Role,
        FieldKey::CompanySize,
        FieldKey::Industry,
        FieldKey::FleetSize,
        FieldKey::FleetType,
        FieldKey::ShipmentVolume,
        FieldKey::WarehouseCount,
        FieldKey::EquipmentCount,
        FieldKey::SiteCount,
        FieldKey::AgencyType,
        FieldKey::ProcurementVehicle,
        FieldKey::Plan,
        FieldKey::BillingCycle,
        FieldKey::Timeline,
        FieldKey::Challenges,
        FieldKey::Terms,
        FieldKey::Privacy,
        FieldKey::Marketing,
    ];

    /// Position in [`FieldKey::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Role => "role",
            Self::CompanySize => "companySize",
            Self::Industry => "industry",
            Self::FleetSize => "fleetSize",
            Self::FleetType => "fleetType",
            Self::ShipmentVolume => "shipmentVolume",
            Self::WarehouseCount => "warehouseCount",
            Self::EquipmentCount => "equipmentCount",
            Self::SiteCount => "siteCount",
            Self::AgencyType => "agencyType",
            Self::ProcurementVehicle => "procurementVehicle",
            Self::Plan => "plan",
            Self::BillingCycle => "billingCycle",
            Self::Timeline => "timeline",
            Self::Challenges => "challenges",
            Self::Terms => "terms",
            Self::Privacy => "privacy",
            Self::Marketing => "marketing",
        }
    }

    /// The value variant this field accepts
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Industry => FieldKind::Industry,
            Self::Plan => FieldKind::Plan,
            Self::BillingCycle => FieldKind::Billing,
            Self::Challenges => FieldKind::Choices,
            Self::Terms | Self::Privacy | Self::Marketing => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of [`FieldValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    Choices,
    Industry,
    Plan,
    Billing,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choices(Vec<String>),
    Industry(IndustryId),
    Plan(PlanId),
    Billing(BillingCycle),
}

impl FieldValue {
    /// Empty value for a field kind
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::Choices => FieldValue::Choices(Vec::new()),
            FieldKind::Industry => FieldValue::Industry(IndustryId::default()),
            FieldKind::Plan => FieldValue::Plan(PlanId::default()),
            FieldKind::Billing => FieldValue::Billing(BillingCycle::default()),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Choices(_) => FieldKind::Choices,
            FieldValue::Industry(_) => FieldKind::Industry,
            FieldValue::Plan(_) => FieldKind::Plan,
            FieldValue::Billing(_) => FieldKind::Billing,
        }
    }

    /// Get the text value (returns empty string for other kinds)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// True when a required field would be considered unanswered
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(set) => !set,
            FieldValue::Choices(items) => items.is_empty(),
            FieldValue::Industry(_) | FieldValue::Plan(_) | FieldValue::Billing(_) => false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "Yes".to_string(),
            FieldValue::Flag(false) => "No".to_string(),
            FieldValue::Choices(items) => items.join(", "),
            FieldValue::Industry(id) => id.config().name.to_string(),
            FieldValue::Plan(id) => id.config().name.to_string(),
            FieldValue::Billing(cycle) => cycle.label().to_string(),
        }
    }
}
