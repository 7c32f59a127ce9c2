//! Category-specific payloads.
//!
//! Each struct carries only the fields of its category; the shared base lives on
//! [`crate::Product`].

use serde::{Deserialize, Serialize};

/// Food ration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub expiration_date: String,
    pub food_type: String,
    pub calories_per_serving: i32,
}

/// Medical gear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalEquipment {
    pub specific_use: String,
    pub is_sterilized: bool,
    pub sterilization_date: String,
    pub udt: String,
}

impl MedicalEquipment {
    /// True when the item is not sterilized or has no recorded sterilization date.
    pub fn needs_resterilization(&self) -> bool {
        !self.is_sterilized || self.sterilization_date.trim().is_empty()
    }

    /// Sterilized with a recorded date.
    pub fn fit_for_critical_procedures(&self) -> bool {
        !self.needs_resterilization()
    }

    pub fn sterilization_status(&self) -> String {
        if self.is_sterilized {
            format!("STERILIZED (date: {})", self.sterilization_date)
        } else {
            "NOT STERILIZED".to_string()
        }
    }
}

/// Hand or powered tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub function: String,
    pub material: String,
    pub requires_power: bool,
}

const EVA_MATERIALS: [&str; 3] = ["titanium", "stainless steel", "composite"];
const EMERGENCY_KEYWORDS: [&str; 3] = ["cutting", "escape", "survival"];

impl Tool {
    /// Material rated for extravehicular activity.
    pub fn eva_ready(&self) -> bool {
        let material = self.material.to_lowercase();
        EVA_MATERIALS.iter().any(|m| material.contains(m))
    }

    /// Packing priority score; higher packs first.
    ///
    /// Base 1, +2 for repair tools, +1 when no power is needed, +1 under 2 kg.
    pub fn packing_priority(&self, weight_kg: f64) -> u32 {
        let mut priority = 1;
        if self.function.to_lowercase().contains("repair") {
            priority += 2;
        }
        if !self.requires_power {
            priority += 1;
        }
        if weight_kg < 2.0 {
            priority += 1;
        }
        priority
    }

    pub fn is_emergency_tool(&self) -> bool {
        let function = self.function.to_lowercase();
        EMERGENCY_KEYWORDS.iter().any(|k| function.contains(k))
    }

    pub fn power_source(&self) -> &'static str {
        if self.requires_power { "Electric" } else { "Manual" }
    }
}

/// Radio / comms gear. Frequency is in MHz, power in watts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunicationEquipment {
    pub comm_type: String,
    pub frequency_range: f64,
    pub power: i32,
}

impl CommunicationEquipment {
    /// Simplified free-space range estimate: `power * 10 / (frequency / 1000)`.
    ///
    /// Zero when no frequency is recorded.
    pub fn estimated_range(&self) -> f64 {
        if self.frequency_range == 0.0 {
            return 0.0;
        }
        (f64::from(self.power) * 10.0) / (self.frequency_range / 1000.0)
    }

    pub fn long_range_capable(&self) -> bool {
        self.power > 100 && self.frequency_range < 3000.0
    }
}
