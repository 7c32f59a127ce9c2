use core::str::FromStr;

use serde::{Deserialize, Serialize};

use missionstock_core::{DomainError, DomainResult, Entity, ProductId};

use crate::variant::{CommunicationEquipment, Food, MedicalEquipment, Tool};

/// Below this weight (kg) a product counts as lightweight.
pub const LIGHTWEIGHT_MAX_KG: f64 = 1.0;
/// Below this volume (m³) a product counts as compact.
pub const COMPACT_MAX_M3: f64 = 0.1;

/// Supply category (the variant tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    MedicalEquipment,
    Tool,
    CommunicationEquipment,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::MedicalEquipment,
        Category::Tool,
        Category::CommunicationEquipment,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::MedicalEquipment => "Medical Equipment",
            Category::Tool => "Tool",
            Category::CommunicationEquipment => "Communication Equipment",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::MedicalEquipment => "medical_equipment",
            Category::Tool => "tool",
            Category::CommunicationEquipment => "communication_equipment",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "food" => Ok(Category::Food),
            "medical" | "medical_equipment" => Ok(Category::MedicalEquipment),
            "tool" => Ok(Category::Tool),
            "comm" | "communication" | "communication_equipment" => {
                Ok(Category::CommunicationEquipment)
            }
            _ => {
                let expected: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
                Err(DomainError::validation(format!(
                    "unknown category '{}' (expected one of: {})",
                    s.trim(),
                    expected.join(", ")
                )))
            }
        }
    }
}

/// Category-specific payload of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ProductKind {
    Food(Food),
    MedicalEquipment(MedicalEquipment),
    Tool(Tool),
    CommunicationEquipment(CommunicationEquipment),
}

impl ProductKind {
    pub fn category(&self) -> Category {
        match self {
            ProductKind::Food(_) => Category::Food,
            ProductKind::MedicalEquipment(_) => Category::MedicalEquipment,
            ProductKind::Tool(_) => Category::Tool,
            ProductKind::CommunicationEquipment(_) => Category::CommunicationEquipment,
        }
    }
}

impl From<Food> for ProductKind {
    fn from(value: Food) -> Self {
        ProductKind::Food(value)
    }
}

impl From<MedicalEquipment> for ProductKind {
    fn from(value: MedicalEquipment) -> Self {
        ProductKind::MedicalEquipment(value)
    }
}

impl From<Tool> for ProductKind {
    fn from(value: Tool) -> Self {
        ProductKind::Tool(value)
    }
}

impl From<CommunicationEquipment> for ProductKind {
    fn from(value: CommunicationEquipment) -> Self {
        ProductKind::CommunicationEquipment(value)
    }
}

/// A mission supply record.
///
/// Records are replaced wholesale on update, so there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    weight_kg: f64,
    volume_m3: f64,
    kind: ProductKind,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        weight_kg: f64,
        volume_m3: f64,
        kind: impl Into<ProductKind>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            weight_kg,
            volume_m3,
            kind: kind.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn volume_m3(&self) -> f64 {
        self.volume_m3
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Weight per volume (kg/m³); zero when the volume is not positive.
    pub fn density(&self) -> f64 {
        if self.volume_m3 > 0.0 {
            self.weight_kg / self.volume_m3
        } else {
            0.0
        }
    }

    pub fn is_lightweight(&self) -> bool {
        self.weight_kg < LIGHTWEIGHT_MAX_KG
    }

    pub fn is_compact(&self) -> bool {
        self.volume_m3 < COMPACT_MAX_M3
    }

    /// Check the base-field rules: non-blank id and name, non-negative measures.
    ///
    /// Stores accept invalid records; callers that build records from user
    /// input run this first.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::invalid_id("must not be blank"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        // Written as negated `>=` so NaN is rejected too.
        if !(self.weight_kg >= 0.0) {
            return Err(DomainError::invariant("weight must be non-negative"));
        }
        if !(self.volume_m3 >= 0.0) {
            return Err(DomainError::invariant("volume must be non-negative"));
        }
        Ok(())
    }

    /// One-line summary: `id - name (w kg, v m³)`.
    pub fn summary(&self) -> String {
        format!(
            "{} - {} ({:.2} kg, {:.2} m³)",
            self.id, self.name, self.weight_kg, self.volume_m3
        )
    }

    /// Category-specific description.
    pub fn description(&self) -> String {
        match &self.kind {
            ProductKind::Food(food) => format!(
                "{} - {}, expires {}, {} kcal/serving",
                self.name, food.food_type, food.expiration_date, food.calories_per_serving
            ),
            ProductKind::MedicalEquipment(medical) => format!(
                "Equipment: {} - Use: {} - Status: {} - UDT: {}",
                self.name,
                medical.specific_use,
                medical.sterilization_status(),
                medical.udt
            ),
            ProductKind::Tool(tool) => format!(
                "{} - {} ({}, {})",
                self.name,
                tool.function,
                tool.material,
                tool.power_source()
            ),
            ProductKind::CommunicationEquipment(comm) => format!(
                "{} - {} @ {} MHz, {} W",
                self.name, comm.comm_type, comm.frequency_range, comm.power
            ),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    /// Snapshot files are JSON, which has no NaN or infinity.
    fn check_storable(&self) -> DomainResult<()> {
        let frequency = match &self.kind {
            ProductKind::CommunicationEquipment(comm) => Some(comm.frequency_range),
            _ => None,
        };
        let measures = [
            ("weight", Some(self.weight_kg)),
            ("volume", Some(self.volume_m3)),
            ("frequency range", frequency),
        ];
        for (field, value) in measures {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(DomainError::invariant(format!("{field} must be a finite number")));
            }
        }
        Ok(())
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    fn ration(weight_kg: f64, volume_m3: f64) -> Product {
        Product::new(
            pid("FOOD-1"),
            "Freeze-dried stew",
            weight_kg,
            volume_m3,
            Food {
                expiration_date: "2027-03-01".to_string(),
                food_type: "dehydrated".to_string(),
                calories_per_serving: 450,
            },
        )
    }

    #[test]
    fn density_is_zero_without_volume() {
        assert_eq!(ration(2.0, 0.0).density(), 0.0);
        assert_eq!(ration(2.0, 0.5).density(), 4.0);
    }

    #[test]
    fn lightweight_and_compact_thresholds_are_strict() {
        let p = ration(0.99, 0.09);
        assert!(p.is_lightweight());
        assert!(p.is_compact());

        let p = ration(1.0, 0.1);
        assert!(!p.is_lightweight());
        assert!(!p.is_compact());
    }

    #[test]
    fn validate_rejects_negative_measures_and_blank_name() {
        assert!(ration(1.0, 1.0).validate().is_ok());
        assert!(matches!(
            ration(-1.0, 1.0).validate(),
            Err(DomainError::InvariantViolation(_))
        ));
        assert!(matches!(
            ration(1.0, f64::NAN).validate(),
            Err(DomainError::InvariantViolation(_))
        ));

        let unnamed = Product::new(pid("X"), "  ", 1.0, 1.0, ration(1.0, 1.0).kind().clone());
        assert!(matches!(unnamed.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn non_finite_measures_are_not_storable() {
        assert!(ration(1.0, 0.5).check_storable().is_ok());
        assert_eq!(
            ration(f64::INFINITY, 0.5).check_storable(),
            Err(DomainError::invariant("weight must be a finite number"))
        );

        let radio = Product::new(
            pid("COMM-1"),
            "Radio",
            1.0,
            0.01,
            CommunicationEquipment {
                comm_type: "VHF".to_string(),
                frequency_range: f64::NAN,
                power: 5,
            },
        );
        assert_eq!(
            radio.check_storable(),
            Err(DomainError::invariant("frequency range must be a finite number"))
        );
    }

    #[test]
    fn summary_formats_two_decimals() {
        assert_eq!(
            ration(1.5, 0.25).summary(),
            "FOOD-1 - Freeze-dried stew (1.50 kg, 0.25 m³)"
        );
        assert_eq!(ration(1.5, 0.25).to_string(), ration(1.5, 0.25).summary());
    }

    #[test]
    fn description_depends_on_category() {
        let drill = Product::new(
            pid("TOOL-1"),
            "Drill",
            3.0,
            0.02,
            Tool {
                function: "drilling".to_string(),
                material: "steel".to_string(),
                requires_power: true,
            },
        );
        assert_eq!(drill.category(), Category::Tool);
        assert_eq!(drill.description(), "Drill - drilling (steel, Electric)");
    }

    #[test]
    fn category_parses_aliases() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("medical".parse::<Category>().unwrap(), Category::MedicalEquipment);
        assert_eq!(
            "communication-equipment".parse::<Category>().unwrap(),
            Category::CommunicationEquipment
        );
        assert_eq!("comm".parse::<Category>().unwrap(), Category::CommunicationEquipment);
        assert!("fuel".parse::<Category>().is_err());
    }

    #[test]
    fn every_category_parses_from_its_key() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            "fuel".parse::<Category>().unwrap_err().to_string(),
            "unknown category 'fuel' (expected one of: food, medical_equipment, tool, \
             communication_equipment)"
        );
    }

    #[test]
    fn serialized_form_is_tagged_by_category() {
        let json = serde_json::to_value(ration(1.0, 0.5)).unwrap();
        assert_eq!(json["kind"]["category"], "food");
        assert_eq!(json["kind"]["calories_per_serving"], 450);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, ration(1.0, 0.5));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: density is never negative for non-negative measures.
            #[test]
            fn density_is_non_negative(
                weight in 0.0f64..10_000.0,
                volume in 0.0f64..100.0
            ) {
                let p = ration(weight, volume);
                prop_assert!(p.density() >= 0.0);
                prop_assert!(p.validate().is_ok());
            }
        }
    }
}
