//! Table rows for listing products.

use serde::Serialize;

use missionstock_core::Entity;
use missionstock_products::{Product, ProductKind};

/// Flattened product view: base columns plus three category-dependent details.
///
/// | category                | detail 1    | detail 2          | detail 3      |
/// |-------------------------|-------------|-------------------|---------------|
/// | Food                    | food type   | expiration date   | `N cal`       |
/// | Medical Equipment       | use         | sterilized yes/no | UDT           |
/// | Tool                    | function    | material          | power yes/no  |
/// | Communication Equipment | comm type   | frequency (MHz)   | `N W`         |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub weight_kg: f64,
    pub volume_m3: f64,
    pub category: &'static str,
    pub details: [String; 3],
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        let details = match product.kind() {
            ProductKind::Food(food) => [
                food.food_type.clone(),
                food.expiration_date.clone(),
                format!("{} cal", food.calories_per_serving),
            ],
            ProductKind::MedicalEquipment(medical) => [
                medical.specific_use.clone(),
                yes_no(medical.is_sterilized),
                medical.udt.clone(),
            ],
            ProductKind::Tool(tool) => [
                tool.function.clone(),
                tool.material.clone(),
                yes_no(tool.requires_power),
            ],
            ProductKind::CommunicationEquipment(comm) => [
                comm.comm_type.clone(),
                comm.frequency_range.to_string(),
                format!("{} W", comm.power),
            ],
        };

        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            weight_kg: product.weight_kg(),
            volume_m3: product.volume_m3(),
            category: product.category().label(),
            details,
        }
    }
}
