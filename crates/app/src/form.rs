//! Form-shaped product requests.
//!
//! The presentation layer submits what the user typed: a category selection and
//! raw text per field. Only the selected category's fields are read; the rest
//! are ignored, whatever they contain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use missionstock_core::{Entity, ProductId};
use missionstock_products::{
    Category, CommunicationEquipment, Food, MedicalEquipment, Product, ProductKind, Tool,
};

use crate::error::FormError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub category: Option<Category>,

    pub id: String,
    pub name: String,
    pub weight_kg: String,
    pub volume_m3: String,

    // Food
    pub expiration_date: String,
    pub food_type: String,
    pub calories_per_serving: String,

    // Medical equipment
    pub specific_use: String,
    pub is_sterilized: bool,
    pub sterilization_date: String,
    pub udt: String,

    // Tool
    pub function: String,
    pub material: String,
    pub requires_power: bool,

    // Communication equipment
    pub comm_type: String,
    pub frequency_range: String,
    pub power: String,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn text(value: &str) -> String {
    value.trim().to_string()
}

fn number<T: FromStr>(field: &'static str, value: &str) -> Result<T, FormError> {
    value.trim().parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Like [`number`], but also rejects `inf`/`NaN`, which the snapshot format
/// cannot carry.
fn finite(field: &'static str, value: &str) -> Result<f64, FormError> {
    let parsed: f64 = number(field, value)?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(FormError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }
}

impl ProductForm {
    /// Start a form for `category` with the base fields filled in.
    pub fn new(
        category: Category,
        id: impl Into<String>,
        name: impl Into<String>,
        weight_kg: impl Into<String>,
        volume_m3: impl Into<String>,
    ) -> Self {
        Self {
            category: Some(category),
            id: id.into(),
            name: name.into(),
            weight_kg: weight_kg.into(),
            volume_m3: volume_m3.into(),
            ..Self::default()
        }
    }

    /// Fill a form from an existing record (e.g. when a table row is selected).
    pub fn from_product(product: &Product) -> Self {
        let mut form = Self::new(
            product.category(),
            product.id().as_str(),
            product.name(),
            product.weight_kg().to_string(),
            product.volume_m3().to_string(),
        );

        match product.kind() {
            ProductKind::Food(food) => {
                form.expiration_date = food.expiration_date.clone();
                form.food_type = food.food_type.clone();
                form.calories_per_serving = food.calories_per_serving.to_string();
            }
            ProductKind::MedicalEquipment(medical) => {
                form.specific_use = medical.specific_use.clone();
                form.is_sterilized = medical.is_sterilized;
                form.sterilization_date = medical.sterilization_date.clone();
                form.udt = medical.udt.clone();
            }
            ProductKind::Tool(tool) => {
                form.function = tool.function.clone();
                form.material = tool.material.clone();
                form.requires_power = tool.requires_power;
            }
            ProductKind::CommunicationEquipment(comm) => {
                form.comm_type = comm.comm_type.clone();
                form.frequency_range = comm.frequency_range.to_string();
                form.power = comm.power.to_string();
            }
        }

        form
    }

    /// Validate the form and build the product it describes.
    ///
    /// Checks run in the order a user fixes them: basic fields present, category
    /// selected, base numbers parse, category fields present, category numbers
    /// parse, then the product's own rules (non-negative measures).
    pub fn into_product(self) -> Result<Product, FormError> {
        if [&self.id, &self.name, &self.weight_kg, &self.volume_m3]
            .iter()
            .any(|value| blank(value))
        {
            return Err(FormError::MissingBasicFields);
        }

        let category = self.category.ok_or(FormError::MissingCategory)?;
        let weight_kg = finite("weight", &self.weight_kg)?;
        let volume_m3 = finite("volume", &self.volume_m3)?;

        let kind = self.kind(category)?;
        let product = Product::new(
            ProductId::new(text(&self.id))?,
            text(&self.name),
            weight_kg,
            volume_m3,
            kind,
        );
        product.validate()?;
        Ok(product)
    }

    fn require(&self, category: Category, fields: &[&String]) -> Result<(), FormError> {
        if fields.iter().any(|value| blank(value)) {
            return Err(FormError::MissingCategoryFields(category));
        }
        Ok(())
    }

    fn kind(&self, category: Category) -> Result<ProductKind, FormError> {
        let kind: ProductKind = match category {
            Category::Food => {
                self.require(
                    category,
                    &[&self.expiration_date, &self.food_type, &self.calories_per_serving],
                )?;
                Food {
                    expiration_date: text(&self.expiration_date),
                    food_type: text(&self.food_type),
                    calories_per_serving: number("calories", &self.calories_per_serving)?,
                }
                .into()
            }
            Category::MedicalEquipment => {
                self.require(
                    category,
                    &[&self.specific_use, &self.sterilization_date, &self.udt],
                )?;
                MedicalEquipment {
                    specific_use: text(&self.specific_use),
                    is_sterilized: self.is_sterilized,
                    sterilization_date: text(&self.sterilization_date),
                    udt: text(&self.udt),
                }
                .into()
            }
            Category::Tool => {
                self.require(category, &[&self.function, &self.material])?;
                Tool {
                    function: text(&self.function),
                    material: text(&self.material),
                    requires_power: self.requires_power,
                }
                .into()
            }
            Category::CommunicationEquipment => {
                self.require(category, &[&self.comm_type, &self.frequency_range, &self.power])?;
                CommunicationEquipment {
                    comm_type: text(&self.comm_type),
                    frequency_range: finite("frequency range", &self.frequency_range)?,
                    power: number("power", &self.power)?,
                }
                .into()
            }
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use missionstock_core::DomainError;

    fn food_form() -> ProductForm {
        ProductForm {
            expiration_date: "2027-02-01".to_string(),
            food_type: "freeze-dried".to_string(),
            calories_per_serving: "520".to_string(),
            ..ProductForm::new(Category::Food, "FOOD-1", "Lasagna", "0.4", "0.002")
        }
    }

    #[test]
    fn builds_food_product() {
        let product = food_form().into_product().unwrap();
        assert_eq!(product.id(), "FOOD-1");
        assert_eq!(product.weight_kg(), 0.4);
        match product.kind() {
            ProductKind::Food(food) => assert_eq!(food.calories_per_serving, 520),
            other => panic!("expected food, got {other:?}"),
        }
    }

    #[test]
    fn basic_fields_are_checked_first() {
        let form = ProductForm {
            name: " ".to_string(),
            category: None,
            ..food_form()
        };
        assert_eq!(form.into_product(), Err(FormError::MissingBasicFields));
    }

    #[test]
    fn category_is_required() {
        let form = ProductForm {
            category: None,
            ..food_form()
        };
        assert_eq!(form.into_product(), Err(FormError::MissingCategory));
    }

    #[test]
    fn category_fields_are_required() {
        let form = ProductForm {
            food_type: String::new(),
            ..food_form()
        };
        let err = form.into_product().unwrap_err();
        assert_eq!(err, FormError::MissingCategoryFields(Category::Food));
        assert_eq!(err.to_string(), "complete all Food fields");
    }

    #[test]
    fn non_numeric_input_is_reported() {
        let form = ProductForm {
            weight_kg: "heavy".to_string(),
            ..food_form()
        };
        assert_eq!(
            form.into_product().unwrap_err().to_string(),
            "numeric format error in weight: 'heavy'"
        );

        let form = ProductForm {
            calories_per_serving: "12.5".to_string(),
            ..food_form()
        };
        assert!(matches!(
            form.into_product(),
            Err(FormError::InvalidNumber { field: "calories", .. })
        ));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let form = ProductForm {
            volume_m3: "NaN".to_string(),
            ..food_form()
        };
        assert!(matches!(
            form.into_product(),
            Err(FormError::InvalidNumber { field: "volume", .. })
        ));
    }

    #[test]
    fn negative_weight_fails_product_rules() {
        let form = ProductForm {
            weight_kg: "-2".to_string(),
            ..food_form()
        };
        assert!(matches!(
            form.into_product(),
            Err(FormError::Invalid(DomainError::InvariantViolation(_)))
        ));
    }

    #[test]
    fn other_category_fields_are_ignored() {
        let form = ProductForm {
            power: "not a number".to_string(),
            ..food_form()
        };
        assert!(form.into_product().is_ok());
    }

    #[test]
    fn medical_form_requires_date_even_when_unsterilized() {
        let form = ProductForm {
            specific_use: "splinting".to_string(),
            udt: "UDT-4".to_string(),
            ..ProductForm::new(Category::MedicalEquipment, "MED-1", "Splint", "0.3", "0.01")
        };
        assert_eq!(
            form.into_product(),
            Err(FormError::MissingCategoryFields(Category::MedicalEquipment))
        );
    }

    #[test]
    fn inputs_are_trimmed() {
        let form = ProductForm {
            comm_type: " UHF ".to_string(),
            frequency_range: " 437.5 ".to_string(),
            power: " 5 ".to_string(),
            ..ProductForm::new(
                Category::CommunicationEquipment,
                " COMM-1 ",
                " Beacon ",
                "1",
                "0.01",
            )
        };
        let product = form.into_product().unwrap();
        assert_eq!(product.id(), "COMM-1");
        assert_eq!(product.name(), "Beacon");
        assert_eq!(
            product.kind(),
            &ProductKind::CommunicationEquipment(CommunicationEquipment {
                comm_type: "UHF".to_string(),
                frequency_range: 437.5,
                power: 5,
            })
        );
    }

    #[test]
    fn from_product_refills_the_form() {
        let product = ProductForm {
            function: "cutting".to_string(),
            material: "stainless steel".to_string(),
            requires_power: false,
            ..ProductForm::new(Category::Tool, "TOOL-9", "Shears", "0.7", "0.001")
        }
        .into_product()
        .unwrap();

        let form = ProductForm::from_product(&product);
        assert_eq!(form.category, Some(Category::Tool));
        assert_eq!(form.function, "cutting");
        assert_eq!(form.into_product().unwrap(), product);
    }
}
