//! Products domain module.
//!
//! A supply record is one shared base (id, name, weight, volume) plus exactly one
//! category-specific payload. Pure data and presentation helpers only (no IO).

pub mod product;
pub mod variant;

pub use product::{Category, Product, ProductKind};
pub use variant::{CommunicationEquipment, Food, MedicalEquipment, Tool};
