//! `missionstock-app`
//!
//! **Responsibility:** the request/response surface the presentation layer talks to.
//!
//! This crate provides:
//! - `ProductForm`: a category selection plus raw field text, as a form submits it
//! - `InventoryService`: create / list / get / update / delete / save / load over
//!   the slot store and its snapshot file
//! - `AppConfig`: where the snapshot lives and how logs are written
//! - `Cli`: the `mission-stock` command line, run through `cli::execute`
//!
//! Windowing and field-visibility rules stay in the presentation layer.

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod service;
pub mod view;

pub use cli::Cli;
pub use config::AppConfig;
pub use error::{FormError, ServiceError};
pub use form::ProductForm;
pub use service::InventoryService;
pub use view::ProductRow;
