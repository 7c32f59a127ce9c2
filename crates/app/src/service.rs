//! Inventory service: the operations the presentation layer calls.
//!
//! Each call runs to completion on the caller's thread. Failures come back as
//! [`ServiceError`]s whose `Display` is the message to show; nothing is retried.

use missionstock_core::{DomainError, Entity};
use missionstock_products::Product;
use missionstock_store::{SaveReport, SlotStore, SnapshotStore, StoreStats};

use crate::error::ServiceError;
use crate::form::ProductForm;
use crate::view::ProductRow;

#[derive(Debug)]
pub struct InventoryService<S> {
    store: SlotStore<Product>,
    snapshots: S,
}

impl<S> InventoryService<S>
where
    S: SnapshotStore<Product>,
{
    /// Start with an empty store; nothing is read from `snapshots`.
    pub fn new(snapshots: S) -> Self {
        Self {
            store: SlotStore::new(),
            snapshots,
        }
    }

    /// Start from whatever `snapshots` holds.
    ///
    /// A snapshot that exists but cannot be read is logged and the service starts
    /// empty; a later save will overwrite it.
    pub fn open(snapshots: S) -> Self {
        let mut service = Self::new(snapshots);
        match service.snapshots.load() {
            Some(slots) => service.store.replace_slots(slots),
            None => {
                tracing::warn!("starting with an empty store; existing snapshot was not loaded")
            }
        }
        service
    }

    /// Like [`Self::open`], but refuses to start when an existing snapshot
    /// cannot be read.
    pub fn try_open(snapshots: S) -> Result<Self, ServiceError> {
        let mut service = Self::new(snapshots);
        let slots = service.snapshots.try_load()?;
        service.store.replace_slots(slots);
        Ok(service)
    }

    pub fn create(&mut self, form: ProductForm) -> Result<String, ServiceError> {
        let product = form.into_product()?;
        tracing::info!(id = %product.id(), category = %product.category(), "creating product");

        let placement = self.store.create(product);
        Ok(match placement.grown_to {
            None => format!("product added at slot {}", placement.slot),
            Some(capacity) => format!(
                "product added at new slot {} (capacity grown to {capacity})",
                placement.slot
            ),
        })
    }

    /// Every slot, empty ones included.
    pub fn records(&self) -> &[Option<Product>] {
        self.store.read()
    }

    /// Live products as table rows, in slot order.
    pub fn list(&self) -> Vec<ProductRow> {
        self.store.iter().map(ProductRow::from).collect()
    }

    pub fn get(&self, id: &str) -> Result<&Product, ServiceError> {
        self.store
            .read_by_id(id)
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// Replace the product stored under `id` with the one the form describes.
    ///
    /// A blank id on the form keeps `id`; a different id renames the record.
    pub fn update(&mut self, id: &str, mut form: ProductForm) -> Result<String, ServiceError> {
        if form.id.trim().is_empty() {
            form.id = id.to_string();
        }
        let product = form.into_product()?;
        tracing::info!(lookup = id, id = %product.id(), "updating product");

        match self.store.update(id, product) {
            Ok(slot) => Ok(format!("product updated at slot {slot}")),
            Err(DomainError::NotFound) => Err(ServiceError::not_found(id)),
            Err(other) => Err(crate::error::FormError::Invalid(other).into()),
        }
    }

    pub fn delete(&mut self, id: &str) -> Result<Product, ServiceError> {
        let removed = self
            .store
            .delete(id)
            .ok_or_else(|| ServiceError::not_found(id))?;
        tracing::info!(id, "product deleted");
        Ok(removed)
    }

    /// Write the whole store to the snapshot; returns the status message either way.
    pub fn save(&self) -> String {
        self.snapshots.save(self.store.read())
    }

    pub fn try_save(&self) -> Result<SaveReport, ServiceError> {
        Ok(self.snapshots.try_save(self.store.read())?)
    }

    /// Replace the store with the snapshot's contents.
    ///
    /// When nothing could be loaded the current store is left untouched.
    pub fn load(&mut self, location: &str) -> Result<String, ServiceError> {
        let slots = self
            .snapshots
            .load()
            .ok_or_else(|| ServiceError::NothingLoaded {
                location: location.to_string(),
            })?;
        self.store.replace_slots(slots);
        Ok(format!(
            "file loaded: {} products in {} slots",
            self.store.len(),
            self.store.capacity()
        ))
    }

    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }
}
