//! End-to-end flows through the inventory service and a snapshot file on disk.

use missionstock_app::{AppConfig, InventoryService, ProductForm, ServiceError};
use missionstock_products::Category;
use missionstock_store::{FileSnapshotStore, FRESH_LOAD_SLOTS};

fn food_form(id: &str) -> ProductForm {
    ProductForm {
        expiration_date: "2027-03-15".to_string(),
        food_type: "thermostabilized".to_string(),
        calories_per_serving: "410".to_string(),
        ..ProductForm::new(Category::Food, id, format!("Ration {id}"), "0.45", "0.0012")
    }
}

fn comm_form(id: &str) -> ProductForm {
    ProductForm {
        comm_type: "UHF".to_string(),
        frequency_range: "401.5".to_string(),
        power: "150".to_string(),
        ..ProductForm::new(Category::CommunicationEquipment, id, "Relay radio", "3.2", "0.02")
    }
}

fn store_in(dir: &tempfile::TempDir) -> FileSnapshotStore {
    FileSnapshotStore::new(dir.path(), "products.dat")
}

#[test]
fn missing_file_opens_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let service = InventoryService::try_open(store_in(&dir)).unwrap();

    assert_eq!(service.records().len(), FRESH_LOAD_SLOTS);
    assert!(service.list().is_empty());
    assert_eq!(service.stats().to_string(), "active records: 0/10 (0.0%)");
}

#[test]
fn six_foods_delete_third_then_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = InventoryService::new(store_in(&dir));

    let ids: Vec<String> = (1..=6).map(|i| format!("FOOD-{i}")).collect();
    for id in &ids {
        service.create(food_form(id)).unwrap();
    }
    assert_eq!(service.stats().capacity, 10);
    assert!(ids.iter().all(|id| service.get(id).is_ok()));

    service.delete(&ids[2]).unwrap();
    assert!(matches!(
        service.get(&ids[2]),
        Err(ServiceError::NotFound { .. })
    ));

    let report = service.try_save().unwrap();
    assert_eq!(report.slots, 10);
    assert!(dir.path().join("products.dat").exists());

    let reopened = InventoryService::try_open(store_in(&dir)).unwrap();
    assert_eq!(reopened.records(), service.records());
    assert!(reopened.records()[2].is_none());
    assert_eq!(reopened.list().len(), 5);
}

#[test]
fn update_survives_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = InventoryService::new(store_in(&dir));
    service.create(comm_form("COMM-1")).unwrap();

    let mut form = comm_form("");
    form.power = "80".to_string();
    service.update("COMM-1", form).unwrap();
    assert!(service.save().starts_with("file 'products.dat' saved to"));

    let reopened = InventoryService::try_open(store_in(&dir)).unwrap();
    let row = &reopened.list()[0];
    assert_eq!(row.id, "COMM-1");
    assert_eq!(row.details[2], "80 W");
}

#[test]
fn corrupt_file_refuses_strict_open() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("products.dat"), "not a snapshot").unwrap();

    let err = InventoryService::try_open(store_in(&dir)).unwrap_err();
    assert!(matches!(err, ServiceError::Persistence(_)));

    let mut lenient = InventoryService::open(store_in(&dir));
    assert!(lenient.list().is_empty());
    assert_eq!(
        lenient.load("products.dat").unwrap_err().to_string(),
        "file 'products.dat' could not be loaded"
    );
}

#[test]
fn config_points_service_at_its_directory() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().display().to_string();
    let config = AppConfig::from_lookup(|key| match key {
        "MISSION_STOCK_DIR" => Some(data_dir.clone()),
        "MISSION_STOCK_FILE" => Some("cargo.json".to_string()),
        _ => None,
    })
    .unwrap();

    let mut service = InventoryService::try_open(config.snapshot_store()).unwrap();
    service.create(food_form("FOOD-1")).unwrap();
    service.try_save().unwrap();

    assert!(dir.path().join("cargo.json").exists());
}

#[test]
fn save_into_missing_directory_reports_message() {
    let dir = tempfile::tempdir().unwrap();
    let mut service =
        InventoryService::new(FileSnapshotStore::new(dir.path().join("absent"), "products.dat"));
    service.create(food_form("FOOD-1")).unwrap();

    assert!(service.save().starts_with("error saving file:"));
    assert!(service.try_save().is_err());
}
