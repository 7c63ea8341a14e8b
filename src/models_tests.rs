//! Tests for catalog record (de)serialization

use super::*;
use chrono::NaiveDate;

#[test]
fn entry_deserializes_full_record() {
    let json = r#"{
        "title": "Hades",
        "type": "game",
        "discount": "-60%",
        "price": 9.99,
        "lowest": 8.49,
        "stock": true,
        "status": "unchanged",
        "last_time_updated": "02-03-2024"
    }"#;

    let entry: CatalogEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.title, "Hades");
    assert_eq!(entry.kind, "game");
    assert_eq!(entry.discount.as_deref(), Some("-60%"));
    assert_eq!(entry.price, Some(9.99));
    assert_eq!(entry.lowest, Some(8.49));
    assert!(entry.stock);
    assert_eq!(entry.status, Some(Status::Unchanged));
    assert_eq!(entry.last_updated, NaiveDate::from_ymd_opt(2024, 3, 2));
}

#[test]
fn entry_accepts_nulls_and_empty_strings() {
    let json = r#"{
        "title": "Celeste",
        "type": null,
        "discount": "",
        "price": "",
        "lowest": null,
        "stock": "",
        "status": "",
        "last_time_updated": ""
    }"#;

    let entry: CatalogEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.kind, DEFAULT_KIND);
    assert_eq!(entry.discount, None);
    assert_eq!(entry.price, None);
    assert_eq!(entry.lowest, None);
    assert!(!entry.stock);
    assert_eq!(entry.status, None);
    assert_eq!(entry.last_updated, None);
}

#[test]
fn entry_accepts_missing_optional_fields() {
    let entry: CatalogEntry = serde_json::from_str(r#"{"title": "Celeste"}"#).unwrap();
    assert_eq!(entry.title, "Celeste");
    assert_eq!(entry.kind, DEFAULT_KIND);
    assert!(!entry.stock);
    assert_eq!(entry.status, None);
}

#[test]
fn entry_accepts_numeric_strings_for_prices() {
    let json = r#"{"title": "Hades", "price": "12.50", "lowest": 7}"#;
    let entry: CatalogEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.price, Some(12.5));
    assert_eq!(entry.lowest, Some(7.0));
}

#[test]
fn entry_missing_title_reads_as_empty() {
    let entry: CatalogEntry = serde_json::from_str(r#"{"title": null, "price": 1.0}"#).unwrap();
    assert!(entry.title.is_empty());
}

#[test]
fn entry_rejects_bad_date() {
    let json = r#"{"title": "Hades", "last_time_updated": "2024-03-02"}"#;
    assert!(serde_json::from_str::<CatalogEntry>(json).is_err());
}

#[test]
fn entry_rejects_unknown_status() {
    let json = r#"{"title": "Hades", "status": "cheaper"}"#;
    assert!(serde_json::from_str::<CatalogEntry>(json).is_err());
}

#[test]
fn entry_serializes_with_persisted_field_names() {
    let entry = CatalogEntry {
        title: "Hades".to_string(),
        kind: "dlc".to_string(),
        discount: None,
        price: Some(9.99),
        lowest: Some(9.99),
        stock: false,
        status: Some(Status::New),
        last_updated: NaiveDate::from_ymd_opt(2026, 10, 19),
    };

    let value = serde_json::to_value(&entry).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 8);
    assert_eq!(object["type"], "dlc");
    assert_eq!(object["discount"], serde_json::Value::Null);
    assert_eq!(object["status"], "new");
    assert_eq!(object["last_time_updated"], "19-10-2026");
    assert!(!object.contains_key("kind"));
    assert!(!object.contains_key("last_updated"));
}

#[test]
fn status_parses_case_insensitively() {
    assert_eq!("PAR".parse::<Status>(), Ok(Status::Par));
    assert_eq!(" updated ".parse::<Status>(), Ok(Status::Updated));
    assert!("lower".parse::<Status>().is_err());
}

#[test]
fn only_par_and_updated_are_actionable() {
    assert!(Status::Par.is_actionable());
    assert!(Status::Updated.is_actionable());
    assert!(!Status::New.is_actionable());
    assert!(!Status::Unchanged.is_actionable());
}

#[test]
fn entry_display_shows_prices() {
    let entry = CatalogEntry {
        title: "Hades".to_string(),
        kind: DEFAULT_KIND.to_string(),
        discount: Some("-60%".to_string()),
        price: Some(9.99),
        lowest: None,
        stock: false,
        status: None,
        last_updated: None,
    };
    assert_eq!(entry.to_string(), "Hades - 9.99 (-60%): n/a");
}
