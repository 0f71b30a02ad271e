use serde_json::Value;
use sultek_api::format::to_json;
use sultek_api::mapper::{map_accounts, map_campaign_data};
use sultek_api::types::{Account, CampaignData, Record};
use sultek_api::ApiError;

fn load_fixture(name: &str) -> Value {
    let text = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn map_accounts_fixture() {
    let accounts = map_accounts(&load_fixture("getAccounts.json"), None).unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].id, "12345");
    assert_eq!(accounts[0].name, "Sultek Demo Account");
    assert_eq!(accounts[1].id, "67890");
}

#[test]
fn map_accounts_fixture_filtered() {
    let accounts = map_accounts(&load_fixture("getAccounts.json"), Some("67890")).unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name, "Sultek Second Account");
}

#[test]
fn map_campaign_fixture() {
    let daily = map_campaign_data(&load_fixture("getData_12345.json")).unwrap();
    assert_eq!(daily.len(), 2);

    let first = daily.get("2024-05-01").unwrap();
    assert_eq!(first.clicks, 919046);
    assert_eq!(first.conversions, 17824);
    assert_eq!(first.cost.to_string(), "19425.70");
    assert_eq!(first.impressions, 2591430);
    assert_eq!(first.campaign_id, "1002");

    assert_eq!(daily.get("2024-05-02").unwrap().impressions, 1295715);
}

#[test]
fn campaign_fixture_round_trips_through_table() {
    let daily = map_campaign_data(&load_fixture("getData_12345.json")).unwrap();
    let table: Value = serde_json::from_str(&to_json(&daily).unwrap()).unwrap();

    let rows = table["rows"].as_array().unwrap();
    for (row, expected) in rows.iter().zip(daily.values()) {
        let values: Vec<Value> = expected.to_mapping().unwrap().into_iter().map(|(_, v)| v).collect();
        assert_eq!(row.as_array().unwrap(), &values);
    }
    assert_eq!(table["headers"].as_array().unwrap().len(), CampaignData::FIELDS.len());
}

#[test]
fn wrong_field_type_wraps_validation_error() {
    let payload = serde_json::json!({"ad_accounts": [{"id": "1", "name": ["not", "a", "string"]}]});
    let err = map_accounts(&payload, None).unwrap_err();
    assert!(err.to_string().contains("invalid type"), "{}", err);
    assert!(err.to_string().contains(r#""name":["not","a","string"]"#), "{}", err);
    assert!(std::error::Error::source(&err).is_some());
    assert!(matches!(err, ApiError::InvalidRecord { .. }));
}

#[test]
fn record_mappings_use_declared_fields() {
    let accounts = map_accounts(&load_fixture("getAccounts.json"), None).unwrap();
    let keys: Vec<String> = accounts[0].to_mapping().unwrap().keys().cloned().collect();
    assert_eq!(keys, Account::FIELDS);

    let daily = map_campaign_data(&load_fixture("getData_12345.json")).unwrap();
    let keys: Vec<String> = daily["2024-05-02"].to_mapping().unwrap().keys().cloned().collect();
    assert_eq!(keys, CampaignData::FIELDS);
}
