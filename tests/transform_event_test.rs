use anyhow::Result;
use event_transform::{
    Event, StandardEventTransformer, TransformConfig, TransformError, TransformedRecord,
};
use serde_json::{json, Number};

fn transform(event: serde_json::Value) -> Result<TransformedRecord> {
    let transformer = StandardEventTransformer::default();
    Ok(transformer.transform_value(&event, &json!(null))?)
}

#[test]
fn test_full_event_is_flattened() -> Result<()> {
    let record = transform(json!({
        "properties": {"price": 100, "revenue": 40},
        "context": {"traits": {"address": {"city": "Paris", "country": "FR", "street": "Rue A"}}}
    }))?;

    assert_eq!(
        serde_json::to_value(&record)?,
        json!({
            "revenue": 40,
            "price": 100,
            "profit": 60.0,
            "city": "Paris",
            "country": "FR",
            "street": "Rue A"
        })
    );
    Ok(())
}

#[test]
fn test_empty_event_uses_defaults() -> Result<()> {
    let record = transform(json!({}))?;

    assert_eq!(record.revenue, Number::from(0));
    assert_eq!(record.price, Number::from(0));
    assert_eq!(record.profit, 0.0);
    assert_eq!(record.city, "no data found");
    assert_eq!(record.country, "no data found");
    assert_eq!(record.street, "no data found");
    Ok(())
}

#[test]
fn test_missing_revenue_profit_equals_price() -> Result<()> {
    let record = transform(json!({"properties": {"price": 50}}))?;

    assert_eq!(record.price, Number::from(50));
    assert_eq!(record.revenue, Number::from(0));
    assert_eq!(record.profit, 50.0);
    Ok(())
}

#[test]
fn test_price_and_revenue_pass_through_unchanged() -> Result<()> {
    let record = transform(json!({"properties": {"price": 9007199254740993u64, "revenue": 2.5}}))?;
    let value = serde_json::to_value(&record)?;

    assert_eq!(value["price"], json!(9007199254740993u64));
    assert_eq!(value["revenue"], json!(2.5));

    let record = transform(json!({"properties": {"price": 100, "revenue": 40}}))?;
    let value = serde_json::to_value(&record)?;
    assert_eq!(value["price"], json!(100));
    assert_eq!(value["revenue"], json!(40));
    assert_eq!(value["profit"], json!(60.0));
    Ok(())
}

#[test]
fn test_output_has_exactly_six_keys() -> Result<()> {
    let record = transform(json!({"properties": {"price": 1, "revenue": 2, "tax": 3}}))?;
    let value = serde_json::to_value(&record)?;
    let object = value.as_object().expect("record serialises to an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["city", "country", "price", "profit", "revenue", "street"]);
    Ok(())
}

#[test]
fn test_missing_nesting_at_any_level() -> Result<()> {
    let events = [
        json!({"properties": {"price": 20, "revenue": 15}}),
        json!({"properties": {"price": 20, "revenue": 15}, "context": {}}),
        json!({"properties": {"price": 20, "revenue": 15}, "context": {"traits": {}}}),
        json!({"properties": {"price": 20, "revenue": 15}, "context": {"traits": {"address": {}}}}),
        json!({"properties": {"price": 20, "revenue": 15}, "context": {"ip": "14.5.67.21", "traits": null}}),
    ];

    for event in events {
        let record = transform(event.clone())?;
        assert_eq!(record.profit, 5.0, "event: {}", event);
        assert_eq!(record.city, "no data found", "event: {}", event);
        assert_eq!(record.country, "no data found", "event: {}", event);
        assert_eq!(record.street, "no data found", "event: {}", event);
    }
    Ok(())
}

#[test]
fn test_address_without_properties() -> Result<()> {
    let record = transform(json!({
        "userId": "identified user id",
        "anonymousId": "anon-id-new",
        "context": {
            "ip": "14.5.67.21",
            "library": {"name": "http"},
            "traits": {"address": {"city": "Kolkata", "country": "India"}}
        },
        "timestamp": "2020-02-02T00:23:09.544Z"
    }))?;

    assert_eq!(record.price, Number::from(0));
    assert_eq!(record.profit, 0.0);
    assert_eq!(record.city, "Kolkata");
    assert_eq!(record.country, "India");
    assert_eq!(record.street, "no data found");
    Ok(())
}

#[test]
fn test_transform_is_deterministic() -> Result<()> {
    let event = json!({"properties": {"price": 0.1, "revenue": 0.3}});
    assert_eq!(transform(event.clone())?, transform(event)?);
    Ok(())
}

#[test]
fn test_non_numeric_price_is_type_mismatch() {
    let transformer = StandardEventTransformer::default();
    let err = transformer
        .transform_value(&json!({"properties": {"price": "100"}}), &json!(null))
        .unwrap_err();

    assert!(matches!(err, TransformError::TypeMismatch { .. }));
}

#[test]
fn test_configured_missing_value() -> Result<()> {
    let config = TransformConfig::from_toml_str(
        r#"
[defaults]
missing_address_value = ""
"#,
    )?;
    let transformer = StandardEventTransformer::from_config(&config);

    let record = transformer.transform_event(&Event::default(), &json!({}));
    assert_eq!(record.city, "");
    assert_eq!(record.street, "");
    Ok(())
}

#[test]
fn test_shared_transformer_across_threads() -> Result<()> {
    let transformer = std::sync::Arc::new(StandardEventTransformer::default());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let transformer = transformer.clone();
            std::thread::spawn(move || {
                transformer
                    .transform_value(&json!({"properties": {"price": i * 10, "revenue": i}}), &json!(null))
                    .map(|record| record.profit)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let profit = handle.join().expect("thread panicked")?;
        assert_eq!(profit, (i * 9) as f64);
    }
    Ok(())
}
