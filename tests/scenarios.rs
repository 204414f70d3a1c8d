//! Workspace-level smoke tests through the re-exported prelude

use approx::assert_relative_eq;
use chisq_stats::prelude::*;
use serde_json::json;

#[test]
fn test_reference_scenarios() {
    let out = ekurtosis(vec![2.0, 4.0, 8.0, 16.0], None).unwrap();
    assert_eq!(out, Data::from(vec![6.0, 3.0, 1.5, 0.75]));

    assert_relative_eq!(ekurtosis(2.0, None).unwrap().as_scalar().unwrap(), 6.0);
    assert!(ekurtosis(Data::from(json!({"x": true})), None)
        .unwrap()
        .as_scalar()
        .unwrap()
        .is_nan());

    let records: Vec<Value> = vec![Value::from(json!({"k": 2})), Value::from(json!({"k": 4}))];
    let opts = RawOptions::new().set("accessor", OptionValue::function(|d: &Value| d["k"].clone()));
    assert_eq!(ekurtosis(records, Some(&opts)).unwrap(), Data::from(vec![6.0, 3.0]));
}

#[test]
fn test_registry_is_reexported() {
    assert!(chisq_stats::buffer_constructor_for("uint8_clamped").is_some());
    assert!(chisq_stats::buffer_constructor_for("beep").is_none());
    assert_eq!(chisq_stats::excess_kurtosis(12.0), 1.0);
}
