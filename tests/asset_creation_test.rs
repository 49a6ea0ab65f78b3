use networth_backend::services::asset_service::resolve_new_holding;

const TOL: f64 = 1e-9;

#[test]
fn explicit_quantity_and_price_are_used_as_given() {
    let resolved = resolve_new_holding(Some(10.0), Some(100.0), None, None).unwrap();
    assert_eq!(resolved.quantity, 10.0);
    assert_eq!(resolved.purchase_price, 100.0);
    // With no quote the purchase price doubles as the mark.
    assert_eq!(resolved.current_price, Some(100.0));
    assert_eq!(resolved.total_value, Some(1000.0));
}

#[test]
fn live_quote_becomes_the_mark_for_an_explicit_lot() {
    let resolved = resolve_new_holding(Some(10.0), Some(100.0), None, Some(120.0)).unwrap();
    assert_eq!(resolved.purchase_price, 100.0);
    assert_eq!(resolved.current_price, Some(120.0));
    assert_eq!(resolved.total_value, Some(1200.0));
}

#[test]
fn total_amount_buys_at_the_live_quote() {
    let resolved = resolve_new_holding(None, None, Some(500.0), Some(250.0)).unwrap();
    assert!((resolved.quantity - 2.0).abs() < TOL);
    assert_eq!(resolved.purchase_price, 250.0);
    assert_eq!(resolved.total_value, Some(500.0));
}

#[test]
fn total_amount_without_a_quote_falls_back_to_explicit_fields() {
    let resolved = resolve_new_holding(Some(4.0), Some(25.0), Some(500.0), None).unwrap();
    assert_eq!(resolved.quantity, 4.0);
    assert_eq!(resolved.purchase_price, 25.0);
}

#[test]
fn missing_quantity_and_amount_is_a_validation_error() {
    assert!(resolve_new_holding(None, None, None, None).is_err());
    assert!(resolve_new_holding(Some(10.0), None, None, None).is_err());
}

#[test]
fn negative_inputs_are_rejected() {
    assert!(resolve_new_holding(Some(-1.0), Some(100.0), None, None).is_err());
    assert!(resolve_new_holding(Some(1.0), Some(-100.0), None, None).is_err());
}
