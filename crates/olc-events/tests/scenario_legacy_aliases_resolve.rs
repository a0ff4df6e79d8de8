use olc_events::*;

/// Every legacy spelling resolves to exactly its documented canonical type,
/// with or without surrounding whitespace.
#[test]
fn every_alias_resolves_to_its_target() {
    for (legacy, target) in aliases() {
        assert_eq!(normalize_type(*legacy), *target, "alias {legacy}");
        let padded = format!("  {legacy}\n");
        assert_eq!(normalize_type(&padded), *target, "padded alias {legacy}");
    }
}

#[test]
fn dotted_legacy_forms_are_recognised() {
    assert_eq!(normalize_type("order.status_changed"), ORDER_STATUS_CHANGED);
    assert_eq!(normalize_type("payment.succeeded"), PAYMENT_SUCCEEDED);
    assert_eq!(normalize_type("dispatch.exhausted"), DISPATCH_EXHAUSTED);
}

#[test]
fn normalization_is_idempotent() {
    let inputs: Vec<&str> = catalog()
        .iter()
        .map(|(t, _)| *t)
        .chain(aliases().iter().map(|(l, _)| *l))
        .chain(["", "   ", "unknown_type", " spaced_unknown "])
        .collect();

    for raw in inputs {
        let once = normalize_type(raw);
        let twice = normalize_type(once.as_str());
        assert_eq!(once, twice, "not idempotent for {raw:?}");
    }
}

#[test]
fn canonical_types_map_to_themselves() {
    for (ty, _) in catalog() {
        assert_eq!(normalize_type(*ty), *ty);
    }
}

#[test]
fn case_is_not_folded_for_event_types() {
    // Only whitespace is normalized; a shouted alias is an unknown type.
    assert_eq!(normalize_type("ORDER.UPDATED"), "ORDER.UPDATED");
}
