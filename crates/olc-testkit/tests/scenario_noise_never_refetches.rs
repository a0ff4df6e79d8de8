use olc_events::{inspect, refetch_decision, IgnoreReason, RefetchDecision};
use olc_testkit::*;

#[test]
fn noise_events_are_ignored_for_watched_order() {
    for event in noise_events() {
        let decision = refetch_decision(&event, ORDER_ID);
        assert!(!decision.is_refetch(), "{event} produced {decision}");
    }
}

#[test]
fn other_order_is_reported_as_such() {
    let event = serde_json::json!({ "type": "order.updated", "order_id": OTHER_ORDER_ID });
    assert!(inspect(&event).refresh);
    assert_eq!(
        refetch_decision(&event, ORDER_ID),
        RefetchDecision::Ignore {
            reason: IgnoreReason::OtherOrder
        }
    );
}

#[test]
fn unwatched_screen_accepts_any_order() {
    let event = serde_json::json!({ "type": "order.updated", "order_id": OTHER_ORDER_ID });
    assert_eq!(
        refetch_decision(&event, ""),
        RefetchDecision::Refetch {
            order_id: OTHER_ORDER_ID.to_string()
        }
    );
}

#[test]
fn unwatched_screen_ignores_id_less_events() {
    let event = serde_json::json!({ "type": "driver.location", "data": { "lat": 1.0 } });
    assert_eq!(
        refetch_decision(&event, ""),
        RefetchDecision::Ignore {
            reason: IgnoreReason::NoOrderId
        }
    );
}
