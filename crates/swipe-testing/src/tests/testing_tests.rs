use super::*;

#[test]
fn swipe_test_rule_records_host_effects() {
    let mut rule = SwipeTestRule::new();
    rule.set_item(11);

    assert_eq!(rule.touch_begin(100.0, 24.0), FilterResult::Consume);
    rule.touch_move(80.0, 24.0);

    assert_eq!(rule.resolved_tops(), vec![24]);
    assert_eq!(
        rule.scroll_calls(),
        vec![
            ScrollCall::AcceptTouchEvents(false),
            ScrollCall::DisableScroll(true),
        ]
    );
    assert!(rule.scroll_disabled());
    assert!(!rule.touch_accepted());
    assert_eq!(rule.updates().len(), 1);
    assert_eq!(rule.last_update().map(|update| update.item_id), Some(11));
}

#[test]
fn pump_until_idle_runs_animations_to_completion() {
    let mut rule = SwipeTestRule::new();
    rule.touch_begin(100.0, 0.0);
    rule.touch_move(60.0, 0.0);
    rule.touch_release(60.0, 0.0);
    assert!(rule.handler().is_animating());

    rule.pump_until_idle();

    assert!(!rule.handler().is_animating());
    assert_eq!(rule.last_update().map(|update| update.ratio), Some(0.0));
    assert!(!rule.runtime_handle().has_frame_callbacks());
}

#[test]
fn send_after_drop_passes_events_through() {
    let mut rule = SwipeTestRule::new();
    rule.drop_handler();
    assert_eq!(rule.touch_begin(0.0, 0.0), FilterResult::Continue);
    assert!(rule.resolved_tops().is_empty());
}

#[test]
fn invalid_config_is_reported() {
    let result = SwipeTestRule::with_config(SwipeConfig::new().with_density(0.0));
    assert!(matches!(result, Err(ConfigError::NonPositiveDensity(_))));
}
