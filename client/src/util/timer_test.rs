use super::*;

#[test]
fn new_scope_is_open_and_guard_active() {
    let scope = TimerScope::new();
    let guard = scope.timeout(5_000, || {});
    assert!(scope.is_open());
    assert!(guard.is_active());
}

#[test]
fn cancel_disarms_only_that_guard() {
    let scope = TimerScope::new();
    let first = scope.timeout(10, || {});
    let second = scope.timeout(10, || {});
    first.cancel();
    assert!(!first.is_active());
    assert!(second.is_active());
}

#[test]
fn closing_scope_disarms_every_guard() {
    let scope = TimerScope::new();
    let a = scope.timeout(10, || {});
    let b = scope.timeout(20, || {});
    scope.close();
    assert!(!a.is_active());
    assert!(!b.is_active());
}

#[test]
fn take_fires_at_most_once() {
    let scope = TimerScope::new();
    let guard = scope.timeout(10, || {});
    assert!(guard.take());
    assert!(!guard.take());
    assert!(!guard.is_active());
}

#[test]
fn take_refuses_after_scope_closed() {
    let scope = TimerScope::new();
    let guard = scope.timeout(10, || {});
    scope.close();
    assert!(!guard.take());
}

#[test]
fn cloned_scope_shares_lifetime() {
    let scope = TimerScope::new();
    let clone = scope.clone();
    clone.close();
    assert!(!scope.is_open());
}
