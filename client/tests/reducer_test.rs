//! Given-When-Then tests for the storefront state transitions.

#![allow(clippy::unwrap_used)]

use shopfront_core::{SessionEffect, StoreEvent, StorefrontReducer, StorefrontState};
use shopfront_testing::{cart_item, product, user, ReducerTest};

fn base_state() -> StorefrontState {
    StorefrontState::new("http://localhost:3001/api")
}

#[test]
fn products_loaded_replaces_catalog() {
    let mut state = base_state();
    state.products = vec![product(1, 100)];

    ReducerTest::new(StorefrontReducer)
        .given_state(state)
        .when_event(StoreEvent::ProductsLoaded(vec![
            product(2, 250),
            product(3, 999),
        ]))
        .then_state(|state| {
            let ids: Vec<i64> = state.products.iter().map(|p| p.id).collect();
            assert_eq!(ids, [2, 3]);
        })
        .then_effects(|effects| assert!(effects.is_empty()))
        .run();
}

#[test]
fn session_established_persists_token_and_keeps_cart() {
    let mut state = base_state();
    state.cart_items = vec![cart_item(7, 250, 2)];

    ReducerTest::new(StorefrontReducer)
        .given_state(state)
        .when_event(StoreEvent::SessionEstablished {
            token: "jwt-token".to_string(),
            user: Some(user(1)),
        })
        .then_state(|state| {
            assert_eq!(state.session.token.as_deref(), Some("jwt-token"));
            assert_eq!(state.session.user.as_ref().unwrap().id, 1);
            assert_eq!(state.cart_items.len(), 1);
        })
        .then_effects(|effects| {
            assert_eq!(
                effects.as_slice(),
                [SessionEffect::PersistToken("jwt-token".to_string())]
            );
        })
        .run();
}

#[test]
fn logged_out_clears_session_and_cart_but_not_catalog() {
    let mut state = base_state();
    state.session.token = Some("jwt-token".to_string());
    state.session.user = Some(user(1));
    state.products = vec![product(1, 100)];
    state.cart_items = vec![cart_item(7, 250, 2)];

    ReducerTest::new(StorefrontReducer)
        .given_state(state)
        .when_event(StoreEvent::LoggedOut)
        .then_state(|state| {
            assert!(state.session.token.is_none());
            assert!(state.session.user.is_none());
            assert!(state.cart_items.is_empty());
            assert_eq!(state.products.len(), 1);
        })
        .then_effects(|effects| {
            assert_eq!(effects.as_slice(), [SessionEffect::ClearToken]);
        })
        .run();
}

#[test]
fn cart_replaced_orders_lines_by_id() {
    ReducerTest::new(StorefrontReducer)
        .given_state(base_state())
        .when_event(StoreEvent::CartReplaced(vec![
            cart_item(9, 100, 1),
            cart_item(2, 100, 1),
            cart_item(5, 100, 1),
        ]))
        .then_state(|state| {
            let ids: Vec<i64> = state.cart_items.iter().map(|i| i.id).collect();
            assert_eq!(ids, [2, 5, 9]);
        })
        .then_effects(|effects| assert!(effects.is_empty()))
        .run();
}

#[test]
fn profile_replaced_swaps_user_wholesale() {
    let mut state = base_state();
    state.session.token = Some("jwt-token".to_string());
    state.session.user = Some(user(1));

    ReducerTest::new(StorefrontReducer)
        .given_state(state)
        .when_event(StoreEvent::ProfileReplaced(user(2)))
        .then_state(|state| {
            assert_eq!(state.session.user.as_ref().unwrap().id, 2);
            assert_eq!(state.session.token.as_deref(), Some("jwt-token"));
        })
        .then_effects(|effects| assert!(effects.is_empty()))
        .run();
}
