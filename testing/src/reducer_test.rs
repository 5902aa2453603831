//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable
//! Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use shopfront_core::reducer::{Effects, Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion = Box<dyn FnOnce(&Effects)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// # Example
///
/// ```
/// use shopfront_core::{StoreEvent, StorefrontReducer, StorefrontState};
/// use shopfront_testing::ReducerTest;
///
/// ReducerTest::new(StorefrontReducer)
///     .given_state(StorefrontState::new("http://localhost:3001/api"))
///     .when_event(StoreEvent::LoggedOut)
///     .then_state(|state| {
///         assert!(state.session.token.is_none());
///     })
///     .then_effects(|effects| {
///         assert_eq!(effects.len(), 1);
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, E>
where
    R: Reducer<State = S, Event = E>,
{
    reducer: R,
    initial_state: Option<S>,
    event: Option<E>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion>,
}

impl<R, S, E> ReducerTest<R, S, E>
where
    R: Reducer<State = S, Event = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            event: None,
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the event to apply (When)
    #[must_use]
    pub fn when_event(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the returned effects (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&Effects) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state or event is not set, or if any assertion
    /// fails.
    #[allow(clippy::expect_used)] // test harness may panic on misuse
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");
        let event = self.event.expect("Event must be set with when_event()");

        let effects = self.reducer.reduce(&mut state, event);

        for assertion in self.state_assertions {
            assertion(&state);
        }
        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::{SessionEffect, StoreEvent, StorefrontReducer, StorefrontState};

    #[test]
    fn harness_runs_state_and_effect_assertions() {
        ReducerTest::new(StorefrontReducer)
            .given_state(StorefrontState::new("http://localhost:3001/api"))
            .when_event(StoreEvent::SessionEstablished {
                token: "jwt".to_string(),
                user: None,
            })
            .then_state(|state| {
                assert_eq!(state.session.token.as_deref(), Some("jwt"));
            })
            .then_effects(|effects| {
                assert_eq!(
                    effects.as_slice(),
                    [SessionEffect::PersistToken("jwt".to_string())]
                );
            })
            .run();
    }
}
