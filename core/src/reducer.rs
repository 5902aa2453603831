//! The reducer: pure application of events to state.

use crate::effect::SessionEffect;
use crate::event::StoreEvent;
use crate::state::StorefrontState;
use smallvec::{smallvec, SmallVec};

/// Effect buffer returned by a reducer.
///
/// At most one session effect is produced per event today; the inline
/// capacity keeps the common path allocation-free.
pub type Effects = SmallVec<[SessionEffect; 1]>;

/// Applies events to state and describes resulting side effects.
///
/// Implementations must be pure over state: deterministic, synchronous, and
/// free of I/O. Anything durable is expressed as a returned
/// [`SessionEffect`] for the runtime to execute.
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The event type this reducer applies
    type Event;

    /// Apply `event` to `state` in place, returning effect descriptions.
    fn reduce(&self, state: &mut Self::State, event: Self::Event) -> Effects;
}

/// The shopfront reducer.
///
/// Applies the five [`StoreEvent`]s. Session-changing events return the
/// matching [`SessionEffect`]; read-path events return nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct StorefrontReducer;

impl Reducer for StorefrontReducer {
    type State = StorefrontState;
    type Event = StoreEvent;

    fn reduce(&self, state: &mut Self::State, event: Self::Event) -> Effects {
        match event {
            StoreEvent::ProductsLoaded(products) => {
                state.products = products;
                SmallVec::new()
            }
            StoreEvent::SessionEstablished { token, user } => {
                state.session.token = Some(token.clone());
                state.session.user = user;
                smallvec![SessionEffect::PersistToken(token)]
            }
            StoreEvent::LoggedOut => {
                state.session.token = None;
                state.session.user = None;
                state.cart_items.clear();
                smallvec![SessionEffect::ClearToken]
            }
            StoreEvent::ProfileReplaced(user) => {
                state.session.user = Some(user);
                SmallVec::new()
            }
            StoreEvent::CartReplaced(mut items) => {
                // Stable ascending item-id order after every replacement.
                items.sort_by_key(|i| i.id);
                state.cart_items = items;
                SmallVec::new()
            }
        }
    }
}
