//! Testing utilities for the shopfront client core.
//!
//! Provides the [`ReducerTest`] fluent harness for Given-When-Then reducer
//! tests and fixture builders for the domain entities.

pub mod fixtures;
pub mod reducer_test;

pub use fixtures::{cart_item, product, user};
pub use reducer_test::ReducerTest;
