//! Test fixtures for the roster workspace.
//!
//! Everything here is deterministic: fixed ids, a fixed reference date and
//! a fixed sample congregation, so assertions over ages, brackets and
//! breakdowns never drift with the wall clock.

pub mod fixtures;
