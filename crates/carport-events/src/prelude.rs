//! Prelude for convenient imports.
//!
//! ```rust
//! use carport_events::prelude::*;
//! ```

pub use crate::{Condition, ConditionAction, ConditionSet, derive, derive_transitions};
