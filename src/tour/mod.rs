//! Tour registry, ordering, lifecycle state and events.

pub(crate) mod controller;
pub(crate) mod events;
pub(crate) mod ordering;
pub(crate) mod state;
pub(crate) mod step;
