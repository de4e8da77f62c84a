//! Overlay coordinator: tooltip placement, connector gating and move sequencing.

pub(crate) mod connector;
pub(crate) mod coordinator;
pub(crate) mod placement;
