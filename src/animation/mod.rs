//! Easing curves and sequenced timelines driven by the host clock.

pub(crate) mod ease;
pub(crate) mod timeline;
