//! Per-tour lifecycle events.

use crate::tour::step::Step;

/// Event names handlers subscribe to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// A tour found its first step and began.
    Start,
    /// A tour was stopped.
    Stop,
    /// The current step changed.
    StepChange,
    /// The overlay finished moving to the current step.
    Settled,
}

impl EventKind {
    /// Wire name (`start`, `stop`, `stepChange`, `settled`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::StepChange => "stepChange",
            Self::Settled => "settled",
        }
    }

    /// Parse a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "stop" => Some(Self::Stop),
            "stepChange" => Some(Self::StepChange),
            "settled" => Some(Self::Settled),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lifecycle event delivered to handlers.
#[derive(Clone, Debug, PartialEq)]
pub enum TourEvent {
    /// See [`EventKind::Start`].
    Start,
    /// See [`EventKind::Stop`].
    Stop,
    /// See [`EventKind::StepChange`].
    StepChange(Step),
    /// See [`EventKind::Settled`].
    Settled(Step),
}

impl TourEvent {
    /// Kind used for handler dispatch.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Start => EventKind::Start,
            Self::Stop => EventKind::Stop,
            Self::StepChange(_) => EventKind::StepChange,
            Self::Settled(_) => EventKind::Settled,
        }
    }

    /// Step carried by the event, if any.
    pub fn step(&self) -> Option<&Step> {
        match self {
            Self::StepChange(s) | Self::Settled(s) => Some(s),
            Self::Start | Self::Stop => None,
        }
    }
}

/// Event handler.
///
/// Handlers run synchronously inside the controller call that emitted the event and cannot call
/// back into the controller; queue follow-up work instead.
pub type Handler = Box<dyn FnMut(&TourEvent)>;

/// Token returned by [`EventEmitter::on`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Handler registry for one tour.
#[derive(Default)]
pub struct EventEmitter {
    next_id: u64,
    handlers: Vec<(SubscriptionId, EventKind, Handler)>,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl EventEmitter {
    /// Empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to `kind`.
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&TourEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, kind, Box::new(handler)));
        id
    }

    /// Unsubscribe; `false` when `id` was not registered here.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _, _)| *h != id);
        self.handlers.len() != before
    }

    /// Deliver `event` to its subscribers in subscription order; returns how many ran.
    pub fn emit(&mut self, event: &TourEvent) -> usize {
        let kind = event.kind();
        tracing::trace!(%kind, "emit");
        let mut delivered = 0;
        for (_, k, handler) in self.handlers.iter_mut() {
            if *k == kind {
                handler(event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of subscribers to `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.handlers.iter().filter(|(_, k, _)| *k == kind).count()
    }
}
