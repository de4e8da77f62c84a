//! Ordering reductions over a tour's steps.
//!
//! Steps are ranked by `(order, name)`, a strict total order even when orders repeat.

use std::collections::BTreeMap;

use crate::tour::step::Step;

/// A tour's steps keyed by name.
pub type StepMap = BTreeMap<String, Step>;

fn rank(step: &Step) -> (i32, &str) {
    (step.order, step.name.as_str())
}

/// Lowest-ranked step.
pub fn first_step(steps: &StepMap) -> Option<&Step> {
    steps.values().min_by(|a, b| rank(a).cmp(&rank(b)))
}

/// Highest-ranked step.
pub fn last_step(steps: &StepMap) -> Option<&Step> {
    steps.values().max_by(|a, b| rank(a).cmp(&rank(b)))
}

/// Lowest-ranked step after `current`.
pub fn next_step<'a>(steps: &'a StepMap, current: &Step) -> Option<&'a Step> {
    let from = rank(current);
    steps
        .values()
        .filter(|s| rank(s) > from)
        .min_by(|a, b| rank(a).cmp(&rank(b)))
}

/// Highest-ranked step before `current`.
pub fn prev_step<'a>(steps: &'a StepMap, current: &Step) -> Option<&'a Step> {
    let from = rank(current);
    steps
        .values()
        .filter(|s| rank(s) < from)
        .max_by(|a, b| rank(a).cmp(&rank(b)))
}

/// Lowest-ranked step with exactly `order`.
pub fn step_with_order(steps: &StepMap, order: i32) -> Option<&Step> {
    steps
        .values()
        .filter(|s| s.order == order)
        .min_by(|a, b| a.name.cmp(&b.name))
}

/// 1-based position shown in tooltips: the number of steps whose order is `<=` this one's.
pub fn step_number(steps: &StepMap, step: &Step) -> usize {
    steps.values().filter(|s| s.order <= step.order).count()
}

#[cfg(test)]
#[path = "../../tests/unit/tour/ordering.rs"]
mod tests;
