//! Deferred start of low-priority work.
//!
//! Network work for the star badges must not compete with first paint.
//! [`defer`] arms a one-shot [`Gate`] and hands it to the host's signals
//! according to a [`TriggerPolicy`]; the task runs on the first idle period
//! after the gate triggers, and never more than once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::utils::log;

/// When deferred work may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPolicy {
    /// After the page has loaded, on the next idle period.
    IdleOnly,
    /// Once the watched element nears the viewport, on the next idle period.
    VisibleThenIdle,
}

impl TriggerPolicy {
    /// Pick the policy a host supports.
    pub fn for_host(supports_visibility: bool) -> Self {
        if supports_visibility {
            Self::VisibleThenIdle
        } else {
            Self::IdleOnly
        }
    }
}

/// Gate phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// Waiting for the trigger condition.
    Armed,
    /// Condition met; the task has been handed to the idle signal.
    Triggered,
}

/// One-shot latch between [`GatePhase::Armed`] and [`GatePhase::Triggered`].
#[derive(Debug)]
pub struct Gate {
    phase: Cell<GatePhase>,
}

impl Gate {
    pub fn armed() -> Self {
        Self {
            phase: Cell::new(GatePhase::Armed),
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase.get()
    }

    /// Move to `Triggered`. Returns `true` only for the first call.
    pub fn trigger(&self) -> bool {
        self.phase.replace(GatePhase::Triggered) == GatePhase::Armed
    }
}

/// Host notifications deferred work can wait on.
pub trait HostSignals {
    /// Call `f` once the page has finished loading (immediately if it
    /// already has).
    fn when_loaded(&self, f: Box<dyn FnOnce()>);

    /// Call `f` when the host has spare capacity.
    fn when_idle(&self, f: Box<dyn FnOnce()>);

    /// Call `f` when the watched element nears the viewport. `f` may be
    /// called more than once.
    ///
    /// Returns `false` when there is nothing to watch; `f` is then dropped.
    fn when_visible(&self, f: Box<dyn Fn()>) -> bool;
}

/// Run `task` at a low-priority moment chosen by `policy`.
///
/// Returns the gate so callers can observe whether the trigger fired.
pub fn defer<H>(policy: TriggerPolicy, host: &Rc<H>, task: impl FnOnce() + 'static) -> Rc<Gate>
where
    H: HostSignals + 'static,
{
    let gate = Rc::new(Gate::armed());
    let task: Box<dyn FnOnce()> = Box::new(task);
    let slot = Rc::new(RefCell::new(Some(task)));

    let fire = {
        let gate = Rc::clone(&gate);
        let host = Rc::clone(host);
        move || {
            if !gate.trigger() {
                return;
            }
            if let Some(task) = slot.borrow_mut().take() {
                host.when_idle(task);
            }
        }
    };

    match policy {
        TriggerPolicy::IdleOnly => host.when_loaded(Box::new(fire)),
        TriggerPolicy::VisibleThenIdle => {
            if !host.when_visible(Box::new(fire)) {
                log::debug("deferred task dropped: nothing to observe");
            }
        }
    }

    gate
}
