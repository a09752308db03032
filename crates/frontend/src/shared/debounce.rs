//! Debounced, tagged fetch scheduling.
//!
//! Every scheduled or issued request gets a tag from a monotonic
//! sequence. Only the newest pending payload ever fires, and a response
//! is applied only while its tag is still the latest one issued.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

pub type RequestTag = u64;

#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    latest: RequestTag,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_tag(&mut self) -> RequestTag {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, tag: RequestTag) -> bool {
        tag == self.latest
    }
}

/// Single-flight pending slot. Scheduling replaces whatever was pending.
#[derive(Debug)]
pub struct DebounceGate<P> {
    sequence: RequestSequence,
    pending: Option<(RequestTag, P)>,
}

impl<P> Default for DebounceGate<P> {
    fn default() -> Self {
        Self {
            sequence: RequestSequence::new(),
            pending: None,
        }
    }
}

impl<P> DebounceGate<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, payload: P) -> RequestTag {
        let tag = self.sequence.next_tag();
        self.pending = Some((tag, payload));
        tag
    }

    /// Take the pending payload if `tag` is still the one waiting
    pub fn fire(&mut self, tag: RequestTag) -> Option<P> {
        match self.pending.take() {
            Some((pending_tag, payload)) if pending_tag == tag => Some(payload),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drop any pending payload and issue a tag for an immediate request
    pub fn issue(&mut self) -> RequestTag {
        self.pending = None;
        self.sequence.next_tag()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_latest(&self, tag: RequestTag) -> bool {
        self.sequence.is_latest(tag)
    }
}

/// [`DebounceGate`] driven by a browser timeout.
///
/// Only one timer is alive at a time: replacing the stored [`Timeout`]
/// drops, and so cancels, the previous one.
pub struct Debouncer<P: 'static> {
    gate: Rc<RefCell<DebounceGate<P>>>,
    timer: RefCell<Option<Timeout>>,
    delay_ms: u32,
}

impl<P: 'static> Debouncer<P> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            gate: Rc::new(RefCell::new(DebounceGate::new())),
            timer: RefCell::new(None),
            delay_ms,
        }
    }

    /// Run `run` with `payload` once nothing else has been scheduled for
    /// the configured quiet period
    pub fn schedule(&self, payload: P, run: impl FnOnce(RequestTag, P) + 'static) {
        let tag = self.gate.borrow_mut().schedule(payload);
        let gate = Rc::clone(&self.gate);
        let timeout = Timeout::new(self.delay_ms, move || {
            let fired = gate.borrow_mut().fire(tag);
            if let Some(payload) = fired {
                run(tag, payload);
            }
        });
        *self.timer.borrow_mut() = Some(timeout);
    }

    /// Cancel the pending timer and return a tag for a request sent right away
    pub fn issue(&self) -> RequestTag {
        self.timer.borrow_mut().take();
        self.gate.borrow_mut().issue()
    }

    /// Drop the pending timer without invalidating requests already sent
    pub fn cancel(&self) {
        self.timer.borrow_mut().take();
        self.gate.borrow_mut().cancel();
    }

    pub fn is_latest(&self, tag: RequestTag) -> bool {
        self.gate.borrow().is_latest(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut seq = RequestSequence::new();
        let a = seq.next_tag();
        let b = seq.next_tag();
        assert!(b > a);
        assert!(seq.is_latest(b));
        assert!(!seq.is_latest(a));
    }

    #[test]
    fn test_second_change_wins() {
        let mut gate = DebounceGate::new();
        let first = gate.schedule("store=No");
        let second = gate.schedule("store=North");

        // the first timer was cancelled, but even if it fired it must not send
        assert_eq!(gate.fire(first), None);
        assert_eq!(gate.fire(second), Some("store=North"));

        // a fired tag never fires twice
        assert_eq!(gate.fire(second), None);
    }

    #[test]
    fn test_exactly_one_call_per_burst() {
        let mut gate = DebounceGate::new();
        let tags: Vec<_> = (0..5).map(|i| gate.schedule(i)).collect();
        let sent: Vec<_> = tags.iter().filter_map(|t| gate.fire(*t)).collect();
        assert_eq!(sent, vec![4]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut gate = DebounceGate::new();
        let first = gate.schedule(1);
        assert_eq!(gate.fire(first), Some(1));
        // request 1 is in flight when the user edits again
        let second = gate.schedule(2);
        assert!(!gate.is_latest(first));
        assert!(gate.is_latest(second));
    }

    #[test]
    fn test_issue_cancels_pending() {
        let mut gate = DebounceGate::new();
        let scheduled = gate.schedule("page=3");
        let immediate = gate.issue();
        assert_eq!(gate.fire(scheduled), None);
        assert!(gate.is_latest(immediate));
    }

    #[test]
    fn test_cancel() {
        let mut gate = DebounceGate::new();
        let tag = gate.schedule(());
        gate.cancel();
        assert_eq!(gate.fire(tag), None);
    }
}
