//! Generic observable sequence.
//!
//! # Responsibility
//! - Hold one ordered sequence and fan mutations out to subscribers.
//! - Keep notification synchronous and in registration order.
//!
//! # Invariants
//! - Subscribers receive a snapshot (fresh copy), never a live reference.
//! - No replay: a subscriber only sees mutations after its registration.
//! - The interior borrow is released before subscribers run, so a subscriber
//!   may call `snapshot()` re-entrantly.

use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked with a snapshot of the sequence after every mutation.
pub type ListenerFn<T> = Rc<dyn Fn(&[T])>;

struct SeqInner<T> {
    items: Vec<T>,
    listeners: Vec<ListenerFn<T>>,
}

/// Ordered sequence with synchronous listener fan-out.
///
/// Cloning yields another handle to the same sequence. Single-threaded by
/// design: the board runs everything on one thread, so interior mutability
/// via `RefCell` is sufficient and no locking exists.
pub struct ObservableSeq<T> {
    inner: Rc<RefCell<SeqInner<T>>>,
}

impl<T> Clone for ObservableSeq<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Default for ObservableSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ObservableSeq<T> {
    /// Creates an empty sequence with no subscribers.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SeqInner {
                items: Vec::new(),
                listeners: Vec::new(),
            })),
        }
    }

    /// Registers a subscriber for every future mutation.
    ///
    /// No de-duplication; registering the same closure twice means it runs
    /// twice per mutation. Invocation order is registration order.
    pub fn subscribe(&self, listener: impl Fn(&[T]) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// Appends one item and notifies all subscribers.
    pub fn push(&self, item: T) {
        let (snapshot, listeners) = {
            let mut inner = self.inner.borrow_mut();
            inner.items.push(item);
            (inner.items.clone(), inner.listeners.clone())
        };
        Self::notify(&listeners, &snapshot);
    }

    /// Runs `mutate` against the sequence; notifies iff it returns `true`.
    ///
    /// Used for in-place edits that may turn out to be no-ops, so redundant
    /// re-renders are avoided.
    pub fn update(&self, mutate: impl FnOnce(&mut Vec<T>) -> bool) {
        let notified = {
            let mut inner = self.inner.borrow_mut();
            if !mutate(&mut inner.items) {
                None
            } else {
                Some((inner.items.clone(), inner.listeners.clone()))
            }
        };
        if let Some((snapshot, listeners)) = notified {
            Self::notify(&listeners, &snapshot);
        }
    }

    /// Returns a copy of the current sequence.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.borrow().items.clone()
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    fn notify(listeners: &[ListenerFn<T>], snapshot: &[T]) {
        for listener in listeners {
            listener(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ObservableSeq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn push_notifies_with_full_snapshot() {
        let seq: ObservableSeq<u32> = ObservableSeq::new();
        let seen: Rc<RefCell<Vec<Vec<u32>>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        seq.subscribe(move |items| sink.borrow_mut().push(items.to_vec()));

        seq.push(1);
        seq.push(2);

        assert_eq!(*seen.borrow(), vec![vec![1], vec![1, 2]]);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let seq: ObservableSeq<u32> = ObservableSeq::new();
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        seq.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        seq.subscribe(move |_| second.borrow_mut().push("second"));

        seq.push(7);

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn no_replay_for_late_subscribers() {
        let seq: ObservableSeq<u32> = ObservableSeq::new();
        seq.push(1);

        let calls = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&calls);
        seq.subscribe(move |_| *sink.borrow_mut() += 1);

        assert_eq!(*calls.borrow(), 0);
        seq.push(2);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn update_returning_false_does_not_notify() {
        let seq: ObservableSeq<u32> = ObservableSeq::new();
        seq.push(1);

        let calls = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&calls);
        seq.subscribe(move |_| *sink.borrow_mut() += 1);

        seq.update(|_items| false);
        assert_eq!(*calls.borrow(), 0);

        seq.update(|items| {
            items[0] = 9;
            true
        });
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(seq.snapshot(), vec![9]);
    }

    #[test]
    fn subscriber_may_read_snapshot_reentrantly() {
        let seq: ObservableSeq<u32> = ObservableSeq::new();
        let reread: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));

        let handle = seq.clone();
        let sink = Rc::clone(&reread);
        seq.subscribe(move |_| *sink.borrow_mut() = handle.snapshot());

        seq.push(4);

        assert_eq!(*reread.borrow(), vec![4]);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let seq: ObservableSeq<u32> = ObservableSeq::new();
        seq.push(1);

        let mut snapshot = seq.snapshot();
        snapshot.push(2);

        assert_eq!(seq.snapshot(), vec![1]);
    }
}
