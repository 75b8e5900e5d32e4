//! Observable fields with explicit change notification.

use std::fmt;

/// Handle returned by [`Observable::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T, &T)>;

/// A value that notifies subscribers whenever it changes.
///
/// Subscribers receive `(old, new)`. Setting a value equal to the current one
/// is a no-op and does not notify.
pub struct Observable<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    next_id: u64,
}

impl<T: PartialEq> Observable<T> {
    /// Wrap an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value. Returns true if it changed (and subscribers ran).
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        let old = std::mem::replace(&mut self.value, value);
        for (_, callback) in &mut self.subscribers {
            callback(&old, &self.value);
        }
        true
    }

    /// Register a change callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&T, &T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Copy + PartialEq> Observable<T> {
    /// Current value, by copy.
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: Default + PartialEq> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_set_notifies_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut field = Observable::new(1);
        let sink = Rc::clone(&seen);
        field.subscribe(move |old, new| sink.borrow_mut().push((*old, *new)));

        assert!(field.set(2));
        assert!(!field.set(2));
        assert!(field.set(5));

        assert_eq!(*seen.borrow(), vec![(1, 2), (2, 5)]);
        assert_eq!(field.value(), 5);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut field = Observable::new(0.0_f64);
        let sink = Rc::clone(&count);
        let id = field.subscribe(move |_, _| *sink.borrow_mut() += 1);

        field.set(1.0);
        assert!(field.unsubscribe(id));
        assert!(!field.unsubscribe(id));
        field.set(2.0);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(field.subscriber_count(), 0);
    }
}
