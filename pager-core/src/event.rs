//! Page change notifications and observer registration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Emitted once per committed navigation or page size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChangeEvent {
    pub total_items: usize,
    pub new_page: usize,
    pub previous_page: usize,
    pub page_size: usize,
}

/// Callback invoked synchronously for every committed change.
pub type PageObserver = Box<dyn FnMut(&PageChangeEvent)>;

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered set of page change observers.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, PageObserver)>,
}

impl Observers {
    pub fn subscribe(&mut self, observer: PageObserver) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Remove an observer. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invoke every observer in registration order.
    pub fn notify(&mut self, event: &PageChangeEvent) {
        for (_, observer) in &mut self.entries {
            observer(event);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn event(new_page: usize) -> PageChangeEvent {
        PageChangeEvent {
            total_items: 10,
            new_page,
            previous_page: 1,
            page_size: 5,
        }
    }

    #[test]
    fn observers_run_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();

        for tag in ["a", "b", "c"] {
            let seen = Rc::clone(&seen);
            observers.subscribe(Box::new(move |event| {
                seen.borrow_mut().push(format!("{tag}{}", event.new_page));
            }));
        }

        observers.notify(&event(2));
        assert_eq!(*seen.borrow(), vec!["a2", "b2", "c2"]);
    }

    #[test]
    fn unsubscribed_observers_stop_receiving_events() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::default();

        let counter = Rc::clone(&count);
        let id = observers.subscribe(Box::new(move |_| *counter.borrow_mut() += 1));

        observers.notify(&event(2));
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&event(3));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(format!("{observers:?}"), "Observers { count: 0 }");
    }

    #[test]
    fn event_serializes_with_field_names() {
        let json = serde_json::to_value(event(2)).expect("event serializes");
        assert_eq!(json["new_page"], 2);
        assert_eq!(json["previous_page"], 1);
        assert_eq!(json["total_items"], 10);
        assert_eq!(json["page_size"], 5);
    }
}
