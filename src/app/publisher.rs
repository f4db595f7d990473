//! Minimaler Single-Thread-Publisher für Snapshots.
//!
//! Subscriber werden synchron in Anmeldereihenfolge benachrichtigt, bevor
//! `publish` zurückkehrt. Das Beenden einer [`Subscription`] (Drop) entfernt
//! den Callback sofort, auch wenn das während einer Veröffentlichung passiert.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct Slot<V> {
    id: u64,
    active: Cell<bool>,
    callback: RefCell<Box<dyn FnMut(&V)>>,
}

struct Subscribers<V> {
    next_id: u64,
    slots: Vec<Rc<Slot<V>>>,
    closed: bool,
}

impl<V> Subscribers<V> {
    fn remove(&mut self, id: u64) {
        if let Some(index) = self.slots.iter().position(|slot| slot.id == id) {
            let slot = self.slots.remove(index);
            slot.active.set(false);
        }
    }
}

/// Verteilt Werte an alle angemeldeten Callbacks.
pub struct Publisher<V> {
    subscribers: Rc<RefCell<Subscribers<V>>>,
}

impl<V> Default for Publisher<V> {
    fn default() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Subscribers {
                next_id: 0,
                slots: Vec::new(),
                closed: false,
            })),
        }
    }
}

impl<V: 'static> Publisher<V> {
    /// Erstellt einen Publisher ohne Subscriber.
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet einen Callback an. Er bleibt aktiv, bis die zurückgegebene
    /// [`Subscription`] gedroppt wird.
    ///
    /// Nach [`Publisher::close`] wird der Callback verworfen und eine
    /// wirkungslose Subscription zurückgegeben.
    pub fn subscribe(&self, callback: impl FnMut(&V) + 'static) -> Subscription {
        let callback: Box<dyn FnMut(&V)> = Box::new(callback);
        let id = {
            let mut subscribers = self.subscribers.borrow_mut();
            if subscribers.closed {
                log::debug!("Subscription auf geschlossenem Publisher ignoriert");
                return Subscription::inactive();
            }
            let id = subscribers.next_id;
            subscribers.next_id += 1;
            subscribers.slots.push(Rc::new(Slot {
                id,
                active: Cell::new(true),
                callback: RefCell::new(callback),
            }));
            id
        };

        let weak: Weak<RefCell<Subscribers<V>>> = Rc::downgrade(&self.subscribers);
        let unsubscribe: Box<dyn FnOnce()> = Box::new(move || {
            if let Some(subscribers) = weak.upgrade() {
                subscribers.borrow_mut().remove(id);
            }
        });
        Subscription {
            unsubscribe: Some(unsubscribe),
        }
    }

    /// Benachrichtigt alle aktiven Subscriber synchron.
    pub fn publish(&self, value: &V) {
        // Liste vorab kopieren: Callbacks dürfen Subscriptions droppen.
        let slots: Vec<Rc<Slot<V>>> = self.subscribers.borrow().slots.clone();
        for slot in slots {
            if !slot.active.get() {
                continue;
            }
            if let Ok(mut callback) = slot.callback.try_borrow_mut() {
                callback(value);
            }
        }
    }

    /// Anzahl aktiver Subscriber.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().slots.len()
    }

    /// Entfernt alle Subscriber und nimmt keine neuen mehr an (Engine wird verworfen).
    pub fn close(&self) {
        let slots = {
            let mut subscribers = self.subscribers.borrow_mut();
            subscribers.closed = true;
            std::mem::take(&mut subscribers.slots)
        };
        for slot in slots {
            slot.active.set(false);
        }
    }

    /// Gibt `true` zurück, wenn der Publisher geschlossen wurde.
    pub fn is_closed(&self) -> bool {
        self.subscribers.borrow().closed
    }
}

/// Handle einer aktiven Anmeldung. Drop beendet die Anmeldung.
#[must_use = "Subscription wird beim Drop sofort beendet"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn inactive() -> Self {
        Self { unsubscribe: None }
    }

    /// Beendet die Anmeldung explizit.
    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
