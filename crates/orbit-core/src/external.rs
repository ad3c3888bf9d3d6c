//! Snapshot publication and the external-store adapter consumers bind to.
//!
//! The engine publishes into a [`SnapshotStore`]; readers go through an
//! [`ExternalStore`] handle so they never need to borrow the engine itself.
//! That matters in the browser where the engine sits in a `RefCell` and
//! listeners run while it is mutably borrowed.

use crate::types::EngineSnapshot;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Zero-argument change listener. Identity is the `Rc` allocation.
pub type Listener = Rc<dyn Fn()>;

#[inline]
fn same_listener(a: &Listener, b: &Listener) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

pub struct SnapshotStore {
    current: RefCell<Rc<EngineSnapshot>>,
    server: Rc<EngineSnapshot>,
    synchronized: Cell<bool>,
    listeners: RefCell<SmallVec<[Listener; 4]>>,
}

impl SnapshotStore {
    pub fn new() -> Rc<Self> {
        let server = Rc::new(EngineSnapshot::default());
        Rc::new(Self {
            current: RefCell::new(server.clone()),
            server,
            synchronized: Cell::new(false),
            listeners: RefCell::new(SmallVec::new()),
        })
    }

    /// Current snapshot; the same `Rc` until the next `publish`.
    pub fn get(&self) -> Rc<EngineSnapshot> {
        self.current.borrow().clone()
    }

    /// Replace the cached snapshot, then ping every listener.
    pub fn publish(&self, snapshot: EngineSnapshot) {
        *self.current.borrow_mut() = Rc::new(snapshot);
        self.synchronized.set(true);
        // Listeners may subscribe or unsubscribe while we iterate.
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    pub fn subscribe(self: &Rc<Self>, listener: Listener) -> Unsubscribe {
        {
            let mut listeners = self.listeners.borrow_mut();
            if !listeners.iter().any(|l| same_listener(l, &listener)) {
                listeners.push(listener.clone());
            }
        }
        Unsubscribe {
            store: Rc::downgrade(self),
            listener,
        }
    }

    fn remove(&self, listener: &Listener) {
        self.listeners
            .borrow_mut()
            .retain(|l| !same_listener(l, listener));
    }
}

/// Handle returned by `subscribe`; call [`Unsubscribe::unsubscribe`] to detach.
#[must_use = "dropping the handle keeps the listener registered"]
pub struct Unsubscribe {
    store: Weak<SnapshotStore>,
    listener: Listener,
}

impl Unsubscribe {
    pub fn unsubscribe(self) {
        if let Some(store) = self.store.upgrade() {
            store.remove(&self.listener);
        }
    }
}

/// Read side of the engine in the shape reactive bindings expect:
/// `subscribe(onStoreChange)`, `getSnapshot()`, `getServerSnapshot()`.
#[derive(Clone)]
pub struct ExternalStore {
    store: Rc<SnapshotStore>,
}

impl ExternalStore {
    pub fn new(store: Rc<SnapshotStore>) -> Self {
        Self { store }
    }

    pub fn subscribe(&self, on_store_change: impl Fn() + 'static) -> Unsubscribe {
        self.store.subscribe(Rc::new(on_store_change))
    }

    pub fn get_snapshot(&self) -> Rc<EngineSnapshot> {
        self.store.get()
    }

    /// Stable default served until the engine publishes its first snapshot.
    pub fn get_server_snapshot(&self) -> Rc<EngineSnapshot> {
        self.store.server.clone()
    }

    pub fn is_synchronized(&self) -> bool {
        self.store.synchronized.get()
    }
}
