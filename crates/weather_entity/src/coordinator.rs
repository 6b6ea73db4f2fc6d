//! Update coordinator observer surface
//!
//! The polling engine that refreshes provider data lives outside this
//! crate; what integrations consume is its cache: the latest snapshot,
//! replaced wholesale per refresh, plus a listener hook fired after each
//! replacement. Listeners run synchronously on the refresh-notification
//! path and must stay cheap; anything slow belongs on the task scheduler.

use std::sync::{
    Arc, Weak,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::{Mutex, RwLock};
use tracing::debug;

type Listener = Arc<dyn Fn() + Send + Sync>;
type ListenerList = Mutex<Vec<(u64, Listener)>>;

/// Cache and notification hub for one data source
///
/// `T` is the snapshot type the source produces. The coordinator owns the
/// snapshot; consumers get shared read-only handles and must never mutate
/// through them.
pub struct UpdateCoordinator<T> {
    name: String,
    data: RwLock<Arc<T>>,
    listeners: Arc<ListenerList>,
    next_listener_id: AtomicU64,
}

impl<T> std::fmt::Debug for UpdateCoordinator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateCoordinator")
            .field("name", &self.name)
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

impl<T> UpdateCoordinator<T> {
    /// Create a coordinator holding an initial snapshot
    pub fn new(name: impl Into<String>, initial: T) -> Self {
        Self {
            name: name.into(),
            data: RwLock::new(Arc::new(initial)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_listener_id: AtomicU64::new(0),
        }
    }

    /// The coordinator's name, used in log output
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the current snapshot
    #[must_use]
    pub fn data(&self) -> Arc<T> {
        Arc::clone(&self.data.read())
    }

    /// Replace the snapshot wholesale and notify listeners
    ///
    /// The new snapshot is stored before any listener runs, so listeners
    /// reading [`Self::data`] always observe the fresh state. Listeners are
    /// invoked outside the listener lock; registering or dropping listeners
    /// from inside a callback is safe.
    pub fn set_data(&self, data: T) {
        *self.data.write() = Arc::new(data);
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        debug!(coordinator = %self.name, listeners = listeners.len(), "snapshot replaced");
        for listener in listeners {
            listener();
        }
    }

    /// Register a refresh listener
    ///
    /// The listener stays registered until the returned handle is dropped.
    pub fn add_listener(&self, listener: impl Fn() + Send + Sync + 'static) -> ListenerHandle {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push((id, Arc::new(listener)));
        ListenerHandle {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Number of currently registered listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

/// Keeps a coordinator listener registered; deregisters on drop.
#[derive(Debug)]
pub struct ListenerHandle {
    id: u64,
    listeners: Weak<ListenerList>,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().retain(|(id, _)| *id != self.id);
        }
    }
}
