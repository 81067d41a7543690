//! Hook Bus
//!
//! Typed registry of handlers for host lifecycle points. Each hook is a
//! plain struct; handlers receive it mutably and may read its inputs and
//! rewrite its outputs. Handlers for one hook run in ascending priority,
//! ties in registration order.

use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// Priority used by [`HookBus::on`].
pub const DEFAULT_PRIORITY: i32 = 10;

/// A host lifecycle point handlers can attach to.
pub trait Hook: Any {
    /// Name used in logs
    const NAME: &'static str;
}

type Callback = Arc<dyn Fn(&mut dyn Any) + Send + Sync>;

#[derive(Clone)]
struct Registration {
    priority: i32,
    sequence: u64,
    callback: Callback,
}

/// Hook bus configuration
#[derive(Debug, Clone)]
pub struct HookBusConfig {
    /// Log registrations and dispatches
    pub enable_logging: bool,
}

impl Default for HookBusConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
        }
    }
}

/// Registry of hook handlers.
///
/// Cloning shares the registry.
#[derive(Clone)]
pub struct HookBus {
    handlers: Arc<DashMap<TypeId, Vec<Registration>>>,
    sequence: Arc<AtomicU64>,
    config: Arc<HookBusConfig>,
}

impl HookBus {
    /// Create new hook bus
    pub fn new() -> Self {
        Self::with_config(HookBusConfig::default())
    }

    /// Create hook bus with custom config
    pub fn with_config(config: HookBusConfig) -> Self {
        Self {
            handlers: Arc::new(DashMap::new()),
            sequence: Arc::new(AtomicU64::new(0)),
            config: Arc::new(config),
        }
    }

    /// Attach a handler at a given priority (lower runs first).
    pub fn add<H, F>(&self, priority: i32, handler: F)
    where
        H: Hook,
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        let callback: Callback = Arc::new(move |hook: &mut dyn Any| {
            if let Some(hook) = hook.downcast_mut::<H>() {
                handler(hook);
            }
        });
        let registration = Registration {
            priority,
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed),
            callback,
        };

        let mut entry = self.handlers.entry(TypeId::of::<H>()).or_default();
        entry.push(registration);
        entry.sort_by_key(|r| (r.priority, r.sequence));

        if self.config.enable_logging {
            debug!(hook = H::NAME, priority, "Registered hook handler");
        }
    }

    /// Attach a handler at [`DEFAULT_PRIORITY`].
    pub fn on<H, F>(&self, handler: F)
    where
        H: Hook,
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        self.add(DEFAULT_PRIORITY, handler);
    }

    /// Run every handler for this hook. Returns how many ran.
    pub fn dispatch<H: Hook>(&self, hook: &mut H) -> usize {
        // Clone out so handlers may register further handlers.
        let handlers = match self.handlers.get(&TypeId::of::<H>()) {
            Some(handlers) => handlers.clone(),
            None => return 0,
        };

        if self.config.enable_logging {
            trace!(hook = H::NAME, handlers = handlers.len(), "Dispatching hook");
        }

        let hook: &mut dyn Any = hook;
        for registration in &handlers {
            (registration.callback)(&mut *hook);
        }
        handlers.len()
    }

    /// Dispatch and hand the hook back, for filter-style hooks.
    pub fn apply<H: Hook>(&self, mut hook: H) -> H {
        self.dispatch(&mut hook);
        hook
    }

    /// Number of handlers attached to a hook
    pub fn handler_count<H: Hook>(&self) -> usize {
        self.handlers
            .get(&TypeId::of::<H>())
            .map(|h| h.len())
            .unwrap_or(0)
    }

    /// Whether any handler is attached to a hook
    pub fn has_handlers<H: Hook>(&self) -> bool {
        self.handler_count::<H>() > 0
    }

    /// Detach every handler of a hook
    pub fn remove_all<H: Hook>(&self) {
        self.handlers.remove(&TypeId::of::<H>());
        if self.config.enable_logging {
            debug!(hook = H::NAME, "Removed all hook handlers");
        }
    }

    /// Total handlers across all hooks
    pub fn total_handlers(&self) -> usize {
        self.handlers.iter().map(|entry| entry.value().len()).sum()
    }

    /// Clear all handlers
    pub fn clear(&self) {
        self.handlers.clear();
    }
}

impl Default for HookBus {
    fn default() -> Self {
        Self::new()
    }
}
