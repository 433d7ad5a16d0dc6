//! Component lifecycle hooks for mount, update, and unmount callbacks.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a mounted component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// Component instance created and first render committed.
    Mount,
    /// A later render was committed.
    Update,
    /// Component instance is being destroyed.
    Unmount,
}

/// Event passed to lifecycle callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleEvent {
    /// Phase of the lifecycle.
    pub phase: LifecyclePhase,
    /// Number of commits so far, including this one.
    pub commit: u64,
}

impl LifecycleEvent {
    /// Create a new lifecycle event.
    pub const fn new(phase: LifecyclePhase, commit: u64) -> Self {
        Self { phase, commit }
    }
}

/// A lifecycle callback that can be registered.
pub type LifecycleCallback = Box<dyn FnMut(&LifecycleEvent)>;

/// Unique ID for a lifecycle hook registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(pub u64);

struct Hook {
    id: HookId,
    phases: Vec<LifecyclePhase>,
    callback: LifecycleCallback,
}

/// Registry of lifecycle hooks for one mount.
#[derive(Default)]
pub struct LifecycleHooks {
    next_id: u64,
    hooks: Vec<Hook>,
}

impl LifecycleHooks {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook for several phases.
    ///
    /// Returns a hook ID that can be used to unregister the hook.
    pub fn register(
        &mut self,
        phases: Vec<LifecyclePhase>,
        callback: impl FnMut(&LifecycleEvent) + 'static,
    ) -> HookId {
        let id = HookId(self.next_id);
        self.next_id += 1;
        self.hooks.push(Hook {
            id,
            phases,
            callback: Box::new(callback),
        });
        id
    }

    /// Register a mount hook.
    pub fn on_mount(&mut self, callback: impl FnMut(&LifecycleEvent) + 'static) -> HookId {
        self.register(vec![LifecyclePhase::Mount], callback)
    }

    /// Register an update hook.
    pub fn on_update(&mut self, callback: impl FnMut(&LifecycleEvent) + 'static) -> HookId {
        self.register(vec![LifecyclePhase::Update], callback)
    }

    /// Register an unmount hook.
    pub fn on_unmount(&mut self, callback: impl FnMut(&LifecycleEvent) + 'static) -> HookId {
        self.register(vec![LifecyclePhase::Unmount], callback)
    }

    /// Unregister a hook.
    pub fn unregister(&mut self, id: HookId) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|hook| hook.id != id);
        self.hooks.len() != before
    }

    /// Run every hook registered for the event's phase, in registration order.
    pub fn emit(&mut self, event: &LifecycleEvent) {
        for hook in &mut self.hooks {
            if hook.phases.contains(&event.phase) {
                (hook.callback)(event);
            }
        }
    }

    /// Number of registered hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether no hooks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for LifecycleHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleHooks")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
