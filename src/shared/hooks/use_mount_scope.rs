use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

/// Liveness flag shared between a component and the tasks it spawned
#[derive(Clone, Debug, Default)]
pub struct MountScope {
    cancelled: Rc<Cell<bool>>,
}

impl MountScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled.get()
    }

    /// Run `apply` only while the owning component is still mounted
    pub fn run_if_active(&self, apply: impl FnOnce()) -> bool {
        if self.is_active() {
            apply();
            true
        } else {
            false
        }
    }
}

/// One scope per component instance, cancelled when the component unmounts
pub fn use_mount_scope() -> MountScope {
    let scope = use_hook(MountScope::new);

    let on_drop = scope.clone();
    use_drop(move || on_drop.cancel());

    scope
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scope_is_active() {
        assert!(MountScope::new().is_active());
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let scope = MountScope::new();
        let task_side = scope.clone();
        scope.cancel();
        assert!(!task_side.is_active());
    }

    #[test]
    fn test_run_if_active_skips_after_cancel() {
        let scope = MountScope::new();
        let mut applied = 0;

        assert!(scope.run_if_active(|| applied += 1));
        scope.cancel();
        assert!(!scope.run_if_active(|| applied += 1));
        assert_eq!(applied, 1);
    }
}
