use std::collections::BTreeSet;

use dioxus::prelude::*;

/// Popups that suppress page scrolling while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Overlay {
    WorkModal,
    Certificates,
}

/// Page scroll lock shared by every overlay.
///
/// The page stays locked while at least one overlay holds the lock, so closing
/// one popup never unlocks scrolling underneath another. Acquire and release
/// are idempotent per overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollLock {
    holders: BTreeSet<Overlay>,
}

impl ScrollLock {
    /// Returns `true` when this call locked a previously scrollable page.
    pub fn acquire(&mut self, overlay: Overlay) -> bool {
        let was_locked = self.is_locked();
        self.holders.insert(overlay);
        !was_locked
    }

    /// Returns `true` when this call restored scrolling.
    pub fn release(&mut self, overlay: Overlay) -> bool {
        let removed = self.holders.remove(&overlay);
        removed && !self.is_locked()
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }
}

/// Provides the shared scroll lock and keeps `body` overflow in sync with it.
pub fn use_scroll_lock_provider() -> Signal<ScrollLock> {
    let lock = use_context_provider(|| Signal::new(ScrollLock::default()));
    use_effect(move || {
        let locked = lock.read().is_locked();
        tracing::debug!("scroll lock: locked={locked}");
        apply_body_scroll_lock(locked);
    });
    lock
}

#[cfg(target_arch = "wasm32")]
fn apply_body_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_body_scroll_lock(_locked: bool) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_acquire_locks_and_last_release_unlocks() {
        let mut lock = ScrollLock::default();
        assert!(lock.acquire(Overlay::WorkModal));
        assert!(lock.is_locked());
        assert!(lock.release(Overlay::WorkModal));
        assert!(!lock.is_locked());
    }

    #[test]
    fn stays_locked_while_another_overlay_holds_it() {
        let mut lock = ScrollLock::default();
        lock.acquire(Overlay::WorkModal);
        assert!(!lock.acquire(Overlay::Certificates));
        assert!(!lock.release(Overlay::WorkModal));
        assert!(lock.is_locked());
        assert!(lock.release(Overlay::Certificates));
        assert!(!lock.is_locked());
    }

    #[test]
    fn repeated_acquire_and_release_are_idempotent() {
        let mut lock = ScrollLock::default();
        lock.acquire(Overlay::Certificates);
        lock.acquire(Overlay::Certificates);
        assert!(lock.release(Overlay::Certificates));
        assert!(!lock.release(Overlay::Certificates));
        assert!(!lock.release(Overlay::WorkModal));
        assert!(!lock.is_locked());
    }

    #[test]
    fn unmount_release_unlocks_page_left_locked_by_open_popup() {
        let mut lock = ScrollLock::default();
        lock.acquire(Overlay::WorkModal);
        // Component teardown releases unconditionally, popup open or not.
        assert!(lock.release(Overlay::WorkModal));
        assert!(!lock.release(Overlay::Certificates));
        assert!(!lock.is_locked());
    }

    #[test]
    fn unmount_release_keeps_the_other_popup_locked() {
        let mut lock = ScrollLock::default();
        lock.acquire(Overlay::WorkModal);
        lock.acquire(Overlay::Certificates);
        assert!(!lock.release(Overlay::WorkModal));
        assert!(lock.is_locked());
    }
}
