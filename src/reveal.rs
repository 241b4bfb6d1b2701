use std::collections::BTreeMap;

use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

pub const STAGGER_STEP_MS: u32 = 120;
/// Share of an element that must be in view before it reveals.
#[cfg(target_arch = "wasm32")]
const VISIBILITY_THRESHOLD: f64 = 0.12;
#[cfg(target_arch = "wasm32")]
const REVEAL_ID_ATTR: &str = "data-reveal-id";

pub fn stagger_delay(position: usize) -> u32 {
    (position as u32).saturating_mul(STAGGER_STEP_MS)
}

pub type RevealId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Watching,
    Pending,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RevealEntry {
    delay_ms: u32,
    state: RevealState,
}

/// One-shot reveal bookkeeping for every mounted element. Ids are never reused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealRegistry {
    entries: BTreeMap<RevealId, RevealEntry>,
    next_id: RevealId,
}

impl RevealRegistry {
    pub fn register(&mut self, delay_ms: u32) -> RevealId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            id,
            RevealEntry {
                delay_ms,
                state: RevealState::Watching,
            },
        );
        id
    }

    /// Forgets an unmounted element. Returns `false` if it was not registered.
    pub fn unregister(&mut self, id: RevealId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Handles a visibility change. Returns the delay to wait before revealing,
    /// only on the first time the element comes into view.
    pub fn on_intersect(&mut self, id: RevealId, intersecting: bool) -> Option<u32> {
        let entry = self.entries.get_mut(&id)?;
        if !intersecting || entry.state != RevealState::Watching {
            return None;
        }
        entry.state = RevealState::Pending;
        Some(entry.delay_ms)
    }

    /// Marks a pending element visible. Returns `false` if it was not pending.
    pub fn reveal(&mut self, id: RevealId) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.state == RevealState::Pending => {
                entry.state = RevealState::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.entries.get(&id).map(|entry| entry.state)
    }

    pub fn is_visible(&self, id: RevealId) -> bool {
        self.state(id) == Some(RevealState::Visible)
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _closure: Rc<Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

#[derive(Clone, Copy)]
struct RevealContext {
    registry: Signal<RevealRegistry>,
    #[cfg(target_arch = "wasm32")]
    observer: Signal<Option<ObserverHandle>>,
}

/// Shares one registry and one viewport observer with every [`Reveal`] below it.
#[component]
pub fn RevealProvider(children: Element) -> Element {
    let registry = use_signal(RevealRegistry::default);
    #[cfg(target_arch = "wasm32")]
    let observer = use_signal(|| create_observer(registry));

    use_context_provider(|| RevealContext {
        registry,
        #[cfg(target_arch = "wasm32")]
        observer,
    });

    #[cfg(target_arch = "wasm32")]
    use_drop(move || {
        if let Some(handle) = observer.read().as_ref() {
            handle.observer.disconnect();
        }
    });

    rsx! { {children} }
}

#[cfg(target_arch = "wasm32")]
fn create_observer(mut registry: Signal<RevealRegistry>) -> Option<ObserverHandle> {
    let closure = Rc::new(Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(id) = target
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|value| value.parse::<RevealId>().ok())
                else {
                    continue;
                };
                let Some(delay) = registry
                    .try_write()
                    .ok()
                    .and_then(|mut state| state.on_intersect(id, entry.is_intersecting()))
                else {
                    continue;
                };
                observer.unobserve(&target);
                wasm_bindgen_futures::spawn_local(async move {
                    if delay > 0 {
                        TimeoutFuture::new(delay).await;
                    }
                    // The provider, or the element's entry, may be gone by now.
                    if let Ok(mut state) = registry.try_write() {
                        state.reveal(id);
                    }
                });
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    match web_sys::IntersectionObserver::new_with_options(
        closure.as_ref().as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => Some(ObserverHandle {
            observer,
            _closure: closure,
        }),
        Err(_) => {
            tracing::warn!("reveal: IntersectionObserver unavailable");
            None
        }
    }
}

/// Wraps content that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(
    class: String,
    id: Option<String>,
    delay_ms: Option<u32>,
    children: Element,
) -> Element {
    let context = use_context::<RevealContext>();
    let mut registry = context.registry;
    let mut reveal_id = use_signal(|| None::<RevealId>);
    #[cfg(target_arch = "wasm32")]
    let mut element = use_signal(|| None::<web_sys::Element>);

    use_drop(move || {
        let Some(id) = *reveal_id.peek() else {
            return;
        };
        if let Ok(mut state) = registry.try_write() {
            state.unregister(id);
            tracing::trace!("reveal: dropped {id}, {} tracked", state.len());
        }
        #[cfg(target_arch = "wasm32")]
        {
            let Ok(observer) = context.observer.try_peek() else {
                return;
            };
            if let (Some(handle), Some(element)) = (observer.as_ref(), element.peek().as_ref()) {
                handle.observer.unobserve(element);
            }
        }
    });

    let visible = reveal_id().is_some_and(|id| registry.read().is_visible(id));
    let class = if visible {
        format!("{class} reveal visible")
    } else {
        format!("{class} reveal")
    };

    rsx! {
        div {
            class: "{class}",
            id,
            onmounted: move |_event| {
                if reveal_id.peek().is_some() {
                    return;
                }
                let id = registry.write().register(delay_ms.unwrap_or(0));
                reveal_id.set(Some(id));
                #[cfg(target_arch = "wasm32")]
                {
                    let mounted = _event.data.as_ref().as_web_event();
                    let _ = mounted.set_attribute(REVEAL_ID_ATTR, &id.to_string());
                    if let Some(handle) = context.observer.peek().as_ref() {
                        handle.observer.observe(&mounted);
                    }
                    element.set(Some(mounted));
                }
            },
            {children}
        }
    }
}
