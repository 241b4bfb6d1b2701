use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

/// Element id of an in-page anchor such as `#about`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Smooth-scrolls to the element with `id`. Returns `false` if it does not exist.
#[cfg(target_arch = "wasm32")]
fn scroll_to_element(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_element(_id: &str) -> bool {
    false
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[component]
pub fn NavBar(brand: String, links: Vec<NavLink>) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        header { class: "site-header",
            a {
                class: "logo",
                href: "#home",
                onclick: move |event| {
                    if scroll_to_element("home") {
                        event.prevent_default();
                        open.set(false);
                    }
                },
                "{brand}"
            }
            button {
                r#type: "button",
                class: "menu-btn",
                aria_label: "Toggle navigation",
                aria_expanded: "{open}",
                onclick: move |_| open.toggle(),
                "☰"
            }
            nav { class: if open() { "active" } else { "" },
                for link in links {
                    a {
                        key: "{link.href}",
                        href: link.href,
                        onclick: move |event| {
                            let Some(id) = anchor_target(link.href) else {
                                return;
                            };
                            if scroll_to_element(id) {
                                event.prevent_default();
                                open.set(false);
                            }
                        },
                        "{link.label}"
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener {
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

#[component]
pub fn BackToTop() -> Element {
    let visible = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    let mut listener = use_signal(|| None::<ScrollListener>);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            if listener.peek().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut visible = visible;
            let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let scroll_y = web_sys::window()
                    .and_then(|window| window.scroll_y().ok())
                    .unwrap_or(0.0);
                let next = back_to_top_visible(scroll_y);
                if *visible.peek() != next {
                    visible.set(next);
                }
            }) as Box<dyn FnMut(_)>));
            let _ = window.add_event_listener_with_callback(
                "scroll",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            listener.set(Some(ScrollListener { closure }));
        });

        use_drop(move || {
            let binding = listener.read();
            let Some(listener) = binding.as_ref() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    listener.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    rsx! {
        button {
            r#type: "button",
            id: "backToTop",
            class: if visible() { "back-to-top show" } else { "back-to-top" },
            aria_label: "Back to top",
            onclick: move |_| scroll_to_top(),
            "↑"
        }
    }
}

fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
