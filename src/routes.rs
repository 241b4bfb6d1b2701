use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::carousel::WorksCarousel;
use crate::certificates::AchievementsSection;
use crate::config::{use_runtime_config, RuntimeConfig};
use crate::content::{
    ABOUT, ACHIEVEMENTS, BRAND, CONTACTS, MORE_SKILLS, NAV_LINKS, OWNER, SKILLS, STAGGER, WORKS,
};
use crate::data::{DataOutput, DynamicDataPanel};
use crate::nav::{BackToTop, NavBar};
use crate::overlay::use_scroll_lock_provider;
use crate::reveal::{stagger_delay, Reveal, RevealProvider};
use crate::typing::TypingText;

const MAIN_CSS: Asset = asset!("/assets/main.css");
/// Stagger delay for the dynamic data panel when none is set on it.
const DYNAMIC_DATA_DELAY_MS: u32 = 1080;

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    use_scroll_lock_provider();

    #[cfg(target_arch = "wasm32")]
    use_effect(enable_js_mode);

    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "{OWNER} | Portfolio" }
            div { class: "page loading",
                h1 { "Loading…" }
            }
        };
    };

    use_context_provider(|| config);

    rsx! {
        document::Title { "{OWNER} | Portfolio" }
        document::Meta { name: "description", content: "Portfolio of {OWNER}: web development, design and video." }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(target_arch = "wasm32")]
fn enable_js_mode() {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.remove_1("no-js");
    let _ = classes.add_1("js");
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    let config = use_context::<RuntimeConfig>();

    rsx! {
        NavBar { brand: BRAND.to_string(), links: NAV_LINKS.to_vec() }
        RevealProvider {
            main { class: "page",
                section { class: "home", id: "home",
                    Reveal { class: "home-content".to_string(),
                        h3 { "Hello, I'm" }
                        h1 { "{OWNER}" }
                        h3 { "And I'm a "
                            TypingText { words: config.typing_words.clone() }
                        }
                        a { class: "btn", href: "/cv.pdf", download: "cv.pdf", "Download CV" }
                    }
                    Reveal { class: "home-img".to_string(),
                        img { src: "/img/profile.webp", alt: "{OWNER}" }
                    }
                }
                Reveal { class: "about".to_string(), id: Some("about".to_string()),
                    h2 { class: "heading", "About " span { "Me" } }
                    p { "{ABOUT}" }
                }
                Reveal { class: "skills".to_string(), id: Some("skills".to_string()),
                    h2 { class: "heading", "My " span { "Skills" } }
                    div { class: "skill-grid",
                        for (index, skill) in SKILLS.iter().enumerate() {
                            Reveal {
                                key: "{index}",
                                class: "skill skill-card".to_string(),
                                delay_ms: Some(stagger_delay(STAGGER.skills + index)),
                                h3 { "{skill.name}" }
                                p { "{skill.summary}" }
                            }
                        }
                    }
                    ul { class: "more-skills",
                        for skill in MORE_SKILLS.iter() {
                            li { class: "more-skill", "{skill}" }
                        }
                    }
                }
                Reveal { class: "works".to_string(), id: Some("works".to_string()),
                    h2 { class: "heading", "My " span { "Works" } }
                    WorksCarousel {
                        slides: WORKS.to_vec(),
                        interval: config.carousel_interval.clone(),
                    }
                }
                Reveal { class: "achievements".to_string(), id: Some("achievements".to_string()),
                    h2 { class: "heading", "My " span { "Achievements" } }
                    AchievementsSection {
                        achievements: ACHIEVEMENTS.to_vec(),
                        stagger_offset: STAGGER.achievements,
                    }
                }
                Reveal {
                    class: "dynamic-data".to_string(),
                    id: Some("dynamic-data".to_string()),
                    delay_ms: Some(DYNAMIC_DATA_DELAY_MS),
                    DynamicDataPanel { url: config.data_url.clone() }
                }
                section { class: "data-output-section",
                    div { id: "data-output",
                        DataOutput { url: config.data_url.clone() }
                    }
                }
                Reveal { class: "contact".to_string(), id: Some("contact".to_string()),
                    h2 { class: "heading", "Contact " span { "Me" } }
                    div { class: "contact-list",
                        for (index, item) in CONTACTS.iter().enumerate() {
                            Reveal {
                                key: "{index}",
                                class: "contact-item".to_string(),
                                delay_ms: Some(stagger_delay(STAGGER.contacts + index)),
                                span { class: "contact-label", "{item.label}" }
                                a { href: item.href, target: "_blank", rel: "noopener noreferrer", "{item.value}" }
                            }
                        }
                    }
                }
            }
        }
        footer { class: "site-footer",
            p { "© {OWNER}. Built with Rust and Dioxus." }
        }
        BackToTop {}
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found | {OWNER}" }
        main { class: "page not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "btn", "Back home" }
        }
    }
}
