use dioxus::prelude::*;

use crate::overlay::{Overlay, ScrollLock};
use crate::reveal::{stagger_delay, Reveal};

/// Achievement card as declared in page content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Achievement {
    pub title: &'static str,
    pub detail: &'static str,
    pub level: &'static str,
    /// Comma separated certificate image sources.
    pub certificates: &'static str,
}

pub fn parse_certificate_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CertificateGallery {
    images: Vec<String>,
    open: bool,
}

impl CertificateGallery {
    /// Replaces the gallery with the given certificate list and opens it.
    pub fn open_with(&mut self, raw: &str) {
        self.images = parse_certificate_list(raw);
        self.open = true;
    }

    /// Returns `true` if the gallery was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[component]
pub fn AchievementsSection(achievements: Vec<Achievement>, stagger_offset: usize) -> Element {
    let mut scroll_lock = use_context::<Signal<ScrollLock>>();
    let mut gallery = use_signal(CertificateGallery::default);

    use_drop(move || {
        if let Ok(mut lock) = scroll_lock.try_write() {
            lock.release(Overlay::Certificates);
        }
    });

    let mut close = move || {
        if gallery.write().close() {
            scroll_lock.write().release(Overlay::Certificates);
        }
    };

    let state = gallery.read().clone();

    rsx! {
        div { class: "ach-grid",
            for (index, achievement) in achievements.into_iter().enumerate() {
                Reveal {
                    key: "{index}",
                    class: "ach-card".to_string(),
                    delay_ms: Some(stagger_delay(stagger_offset + index)),
                    h3 { "{achievement.title}" }
                    p { "{achievement.detail}" }
                    button {
                        r#type: "button",
                        class: "ach-level",
                        onclick: move |_| {
                            tracing::debug!("certificates: open {}", achievement.title);
                            gallery.write().open_with(achievement.certificates);
                            scroll_lock.write().acquire(Overlay::Certificates);
                        },
                        "{achievement.level}"
                    }
                }
            }
        }
        div {
            class: "cert-popup",
            hidden: !state.is_open(),
            onclick: move |_| close(),
            div {
                class: "cert-popup-inner",
                onclick: move |event| event.stop_propagation(),
                button {
                    r#type: "button",
                    class: "cert-popup-close",
                    aria_label: "Close",
                    onclick: move |_| close(),
                    "×"
                }
                div { class: "cert-gallery",
                    for src in state.images().iter() {
                        img { src: "{src}", alt: "Certificate", loading: "lazy" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn certificate_list_is_trimmed() {
        assert_eq!(
            parse_certificate_list(" certs/a.jpg, certs/b.jpg ,,"),
            vec!["certs/a.jpg".to_string(), "certs/b.jpg".to_string()]
        );
        assert!(parse_certificate_list("").is_empty());
    }

    #[test]
    fn opening_replaces_previous_images() {
        let mut gallery = CertificateGallery::default();
        gallery.open_with("a.jpg,b.jpg");
        assert_eq!(gallery.images().len(), 2);
        gallery.close();
        gallery.open_with("c.jpg");
        assert_eq!(gallery.images(), ["c.jpg".to_string()]);
        assert!(gallery.is_open());
    }

    #[test]
    fn close_reports_only_the_first_time() {
        let mut gallery = CertificateGallery::default();
        assert!(!gallery.close());
        gallery.open_with("a.jpg");
        assert!(gallery.close());
        assert!(!gallery.close());
    }
}
