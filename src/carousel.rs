use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use crate::clock::{now_ms, Millis};
use crate::overlay::{Overlay, ScrollLock};

pub const DEFAULT_INTERVAL_MS: u32 = 4000;
/// How long a slide keeps its `entering`/`exiting` flag.
pub const TRANSITION_MS: Millis = 900;
/// Delay before the description panel swaps in the incoming text.
pub const DESCRIPTION_DELAY_MS: Millis = 200;

/// Slide as declared in page content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideMarkup {
    pub image: Option<&'static str>,
    /// Lazy source used when no image is embedded.
    pub lazy_src: Option<&'static str>,
    pub alt: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlideImage {
    pub src: String,
    pub alt: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    Idle,
    Entering { until: Millis },
    Active,
    Exiting { until: Millis },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub image: Option<SlideImage>,
    pub description: String,
    phase: SlidePhase,
}

impl Slide {
    pub fn from_markup(markup: &SlideMarkup) -> Self {
        let image = markup
            .image
            .map(|src| SlideImage {
                src: src.to_string(),
                alt: markup.alt.map(str::to_string),
            })
            .or_else(|| {
                markup.lazy_src.map(|src| SlideImage {
                    src: src.to_string(),
                    alt: None,
                })
            });
        Self {
            image,
            description: markup.description.to_string(),
            phase: SlidePhase::Idle,
        }
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, SlidePhase::Entering { .. } | SlidePhase::Active)
    }

    pub fn class(&self) -> &'static str {
        match self.phase {
            SlidePhase::Idle => "work-slide",
            SlidePhase::Entering { .. } => "work-slide visible entering",
            SlidePhase::Active => "work-slide visible",
            SlidePhase::Exiting { .. } => "work-slide exiting",
        }
    }

    fn deadline(&self) -> Option<Millis> {
        match self.phase {
            SlidePhase::Entering { until } | SlidePhase::Exiting { until } => Some(until),
            SlidePhase::Idle | SlidePhase::Active => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescriptionPanel {
    pub text: String,
    pub shown: bool,
    pending: Option<(Millis, usize)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalView {
    pub src: String,
    pub alt: String,
    pub description: String,
}

/// Slide rotation state. All transitions are deadlines applied by [`Carousel::settle`].
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    slides: Vec<Slide>,
    active: Option<usize>,
    description: DescriptionPanel,
    modal: Option<ModalView>,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            active: None,
            description: DescriptionPanel::default(),
            modal: None,
        }
    }

    pub fn from_markup(markup: &[SlideMarkup]) -> Self {
        Self::new(markup.iter().map(Slide::from_markup).collect())
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn description(&self) -> &DescriptionPanel {
        &self.description
    }

    pub fn modal(&self) -> Option<&ModalView> {
        self.modal.as_ref()
    }

    /// Activates `target`. Returns `false` when nothing changed.
    pub fn show(&mut self, target: usize, now: Millis) -> bool {
        if target >= self.slides.len() || self.active == Some(target) {
            return false;
        }
        if let Some(previous) = self.active.and_then(|index| self.slides.get_mut(index)) {
            previous.phase = SlidePhase::Exiting {
                until: now + TRANSITION_MS,
            };
        }
        self.slides[target].phase = SlidePhase::Entering {
            until: now + TRANSITION_MS,
        };
        self.description.shown = false;
        self.description.pending = Some((now + DESCRIPTION_DELAY_MS, target));
        self.active = Some(target);
        true
    }

    pub fn go_next(&mut self, now: Millis) -> bool {
        let len = self.slides.len();
        if len == 0 {
            return false;
        }
        let target = self.active.map_or(0, |index| (index + 1) % len);
        self.show(target, now)
    }

    pub fn go_prev(&mut self, now: Millis) -> bool {
        let len = self.slides.len();
        if len == 0 {
            return false;
        }
        let target = self.active.map_or(len - 1, |index| (index + len - 1) % len);
        self.show(target, now)
    }

    /// Applies every transition due at `now`. Returns `true` if anything changed.
    pub fn settle(&mut self, now: Millis) -> bool {
        let mut changed = false;
        for slide in &mut self.slides {
            match slide.phase {
                SlidePhase::Entering { until } if until <= now => {
                    slide.phase = SlidePhase::Active;
                    changed = true;
                }
                SlidePhase::Exiting { until } if until <= now => {
                    slide.phase = SlidePhase::Idle;
                    changed = true;
                }
                _ => {}
            }
        }
        if let Some((due, index)) = self.description.pending {
            if due <= now {
                self.description.pending = None;
                self.description.text = self
                    .slides
                    .get(index)
                    .map(|slide| slide.description.clone())
                    .unwrap_or_default();
                self.description.shown = true;
                changed = true;
            }
        }
        changed
    }

    /// Earliest pending transition, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.slides
            .iter()
            .filter_map(Slide::deadline)
            .chain(self.description.pending.map(|(due, _)| due))
            .min()
    }

    /// Opens the modal on slide `index`. Returns `false` if there is no such slide.
    pub fn open_modal(&mut self, index: usize) -> bool {
        let Some(slide) = self.slides.get(index) else {
            return false;
        };
        let (src, alt) = match &slide.image {
            Some(image) => (image.src.clone(), image.alt.clone()),
            None => (String::new(), None),
        };
        self.modal = Some(ModalView {
            src,
            alt: alt.filter(|alt| !alt.is_empty()).unwrap_or_else(|| "Work".to_string()),
            description: slide.description.clone(),
        });
        true
    }

    /// Returns `true` if the modal was open.
    pub fn close_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }
}

/// Reads the autoplay interval attribute once; bad or zero values use the default.
pub fn parse_interval(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|interval| *interval > 0)
        .unwrap_or(DEFAULT_INTERVAL_MS)
}

/// Source of recurring ticks for [`Autoplay`].
pub trait Ticker {
    type Handle;

    fn start_interval(&self, interval_ms: u32) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// Owns at most one running autoplay timer.
pub struct Autoplay<T: Ticker> {
    ticker: T,
    interval_ms: u32,
    handle: Option<T::Handle>,
}

impl<T: Ticker> Autoplay<T> {
    pub fn new(ticker: T, interval_ms: u32) -> Self {
        Self {
            ticker,
            interval_ms,
            handle: None,
        }
    }

    pub fn start(&mut self) {
        self.stop();
        self.handle = Some(self.ticker.start_interval(self.interval_ms));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.ticker.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
pub struct IntervalTicker {
    on_tick: Rc<dyn Fn()>,
}

#[cfg(target_arch = "wasm32")]
impl IntervalTicker {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Ticker for IntervalTicker {
    type Handle = gloo_timers::callback::Interval;

    fn start_interval(&self, interval_ms: u32) -> Self::Handle {
        let on_tick = self.on_tick.clone();
        gloo_timers::callback::Interval::new(interval_ms, move || on_tick())
    }

    fn cancel(&self, handle: Self::Handle) {
        let _ = handle.cancel();
    }
}

/// Server renders never tick.
#[cfg(not(target_arch = "wasm32"))]
pub struct IntervalTicker;

#[cfg(not(target_arch = "wasm32"))]
impl IntervalTicker {
    pub fn new(_on_tick: impl Fn() + 'static) -> Self {
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Ticker for IntervalTicker {
    type Handle = ();

    fn start_interval(&self, _interval_ms: u32) -> Self::Handle {}

    fn cancel(&self, _handle: Self::Handle) {}
}

/// Settles whatever is due at `now` and returns the wait until the next
/// pending transition, or `None` once the carousel is at rest.
fn transition_step(carousel: &mut Carousel, now: Millis) -> Option<u32> {
    carousel.settle(now);
    carousel
        .next_deadline()
        .map(|deadline| deadline.saturating_sub(now).min(u32::MAX as Millis) as u32)
}

/// Sleeps through pending transitions. Stops once the carousel signal is gone.
#[cfg(target_arch = "wasm32")]
fn drive_transitions(mut carousel: Signal<Carousel>) {
    let Some(mut wait) = carousel
        .try_write()
        .ok()
        .and_then(|mut state| transition_step(&mut state, now_ms()))
    else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        loop {
            TimeoutFuture::new(wait).await;
            let Ok(mut state) = carousel.try_write() else {
                return;
            };
            match transition_step(&mut state, now_ms()) {
                Some(next) => wait = next,
                None => return,
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn drive_transitions(mut carousel: Signal<Carousel>) {
    if let Ok(mut state) = carousel.try_write() {
        transition_step(&mut state, Millis::MAX);
    }
}

fn navigate(mut carousel: Signal<Carousel>, step: impl FnOnce(&mut Carousel, Millis) -> bool) {
    let Ok(mut state) = carousel.try_write() else {
        return;
    };
    let changed = step(&mut *state, now_ms());
    drop(state);
    if changed {
        drive_transitions(carousel);
    }
}

#[component]
pub fn WorksCarousel(slides: Vec<SlideMarkup>, interval: Option<String>) -> Element {
    let mut scroll_lock = use_context::<Signal<ScrollLock>>();
    let mut carousel = use_signal(|| Carousel::from_markup(&slides));
    let interval_ms = use_hook(|| parse_interval(interval.as_deref()));
    let mut autoplay = use_signal(|| {
        Autoplay::new(
            IntervalTicker::new(move || navigate(carousel, Carousel::go_next)),
            interval_ms,
        )
    });

    use_effect(move || {
        tracing::debug!(
            "carousel: init with {} slides, interval {interval_ms}ms",
            carousel.peek().slides().len()
        );
        navigate(carousel, |carousel, now| carousel.show(0, now));
        autoplay.write().start();
    });

    use_drop(move || {
        autoplay.write().stop();
        if let Ok(mut lock) = scroll_lock.try_write() {
            lock.release(Overlay::WorkModal);
        }
    });

    let mut close_modal = move || {
        if carousel.write().close_modal() {
            scroll_lock.write().release(Overlay::WorkModal);
        }
    };

    let state = carousel.read();
    let description = state.description().clone();
    let modal = state.modal().cloned();
    let modal_open = modal.is_some();
    let rendered_slides: Vec<(usize, Slide)> = state.slides().iter().cloned().enumerate().collect();
    drop(state);

    rsx! {
        div { class: "works-shell",
            div {
                class: "works-carousel",
                onmouseenter: move |_| autoplay.write().stop(),
                onmouseleave: move |_| autoplay.write().start(),
                for (index, slide) in rendered_slides {
                    div {
                        key: "{index}",
                        class: slide.class(),
                        onclick: move |_| {
                            if carousel.write().open_modal(index) {
                                scroll_lock.write().acquire(Overlay::WorkModal);
                            }
                        },
                        if let Some(image) = slide.image.clone() {
                            img {
                                src: "{image.src}",
                                alt: image.alt.clone().unwrap_or_default(),
                                loading: "lazy",
                            }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "works-prev",
                    aria_label: "Previous work",
                    onclick: move |_| {
                        navigate(carousel, Carousel::go_prev);
                        autoplay.write().stop();
                    },
                    "‹"
                }
                button {
                    r#type: "button",
                    class: "works-next",
                    aria_label: "Next work",
                    onclick: move |_| {
                        navigate(carousel, Carousel::go_next);
                        autoplay.write().stop();
                    },
                    "›"
                }
            }
            p { class: if description.shown { "work-description show" } else { "work-description" },
                "{description.text}"
            }
            div {
                class: "work-modal",
                hidden: !modal_open,
                onclick: move |_| close_modal(),
                if let Some(view) = modal {
                    div {
                        class: "work-modal-inner",
                        onclick: move |event| event.stop_propagation(),
                        button {
                            r#type: "button",
                            class: "work-modal-close",
                            aria_label: "Close",
                            onclick: move |_| close_modal(),
                            "×"
                        }
                        div { class: "work-modal-media",
                            img { src: "{view.src}", alt: "{view.alt}" }
                        }
                        p { class: "work-modal-desc", "{view.description}" }
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
    use std::cell::RefCell;
    use std::rc::Rc;

    fn markup(description: &'static str) -> SlideMarkup {
        SlideMarkup {
            image: Some("img/work.png"),
            lazy_src: None,
            alt: Some("Work preview"),
            description,
        }
    }

    fn carousel_of(count: usize) -> Carousel {
        const DESCRIPTIONS: [&str; 5] = ["one", "two", "three", "four", "five"];
        let slides: Vec<SlideMarkup> = DESCRIPTIONS[..count].iter().copied().map(markup).collect();
        Carousel::from_markup(&slides)
    }

    #[test]
    fn first_show_activates_slide_zero() {
        let mut carousel = carousel_of(3);
        assert_eq!(carousel.active(), None);
        assert!(carousel.show(0, 0));
        assert_eq!(carousel.active(), Some(0));
        assert_eq!(
            carousel.slides()[0].phase(),
            SlidePhase::Entering { until: TRANSITION_MS }
        );
        assert!(carousel.slides()[0].is_visible());
    }

    #[test]
    fn next_wraps_back_to_start_after_full_cycle() {
        for count in 1..=5 {
            let mut carousel = carousel_of(count);
            carousel.show(0, 0);
            for step in 0..count {
                carousel.go_next(step as Millis * 1000);
            }
            assert_eq!(carousel.active(), Some(0), "slide count {count}");
        }
    }

    #[test]
    fn prev_wraps_to_last_slide() {
        let mut carousel = carousel_of(3);
        carousel.show(0, 0);
        assert!(carousel.go_prev(10));
        assert_eq!(carousel.active(), Some(2));
    }

    #[test]
    fn showing_active_slide_is_a_no_op() {
        let mut carousel = carousel_of(3);
        carousel.show(1, 0);
        let before = carousel.clone();
        assert!(!carousel.show(1, 500));
        assert_eq!(carousel, before);
    }

    #[test]
    fn empty_carousel_never_changes() {
        let mut carousel = carousel_of(0);
        let before = carousel.clone();
        assert!(!carousel.go_next(0));
        assert!(!carousel.go_prev(0));
        assert!(!carousel.show(0, 0));
        assert!(!carousel.settle(10_000));
        assert_eq!(carousel.next_deadline(), None);
        assert_eq!(carousel, before);
    }

    #[test]
    fn out_of_range_target_is_ignored() {
        let mut carousel = carousel_of(2);
        carousel.show(0, 0);
        assert!(!carousel.show(7, 10));
        assert_eq!(carousel.active(), Some(0));
    }

    #[test]
    fn transitions_settle_at_their_deadlines() {
        let mut carousel = carousel_of(2);
        carousel.show(0, 0);
        carousel.settle(TRANSITION_MS);
        assert_eq!(carousel.slides()[0].phase(), SlidePhase::Active);

        carousel.go_next(1000);
        assert_eq!(carousel.slides()[0].class(), "work-slide exiting");
        assert_eq!(carousel.slides()[1].class(), "work-slide visible entering");
        assert!(!carousel.description().shown);
        assert_eq!(carousel.next_deadline(), Some(1000 + DESCRIPTION_DELAY_MS));

        assert!(!carousel.settle(1100));
        assert!(carousel.settle(1000 + DESCRIPTION_DELAY_MS));
        assert!(carousel.description().shown);
        assert_eq!(carousel.description().text, "two");
        assert_eq!(carousel.slides()[1].class(), "work-slide visible entering");

        assert!(carousel.settle(1000 + TRANSITION_MS));
        assert_eq!(carousel.slides()[0].phase(), SlidePhase::Idle);
        assert_eq!(carousel.slides()[1].phase(), SlidePhase::Active);
        assert_eq!(carousel.next_deadline(), None);
    }

    #[test]
    fn transition_step_sleeps_until_next_deadline() {
        let mut carousel = carousel_of(2);
        carousel.show(0, 0);
        assert_eq!(
            transition_step(&mut carousel, 0),
            Some(DESCRIPTION_DELAY_MS as u32)
        );
        assert_eq!(
            transition_step(&mut carousel, DESCRIPTION_DELAY_MS),
            Some((TRANSITION_MS - DESCRIPTION_DELAY_MS) as u32)
        );
        assert!(carousel.description().shown);
        assert_eq!(transition_step(&mut carousel, TRANSITION_MS), None);
        assert_eq!(carousel.slides()[0].phase(), SlidePhase::Active);
    }

    #[test]
    fn late_transition_step_settles_everything_at_once() {
        let mut carousel = carousel_of(2);
        carousel.show(0, 0);
        carousel.go_next(100);
        assert_eq!(transition_step(&mut carousel, 10_000), None);
        assert_eq!(carousel.slides()[0].phase(), SlidePhase::Idle);
        assert_eq!(carousel.slides()[1].phase(), SlidePhase::Active);
        assert_eq!(carousel.description().text, "two");
    }

    #[test]
    fn lazy_source_synthesizes_an_image() {
        let slide = Slide::from_markup(&SlideMarkup {
            image: None,
            lazy_src: Some("img/lazy.png"),
            alt: None,
            description: "lazy",
        });
        assert_eq!(
            slide.image,
            Some(SlideImage {
                src: "img/lazy.png".to_string(),
                alt: None,
            })
        );
    }

    #[test]
    fn modal_uses_slide_image_and_default_alt() {
        let mut carousel = Carousel::from_markup(&[
            SlideMarkup {
                image: None,
                lazy_src: Some("img/a.png"),
                alt: None,
                description: "first",
            },
            SlideMarkup {
                image: None,
                lazy_src: None,
                alt: None,
                description: "bare",
            },
        ]);
        assert!(carousel.open_modal(0));
        assert_eq!(
            carousel.modal(),
            Some(&ModalView {
                src: "img/a.png".to_string(),
                alt: "Work".to_string(),
                description: "first".to_string(),
            })
        );
        assert!(carousel.open_modal(1));
        assert_eq!(carousel.modal().map(|view| view.src.as_str()), Some(""));
        assert!(carousel.close_modal());
        assert!(!carousel.close_modal());
        assert!(!carousel.open_modal(9));
    }

    #[test]
    fn interval_attribute_falls_back_to_default() {
        assert_eq!(parse_interval(None), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval(Some("2500")), 2500);
        assert_eq!(parse_interval(Some(" 6000 ")), 6000);
        assert_eq!(parse_interval(Some("fast")), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval(Some("0")), DEFAULT_INTERVAL_MS);
    }

    /// Timer fake: tracks live handles and fires every live one on demand.
    #[derive(Clone, Default)]
    struct FakeTicker {
        live: Rc<RefCell<Vec<u32>>>,
        next_id: Rc<RefCell<u32>>,
    }

    impl FakeTicker {
        fn live_timers(&self) -> usize {
            self.live.borrow().len()
        }

        fn fire(&self, carousel: &mut Carousel, now: Millis) {
            for _ in 0..self.live_timers() {
                carousel.go_next(now);
            }
        }
    }

    impl Ticker for FakeTicker {
        type Handle = u32;

        fn start_interval(&self, _interval_ms: u32) -> u32 {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            self.live.borrow_mut().push(*next_id);
            *next_id
        }

        fn cancel(&self, handle: u32) {
            self.live.borrow_mut().retain(|id| *id != handle);
        }
    }

    #[test]
    fn starting_twice_keeps_a_single_timer() {
        let ticker = FakeTicker::default();
        let mut autoplay = Autoplay::new(ticker.clone(), DEFAULT_INTERVAL_MS);
        autoplay.start();
        autoplay.start();
        assert_eq!(ticker.live_timers(), 1);

        let mut carousel = carousel_of(3);
        carousel.show(0, 0);
        ticker.fire(&mut carousel, 4000);
        assert_eq!(carousel.active(), Some(1));
    }

    #[test]
    fn stopped_autoplay_does_not_advance() {
        let ticker = FakeTicker::default();
        let mut autoplay = Autoplay::new(ticker.clone(), DEFAULT_INTERVAL_MS);
        let mut carousel = carousel_of(3);
        carousel.show(0, 0);

        autoplay.start();
        autoplay.stop();
        autoplay.stop();
        assert!(!autoplay.is_running());
        ticker.fire(&mut carousel, 4000);
        assert_eq!(carousel.active(), Some(0));

        autoplay.start();
        ticker.fire(&mut carousel, 8000);
        assert_eq!(carousel.active(), Some(1));
    }
}
