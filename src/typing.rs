use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

pub const DEFAULT_PHRASES: &[&str] = &[
    "Web Developer",
    "Front-End Developer",
    "Web Designer",
    "Youtuber",
    "Script Writer",
];

const TYPE_DELAY_MS: u32 = 80;
const MIN_DELAY_MS: u32 = 20;
const HOLD_MS: u32 = 900;
#[cfg(target_arch = "wasm32")]
const START_DELAY_MS: u32 = 500;
#[cfg(target_arch = "wasm32")]
const PRESS_MS: u32 = 70;
#[cfg(target_arch = "wasm32")]
const POP_MS: u32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

/// Wait before the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pause {
    /// Full phrase on screen.
    Hold,
    Keystroke(Mode),
}

impl Pause {
    /// `roll` is a uniform sample in `[0, 1)`; it adds jitter in `[-40, 39]`.
    pub fn delay_ms(self, roll: f64) -> u32 {
        let base = match self {
            Pause::Hold => return HOLD_MS,
            Pause::Keystroke(Mode::Typing) => TYPE_DELAY_MS,
            Pause::Keystroke(Mode::Deleting) => (TYPE_DELAY_MS / 2).max(MIN_DELAY_MS),
        };
        let roll = if roll.is_finite() { roll.clamp(0.0, 0.999_999) } else { 0.5 };
        let jitter = (roll * 80.0).floor() as i64 - 40;
        (base as i64 + jitter).max(MIN_DELAY_MS as i64) as u32
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub pause: Pause,
    /// A character was added this tick.
    pub keystroke: bool,
}

/// Splits the semicolon separated phrase attribute, falling back to defaults.
pub fn parse_phrases(raw: Option<&str>) -> Vec<String> {
    let phrases: Vec<String> = raw
        .unwrap_or_default()
        .split(';')
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(str::to_string)
        .collect();
    if phrases.is_empty() {
        DEFAULT_PHRASES.iter().map(|phrase| phrase.to_string()).collect()
    } else {
        phrases
    }
}

/// Type / delete loop over a fixed phrase list.
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    offset: usize,
    mode: Mode,
    on_word_complete: Option<Box<dyn FnMut(&str)>>,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        let mut phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .filter(|phrase| !phrase.is_empty())
            .map(|phrase| phrase.chars().collect())
            .collect();
        if phrases.is_empty() {
            phrases = DEFAULT_PHRASES.iter().map(|phrase| phrase.chars().collect()).collect();
        }
        Self {
            phrases,
            phrase: 0,
            offset: 0,
            mode: Mode::Typing,
            on_word_complete: None,
        }
    }

    /// Called with the phrase the moment it is fully typed.
    pub fn on_word_complete(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_word_complete = Some(Box::new(callback));
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tick(&mut self) -> TypeStep {
        let current = &self.phrases[self.phrase];
        match self.mode {
            Mode::Typing => {
                self.offset += 1;
                let text: String = current[..self.offset].iter().collect();
                if self.offset == current.len() {
                    self.mode = Mode::Deleting;
                    if let Some(callback) = self.on_word_complete.as_mut() {
                        callback(&text);
                    }
                    return TypeStep {
                        text,
                        pause: Pause::Hold,
                        keystroke: true,
                    };
                }
                TypeStep {
                    text,
                    pause: Pause::Keystroke(self.mode),
                    keystroke: true,
                }
            }
            Mode::Deleting => {
                self.offset -= 1;
                let text: String = current[..self.offset].iter().collect();
                if self.offset == 0 {
                    self.mode = Mode::Typing;
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                }
                TypeStep {
                    text,
                    pause: Pause::Keystroke(self.mode),
                    keystroke: false,
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn random_roll() -> f64 {
    js_sys::Math::random()
}

#[component]
pub fn TypingText(words: Option<String>) -> Element {
    let mut text = use_signal(String::new);
    let mut pressed = use_signal(|| false);
    let mut popped = use_signal(|| false);

    use_future(move || {
        let phrases = parse_phrases(words.as_deref());
        async move {
            #[cfg(target_arch = "wasm32")]
            {
                tracing::debug!("typing: {} phrases", phrases.len());
                let mut typewriter = Typewriter::new(phrases).on_word_complete(move |_word| {
                    popped.set(true);
                    spawn(async move {
                        TimeoutFuture::new(POP_MS).await;
                        popped.set(false);
                    });
                });
                TimeoutFuture::new(START_DELAY_MS).await;
                loop {
                    let step = typewriter.tick();
                    text.set(step.text);
                    if step.keystroke {
                        pressed.set(true);
                        spawn(async move {
                            TimeoutFuture::new(PRESS_MS).await;
                            pressed.set(false);
                        });
                    }
                    TimeoutFuture::new(step.pause.delay_ms(random_roll())).await;
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                if let Some(first) = phrases.into_iter().next() {
                    text.set(first);
                }
            }
        }
    });

    let mut class = String::from("typed");
    if pressed() {
        class.push_str(" press");
    }
    if popped() {
        class.push_str(" pop");
    }

    rsx! {
        span { class: "typing-text",
            span { class: "{class}", "{text}" }
            span { class: "cursor", aria_hidden: "true" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|phrase| phrase.to_string()).collect()
    }

    #[test]
    fn full_cycle_visits_expected_states() {
        let mut typewriter = Typewriter::new(phrases(&["AB", "C"]));
        let seen: Vec<String> = (0..6).map(|_| typewriter.tick().text).collect();
        assert_eq!(seen, vec!["A", "AB", "A", "", "C", ""]);
        assert_eq!(typewriter.tick().text, "A");
    }

    #[test]
    fn holds_after_full_phrase_and_flips_modes() {
        let mut typewriter = Typewriter::new(phrases(&["Hi"]));
        assert_eq!(typewriter.tick().pause, Pause::Keystroke(Mode::Typing));
        assert_eq!(typewriter.tick().pause, Pause::Hold);
        assert_eq!(typewriter.mode(), Mode::Deleting);
        assert_eq!(typewriter.tick().pause, Pause::Keystroke(Mode::Deleting));
        let last = typewriter.tick();
        assert_eq!(last.text, "");
        assert_eq!(last.pause, Pause::Keystroke(Mode::Typing));
        assert!(!last.keystroke);
    }

    #[test]
    fn word_complete_callback_fires_once_per_phrase() {
        let completed = Rc::new(RefCell::new(Vec::new()));
        let sink = completed.clone();
        let mut typewriter = Typewriter::new(phrases(&["AB", "C"]))
            .on_word_complete(move |word| sink.borrow_mut().push(word.to_string()));
        for _ in 0..6 {
            typewriter.tick();
        }
        assert_eq!(*completed.borrow(), vec!["AB".to_string(), "C".to_string()]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typewriter = Typewriter::new(phrases(&["né"]));
        assert_eq!(typewriter.tick().text, "n");
        assert_eq!(typewriter.tick().text, "né");
    }

    #[test]
    fn delays_stay_within_bounds() {
        let typing = Pause::Keystroke(Mode::Typing);
        let deleting = Pause::Keystroke(Mode::Deleting);
        assert_eq!(typing.delay_ms(0.0), 40);
        assert_eq!(typing.delay_ms(0.5), 80);
        assert_eq!(typing.delay_ms(0.9999), 119);
        assert_eq!(deleting.delay_ms(0.0), 20);
        assert_eq!(deleting.delay_ms(0.9999), 79);
        assert_eq!(Pause::Hold.delay_ms(0.0), 900);
        assert_eq!(typing.delay_ms(f64::NAN), 80);
    }

    #[test]
    fn phrase_attribute_is_split_and_trimmed() {
        assert_eq!(
            parse_phrases(Some(" Rustacean ; ; Writer;")),
            phrases(&["Rustacean", "Writer"])
        );
        assert_eq!(parse_phrases(Some(" ; ")), phrases(DEFAULT_PHRASES));
        assert_eq!(parse_phrases(None), phrases(DEFAULT_PHRASES));
    }
}
