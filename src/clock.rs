/// Milliseconds on the page clock.
pub type Millis = u64;

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> Millis {
    js_sys::Date::now() as Millis
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> Millis {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as Millis)
        .unwrap_or(0)
}
