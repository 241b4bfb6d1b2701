use tracing::Level;

const DEFAULT_LEVEL: Level = Level::INFO;

pub fn init() {
    let level = option_env!("LOG_LEVEL")
        .map(parse_level)
        .unwrap_or(DEFAULT_LEVEL);
    if let Err(err) = dioxus::logger::init(level) {
        // A subscriber may already be installed by the launcher.
        tracing::debug!("logger init skipped: {err}");
    }
}

fn parse_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => DEFAULT_LEVEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("error"), Level::ERROR);
        assert_eq!(parse_level("Warning"), Level::WARN);
        assert_eq!(parse_level(" debug "), Level::DEBUG);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("verbose"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }
}
