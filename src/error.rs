use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("Network response was not ok (status {0})")]
    Status(u16),
    #[error("decode failed: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_mentions_code() {
        assert_eq!(
            LoadError::Status(404).to_string(),
            "Network response was not ok (status 404)"
        );
    }
}
