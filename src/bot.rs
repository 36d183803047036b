//! Response generation
//!
//! The single extension point for conversational logic. Anything that wants
//! a `bot_response` must go through [`respond`]; storage and the HTTP layer
//! know nothing about how replies are produced, so swapping the echo for a
//! real model touches this module only.

/// Produce the bot's reply to a user message.
///
/// Pure and deterministic. Currently a plain echo.
pub fn respond(user_message: &str) -> String {
    user_message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echoes_input() {
        assert_eq!(respond("Hello"), "Hello");
        assert_eq!(respond("Tell me a joke"), "Tell me a joke");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(respond(""), "");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(respond("same input"), respond("same input"));
    }
}
