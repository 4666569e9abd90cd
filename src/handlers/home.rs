/// Message served from the application root.
pub const WELCOME_MESSAGE: &str = "Welcome to the TP-Project-2025-issra application!";

/// GET / handler - Root welcome endpoint
///
/// Returns the welcome message as plain text. Takes no input and cannot
/// fail, so the response is always 200.
pub async fn home_handler() -> &'static str {
    WELCOME_MESSAGE
}
