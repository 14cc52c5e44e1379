use tracing::debug;

/// Fixed body of `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to the homepage!";

/// Plain text greeting; ignores query string and body
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    ),
    tag = "root"
)]
pub async fn welcome() -> &'static str {
    debug!("Root endpoint called");
    WELCOME_MESSAGE
}
