// ABOUTME: Root status endpoint
// ABOUTME: Plain-text liveness string for quick manual checks

pub async fn home() -> &'static str {
    "API is running. Use the frontend to interact with this service."
}
