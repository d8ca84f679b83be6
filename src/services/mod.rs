/// Dashboard timers and the challenge popup.
pub mod dashboard_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Event groups and their chats.
pub mod groups_service;
/// Health check service.
pub mod health_service;
/// Ranked weekly board.
pub mod leaderboard_service;
/// Profile screen.
pub mod profile_service;
/// Icebreaker quiz runs.
pub mod quiz_service;
/// Sign-in and the profile gate in front of personal screens.
pub mod session_service;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
