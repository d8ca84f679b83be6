use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Ramble Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sse::event_stream,
        crate::routes::session::login_screen,
        crate::routes::session::login,
        crate::routes::session::login_linkedin,
        crate::routes::dashboard::get_dashboard,
        crate::routes::dashboard::dismiss_challenge,
        crate::routes::quiz::start_quiz,
        crate::routes::quiz::get_quiz,
        crate::routes::quiz::answer,
        crate::routes::leaderboard::get_leaderboard,
        crate::routes::profile::get_profile,
        crate::routes::groups::list_groups,
        crate::routes::groups::open_group,
        crate::routes::groups::close_group,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::sse::NavigateEvent,
            crate::dto::sse::RoundTickEvent,
            crate::dto::sse::ChallengeShownEvent,
            crate::dto::sse::QuizTickEvent,
            crate::dto::sse::QuizAdvancedEvent,
            crate::state::countdown::CountdownState,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sse", description = "Server-sent events stream"),
        (name = "session", description = "Login and sign-up"),
        (name = "dashboard", description = "Round clock and networking challenge"),
        (name = "quiz", description = "Timed icebreaker quiz"),
        (name = "leaderboard", description = "Ranked points board"),
        (name = "profile", description = "Signed-in participant"),
        (name = "groups", description = "Event groups and chats"),
    )
)]
pub struct ApiDoc;
