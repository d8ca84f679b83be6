mod common;

use axum::http::{Method, StatusCode, header::LOCATION};
use serde_json::json;

use common::{app, json, send};

#[tokio::test]
async fn personal_screens_redirect_to_login_without_a_profile() {
    let (app, _state) = app();

    for (method, uri) in [
        (Method::GET, "/dashboard"),
        (Method::GET, "/leaderboard"),
        (Method::GET, "/profile"),
        (Method::POST, "/quiz"),
    ] {
        let resp = send(&app, method, uri, None).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "expected redirect for {uri}");
        assert_eq!(resp.headers()[LOCATION], "/", "expected login location for {uri}");
    }
}

#[tokio::test]
async fn email_login_then_dashboard() {
    let (app, _state) = app();

    let resp = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({ "email": "sam@example.com", "display_name": "Sam" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body["navigate_to"], "dashboard");
    assert_eq!(body["profile"]["points"], 2690);

    let resp = send(&app, Method::GET, "/dashboard", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body["greeting"], "Hi, Sam!");
    assert_eq!(body["round_clock"]["display"], "7:00");
    assert_eq!(body["top_ramblers"][0]["identity"], "Qelvin N.");
    assert_eq!(body["challenge"]["points"], 50);
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let (app, _state) = app();
    let resp = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({ "email": "not-an-email" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn quiz_runs_to_completion_over_http() {
    let (app, state) = app();
    send(&app, Method::POST, "/login/linkedin", None).await;

    let resp = send(&app, Method::POST, "/quiz", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body["question_number"], 1);
    assert_eq!(body["question"]["prompt"], "Your ideal weekend project involves:");

    let resp = send(&app, Method::POST, "/quiz/answer", Some(json!({ "option": 9 }))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    for option in [0, 2] {
        let resp = send(
            &app,
            Method::POST,
            "/quiz/answer",
            Some(json!({ "option": option })),
        )
        .await;
        let body = json(resp).await;
        assert_eq!(body["accepted"], true);
        assert!(body["navigate_to"].is_null());
    }
    let resp = send(&app, Method::POST, "/quiz/answer", Some(json!({ "option": 1 }))).await;
    let body = json(resp).await;
    assert_eq!(body["navigate_to"], "dashboard");
    assert_eq!(body["quiz"]["completed"], true);
    assert_eq!(
        body["quiz"]["answers"],
        json!([
            "Prototyping a new app idea",
            "Network with like-minded people",
            "People - I connect and inspire"
        ])
    );

    assert!(state.quiz().lock().await.is_none());
    let resp = send(&app, Method::GET, "/quiz", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, Method::POST, "/quiz/answer", Some(json!({ "option": 0 }))).await;
    let body = json(resp).await;
    assert_eq!(body["accepted"], false);
}

#[tokio::test]
async fn leaderboard_echoes_the_period_and_flags_the_user() {
    let (app, _state) = app();
    send(&app, Method::POST, "/login/linkedin", None).await;

    let body = json(send(&app, Method::GET, "/leaderboard?period=month", None).await).await;
    assert_eq!(body["period"], "month");
    assert_eq!(body["policy"], "competition");
    assert_eq!(body["podium"]["first"]["identity"], "Qelvin N.");
    assert_eq!(body["rankings"].as_array().map(Vec::len), Some(10));
    assert_eq!(body["you"]["points"], 2690);

    let current: Vec<_> = body["rankings"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|row| row["is_current_user"] == true)
        .collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0]["identity"], "Alex (You)");

    let body = json(send(&app, Method::GET, "/leaderboard", None).await).await;
    assert_eq!(body["period"], "week");
}

#[tokio::test]
async fn groups_open_and_close() {
    let (app, _state) = app();

    let body = json(send(&app, Method::GET, "/groups", None).await).await;
    assert_eq!(body["groups"][0]["name"], "DONGMINATION");
    assert_eq!(body["groups"][0]["active"], true);

    let body = json(send(&app, Method::POST, "/groups/AI%20Innovators/open", None).await).await;
    assert_eq!(body["open"]["name"], "AI Innovators");

    let resp = send(&app, Method::POST, "/groups/Chess/open", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = json(send(&app, Method::POST, "/groups/close", None).await).await;
    assert!(body["open"].is_null());
}

#[tokio::test]
async fn profile_and_health() {
    let (app, _state) = app();
    send(&app, Method::POST, "/login/linkedin", None).await;

    let body = json(send(&app, Method::GET, "/profile", None).await).await;
    assert_eq!(body["profile"]["display_name"], "Alex");
    assert_eq!(body["profile"]["initial"], "A");
    assert_eq!(body["achievements"].as_array().map(Vec::len), Some(4));

    let body = json(send(&app, Method::GET, "/healthcheck", None).await).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn dismissing_the_challenge_needs_the_dashboard() {
    let (app, _state) = app();
    send(&app, Method::POST, "/login/linkedin", None).await;

    let resp = send(&app, Method::POST, "/dashboard/challenge/dismiss", None).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    send(&app, Method::GET, "/dashboard", None).await;
    let body = json(send(&app, Method::POST, "/dashboard/challenge/dismiss", None).await).await;
    assert_eq!(body["challenge_visible"], false);
}
