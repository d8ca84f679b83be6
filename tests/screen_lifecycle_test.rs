use std::sync::Arc;

use ramble_back::{
    config::AppConfig,
    dao::profile_store::memory::MemoryProfileStore,
    services::{
        dashboard_service, groups_service, leaderboard_service, quiz_service, session_service,
    },
    state::{AppState, navigation::Screen},
};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_screen_entries_leave_no_resources_behind() {
    for round in 0..500 {
        let state = AppState::new(AppConfig::in_memory(), Arc::new(MemoryProfileStore::new()));
        session_service::login_with_linkedin(&state).await.unwrap();

        let dashboard = tokio::spawn({
            let state = state.clone();
            async move { dashboard_service::enter(&state).await.map(|_| ()) }
        });
        let quiz = tokio::spawn({
            let state = state.clone();
            async move { quiz_service::start(&state).await.map(|_| ()) }
        });
        let leaderboard = tokio::spawn({
            let state = state.clone();
            async move { leaderboard_service::leaderboard(&state, None).await.map(|_| ()) }
        });
        let groups = tokio::spawn({
            let state = state.clone();
            async move { groups_service::open(&state, "DONGMINATION").await.map(|_| ()) }
        });
        for task in [dashboard, quiz, leaderboard, groups] {
            task.await.unwrap().unwrap();
        }

        let screen = state.screen().await;
        if state.quiz().lock().await.is_some() {
            assert_eq!(screen, Screen::Quiz, "quiz run outlived its screen in round {round}");
        }
        if state.dashboard().lock().await.is_some() {
            assert_eq!(
                screen,
                Screen::Dashboard,
                "dashboard timers outlived their screen in round {round}"
            );
        }
        if state.groups().read().await.open_group().is_some() {
            assert_eq!(screen, Screen::Groups, "group chat outlived its screen in round {round}");
        }
    }
}
