pub mod content;
pub mod countdown;
pub mod groups;
pub mod navigation;
pub mod profile;
pub mod quiz;
pub mod ranking;
pub mod session;
mod sse;
pub mod task;
pub mod trigger;

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock, RwLockWriteGuard};
use tracing::{debug, info};

use crate::{
    config::AppConfig,
    dao::profile_store::ProfileStore,
    state::{
        groups::GroupBoard,
        navigation::{Navigator, Screen, SseNavigator},
        session::{DashboardSession, QuizRun},
    },
};

pub use self::sse::SseHub;

pub type SharedState = Arc<AppState>;

/// Capacity of the event channel feeding the SSE stream.
const EVENT_CAPACITY: usize = 64;

/// Central application state: the profile gateway, the visible screen and the
/// resources owned by that screen.
pub struct AppState {
    config: AppConfig,
    profiles: Arc<dyn ProfileStore>,
    events: SseHub,
    navigator: Arc<dyn Navigator>,
    screen: RwLock<Screen>,
    dashboard: Mutex<Option<DashboardSession>>,
    quiz: Mutex<Option<QuizRun>>,
    groups: RwLock<GroupBoard>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// Navigation requests are published on the SSE stream.
    pub fn new(config: AppConfig, profiles: Arc<dyn ProfileStore>) -> SharedState {
        let events = SseHub::new(EVENT_CAPACITY);
        let navigator = Arc::new(SseNavigator::new(events.clone()));
        Self::build(config, profiles, events, navigator)
    }

    /// Same as [`AppState::new`] with a caller supplied navigator.
    pub fn with_navigator(
        config: AppConfig,
        profiles: Arc<dyn ProfileStore>,
        navigator: Arc<dyn Navigator>,
    ) -> SharedState {
        Self::build(config, profiles, SseHub::new(EVENT_CAPACITY), navigator)
    }

    fn build(
        config: AppConfig,
        profiles: Arc<dyn ProfileStore>,
        events: SseHub,
        navigator: Arc<dyn Navigator>,
    ) -> SharedState {
        Arc::new(Self {
            config,
            profiles,
            events,
            navigator,
            screen: RwLock::new(Screen::Login),
            dashboard: Mutex::new(None),
            quiz: Mutex::new(None),
            groups: RwLock::new(GroupBoard::new(content::event_groups())),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Gateway to the single stored profile record.
    pub fn profiles(&self) -> &Arc<dyn ProfileStore> {
        &self.profiles
    }

    /// Broadcast hub used for the SSE stream.
    pub fn events(&self) -> &SseHub {
        &self.events
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    /// Screen the participant is currently on.
    pub async fn screen(&self) -> Screen {
        *self.screen.read().await
    }

    /// Record that `screen` is now visible and release whatever the previous
    /// screen owned.
    ///
    /// Entering the screen that is already visible keeps its resources. The
    /// returned [`ScreenEntry`] holds the screen until dropped; resources of
    /// the new screen must be installed before that, so a concurrent screen
    /// change always sees and releases them.
    pub async fn enter_screen(&self, screen: Screen) -> ScreenEntry<'_> {
        let mut current = self.screen.write().await;
        let previous = std::mem::replace(&mut *current, screen);

        if previous != screen {
            self.release_screen(previous).await;
            info!(from = ?previous, to = ?screen, "screen changed");
        }
        ScreenEntry {
            previous,
            _current: current,
        }
    }

    /// Dashboard timers, present while the dashboard is visible.
    pub fn dashboard(&self) -> &Mutex<Option<DashboardSession>> {
        &self.dashboard
    }

    /// Quiz in progress, present while the quiz is visible and not completed.
    pub fn quiz(&self) -> &Mutex<Option<QuizRun>> {
        &self.quiz
    }

    pub fn groups(&self) -> &RwLock<GroupBoard> {
        &self.groups
    }

    async fn release_screen(&self, screen: Screen) {
        match screen {
            Screen::Dashboard => {
                if let Some(session) = self.dashboard.lock().await.take() {
                    debug!(dashboard_id = %session.id(), "dashboard timers released");
                }
            }
            Screen::Quiz => {
                if let Some(run) = self.quiz.lock().await.take() {
                    debug!(quiz_id = %run.id(), "quiz run abandoned");
                }
            }
            Screen::Groups => self.groups.write().await.close(),
            Screen::Login | Screen::Leaderboard | Screen::Profile => {}
        }
    }
}

/// Exclusive hold on the visible screen, returned by [`AppState::enter_screen`].
pub struct ScreenEntry<'a> {
    previous: Screen,
    _current: RwLockWriteGuard<'a, Screen>,
}

impl ScreenEntry<'_> {
    /// Screen that was visible before this entry.
    pub fn previous(&self) -> Screen {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        dao::profile_store::memory::MemoryProfileStore,
        state::{quiz::QuizSession, task::TaskGuard},
    };
    use uuid::Uuid;

    fn state() -> SharedState {
        AppState::new(AppConfig::in_memory(), Arc::new(MemoryProfileStore::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_the_dashboard_drops_its_session() {
        let state = state();
        state.enter_screen(Screen::Dashboard).await;
        let session = DashboardSession::start(Uuid::new_v4(), state.config(), |_| {}, || {});
        *state.dashboard().lock().await = Some(session);

        assert_eq!(
            state.enter_screen(Screen::Dashboard).await.previous(),
            Screen::Dashboard
        );
        assert!(state.dashboard().lock().await.is_some());

        assert_eq!(
            state.enter_screen(Screen::Leaderboard).await.previous(),
            Screen::Dashboard
        );
        assert!(state.dashboard().lock().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_the_quiz_drops_the_run() {
        let state = state();
        state.enter_screen(Screen::Quiz).await;
        let session = QuizSession::new(content::icebreaker_questions(), 10).unwrap();
        *state.quiz().lock().await = Some(QuizRun::new(
            Uuid::new_v4(),
            session,
            TaskGuard::new(tokio::spawn(tokio::time::sleep(Duration::from_secs(60)))),
        ));

        state.enter_screen(Screen::Profile).await;
        assert!(state.quiz().lock().await.is_none());
        assert_eq!(state.screen().await, Screen::Profile);
    }

    #[tokio::test]
    async fn leaving_groups_closes_the_chat() {
        let state = state();
        state.enter_screen(Screen::Groups).await;
        state.groups().write().await.open("DONGMINATION").unwrap();

        state.enter_screen(Screen::Dashboard).await;
        assert!(state.groups().read().await.open_group().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn screen_change_waits_for_the_entered_screen_to_settle() {
        let state = state();
        let entry = state.enter_screen(Screen::Quiz).await;

        let leaving = tokio::spawn({
            let state = state.clone();
            async move { state.enter_screen(Screen::Profile).await.previous() }
        });
        tokio::task::yield_now().await;
        assert!(!leaving.is_finished());

        let session = QuizSession::new(content::icebreaker_questions(), 10).unwrap();
        *state.quiz().lock().await = Some(QuizRun::new(
            Uuid::new_v4(),
            session,
            TaskGuard::new(tokio::spawn(tokio::time::sleep(Duration::from_secs(60)))),
        ));
        drop(entry);

        assert_eq!(leaving.await.unwrap(), Screen::Quiz);
        assert!(state.quiz().lock().await.is_none());
        assert_eq!(state.screen().await, Screen::Profile);
    }
}
