use std::sync::Arc;

use anyhow::Result;

use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::api::ApiService;
use crate::config::AppConfig;
use crate::internal::models::{FetchState, Story};
use crate::internal::notification::Notification;
use crate::internal::preference::ThemePreference;
use crate::internal::selection::Selection;
use crate::internal::ui::view;
use crate::utils::theme::{ThemeMode, TuiTheme};

use ratatui::Frame;
use ratatui::widgets::ListState;

/// Actions/messages sent through the app action channel.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    NavigateUp,
    NavigateDown,
    OpenStory,
    CloseStory,
    Refresh,
    ToggleTheme,
    StoriesLoaded(u64, Vec<Story>),
    FetchFailed(u64, String),
    ClearNotification,
}

/// Main application state.
///
/// All mutation happens in `handle_action` on the event loop; spawned fetch
/// tasks only ever send actions back through the channel, so every state
/// change is atomic from the renderer's perspective.
pub struct App {
    pub running: bool,
    pub app_version: String,
    pub fetch: FetchState,
    /// Bumped on every fetch start; results tagged with an older generation
    /// arrived for a context that no longer exists and are discarded.
    fetch_generation: u64,
    pub selection: Selection,
    pub story_list_state: ListState,
    pub api_service: Arc<ApiService>,
    pub preference: ThemePreference,
    pub theme: TuiTheme,
    pub notification: Option<Notification>,
    pub config: AppConfig,
    pub action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new() -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let config = AppConfig::load();
        let api_service = Arc::new(ApiService::new(config.backend_url.clone()));

        let preference = ThemePreference::load_or_default();
        let theme = TuiTheme::for_mode(ThemeMode::from_dark(preference.is_dark()));

        tracing::info!(
            backend_url = %config.backend_url,
            dark = preference.is_dark(),
            "App initialized"
        );

        Self {
            running: true,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            fetch: FetchState::Loading,
            fetch_generation: 0,
            selection: Selection::default(),
            story_list_state: ListState::default(),
            api_service,
            preference,
            theme,
            notification: None,
            config,
            action_tx,
            action_rx,
        }
    }

    pub async fn run(&mut self, mut tui: crate::tui::Tui) -> Result<()> {
        // Initial load
        let _ = self.action_tx.send(Action::Refresh);

        let mut event_interval = tokio::time::interval(std::time::Duration::from_millis(16));

        loop {
            tui.draw(|f| self.ui(f))?;

            tokio::select! {
                _ = event_interval.tick() => {
                    // Check for terminal events
                    if event::poll(std::time::Duration::from_millis(0))?
                        && let Event::Key(key) = event::read()?
                            && key.kind == KeyEventKind::Press {
                                self.handle_key_event(key);
                            }

                    if let Some(notification) = &self.notification
                        && notification.should_dismiss()
                    {
                        self.notification = None;
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            if !self.running {
                break;
            }
        }
        Ok(())
    }

    fn ui(&mut self, f: &mut Frame) {
        view::draw(self, f);
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                let _ = self.action_tx.send(Action::Quit);
            }
            KeyCode::Esc | KeyCode::Backspace => {
                // Esc closes the open story first; with nothing open it quits.
                match self.selection.selected_id() {
                    Some(_) => {
                        let _ = self.action_tx.send(Action::CloseStory);
                    }
                    None => {
                        let _ = self.action_tx.send(Action::Quit);
                    }
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let _ = self.action_tx.send(Action::NavigateDown);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let _ = self.action_tx.send(Action::NavigateUp);
            }
            KeyCode::Enter => {
                let _ = self.action_tx.send(Action::OpenStory);
            }
            KeyCode::Char('r') => {
                let _ = self.action_tx.send(Action::Refresh);
            }
            KeyCode::Char('t') => {
                let _ = self.action_tx.send(Action::ToggleTheme);
            }
            _ => {}
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::NavigateUp => self.select_previous(),
            Action::NavigateDown => self.select_next(),
            Action::OpenStory => {
                if let FetchState::Ready(stories) = &self.fetch
                    && let Some(index) = self.story_list_state.selected()
                    && let Some(story) = stories.get(index)
                {
                    self.selection.select(story.id);
                }
            }
            Action::CloseStory => self.selection.clear(),
            Action::Refresh => self.start_fetch(),
            Action::StoriesLoaded(generation, stories) => {
                if generation != self.fetch_generation {
                    tracing::debug!(
                        generation,
                        current = self.fetch_generation,
                        "Discarding stale fetch result"
                    );
                    return;
                }

                let count = stories.len();
                tracing::info!(count, "Stories loaded");

                // Keep the cursor on a valid row; the open-story id is left
                // alone and re-resolved against the new list on render.
                match self.story_list_state.selected() {
                    Some(index) if index < count => {}
                    _ if count > 0 => self.story_list_state.select(Some(0)),
                    _ => self.story_list_state.select(None),
                }

                self.fetch = FetchState::Ready(stories);
                self.notification = Some(Notification::info(format!("Loaded {count} stories")));
            }
            Action::FetchFailed(generation, message) => {
                if generation != self.fetch_generation {
                    tracing::debug!(
                        generation,
                        current = self.fetch_generation,
                        "Discarding stale fetch failure"
                    );
                    return;
                }

                tracing::error!(%message, "Story fetch failed");
                self.fetch = FetchState::Error(message);
            }
            Action::ToggleTheme => {
                let is_dark = self.preference.toggle();
                self.apply_theme(is_dark);
            }
            Action::ClearNotification => self.notification = None,
        }
    }

    fn start_fetch(&mut self) {
        self.fetch_generation += 1;
        self.fetch = FetchState::Loading;

        let generation = self.fetch_generation;
        let api = self.api_service.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            match api.fetch_stories().await {
                Ok(stories) => {
                    let _ = tx.send(Action::StoriesLoaded(generation, stories));
                }
                Err(e) => {
                    let _ = tx.send(Action::FetchFailed(generation, e.to_string()));
                }
            }
        });
    }

    /// Swap the active palette. Applying the same mode twice is a no-op in
    /// effect, so this is safe to call on every preference change.
    pub fn apply_theme(&mut self, is_dark: bool) {
        self.theme = TuiTheme::for_mode(ThemeMode::from_dark(is_dark));
    }

    fn select_next(&mut self) {
        let len = self.fetch.stories().map_or(0, |s| s.len());
        if len == 0 {
            return;
        }
        let next = match self.story_list_state.selected() {
            Some(index) if index + 1 < len => index + 1,
            Some(index) => index,
            None => 0,
        };
        self.story_list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let len = self.fetch.stories().map_or(0, |s| s.len());
        if len == 0 {
            return;
        }
        let previous = match self.story_list_state.selected() {
            Some(index) if index > 0 => index - 1,
            _ => 0,
        };
        self.story_list_state.select(Some(previous));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
