//! Interactive application: input handling, navigation and the event loop.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;

use catalog_view::home::DESTINATIONS;
use catalog_view::{DetailView, ListItem, ListView, Navigator, Route, Screen};

use super::event_source::InputEventSource;
use super::renderer::{RenderCtx, Renderer};
use super::theme::Theme;

/// What key presses currently do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate
    Browse,
    /// Keys edit the search query of a list screen
    Search,
}

/// Main TUI application
pub struct TuiApp<B: Backend> {
    terminal: Terminal<B>,
    events: Box<dyn InputEventSource>,
    navigator: Navigator,
    renderer: Renderer,
    mode: InputMode,
    selected: usize,
}

impl<B: Backend> TuiApp<B> {
    /// Creates an app drawing to `terminal` and reading keys from `events`.
    pub fn new(
        terminal: Terminal<B>,
        events: Box<dyn InputEventSource>,
        navigator: Navigator,
        theme: Theme,
    ) -> Self {
        Self {
            terminal,
            events,
            navigator,
            renderer: Renderer::new(theme),
            mode: InputMode::Browse,
            selected: 0,
        }
    }

    /// Terminal being drawn to
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable terminal, for setup and teardown
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Navigation state
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Current input mode
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Highlighted row
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.renderer.theme()
    }

    /// Run the main event loop until quit
    ///
    /// Input events and fetch completions are processed on this task with
    /// `tokio::select!`, so screen state has a single writer.
    ///
    /// # Errors
    /// Returns an error if reading input or drawing fails.
    pub async fn run_event_loop(&mut self) -> io::Result<()> {
        self.render()?;
        loop {
            tokio::select! {
                event_result = self.events.next_event() => {
                    match event_result? {
                        Some(event) => {
                            if self.handle_input(&event) {
                                break;
                            }
                        }
                        None => break,
                    }
                }

                changed = self.navigator.screen_mut().pump() => {
                    if changed {
                        tracing::debug!("screen {} updated", self.navigator.route());
                    }
                }
            }

            self.render()?;
        }

        Ok(())
    }

    /// Waits until the current screen's latest fetch resolved.
    pub async fn settle(&mut self) {
        self.navigator.screen_mut().settle().await;
    }

    /// Handle an input event and return true if the app should quit
    fn handle_input(&mut self, event: &Event) -> bool {
        if let Event::Key(key) = event
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            return self.handle_key(key);
        }
        false
    }

    /// Handles a single key event and returns true if the app should quit
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'q'))
        {
            return true;
        }
        match self.mode {
            InputMode::Search => {
                self.handle_search_key(key.code);
                false
            }
            InputMode::Browse => self.handle_browse_key(key.code),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('h') => self.open(Route::Home),
            KeyCode::Char('p') => self.open(Route::Posts),
            KeyCode::Char('u') => self.open(Route::Users),
            KeyCode::Char('/') => {
                if self.navigator.screen_mut().search_mut().is_some() {
                    self.mode = InputMode::Search;
                }
            }
            KeyCode::Char('r') => {
                if self.navigator.screen_mut().retry() {
                    tracing::info!("retrying {}", self.navigator.route());
                }
            }
            KeyCode::Char('t') => {
                let theme = self.renderer.theme().next();
                self.renderer.set_theme(theme);
            }
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let last = rows(self.navigator.screen()).len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Enter => {
                if let Some(route) = rows(self.navigator.screen()).get(self.selected).copied() {
                    self.open(route);
                }
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                if self.navigator.back() {
                    self.selected = 0;
                }
            }
            _ => {}
        }
        false
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        let Some(search) = self.navigator.screen_mut().search_mut() else {
            self.mode = InputMode::Browse;
            return;
        };
        match code {
            KeyCode::Esc => {
                search.clear();
                self.mode = InputMode::Browse;
            }
            KeyCode::Enter => self.mode = InputMode::Browse,
            KeyCode::Backspace => search.pop(),
            KeyCode::Char(character) => search.push(character),
            _ => return,
        }
        self.selected = 0;
    }

    fn open(&mut self, route: Route) {
        self.navigator.open(route);
        self.mode = InputMode::Browse;
        self.selected = 0;
    }

    /// Renders the UI to the terminal
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub fn render(&mut self) -> io::Result<()> {
        let renderer = &self.renderer;
        let ctx = RenderCtx {
            screen: self.navigator.screen(),
            route: self.navigator.route(),
            selected: self.selected,
            searching: self.mode == InputMode::Search,
        };
        self.terminal.draw(|frame| renderer.render(frame, &ctx))?;
        Ok(())
    }
}

/// Routes reachable with Enter from each row of `screen`, in row order.
fn rows(screen: &Screen) -> Vec<Route> {
    match screen {
        Screen::Home => DESTINATIONS
            .iter()
            .map(|destination| destination.route)
            .collect(),
        Screen::Posts(list) => match list.view() {
            ListView::Populated { shown, .. } => shown.iter().map(|post| post.route()).collect(),
            _ => Vec::new(),
        },
        Screen::Users(list) => match list.view() {
            ListView::Populated { shown, .. } => shown.iter().map(|user| user.route()).collect(),
            _ => Vec::new(),
        },
        Screen::User(detail) => match detail.view() {
            DetailView::Populated(detail) => detail.posts.iter().map(ListItem::route).collect(),
            _ => Vec::new(),
        },
        Screen::Post(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use catalog_client::ScriptedSource;
    use catalog_core::{DataSource, Request};
    use catalog_testing::FixtureData;
    use ratatui::backend::TestBackend;

    use crate::tui::event_source::ScriptedEvents;

    fn sample_source() -> Arc<ScriptedSource> {
        let data = FixtureData::sample();
        let mut source = ScriptedSource::new()
            .with_posts(&data.posts)
            .with_users(&data.users);
        for post in &data.posts {
            source = source
                .with_post(post)
                .with_comments(post.id, &data.comments_for(post.id));
        }
        for user in &data.users {
            source = source
                .with_user(user)
                .with_user_posts(user.id, &data.posts_for(user.id));
        }
        Arc::new(source)
    }

    fn app(
        source: Arc<ScriptedSource>,
        route: Route,
        events: ScriptedEvents,
    ) -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let shared: Arc<dyn DataSource> = source;
        TuiApp::new(
            terminal,
            Box::new(events),
            Navigator::new(shared, route),
            Theme::default(),
        )
    }

    fn screen_text(app: &TuiApp<TestBackend>) -> String {
        app.terminal()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
        app.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_home_renders_destinations() {
        let mut app = app(sample_source(), Route::Home, ScriptedEvents::default());
        app.render().unwrap();
        let text = screen_text(&app);
        assert!(text.contains("JSONPlaceholder Explorer"));
        assert!(text.contains("Posts  Explore sample posts"));
    }

    #[tokio::test]
    async fn test_enter_follows_selected_row() {
        let mut app = app(sample_source(), Route::Home, ScriptedEvents::default());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator().route(), Route::Users);

        app.settle().await;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator().route(), Route::User(2));

        app.settle().await;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator().route(), Route::Post(3));

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.navigator().route(), Route::User(2));
    }

    #[tokio::test]
    async fn test_search_mode_filters_list() {
        let mut app = app(sample_source(), Route::Posts, ScriptedEvents::default());
        app.settle().await;

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode(), InputMode::Search);
        for character in "quia".chars() {
            press(&mut app, KeyCode::Char(character));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode(), InputMode::Browse);

        app.render().unwrap();
        let text = screen_text(&app);
        assert!(text.contains("1 of 3 posts"));
        assert!(text.contains("#1 sunt aut facere"));
        assert!(!text.contains("#2 qui est esse"));

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('z'));
        app.render().unwrap();
        assert!(screen_text(&app).contains("No posts match \"quiaz\""));

        press(&mut app, KeyCode::Esc);
        app.render().unwrap();
        assert!(screen_text(&app).contains("3 of 3 posts"));
    }

    #[tokio::test]
    async fn test_failure_panel_and_retry() {
        let source = sample_source();
        source.set_failure(Request::Users, "Failed to fetch users: HTTP 500");
        let mut app = app(Arc::clone(&source), Route::Users, ScriptedEvents::default());
        app.settle().await;
        app.render().unwrap();
        let text = screen_text(&app);
        assert!(text.contains("Failed to fetch users: HTTP 500"));
        assert!(text.contains("Press r to retry"));

        source.set_reply(Request::Users, &FixtureData::sample().users);
        press(&mut app, KeyCode::Char('r'));
        app.settle().await;
        app.render().unwrap();
        assert!(screen_text(&app).contains("Leanne Graham (@Bret)"));
        assert_eq!(source.call_count(Request::Users), 2);
    }

    #[tokio::test]
    async fn test_post_detail_shows_comments() {
        let mut app = app(sample_source(), Route::Post(1), ScriptedEvents::default());
        app.render().unwrap();
        assert!(screen_text(&app).contains("Loading post..."));

        app.settle().await;
        app.render().unwrap();
        let text = screen_text(&app);
        assert!(text.contains("Comments (5)"));
        assert!(text.contains("Lew@alysha.tv"));
    }

    #[tokio::test]
    async fn test_event_loop_quits_on_q() {
        let events = ScriptedEvents::new([KeyCode::Char('t'), KeyCode::Char('q')]);
        let mut app = app(sample_source(), Route::Home, events);
        app.run_event_loop().await.unwrap();
        assert_eq!(app.theme(), Theme::default().next());
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_in_search_mode() {
        let mut app = app(sample_source(), Route::Posts, ScriptedEvents::default());
        press(&mut app, KeyCode::Char('/'));
        assert!(!press(&mut app, KeyCode::Char('q')), "q is typed while searching");
        assert!(app.handle_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }
}
