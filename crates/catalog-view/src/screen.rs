//! Screens: a controller plus the ephemeral state its renderer needs.
//!
//! A screen is created when its route is entered and dropped when it is left.
//! Nothing fetched survives the drop.

use core::future::pending;
use std::sync::Arc;

use catalog_core::{DataSource, SearchQuery};

use crate::controller::{Controller, Loader, Resource};
use crate::loaders::{PostDetailLoader, PostsLoader, UserDetailLoader, UsersLoader};
use crate::present::{DetailView, ListItem, ListView, detail_view, list_view};
use crate::route::Route;

/// A filterable collection screen.
pub struct ListScreen<L: Loader<Key = ()>> {
    controller: Controller<L>,
    search: SearchQuery,
}

impl<T, L> ListScreen<L>
where
    T: ListItem,
    L: Loader<Key = (), Output = Vec<T>>,
{
    /// Creates the screen and starts fetching.
    pub fn mount(loader: L) -> Self {
        Self {
            controller: Controller::mount(loader, ()),
            search: SearchQuery::default(),
        }
    }

    /// Controller state.
    pub fn state(&self) -> &Resource<Vec<T>> {
        self.controller.state()
    }

    /// Current query.
    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    /// Mutable query, for editing in place.
    pub fn search_mut(&mut self) -> &mut SearchQuery {
        &mut self.search
    }

    /// Replaces the query.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search.set_query(text);
    }

    /// What to render now.
    pub fn view(&self) -> ListView<'_, T> {
        list_view(self.controller.state(), &self.search)
    }

    /// Re-fetches the collection. The query is kept.
    pub fn retry(&mut self) -> bool {
        self.controller.retry()
    }

    /// Applies the next completion; see [`Controller::pump`].
    pub async fn pump(&mut self) -> bool {
        self.controller.pump().await
    }

    /// Waits until the latest fetch resolved.
    pub async fn settle(&mut self) {
        self.controller.settle().await;
    }
}

/// A record screen parameterized by id.
pub struct DetailScreen<L: Loader> {
    controller: Controller<L>,
}

impl<L: Loader> DetailScreen<L> {
    /// Creates the screen and starts fetching `key`.
    pub fn mount(loader: L, key: L::Key) -> Self {
        Self {
            controller: Controller::mount(loader, key),
        }
    }

    /// Controller state.
    pub fn state(&self) -> &Resource<L::Output> {
        self.controller.state()
    }

    /// Id currently shown or being fetched.
    pub fn key(&self) -> Option<&L::Key> {
        self.controller.key()
    }

    /// Switches to another id, superseding any fetch in flight.
    pub fn navigate(&mut self, key: L::Key) {
        self.controller.trigger(key);
    }

    /// What to render now.
    pub fn view(&self) -> DetailView<'_, L::Output> {
        detail_view(self.controller.state())
    }

    /// Re-fetches the current id.
    pub fn retry(&mut self) -> bool {
        self.controller.retry()
    }

    /// Applies the next completion; see [`Controller::pump`].
    pub async fn pump(&mut self) -> bool {
        self.controller.pump().await
    }

    /// Waits until the latest fetch resolved.
    pub async fn settle(&mut self) {
        self.controller.settle().await;
    }
}

/// Post list screen.
pub type PostsScreen = ListScreen<PostsLoader>;
/// User list screen.
pub type UsersScreen = ListScreen<UsersLoader>;
/// Post detail screen.
pub type PostScreen = DetailScreen<PostDetailLoader>;
/// User detail screen.
pub type UserScreen = DetailScreen<UserDetailLoader>;

/// The screen behind the current route.
pub enum Screen {
    /// Landing screen; fetches nothing
    Home,
    /// Post list
    Posts(PostsScreen),
    /// Post with comments
    Post(PostScreen),
    /// User list
    Users(UsersScreen),
    /// User with posts
    User(UserScreen),
}

impl Screen {
    /// Builds the screen for `route` and starts its fetches.
    ///
    /// Must be called within a tokio runtime.
    pub fn open(route: Route, source: &Arc<dyn DataSource>) -> Self {
        let source = Arc::clone(source);
        match route {
            Route::Home => Self::Home,
            Route::Posts => Self::Posts(ListScreen::mount(PostsLoader::new(source))),
            Route::Post(id) => Self::Post(DetailScreen::mount(PostDetailLoader::new(source), id)),
            Route::Users => Self::Users(ListScreen::mount(UsersLoader::new(source))),
            Route::User(id) => Self::User(DetailScreen::mount(UserDetailLoader::new(source), id)),
        }
    }

    /// Route this screen answers to.
    pub fn route(&self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::Posts(_) => Route::Posts,
            Self::Post(screen) => screen.key().copied().map_or(Route::Posts, Route::Post),
            Self::Users(_) => Route::Users,
            Self::User(screen) => screen.key().copied().map_or(Route::Users, Route::User),
        }
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        match self {
            Self::Home => false,
            Self::Posts(screen) => screen.state().is_loading(),
            Self::Post(screen) => screen.state().is_loading(),
            Self::Users(screen) => screen.state().is_loading(),
            Self::User(screen) => screen.state().is_loading(),
        }
    }

    /// Error message of the latest fetch, if it failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Home => None,
            Self::Posts(screen) => screen.state().error(),
            Self::Post(screen) => screen.state().error(),
            Self::Users(screen) => screen.state().error(),
            Self::User(screen) => screen.state().error(),
        }
    }

    /// Mutable query of a list screen.
    pub fn search_mut(&mut self) -> Option<&mut SearchQuery> {
        match self {
            Self::Posts(screen) => Some(screen.search_mut()),
            Self::Users(screen) => Some(screen.search_mut()),
            Self::Home | Self::Post(_) | Self::User(_) => None,
        }
    }

    /// Re-runs the latest fetch. Returns `false` on the landing screen.
    pub fn retry(&mut self) -> bool {
        match self {
            Self::Home => false,
            Self::Posts(screen) => screen.retry(),
            Self::Post(screen) => screen.retry(),
            Self::Users(screen) => screen.retry(),
            Self::User(screen) => screen.retry(),
        }
    }

    /// Applies the next completion. Never resolves on the landing screen.
    pub async fn pump(&mut self) -> bool {
        match self {
            Self::Home => pending().await,
            Self::Posts(screen) => screen.pump().await,
            Self::Post(screen) => screen.pump().await,
            Self::Users(screen) => screen.pump().await,
            Self::User(screen) => screen.pump().await,
        }
    }

    /// Waits until the latest fetch resolved.
    pub async fn settle(&mut self) {
        match self {
            Self::Home => {}
            Self::Posts(screen) => screen.settle().await,
            Self::Post(screen) => screen.settle().await,
            Self::Users(screen) => screen.settle().await,
            Self::User(screen) => screen.settle().await,
        }
    }
}

/// Current screen plus the routes visited before it.
pub struct Navigator {
    source: Arc<dyn DataSource>,
    screen: Screen,
    history: Vec<Route>,
}

impl Navigator {
    /// Opens `route` as the first screen.
    ///
    /// Must be called within a tokio runtime.
    pub fn new(source: Arc<dyn DataSource>, route: Route) -> Self {
        let screen = Screen::open(route, &source);
        Self {
            source,
            screen,
            history: Vec::new(),
        }
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Mutable current screen.
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Current route.
    pub fn route(&self) -> Route {
        self.screen.route()
    }

    /// Number of routes that `back` can return to.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Goes to `route`, remembering the current one.
    pub fn open(&mut self, route: Route) {
        let current = self.route();
        if current == route {
            return;
        }
        self.history.push(current);
        self.show(route);
    }

    /// Returns to the previous route. Returns `false` if there is none.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.show(previous);
        true
    }

    /// Shows `route`. A detail screen of the same kind is re-triggered with the
    /// new id; any other change builds a fresh screen.
    fn show(&mut self, route: Route) {
        tracing::debug!("navigate {from} -> {route}", from = self.route());
        match (&mut self.screen, route) {
            (Screen::Post(screen), Route::Post(id)) => return screen.navigate(id),
            (Screen::User(screen), Route::User(id)) => return screen.navigate(id),
            _ => {}
        }
        self.screen = Screen::open(route, &self.source);
    }
}
