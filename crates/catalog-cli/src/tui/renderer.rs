//! Draws the current screen into a ratatui frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem as Row, ListState, Padding, Paragraph, Wrap,
};

use catalog_core::{Post, User};
use catalog_view::home::{DESTINATIONS, FEATURES, TAGLINE, TITLE};
use catalog_view::present::{NO_MATCHES_HINT, counter, empty_message, no_matches_message};
use catalog_view::{
    DetailScreen, DetailView, ListItem, ListScreen, ListView, Loader, PostDetail, Route, Screen,
    UserDetail,
};

use super::theme::Theme;

const BROWSE_HINTS: &str =
    " q quit | h home | p posts | u users | / search | Enter open | b back | r retry | t theme ";
const SEARCH_HINTS: &str = " type to filter | Backspace delete | Enter done | Esc clear ";

/// Everything the renderer reads for one frame
pub struct RenderCtx<'ctx> {
    /// Screen to draw
    pub screen: &'ctx Screen,
    /// Route of the screen
    pub route: Route,
    /// Highlighted row
    pub selected: usize,
    /// Whether keys currently edit the query
    pub searching: bool,
}

/// Handles rendering of the TUI
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    /// Creates a new Renderer with the specified theme
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Gets the current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Sets the theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Renders the entire UI
    pub fn render(&self, frame: &mut Frame, ctx: &RenderCtx<'_>) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Line::from(vec![
            Span::styled(
                " catalog ",
                Style::default()
                    .fg(self.theme.highlight())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(ctx.route.to_string(), Style::default().fg(self.theme.muted())),
        ]);
        frame.render_widget(Paragraph::new(title), header);

        match ctx.screen {
            Screen::Home => self.render_home(frame, body, ctx.selected),
            Screen::Posts(list) => self.render_list(frame, body, list, ctx),
            Screen::Users(list) => self.render_list(frame, body, list, ctx),
            Screen::Post(detail) => self.render_post(frame, body, detail),
            Screen::User(detail) => self.render_user(frame, body, detail, ctx.selected),
        }

        let hints = if ctx.searching {
            SEARCH_HINTS
        } else {
            BROWSE_HINTS
        };
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(self.theme.muted())),
            footer,
        );
    }

    fn block(&self, title: String) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(self.theme.focused_border()))
            .padding(Padding::horizontal(1))
    }

    fn selectable(&self, rows: Vec<Row<'static>>, title: String) -> List<'static> {
        List::new(rows)
            .block(self.block(title))
            .style(Style::default().fg(self.theme.text()))
            .highlight_style(
                Style::default()
                    .fg(self.theme.highlight())
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ")
    }

    fn render_home(&self, frame: &mut Frame, area: Rect, selected: usize) {
        let [intro, links, features] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(DESTINATIONS.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .areas(area);

        let heading = Paragraph::new(vec![
            Line::styled(
                TITLE,
                Style::default()
                    .fg(self.theme.highlight())
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(TAGLINE, Style::default().fg(self.theme.text())),
        ])
        .block(Block::default().padding(Padding::uniform(1)))
        .wrap(Wrap { trim: false });
        frame.render_widget(heading, intro);

        let rows = DESTINATIONS
            .iter()
            .map(|destination| {
                Row::new(format!(
                    "{}  {}",
                    destination.title, destination.description
                ))
            })
            .collect();
        let mut state = ListState::default().with_selected(Some(selected));
        let list = self.selectable(rows, " Explore ".to_owned());
        frame.render_stateful_widget(list, links, &mut state);

        let lines: Vec<Line<'_>> = FEATURES
            .iter()
            .map(|feature| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", feature.title),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(feature.description),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(self.theme.text()))
                .block(self.block(" Features ".to_owned()))
                .wrap(Wrap { trim: false }),
            features,
        );
    }

    fn render_list<T, L>(
        &self,
        frame: &mut Frame,
        area: Rect,
        list: &ListScreen<L>,
        ctx: &RenderCtx<'_>,
    ) where
        T: ListItem,
        L: Loader<Key = (), Output = Vec<T>>,
    {
        let [search, content] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let cursor = if ctx.searching { "_" } else { "" };
        let query = list.search().query();
        let search_style = if ctx.searching {
            Style::default().fg(self.theme.highlight())
        } else {
            Style::default().fg(self.theme.muted())
        };
        frame.render_widget(
            Paragraph::new(format!("{query}{cursor}"))
                .style(Style::default().fg(self.theme.text()))
                .block(self.block(" Search (/) ".to_owned()).border_style(search_style)),
            search,
        );

        let heading = format!(" {} ", title_case(T::NOUN));
        match list.view() {
            ListView::Loading => {
                let loading = format!("Loading {}...", T::NOUN);
                self.render_message(frame, content, heading, &[loading]);
            }
            ListView::Failed { message } => self.render_failure(frame, content, message),
            ListView::Empty => {
                self.render_message(frame, content, heading, &[empty_message(T::NOUN)]);
            }
            ListView::NoMatches { query } => self.render_message(
                frame,
                content,
                heading,
                &[no_matches_message(T::NOUN, query), NO_MATCHES_HINT.to_owned()],
            ),
            ListView::Populated { shown, total } => {
                let title = format!(
                    " {} ({}) ",
                    title_case(T::NOUN),
                    counter(shown.len(), total, T::NOUN)
                );
                let last = shown.len().saturating_sub(1);
                let rows = shown.iter().map(|item| Row::new(item.label())).collect();
                let mut state = ListState::default().with_selected(Some(ctx.selected.min(last)));
                let list = self.selectable(rows, title);
                frame.render_stateful_widget(list, content, &mut state);
            }
        }
    }

    fn render_post(
        &self,
        frame: &mut Frame,
        area: Rect,
        screen: &DetailScreen<impl Loader<Output = PostDetail>>,
    ) {
        let detail = match screen.view() {
            DetailView::Populated(detail) => detail,
            DetailView::Loading => {
                let loading = ["Loading post...".to_owned()];
                return self.render_message(frame, area, " Post ".to_owned(), &loading);
            }
            DetailView::Failed { message } => return self.render_failure(frame, area, message),
        };

        let mut lines = post_lines(&detail.post, self.theme);
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Comments ({})", detail.comments.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        if detail.comments.is_empty() {
            lines.push(Line::styled(
                "No comments yet.",
                Style::default().fg(self.theme.muted()),
            ));
        }
        for comment in &detail.comments {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::styled(
                    comment.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", comment.email),
                    Style::default().fg(self.theme.muted()),
                ),
            ]));
            lines.extend(comment.body.lines().map(|line| Line::raw(line.to_owned())));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(self.theme.text()))
                .block(self.block(format!(" Post #{} ", detail.post.id)))
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn render_user(
        &self,
        frame: &mut Frame,
        area: Rect,
        screen: &DetailScreen<impl Loader<Output = UserDetail>>,
        selected: usize,
    ) {
        let detail = match screen.view() {
            DetailView::Populated(detail) => detail,
            DetailView::Loading => {
                let loading = ["Loading user...".to_owned()];
                return self.render_message(frame, area, " User ".to_owned(), &loading);
            }
            DetailView::Failed { message } => return self.render_failure(frame, area, message),
        };

        let profile = profile_lines(&detail.user, self.theme);
        let [top, bottom] = Layout::vertical([
            Constraint::Length(profile.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .areas(area);
        frame.render_widget(
            Paragraph::new(profile)
                .style(Style::default().fg(self.theme.text()))
                .block(self.block(format!(" {} ", detail.user.name)))
                .wrap(Wrap { trim: false }),
            top,
        );

        let title = format!(" Posts ({}) ", detail.posts.len());
        if detail.posts.is_empty() {
            return self.render_message(frame, bottom, title, &["No posts yet.".to_owned()]);
        }
        let rows = detail.posts.iter().map(|post| Row::new(post.label())).collect();
        let last = detail.posts.len().saturating_sub(1);
        let mut state = ListState::default().with_selected(Some(selected.min(last)));
        frame.render_stateful_widget(self.selectable(rows, title), bottom, &mut state);
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, title: String, lines: &[String]) {
        let lines: Vec<Line<'_>> = lines.iter().map(|line| Line::raw(line.clone())).collect();
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(self.theme.muted()))
                .block(self.block(title))
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn render_failure(&self, frame: &mut Frame, area: Rect, message: &str) {
        let lines = vec![
            Line::raw(message.to_owned()),
            Line::raw(""),
            Line::styled(
                "Press r to retry",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(self.theme.error()))
                .block(
                    self.block(" Error ".to_owned())
                        .border_style(Style::default().fg(self.theme.error())),
                )
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

fn post_lines(post: &Post, theme: Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            post.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("by user {}", post.user_id),
            Style::default().fg(theme.muted()),
        ),
        Line::raw(""),
    ];
    lines.extend(post.body.lines().map(|line| Line::raw(line.to_owned())));
    lines
}

fn profile_lines(user: &User, theme: Theme) -> Vec<Line<'static>> {
    let address = &user.address;
    let company = &user.company;
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<9}"), Style::default().fg(theme.muted())),
            Span::raw(value),
        ])
    };
    vec![
        Line::styled(
            format!("[{}] @{}", user.initials(), user.username),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        field("Email", user.email.clone()),
        field("Phone", user.phone.clone()),
        field("Website", user.website.clone()),
        field(
            "Address",
            format!(
                "{}, {}, {} {}",
                address.street, address.suite, address.city, address.zipcode
            ),
        ),
        field("Company", format!("{} \"{}\"", company.name, company.catch_phrase)),
    ]
}

fn title_case(noun: &str) -> String {
    let mut chars = noun.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
