//! Writes a settled screen as plain text.
//!
//! Used by the one-shot commands. Output goes to any [`Write`] so the same code
//! serves stdout and tests.

use std::io::{self, Write};

use catalog_core::{Comment, Post, User};
use catalog_view::home::{DESTINATIONS, FEATURES, TAGLINE, TITLE};
use catalog_view::present::{NO_MATCHES_HINT, counter, empty_message, no_matches_message};
use catalog_view::{
    DetailView, ListItem, ListScreen, ListView, Loader, PostDetail, Screen, UserDetail,
};

/// Writes `screen` to `out`.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_screen(out: &mut impl Write, screen: &Screen) -> io::Result<()> {
    match screen {
        Screen::Home => write_home(out),
        Screen::Posts(list) => write_list(out, list),
        Screen::Users(list) => write_list(out, list),
        Screen::Post(detail) => write_detail(out, detail.view(), write_post_detail),
        Screen::User(detail) => write_detail(out, detail.view(), write_user_detail),
    }
}

fn write_home(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{TAGLINE}")?;
    writeln!(out)?;
    for destination in &DESTINATIONS {
        writeln!(
            out,
            "{title:<8} {route:<8} {description}",
            title = destination.title,
            route = destination.route.to_string(),
            description = destination.description
        )?;
    }
    writeln!(out)?;
    for feature in &FEATURES {
        writeln!(out, "* {}: {}", feature.title, feature.description)?;
    }
    Ok(())
}

fn write_list<T, L>(out: &mut impl Write, list: &ListScreen<L>) -> io::Result<()>
where
    T: ListItem,
    L: Loader<Key = (), Output = Vec<T>>,
{
    match list.view() {
        ListView::Loading => writeln!(out, "Loading {}...", T::NOUN),
        ListView::Failed { message } => write_failure(out, message),
        ListView::Empty => writeln!(out, "{}", empty_message(T::NOUN)),
        ListView::NoMatches { query } => {
            writeln!(out, "{}", no_matches_message(T::NOUN, query))?;
            writeln!(out, "{NO_MATCHES_HINT}")
        }
        ListView::Populated { shown, total } => {
            writeln!(out, "{}", counter(shown.len(), total, T::NOUN))?;
            writeln!(out)?;
            for item in shown {
                writeln!(out, "{}", item.label())?;
            }
            Ok(())
        }
    }
}

fn write_detail<T, W: Write>(
    out: &mut W,
    view: DetailView<'_, T>,
    write_populated: fn(&mut W, &T) -> io::Result<()>,
) -> io::Result<()> {
    match view {
        DetailView::Loading => writeln!(out, "Loading..."),
        DetailView::Failed { message } => write_failure(out, message),
        DetailView::Populated(detail) => write_populated(out, detail),
    }
}

/// Error panel.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_failure(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "Error: {message}")?;
    writeln!(out, "Run the command again to retry.")
}

fn write_post_detail<W: Write>(out: &mut W, detail: &PostDetail) -> io::Result<()> {
    write_post(out, &detail.post)?;
    writeln!(out)?;
    writeln!(out, "Comments ({})", detail.comments.len())?;
    if detail.comments.is_empty() {
        return writeln!(out, "No comments yet.");
    }
    for comment in &detail.comments {
        write_comment(out, comment)?;
    }
    Ok(())
}

fn write_post(out: &mut impl Write, post: &Post) -> io::Result<()> {
    writeln!(out, "{}", post.title)?;
    writeln!(out, "Post #{} by user {}", post.id, post.user_id)?;
    writeln!(out)?;
    writeln!(out, "{}", post.body)
}

fn write_comment(out: &mut impl Write, comment: &Comment) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "- {} <{}>", comment.name, comment.email)?;
    for line in comment.body.lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

fn write_user_detail<W: Write>(out: &mut W, detail: &UserDetail) -> io::Result<()> {
    write_profile(out, &detail.user)?;
    writeln!(out)?;
    writeln!(out, "Posts ({})", detail.posts.len())?;
    if detail.posts.is_empty() {
        return writeln!(out, "No posts yet.");
    }
    for post in &detail.posts {
        writeln!(out, "{}", post.label())?;
    }
    Ok(())
}

fn write_profile(out: &mut impl Write, user: &User) -> io::Result<()> {
    let address = &user.address;
    let company = &user.company;
    writeln!(out, "{} [{}]", user.name, user.initials())?;
    writeln!(out, "@{}", user.username)?;
    writeln!(out)?;
    writeln!(out, "Email:   {}", user.email)?;
    writeln!(out, "Phone:   {}", user.phone)?;
    writeln!(out, "Website: {}", user.website)?;
    writeln!(
        out,
        "Address: {}, {}, {} {}",
        address.street, address.suite, address.city, address.zipcode
    )?;
    writeln!(out, "Company: {} \"{}\"", company.name, company.catch_phrase)?;
    writeln!(out, "         {}", company.bs)
}
