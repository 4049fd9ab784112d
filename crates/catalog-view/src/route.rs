use core::fmt;
use core::str::FromStr;

use catalog_core::{Error, PostId, UserId};

/// The five navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// `/`
    #[default]
    Home,
    /// `/posts`
    Posts,
    /// `/posts/:id`
    Post(PostId),
    /// `/users`
    Users,
    /// `/users/:id`
    User(UserId),
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Self::Home),
            ["posts"] => Ok(Self::Posts),
            ["users"] => Ok(Self::Users),
            ["posts", id] => parse_id(id, path).map(Self::Post),
            ["users", id] => parse_id(id, path).map(Self::User),
            _ => Err(Error::InvalidRoute(path.to_owned())),
        }
    }
}

fn parse_id(segment: &str, path: &str) -> Result<u64, Error> {
    segment
        .parse()
        .map_err(|_| Error::InvalidRoute(path.to_owned()))
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(formatter, "/"),
            Self::Posts => write!(formatter, "/posts"),
            Self::Post(id) => write!(formatter, "/posts/{id}"),
            Self::Users => write!(formatter, "/users"),
            Self::User(id) => write!(formatter, "/users/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("/posts".parse::<Route>().unwrap(), Route::Posts);
        assert_eq!("posts/".parse::<Route>().unwrap(), Route::Posts);
        assert_eq!("/posts/12".parse::<Route>().unwrap(), Route::Post(12));
        assert_eq!("/users".parse::<Route>().unwrap(), Route::Users);
        assert_eq!("/users/0".parse::<Route>().unwrap(), Route::User(0));
    }

    #[test]
    fn test_reject_bad_routes() {
        for path in ["/posts/abc", "/posts/-1", "/comments", "/users/1/posts"] {
            let error = path.parse::<Route>().unwrap_err();
            assert!(matches!(error, Error::InvalidRoute(_)), "{path} should be rejected");
        }
    }

    #[test]
    fn test_display_matches_parse() {
        for route in [Route::Home, Route::Posts, Route::Post(3), Route::Users, Route::User(9)] {
            assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
        }
    }
}
