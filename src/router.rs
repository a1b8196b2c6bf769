//! Identifier lookup and catalog/detail navigation

use std::fmt;

use log::debug;

use crate::catalog::Catalog;
use crate::models::Movie;

const DETAIL_PREFIX: &str = "/movie/";

/// Find the movie whose id, written as text, equals `id` exactly.
///
/// No trimming or numeric parsing: "01" and " 1" do not find movie 1.
pub fn lookup<'a>(movies: &'a [Movie], id: &str) -> Option<&'a Movie> {
    movies.iter().find(|movie| movie.id.to_string() == id)
}

/// What the detail view renders
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailOutcome<'a> {
    Found(&'a Movie),
    NotFound,
}

impl<'a> DetailOutcome<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, DetailOutcome::Found(_))
    }
}

impl<'a> From<Option<&'a Movie>> for DetailOutcome<'a> {
    fn from(movie: Option<&'a Movie>) -> Self {
        movie.map_or(DetailOutcome::NotFound, DetailOutcome::Found)
    }
}

/// Navigable routes: `/` and `/movie/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Catalog,
    Detail(String),
}

impl Route {
    /// Returns `None` for paths that name neither view
    pub fn parse(path: &str) -> Option<Self> {
        if path.is_empty() || path == "/" {
            return Some(Route::Catalog);
        }

        let rest = path.strip_prefix(DETAIL_PREFIX)?;
        let id = rest.strip_suffix('/').unwrap_or(rest);
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Route::Detail(id.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::Detail(id) => format!("{}{}", DETAIL_PREFIX, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A resolved route, ready to render
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Catalog,
    Detail(DetailOutcome<'a>),
}

pub fn resolve<'a>(catalog: &'a Catalog, route: &Route) -> View<'a> {
    match route {
        Route::Catalog => View::Catalog,
        Route::Detail(id) => View::Detail(DetailOutcome::from(catalog.lookup(id))),
    }
}

/// Current route plus the history needed for "back".
/// Only explicit user actions move it.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty() || self.current != Route::Catalog
    }

    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        debug!("Navigate {} -> {}", self.current, route);
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    pub fn open_detail(&mut self, id: impl Into<String>) {
        self.navigate(Route::Detail(id.into()));
    }

    /// Pop to the previous route. A detail view with no history (deep link)
    /// goes back to the catalog. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        let target = match self.history.pop() {
            Some(route) => route,
            None if self.current != Route::Catalog => Route::Catalog,
            None => return false,
        };
        debug!("Back {} -> {}", self.current, target);
        self.current = target;
        true
    }

    pub fn go_home(&mut self) {
        self.history.clear();
        self.current = Route::Catalog;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                {"id": 1, "title": "Dune", "rating": 8, "language": "EN", "genre": "action"},
                {"id": 2, "title": "Komedy", "rating": 5, "language": "AR", "genre": "comedy"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_found() {
        let catalog = catalog();
        assert_eq!(catalog.lookup("2").map(|m| m.title.as_str()), Some("Komedy"));
    }

    #[test]
    fn test_lookup_not_found() {
        let catalog = catalog();
        assert!(catalog.lookup("3").is_none());
        assert!(catalog.lookup("").is_none());
        assert!(catalog.lookup("abc").is_none());
        assert!(catalog.lookup("01").is_none());
        assert!(catalog.lookup(" 1").is_none());
        assert!(catalog.lookup("1.0").is_none());
        assert!(lookup(&[], "1").is_none());
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Some(Route::Catalog));
        assert_eq!(Route::parse(""), Some(Route::Catalog));
        assert_eq!(Route::parse("/movie/3"), Some(Route::Detail("3".to_string())));
        assert_eq!(Route::parse("/movie/3/"), Some(Route::Detail("3".to_string())));
        assert_eq!(Route::parse("/movie/abc"), Some(Route::Detail("abc".to_string())));
        assert_eq!(Route::parse("/movie/"), None);
        assert_eq!(Route::parse("/movie/1/extra"), None);
        assert_eq!(Route::parse("/movies"), None);
    }

    #[test]
    fn test_route_path() {
        assert_eq!(Route::Catalog.path(), "/");
        assert_eq!(Route::Detail("7".to_string()).to_string(), "/movie/7");
    }

    #[test]
    fn test_resolve() {
        let catalog = catalog();
        assert_eq!(resolve(&catalog, &Route::Catalog), View::Catalog);

        match resolve(&catalog, &Route::Detail("1".to_string())) {
            View::Detail(DetailOutcome::Found(movie)) => assert_eq!(movie.title, "Dune"),
            other => panic!("unexpected view {:?}", other),
        }

        assert_eq!(
            resolve(&catalog, &Route::Detail("3".to_string())),
            View::Detail(DetailOutcome::NotFound)
        );
        assert_eq!(
            resolve(&Catalog::default(), &Route::Detail("1".to_string())),
            View::Detail(DetailOutcome::NotFound)
        );
    }

    #[test]
    fn test_navigator_open_and_back() {
        let mut nav = Navigator::default();
        assert_eq!(nav.current(), &Route::Catalog);
        assert!(!nav.can_go_back());
        assert!(!nav.back());

        nav.open_detail("1");
        assert_eq!(nav.current(), &Route::Detail("1".to_string()));
        assert!(nav.can_go_back());

        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Catalog);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_navigator_same_route_is_noop() {
        let mut nav = Navigator::default();
        nav.navigate(Route::Catalog);
        assert!(!nav.can_go_back());

        nav.open_detail("2");
        nav.open_detail("2");
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Catalog);
    }

    #[test]
    fn test_navigator_deep_link_back() {
        let mut nav = Navigator::new(Route::Detail("5".to_string()));
        assert!(nav.can_go_back());
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Catalog);
    }

    #[test]
    fn test_navigator_go_home() {
        let mut nav = Navigator::default();
        nav.open_detail("1");
        nav.open_detail("2");
        nav.go_home();
        assert_eq!(nav.current(), &Route::Catalog);
        assert!(!nav.can_go_back());
    }

    fn movie(id: u32, title: String) -> Movie {
        Movie {
            id,
            title,
            image_url: String::new(),
            stream_url: String::new(),
            download_url: String::new(),
            rating: 5.0,
            description: String::new(),
            language: "EN".to_string(),
            genre: "action".to_string(),
        }
    }

    // Unique ids below 1000, in arbitrary order
    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        proptest::collection::hash_set(1..1000u32, 0..20).prop_map(|ids| {
            let movies = ids.into_iter().map(|id| movie(id, format!("Movie {}", id))).collect();
            Catalog::new(movies).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_lookup_finds_every_movie_by_its_id(catalog in arb_catalog()) {
            for m in catalog.iter() {
                prop_assert_eq!(catalog.lookup(&m.id.to_string()), Some(m));
                prop_assert_eq!(lookup(catalog.movies(), &m.id.to_string()), Some(m));
            }
        }

        #[test]
        fn prop_lookup_misses_unknown_ids(catalog in arb_catalog(), missing in 1000..2000u32) {
            let id = missing.to_string();
            prop_assert!(catalog.lookup(&id).is_none());
            prop_assert!(lookup(&[], &id).is_none());
            prop_assert_eq!(
                resolve(&catalog, &Route::Detail(id)),
                View::Detail(DetailOutcome::NotFound)
            );
        }
    }
}
