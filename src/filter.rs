//! Multi-field catalog filter
//!
//! Filtering is a pure function of (movies, criteria) and runs on every
//! frame of the catalog view, so it holds no state between calls.

use crate::models::{Movie, ALL};

/// A language or genre selector: either the `ALL` sentinel or an exact code
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    All,
    Code(String),
}

impl Selector {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Selector::All
        } else {
            Selector::Code(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selector::All => ALL,
            Selector::Code(code) => code,
        }
    }

    /// Case-sensitive: "en" does not select "EN"
    pub fn accepts(&self, code: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Code(wanted) => wanted == code,
        }
    }
}

/// User-chosen filter values. Replaced wholesale on every input change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub title: String,
    pub min_rating: Option<f64>,
    pub language: Selector,
    pub genre: Selector,
}

impl FilterCriteria {
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self { title: title.into(), ..self }
    }

    pub fn with_min_rating(self, min_rating: Option<f64>) -> Self {
        Self {
            min_rating: min_rating.filter(|r| r.is_finite() && *r != 0.0),
            ..self
        }
    }

    pub fn with_language(self, language: Selector) -> Self {
        Self { language, ..self }
    }

    pub fn with_genre(self, genre: Selector) -> Self {
        Self { genre, ..self }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        let needle = self.title.to_lowercase();
        let title_ok = needle.is_empty() || movie.title.to_lowercase().contains(&needle);
        let rating_ok = self.min_rating.map_or(true, |min| movie.rating >= min);

        title_ok && rating_ok && self.language.accepts(&movie.language) && self.genre.accepts(&movie.genre)
    }
}

/// Movies satisfying every predicate of `criteria`, in catalog order
pub fn filter_movies<'a>(movies: &'a [Movie], criteria: &FilterCriteria) -> Vec<&'a Movie> {
    movies.iter().filter(|movie| criteria.matches(movie)).collect()
}

/// Parse the minimum-rating text box.
///
/// Blank, non-numeric and non-finite input means "no minimum". Zero also
/// means "no minimum", matching how the rating box has always behaved;
/// `FilterCriteria::with_min_rating` applies the same rule.
pub fn parse_min_rating(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && *r != 0.0)
}

/// Selector choices: the fixed options followed by any extra codes the catalog carries
pub fn selector_options(base: &[(&str, &str)], catalog_codes: &[&str]) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = base
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect();

    for code in catalog_codes {
        if !options.iter().any(|(c, _)| c == code) {
            options.push((code.to_string(), code.to_string()));
        }
    }
    options
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
