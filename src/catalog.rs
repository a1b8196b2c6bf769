//! Read-only movie catalog, loaded once at startup

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::models::Movie;
use crate::router;

const BUILTIN_CATALOG: &str = include_str!("../data/movies.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("movie \"{title}\" has id 0; ids must be positive")]
    InvalidId { title: String },
    #[error("duplicate movie id {0}")]
    DuplicateId(u32),
    #[error("movie {0} has an empty title")]
    EmptyTitle(u32),
}

/// Accepted catalog file layouts: a bare array or `{ "movies": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Movie>),
    Wrapped { movies: Vec<Movie> },
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build a catalog, checking that ids are positive and unique and titles non-empty
    pub fn new(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if movie.id == 0 {
                return Err(CatalogError::InvalidId { title: movie.title.clone() });
            }
            if !seen.insert(movie.id) {
                return Err(CatalogError::DuplicateId(movie.id));
            }
            if movie.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(movie.id));
            }
        }
        Ok(Self { movies })
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let movies = match serde_json::from_str(content)? {
            CatalogFile::List(movies) => movies,
            CatalogFile::Wrapped { movies } => movies,
        };
        Self::new(movies)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load from `path` if given, falling back to the built-in catalog on any failure
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::from_file(path) {
                Ok(catalog) => {
                    info!("Loaded {} movies from {}", catalog.len(), path.display());
                    return catalog;
                }
                Err(e) => warn!("{}; using built-in catalog", e),
            }
        }

        match Self::builtin() {
            Ok(catalog) => {
                info!("Loaded {} movies from built-in catalog", catalog.len());
                catalog
            }
            Err(e) => {
                error!("Built-in catalog is invalid: {}", e);
                Self::default()
            }
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn lookup(&self, id: &str) -> Option<&Movie> {
        router::lookup(&self.movies, id)
    }

    /// Language codes present in the catalog, in first-seen order
    pub fn languages(&self) -> Vec<&str> {
        distinct(self.iter().map(|m| m.language.as_str()))
    }

    /// Genre codes present in the catalog, in first-seen order
    pub fn genres(&self) -> Vec<&str> {
        distinct(self.iter().map(|m| m.genre.as_str()))
    }
}

fn distinct<'a>(codes: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    codes.filter(|code| seen.insert(*code)).collect()
}
