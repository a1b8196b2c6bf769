//! Data models for the movie catalog

use serde::{Deserialize, Serialize};

/// Selector value meaning "no constraint on this field"
pub const ALL: &str = "ALL";

/// Language selector choices offered in the catalog view: (code, label)
pub const LANGUAGE_OPTIONS: &[(&str, &str)] = &[
    (ALL, "All"),
    ("EN", "English"),
    ("AR", "Arabic"),
];

/// Genre selector choices offered in the catalog view: (code, label)
pub const GENRE_OPTIONS: &[(&str, &str)] = &[
    (ALL, "All"),
    ("action", "Action"),
    ("comedy", "Comedy"),
];

/// A single catalog entry. Immutable once the catalog is loaded.
///
/// Field aliases accept the key names used by older catalog exports
/// (`image`, `rate`, `decr`, `stream`, `lang`, `downlaod`) as well as
/// camelCase variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    #[serde(default, alias = "image", alias = "imageUrl")]
    pub image_url: String,
    #[serde(default, alias = "stream", alias = "streamUrl")]
    pub stream_url: String,
    #[serde(default, alias = "download", alias = "downlaod", alias = "downloadUrl")]
    pub download_url: String,
    #[serde(default, alias = "rate")]
    pub rating: f64,
    #[serde(default, alias = "decr")]
    pub description: String,
    #[serde(alias = "lang")]
    pub language: String,
    pub genre: String,
}

impl Movie {
    /// Route path of this movie's detail view
    pub fn detail_path(&self) -> String {
        format!("/movie/{}", self.id)
    }

    pub fn rating_label(&self) -> String {
        format!("Rating: {}", self.rating)
    }

    /// "EN | action" style tag line shown on the detail view
    pub fn tag_line(&self) -> String {
        format!("{} | {}", self.language, self.genre)
    }
}

/// Human readable label for a selector code, falling back to the code itself
pub fn option_label<'a>(options: &'a [(&'a str, &'a str)], code: &'a str) -> &'a str {
    options
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_keys() {
        let json = r#"{
            "id": 9,
            "title": "Legacy",
            "image": "http://img/9.jpg",
            "rate": 6.5,
            "decr": "old export",
            "stream": "http://s/9",
            "lang": "EN",
            "genre": "comedy",
            "downlaod": "http://d/9"
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 9);
        assert_eq!(movie.image_url, "http://img/9.jpg");
        assert_eq!(movie.rating, 6.5);
        assert_eq!(movie.description, "old export");
        assert_eq!(movie.stream_url, "http://s/9");
        assert_eq!(movie.language, "EN");
        assert_eq!(movie.download_url, "http://d/9");
    }

    #[test]
    fn test_deserialize_camel_case_keys() {
        let json = r#"{"id": 1, "title": "A", "imageUrl": "i", "streamUrl": "s",
            "downloadUrl": "d", "rating": 1, "language": "AR", "genre": "action"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.image_url, "i");
        assert_eq!(movie.stream_url, "s");
        assert_eq!(movie.download_url, "d");
        assert_eq!(movie.description, "");
    }

    #[test]
    fn test_labels() {
        let json = r#"{"id": 3, "title": "T", "rating": 8, "language": "EN", "genre": "action"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.detail_path(), "/movie/3");
        assert_eq!(movie.rating_label(), "Rating: 8");
        assert_eq!(movie.tag_line(), "EN | action");
    }

    #[test]
    fn test_option_label() {
        assert_eq!(option_label(LANGUAGE_OPTIONS, "AR"), "Arabic");
        assert_eq!(option_label(GENRE_OPTIONS, ALL), "All");
        assert_eq!(option_label(GENRE_OPTIONS, "drama"), "drama");
    }
}
