use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Article identifier as emitted by the search endpoint. The backend is loose
/// about this field and serializes it either as a JSON number or a string.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug)]
#[serde(untagged)]
pub enum ArticleId {
    Number(i64),
    Text(String),
}

impl Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Number(n) => write!(f, "{n}"),
            ArticleId::Text(t) => write!(f, "{t}"),
        }
    }
}

/// One row of the `/api/search` response. The endpoint returns whole article
/// records; everything except these fields is ignored on deserialization.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SearchResult {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl SearchResult {
    /// Link target for the article detail page. Built client side and not
    /// validated against the backend.
    pub fn article_url(&self) -> String {
        format!("/article/{}", self.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn id_accepts_numbers_and_strings() {
        let numeric: SearchResult =
            serde_json::from_str(r#"{"id":1,"title":"Foo","author":null}"#).unwrap();
        assert_eq!(numeric.id, ArticleId::Number(1));
        assert_eq!(numeric.article_url(), "/article/1");

        let text: SearchResult =
            serde_json::from_str(r#"{"id":"2301.00001","title":"Bar","author":"Jane"}"#).unwrap();
        assert_eq!(text.id, ArticleId::Text("2301.00001".to_string()));
        assert_eq!(text.article_url(), "/article/2301.00001");
    }

    #[test]
    fn author_field_is_optional() {
        let missing: SearchResult = serde_json::from_str(r#"{"id":2,"title":"Baz"}"#).unwrap();
        assert_eq!(missing.author, None);
    }

    #[test]
    fn extra_record_fields_are_ignored() {
        let result: SearchResult = serde_json::from_str(
            r#"{"id":"a1","title":"Qux","author":"Jo","abstract":"...","field":"ml","year":2023}"#,
        )
        .unwrap();
        assert_eq!(result.title, "Qux");
    }

    #[test]
    fn empty_response_is_valid() {
        let results: Vec<SearchResult> = serde_json::from_str("[]").unwrap();
        assert!(results.is_empty());
    }
}
