use gazette_api_types::search::SearchResult;
use leptos::prelude::*;

pub(crate) fn author_label(author: Option<&str>) -> &str {
    match author {
        Some(a) if !a.trim().is_empty() => a,
        _ => "Unknown Author",
    }
}

/// Dropdown body: one row per result in the order the backend returned them,
/// or a single placeholder row when nothing matched.
#[component]
pub fn SearchResultList(results: Vec<SearchResult>) -> impl IntoView {
    if results.is_empty() {
        view! {
            <div class="p-4 text-sm text-[color:var(--color-text-muted)] text-center">
                "No results found"
            </div>
        }
        .into_any()
    } else {
        results
            .into_iter()
            .map(|result| view! { <SearchResultRow result /> })
            .collect_view()
            .into_any()
    }
}

#[component]
pub fn SearchResultRow(result: SearchResult) -> impl IntoView {
    let href = result.article_url();
    let author = author_label(result.author.as_deref()).to_string();
    view! {
        <a
            href=href
            class="block p-3 hover:bg-[color:var(--color-background)] transition-colors border-b border-[color:var(--color-outline)] last:border-0 text-left"
        >
            <div class="font-semibold text-sm line-clamp-1">{result.title}</div>
            <div class="text-xs text-[color:var(--color-text-muted)] mt-0.5 line-clamp-1">
                {author}
            </div>
        </a>
    }
}

#[cfg(test)]
mod test {
    use super::author_label;

    #[test]
    fn author_fallback() {
        assert_eq!(author_label(Some("Jane")), "Jane");
        assert_eq!(author_label(None), "Unknown Author");
        assert_eq!(author_label(Some("")), "Unknown Author");
        assert_eq!(author_label(Some("   ")), "Unknown Author");
    }
}
