//! Article cards and their expanded detail view.

use leptos::*;

use crate::types::ArticleRecord;

/// Characters of body text shown on a collapsed card.
const PREVIEW_CHARS: usize = 280;

/// Display data for one collapsed card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardModel {
    pub heading: String,
    pub title: String,
    pub category_badge: String,
    pub page_badge: String,
    pub repealed: bool,
    pub formerly: Option<String>,
    pub preview: String,
}

impl CardModel {
    pub fn from_article(article: &ArticleRecord) -> Self {
        let heading = if article.article_number.is_empty() {
            "Article".to_string()
        } else {
            format!("Article {}", article.article_number)
        };

        Self {
            heading,
            title: article.title.clone(),
            category_badge: article.category().to_string(),
            page_badge: article.page_number().to_string(),
            repealed: article.is_repealed,
            formerly: article
                .is_renumbered()
                .then(|| article.old_article_number.clone())
                .flatten(),
            preview: preview(&article.content, PREVIEW_CHARS),
        }
    }
}

/// First `max_chars` characters of `content`, ellipsized when cut.
pub fn preview(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", content[..cut].trim_end()),
        None => content.to_string(),
    }
}

/// Every field of an article, in display order, skipping absent ones.
pub fn detail_fields(article: &ArticleRecord) -> Vec<(&'static str, String)> {
    let mut fields = vec![("article_number", article.article_number.clone())];
    if let Some(old) = &article.old_article_number {
        fields.push(("old_article_number", old.clone()));
    }
    fields.push(("is_repealed", article.is_repealed.to_string()));
    fields.push(("corpus_category", article.category().to_string()));
    fields.push(("page_number", article.page_number().to_string()));

    if let Some(metadata) = &article.metadata {
        let optional = [
            ("source_file", &metadata.source_file),
            ("jurisdiction", &metadata.jurisdiction),
            ("file_type", &metadata.file_type),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                fields.push((label, value.clone()));
            }
        }
    }
    if let Some(timestamp) = &article.timestamp {
        fields.push(("timestamp", timestamp.clone()));
    }
    fields
}

#[component]
pub fn ArticleCard(
    index: usize,
    article: ArticleRecord,
    expanded: ReadSignal<Option<usize>>,
    set_expanded: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let card = CardModel::from_article(&article);
    let is_expanded = move || expanded.get() == Some(index);

    let toggle_expand = move |_| {
        set_expanded.update(|current| {
            *current = if *current == Some(index) { None } else { Some(index) };
        });
    };

    view! {
        <div class="article-card" class:expanded=is_expanded class:repealed=card.repealed>
            <div class="article-header" on:click=toggle_expand>
                <div class="article-heading">
                    {move || if is_expanded() { "▼ " } else { "▶ " }}
                    {card.heading}
                </div>
                <h3 class="article-title">{card.title}</h3>
            </div>

            <div class="article-badges">
                <span class="badge category-badge">{card.category_badge}</span>
                <span class="badge page-badge">
                    <span class="badge-label">"Page "</span>
                    {card.page_badge}
                </span>
                {card.repealed.then(|| view! {
                    <span class="badge repealed-badge">"Repealed"</span>
                })}
                {card.formerly.map(|old| view! {
                    <span class="badge renumbered-badge">"formerly " {old}</span>
                })}
            </div>

            <Show
                when=is_expanded
                fallback=move || view! { <p class="article-preview">{card.preview.clone()}</p> }
            >
                <ArticleDetail article=article.clone()/>
            </Show>
        </div>
    }
}

#[component]
pub fn ArticleDetail(article: ArticleRecord) -> impl IntoView {
    let fields = detail_fields(&article);

    view! {
        <div class="article-detail">
            <div class="article-content">{article.content}</div>
            <div class="article-fields">
                {fields.into_iter().map(|(label, value)| view! {
                    <div class="article-field">
                        <div class="field-label">{label}</div>
                        <div class="field-value">{value}</div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scope_article() -> ArticleRecord {
        serde_json::from_value(json!({
            "article_number": "1",
            "title": "Scope",
            "content": "...",
            "is_repealed": false,
            "metadata": {"corpus_category": "General", "page_number": 3}
        }))
        .unwrap()
    }

    #[test]
    fn test_card_for_scope_article() {
        let card = CardModel::from_article(&scope_article());
        assert_eq!(card.heading, "Article 1");
        assert_eq!(card.title, "Scope");
        assert_eq!(card.category_badge, "General");
        assert_eq!(card.page_badge, "3");
        assert!(!card.repealed);
        assert_eq!(card.formerly, None);
    }

    #[test]
    fn test_card_badges_for_renumbered_repealed() {
        let article: ArticleRecord = serde_json::from_value(json!({
            "article_number": 300,
            "old_article_number": 286,
            "title": "When employment not deemed terminated",
            "content": "(Repealed by R.A. 10151)",
            "is_repealed": true
        }))
        .unwrap();
        let card = CardModel::from_article(&article);
        assert_eq!(card.heading, "Article 300");
        assert!(card.repealed);
        assert_eq!(card.formerly.as_deref(), Some("286"));
        assert_eq!(card.category_badge, "General");
        assert_eq!(card.page_badge, "0");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("héllo wörld", 5), "héllo…");
        assert_eq!(preview("abc def", 4), "abc…");
    }

    #[test]
    fn test_detail_fields_skip_absent_metadata() {
        let fields = detail_fields(&scope_article());
        let labels: Vec<&str> = fields.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            ["article_number", "is_repealed", "corpus_category", "page_number"]
        );

        let article: ArticleRecord = serde_json::from_value(json!({
            "section_id": "PREAMBLE",
            "title": "Introductory Provisions",
            "content": "...",
            "is_repealed": false,
            "metadata": {"source_file": "code.pdf", "jurisdiction": "PH", "corpus_category": "meta"},
            "timestamp": "2024-05-01T10:00:00"
        }))
        .unwrap();
        let fields = detail_fields(&article);
        assert!(fields.contains(&("jurisdiction", "PH".to_string())));
        assert!(fields.contains(&("source_file", "code.pdf".to_string())));
        assert_eq!(fields.last(), Some(&("timestamp", "2024-05-01T10:00:00".to_string())));
    }
}
