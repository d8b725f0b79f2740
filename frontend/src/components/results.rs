//! Results area: exactly one of prompt, busy indicator, error banner or
//! article list, chosen by [`ReviewState::panel`].

use leptos::*;
use web_sys::File;

use crate::components::{ArticleCard, BusyIndicator};
use crate::state::{Panel, Phase, ReviewState};
use crate::types::ArticleRecord;

#[component]
pub fn ResultsSection(review: RwSignal<ReviewState<File>>) -> impl IntoView {
    let panel = create_memo(move |_| review.with(|state| state.panel()));
    let articles = create_memo(move |_| review.with(|state| state.articles().to_vec()));
    let just_stored = create_memo(move |_| review.with(|state| *state.phase() == Phase::Success));

    view! {
        <section class="results-section">
            <h2 class="results-title">"Validated Articles"</h2>
            {move || match panel.get() {
                Panel::EmptyPrompt => view! {
                    <p class="empty-prompt">"No articles extracted yet."</p>
                }.into_view(),
                Panel::Busy => view! { <BusyIndicator/> }.into_view(),
                Panel::ErrorBanner(message) => view! {
                    <div class="error-banner" role="alert">
                        <span class="error-label">"Error"</span>
                        <p class="error-text">{message}</p>
                    </div>
                }.into_view(),
                Panel::ArticleList => view! {
                    <ArticleList articles=articles just_stored=just_stored/>
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn ArticleList(articles: Memo<Vec<ArticleRecord>>, just_stored: Memo<bool>) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(None::<usize>);

    view! {
        <Show
            when=move || just_stored.get()
            fallback=|| view! { }
        >
            <div class="success-banner">
                {move || format!("Success! {} articles stored.", articles.with(Vec::len))}
            </div>
        </Show>
        <div class="article-list">
            {move || articles.get().into_iter().enumerate().map(|(index, article)| view! {
                <ArticleCard
                    index=index
                    article=article
                    expanded=expanded
                    set_expanded=set_expanded
                />
            }).collect_view()}
        </div>
    }
}
