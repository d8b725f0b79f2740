//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Legal Code Digitizer"</h1>
            <p class="subtitle">
                "Upload a labor code or ordinance as PDF. "
                "Its articles are extracted, validated and stored, then listed below for review."
            </p>
        </div>
    }
}
