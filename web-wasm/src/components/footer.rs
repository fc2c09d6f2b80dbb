//! Footer component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-title">"Team S101"</div>
            <div class="footer-credits">
                "Aitbayev Aslanbek, Kaltayev Ernur, Nadyrkhan Shyntemir"
            </div>
        </footer>
    }
}
