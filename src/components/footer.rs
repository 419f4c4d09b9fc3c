use leptos::prelude::*;

use crate::models::{instagram_link, mailto_link, CONTACT_EMAIL, INSTAGRAM_HANDLE};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="site-footer">
            <p class="footer-brand">"Nordic Soul Henna"</p>
            <nav class="footer-links">
                <a href=instagram_link(INSTAGRAM_HANDLE) target="_blank" rel="noopener noreferrer">"Instagram"</a>
                <a href=mailto_link(CONTACT_EMAIL, None)>"Email"</a>
            </nav>
            <p class="copyright">{format!("© {year} Nordic Soul Henna")}</p>
        </footer>
    }
}
