use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="about-image">
                <img src="/assets/about/artist-at-work.jpg" alt="Supriya applying henna" loading="lazy"/>
                <p class="about-badge">"8+ years of henna artistry"</p>
            </div>
            <div class="about-text">
                <h2>"About"</h2>
                <p class="artist-name">"Supriya Gupta"</p>
                <p>
                    "I grew up surrounded by the scent of fresh henna at every family celebration, "
                    "and learned the craft from the women in my family."
                </p>
                <p>
                    "Living in Scandinavia taught me the beauty of restraint. My designs pair "
                    "traditional Indian motifs with clean Nordic lines."
                </p>
                <p>"I mix every batch of paste myself from natural henna powder and essential oils."</p>
                <p class="location">"Based in Stockholm, available for travel"</p>
            </div>
        </section>
    }
}
