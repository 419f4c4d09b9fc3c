use leptos::prelude::*;

const PETALS: usize = 12;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <h1>"Nordic Soul Henna"</h1>
            <p class="subtitle">"Contemporary henna artistry rooted in tradition"</p>
            <div class="hero-mandala">
                <Mandala/>
                <span class="mehndi">"Mehndi"</span>
            </div>
            <p class="description">
                "Natural henna designs for weddings, festivals and everyday celebrations, "
                "blending Indian heritage with Scandinavian calm."
            </p>
            <div class="cta-buttons">
                <a href="#portfolio" class="btn btn-primary">"View Portfolio"</a>
                <a href="#contact" class="btn btn-secondary">"Book a Session"</a>
            </div>
        </section>
    }
}

/// Decorative mandala; rotation is left to the stylesheet.
#[component]
pub fn Mandala() -> impl IntoView {
    view! {
        <svg class="mandala" viewBox="0 0 200 200" aria-hidden="true">
            <circle cx="100" cy="100" r="90" fill="none" stroke="currentColor" stroke-width="1"/>
            <circle cx="100" cy="100" r="18" fill="none" stroke="currentColor" stroke-width="1.5"/>
            {(0..PETALS)
                .map(|i| {
                    let angle = i * 360 / PETALS;
                    view! {
                        <path
                            d="M100,82 Q112,50 100,20 Q88,50 100,82"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="1.2"
                            transform=format!("rotate({angle} 100 100)")
                        />
                    }
                })
                .collect_view()}
        </svg>
    }
}
