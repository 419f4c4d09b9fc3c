use leptos::prelude::*;

use crate::models::Testimonial;
use crate::server_fns::get_testimonials;
use crate::services::catalog::resolve_fetch;
use crate::services::fallback::fallback_testimonials;

#[component]
pub fn Testimonials() -> impl IntoView {
    let testimonials = Resource::new(|| (), |_| get_testimonials());

    let skeleton = || {
        view! {
            <div class="testimonial-grid" aria-busy="true">
                {(0..3).map(|_| view! { <div class="testimonial-card skeleton"></div> }).collect_view()}
            </div>
        }
    };

    view! {
        <section id="testimonials" class="testimonials">
            <Suspense fallback=skeleton>
                {move || {
                    resolve_fetch(testimonials.get(), fallback_testimonials).map(|loaded| {
                        let items = loaded.items;
                        (!items.is_empty()).then(|| view! {
                            <div class="section-header">
                                <h2>"Kind Words"</h2>
                                <p class="subtitle">"What clients say about their henna experience"</p>
                            </div>
                            <div class="testimonial-grid">
                                {items
                                    .into_iter()
                                    .map(|t| view! { <TestimonialCard testimonial=t/> })
                                    .collect_view()}
                            </div>
                            <p class="tagline">"Every design tells a story"</p>
                        })
                    })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initials = testimonial.initials();
    let stars = testimonial.stars();

    view! {
        <article class="testimonial-card">
            <span class="quote-mark">"“"</span>
            <p class="testimonial-text">{testimonial.testimonial_text}</p>
            <div class="stars" aria-label=format!("{} out of 5", testimonial.rating.min(5))>
                {stars
                    .into_iter()
                    .map(|filled| view! { <span class="star" class:filled=filled>"★"</span> })
                    .collect_view()}
            </div>
            <div class="testimonial-author">
                {match testimonial.image_url {
                    Some(src) => view! {
                        <img class="avatar" src=src alt=testimonial.client_name.clone()/>
                    }
                    .into_any(),
                    None => view! { <div class="avatar initials">{initials}</div> }.into_any(),
                }}
                <div>
                    <p class="client-name">{testimonial.client_name}</p>
                    <p class="occasion">{testimonial.occasion}</p>
                </div>
            </div>
        </article>
    }
}
