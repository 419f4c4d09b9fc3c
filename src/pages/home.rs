use leptos::prelude::*;

use crate::components::{About, CareGuide, Contact, Gallery, Hero, Pricing, Testimonials};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Hero/>
            <Gallery/>
            <About/>
            <CareGuide/>
            <Pricing/>
            <Testimonials/>
            <Contact/>
        </div>
    }
}
