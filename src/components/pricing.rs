use leptos::prelude::*;

use crate::models::{
    format_sek, whatsapp_link, DesignTier, BOOKING_MESSAGE, DESIGN_TIERS, PLACEMENTS, PRICE_MATRIX,
    WHATSAPP_NUMBER,
};

#[component]
pub fn Pricing() -> impl IntoView {
    // At most one card shows its back at a time.
    let (flipped, set_flipped) = signal(Option::<&'static str>::None);

    view! {
        <section id="pricing" class="pricing">
            <div class="section-header">
                <h2>"Pricing"</h2>
                <p class="subtitle">"Transparent prices for every occasion"</p>
                <p class="tagline">"Art that fits your moment"</p>
            </div>

            <div class="tier-grid">
                {DESIGN_TIERS
                    .iter()
                    .map(|tier| view! { <TierCard tier=*tier flipped=flipped set_flipped=set_flipped/> })
                    .collect_view()}
            </div>

            <h3 class="matrix-title">"Price by placement"</h3>
            <div class="matrix-wrapper">
                <table class="price-matrix">
                    <thead>
                        <tr>
                            <th>"Design"</th>
                            {PLACEMENTS.iter().map(|p| view! { <th>{*p}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {PRICE_MATRIX
                            .iter()
                            .map(|row| view! {
                                <tr>
                                    <td class="design">{row.design}</td>
                                    {row.prices_sek.iter().map(|p| view! { <td>{format_sek(*p)}</td> }).collect_view()}
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="pricing-cta">
                <a
                    class="btn btn-primary"
                    href=whatsapp_link(WHATSAPP_NUMBER, BOOKING_MESSAGE)
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Book on WhatsApp"
                </a>
            </div>
        </section>
    }
}

#[component]
fn TierCard(
    tier: DesignTier,
    flipped: ReadSignal<Option<&'static str>>,
    set_flipped: WriteSignal<Option<&'static str>>,
) -> impl IntoView {
    let id = tier.id;
    let is_flipped = move || flipped.get() == Some(id);

    view! {
        <div
            class="tier-card"
            class:flipped=is_flipped
            on:mouseenter=move |_| set_flipped.set(Some(id))
            on:mouseleave=move |_| set_flipped.set(None)
            on:click=move |_| set_flipped.update(|f| *f = if *f == Some(id) { None } else { Some(id) })
        >
            <div class="tier-front">
                <div class="tier-icon">
                    {if tier.icon_is_image() {
                        view! { <img src=tier.icon alt=format!("{} icon", tier.name)/> }.into_any()
                    } else {
                        view! { <span>{tier.icon}</span> }.into_any()
                    }}
                </div>
                <h4>{tier.name}</h4>
                <p class="tier-description">{tier.description}</p>
                <p class="tier-details">{tier.details}</p>
                <p class="starts-from">"Starts from"</p>
                <p class="tier-price">{format_sek(tier.price_sek)}</p>
            </div>
            <div class="tier-back">
                <img src=tier.image alt=format!("{} example", tier.name)/>
                <h4>{tier.name}</h4>
                <ul>
                    {tier.examples.iter().map(|e| view! { <li>{*e}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
