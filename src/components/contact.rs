use leptos::prelude::*;

use crate::models::{
    instagram_link, mailto_link, whatsapp_link, BOOKING_MESSAGE, CONTACT_EMAIL, INSTAGRAM_HANDLE,
    WHATSAPP_DISPLAY, WHATSAPP_NUMBER,
};
use crate::server_fns::get_booking_embed_url;

#[component]
pub fn Contact() -> impl IntoView {
    let embed_url = Resource::new(|| (), |_| get_booking_embed_url());

    view! {
        <section id="contact" class="contact">
            <div class="section-header">
                <h2>"Get in Touch"</h2>
                <p class="subtitle">"Tell me about your occasion and let's create something beautiful"</p>
            </div>

            <div class="contact-cards">
                <a class="contact-card" href=instagram_link(INSTAGRAM_HANDLE) target="_blank" rel="noopener noreferrer">
                    <h3>"Instagram"</h3>
                    <p>"Latest designs and availability"</p>
                    <p class="contact-detail">{format!("@{INSTAGRAM_HANDLE}")}</p>
                </a>
                <a
                    class="contact-card"
                    href=whatsapp_link(WHATSAPP_NUMBER, BOOKING_MESSAGE)
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <h3>"WhatsApp"</h3>
                    <p>"Quick questions and bookings"</p>
                    <p class="contact-detail">{WHATSAPP_DISPLAY}</p>
                </a>
                <a class="contact-card" href=mailto_link(CONTACT_EMAIL, Some("Henna booking enquiry"))>
                    <h3>"Email"</h3>
                    <p>"Bridal consultations and events"</p>
                    <p class="contact-detail">{CONTACT_EMAIL}</p>
                </a>
            </div>

            <div class="booking">
                <h3>"Booking Information"</h3>
                <p>"Bridal consultations are free and can be held online or in person."</p>
                <p>"Travel to your venue is available for events and weddings."</p>
                <p>"Group bookings welcome for festivals, parties and photoshoots."</p>
                <p>"Please book bridal henna at least four weeks ahead."</p>

                <Suspense fallback=|| ()>
                    {move || {
                        embed_url.get().and_then(Result::ok).map(|src| view! {
                            <iframe
                                class="booking-calendar"
                                src=src
                                title="Schedule an appointment"
                            ></iframe>
                        }.attr("loading", "lazy"))
                    }}
                </Suspense>
            </div>
        </section>
    }
}
