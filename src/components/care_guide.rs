use leptos::prelude::*;

use crate::models::{toggle_expanded, CARE_STEPS, FAQS};

#[component]
pub fn CareGuide() -> impl IntoView {
    let (expanded, set_expanded) = signal(Option::<usize>::None);

    view! {
        <section id="care" class="care-guide">
            <div class="section-header">
                <h2>"Henna Care Guide"</h2>
                <p class="subtitle">"Simple steps for a deep, long-lasting stain"</p>
            </div>

            <div class="care-steps">
                {CARE_STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| view! {
                        <div class="care-step">
                            <span class="step-number">{i + 1}</span>
                            <h3>{step.title}</h3>
                            <p class="step-description">{step.description}</p>
                            <ul>
                                {step.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>

            <h3 class="faq-title">"Frequently Asked Questions"</h3>
            <div class="faq-list">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(i, faq)| {
                        let (question, answer) = (faq.question, faq.answer);
                        let open = move || expanded.get() == Some(i);
                        view! {
                            <div class="faq-item" class:open=open>
                                <button
                                    class="faq-question"
                                    aria-expanded=move || open().to_string()
                                    on:click=move |_| set_expanded.update(|e| *e = toggle_expanded(*e, i))
                                >
                                    {question}
                                    <span class="chevron">"⌄"</span>
                                </button>
                                <Show when=open>
                                    <p class="faq-answer">{answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
