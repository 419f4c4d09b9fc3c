use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos::web_sys;

#[cfg(feature = "hydrate")]
use crate::services::scroll::{active_section, is_scrolled, should_collapse};

const HOME: &str = "hero";

const SECTIONS: [(&str, &str); 6] = [
    ("portfolio", "Portfolio"),
    ("about", "About"),
    ("care", "Care Guide"),
    ("pricing", "Pricing"),
    ("testimonials", "Testimonials"),
    ("contact", "Get in Touch"),
];

#[allow(unused_variables)]
fn scroll_to(id: &str, ev: &leptos::ev::MouseEvent) {
    // Without scripting the plain anchor jump still works.
    #[cfg(feature = "hydrate")]
    {
        use ::web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        ev.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Viewport-relative top of every tracked section, in page order.
#[cfg(feature = "hydrate")]
fn section_tops() -> Vec<(&'static str, f64)> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    std::iter::once(HOME)
        .chain(SECTIONS.iter().map(|&(id, _)| id))
        .filter_map(|id| {
            document
                .get_element_by_id(id)
                .map(|el| (id, el.get_bounding_client_rect().y()))
        })
        .collect()
}

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    #[allow(unused_variables)]
    let (scrolled, set_scrolled) = signal(false);
    #[allow(unused_variables)]
    let (active, set_active) = signal(HOME);

    #[cfg(feature = "hydrate")]
    {
        // Scroll position the open menu is measured from.
        let anchor_y = StoredValue::new(0.0_f64);
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let y = window.scroll_y().unwrap_or_default();
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();

            if scrolled.get_untracked() != is_scrolled(y) {
                set_scrolled.set(is_scrolled(y));
            }
            if let Some(id) = active_section(&section_tops(), viewport) {
                if active.get_untracked() != id {
                    set_active.set(id);
                }
            }

            let open = menu_open.get_untracked();
            if should_collapse(open, anchor_y.get_value(), y) {
                set_menu_open.set(false);
            } else if !open {
                anchor_y.set_value(y);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let links = move || {
        SECTIONS
            .iter()
            .map(|&(id, label)| {
                view! {
                    <a
                        href=format!("#{id}")
                        class:active=move || active.get() == id
                        on:click=move |ev| {
                            set_menu_open.set(false);
                            scroll_to(id, &ev);
                        }
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="main-nav" class:scrolled=move || scrolled.get()>
            <div class="nav-brand">
                <a href=format!("#{HOME}") on:click=move |ev| scroll_to(HOME, &ev)>"Nordic Soul Henna"</a>
            </div>

            <div class="nav-links">{links()}</div>

            <button
                class="nav-toggle"
                aria-label="Menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <Show when=move || menu_open.get()>
                <div class="nav-mobile">{links()}</div>
            </Show>
        </nav>
    }
}
