use leptos::ev::PointerEvent;
use leptos::prelude::*;

use crate::models::Category;
use crate::services::swipe::DragStart;
use crate::services::viewer::{Action, ViewerState};

/// Paged category picker for narrow screens. Shares the gallery's
/// selection, so the visible page always matches the active filter.
#[component]
pub fn CategoryCarousel(viewer: ReadSignal<ViewerState>, dispatch: Callback<Action>) -> impl IntoView {
    let drag = StoredValue::new(Option::<DragStart>::None);
    // A recognised swipe must not also count as a tap on the tab under the pointer.
    let swallow_click = StoredValue::new(false);

    let on_pointer_down = move |ev: PointerEvent| {
        drag.set_value(Some(DragStart {
            x: ev.client_x() as f64,
            at_ms: ev.time_stamp(),
        }));
        swallow_click.set_value(false);
    };

    let on_pointer_up = move |ev: PointerEvent| {
        let Some(start) = drag.get_value() else {
            return;
        };
        drag.set_value(None);
        if let Some(swipe) = start.finish(ev.client_x() as f64, ev.time_stamp()) {
            swallow_click.set_value(true);
            dispatch.run(swipe.action());
        }
    };

    let track_style = move || {
        format!(
            "transform: translateX(-{}%)",
            viewer.get().carousel_index() * 100
        )
    };

    view! {
        <div class="category-carousel">
            <button
                class="carousel-arrow"
                aria-label="Previous category"
                disabled=move || !viewer.get().can_page_back()
                on:click=move |_| dispatch.run(Action::CarouselPrev)
            >
                "‹"
            </button>

            <div
                class="carousel-viewport"
                on:pointerdown=on_pointer_down
                on:pointerup=on_pointer_up
                on:pointercancel=move |_| drag.set_value(None)
            >
                <div class="carousel-track" style=track_style>
                    {Category::all()
                        .iter()
                        .map(|&category| {
                            view! {
                                <button
                                    class="carousel-tab"
                                    class:active=move || viewer.get().category == category
                                    on:click=move |_| {
                                        if swallow_click.get_value() {
                                            swallow_click.set_value(false);
                                            return;
                                        }
                                        dispatch.run(Action::Select(category));
                                    }
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <button
                class="carousel-arrow"
                aria-label="Next category"
                disabled=move || !viewer.get().can_page_forward()
                on:click=move |_| dispatch.run(Action::CarouselNext)
            >
                "›"
            </button>

            <div class="carousel-dots">
                {Category::all()
                    .iter()
                    .enumerate()
                    .map(|(index, _)| {
                        view! {
                            <span
                                class="carousel-dot"
                                class:active=move || viewer.get().carousel_index() == index
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
