use leptos::ev;
use leptos::prelude::*;

use crate::models::PortfolioImage;
use crate::services::viewer::{Action, ImageStatus, ViewerState};

/// Full-screen viewer for the selected image of the filtered set.
///
/// The thumbnail sits under a spinner until the full image reports `load`.
/// If the full image fails, the thumbnail stays up with a notice and the
/// visitor can still move on.
#[component]
pub fn Lightbox(
    viewer: ReadSignal<ViewerState>,
    images: Memo<Vec<PortfolioImage>>,
    dispatch: Callback<Action>,
) -> impl IntoView {
    let selected = Memo::new(move |_| {
        let state = viewer.get();
        images.with(|images| state.selected_image(images).cloned())
    });
    let status = Memo::new(move |_| viewer.get().image_status());

    let keys = window_event_listener(ev::keydown, move |ev| {
        let action = match ev.key().as_str() {
            "Escape" => Action::Close,
            "ArrowRight" => Action::Next,
            "ArrowLeft" => Action::Previous,
            _ => return,
        };
        dispatch.run(action);
    });
    on_cleanup(move || keys.remove());

    move || {
        selected.get().map(|image| {
            let description = image.display_description().to_string();
            let thumbnail = image.thumbnail_url.clone();
            let title = image.title.clone();

            view! {
                <div class="lightbox" on:click=move |_| dispatch.run(Action::Close)>
                    <button class="lightbox-close" aria-label="Close" on:click=move |_| dispatch.run(Action::Close)>
                        "×"
                    </button>
                    <button
                        class="lightbox-nav prev"
                        aria-label="Previous image"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dispatch.run(Action::Previous);
                        }
                    >
                        "‹"
                    </button>
                    <button
                        class="lightbox-nav next"
                        aria-label="Next image"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dispatch.run(Action::Next);
                        }
                    >
                        "›"
                    </button>

                    <figure class="lightbox-content" on:click=|ev| ev.stop_propagation()>
                        <div class="lightbox-frame">
                            {thumbnail.map(|src| view! {
                                <img
                                    class="lightbox-thumb"
                                    class:hidden=move || status.get() == Some(ImageStatus::Loaded)
                                    src=src
                                    alt=""
                                />
                            })}
                            <Show when=move || status.get() == Some(ImageStatus::Loading)>
                                <div class="spinner" role="status" aria-label="Loading"></div>
                            </Show>
                            <Show when=move || status.get() == Some(ImageStatus::Failed)>
                                <p class="lightbox-error">"This image couldn't be loaded."</p>
                            </Show>
                            <img
                                class="lightbox-full"
                                class:visible=move || status.get() == Some(ImageStatus::Loaded)
                                src=image.image_url.clone()
                                alt=title.clone()
                                on:load=move |_| dispatch.run(Action::FullImageLoaded)
                                on:error=move |_| dispatch.run(Action::FullImageFailed)
                            />
                        </div>
                        <figcaption>
                            <h3>{title}</h3>
                            {(!description.is_empty()).then(|| view! { <p>{description}</p> })}
                        </figcaption>
                    </figure>
                </div>
            }
        })
    }
}
