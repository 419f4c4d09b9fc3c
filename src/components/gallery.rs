use leptos::prelude::*;

use crate::components::{CategoryCarousel, Lightbox};
use crate::models::{Category, PortfolioImage};
use crate::server_fns::get_portfolio_images;
use crate::services::catalog::resolve_fetch;
use crate::services::fallback::fallback_images;
use crate::services::viewer::{filter_images, grid_view, Action, GridView, ViewerState};

const SKELETON_TILES: usize = 6;

#[component]
pub fn Gallery() -> impl IntoView {
    let fetched = Resource::new(|| (), |_| get_portfolio_images());
    let (viewer, set_viewer) = signal(ViewerState::default());

    let catalog = Memo::new(move |_| resolve_fetch(fetched.get(), fallback_images));
    let category = Memo::new(move |_| viewer.with(|v| v.category));
    let filtered = Memo::new(move |_| {
        catalog.with(|loaded| {
            loaded
                .as_ref()
                .map(|l| filter_images(&l.items, category.get()))
                .unwrap_or_default()
        })
    });

    // Every UI event goes through the reducer.
    let dispatch = Callback::new(move |action: Action| {
        let len = filtered.with_untracked(Vec::len);
        let current = viewer.get_untracked();
        let next = current.reduce(action, len);
        if next != current {
            set_viewer.set(next);
        }
    });

    view! {
        <section id="portfolio" class="gallery">
            <div class="section-header">
                <h2>"Portfolio"</h2>
                <p class="subtitle">"A curated collection of contemporary henna artistry"</p>
            </div>

            <div class="category-filter">
                {Category::all()
                    .iter()
                    .map(|&choice| {
                        view! {
                            <button
                                class="category-btn"
                                class:active=move || category.get() == choice
                                on:click=move |_| dispatch.run(Action::Select(choice))
                            >
                                {choice.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <CategoryCarousel viewer=viewer dispatch=dispatch/>

            <Suspense fallback=|| view! { <GallerySkeleton/> }>
                {move || {
                    // Read the resource here so Suspense waits for it.
                    fetched.with(|_| ());
                    let (grid, origin) = catalog.with(|loaded| {
                        let items = loaded.as_ref().map(|l| l.items.as_slice());
                        let origin = loaded.as_ref().map(|l| l.origin.as_str());
                        (grid_view(items, category.get()), origin)
                    });
                    match grid {
                        GridView::Skeleton => view! { <GallerySkeleton/> }.into_any(),
                        GridView::Empty => view! {
                            <div class="gallery-empty">
                                <p>"No images yet. Add some beautiful henna art to showcase!"</p>
                            </div>
                        }
                        .into_any(),
                        GridView::Images(images) => view! {
                            <div class="gallery-grid" data-source=origin>
                                {images
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, image)| view! {
                                        <GalleryTile image=image on_open=move || dispatch.run(Action::Open(index))/>
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </Suspense>

            <Lightbox viewer=viewer images=filtered dispatch=dispatch/>
        </section>
    }
}

#[component]
fn GalleryTile(image: PortfolioImage, on_open: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    let description = image.display_description().to_string();

    view! {
        <figure class="gallery-item" on:click=move |_| on_open()>
            <img src=image.preview_url().to_string() alt=image.title.clone() loading="lazy"/>
            <figcaption class="gallery-overlay">
                <h3>{image.title.clone()}</h3>
                {(!description.is_empty()).then(|| view! { <p>{description}</p> })}
            </figcaption>
        </figure>
    }
}

#[component]
fn GallerySkeleton() -> impl IntoView {
    view! {
        <div class="gallery-grid" aria-busy="true">
            {(0..SKELETON_TILES)
                .map(|_| view! { <div class="gallery-item skeleton"></div> })
                .collect_view()}
        </div>
    }
}
