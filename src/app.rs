use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Footer, Nav};
use crate::pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/henna_studio.css"/>
        <Title text="Nordic Soul Henna - Contemporary Henna Artistry"/>
        <Meta name="description" content="Natural henna for weddings, festivals and photoshoots, blending Indian tradition with Nordic minimalism"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
