use yew::prelude::*;

use crate::components::{
    about::AboutUs, contact::GetInTouch, hero::Hero, reviews::Reviews, services::OurServices,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Start at the top on a fresh load
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main id="home">
            <Hero />
            <AboutUs />
            <OurServices />
            <Reviews />
            <GetInTouch />
        </main>
    }
}
