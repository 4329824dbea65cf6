use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;
use crate::hooks::use_reveal;

#[styled_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let is_visible = use_reveal(node.clone(), config::HERO_THRESHOLD);

    let banner = css!(
        r#"
        position: relative;
        background-image: url("/assets/hero.jpg");
        background-size: cover;
        background-position: center;
        padding: 150px 0;
        text-align: center;
        overflow: hidden;
        opacity: 0.8;

        .hero-copy {
            position: relative;
            z-index: 2;
        }
        h2, p {
            font-weight: bold;
            transition: all 0.7s ease;
            transform: translateY(20px);
            opacity: 0;
        }
        h2 {
            color: #3d559a;
            font-size: 2.5em;
            transition-delay: 0.2s;
        }
        p {
            color: #fff;
            font-size: 1.5em;
            text-shadow: 1px 1px 5px #000;
            transition-delay: 0.4s;
        }
        &.visible h2, &.visible p {
            transform: translateY(0);
            opacity: 1;
        }
        "#
    );

    html! {
        <section id="hero" ref={node} class={classes!(banner, is_visible.then(|| "visible"))}>
            <div class="hero-copy">
                <h2>{"Protecting What Matters Most"}</h2>
                <p>{"Professional insurance solutions with integrity."}</p>
            </div>
        </section>
    }
}
