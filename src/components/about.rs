use yew::prelude::*;

use crate::animation::{stagger, transition_delay};
use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::content::{Feature, Stat, FEATURES, STATS, STORY};
use crate::hooks::{use_count_up, use_reveal};

const ABOUT_CSS: &str = r#"
    .about-section {
        padding: 5rem 0;
        background: #f9fafb;
        position: relative;
        overflow: hidden;
    }
    .about-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .about-story h3 {
        font-size: 1.5rem;
        font-weight: 700;
        color: #111827;
        margin-bottom: 1.5rem;
    }
    .about-story p {
        color: #4b5563;
        line-height: 1.7;
        margin-bottom: 1rem;
    }
    .slide-left {
        transition: all 0.7s ease;
        transform: translateX(-2rem);
        opacity: 0;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
        margin-top: 2rem;
    }
    .stat-card {
        text-align: center;
        transition: all 0.7s ease;
        transform: translateY(2rem);
        opacity: 0;
    }
    .stat-card .icon {
        width: 2rem;
        height: 2rem;
        color: #2563eb;
        margin: 0 auto 0.5rem;
        transition: transform 0.3s ease;
    }
    .stat-card.hovered .icon {
        transform: scale(1.25);
        color: #3b82f6;
    }
    .stat-number {
        font-size: 1.5rem;
        font-weight: 700;
        color: #111827;
        transition: all 0.3s ease;
    }
    .stat-card.hovered .stat-number {
        color: #2563eb;
        transform: scale(1.1);
    }
    .stat-label {
        color: #4b5563;
    }
    .why-us {
        background: #fff;
        padding: 2rem;
        border-radius: 1rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
        transition: all 1s ease 0.4s;
        transform: translateX(2rem) rotate(1deg);
        opacity: 0;
    }
    .why-us h3 {
        font-size: 1.5rem;
        font-weight: 700;
        color: #111827;
        margin-bottom: 1.5rem;
    }
    .feature-card {
        display: flex;
        align-items: flex-start;
        margin-bottom: 1.5rem;
        transition: all 0.7s ease;
        transform: translateX(2rem);
        opacity: 0;
    }
    .feature-card .icon {
        width: 1.5rem;
        height: 1.5rem;
        color: #22c55e;
        margin: 0.25rem 0.75rem 0 0;
        flex-shrink: 0;
        transition: transform 0.3s ease;
    }
    .feature-card.hovered .icon {
        transform: scale(1.1) rotate(6deg);
    }
    .feature-card h4 {
        font-weight: 600;
        color: #111827;
        transition: color 0.3s ease;
    }
    .feature-card.hovered h4 {
        color: #16a34a;
    }
    .feature-card p {
        color: #4b5563;
    }
    .about-section.visible .slide-left,
    .about-section.visible .stat-card,
    .about-section.visible .why-us,
    .about-section.visible .feature-card {
        transform: none;
        opacity: 1;
    }
    @media (max-width: 768px) {
        .about-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[derive(Properties, PartialEq)]
struct StatCardProps {
    stat: Stat,
    value: u32,
    delay: u32,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let is_hovered = use_state(|| false);
    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    html! {
        <div
            class={classes!("stat-card", (*is_hovered).then(|| "hovered"))}
            style={transition_delay(props.delay)}
            {onmouseenter}
            {onmouseleave}
        >
            <IconView icon={props.stat.icon} />
            <div class="stat-number">{format!("{}+", props.value)}</div>
            <div class="stat-label">{props.stat.label}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
    delay: u32,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let is_hovered = use_state(|| false);
    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    html! {
        <div
            class={classes!("feature-card", (*is_hovered).then(|| "hovered"))}
            style={transition_delay(props.delay)}
            {onmouseenter}
            {onmouseleave}
        >
            <IconView icon={Icon::CheckCircle} />
            <div>
                <h4>{props.feature.title}</h4>
                <p>{props.feature.description}</p>
            </div>
        </div>
    }
}

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    let node = use_node_ref();
    let is_visible = use_reveal(node.clone(), config::ABOUT_THRESHOLD);

    // Both counters start on the same reveal.
    let clients = use_count_up(STATS[0], is_visible);
    let experience = use_count_up(STATS[1], is_visible);

    html! {
        <section id="about" ref={node} class={classes!("about-section", is_visible.then(|| "visible"))}>
            <style>{ABOUT_CSS}</style>
            <div class="blob blob-blue"></div>
            <div class="blob blob-purple" style="animation-delay: 2s;"></div>

            <div class="container">
                <div class="section-header">
                    <h2>{"About Lambert Brothers"}</h2>
                    <div class="section-divider"></div>
                    <p>{"With decades of combined experience, we've built our reputation on trust, expertise, and personalized service."}</p>
                </div>

                <div class="about-grid">
                    <div class="about-story">
                        <h3 class="slide-left" style={transition_delay(600)}>{"Our Story"}</h3>
                        {
                            STORY.iter().enumerate().map(|(i, paragraph)| html! {
                                <p class="slide-left" style={transition_delay(stagger(700, i, 100))}>
                                    {*paragraph}
                                </p>
                            }).collect::<Html>()
                        }

                        <div class="stats-grid">
                            <StatCard stat={STATS[0]} value={clients} delay={1_000} />
                            <StatCard stat={STATS[1]} value={experience} delay={1_200} />
                        </div>
                    </div>

                    <div class="why-us">
                        <h3>{"Why Choose Us?"}</h3>
                        {
                            FEATURES.iter().enumerate().map(|(i, feature)| html! {
                                <FeatureCard key={feature.title} feature={*feature} delay={stagger(800, i, 200)} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
