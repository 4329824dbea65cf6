use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;

use crate::animation::{stagger, transition_delay};
use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::content::{Service, CONTACT_ANCHOR, SERVICES};
use crate::hooks::use_reveal;

const PARTICLES: usize = 8;

const SERVICES_CSS: &str = r#"
    .services-section {
        padding: 5rem 0;
        background: #fff;
        position: relative;
        overflow: hidden;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .service-card {
        position: relative;
        background: #f9fafb;
        border-radius: 1rem;
        overflow: hidden;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        border: 2px solid transparent;
        transition: all 0.7s ease;
        transform: translateY(3rem) scale(0.95);
        opacity: 0;
    }
    .services-section.visible .service-card {
        transform: none;
        opacity: 1;
    }
    .services-section.visible .service-card.hovered {
        transform: translateY(-1rem) rotate(1deg) scale(1.05);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        border-color: #93c5fd;
    }
    .service-wash {
        position: absolute;
        inset: 0;
        opacity: 0;
        transition: opacity 0.5s ease;
    }
    .service-card.hovered .service-wash {
        opacity: 0.1;
    }
    .particle {
        position: absolute;
        width: 0.25rem;
        height: 0.25rem;
        border-radius: 50%;
        background: #60a5fa;
        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    @keyframes ping {
        75%, 100% { transform: scale(2); opacity: 0; }
    }
    .service-body {
        position: relative;
        padding: 2rem;
        z-index: 1;
    }
    .service-badge {
        width: 4rem;
        height: 4rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        margin-bottom: 1.5rem;
        transition: transform 0.3s ease;
    }
    .service-badge .icon {
        width: 2rem;
        height: 2rem;
    }
    .service-card.hovered .service-badge {
        transform: scale(1.1) rotate(12deg);
    }
    .accent-blue .service-badge, .accent-blue .service-wash { background: linear-gradient(135deg, #3b82f6, #2563eb); }
    .accent-green .service-badge, .accent-green .service-wash { background: linear-gradient(135deg, #22c55e, #16a34a); }
    .accent-purple .service-badge, .accent-purple .service-wash { background: linear-gradient(135deg, #a855f7, #9333ea); }
    .service-card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        color: #111827;
        margin-bottom: 1rem;
        transition: all 0.3s ease;
    }
    .service-card.hovered h3 {
        color: #2563eb;
        transform: translateX(0.5rem);
    }
    .service-card p {
        color: #4b5563;
        line-height: 1.7;
        margin-bottom: 1.5rem;
    }
    .service-features {
        max-height: 8rem;
        opacity: 0.8;
        transition: all 0.5s ease;
    }
    .service-features.expanded {
        max-height: 12rem;
        opacity: 1;
    }
    .service-features li {
        display: flex;
        align-items: center;
        color: #4b5563;
        margin-bottom: 0.5rem;
        transition: all 0.3s ease;
        transform: translateX(1rem);
        opacity: 0.6;
    }
    .service-features.expanded li {
        transform: none;
        opacity: 1;
    }
    .service-features .icon {
        width: 1rem;
        height: 1rem;
        color: #22c55e;
        margin-right: 0.5rem;
    }
    .service-card.hovered .service-features li {
        font-weight: 500;
    }
    .hover-indicator {
        position: absolute;
        bottom: 1rem;
        right: 1rem;
        width: 2rem;
        height: 2rem;
        border-radius: 50%;
        background: #3b82f6;
        color: #fff;
        display: flex;
        align-items: center;
        justify-content: center;
        opacity: 0;
        transform: scale(0.5);
        transition: all 0.3s ease;
    }
    .service-card.hovered .hover-indicator {
        opacity: 1;
        transform: scale(1);
    }
    .services-cta {
        text-align: center;
        margin-top: 4rem;
        transition: all 1s ease 0.8s;
        transform: translateY(2rem);
        opacity: 0;
    }
    .services-section.visible .services-cta {
        transform: none;
        opacity: 1;
    }
    .services-cta p {
        font-size: 1.125rem;
        color: #4b5563;
        margin-bottom: 1.5rem;
    }
    @media (max-width: 768px) {
        .services-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

/// Where and when a hover particle pings, as percentages and milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Particle {
    left: usize,
    top: usize,
    delay_ms: usize,
    duration_ms: usize,
}

/// Spread particles over the card without a random source.
fn particle(card: usize, i: usize) -> Particle {
    Particle {
        left: (i * 37 + card * 13) % 100,
        top: (i * 59 + card * 29) % 100,
        delay_ms: (i * 250) % 2_000,
        duration_ms: 1_000 + (i * 125) % 1_000,
    }
}

fn particle_style(p: Particle) -> String {
    format!(
        "left: {}%; top: {}%; animation-delay: {}ms; animation-duration: {}ms;",
        p.left, p.top, p.delay_ms, p.duration_ms
    )
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    index: usize,
    is_mobile: bool,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let ServiceCardProps { service, index, is_mobile } = *props;
    let is_hovered = use_state(|| false);
    let show_features = use_state(|| false);
    let pending_expand = use_mut_ref(|| None::<Timeout>);

    // Touch layouts get the features list without hovering.
    {
        let is_hovered = is_hovered.clone();
        let show_features = show_features.clone();
        let pending_expand = pending_expand.clone();
        use_effect_with_deps(
            move |is_mobile: &bool| {
                if *is_mobile {
                    pending_expand.borrow_mut().take();
                    is_hovered.set(false);
                    show_features.set(true);
                } else {
                    show_features.set(false);
                }
                || ()
            },
            is_mobile,
        );
    }

    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        let show_features = show_features.clone();
        let pending_expand = pending_expand.clone();
        Callback::from(move |_: MouseEvent| {
            if is_mobile {
                return;
            }
            is_hovered.set(true);
            let show_features = show_features.clone();
            *pending_expand.borrow_mut() = Some(Timeout::new(config::FEATURE_EXPAND_DELAY_MS, move || {
                show_features.set(true);
            }));
        })
    };

    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        let show_features = show_features.clone();
        let pending_expand = pending_expand.clone();
        Callback::from(move |_: MouseEvent| {
            if is_mobile {
                return;
            }
            // Dropping the handle cancels an expand that has not fired yet.
            pending_expand.borrow_mut().take();
            is_hovered.set(false);
            show_features.set(false);
        })
    };

    let hovered = *is_hovered && !is_mobile;

    html! {
        <div
            class={classes!("service-card", service.accent.class(), hovered.then(|| "hovered"))}
            style={transition_delay(stagger(0, index, config::SERVICE_STAGGER_MS))}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="service-wash"></div>

            if hovered {
                <div class="particles">
                    { for (0..PARTICLES).map(|i| html! {
                        <div class="particle" style={particle_style(particle(index, i))}></div>
                    }) }
                </div>
            }

            <div class="service-body">
                <div class="service-badge">
                    <IconView icon={service.icon} />
                </div>
                <h3>{service.title}</h3>
                <p>{service.description}</p>

                <ul class={classes!("service-features", (*show_features).then(|| "expanded"))}>
                    { for service.features.iter().enumerate().map(|(i, feature)| html! {
                        <li key={*feature} style={transition_delay(stagger(0, i, 100))}>
                            <IconView icon={Icon::CheckCircle} />
                            <span>{*feature}</span>
                        </li>
                    }) }
                </ul>

                if !is_mobile {
                    <div class="hover-indicator">
                        <IconView icon={Icon::ChevronRight} />
                    </div>
                }
            </div>
        </div>
    }
}

#[function_component(OurServices)]
pub fn our_services() -> Html {
    let node = use_node_ref();
    let is_visible = use_reveal(node.clone(), config::SERVICES_THRESHOLD);
    let (width, _) = use_window_size();
    let is_mobile = width < config::MOBILE_BREAKPOINT;

    html! {
        <section id="services" ref={node} class={classes!("services-section", is_visible.then(|| "visible"))}>
            <style>{SERVICES_CSS}</style>
            <div class="blob blob-blue"></div>
            <div class="blob blob-purple" style="animation-delay: 3s;"></div>
            <div class="blob blob-green" style="animation-delay: 1.5s;"></div>

            <div class="container">
                <div class="section-header">
                    <h2>{"Our Services"}</h2>
                    <div class="section-divider"></div>
                    <p>{"Comprehensive insurance solutions tailored to protect your lifestyle, assets, and future."}</p>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <ServiceCard key={service.title} service={*service} {index} {is_mobile} />
                    }) }
                </div>

                <div class="services-cta">
                    <p>{"Ready to find the perfect insurance solution for your needs?"}</p>
                    <a href={CONTACT_ANCHOR} class="cta-button">
                        {"Get Started Today"}
                        <IconView icon={Icon::ArrowRight} />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_inside_the_card() {
        for card in 0..SERVICES.len() {
            for i in 0..PARTICLES {
                let p = particle(card, i);
                assert!(p.left < 100 && p.top < 100, "{:?}", p);
                assert!(p.delay_ms < 2_000, "{:?}", p);
                assert!((1_000..2_000).contains(&p.duration_ms), "{:?}", p);
            }
        }
    }

    #[test]
    fn particles_differ_between_cards() {
        assert_ne!(particle(0, 1), particle(1, 1));
        assert_eq!(particle(2, 3), particle(2, 3));
    }
}
