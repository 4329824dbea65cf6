use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::animation::{stagger, transition_delay, Carousel, CarouselAction};
use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::content::{Review, REVIEWS};
use crate::hooks::use_reveal;

const REVIEWS_CSS: &str = r#"
    .reviews-section {
        padding: 5rem 0;
        background: #f9fafb;
        position: relative;
        overflow: hidden;
    }
    .star-rating {
        display: flex;
        align-items: center;
        margin-bottom: 1rem;
    }
    .star-rating .icon {
        width: 1.25rem;
        height: 1.25rem;
        color: #facc15;
        transition: all 0.3s ease;
        transform: scale(0);
        opacity: 0;
    }
    .reviews-section.visible .star-rating .icon {
        transform: scale(1);
        opacity: 1;
        filter: drop-shadow(0 0 4px rgba(251, 191, 36, 0.5));
    }
    .featured-review {
        margin-bottom: 4rem;
        background: linear-gradient(135deg, #1e3a8a, #581c87);
        border-radius: 1.5rem;
        padding: 3rem;
        color: #fff;
        text-align: center;
        transition: all 1s ease;
        transform: translateY(2rem);
        opacity: 0;
    }
    .reviews-section.visible .featured-review {
        transform: none;
        opacity: 1;
    }
    .featured-review > .icon {
        width: 4rem;
        height: 4rem;
        color: #93c5fd;
        opacity: 0.5;
        margin: 0 auto 1.5rem;
    }
    .featured-quote {
        font-size: 1.75rem;
        font-weight: 300;
        font-style: italic;
        line-height: 1.6;
        margin-bottom: 2rem;
        animation: fadeIn 0.6s ease;
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    .featured-stars {
        display: flex;
        justify-content: center;
        margin-bottom: 1.5rem;
    }
    .featured-stars .icon {
        width: 1.5rem;
        height: 1.5rem;
        margin: 0 0.25rem;
        color: #facc15;
        animation: pulse 2s ease-in-out infinite;
    }
    .featured-name {
        font-size: 1.25rem;
        font-weight: 600;
    }
    .featured-role {
        color: #93c5fd;
    }
    .carousel-dots {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin-top: 1.5rem;
    }
    .carousel-dot {
        width: 0.625rem;
        height: 0.625rem;
        border-radius: 50%;
        border: none;
        background: rgba(255, 255, 255, 0.3);
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .carousel-dot.active {
        background: #fff;
        transform: scale(1.3);
    }
    .reviews-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1.5rem;
    }
    .review-card {
        background: #fff;
        padding: 2rem;
        border-radius: 1rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        position: relative;
        overflow: hidden;
        transition: all 0.7s ease;
        transform: translateY(3rem) scale(0.95);
        opacity: 0;
    }
    .reviews-section.visible .review-card {
        transform: none;
        opacity: 1;
    }
    .reviews-section.visible .review-card.hovered {
        transform: translateY(-0.5rem);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
    .review-card .quote-mark {
        position: absolute;
        top: 1rem;
        right: 1rem;
        width: 2rem;
        height: 2rem;
        color: #93c5fd;
        opacity: 0.3;
        transition: all 0.3s ease;
    }
    .review-card.hovered .quote-mark {
        opacity: 1;
        transform: scale(1.1);
    }
    .review-content {
        color: #4b5563;
        font-style: italic;
        line-height: 1.7;
        margin-bottom: 1.5rem;
        transition: all 0.3s ease;
    }
    .review-card.hovered .review-content {
        color: #374151;
        transform: translateX(0.5rem);
    }
    .reviewer {
        display: flex;
        align-items: center;
    }
    .avatar {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        background: linear-gradient(135deg, #3b82f6, #9333ea);
        color: #fff;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-right: 1rem;
        transition: transform 0.3s ease;
    }
    .review-card.hovered .avatar {
        transform: scale(1.1) rotate(6deg);
    }
    .reviewer-name {
        font-weight: 700;
        color: #111827;
        transition: color 0.3s ease;
    }
    .review-card.hovered .reviewer-name {
        color: #2563eb;
    }
    .reviewer-role {
        color: #6b7280;
        font-size: 0.875rem;
    }
    @media (max-width: 1024px) {
        .reviews-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .featured-review {
            display: none;
        }
    }
    @media (max-width: 640px) {
        .reviews-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[derive(Properties, PartialEq)]
struct StarRatingProps {
    rating: u8,
    #[prop_or_default]
    delay: u32,
}

#[function_component(StarRating)]
fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="star-rating">
            { for (0..props.rating as usize).map(|i| html! {
                <IconView
                    icon={Icon::Star}
                    style={AttrValue::from(transition_delay(stagger(props.delay, i, config::STAR_STAGGER_MS)))}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ReviewCardProps {
    review: Review,
    index: usize,
}

#[function_component(ReviewCard)]
fn review_card(props: &ReviewCardProps) -> Html {
    let ReviewCardProps { review, index } = *props;
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
            class={classes!("review-card", (*is_hovered).then(|| "hovered"))}
            style={transition_delay(stagger(0, index, config::REVIEW_STAGGER_MS))}
            {onmouseenter}
            {onmouseleave}
        >
            <IconView icon={Icon::Quote} class="quote-mark" />
            <StarRating rating={review.rating} delay={stagger(0, index, 200)} />
            <p class="review-content">{format!("\"{}\"", review.content)}</p>
            <div class="reviewer">
                <div class="avatar">{review.avatar}</div>
                <div>
                    <div class="reviewer-name">{review.name}</div>
                    <div class="reviewer-role">{review.role}</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    let node = use_node_ref();
    let is_visible = use_reveal(node.clone(), config::REVIEWS_THRESHOLD);
    let carousel = use_reducer(|| Carousel::new(REVIEWS.len()));

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::REVIEW_ROTATION_MS, move || {
                    debug!("rotating featured review");
                    carousel.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let featured = REVIEWS[carousel.current()];

    html! {
        <section id="reviews" ref={node} class={classes!("reviews-section", is_visible.then(|| "visible"))}>
            <style>{REVIEWS_CSS}</style>
            <div class="container">
                <div class="section-header">
                    <h2>{"Client Reviews"}</h2>
                    <p>{"See what our satisfied clients have to say about our services."}</p>
                </div>

                <div class="featured-review">
                    <IconView icon={Icon::Quote} />
                    <p key={featured.name} class="featured-quote">{format!("\"{}\"", featured.content)}</p>
                    <div class="featured-stars">
                        { for (0..featured.rating as usize).map(|i| html! {
                            <IconView icon={Icon::Star} style={AttrValue::from(format!("animation-delay: {}ms;", i * 200))} />
                        }) }
                    </div>
                    <div class="featured-name">{featured.name}</div>
                    <div class="featured-role">{featured.role}</div>
                    <div class="carousel-dots">
                        { for (0..REVIEWS.len()).map(|i| {
                            let onclick = {
                                let carousel = carousel.clone();
                                Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(i)))
                            };
                            html! {
                                <button
                                    class={classes!("carousel-dot", (i == carousel.current()).then(|| "active"))}
                                    {onclick}
                                ></button>
                            }
                        }) }
                    </div>
                </div>

                <div class="reviews-grid">
                    { for REVIEWS.iter().enumerate().map(|(index, review)| html! {
                        <ReviewCard key={review.name} review={*review} {index} />
                    }) }
                </div>
            </div>
        </section>
    }
}
