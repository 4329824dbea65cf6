use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::content::{CONTACT_ANCHOR, COMPANY, NAV_ITEMS};
use crate::hooks::{scroll_to_section, use_scrolled};

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        background: transparent;
        transition: all 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(12px);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: #fff;
        font-size: 1.25rem;
        font-weight: 700;
        transition: color 0.3s ease;
    }
    .top-nav.scrolled .nav-logo {
        color: #1e3a8a;
    }
    .nav-logo-badge {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 0.5rem;
        background: linear-gradient(135deg, #3b82f6, #9333ea);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
    }
    .nav-links {
        display: flex;
        gap: 1rem;
    }
    .nav-link {
        padding: 0.5rem 0.75rem;
        border-radius: 0.375rem;
        font-size: 0.875rem;
        font-weight: 500;
        color: #fff;
        background: none;
        border: none;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .nav-link:hover {
        transform: scale(1.05);
        color: #93c5fd;
        background: rgba(255, 255, 255, 0.1);
    }
    .top-nav.scrolled .nav-link {
        color: #374151;
    }
    .top-nav.scrolled .nav-link:hover {
        color: #2563eb;
        background: #eff6ff;
    }
    .nav-cta {
        padding: 0.5rem 1.5rem;
        border-radius: 9999px;
        font-weight: 600;
        border: none;
        cursor: pointer;
        background: #fff;
        color: #1e3a8a;
        transition: all 0.3s ease;
    }
    .top-nav.scrolled .nav-cta {
        background: #2563eb;
        color: #fff;
    }
    .nav-cta:hover {
        transform: scale(1.05);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: #fff;
        padding: 0.5rem;
        cursor: pointer;
    }
    .top-nav.scrolled .burger-menu {
        color: #374151;
    }
    .mobile-menu {
        display: none;
        max-height: 0;
        opacity: 0;
        overflow: hidden;
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(12px);
        transition: all 0.3s ease-in-out;
    }
    .mobile-menu.open {
        max-height: 16rem;
        opacity: 1;
    }
    .mobile-menu .nav-link {
        display: block;
        width: 100%;
        text-align: left;
        color: #374151;
        font-size: 1rem;
    }
    .mobile-menu .nav-cta {
        display: block;
        width: 100%;
        margin-top: 1rem;
        border-radius: 0.375rem;
        background: #2563eb;
        color: #fff;
    }
    @media (max-width: 768px) {
        .nav-links,
        .nav-content > .nav-cta {
            display: none;
        }
        .burger-menu,
        .mobile-menu {
            display: block;
        }
        .mobile-menu-inner {
            padding: 0.5rem 0.75rem 0.75rem;
        }
    }
"#;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(config::NAV_SCROLL_THRESHOLD);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |href: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if let Err(e) = scroll_to_section(href) {
                    warn!("nav link {} did nothing: {}", href, e);
                }
                menu_open.set(false);
            })
        }
    };

    let links = |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                html! {
                    <button key={item.name} class={class} onclick={go_to(item.href)}>
                        {item.name}
                    </button>
                }
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <div class="nav-logo">
                    <div class="nav-logo-badge">
                        <IconView icon={Icon::Shield} />
                    </div>
                    <span>{COMPANY}</span>
                </div>

                <div class="nav-links">
                    { links("nav-link") }
                </div>

                <button class="nav-cta" onclick={go_to(CONTACT_ANCHOR)}>
                    {"Get Quote"}
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    <IconView icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <div class="mobile-menu-inner">
                    { links("nav-link") }
                    <button class="nav-cta" onclick={go_to(CONTACT_ANCHOR)}>
                        {"Get Quote"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
