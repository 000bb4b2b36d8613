use log::debug;
use yew::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::config::asset_url;
use crate::content::Brand;
use crate::hooks::use_scroll_header;
use crate::motion::menu::MenuState;

/// In-page sections the header links and CTA buttons point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Services,
    About,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::Services, Anchor::About, Anchor::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Services => "services",
            Anchor::About => "about",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Services => "Services",
            Anchor::About => "About",
            Anchor::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: Brand,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu = use_state(MenuState::default);
    let style = use_scroll_header();

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = (*menu).toggled();
            debug!("Mobile menu {}", if next.is_open() { "opened" } else { "closed" });
            menu.set(next);
        })
    };

    // No prevent_default: the browser still follows the anchor
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set((*menu).closed());
        })
    };

    let is_open = menu.is_open();

    html! {
        <header class="site-header" style={style.css()}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(15, 23, 42, 0.8);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .header-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        animation: brandSlideIn 0.5s ease-out both;
                    }
                    .brand-logo {
                        width: 2.5rem;
                        height: 2.5rem;
                        object-fit: contain;
                    }
                    .brand-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    @keyframes brandSlideIn {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .desktop-nav {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #d1d5db;
                        text-decoration: none;
                        transition: color 0.2s, transform 0.2s;
                    }
                    .nav-link:hover {
                        color: #fff;
                        transform: scale(1.05);
                    }
                    .menu-button {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                        padding: 0;
                    }
                    .menu-button .glyph {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .mobile-menu {
                        background: rgba(30, 41, 59, 0.95);
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        overflow: hidden;
                        animation: menuOpen 0.3s ease-out both;
                    }
                    .mobile-menu-links {
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .mobile-menu .nav-link {
                        display: block;
                    }
                    @keyframes menuOpen {
                        from { opacity: 0; max-height: 0; }
                        to { opacity: 1; max-height: 20rem; }
                    }
                    @media (max-width: 767px) {
                        .desktop-nav {
                            display: none;
                        }
                        .menu-button {
                            display: block;
                        }
                    }
                    @media (min-width: 768px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="header-inner">
                <div class="brand">
                    <img class="brand-logo" src={asset_url(&props.brand.logo)} alt={props.brand.logo_alt.clone()} />
                    <span class="brand-name gradient-text">{&props.brand.name}</span>
                </div>

                <nav class="desktop-nav">
                    { for Anchor::ALL.iter().map(|anchor| html! {
                        <a key={anchor.id()} href={anchor.href()} class="nav-link">{anchor.label()}</a>
                    }) }
                </nav>

                <button
                    class="menu-button"
                    aria-controls="mobile-menu"
                    aria-expanded={is_open.to_string()}
                    onclick={toggle_menu}
                >
                    <Glyph icon={if is_open { Icon::X } else { Icon::Menu }} />
                </button>
            </div>

            {
                if is_open {
                    html! {
                        <div id="mobile-menu" class="mobile-menu">
                            <div class="mobile-menu-links">
                                { for Anchor::ALL.iter().map(|anchor| html! {
                                    <a
                                        key={anchor.id()}
                                        href={anchor.href()}
                                        class="nav-link"
                                        onclick={close_menu.clone()}
                                    >
                                        {anchor.label()}
                                    </a>
                                }) }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
