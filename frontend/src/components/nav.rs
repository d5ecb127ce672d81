use yew::prelude::*;

use crate::browser::NavigationHandle;
use crate::components::icon::Icon;
use crate::content::{icons, Section, BRAND, PRIMARY_NAV};
use crate::navigation::NavState;

/// Click handler that hands the section to the page's navigation controller.
pub fn section_link(navigation: &Option<NavigationHandle>, section: Section) -> Callback<MouseEvent> {
    let navigation = navigation.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(navigation) = &navigation {
            navigation.activate(section.id());
        }
    })
}

pub fn section_href(section: Section) -> String {
    format!("#{}", section.id())
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub state: NavState,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavState { mobile_menu_open, scrolled } = props.state;
    let navigation = use_context::<NavigationHandle>();

    let toggle_menu = {
        let navigation = navigation.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(navigation) = &navigation {
                navigation.toggle_menu();
            }
        })
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={section_href(Section::Home)} class="nav-brand" onclick={section_link(&navigation, Section::Home)}>
                    <img src="/assets/logo.png" alt="Logo" class="nav-logo" />
                    <span class="brand-text">{BRAND}</span>
                </a>

                <div class="nav-links">
                    { for PRIMARY_NAV.iter().map(|link| html! {
                        <a href={section_href(link.section)} class="nav-link" onclick={section_link(&navigation, link.section)}>
                            {link.label}
                        </a>
                    }) }
                </div>

                <button
                    class={classes!("burger-menu", mobile_menu_open.then(|| "open"))}
                    aria-label="Toggle menu"
                    aria-expanded={mobile_menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <Icon path={if mobile_menu_open { icons::CLOSE } else { icons::MENU }} class="burger-icon" />
                </button>
            </div>

            <div class={classes!("mobile-menu", mobile_menu_open.then(|| "open"))}>
                { for PRIMARY_NAV.iter().enumerate().map(|(idx, link)| html! {
                    <a
                        href={section_href(link.section)}
                        class="mobile-link"
                        style={format!("transition-delay: {}ms;", if mobile_menu_open { idx * 60 } else { 0 })}
                        onclick={section_link(&navigation, link.section)}
                    >
                        {link.label}
                    </a>
                }) }
            </div>

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #1f2937;
                        transition: all 0.5s ease;
                        animation: navDrop 0.6s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid rgba(234, 179, 8, 0.3);
                        box-shadow: 0 10px 15px rgba(234, 179, 8, 0.1);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                        transition: transform 0.3s ease;
                    }
                    .nav-brand:hover {
                        transform: scale(1.05);
                    }
                    .nav-logo {
                        width: 45px;
                        height: 45px;
                        border-radius: 50%;
                        box-shadow: 0 4px 12px rgba(234, 179, 8, 0.3);
                        transition: width 0.5s ease, height 0.5s ease, transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .nav-brand:hover .nav-logo {
                        transform: rotate(360deg) scale(1.1);
                    }
                    .top-nav.scrolled .nav-logo {
                        width: 40px;
                        height: 40px;
                    }
                    .brand-text {
                        font-size: 1.5rem;
                        font-weight: 700;
                        background: linear-gradient(90deg, #facc15, #eab308, #ca8a04);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        color: #d1d5db;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        bottom: -2px;
                        left: 0;
                        width: 0;
                        height: 2px;
                        background: linear-gradient(90deg, #facc15, #ca8a04);
                        transition: width 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #facc15;
                    }
                    .nav-link:hover::after {
                        width: 100%;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                        padding: 0;
                    }
                    .burger-icon {
                        width: 1.5rem;
                        height: 1.5rem;
                        transition: transform 0.3s ease;
                    }
                    .burger-menu.open .burger-icon {
                        transform: rotate(90deg);
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .top-nav {
                            padding: 0.75rem 0;
                        }
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .brand-text {
                            font-size: 1.25rem;
                        }
                        .mobile-menu {
                            display: block;
                            max-height: 0;
                            opacity: 0;
                            overflow: hidden;
                            padding: 0 1rem;
                            background: rgba(0, 0, 0, 0.98);
                            border-top: 1px solid rgba(234, 179, 8, 0.2);
                            transition: max-height 0.4s cubic-bezier(0.22, 1, 0.36, 1), opacity 0.4s ease, padding 0.4s ease;
                        }
                        .mobile-menu.open {
                            max-height: 28rem;
                            opacity: 1;
                            padding: 1rem;
                        }
                        .mobile-link {
                            display: block;
                            color: #d1d5db;
                            text-decoration: none;
                            padding: 0.75rem 1rem;
                            border-radius: 0.5rem;
                            opacity: 0;
                            transform: translateY(30px);
                            transition: opacity 0.6s ease, transform 0.6s cubic-bezier(0.22, 1, 0.36, 1), color 0.3s ease;
                        }
                        .mobile-menu.open .mobile-link {
                            opacity: 1;
                            transform: none;
                        }
                        .mobile-link:hover {
                            color: #facc15;
                            background: rgba(234, 179, 8, 0.1);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
