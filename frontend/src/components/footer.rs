use chrono::Datelike;
use yew::prelude::*;

use crate::browser::NavigationHandle;
use crate::components::icon::Icon;
use crate::components::nav::{section_href, section_link};
use crate::components::reveal::Reveal;
use crate::content::{
    BRAND, CREDIT_NAME, CREDIT_URL, FOOTER_CONTACT, FOOTER_LINKS, FOUNDED, SOCIAL_LINKS, STORE_NAME,
};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, STORE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigation = use_context::<NavigationHandle>();
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-glow"></div>
            <Reveal class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-column">
                        <div class="footer-brand">
                            <img src="/assets/logo.png" alt="Logo" class="footer-logo" />
                            <span class="brand-text">{BRAND}</span>
                        </div>
                        <p class="footer-blurb">
                            {format!("Crafting timeless elegance since {}. Your trusted partner in luxury jewellery ~ {}.", FOUNDED, STORE_NAME)}
                        </p>
                    </div>

                    <div class="footer-column">
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for FOOTER_LINKS.iter().map(|link| html! {
                                <li>
                                    <a href={section_href(link.section)} onclick={section_link(&navigation, link.section)}>
                                        {link.label}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{"Contact Info"}</h4>
                        <ul>
                            { for FOOTER_CONTACT.iter().map(|line| html! { <li>{*line}</li> }) }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{"Follow Us"}</h4>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a href={link.href} class="social-link" aria-label={link.name}>
                                    <Icon path={link.icon} class="social-icon" filled=true />
                                </a>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright_line(year)}</p>
                    <p>
                        {"Crafted with "}<span class="heart">{"❤"}</span>{" by "}
                        <a href={CREDIT_URL} target="_blank" rel="noopener noreferrer" class="credit-link">{CREDIT_NAME}</a>
                    </p>
                </div>
            </Reveal>

            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        background: #000;
                        border-top: 2px solid rgba(234, 179, 8, 0.2);
                        padding: 4rem 0;
                        overflow: hidden;
                    }
                    .footer-glow {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        background: linear-gradient(90deg, transparent, #eab308, transparent);
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 3rem;
                        margin-bottom: 3rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .footer-logo {
                        width: 50px;
                        height: 50px;
                        border-radius: 50%;
                        transition: transform 0.8s ease;
                    }
                    .footer-logo:hover {
                        transform: rotate(360deg) scale(1.1);
                    }
                    .footer-blurb {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        line-height: 1.6;
                    }
                    .footer-column h4 {
                        position: relative;
                        display: inline-block;
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin: 0 0 1.5rem;
                    }
                    .footer-column h4::after {
                        content: '';
                        position: absolute;
                        bottom: -4px;
                        left: 0;
                        width: 3rem;
                        height: 2px;
                        background: linear-gradient(90deg, #facc15, #ca8a04);
                    }
                    .footer-column ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }
                    .footer-column a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.3s ease, padding-left 0.3s ease;
                    }
                    .footer-column li:hover,
                    .footer-column a:hover {
                        color: #facc15;
                    }
                    .footer-column a:hover {
                        padding-left: 0.5rem;
                    }
                    .footer-bottom {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 0.75rem;
                        padding-top: 2rem;
                        border-top: 1px solid #1f2937;
                        color: #4b5563;
                        font-size: 0.75rem;
                    }
                    .footer-bottom p {
                        margin: 0;
                    }
                    .heart {
                        color: #ef4444;
                    }
                    .credit-link {
                        font-weight: 700;
                        background: linear-gradient(90deg, #9333ea, #db2777, #dc2626);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        text-decoration: none;
                    }
                    .credit-link:hover {
                        opacity: 0.8;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                            gap: 2rem;
                        }
                        .footer-bottom {
                            flex-direction: column;
                            text-align: center;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_the_given_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 JS Immitation Jewellery. All rights reserved."
        );
    }
}
