use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::browser::{current_scroll_y, GlooTimer, NavigationHandle, WindowScrollHost};
use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::icon::Icon;
use crate::components::nav::{section_link, NavBar};
use crate::components::reveal::{Motion, Reveal, REVEAL_CSS};
use crate::config;
use crate::content::{
    icons, Section, COLLECTIONS, CUSTOM_STEPS, FEATURED_PRODUCTS, FOUNDED, GALLERY, QUALITY_PROMISES,
    STATS, STORE_INFO, STORY, TESTIMONIALS,
};
use crate::navigation::NavState;

#[function_component(Landing)]
pub fn landing() -> Html {
    let nav_state = use_reducer(NavState::default);
    let navigation = {
        let dispatcher = nav_state.dispatcher();
        use_state(move || {
            NavigationHandle::new(
                Callback::from(move |action| dispatcher.dispatch(action)),
                WindowScrollHost,
                GlooTimer,
            )
        })
    };

    // Feed scroll offsets to the controller for as long as the page is mounted
    {
        let navigation = (*navigation).clone();
        use_effect_with_deps(
            move |_| {
                navigation.on_scroll(current_scroll_y());

                let listener = {
                    let navigation = navigation.clone();
                    Closure::<dyn Fn()>::new(move || navigation.on_scroll(current_scroll_y()))
                };
                let window = web_sys::window();
                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()) {
                        warn!("Failed to attach scroll listener: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        if let Err(e) = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()) {
                            warn!("Failed to detach scroll listener: {:?}", e);
                        }
                    }
                    navigation.cancel_pending();
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<NavigationHandle> context={(*navigation).clone()}>
            <div class="jewellery-page">
                <NavBar state={*nav_state} />
                <Hero />
                <About />
                <Collections />
                <Featured />
                <CustomOrder />
                <Testimonials />
                <Gallery />
                <QualityPromise />
                <VisitStore />
                <ContactSection />
                <Footer />
                <style>{PAGE_CSS}</style>
                <style>{REVEAL_CSS}</style>
            </div>
        </ContextProvider<NavigationHandle>>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let navigation = use_context::<NavigationHandle>();

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-background">
                <img src="/assets/image1.jpg" alt="Hero" />
                <div class="hero-shade"></div>
                <div class="hero-shimmer"></div>
            </div>
            <div class="hero-content">
                <h1>{"Timeless Elegance"}</h1>
                <p class="hero-tagline">{"Crafted with precision, designed with passion"}</p>
                <div class="hero-cta-group">
                    <button class="cta-primary" onclick={section_link(&navigation, Section::Collections)}>
                        {"Shop Now"}
                    </button>
                    <button class="cta-secondary" onclick={section_link(&navigation, Section::Contact)}>
                        {"Book Appointment"}
                    </button>
                </div>
                <p class="hero-since">{format!("Certified Jewellery Since {}", FOUNDED)}</p>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="about-section alt-bg">
            <div class="section-inner split">
                <Reveal motion={Motion::SlideLeft} class="framed-image">
                    <img src="/assets/image2.jpg" alt="Brand Story" loading="lazy" />
                </Reveal>
                <Reveal motion={Motion::SlideRight} delay_ms={200}>
                    <h2 class="gold-heading">{"Our Story"}</h2>
                    <p class="lead">{STORY[0]}</p>
                    <p class="muted">{STORY[1]}</p>
                    <div class="stats">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Collections)]
fn collections() -> Html {
    html! {
        <section id={Section::Collections.id()} class="collections-section">
            <div class="section-inner">
                <Reveal class="section-heading">
                    <h2>{"Our Collections"}</h2>
                    <p>{"Explore our exquisite range of handcrafted jewellery"}</p>
                </Reveal>
                <div class="collection-grid">
                    { for COLLECTIONS.iter().enumerate().map(|(idx, item)| html! {
                        <Reveal class="collection-card" delay_ms={idx as u32 * 150}>
                            <img src={item.image} alt={item.title} loading="lazy" />
                            <div class="card-caption">
                                <h3>{item.title}</h3>
                                <p>{item.description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Featured)]
fn featured() -> Html {
    html! {
        <section id={Section::Featured.id()} class="featured-section alt-bg">
            <div class="section-inner">
                <Reveal class="section-heading">
                    <h2>{"Featured Products"}</h2>
                    <p>{"Discover our bestselling pieces"}</p>
                </Reveal>
                <div class="product-grid">
                    { for FEATURED_PRODUCTS.iter().enumerate().map(|(idx, product)| html! {
                        <Reveal class="product-card" motion={Motion::Zoom} delay_ms={idx as u32 * 100}>
                            <div class="product-image">
                                <img src={product.image} alt={product.name} loading="lazy" />
                                <span class={classes!("badge", product.badge.class())}>{product.badge.label()}</span>
                            </div>
                            <div class="product-info">
                                <h3>{product.name}</h3>
                                <p class="price">{product.price}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CustomOrder)]
fn custom_order() -> Html {
    let navigation = use_context::<NavigationHandle>();

    html! {
        <section id={Section::Custom.id()} class="custom-section">
            <div class="section-inner split">
                <Reveal motion={Motion::SlideLeft}>
                    <h2 class="gold-heading">{"Custom Jewellery"}</h2>
                    <p class="lead">
                        {"Bring your dream jewellery to life. Our expert designers work closely with you to create one-of-a-kind pieces that perfectly reflect your style and story."}
                    </p>
                    <ol class="steps">
                        { for CUSTOM_STEPS.iter().map(|step| html! {
                            <li class="step">
                                <div class="step-number">{step.number}</div>
                                <div>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                            </li>
                        }) }
                    </ol>
                    <button class="cta-primary" onclick={section_link(&navigation, Section::Contact)}>
                        {"Start Custom Order"}
                    </button>
                </Reveal>
                <Reveal motion={Motion::SlideRight} class="framed-image">
                    <img src="/assets/image15.jpg" alt="Custom Jewellery" loading="lazy" />
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id={Section::Testimonials.id()} class="testimonials-section alt-bg">
            <div class="section-inner">
                <Reveal class="section-heading">
                    <h2>{"What Our Clients Say"}</h2>
                    <p>{"Trusted by thousands of satisfied customers"}</p>
                </Reveal>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(idx, testimonial)| html! {
                        <Reveal class="testimonial-card" delay_ms={idx as u32 * 150}>
                            <div class="testimonial-header">
                                <img src={testimonial.image} alt={testimonial.name} class="avatar" loading="lazy" />
                                <div>
                                    <h3>{testimonial.name}</h3>
                                    <div class="stars" aria-label={format!("{} out of 5 stars", testimonial.rating)}>
                                        { for (0..testimonial.rating).map(|_| html! {
                                            <Icon path={icons::STAR} class="star" filled=true view_box="0 0 20 20" />
                                        }) }
                                    </div>
                                </div>
                            </div>
                            <p class="review">{format!("\"{}\"", testimonial.review)}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Gallery)]
fn gallery() -> Html {
    html! {
        <section id={Section::Gallery.id()} class="gallery-section">
            <div class="section-inner">
                <Reveal class="section-heading">
                    <h2>{"Gallery"}</h2>
                    <p>{"A glimpse into our world of luxury"}</p>
                </Reveal>
                <div class="gallery-grid">
                    { for GALLERY.iter().enumerate().map(|(idx, tile)| html! {
                        <Reveal class={tile.span.class()} motion={Motion::Zoom} delay_ms={idx as u32 * 80}>
                            <img src={tile.image} alt={format!("Gallery {}", idx + 1)} loading="lazy" />
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(QualityPromise)]
fn quality_promise() -> Html {
    html! {
        <section id={Section::Quality.id()} class="quality-section alt-bg">
            <div class="section-inner">
                <Reveal class="section-heading">
                    <h2>{"Quality Promise"}</h2>
                    <p>{"Your trust is our most precious jewel"}</p>
                </Reveal>
                <div class="promise-grid">
                    { for QUALITY_PROMISES.iter().enumerate().map(|(idx, promise)| html! {
                        <Reveal class="promise-card" delay_ms={idx as u32 * 150}>
                            <div class="promise-icon">
                                <Icon path={icons::CHECK} />
                            </div>
                            <h3>{promise.title}</h3>
                            <p>{promise.description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(VisitStore)]
fn visit_store() -> Html {
    html! {
        <section id={Section::Visit.id()} class="visit-section">
            <div class="section-inner">
                <Reveal class="section-heading">
                    <h2>{"Visit Our Store"}</h2>
                    <p>{"Experience luxury in person"}</p>
                </Reveal>
                <div class="split">
                    <Reveal motion={Motion::SlideLeft} class="store-card">
                        <h3>{"Store Information"}</h3>
                        <ul class="detail-list">
                            { for STORE_INFO.iter().map(|item| html! {
                                <li class="detail-item">
                                    <Icon path={item.icon} class="detail-icon" />
                                    <div>
                                        <h4>{item.title}</h4>
                                        <p>{item.content}</p>
                                        { for item.extra.map(|extra| html! { <p>{extra}</p> }) }
                                    </div>
                                </li>
                            }) }
                        </ul>
                    </Reveal>
                    <Reveal motion={Motion::SlideRight} class="map-frame">
                        <iframe
                            src={config::MAP_EMBED_URL}
                            title="Store location"
                            allowfullscreen=true
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                        />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

const PAGE_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #000;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .jewellery-page {
        min-height: 100vh;
        overflow-x: hidden;
    }
    .jewellery-page section {
        position: relative;
        overflow: hidden;
        padding: 6rem 0;
        background: #000;
    }
    .jewellery-page section.alt-bg {
        background: linear-gradient(to bottom, #000, #030712, #111827);
    }
    .section-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .split {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2,
    .gold-heading {
        font-size: 3rem;
        font-weight: 700;
        margin: 0 0 1rem;
        background: linear-gradient(90deg, #fde047, #eab308, #ca8a04);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .section-heading p,
    .muted {
        color: #9ca3af;
        font-size: 1.125rem;
    }
    .lead {
        color: #d1d5db;
        font-size: 1.125rem;
        line-height: 1.7;
    }
    .framed-image {
        position: relative;
        height: 500px;
        border-radius: 1.5rem;
        overflow: hidden;
        border: 1px solid rgba(234, 179, 8, 0.3);
        box-shadow: 0 25px 50px rgba(234, 179, 8, 0.15);
    }
    .framed-image img,
    .collection-card img,
    .product-image img,
    .tile img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s ease;
    }
    .framed-image:hover img,
    .collection-card:hover img,
    .product-card:hover img,
    .tile:hover img {
        transform: scale(1.1);
    }
    .cta-primary,
    .cta-secondary {
        padding: 1.25rem 2.5rem;
        border-radius: 9999px;
        font-weight: 700;
        font-size: 1rem;
        cursor: pointer;
        transition: transform 0.2s ease, box-shadow 0.3s ease, background 0.3s ease, color 0.3s ease;
    }
    .cta-primary {
        border: none;
        color: #000;
        background: linear-gradient(90deg, #facc15, #ca8a04);
    }
    .cta-primary:hover {
        transform: scale(1.05);
        box-shadow: 0 0 40px rgba(250, 204, 21, 0.5);
    }
    .cta-secondary {
        border: 2px solid #eab308;
        color: #eab308;
        background: transparent;
    }
    .cta-secondary:hover {
        transform: scale(1.05);
        background: #eab308;
        color: #000;
    }
    .cta-primary:active,
    .cta-secondary:active {
        transform: scale(0.95);
    }

    /* Hero */
    .jewellery-page section.hero {
        height: 100vh;
        padding: 0;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .hero-background {
        position: absolute;
        inset: 0;
    }
    .hero-background img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .hero-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.8));
    }
    .hero-shimmer {
        position: absolute;
        inset: 0;
        background: linear-gradient(45deg, rgba(234, 179, 8, 0.1), transparent, rgba(202, 138, 4, 0.1));
        animation: heroPulse 20s linear infinite;
    }
    @keyframes heroPulse {
        0%, 100% { transform: scale(1); }
        50% { transform: scale(1.05); }
    }
    @keyframes heroRise {
        from { opacity: 0; transform: translateY(40px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .hero-content {
        position: relative;
        z-index: 10;
        text-align: center;
        max-width: 56rem;
        padding: 0 1rem;
        animation: heroRise 1s cubic-bezier(0.22, 1, 0.36, 1) 0.3s both;
    }
    .hero-content h1 {
        font-size: 6rem;
        font-weight: 700;
        margin: 0 0 1.5rem;
        background: linear-gradient(90deg, #fde047, #eab308, #ca8a04);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        animation: heroRise 1s ease 0.5s both;
    }
    .hero-tagline {
        font-size: 1.5rem;
        font-weight: 300;
        color: #d1d5db;
        margin: 0 0 2.5rem;
        animation: heroRise 1s ease 0.7s both;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        justify-content: center;
        animation: heroRise 1s ease 0.9s both;
    }
    .hero-since {
        margin-top: 2rem;
        color: #9ca3af;
        font-size: 0.875rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        animation: heroRise 1s ease 1.1s both;
    }

    /* About */
    .stats {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        margin-top: 2.5rem;
    }
    .stat {
        text-align: center;
        padding: 1.5rem 1rem;
        border-radius: 1rem;
        background: rgba(234, 179, 8, 0.05);
        border: 1px solid rgba(234, 179, 8, 0.2);
        transition: transform 0.3s ease, border-color 0.3s ease;
    }
    .stat:hover {
        transform: translateY(-5px);
        border-color: rgba(234, 179, 8, 0.6);
    }
    .stat-value {
        font-size: 2.25rem;
        font-weight: 700;
        color: #facc15;
    }
    .stat-label {
        color: #9ca3af;
        font-size: 0.875rem;
        margin-top: 0.5rem;
    }

    /* Collections */
    .collection-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .collection-card {
        position: relative;
        height: 380px;
        border-radius: 1.5rem;
        overflow: hidden;
        cursor: pointer;
    }
    .card-caption {
        position: absolute;
        inset: auto 0 0 0;
        padding: 2rem;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.95), transparent);
    }
    .card-caption h3 {
        margin: 0 0 0.5rem;
        font-size: 1.875rem;
        color: #facc15;
        transition: transform 0.3s ease;
    }
    .collection-card:hover .card-caption h3 {
        transform: translateX(0.5rem);
    }
    .card-caption p {
        margin: 0;
        color: #d1d5db;
    }

    /* Featured */
    .product-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .product-card {
        border-radius: 1.5rem;
        overflow: hidden;
        background: rgba(17, 24, 39, 0.8);
        border: 1px solid #1f2937;
        transition: border-color 0.3s ease, box-shadow 0.3s ease;
    }
    .product-card:hover {
        border-color: rgba(234, 179, 8, 0.5);
        box-shadow: 0 20px 40px rgba(234, 179, 8, 0.15);
    }
    .product-image {
        position: relative;
        height: 320px;
        overflow: hidden;
    }
    .badge {
        position: absolute;
        top: 1rem;
        left: 1rem;
        padding: 0.35rem 0.9rem;
        border-radius: 9999px;
        font-size: 0.75rem;
        font-weight: 700;
        color: #000;
    }
    .badge-bestseller {
        background: linear-gradient(90deg, #facc15, #ca8a04);
    }
    .badge-trending {
        background: linear-gradient(90deg, #f472b6, #db2777);
        color: #fff;
    }
    .badge-new {
        background: linear-gradient(90deg, #4ade80, #16a34a);
    }
    .product-info {
        padding: 1.5rem;
    }
    .product-info h3 {
        margin: 0 0 0.5rem;
        font-size: 1.25rem;
        font-weight: 600;
        transition: color 0.3s ease;
    }
    .product-card:hover .product-info h3 {
        color: #facc15;
    }
    .price {
        margin: 0;
        font-size: 1.5rem;
        font-weight: 700;
        color: #eab308;
    }

    /* Custom */
    .steps {
        list-style: none;
        margin: 2rem 0 2.5rem;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .step {
        display: flex;
        gap: 1.25rem;
        align-items: flex-start;
    }
    .step-number {
        flex-shrink: 0;
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        color: #000;
        background: linear-gradient(90deg, #facc15, #ca8a04);
    }
    .step h3 {
        margin: 0 0 0.25rem;
        font-size: 1.25rem;
        transition: color 0.3s ease;
    }
    .step:hover h3 {
        color: #facc15;
    }
    .step p {
        margin: 0;
        color: #9ca3af;
    }

    /* Testimonials */
    .testimonial-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .testimonial-card {
        padding: 2rem;
        border-radius: 1.5rem;
        background: rgba(17, 24, 39, 0.8);
        border: 1px solid rgba(234, 179, 8, 0.2);
    }
    .testimonial-header {
        display: flex;
        gap: 1rem;
        align-items: center;
        margin-bottom: 1.5rem;
    }
    .avatar {
        width: 4rem;
        height: 4rem;
        border-radius: 50%;
        object-fit: cover;
        border: 2px solid #eab308;
    }
    .testimonial-header h3 {
        margin: 0 0 0.25rem;
        font-size: 1.125rem;
    }
    .stars {
        display: flex;
        gap: 0.2rem;
    }
    .star {
        width: 1.25rem;
        height: 1.25rem;
        color: #facc15;
    }
    .review {
        margin: 0;
        color: #d1d5db;
        font-style: italic;
        line-height: 1.7;
    }

    /* Gallery */
    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        grid-auto-rows: 250px;
        gap: 1rem;
    }
    .tile {
        position: relative;
        border-radius: 1rem;
        overflow: hidden;
        cursor: pointer;
    }
    .tile-wide {
        grid-column: span 2;
    }
    .tile-large {
        grid-column: span 2;
        grid-row: span 2;
    }

    /* Quality */
    .promise-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .promise-card {
        text-align: center;
        padding: 2rem 1.5rem;
        border-radius: 1.5rem;
        background: rgba(17, 24, 39, 0.6);
        border: 1px solid #1f2937;
        transition: border-color 0.3s ease, transform 0.3s ease;
    }
    .promise-card:hover {
        border-color: rgba(234, 179, 8, 0.5);
        transform: translateY(-8px);
    }
    .promise-icon {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1.5rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #000;
        background: linear-gradient(90deg, #facc15, #ca8a04);
    }
    .promise-icon svg {
        width: 2rem;
        height: 2rem;
    }
    .promise-card h3 {
        margin: 0 0 0.75rem;
        font-size: 1.25rem;
    }
    .promise-card p {
        margin: 0;
        color: #9ca3af;
        font-size: 0.875rem;
    }

    /* Visit */
    .store-card {
        padding: 2.5rem;
        border-radius: 1.5rem;
        background: rgba(17, 24, 39, 0.8);
        border: 1px solid rgba(234, 179, 8, 0.2);
    }
    .store-card h3 {
        margin: 0 0 2rem;
        font-size: 1.875rem;
        color: #facc15;
    }
    .map-frame {
        height: 450px;
        border-radius: 1.5rem;
        overflow: hidden;
        border: 1px solid rgba(234, 179, 8, 0.3);
    }
    .map-frame iframe {
        width: 100%;
        height: 100%;
        border: 0;
    }

    /* Shared by the store and contact cards */
    .social-links {
        display: flex;
        gap: 1rem;
    }
    .social-link {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #1f2937;
        color: #eab308;
        transition: transform 0.3s ease, background 0.3s ease, color 0.3s ease;
    }
    .social-link:hover {
        transform: translateY(-5px) scale(1.1);
        background: linear-gradient(90deg, #facc15, #ca8a04);
        color: #000;
    }
    .social-icon {
        width: 1.25rem;
        height: 1.25rem;
    }

    @media (max-width: 1024px) {
        .collection-grid,
        .product-grid,
        .testimonial-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .promise-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .jewellery-page section {
            padding: 4rem 0;
        }
        .split {
            grid-template-columns: 1fr;
            gap: 2rem;
        }
        .section-heading {
            margin-bottom: 2.5rem;
        }
        .section-heading h2,
        .gold-heading {
            font-size: 2rem;
        }
        .hero-content h1 {
            font-size: 3rem;
        }
        .hero-tagline {
            font-size: 1.125rem;
        }
        .hero-cta-group {
            flex-direction: column;
        }
        .framed-image {
            height: 350px;
        }
        .testimonial-grid {
            grid-template-columns: 1fr;
        }
        .gallery-grid {
            grid-template-columns: repeat(2, 1fr);
            grid-auto-rows: 160px;
        }
        .stat-value {
            font-size: 1.5rem;
        }
        .map-frame {
            height: 300px;
        }
    }
"#;
