use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser::WindowOpener;
use crate::components::icon::Icon;
use crate::components::reveal::{Motion, Reveal};
use crate::content::{Section, SelectOption, BUDGET_RANGES, CONTACT_DETAILS, JEWELLERY_TYPES, SOCIAL_LINKS};
use crate::enquiry::{EnquiryForm, FieldUpdate};

fn on_input(on_field: &Callback<FieldUpdate>) -> Callback<InputEvent> {
    let on_field = on_field.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_field.emit(FieldUpdate {
            name: input.name(),
            value: input.value(),
        });
    })
}

fn on_textarea(on_field: &Callback<FieldUpdate>) -> Callback<InputEvent> {
    let on_field = on_field.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        on_field.emit(FieldUpdate {
            name: input.name(),
            value: input.value(),
        });
    })
}

fn on_select(on_field: &Callback<FieldUpdate>) -> Callback<Event> {
    let on_field = on_field.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_field.emit(FieldUpdate {
            name: select.name(),
            value: select.value(),
        });
    })
}

fn select_options(placeholder: &'static str, options: &[SelectOption], current: &str) -> Html {
    html! {
        <>
            <option value="" selected={current.is_empty()}>{placeholder}</option>
            { for options.iter().map(|option| html! {
                <option value={option.value} selected={current == option.value}>{option.label}</option>
            }) }
        </>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(EnquiryForm::default);
    let error = use_state(|| None::<String>);

    let on_field = {
        let dispatcher = form.dispatcher();
        Callback::from(move |update: FieldUpdate| dispatcher.dispatch(update))
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.submit(&WindowOpener) {
                Ok(_) => error.set(None),
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <section id={Section::Contact.id()} class="contact-section">
            <Reveal class="section-inner">
                <div class="section-heading">
                    <h2>{"Get In Touch"}</h2>
                    <p>{"Let us help you find or create your perfect piece"}</p>
                </div>

                <div class="contact-grid">
                    <Reveal motion={Motion::SlideLeft} class="contact-card">
                        <h3>{"Send us a message"}</h3>
                        <form class="enquiry-form" onsubmit={on_submit}>
                            <label class="form-field">
                                <span>{"Name"}</span>
                                <input type="text" name="name" value={form.name.clone()} oninput={on_input(&on_field)} required=true placeholder="Your full name" />
                            </label>
                            <label class="form-field">
                                <span>{"Email"}</span>
                                <input type="email" name="email" value={form.email.clone()} oninput={on_input(&on_field)} required=true placeholder="your@email.com" />
                            </label>
                            <label class="form-field">
                                <span>{"Phone"}</span>
                                <input type="tel" name="phone" value={form.phone.clone()} oninput={on_input(&on_field)} required=true placeholder="+91 XXXXX XXXXX" />
                            </label>
                            <label class="form-field">
                                <span>{"Jewellery Type"}</span>
                                <select name="jewelleryType" onchange={on_select(&on_field)} required=true>
                                    { select_options("Select type", &JEWELLERY_TYPES, &form.jewellery_type) }
                                </select>
                            </label>
                            <label class="form-field">
                                <span>{"Budget"}</span>
                                <select name="budget" onchange={on_select(&on_field)} required=true>
                                    { select_options("Select budget range", &BUDGET_RANGES, &form.budget) }
                                </select>
                            </label>
                            <label class="form-field">
                                <span>{"Message"}</span>
                                <textarea name="message" rows="4" value={form.message.clone()} oninput={on_textarea(&on_field)} required=true placeholder="Tell us about your requirements..." />
                            </label>
                            <button type="submit" class="submit-button">
                                <span>{"Send Message via WhatsApp"}</span>
                            </button>
                            {
                                if let Some(message) = (*error).as_ref() {
                                    html! { <p class="form-error">{message}</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </form>
                    </Reveal>

                    <Reveal motion={Motion::SlideRight} class="contact-card store-details">
                        <h3>{"Store Details"}</h3>
                        <ul class="detail-list">
                            { for CONTACT_DETAILS.iter().map(|item| html! {
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
                        <div class="social-block">
                            <h4>{"Follow Us"}</h4>
                            <div class="social-links">
                                { for SOCIAL_LINKS.iter().map(|link| html! {
                                    <a href={link.href} class="social-link" aria-label={link.name}>
                                        <Icon path={link.icon} class="social-icon" filled=true />
                                    </a>
                                }) }
                            </div>
                        </div>
                    </Reveal>
                </div>
            </Reveal>

            <style>
                {r#"
                    .contact-section {
                        padding: 6rem 0;
                        background: linear-gradient(to bottom, #000, #030712, #111827);
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }
                    .contact-card {
                        background: rgba(17, 24, 39, 0.8);
                        border: 1px solid rgba(234, 179, 8, 0.2);
                        border-radius: 1.5rem;
                        padding: 2.5rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                    }
                    .contact-card h3 {
                        font-size: 1.875rem;
                        font-weight: 600;
                        color: #fff;
                        margin: 0 0 2rem;
                    }
                    .store-details h3 {
                        color: #facc15;
                    }
                    .enquiry-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .form-field span {
                        color: #d1d5db;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        padding: 1rem 1.25rem;
                        background: rgba(31, 41, 55, 0.8);
                        border: 1px solid #374151;
                        border-radius: 0.75rem;
                        color: #fff;
                        font: inherit;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                        box-sizing: border-box;
                    }
                    .form-field input:focus,
                    .form-field select:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #eab308;
                        box-shadow: 0 0 0 3px rgba(234, 179, 8, 0.2);
                    }
                    .submit-button {
                        width: 100%;
                        padding: 1.25rem 2rem;
                        background: linear-gradient(90deg, #facc15, #ca8a04);
                        color: #000;
                        font-weight: 700;
                        border: none;
                        border-radius: 0.75rem;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.3s ease;
                    }
                    .submit-button:hover {
                        transform: scale(1.02);
                        box-shadow: 0 0 50px rgba(250, 204, 21, 0.5);
                    }
                    .submit-button:active {
                        transform: scale(0.98);
                    }
                    .form-error {
                        color: #f87171;
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .detail-list {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .detail-item {
                        display: flex;
                        gap: 1rem;
                    }
                    .detail-icon {
                        flex-shrink: 0;
                        width: 1.75rem;
                        height: 1.75rem;
                        color: #eab308;
                    }
                    .detail-item h4 {
                        margin: 0 0 0.5rem;
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }
                    .detail-item:hover h4 {
                        color: #facc15;
                    }
                    .detail-item p {
                        margin: 0;
                        color: #9ca3af;
                    }
                    .social-block {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(234, 179, 8, 0.2);
                    }
                    .social-block h4 {
                        margin: 0 0 1rem;
                        color: #fff;
                    }
                    @media (max-width: 768px) {
                        .contact-section {
                            padding: 4rem 0;
                        }
                        .contact-grid {
                            grid-template-columns: 1fr;
                            gap: 2rem;
                        }
                        .contact-card {
                            padding: 1.5rem;
                        }
                        .contact-card h3 {
                            font-size: 1.5rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
