use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::STORE_NAME;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="back-home">
                {format!("Back to {}", STORE_NAME)}
            </Link<Route>>
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #000;
                    }
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .not-found h1 {
                        font-size: 6rem;
                        margin: 0;
                        background: linear-gradient(90deg, #fde047, #eab308, #ca8a04);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .not-found p {
                        color: #9ca3af;
                    }
                    .back-home {
                        margin-top: 1.5rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        color: #000;
                        font-weight: 700;
                        text-decoration: none;
                        background: linear-gradient(90deg, #facc15, #ca8a04);
                    }
                "#}
            </style>
        </div>
    }
}
