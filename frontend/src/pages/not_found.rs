use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Nothing here. Which is also what most business advice contains."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the rant"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #111827;
                    color: #f3f4f6;
                    text-align: center;
                    padding: 0 1.5rem;
                }

                .not-found h1 {
                    font-size: 4rem;
                    color: #fbbf24;
                }

                .not-found-link {
                    color: #fcd34d;
                }
                "#}
            </style>
        </div>
    }
}
