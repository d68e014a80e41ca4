use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::landing::Landing;
use crate::theme::ThemeProvider;

pub mod components;
pub mod content;
pub mod pages;
pub mod theme;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"This page does not exist."}</p>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
