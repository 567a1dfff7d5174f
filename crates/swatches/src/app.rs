use crate::components::{
    gallery_page::GalleryPage, not_found::NotFound, username_page::UsernamePage,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/badge")]
    Badge,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn render(route: Route) -> Html {
        match route {
            Route::Home => html! { <GalleryPage /> },
            Route::Badge => html! { <UsernamePage /> },
            Route::NotFound => html! { <NotFound /> },
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="container">
            <BrowserRouter>
                <nav>
                    <Link<Route> to={Route::Home}>
                        {"Gradients"}
                    </Link<Route>>
                    {" "}
                    <Link<Route> to={Route::Badge}>
                        {"Badge"}
                    </Link<Route>>
                </nav>
                <Switch<Route> render={Route::render} />
            </BrowserRouter>
        </div>
    }
}
