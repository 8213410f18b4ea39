use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ErrorEvent, Event};
use yew::prelude::*;

mod config;
mod error;
mod forms;
mod modal;
mod navigation;
mod state;
mod submission;
mod validation;
mod components {
    pub mod counter;
    pub mod fab;
    pub mod feedback;
    pub mod particles;
    pub mod reveal;
}
mod pages {
    pub mod careers;
    pub mod faq;
    pub mod home;
    pub mod partners;
}

use components::fab::BackToTop;
use forms::{FormKind, LeadForm};
use modal::{use_escape_closes_modal, use_scroll_lock, Modal, ModalId};
use navigation::{use_navigation, NavBar, Section};
use pages::{
    careers::Careers,
    faq::Faq,
    home::Home,
    partners::{Mechanics, Suppliers},
};
use state::{AppContext, AppState};
use submission::use_submission_simulator;

fn render_section(section: Section) -> Html {
    let page = match section {
        Section::Home => html! { <Home /> },
        Section::Mechanics => html! { <Mechanics /> },
        Section::Suppliers => html! { <Suppliers /> },
        Section::Careers => html! { <Careers /> },
        Section::Faq => html! { <Faq /> },
    };
    html! {
        <section id={section.id()} class="page active">
            {page}
        </section>
    }
}

#[function_component]
fn App() -> Html {
    let app: AppContext = use_reducer(AppState::default);

    use_navigation(&app);
    use_escape_closes_modal(&app);
    use_scroll_lock(app.is_scroll_locked());
    use_submission_simulator(&app, FormKind::Mechanic);
    use_submission_simulator(&app, FormKind::Supplier);
    use_submission_simulator(&app, FormKind::Career);

    html! {
        <ContextProvider<AppContext> context={app.clone()}>
            <NavBar />
            <main>
                { for app.visible_sections().map(render_section) }
            </main>

            <Modal modal={ModalId::Mechanic} title="Register as a Mechanic">
                <LeadForm kind={FormKind::Mechanic} />
            </Modal>
            <Modal modal={ModalId::Supplier} title="Register as a Supplier">
                <LeadForm kind={FormKind::Supplier} />
            </Modal>
            <Modal modal={ModalId::Career} title={app.career_title()}>
                <LeadForm kind={FormKind::Career} />
            </Modal>
            <Modal modal={ModalId::ThankYou} title="Thank You!">
                <p class="thank-you-text">
                    {"We have received your details. Our team will call you within 24 hours."}
                </p>
            </Modal>

            <BackToTop />
            <footer class="footer">
                <p>{"© SparesConnect. Connecting workshops with the parts they need."}</p>
            </footer>
        </ContextProvider<AppContext>>
    }
}

/// Logs uncaught errors and the page load time; neither is surfaced to the user.
fn install_global_listeners() {
    let Some(window) = window() else {
        return;
    };

    let on_error = Closure::wrap(Box::new(move |e: ErrorEvent| {
        log::error!("Application error: {}", e.message());
    }) as Box<dyn FnMut(ErrorEvent)>);
    if window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Could not listen for window errors");
    }
    on_error.forget();

    let on_load = Closure::wrap(Box::new(move |_: Event| {
        if let Some(performance) = web_sys::window().and_then(|window| window.performance()) {
            info!("Page load time: {:.0}ms", performance.now());
        }
    }) as Box<dyn FnMut(Event)>);
    if window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Could not listen for the load event");
    }
    on_load.forget();
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    install_global_listeners();

    info!("SparesConnect application initialized");
    yew::Renderer::<App>::new().render();
}
