use yew::prelude::*;

use crate::components::feedback::{use_loading_skeleton, use_shake};
use crate::components::reveal::Reveal;
use crate::modal::ModalId;
use crate::pages::home::open_modal_on_click;
use crate::state::AppContext;

#[derive(Properties, PartialEq)]
struct PartnerPageProps {
    title: AttrValue,
    intro: AttrValue,
    benefits: &'static [(&'static str, &'static str)],
    cta_label: AttrValue,
    modal: ModalId,
}

#[function_component(PartnerPage)]
fn partner_page(props: &PartnerPageProps) -> Html {
    let loading = use_loading_skeleton();
    let shake = use_shake::<ModalId>();
    let app = use_context::<AppContext>();
    let Some(app) = app else {
        log::error!("{} rendered outside the app context", props.title);
        return html! {};
    };

    html! {
        <div class="partner-page">
            <section class="page-hero">
                <h1>{props.title.clone()}</h1>
                <p>{props.intro.clone()}</p>
            </section>
            <div class="advantage-grid">
                {
                    for props.benefits.iter().map(|(title, text)| html! {
                        <Reveal class={classes!("advantage-item", loading.then(|| "loading-skeleton"))}>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    })
                }
            </div>
            <div class="page-cta">
                <button
                    class={classes!("cta-button", shake.is_shaking(&props.modal).then(|| "shake"))}
                    onclick={open_modal_on_click(&app, &shake, props.modal)}
                >
                    {props.cta_label.clone()}
                </button>
            </div>
        </div>
    }
}

const MECHANIC_BENEFITS: &[(&str, &str)] = &[
    ("One Place for Every Part", "Stop calling ten shops. Post a request once and let suppliers come to you."),
    ("Verified Suppliers", "Every supplier is checked before listing, so you get genuine parts."),
    ("Credit for Regulars", "Workshops with steady orders unlock 15-day credit."),
    ("Delivery to Your Bay", "Parts are delivered straight to your workshop."),
];

const SUPPLIER_BENEFITS: &[(&str, &str)] = &[
    ("New Customers Daily", "Reach workshops across your city without a field team."),
    ("Move Slow Stock", "List ageing inventory and sell it to workshops that need it."),
    ("Weekly Payouts", "Delivered orders are settled to your bank every week."),
    ("We Handle Logistics", "Our riders pick up from your shop and deliver to the workshop."),
];

#[function_component(Mechanics)]
pub fn mechanics() -> Html {
    html! {
        <PartnerPage
            title="For Mechanics"
            intro="Get the right spare part, at the right price, without leaving your workshop."
            benefits={MECHANIC_BENEFITS}
            cta_label="Register Your Workshop"
            modal={ModalId::Mechanic}
        />
    }
}

#[function_component(Suppliers)]
pub fn suppliers() -> Html {
    html! {
        <PartnerPage
            title="For Suppliers"
            intro="Turn your stock into daily orders from workshops near you."
            benefits={SUPPLIER_BENEFITS}
            cta_label="Register Your Shop"
            modal={ModalId::Supplier}
        />
    }
}
