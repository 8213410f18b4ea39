use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::counter::StatCounter;
use crate::components::feedback::{use_loading_skeleton, use_shake, UseShakeHandle};
use crate::components::particles::ParticleField;
use crate::components::reveal::Reveal;
use crate::modal::ModalId;
use crate::state::{AppAction, AppContext};

/// Click handler that shakes the button and opens `modal`.
pub fn open_modal_on_click(
    app: &AppContext,
    shake: &UseShakeHandle<ModalId>,
    modal: ModalId,
) -> Callback<MouseEvent> {
    let dispatcher = app.dispatcher();
    let shake = shake.clone();
    Callback::from(move |_: MouseEvent| {
        shake.shake(modal);
        dispatcher.dispatch(AppAction::OpenModal(modal.id().to_string()))
    })
}

const FEATURES: [(&str, &str, &str); 4] = [
    ("fa-magnifying-glass", "Find Any Part", "Search genuine and aftermarket spares from hundreds of verified suppliers."),
    ("fa-truck-fast", "Same-Day Delivery", "Parts reach your workshop the same day in every city we serve."),
    ("fa-indian-rupee-sign", "Fair Prices", "Compare quotes side by side and pay wholesale rates."),
    ("fa-headset", "Always-On Support", "Our team answers on phone and WhatsApp whenever you are working."),
];

const STATS: [(&str, &str); 4] = [
    ("500+", "Registered Mechanics"),
    ("120+", "Verified Suppliers"),
    ("98%", "On-Time Deliveries"),
    ("24/7", "Support"),
];

const STEPS: [(&str, &str); 3] = [
    ("Register", "Sign up your workshop or shop in under two minutes."),
    ("Request", "Tell us the part and vehicle, and suppliers send quotes."),
    ("Receive", "Pick the best quote and get the part delivered."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let loading = use_loading_skeleton();
    let shake = use_shake::<ModalId>();
    let app = use_context::<AppContext>();
    let Some(app) = app else {
        log::error!("Home rendered outside the app context");
        return html! {};
    };

    html! {
        <div class="home-page">
            <section class="hero">
                <ParticleField />
                <div class="hero-content">
                    <h1>{"The Spare Parts Network for Every Workshop"}</h1>
                    <p>{"SparesConnect links mechanics with trusted spares suppliers so vehicles get back on the road faster."}</p>
                    <div class="hero-actions">
                        <button
                            id="mechanicCTA"
                            class={classes!("cta-button", shake.is_shaking(&ModalId::Mechanic).then(|| "shake"))}
                            onclick={open_modal_on_click(&app, &shake, ModalId::Mechanic)}
                        >
                            {"I'm a Mechanic"}
                        </button>
                        <button
                            id="supplierCTA"
                            class={classes!("cta-button", "secondary", shake.is_shaking(&ModalId::Supplier).then(|| "shake"))}
                            onclick={open_modal_on_click(&app, &shake, ModalId::Supplier)}
                        >
                            {"I'm a Supplier"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="features">
                <h2>{"Why SparesConnect"}</h2>
                <div class="feature-grid">
                    {
                        for FEATURES.iter().map(|(icon, title, text)| html! {
                            <Reveal class={classes!("feature-card", loading.then(|| "loading-skeleton"))}>
                                <i class={classes!("fas", *icon)}></i>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <section class="stats-section">
                { for STATS.iter().map(|(value, label)| html! { <StatCounter value={*value} label={*label} /> }) }
            </section>

            <section class="how-it-works">
                <h2>{"How It Works"}</h2>
                <div class="steps">
                    {
                        for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                            <Reveal class={classes!("how-step")}>
                                <span class="step-number">{i + 1}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </Reveal>
                        })
                    }
                </div>
            </section>
            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: linear-gradient(135deg, #e6f4f3 0%, #ffffff 100%);
                }
                .hero-content { position: relative; z-index: 1; max-width: 760px; padding: 2rem; }
                .hero-content h1 { font-size: 3rem; color: #0a7f7a; }
                .hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                .particles { position: absolute; inset: 0; pointer-events: none; }
                .particle {
                    position: absolute;
                    animation-name: floatUp;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                .particle.rotate-slow { animation-name: floatUpRotate; }
                @keyframes floatUp {
                    from { transform: translateY(0); }
                    to { transform: translateY(-110vh); }
                }
                @keyframes floatUpRotate {
                    from { transform: translateY(0) rotate(0deg); }
                    to { transform: translateY(-110vh) rotate(360deg); }
                }
                .features, .how-it-works { max-width: 1100px; margin: 0 auto; padding: 4rem 2rem; text-align: center; }
                .feature-grid, .steps {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .feature-card, .how-step {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 16px rgba(10, 127, 122, 0.08);
                }
                .feature-card i { font-size: 2rem; color: #0a7f7a; }
                .stats-section {
                    display: flex;
                    justify-content: space-around;
                    flex-wrap: wrap;
                    background: #0a7f7a;
                    color: #ffffff;
                    padding: 3rem 1rem;
                }
                .stat-number { font-size: 2.5rem; font-weight: 700; text-align: center; }
                .stat-label { opacity: 0.85; text-align: center; }
                .step-number {
                    display: inline-block;
                    width: 2.5rem;
                    height: 2.5rem;
                    line-height: 2.5rem;
                    border-radius: 50%;
                    background: #f59e0b;
                    color: #ffffff;
                    font-weight: 700;
                }
                "#}
            </style>
        </div>
    }
}
