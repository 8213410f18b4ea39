use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::feedback::use_shake;
use crate::components::reveal::Reveal;
use crate::state::{AppAction, AppContext};

struct Opening {
    title: &'static str,
    location: &'static str,
    summary: &'static str,
}

const OPENINGS: [Opening; 4] = [
    Opening {
        title: "Field Sales Executive",
        location: "Bengaluru",
        summary: "Visit workshops, onboard mechanics and grow our network in your area.",
    },
    Opening {
        title: "Supplier Relations Manager",
        location: "Chennai",
        summary: "Own relationships with spares distributors and keep listings accurate.",
    },
    Opening {
        title: "Delivery Partner",
        location: "Hyderabad",
        summary: "Pick up parts from suppliers and deliver them to workshops on time.",
    },
    Opening {
        title: "Customer Support Associate",
        location: "Pune",
        summary: "Help mechanics and suppliers by phone and WhatsApp, in English and Hindi.",
    },
];

#[function_component(Careers)]
pub fn careers() -> Html {
    let shake = use_shake::<&'static str>();
    let app = use_context::<AppContext>();
    let Some(app) = app else {
        log::error!("Careers rendered outside the app context");
        return html! {};
    };

    html! {
        <div class="careers-page">
            <section class="page-hero">
                <h1>{"Join Our Team"}</h1>
                <p>{"Help us build the parts network India's workshops run on."}</p>
            </section>
            <div class="job-list">
                {
                    for OPENINGS.iter().map(|opening| {
                        let onclick = {
                            let dispatcher = app.dispatcher();
                            let shake = shake.clone();
                            let title = opening.title;
                            Callback::from(move |_: MouseEvent| {
                                shake.shake(title);
                                dispatcher.dispatch(AppAction::ApplyForJob(title.to_string()))
                            })
                        };
                        html! {
                            <Reveal class={classes!("job-card")}>
                                <h3>{opening.title}</h3>
                                <span class="job-location"><i class="fas fa-location-dot"></i>{" "}{opening.location}</span>
                                <p>{opening.summary}</p>
                                <button
                                    class={classes!("job-button", shake.is_shaking(&opening.title).then(|| "shake"))}
                                    data-job={opening.title}
                                    onclick={onclick}
                                >
                                    {"Apply Now"}
                                </button>
                            </Reveal>
                        }
                    })
                }
            </div>
        </div>
    }
}
