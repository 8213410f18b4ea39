use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::navigation::scroll_to_top;

/// Floating back-to-top button, shown once the page has scrolled far enough.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let bouncing = use_state(|| false);
    let visible = scroll_y > config::FAB_SCROLL_THRESHOLD;

    let onclick = {
        let bouncing = bouncing.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                scroll_to_top(&window);
            }

            bouncing.set(true);
            let bouncing = bouncing.clone();
            Timeout::new(config::FAB_BOUNCE_MS, move || bouncing.set(false)).forget();
        })
    };

    html! {
        <button
            id="fab"
            class={classes!("fab", visible.then(|| "visible"), (*bouncing).then(|| "bounce"))}
            aria-label="Back to top"
            onclick={onclick}
        >
            <i class="fas fa-arrow-up"></i>
            <style>
                {r#"
                .fab {
                    position: fixed;
                    right: 2rem;
                    bottom: 2rem;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: none;
                    background: #0a7f7a;
                    color: #ffffff;
                    cursor: pointer;
                    opacity: 0;
                    transform: scale(0);
                    transition: all 0.3s ease;
                }
                .fab.visible { opacity: 1; transform: scale(1); }
                .fab.bounce { animation: bounce 1s ease; }
                @keyframes bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-12px); }
                }
                "#}
            </style>
        </button>
    }
}
