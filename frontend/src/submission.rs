use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::forms::FormKind;
use crate::state::{AppAction, AppContext};

/// Stands in for a real send: once `kind` goes pending, waits the fixed
/// delay and reports completion. Nothing leaves the browser.
///
/// The effect only re-runs when the pending flag flips, and the reducer
/// refuses a second submit while pending, so each send starts one timer.
#[hook]
pub fn use_submission_simulator(app: &AppContext, kind: FormKind) {
    let dispatcher = app.dispatcher();
    use_effect_with_deps(
        move |pending| {
            if *pending {
                spawn_local(async move {
                    TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                    dispatcher.dispatch(AppAction::SubmitCompleted(kind));
                });
            }
            || ()
        },
        app.form(kind).pending,
    );
}
