use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::forms::FormKind;
use crate::state::{AppAction, AppContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    Mechanic,
    Supplier,
    Career,
    ThankYou,
}

impl ModalId {
    pub const ALL: [ModalId; 4] = [
        ModalId::Mechanic,
        ModalId::Supplier,
        ModalId::Career,
        ModalId::ThankYou,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ModalId::Mechanic => "mechanicModal",
            ModalId::Supplier => "supplierModal",
            ModalId::Career => "careerModal",
            ModalId::ThankYou => config::THANK_YOU_MODAL,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|modal| modal.id() == id)
    }

    pub fn form(self) -> Option<FormKind> {
        FormKind::ALL.into_iter().find(|kind| kind.modal() == self)
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub modal: ModalId,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay dialog, rendered only while it is the open modal.
/// Clicking the backdrop or the close button closes it.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let app = use_context::<AppContext>();
    let Some(app) = app else {
        log::error!("Modal {} rendered outside the app context", props.modal.id());
        return html! {};
    };

    if !app.is_modal_open(props.modal) {
        return html! {};
    }

    let close = {
        let app = app.clone();
        let modal = props.modal;
        Callback::from(move |_: MouseEvent| app.dispatch(AppAction::CloseModal(modal)))
    };

    html! {
        <div id={props.modal.id()} class="modal" onclick={close.clone()}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <span class="close" onclick={close}>{"×"}</span>
                <h2>{props.title.clone()}</h2>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .modal {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.55);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 2000;
                }
                .modal-content {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 2rem;
                    width: 90%;
                    max-width: 480px;
                    max-height: 90vh;
                    overflow-y: auto;
                    position: relative;
                }
                .close {
                    position: absolute;
                    top: 1rem;
                    right: 1.25rem;
                    font-size: 1.6rem;
                    cursor: pointer;
                }
                .form-group { display: flex; flex-direction: column; margin-bottom: 1rem; }
                .form-group input {
                    padding: 0.7rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 6px;
                    font-size: 1rem;
                }
                .form-error { color: #b91c1c; margin-bottom: 1rem; }
                "#}
            </style>
        </div>
    }
}

/// Escape closes whichever modal the state says is open.
#[hook]
pub fn use_escape_closes_modal(app: &AppContext) {
    let dispatcher = app.dispatcher();
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            dispatcher.dispatch(AppAction::CloseOpenModal);
        }
    });
}

/// Mirrors the scroll lock onto `body.style.overflow`.
#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            let overflow = if *locked { "hidden" } else { "auto" };
            let body = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body());
            match body {
                Some(body) => {
                    if body.style().set_property("overflow", overflow).is_err() {
                        log::warn!("Could not set body overflow to {}", overflow);
                    }
                }
                None => log::warn!("No document body to lock scrolling on"),
            }
            || ()
        },
        locked,
    );
}
