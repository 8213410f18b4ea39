use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::modal::ModalId;
use crate::state::{AppAction, AppContext};
use crate::validation::ValidationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Mechanic,
    Supplier,
    Career,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Mechanic, FormKind::Supplier, FormKind::Career];

    pub fn modal(self) -> ModalId {
        match self {
            FormKind::Mechanic => ModalId::Mechanic,
            FormKind::Supplier => ModalId::Supplier,
            FormKind::Career => ModalId::Career,
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            FormKind::Mechanic => "mechanicForm",
            FormKind::Supplier => "supplierForm",
            FormKind::Career => "careerForm",
        }
    }

    /// Fields in the order they are rendered.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormKind::Mechanic => MECHANIC_FIELDS,
            FormKind::Supplier => SUPPLIER_FIELDS,
            FormKind::Career => CAREER_FIELDS,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Career => "Submit Application",
            _ => "Register Now",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormKind::Mechanic => "Mechanic Registration",
            FormKind::Supplier => "Supplier Registration",
            FormKind::Career => "Job Application",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
}

const fn field(
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> FieldSpec {
    FieldSpec { name, label, input_type, placeholder }
}

const MECHANIC_FIELDS: &[FieldSpec] = &[
    field("name", "Full Name", "text", "Your full name"),
    field("mobile", "Mobile Number", "tel", "10-digit mobile number"),
    field("workshop", "Workshop Name", "text", "Name of your workshop"),
    field("city", "City", "text", "City"),
    field("state", "State", "text", "State"),
    field("pincode", "Pincode", "text", "6-digit pincode"),
];

const SUPPLIER_FIELDS: &[FieldSpec] = &[
    field("name", "Full Name", "text", "Your full name"),
    field("mobile", "Mobile Number", "tel", "10-digit mobile number"),
    field("shop", "Shop Name", "text", "Name of your spares shop"),
    field("city", "City", "text", "City"),
    field("state", "State", "text", "State"),
    field("pincode", "Pincode", "text", "6-digit pincode"),
];

const CAREER_FIELDS: &[FieldSpec] = &[
    field("position", "Position", "hidden", ""),
    field("name", "Full Name", "text", "Your full name"),
    field("mobile", "Mobile Number", "tel", "10-digit mobile number"),
    field("city", "City", "text", "City"),
    field("state", "State", "text", "State"),
    field("resume", "Resume Link", "url", "Google Drive or Docs link"),
];

/// Field values collected from one form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormRecord(BTreeMap<&'static str, String>);

impl FormRecord {
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub record: FormRecord,
    pub validation: Option<ValidationResult>,
    /// Set while the simulated send is running; a second submit is rejected.
    pub pending: bool,
}

impl FormState {
    pub fn reset(&mut self) {
        self.record.clear();
        self.validation = None;
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub kind: FormKind,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let kind = props.kind;
    let app = use_context::<AppContext>();
    let Some(app) = app else {
        log::error!("LeadForm rendered outside the app context");
        return html! {};
    };
    let form = app.form(kind).clone();

    let onsubmit = {
        let app = app.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            app.dispatch(AppAction::Submit(kind));
        })
    };

    let first_failure = form
        .validation
        .as_ref()
        .and_then(|result| result.first())
        .map(|failure| failure.reason.clone());

    html! {
        <form id={kind.dom_id()} class="lead-form" onsubmit={onsubmit} novalidate={true}>
            {
                for kind.fields().iter().map(|spec| {
                    let name = spec.name;
                    let input_id = format!("{}-{}", kind.dom_id(), name);
                    let oninput = {
                        let app = app.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            app.dispatch(AppAction::SetField { kind, field: name, value: input.value() });
                        })
                    };
                    let input = html! {
                        <input
                            id={input_id.clone()}
                            type={spec.input_type}
                            name={name}
                            placeholder={spec.placeholder}
                            value={form.record.get(name).to_string()}
                            oninput={oninput}
                        />
                    };
                    if spec.input_type == "hidden" {
                        input
                    } else {
                        html! {
                            <div class="form-group">
                                <label for={input_id}>{spec.label}</label>
                                {input}
                            </div>
                        }
                    }
                })
            }
            if let Some(message) = first_failure {
                <div class="form-error" role="alert">{message}</div>
            }
            <button type="submit" class="submit-button" disabled={form.pending}>
                { if form.pending { config::PENDING_LABEL } else { kind.submit_label() } }
            </button>
        </form>
    }
}
