use std::rc::Rc;

use yew::prelude::*;

use crate::error::UiError;
use crate::forms::{FormKind, FormRecord, FormState};
use crate::modal::ModalId;
use crate::navigation::Section;
use crate::validation;

pub type AppContext = UseReducerHandle<AppState>;

#[derive(Debug, Clone)]
pub enum AppAction {
    ShowSection(String),
    ToggleMenu,
    OpenModal(String),
    CloseModal(ModalId),
    /// Escape key.
    CloseOpenModal,
    ApplyForJob(String),
    SetField {
        kind: FormKind,
        field: &'static str,
        value: String,
    },
    Submit(FormKind),
    SubmitCompleted(FormKind),
}

/// The whole UI state of the page. Only the transitions below change it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub current_section: Section,
    pub open_modal: Option<ModalId>,
    pub menu_open: bool,
    /// Bumped on every successful `show_section`, so repeat visits to the
    /// current section still scroll back to the top.
    pub navigations: u32,
    forms: [FormState; 3],
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_section: Section::Home,
            open_modal: None,
            menu_open: false,
            navigations: 0,
            forms: Default::default(),
        }
    }
}

impl AppState {
    pub fn form(&self, kind: FormKind) -> &FormState {
        &self.forms[kind as usize]
    }

    fn form_mut(&mut self, kind: FormKind) -> &mut FormState {
        &mut self.forms[kind as usize]
    }

    pub fn visible_sections(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL.into_iter().filter(|section| *section == self.current_section)
    }

    pub fn is_link_active(&self, section: Section) -> bool {
        section == self.current_section
    }

    pub fn is_modal_open(&self, modal: ModalId) -> bool {
        self.open_modal == Some(modal)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.open_modal.is_some()
    }

    /// "Apply for <position>" once a job has been picked.
    pub fn career_title(&self) -> String {
        match self.form(FormKind::Career).record.get("position") {
            "" => "Join Our Team".to_string(),
            position => format!("Apply for {}", position),
        }
    }

    pub fn show_section(&mut self, id: &str) -> Result<(), UiError> {
        let section = Section::from_id(id).ok_or_else(|| UiError::SectionNotFound(id.to_string()))?;
        self.current_section = section;
        self.menu_open = false;
        self.navigations = self.navigations.wrapping_add(1);
        Ok(())
    }

    pub fn open_modal(&mut self, id: &str) -> Result<(), UiError> {
        let modal = ModalId::from_id(id).ok_or_else(|| UiError::ModalNotFound(id.to_string()))?;
        self.replace_modal(modal);
        Ok(())
    }

    /// Makes `modal` the open one. A different modal that was open is closed
    /// first, which resets its form.
    fn replace_modal(&mut self, modal: ModalId) {
        if let Some(previous) = self.open_modal.filter(|previous| *previous != modal) {
            self.close_modal(previous);
        }
        self.open_modal = Some(modal);
    }

    /// Hides the modal and clears its form.
    pub fn close_modal(&mut self, modal: ModalId) {
        if self.open_modal == Some(modal) {
            self.open_modal = None;
        }
        if let Some(kind) = modal.form() {
            self.form_mut(kind).reset();
        }
    }

    pub fn close_open_modal(&mut self) -> Option<ModalId> {
        let modal = self.open_modal?;
        self.close_modal(modal);
        Some(modal)
    }

    pub fn apply_for_job(&mut self, title: &str) {
        self.replace_modal(ModalId::Career);
        self.form_mut(FormKind::Career).record.set("position", title);
    }

    pub fn set_field(&mut self, kind: FormKind, field: &'static str, value: String) {
        self.form_mut(kind).record.set(field, value);
    }

    /// Validates the form and marks it pending. The returned record is what
    /// the simulated send "transmits".
    ///
    /// A failed validation is kept on the form so it can be shown; every
    /// other error leaves the state untouched.
    pub fn begin_submit(&mut self, kind: FormKind) -> Result<FormRecord, UiError> {
        if self.form(kind).pending {
            return Err(UiError::SubmissionInFlight(kind));
        }

        let result = validation::validate(kind, &self.form(kind).record);
        if !result.is_ok() {
            let message = result.first().map(|failure| failure.reason.clone()).unwrap_or_default();
            let err = UiError::Validation { kind, message };
            self.form_mut(kind).validation = Some(result);
            return Err(err);
        }

        if !self.is_modal_open(kind.modal()) {
            return Err(UiError::NoActiveModal(kind));
        }

        let form = self.form_mut(kind);
        form.validation = None;
        form.pending = true;
        Ok(form.record.clone())
    }

    /// Ends the simulated send: closes whichever modal is open, resetting
    /// its form, and shows the thank-you modal.
    pub fn complete_submit(&mut self, kind: FormKind) {
        self.form_mut(kind).pending = false;
        self.close_open_modal();
        self.open_modal = Some(ModalId::ThankYou);
    }

    fn apply(&mut self, action: AppAction) -> Result<(), UiError> {
        match action {
            AppAction::ShowSection(id) => {
                self.show_section(&id)?;
                log::info!("Showing page: {}", id);
            }
            AppAction::ToggleMenu => self.menu_open = !self.menu_open,
            AppAction::OpenModal(id) => {
                self.open_modal(&id)?;
                log::info!("Opening modal: {}", id);
            }
            AppAction::CloseModal(modal) => {
                self.close_modal(modal);
                log::debug!("Closed modal: {}", modal.id());
            }
            AppAction::CloseOpenModal => {
                if let Some(modal) = self.close_open_modal() {
                    log::debug!("Closed modal with Escape: {}", modal.id());
                }
            }
            AppAction::ApplyForJob(title) => {
                log::info!("Opening application for {}", title);
                self.apply_for_job(&title);
            }
            AppAction::SetField { kind, field, value } => self.set_field(kind, field, value),
            AppAction::Submit(kind) => {
                let record = self.begin_submit(kind)?;
                log::info!("Submitting form: {} {}", kind, record.to_json());
            }
            AppAction::SubmitCompleted(kind) => {
                self.complete_submit(kind);
                log::info!("Form submitted successfully: {}", kind);
            }
        }
        Ok(())
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Err(err) = next.apply(action) {
            match err {
                UiError::SectionNotFound(_) | UiError::ModalNotFound(_) => log::error!("{}", err),
                UiError::SubmissionInFlight(_) | UiError::NoActiveModal(_) => log::warn!("{}", err),
                UiError::Validation { .. } => log::info!("{}", err),
            }
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dispatch(state: Rc<AppState>, action: AppAction) -> Rc<AppState> {
        state.reduce(action)
    }

    fn fill_valid_mechanic(mut state: Rc<AppState>) -> Rc<AppState> {
        for (field, value) in [
            ("name", "Ravi Kumar"),
            ("mobile", "9876543210"),
            ("workshop", "Kumar Auto Works"),
            ("city", "Bengaluru"),
            ("state", "Karnataka"),
            ("pincode", "560001"),
        ] {
            state = dispatch(
                state,
                AppAction::SetField { kind: FormKind::Mechanic, field, value: value.to_string() },
            );
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.current_section, Section::Home);
        assert_eq!(state.open_modal, None);
        assert!(!state.is_scroll_locked());
    }

    #[test]
    fn test_show_section_keeps_exactly_one_visible_and_active() {
        for section in Section::ALL {
            let state = dispatch(Rc::new(AppState::default()), AppAction::ShowSection(section.id().into()));
            assert_eq!(state.visible_sections().collect::<Vec<_>>(), vec![section]);
            let active: Vec<_> = Section::ALL.into_iter().filter(|s| state.is_link_active(*s)).collect();
            assert_eq!(active, vec![section]);
        }
    }

    #[test]
    fn test_show_unknown_section_keeps_previous() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::ShowSection("faq".into()));
        let after = dispatch(state.clone(), AppAction::ShowSection("pricing".into()));
        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.current_section, Section::Faq);

        let mut raw = AppState::default();
        assert_eq!(raw.show_section("pricing"), Err(UiError::SectionNotFound("pricing".into())));
    }

    #[test]
    fn test_show_same_section_twice_keeps_view_but_counts_navigation() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::ShowSection("careers".into()));
        let again = dispatch(state.clone(), AppAction::ShowSection("careers".into()));
        assert_eq!(again.current_section, state.current_section);
        assert_eq!(again.visible_sections().collect::<Vec<_>>(), vec![Section::Careers]);
        assert_eq!(again.navigations, state.navigations + 1);
    }

    #[test]
    fn test_unknown_section_does_not_count_navigation() {
        let mut state = AppState::default();
        assert!(state.show_section("faq").is_ok());
        assert_eq!(state.show_section("pricing"), Err(UiError::SectionNotFound("pricing".into())));
        assert_eq!(state.navigations, 1);
        assert_eq!(state.current_section, Section::Faq);
    }

    #[test]
    fn test_show_section_closes_mobile_menu() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::ToggleMenu);
        assert!(state.menu_open);
        let state = dispatch(state, AppAction::ShowSection("faq".into()));
        assert!(!state.menu_open);
    }

    #[test]
    fn test_open_modal_locks_scrolling() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("supplierModal".into()));
        assert_eq!(state.open_modal, Some(ModalId::Supplier));
        assert!(state.is_scroll_locked());
    }

    #[test]
    fn test_open_unknown_modal_is_ignored() {
        let state = Rc::new(AppState::default());
        let after = dispatch(state.clone(), AppAction::OpenModal("loginModal".into()));
        assert!(Rc::ptr_eq(&state, &after));

        let mut raw = AppState::default();
        assert_eq!(raw.open_modal("loginModal"), Err(UiError::ModalNotFound("loginModal".into())));
        assert_eq!(raw.open_modal, None);
    }

    #[test]
    fn test_opening_another_modal_resets_the_replaced_form() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("mechanicModal".into()));
        let state = fill_valid_mechanic(state);
        let state = dispatch(state, AppAction::OpenModal("supplierModal".into()));

        assert_eq!(state.open_modal, Some(ModalId::Supplier));
        assert_eq!(state.form(FormKind::Mechanic).record, FormRecord::default());
    }

    #[test]
    fn test_reopening_the_same_modal_keeps_its_fields() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("mechanicModal".into()));
        let state = fill_valid_mechanic(state);
        let again = dispatch(state.clone(), AppAction::OpenModal("mechanicModal".into()));
        assert!(Rc::ptr_eq(&state, &again));
        assert_eq!(again.form(FormKind::Mechanic).record.get("name"), "Ravi Kumar");
    }

    #[test]
    fn test_apply_for_job_resets_the_replaced_form() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("mechanicModal".into()));
        let state = fill_valid_mechanic(state);
        let state = dispatch(state, AppAction::ApplyForJob("Delivery Partner".into()));

        assert_eq!(state.open_modal, Some(ModalId::Career));
        assert_eq!(state.form(FormKind::Mechanic).record, FormRecord::default());
        assert_eq!(state.form(FormKind::Career).record.get("position"), "Delivery Partner");
    }

    #[test]
    fn test_escape_closes_open_modal_and_unlocks() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("mechanicModal".into()));
        let state = dispatch(state, AppAction::CloseOpenModal);
        assert_eq!(state.open_modal, None);
        assert!(!state.is_scroll_locked());
    }

    #[test]
    fn test_escape_without_open_modal_is_a_no_op() {
        let state = Rc::new(AppState::default());
        let after = dispatch(state.clone(), AppAction::CloseOpenModal);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn test_closing_modal_resets_its_form() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("mechanicModal".into()));
        let state = fill_valid_mechanic(state);
        let state = dispatch(state, AppAction::CloseModal(ModalId::Mechanic));
        assert_eq!(state.form(FormKind::Mechanic).record, FormRecord::default());
        assert_eq!(state.open_modal, None);
    }

    #[test]
    fn test_apply_for_job_fills_position_and_opens_career_modal() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::ApplyForJob("Field Sales Executive".into()));
        assert_eq!(state.open_modal, Some(ModalId::Career));
        assert_eq!(state.form(FormKind::Career).record.get("position"), "Field Sales Executive");
        assert_eq!(state.career_title(), "Apply for Field Sales Executive");
    }

    #[test]
    fn test_invalid_submit_records_first_failure() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("mechanicModal".into()));
        let state = dispatch(
            state,
            AppAction::SetField { kind: FormKind::Mechanic, field: "name", value: "Ravi".into() },
        );
        let state = dispatch(state, AppAction::Submit(FormKind::Mechanic));

        let form = state.form(FormKind::Mechanic);
        assert!(!form.pending);
        let first = form.validation.as_ref().and_then(|result| result.first());
        assert_eq!(first.map(|failure| failure.field), Some("mobile"));
    }

    #[test]
    fn test_valid_submit_goes_pending_then_shows_thank_you() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("mechanicModal".into()));
        let state = fill_valid_mechanic(state);

        let state = dispatch(state, AppAction::Submit(FormKind::Mechanic));
        assert!(state.form(FormKind::Mechanic).pending);
        assert_eq!(state.open_modal, Some(ModalId::Mechanic));

        let state = dispatch(state, AppAction::SubmitCompleted(FormKind::Mechanic));
        let form = state.form(FormKind::Mechanic);
        assert!(!form.pending);
        assert_eq!(form.record, FormRecord::default());
        assert_eq!(state.open_modal, Some(ModalId::ThankYou));
        assert!(!state.is_modal_open(ModalId::Mechanic));
    }

    #[test]
    fn test_second_submit_while_pending_is_rejected() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("mechanicModal".into()));
        let state = fill_valid_mechanic(state);
        let state = dispatch(state, AppAction::Submit(FormKind::Mechanic));

        let again = dispatch(state.clone(), AppAction::Submit(FormKind::Mechanic));
        assert!(Rc::ptr_eq(&state, &again));

        let mut raw = (*state).clone();
        assert_eq!(
            raw.begin_submit(FormKind::Mechanic),
            Err(UiError::SubmissionInFlight(FormKind::Mechanic))
        );
    }

    #[test]
    fn test_submit_without_open_modal_is_skipped() {
        let state = fill_valid_mechanic(Rc::new(AppState::default()));
        let after = dispatch(state.clone(), AppAction::Submit(FormKind::Mechanic));
        assert!(Rc::ptr_eq(&state, &after));
        assert!(!after.form(FormKind::Mechanic).pending);
    }

    #[test]
    fn test_completion_after_manual_close_still_thanks() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("mechanicModal".into()));
        let state = fill_valid_mechanic(state);
        let state = dispatch(state, AppAction::Submit(FormKind::Mechanic));
        let state = dispatch(state, AppAction::CloseOpenModal);
        assert!(state.form(FormKind::Mechanic).pending);

        let state = dispatch(state, AppAction::SubmitCompleted(FormKind::Mechanic));
        assert_eq!(state.open_modal, Some(ModalId::ThankYou));
        assert!(!state.form(FormKind::Mechanic).pending);
    }

    #[test]
    fn test_completion_resets_a_different_open_modal() {
        let state = dispatch(Rc::new(AppState::default()), AppAction::OpenModal("mechanicModal".into()));
        let state = fill_valid_mechanic(state);
        let state = dispatch(state, AppAction::Submit(FormKind::Mechanic));
        let state = dispatch(state, AppAction::CloseOpenModal);
        let state = dispatch(state, AppAction::OpenModal("supplierModal".into()));
        let state = dispatch(
            state,
            AppAction::SetField { kind: FormKind::Supplier, field: "name", value: "Half typed".into() },
        );

        let state = dispatch(state, AppAction::SubmitCompleted(FormKind::Mechanic));
        assert_eq!(state.open_modal, Some(ModalId::ThankYou));
        assert_eq!(state.form(FormKind::Supplier).record.get("name"), "");
        assert!(!state.form(FormKind::Mechanic).pending);
    }
}
