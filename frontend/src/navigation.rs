use wasm_bindgen::JsValue;
use web_sys::{Event, MouseEvent, ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::feedback::use_shake;
use crate::config;
use crate::state::{AppAction, AppContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Mechanics,
    Suppliers,
    Careers,
    Faq,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Mechanics,
        Section::Suppliers,
        Section::Careers,
        Section::Faq,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Mechanics => "mechanics",
            Section::Suppliers => "suppliers",
            Section::Careers => "careers",
            Section::Faq => "faq",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    pub fn link_label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Mechanics => "For Mechanics",
            Section::Suppliers => "For Suppliers",
            Section::Careers => "Careers",
            Section::Faq => "FAQ",
        }
    }
}

/// `#faq` -> `faq`; an empty fragment falls back to the default section.
pub fn section_from_fragment(fragment: &str) -> String {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    if id.is_empty() {
        config::DEFAULT_SECTION.to_string()
    } else {
        id.to_string()
    }
}

fn current_fragment() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

pub fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Writes `#id` to the location and smooth-scrolls to the top of the page.
/// Only pushes a history entry when the fragment actually changes, so
/// back/forward navigation does not stack duplicates.
fn sync_location(section: Section) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let fragment = format!("#{}", section.id());
    if window.location().hash()? != fragment {
        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&fragment))?;
    }
    scroll_to_top(&window);
    Ok(())
}

/// Startup, location sync and back/forward handling for the section state.
#[hook]
pub fn use_navigation(app: &AppContext) {
    {
        let dispatcher = app.dispatcher();
        use_effect_with_deps(
            move |_| {
                // The link highlight is derived from `current_section`, so the
                // fragment only matters for the log; startup always lands on home.
                let initial = section_from_fragment(&current_fragment());
                log::info!(
                    "Initial location fragment is #{}, highlighting {} from the current section",
                    initial,
                    config::DEFAULT_SECTION
                );
                dispatcher.dispatch(AppAction::ShowSection(config::DEFAULT_SECTION.to_string()));
                || ()
            },
            (),
        );
    }

    // Keyed on the navigation count as well, so showing the current section
    // again still scrolls to the top.
    use_effect_with_deps(
        move |(section, _)| {
            if let Err(err) = sync_location(*section) {
                log::warn!("Could not sync location for {}: {:?}", section.id(), err);
            }
            || ()
        },
        (app.current_section, app.navigations),
    );

    let dispatcher = app.dispatcher();
    use_event_with_window("popstate", move |_: Event| {
        let id = section_from_fragment(&current_fragment());
        log::debug!("History navigation to {}", id);
        dispatcher.dispatch(AppAction::ShowSection(id));
    });
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let shake = use_shake::<Section>();
    let app = use_context::<AppContext>();
    let Some(app) = app else {
        log::error!("NavBar rendered outside the app context");
        return html! {};
    };

    let toggle_menu = {
        let app = app.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            app.dispatch(AppAction::ToggleMenu);
        })
    };

    let links = Section::ALL.into_iter().map(|section| {
        let onclick = {
            let app = app.clone();
            let shake = shake.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                shake.shake(section);
                app.dispatch(AppAction::ShowSection(section.id().to_string()));
            })
        };
        html! {
            <li>
                <a
                    href={format!("#{}", section.id())}
                    class={classes!(
                        "nav-link",
                        app.is_link_active(section).then(|| "active"),
                        shake.is_shaking(&section).then(|| "shake"),
                    )}
                    onclick={onclick}
                >
                    {section.link_label()}
                </a>
            </li>
        }
    });

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-logo">
                    <i class="fas fa-gears"></i>{" SparesConnect"}
                </a>
                <ul class={classes!("nav-menu", app.menu_open.then(|| "active"))}>
                    { for links }
                </ul>
                <button class="mobile-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    {"☰"}
                </button>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    background: #ffffff;
                    box-shadow: 0 2px 10px rgba(0, 0, 0, 0.08);
                    z-index: 1000;
                }
                .nav-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    position: relative;
                }
                .nav-logo {
                    color: #008080;
                    font-weight: 700;
                    font-size: 1.4rem;
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    color: #1f2933;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .nav-link.active {
                    color: #0a7f7a;
                    border-bottom: 2px solid #0a7f7a;
                }
                .mobile-toggle {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                    color: #008080;
                }
                @media (max-width: 768px) {
                    .mobile-toggle { display: block; }
                    .nav-menu {
                        display: none;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        background: #ffffff;
                        box-shadow: 0 2px 10px rgba(0,0,0,0.1);
                        padding: 1rem 2rem;
                    }
                    .nav-menu.active { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_from_fragment() {
        assert_eq!(section_from_fragment("#faq"), "faq");
        assert_eq!(section_from_fragment("careers"), "careers");
        assert_eq!(section_from_fragment("#"), "home");
        assert_eq!(section_from_fragment(""), "home");
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("pricing"), None);
        assert_eq!(Section::from_id("Home"), None);
    }
}
