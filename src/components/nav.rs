use std::rc::Rc;

use yew::prelude::*;

use crate::content::nav_label;
use crate::tracker::browser::{use_active_section, use_scrolled_past};
use crate::tracker::policy::ActivePolicy;
use crate::tracker::registry::SectionRegistry;

/// Header turns opaque past this many pixels.
const SCROLLED_CLASS_THRESHOLD: f64 = 50.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
}

pub enum NavAction {
    /// Burger button pressed.
    Toggle,
    /// A navigation entry was chosen; the browser follows the anchor.
    Select,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::Toggle => NavState {
                menu_open: !self.menu_open,
            }
            .into(),
            NavAction::Select if self.menu_open => NavState { menu_open: false }.into(),
            NavAction::Select => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub registry: SectionRegistry,
    #[prop_or_default]
    pub policy: ActivePolicy,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, registry, policy } = props;
    let state = use_reducer(NavState::default);
    let active = use_active_section(registry.clone(), *policy);
    let is_scrolled = use_scrolled_past(SCROLLED_CLASS_THRESHOLD);

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavAction::Toggle);
        })
    };

    // No prevent_default: the anchor still has to scroll the page.
    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::Select))
    };

    let menu_class = if state.menu_open {
        "nav-menu mobile-menu-open"
    } else {
        "nav-menu"
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <nav class="nav-content">
                <a href={registry.first().anchor()} class="nav-logo" onclick={close_menu.clone()}>
                    {brand.clone()}
                </a>
                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        registry.iter().skip(1).map(|section| {
                            let is_active = section.id == active;
                            html! {
                                <a
                                    key={section.id}
                                    href={section.anchor()}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    aria-current={is_active.then(|| "true")}
                                    onclick={close_menu.clone()}
                                >
                                    {nav_label(section.id)}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </nav>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        background-color: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(5px);
                        z-index: 1000;
                        animation: navSlideIn 0.6s ease-out;
                        transition: background-color 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background-color: rgba(0, 0, 0, 0.85);
                    }
                    @keyframes navSlideIn {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 2rem;
                    }
                    .nav-logo {
                        color: var(--accent);
                        text-decoration: none;
                        font-weight: bold;
                        font-size: 1.5rem;
                        transition: transform 0.2s ease;
                    }
                    .nav-logo:hover {
                        transform: scale(1.05);
                    }
                    .nav-menu {
                        display: flex;
                        gap: 1rem;
                    }
                    .nav-link {
                        color: var(--foreground);
                        text-decoration: none;
                        font-weight: bold;
                        font-size: 1.1rem;
                        transition: color 0.3s ease, transform 0.2s ease;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: var(--accent);
                    }
                    .nav-link:hover {
                        transform: scale(1.1);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: var(--foreground);
                    }
                    @media (max-width: 768px) {
                        .nav-content {
                            flex-direction: column;
                            align-items: flex-start;
                        }
                        .burger-menu {
                            display: block;
                            position: absolute;
                            top: 1rem;
                            right: 1rem;
                        }
                        .nav-menu {
                            display: none;
                            flex-direction: column;
                            width: 100%;
                            padding-top: 1rem;
                        }
                        .nav-menu.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: NavState, action: NavAction) -> NavState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn menu_starts_closed() {
        assert!(!NavState::default().menu_open);
    }

    #[test]
    fn toggle_flips_menu() {
        let opened = apply(NavState::default(), NavAction::Toggle);
        assert!(opened.menu_open);
        let closed = apply(opened, NavAction::Toggle);
        assert!(!closed.menu_open);
    }

    #[test]
    fn selecting_an_entry_closes_open_menu() {
        let opened = apply(NavState::default(), NavAction::Toggle);
        assert!(!apply(opened, NavAction::Select).menu_open);
    }

    #[test]
    fn selecting_with_closed_menu_keeps_same_state() {
        let state = Rc::new(NavState::default());
        let next = Rc::clone(&state).reduce(NavAction::Select);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
