use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::state::sections::SectionDescriptor;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub sections: &'static [SectionDescriptor],
    pub active: &'static str,
    pub menu_open: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
}

const CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";
const HAMBURGER_ICON: &str = "M4 6h16M4 12h16M4 18h16";

/// Only the control for the active section gets the highlight class.
fn active_class(active: &str, id: &str) -> Option<&'static str> {
    (active == id).then_some("active-nav-item")
}

fn burger_icon_path(menu_open: bool) -> &'static str {
    if menu_open {
        CLOSE_ICON
    } else {
        HAMBURGER_ICON
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, menu_open, on_navigate, on_toggle_menu, .. } = props;
    let sections = props.sections;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let nav_button = |section: &'static SectionDescriptor, base: &'static str| {
        let id = section.id;
        let on_navigate = on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(id);
        });
        html! {
            <button
                key={id}
                data-section={id}
                class={classes!(base, active_class(active, id))}
                {onclick}
            >
                {section.label}
            </button>
        }
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <div class="nav-logo">{config::SITE_NAME}</div>

                <nav class="nav-desktop">
                    { for sections.iter().map(|s| nav_button(s, "nav-link")) }
                </nav>

                <button class="burger-menu" onclick={toggle_menu}>
                    <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={burger_icon_path(*menu_open)} />
                    </svg>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile">
                            { for sections.iter().map(|s| nav_button(s, "nav-mobile-link")) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::sections::{SectionTracker, SECTIONS};

    #[test]
    fn exactly_one_control_is_highlighted() {
        let mut tracker = SectionTracker::default();
        for target in SECTIONS {
            tracker.activate(target.id);
            let highlighted: Vec<&str> = SECTIONS
                .iter()
                .filter(|s| active_class(tracker.active_id(), s.id).is_some())
                .map(|s| s.id)
                .collect();
            assert_eq!(highlighted, vec![target.id]);
        }
    }

    #[test]
    fn burger_icon_follows_menu_state() {
        assert_eq!(burger_icon_path(false), HAMBURGER_ICON);
        assert_eq!(burger_icon_path(true), CLOSE_ICON);
    }
}
