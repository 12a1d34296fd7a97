use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

const THEME_STORAGE_KEY: &str = "theme";

/// Colour scheme preference, persisted across visits.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn attribute(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Handle returned by the `use_theme` hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Custom hook for theme management with localStorage persistence
#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| load_theme_preference().unwrap_or(Theme::Light));

    // Effect: apply theme to the document and persist the choice
    {
        let theme_value = *theme;
        use_effect_with(theme_value, move |theme| {
            apply_theme_to_dom(*theme);
            save_theme_preference(*theme);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = match *theme {
                Theme::Dark => Theme::Light,
                Theme::Light => Theme::Dark,
            };
            theme.set(next);
        })
    };

    ThemeHandle {
        theme: *theme,
        toggle,
    }
}

/// Apply theme by setting the data-theme attribute on <html>
fn apply_theme_to_dom(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("data-theme", theme.attribute());
    }
}

fn load_theme_preference() -> Option<Theme> {
    gloo_storage::LocalStorage::get(THEME_STORAGE_KEY).ok()
}

fn save_theme_preference(theme: Theme) {
    if let Err(e) = gloo_storage::LocalStorage::set(THEME_STORAGE_KEY, theme) {
        gloo::console::warn!(format!("Failed to save theme: {e:?}"));
    }
}
