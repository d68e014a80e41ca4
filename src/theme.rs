use gloo_console::log;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use yew::prelude::*;

const STORAGE_KEY: &str = "sinout-theme";

/// The user-selectable display-mode preference. Exactly one value is active
/// for the whole page; `System` defers to the OS color scheme.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The concrete color scheme this preference renders as.
    pub fn resolved(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => {
                if prefers_dark() {
                    "dark"
                } else {
                    "light"
                }
            }
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Theme::System),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps the stored value to the shared preference. No stored value means a
/// first visit and defaults to `System`; a stored value that is not one of
/// the three known options maps to `None` so that no selector option renders
/// as active.
fn interpret_stored(stored: Result<Theme, StorageError>) -> Option<Theme> {
    match stored {
        Ok(theme) => Some(theme),
        Err(StorageError::KeyNotFound(_)) => Some(Theme::System),
        Err(_) => None,
    }
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
        })
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply(theme: Option<Theme>) {
    let scheme = theme.unwrap_or_default().resolved();
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        if root.set_attribute("data-theme", scheme).is_err() {
            log!("failed to apply theme attribute to document root");
        }
    }
}

/// Read + write access to the shared theme preference. `current` is `None`
/// only when the persisted value was unrecognized.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    current: Option<Theme>,
    set: Callback<Theme>,
}

impl ThemeContext {
    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    pub fn set(&self, theme: Theme) {
        self.set.emit(theme);
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeProvider is missing from the component tree")
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

/// Owns the process-wide theme preference: loads it from local storage once
/// at startup, persists every selection, and keeps the `data-theme`
/// attribute on the document root in sync.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| interpret_stored(LocalStorage::get(STORAGE_KEY)));

    {
        let current = *theme;
        use_effect_with_deps(
            move |current| {
                apply(*current);
                || ()
            },
            current,
        );
    }

    let set = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| {
            if LocalStorage::set(STORAGE_KEY, next).is_err() {
                log!("failed to persist theme preference");
            }
            log!("theme set to", next.as_str());
            theme.set(Some(next));
        })
    };

    let context = ThemeContext {
        current: *theme,
        set,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_string_round_trips() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn unknown_value_does_not_parse() {
        assert!("solarized".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn explicit_preferences_resolve_to_themselves() {
        assert_eq!(Theme::Light.resolved(), "light");
        assert_eq!(Theme::Dark.resolved(), "dark");
    }

    #[test]
    fn persisted_form_is_the_lowercase_name() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        for theme in Theme::ALL {
            let raw = serde_json::to_string(&theme).unwrap();
            assert_eq!(serde_json::from_str::<Theme>(&raw).unwrap(), theme);
        }
    }

    #[test]
    fn missing_storage_defaults_to_system() {
        let stored = Err(StorageError::KeyNotFound(STORAGE_KEY.to_string()));
        assert_eq!(interpret_stored(stored), Some(Theme::System));
    }

    #[test]
    fn unrecognized_storage_yields_no_active_preference() {
        let bad = serde_json::from_str::<Theme>("\"midnight\"").unwrap_err();
        assert_eq!(interpret_stored(Err(StorageError::SerdeError(bad))), None);
        assert_eq!(interpret_stored(Ok(Theme::Dark)), Some(Theme::Dark));
    }
}
