use yew::prelude::*;

use crate::theme::{use_theme, Theme};

const TOGGLE_CSS: &str = r#"
    .theme-toggle {
        display: inline-flex;
        align-items: center;
        overflow: hidden;
        border: 1px solid var(--border);
        border-radius: 0.5rem;
        background: var(--surface);
        padding: 2px;
    }
    .theme-toggle-placeholder {
        display: flex;
        width: 6rem;
    }
    .theme-toggle-placeholder.default {
        height: 2rem;
    }
    .theme-toggle-placeholder.card {
        height: 2.25rem;
    }
    .theme-option {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        border: none;
        background: transparent;
        border-radius: 0.4rem;
        color: var(--fg-muted);
        cursor: pointer;
        transition: color 0.2s ease;
    }
    .theme-option.default {
        height: 1.75rem;
        width: 1.875rem;
    }
    .theme-option.card {
        height: 2rem;
        width: 2rem;
    }
    .theme-option:hover {
        color: var(--fg);
    }
    .theme-option.active {
        color: var(--fg);
    }
    .theme-option-ring {
        position: absolute;
        inset: 0;
        border: 1px solid var(--fg-muted);
        border-radius: 0.4rem;
        animation: theme-ring-in 0.3s ease;
    }
    .theme-option.card .theme-option-ring {
        box-shadow: 0 0 0 2px color-mix(in srgb, var(--accent) 25%, transparent);
    }
    @keyframes theme-ring-in {
        from {
            opacity: 0;
            transform: scale(0.8);
        }
        to {
            opacity: 1;
            transform: scale(1);
        }
    }
"#;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleVariant {
    #[default]
    Default,
    Card,
}

impl ToggleVariant {
    fn class(&self) -> &'static str {
        match self {
            ToggleVariant::Default => "default",
            ToggleVariant::Card => "card",
        }
    }
}

/// An option renders as active only when it equals the shared preference, so
/// at most one control can be active and an unrecognized stored value marks
/// none.
fn is_active(current: Option<Theme>, option: Theme) -> bool {
    current == Some(option)
}

fn icon_class(theme: Theme) -> &'static str {
    match theme {
        Theme::System => "fas fa-desktop",
        Theme::Light => "fas fa-sun",
        Theme::Dark => "fas fa-moon",
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    /// Sizing/styling only; count, order and behavior of the options do not
    /// depend on it.
    #[prop_or_default]
    pub variant: ToggleVariant,
}

/// Tri-state theme selector. Renders a fixed-footprint placeholder until the
/// first display pass has completed, because the persisted preference is not
/// knowable before then and reflecting a guess would flash the wrong option.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme_ctx = use_theme();
    let mounted = use_state(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    if !*mounted {
        return html! {
            <div class={classes!("theme-toggle-placeholder", props.variant.class())}></div>
        };
    }

    let current = theme_ctx.current();

    html! {
        <>
            <style>{TOGGLE_CSS}</style>
            <div class="theme-toggle" role="radiogroup">
                { for Theme::ALL.iter().map(|option| {
                    let option = *option;
                    let active = is_active(current, option);
                    let onclick = {
                        let theme_ctx = theme_ctx.clone();
                        Callback::from(move |_| theme_ctx.set(option))
                    };
                    html! {
                        <button
                            key={option.as_str()}
                            class={classes!(
                                "theme-option",
                                props.variant.class(),
                                active.then_some("active"),
                            )}
                            role="radio"
                            aria-checked={if active { "true" } else { "false" }}
                            aria-label={format!("Switch to {} theme", option)}
                            {onclick}
                        >
                            if active {
                                <span class="theme-option-ring"></span>
                            }
                            <i class={icon_class(option)}></i>
                        </button>
                    }
                }) }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_the_selected_preference_is_active() {
        for selected in Theme::ALL {
            let active: Vec<_> = Theme::ALL
                .iter()
                .copied()
                .filter(|option| is_active(Some(selected), *option))
                .collect();
            assert_eq!(active, [selected]);
        }
    }

    #[test]
    fn unrecognized_preference_marks_no_option_active() {
        assert!(Theme::ALL
            .iter()
            .all(|option| !is_active(None, *option)));
    }

    #[test]
    fn variants_differ_only_by_styling_class() {
        assert_eq!(ToggleVariant::Default.class(), "default");
        assert_eq!(ToggleVariant::Card.class(), "card");
    }

    #[test]
    fn every_preference_has_a_distinct_icon() {
        let icons: Vec<_> = Theme::ALL.iter().map(|theme| icon_class(*theme)).collect();
        let mut unique = icons.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), icons.len());
    }
}
