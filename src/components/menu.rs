use yew::prelude::*;
use yew_router::components::Link;

use crate::components::theme_toggle::ThemeToggle;
use crate::Route;

const MENU_CSS: &str = r#"
    .modern-menu {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 10;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0.75rem 1.5rem;
        background: color-mix(in srgb, var(--bg) 80%, transparent);
        backdrop-filter: blur(8px);
        border-bottom: 1px solid var(--border);
    }
    .nav-logo {
        font-size: 1.25rem;
        font-weight: 700;
        color: var(--accent);
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-links a {
        color: var(--fg-muted);
        transition: color 0.2s ease;
    }
    .nav-links a:hover {
        color: var(--fg);
    }
    .nav-social {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .nav-social a {
        color: var(--fg-muted);
        font-size: 0.9rem;
    }
    .nav-social a:hover {
        color: var(--fg);
    }
    .nav-burger {
        display: none;
        border: none;
        background: transparent;
        color: var(--fg);
        font-size: 1.25rem;
        cursor: pointer;
    }
    @media (max-width: 768px) {
        .nav-burger {
            display: block;
        }
        .nav-links, .nav-social {
            display: none;
        }
        .modern-menu.open .nav-links,
        .modern-menu.open .nav-social {
            display: flex;
            flex-direction: column;
            align-items: flex-start;
        }
        .modern-menu.open {
            flex-wrap: wrap;
            gap: 1rem;
        }
    }
"#;

#[derive(Clone, PartialEq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct SocialEntry {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ModernMenuProps {
    pub items: Vec<MenuEntry>,
    pub social_items: Vec<SocialEntry>,
}

/// Fixed top navigation bar: brand, menu links and social links in authored
/// order, plus the theme selector. Collapses behind a burger button on
/// narrow viewports.
#[function_component(ModernMenu)]
pub fn modern_menu(props: &ModernMenuProps) -> Html {
    let open = use_state(|| false);

    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    html! {
        <nav class={classes!("modern-menu", (*open).then_some("open"))}>
            <style>{MENU_CSS}</style>
            <Link<Route> to={Route::Home} classes="nav-logo">
                {"Sinout"}
            </Link<Route>>
            <ul class="nav-links">
                { for props.items.iter().map(|item| html! {
                    <li key={item.label}>
                        <a href={item.href}>{item.label}</a>
                    </li>
                }) }
            </ul>
            <div class="nav-social">
                { for props.social_items.iter().map(|item| html! {
                    <a key={item.label} href={item.href} target="_blank" rel="noopener">
                        {item.label}
                    </a>
                }) }
                <ThemeToggle />
            </div>
            <button class="nav-burger" aria-label="Toggle navigation" onclick={toggle_open}>
                <i class="fas fa-bars"></i>
            </button>
        </nav>
    }
}
