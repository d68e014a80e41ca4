use yew::prelude::*;

use crate::components::menu::SocialEntry;

const FOOTER_CSS: &str = r#"
    .site-footer {
        border-top: 1px solid var(--border);
        padding: 4rem 1.5rem 2rem;
        margin-top: auto;
    }
    .footer-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 2.5rem;
    }
    .footer-brand h3 {
        font-size: 1.25rem;
        color: var(--accent);
        margin: 0 0 0.75rem;
    }
    .footer-brand p {
        color: var(--fg-muted);
        font-size: 0.9rem;
        max-width: 20rem;
        margin: 0;
    }
    .footer-column h4 {
        font-size: 0.9rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        color: var(--fg-muted);
        margin: 0 0 1rem;
    }
    .footer-column ul {
        list-style: none;
        padding: 0;
        margin: 0;
    }
    .footer-column li {
        margin-bottom: 0.6rem;
        font-size: 0.9rem;
    }
    .footer-column a:hover {
        color: var(--accent);
    }
    .footer-bottom {
        max-width: 80rem;
        margin: 3rem auto 0;
        padding-top: 1.5rem;
        border-top: 1px solid var(--border);
        display: flex;
        align-items: center;
        justify-content: space-between;
        font-size: 0.85rem;
        color: var(--fg-muted);
    }
    @media (max-width: 768px) {
        .footer-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub links: Vec<(&'static str, &'static str)>,
    #[prop_or_default]
    pub social_items: Vec<SocialEntry>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{"Sinout"}</h3>
                    <p>{"An innovative platform built by a small team that cares about the details."}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Pages"}</h4>
                    <ul>
                        { for props.links.iter().map(|(label, href)| html! {
                            <li key={*label}><a href={*href}>{*label}</a></li>
                        }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Social"}</h4>
                    <ul>
                        { for props.social_items.iter().map(|item| html! {
                            <li key={item.label}>
                                <a href={item.href} target="_blank" rel="noopener">
                                    {item.label}
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{"\u{a9} 2025 Sinout. All rights reserved."}</span>
                <span>{"Made with care."}</span>
            </div>
        </footer>
    }
}
