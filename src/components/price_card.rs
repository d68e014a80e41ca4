use yew::prelude::*;

const PRICE_CSS: &str = r#"
    .price-section {
        max-width: 80rem;
        margin: 0 auto;
        padding: 5rem 1rem;
        text-align: center;
    }
    .price-section h2 {
        font-size: 2rem;
        margin-bottom: 0.5rem;
    }
    .price-section .price-lead {
        color: var(--fg-muted);
        margin-bottom: 2.5rem;
    }
    .price-card {
        display: inline-block;
        text-align: left;
        border: 1px solid var(--border);
        border-radius: 1rem;
        background: var(--surface);
        padding: 2rem;
        max-width: 22rem;
        width: 100%;
    }
    .price-card .plan-name {
        font-size: 1.1rem;
        font-weight: 600;
        margin: 0;
    }
    .price-card .plan-price {
        font-size: 2.5rem;
        font-weight: 700;
        margin: 0.75rem 0 0;
    }
    .price-card .plan-period {
        font-size: 0.9rem;
        color: var(--fg-muted);
    }
    .price-card ul {
        list-style: none;
        padding: 0;
        margin: 1.5rem 0;
    }
    .price-card li {
        display: flex;
        gap: 0.6rem;
        align-items: center;
        font-size: 0.9rem;
        color: var(--fg-muted);
        margin-bottom: 0.75rem;
    }
    .price-card li i {
        color: var(--accent);
    }
    .price-cta {
        display: block;
        width: 100%;
        border: none;
        border-radius: 0.5rem;
        background: var(--accent);
        color: #fff;
        font-size: 1rem;
        font-weight: 600;
        padding: 0.75rem;
        cursor: pointer;
        transition: filter 0.2s ease;
    }
    .price-cta:hover {
        filter: brightness(1.1);
    }
"#;

#[derive(Clone, PartialEq)]
struct PlanFeature {
    text: &'static str,
}

const PLAN_FEATURES: [PlanFeature; 5] = [
    PlanFeature {
        text: "Unlimited projects",
    },
    PlanFeature {
        text: "Real-time collaboration",
    },
    PlanFeature {
        text: "Priority support",
    },
    PlanFeature {
        text: "Custom integrations",
    },
    PlanFeature {
        text: "Cancel anytime",
    },
];

/// Promotional pricing card with a single plan built from literal data.
#[function_component(PriceCard)]
pub fn price_card() -> Html {
    html! {
        <div class="price-section">
            <style>{PRICE_CSS}</style>
            <h2>{"One plan, everything included"}</h2>
            <p class="price-lead">{"Start with Sinout today. No hidden fees."}</p>
            <div class="price-card">
                <p class="plan-name">{"Sinout Pro"}</p>
                <p class="plan-price">
                    {"$19"}
                    <span class="plan-period">{" / month"}</span>
                </p>
                <ul>
                    { for PLAN_FEATURES.iter().map(|feature| html! {
                        <li key={feature.text}>
                            <i class="fas fa-check"></i>
                            {feature.text}
                        </li>
                    }) }
                </ul>
                <button class="price-cta">{"Get Started"}</button>
            </div>
        </div>
    }
}
