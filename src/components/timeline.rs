use yew::prelude::*;

use crate::content::{ContentBlock, TimelineEntry};

const TIMELINE_CSS: &str = r#"
    .timeline-section {
        max-width: 80rem;
        margin: 0 auto;
        padding: 5rem 1rem;
    }
    .timeline-section h2 {
        font-size: 2rem;
        margin-bottom: 1rem;
    }
    .timeline-section .timeline-lead {
        color: var(--fg-muted);
        max-width: 28rem;
        margin-bottom: 3rem;
    }
    .timeline-entry {
        display: flex;
        gap: 2rem;
        padding-top: 2.5rem;
    }
    .timeline-marker {
        position: sticky;
        top: 5rem;
        align-self: flex-start;
        display: flex;
        align-items: center;
        gap: 1rem;
        min-width: 10rem;
    }
    .timeline-dot {
        height: 0.75rem;
        width: 0.75rem;
        border-radius: 9999px;
        background: var(--accent);
        flex-shrink: 0;
    }
    .timeline-title {
        font-size: 1.75rem;
        font-weight: 700;
        color: var(--fg-muted);
        margin: 0;
    }
    .timeline-body {
        flex: 1;
        border-left: 1px solid var(--border);
        padding-left: 2rem;
        padding-bottom: 2rem;
    }
    .timeline-body p {
        font-size: 0.875rem;
        color: var(--fg);
        margin: 0 0 2rem;
    }
    .timeline-checklist {
        margin-bottom: 2rem;
    }
    .timeline-checklist div {
        display: flex;
        gap: 0.5rem;
        align-items: center;
        font-size: 0.875rem;
        color: var(--fg-muted);
    }
    .timeline-image-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1rem;
    }
    .timeline-image-grid img {
        border-radius: 0.5rem;
        object-fit: cover;
        width: 100%;
        height: 5rem;
        box-shadow: 0 0 24px rgba(34, 42, 53, 0.06), 0 1px 1px rgba(0, 0, 0, 0.05);
    }
    @media (min-width: 768px) {
        .timeline-image-grid img {
            height: 11rem;
        }
    }
    @media (max-width: 768px) {
        .timeline-entry {
            flex-direction: column;
            gap: 1rem;
        }
        .timeline-marker {
            position: static;
        }
    }
"#;

fn render_block(index: usize, block: &ContentBlock) -> Html {
    match block {
        ContentBlock::Text(text) => html! {
            <p key={index}>{*text}</p>
        },
        ContentBlock::Checklist(items) => html! {
            <div key={index} class="timeline-checklist">
                { for items.iter().map(|item| html! {
                    <div key={*item}>{"\u{2705} "}{*item}</div>
                }) }
            </div>
        },
        ContentBlock::ImageGrid(images) => html! {
            <div key={index} class="timeline-image-grid">
                { for images.iter().map(|image| html! {
                    <img key={image.src} src={image.src} alt={image.alt} loading="lazy" />
                }) }
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub data: Vec<TimelineEntry>,
}

/// Vertical timeline: one sticky year marker per entry with its content
/// blocks rendered in authored order.
#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <section class="timeline-section">
            <style>{TIMELINE_CSS}</style>
            <h2>{"Changelog from our journey"}</h2>
            <p class="timeline-lead">
                {"A look back at what we shipped, one milestone at a time."}
            </p>
            { for props.data.iter().map(|entry| html! {
                <div key={entry.title} class="timeline-entry">
                    <div class="timeline-marker">
                        <span class="timeline-dot"></span>
                        <h3 class="timeline-title">{entry.title}</h3>
                    </div>
                    <div class="timeline-body">
                        { for entry.content.iter().enumerate().map(|(index, block)| {
                            render_block(index, block)
                        }) }
                    </div>
                </div>
            }) }
        </section>
    }
}
