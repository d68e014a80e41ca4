use web_sys::Element;
use yew::prelude::*;

const GALLERY_CSS: &str = r#"
    .gallery-section {
        max-width: 80rem;
        margin: 0 auto;
        padding: 5rem 1rem;
    }
    .gallery-head {
        display: flex;
        align-items: flex-end;
        justify-content: space-between;
        margin-bottom: 2rem;
        gap: 1rem;
    }
    .gallery-head h2 {
        font-size: 2rem;
        margin: 0 0 0.5rem;
    }
    .gallery-head p {
        color: var(--fg-muted);
        max-width: 28rem;
        margin: 0;
    }
    .gallery-nav button {
        border: 1px solid var(--border);
        background: var(--surface);
        color: var(--fg);
        border-radius: 9999px;
        height: 2.5rem;
        width: 2.5rem;
        cursor: pointer;
        margin-left: 0.5rem;
    }
    .gallery-nav button:hover {
        border-color: var(--accent);
    }
    .gallery-row {
        display: flex;
        gap: 1.25rem;
        overflow-x: auto;
        scroll-behavior: smooth;
        scroll-snap-type: x mandatory;
        padding-bottom: 1rem;
    }
    .gallery-card {
        position: relative;
        flex: 0 0 20rem;
        scroll-snap-align: start;
        border-radius: 0.75rem;
        overflow: hidden;
        display: block;
    }
    .gallery-card img {
        width: 100%;
        height: 24rem;
        object-fit: cover;
        display: block;
        transition: transform 0.3s ease;
    }
    .gallery-card:hover img {
        transform: scale(1.05);
    }
    .gallery-card-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
        padding: 1.5rem;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent 60%);
        color: #fff;
    }
    .gallery-card-overlay h3 {
        font-size: 1.1rem;
        margin: 0 0 0.5rem;
    }
    .gallery-card-overlay p {
        font-size: 0.85rem;
        color: #d4d4d4;
        margin: 0 0 0.75rem;
        display: -webkit-box;
        -webkit-line-clamp: 3;
        -webkit-box-orient: vertical;
        overflow: hidden;
    }
    .gallery-card-overlay span {
        font-size: 0.85rem;
        color: var(--accent);
    }
"#;

#[derive(Clone, PartialEq)]
pub struct GalleryEntry {
    /// Render-list identity only; never shown.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub image: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub items: Vec<GalleryEntry>,
}

/// Horizontally scrollable gallery. Cards keep the authored order and show
/// title, description and link target exactly as provided.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let row_ref = use_node_ref();

    let scroll = |row_ref: &NodeRef, delta: f64| {
        let row_ref = row_ref.clone();
        Callback::from(move |_| {
            if let Some(row) = row_ref.cast::<Element>() {
                row.scroll_by_with_x_and_y(delta, 0.0);
            }
        })
    };
    let scroll_prev = scroll(&row_ref, -340.0);
    let scroll_next = scroll(&row_ref, 340.0);

    html! {
        <section class="gallery-section">
            <style>{GALLERY_CSS}</style>
            <div class="gallery-head">
                <div>
                    <h2>{"Built on modern foundations"}</h2>
                    <p>{"The tools and frameworks that shaped how we build Sinout."}</p>
                </div>
                <div class="gallery-nav">
                    <button aria-label="Scroll gallery backward" onclick={scroll_prev}>
                        <i class="fas fa-arrow-left"></i>
                    </button>
                    <button aria-label="Scroll gallery forward" onclick={scroll_next}>
                        <i class="fas fa-arrow-right"></i>
                    </button>
                </div>
            </div>
            <div class="gallery-row" ref={row_ref}>
                { for props.items.iter().map(|item| html! {
                    <a
                        key={item.id}
                        class="gallery-card"
                        href={item.href}
                        target="_blank"
                        rel="noopener"
                    >
                        <img src={item.image} alt={item.title} loading="lazy" />
                        <div class="gallery-card-overlay">
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                            <span>{"Read more \u{2192}"}</span>
                        </div>
                    </a>
                }) }
            </div>
        </section>
    }
}
