use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const SHOWCASE_CSS: &str = r#"
    .scroll-showcase {
        position: relative;
        overflow: hidden;
        padding: 6rem 1rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 2.5rem;
    }
    .scroll-showcase.with-gradient {
        background: radial-gradient(
            ellipse at top,
            color-mix(in srgb, var(--accent) 12%, transparent),
            transparent 70%
        );
    }
    .scroll-showcase h2 {
        font-size: 1.75rem;
        margin: 0;
        text-align: center;
    }
    .scroll-showcase .showcase-frame {
        border-radius: 1rem;
        border: 1px solid var(--border);
        overflow: hidden;
        max-width: 48rem;
        width: 100%;
        will-change: transform;
    }
    .scroll-showcase img {
        display: block;
        width: 100%;
        aspect-ratio: 16 / 10;
        object-fit: cover;
    }
"#;

/// 0 while the section is still below the viewport, 1 once its top reaches
/// mid-screen.
fn progress_factor(inner_height: f64, top: f64) -> f64 {
    ((inner_height - top) / (inner_height * 0.5)).clamp(0.0, 1.0)
}

fn update_progress(section_ref: &NodeRef, progress: &UseStateHandle<f64>, inner_height: f64) {
    if let Some(section) = section_ref.cast::<web_sys::Element>() {
        let rect = section.get_bounding_client_rect();
        progress.set(progress_factor(inner_height, rect.top()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollShowcaseProps {
    pub src: &'static str,
    pub title: &'static str,
    #[prop_or(false)]
    pub show_gradient: bool,
}

/// Decorative panel whose frame scales up as the page scrolls past it, in
/// the spirit of a laptop-lid opening. Purely visual.
#[function_component(ScrollShowcase)]
pub fn scroll_showcase(props: &ScrollShowcaseProps) -> Html {
    let progress = use_state(|| 0.0_f64);
    let section_ref = use_node_ref();

    {
        let progress = progress.clone();
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let inner_height = window
                        .inner_height()
                        .ok()
                        .and_then(|value| value.as_f64())
                        .unwrap_or(800.0);
                    let callback = Closure::<dyn Fn()>::new({
                        let progress = progress.clone();
                        let section_ref = section_ref.clone();
                        move || {
                            update_progress(&section_ref, &progress, inner_height);
                        }
                    });
                    let window_clone = window.clone();
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        // Initial call, so a page restored mid-scroll does
                        // not wait for the first scroll event.
                        update_progress(&section_ref, &progress, inner_height);
                        Box::new(move || {
                            let _ = window_clone.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    } else {
                        Box::new(|| ())
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let scale = 0.85 + 0.15 * *progress;
    let lift = 40.0 * (1.0 - *progress);

    html! {
        <section
            ref={section_ref}
            class={classes!("scroll-showcase", props.show_gradient.then_some("with-gradient"))}
        >
            <style>{SHOWCASE_CSS}</style>
            <h2>{props.title}</h2>
            <div
                class="showcase-frame"
                style={format!("transform: scale({scale:.3}) translateY({lift:.1}px);")}
            >
                <img src={props.src} alt={props.title} loading="lazy" />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_to_unit_range() {
        // Section below the viewport.
        assert_eq!(progress_factor(800.0, 900.0), 0.0);
        // Section top at mid-screen and above.
        assert_eq!(progress_factor(800.0, 400.0), 1.0);
        assert_eq!(progress_factor(800.0, 0.0), 1.0);
    }

    #[test]
    fn progress_grows_as_the_section_scrolls_in() {
        let early = progress_factor(800.0, 750.0);
        let late = progress_factor(800.0, 500.0);
        assert!(early > 0.0 && early < late && late < 1.0);
    }
}
