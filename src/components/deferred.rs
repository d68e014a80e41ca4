use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeferredProps {
    /// Height reserved for the slot while the content is still pending, so
    /// the surrounding sections never shift when it swaps in.
    #[prop_or("0")]
    pub min_height: &'static str,
    pub children: Children,
}

/// Wrapper for below-the-fold sections: renders a layout-stable placeholder
/// on the first pass and swaps the real content into the same slot one tick
/// later. Slots never reorder, whichever finishes first.
#[function_component(Deferred)]
pub fn deferred(props: &DeferredProps) -> Html {
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(0, move || {
                    ready.set(true);
                });
                timeout.forget();
                || ()
            },
            (),
        );
    }

    if !*ready {
        return html! {
            <div
                class="deferred-slot"
                style={format!("min-height: {};", props.min_height)}
            ></div>
        };
    }

    html! { <>{ for props.children.iter() }</> }
}
