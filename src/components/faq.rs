use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub id: String,
    pub children: Children,
}

/// Collapsible FAQ entry. Opens when its id matches the URL hash, so
/// individual questions can be linked to directly.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    {
        let is_open = is_open.clone();
        let id = props.id.clone();
        use_effect_with_deps(
            move |_| {
                let check_hash = move || {
                    if let Some(window) = web_sys::window() {
                        if let Ok(hash) = window.location().hash() {
                            if hash == format!("#{}", id) {
                                is_open.set(true);
                                // Small delay so the answer is expanded
                                // before scrolling to it.
                                let id = id.clone();
                                let timeout = Timeout::new(100, move || {
                                    if let Some(element) = window
                                        .document()
                                        .and_then(|doc| doc.get_element_by_id(&id))
                                    {
                                        element.scroll_into_view_with_bool(true);
                                    }
                                });
                                timeout.forget();
                            }
                        }
                    }
                };

                check_hash();

                if let Some(window) = web_sys::window() {
                    let callback = Closure::wrap(Box::new(move || {
                        check_hash();
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "hashchange",
                        callback.as_ref().unchecked_ref(),
                    );
                    callback.forget();
                }

                || ()
            },
            (),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div id={props.id.clone()} class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}
