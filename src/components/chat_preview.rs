use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::chat_script::{
    build_steps, next_index, revealed, step_delay, typing_side, Side, Timings, Turn,
};

#[derive(Clone, Copy, PartialEq)]
pub enum PreviewVariant {
    Card,
    Inline,
}

#[derive(Clone, Copy, PartialEq)]
pub enum PreviewMode {
    Animated,
    Static,
}

#[derive(Properties, PartialEq)]
pub struct ChatPreviewProps {
    /// The scripted conversation, fixed for the component's lifetime.
    pub script: Vec<Turn>,
    #[prop_or(PreviewVariant::Card)]
    pub variant: PreviewVariant,
    #[prop_or(PreviewMode::Animated)]
    pub mode: PreviewMode,
    #[prop_or_default]
    pub timings: Timings,
}

/// Simulated WhatsApp conversation that reveals its script turn by turn with
/// typing pauses and loops forever. `Static` mode shows the whole script at
/// once and never arms a timer.
#[function_component(ChatPreview)]
pub fn chat_preview(props: &ChatPreviewProps) -> Html {
    let steps = use_memo(|script| build_steps(script), props.script.clone());
    let step_index = use_state(|| 0usize);

    {
        let step_index = step_index.clone();
        let steps = steps.clone();
        let timings = props.timings;
        let current_index = *step_index;
        use_effect_with_deps(
            move |(index, mode, _script)| {
                // At most one timer is pending per instance. The destructor
                // runs before the next arm and on unmount, so a stale
                // callback can never fire after teardown.
                let mut pending: Option<Timeout> = None;
                if *mode == PreviewMode::Animated && !steps.is_empty() {
                    let delay = step_delay(&steps, *index, &timings);
                    let next = next_index(steps.len(), *index);
                    let step_index = step_index.clone();
                    pending = Some(Timeout::new(delay, move || step_index.set(next)));
                }
                move || drop(pending)
            },
            (current_index, props.mode, props.script.clone()),
        );
    }

    let (bubbles, typing): (Vec<&Turn>, Option<Side>) = match props.mode {
        PreviewMode::Static => (props.script.iter().collect(), None),
        PreviewMode::Animated => (
            revealed(&steps, *step_index),
            typing_side(&steps, *step_index),
        ),
    };

    let wrapper_class = match props.variant {
        PreviewVariant::Card => "chat-card",
        PreviewVariant::Inline => "chat-inline",
    };

    html! {
        <div class={wrapper_class} aria-label="Vista previa de chat">
            { for bubbles.iter().map(|turn| html! {
                <div class={classes!("chat-row", turn.side.class())}>
                    <div class={classes!("bubble", turn.emphasized.then_some("green"))}>
                        { &turn.text }
                    </div>
                </div>
            })}
            { if let Some(side) = typing {
                html! {
                    <div class={classes!("chat-row", side.class())}>
                        <div class="bubble typing" aria-live="polite" aria-label="Escribiendo">
                            <span class="dot"></span>
                            <span class="dot"></span>
                            <span class="dot"></span>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
