//! State machine behind the animated chat preview.
//!
//! A fixed script of [`Turn`]s is expanded once into a step sequence that
//! interleaves a typing indicator before every message. The player walks the
//! steps with a single pending timer and wraps back to the start after the
//! loop pause. Everything here is pure so it can be unit tested without a
//! browser; the timer itself lives in the `ChatPreview` component.

/// Which participant a bubble belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    /// The assistant.
    Left,
    /// The visitor.
    Right,
}

impl Side {
    pub fn class(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// One scripted chat message.
#[derive(Clone, PartialEq, Debug)]
pub struct Turn {
    pub side: Side,
    pub text: String,
    /// Highlighted bubble style, used for visitor-authored turns.
    pub emphasized: bool,
}

impl Turn {
    pub fn assistant(text: &str) -> Self {
        Self {
            side: Side::Left,
            text: text.to_string(),
            emphasized: false,
        }
    }

    pub fn user(text: &str) -> Self {
        Self {
            side: Side::Right,
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// One animation step: either the typing indicator or a revealed message.
#[derive(Clone, PartialEq, Debug)]
pub enum Step {
    Typing { side: Side },
    Message(Turn),
}

/// Delays between steps, in milliseconds. Defaults match the live site;
/// tests pass their own values.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Timings {
    pub typing_ms: u32,
    pub message_ms: u32,
    pub loop_pause_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            typing_ms: 900,
            message_ms: 1400,
            loop_pause_ms: 1_600,
        }
    }
}

/// Expands the script into steps: typing indicator before each message.
pub fn build_steps(turns: &[Turn]) -> Vec<Step> {
    let mut steps = Vec::with_capacity(turns.len() * 2);
    for turn in turns {
        steps.push(Step::Typing { side: turn.side });
        steps.push(Step::Message(turn.clone()));
    }
    steps
}

/// Messages revealed at `index`: every message step at or before it.
pub fn revealed(steps: &[Step], index: usize) -> Vec<&Turn> {
    steps
        .iter()
        .take(index + 1)
        .filter_map(|step| match step {
            Step::Message(turn) => Some(turn),
            Step::Typing { .. } => None,
        })
        .collect()
}

/// The side shown as typing, only while the current step is a typing step.
pub fn typing_side(steps: &[Step], index: usize) -> Option<Side> {
    match steps.get(index) {
        Some(Step::Typing { side }) => Some(*side),
        _ => None,
    }
}

/// How long to dwell on `index` before advancing. The final step carries the
/// loop pause on top of its own delay, so one timer covers both.
pub fn step_delay(steps: &[Step], index: usize, timings: &Timings) -> u32 {
    let base = match steps.get(index) {
        Some(Step::Typing { .. }) => timings.typing_ms,
        _ => timings.message_ms,
    };
    if index + 1 == steps.len() {
        base + timings.loop_pause_ms
    } else {
        base
    }
}

/// The step after `index`, wrapping to the start after the last step.
pub fn next_index(len: usize, index: usize) -> usize {
    if index + 1 < len {
        index + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_turn_script() -> Vec<Turn> {
        vec![Turn::assistant("Hi"), Turn::user("Hello")]
    }

    #[test]
    fn steps_interleave_typing_before_each_message() {
        let steps = build_steps(&two_turn_script());
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], Step::Typing { side: Side::Left });
        assert!(matches!(&steps[1], Step::Message(t) if t.text == "Hi"));
        assert_eq!(steps[2], Step::Typing { side: Side::Right });
        assert!(matches!(&steps[3], Step::Message(t) if t.text == "Hello"));
    }

    #[test]
    fn revealed_count_matches_message_prefix() {
        let script: Vec<Turn> = (0..5)
            .map(|i| Turn::assistant(&format!("m{i}")))
            .collect();
        let steps = build_steps(&script);
        for index in 0..steps.len() {
            let expected = index / 2 + usize::from(index % 2 == 1);
            assert_eq!(revealed(&steps, index).len(), expected, "at step {index}");
        }
    }

    #[test]
    fn typing_shown_only_on_typing_steps() {
        let steps = build_steps(&two_turn_script());
        assert_eq!(typing_side(&steps, 0), Some(Side::Left));
        assert_eq!(typing_side(&steps, 1), None);
        assert_eq!(typing_side(&steps, 2), Some(Side::Right));
        assert_eq!(typing_side(&steps, 3), None);
    }

    #[test]
    fn playback_walkthrough_of_two_turn_script() {
        let steps = build_steps(&two_turn_script());

        assert!(revealed(&steps, 0).is_empty());
        assert_eq!(typing_side(&steps, 0), Some(Side::Left));

        let texts: Vec<&str> = revealed(&steps, 1).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Hi"]);
        assert_eq!(typing_side(&steps, 1), None);

        let texts: Vec<&str> = revealed(&steps, 2).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Hi"]);
        assert_eq!(typing_side(&steps, 2), Some(Side::Right));

        let texts: Vec<&str> = revealed(&steps, 3).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Hi", "Hello"]);
        assert_eq!(typing_side(&steps, 3), None);

        // Wrapping resets the transcript to empty.
        let restart = next_index(steps.len(), 3);
        assert_eq!(restart, 0);
        assert!(revealed(&steps, restart).is_empty());
    }

    #[test]
    fn delays_come_from_step_kind_and_final_step_adds_loop_pause() {
        let timings = Timings {
            typing_ms: 9,
            message_ms: 14,
            loop_pause_ms: 16,
        };
        let steps = build_steps(&two_turn_script());
        assert_eq!(step_delay(&steps, 0, &timings), 9);
        assert_eq!(step_delay(&steps, 1, &timings), 14);
        assert_eq!(step_delay(&steps, 2, &timings), 9);
        assert_eq!(step_delay(&steps, 3, &timings), 14 + 16);
    }

    #[test]
    fn next_index_advances_then_wraps() {
        assert_eq!(next_index(4, 0), 1);
        assert_eq!(next_index(4, 2), 3);
        assert_eq!(next_index(4, 3), 0);
    }

    #[test]
    fn single_turn_script_loops_between_typing_and_message() {
        let steps = build_steps(&[Turn::assistant("solo")]);
        assert_eq!(steps.len(), 2);
        assert_eq!(typing_side(&steps, 0), Some(Side::Left));
        assert_eq!(revealed(&steps, 1).len(), 1);
        assert_eq!(next_index(steps.len(), 1), 0);
    }

    #[test]
    fn empty_script_yields_no_steps_and_nothing_revealed() {
        let steps = build_steps(&[]);
        assert!(steps.is_empty());
        assert!(revealed(&steps, 0).is_empty());
        assert_eq!(typing_side(&steps, 0), None);
    }

    #[test]
    fn emphasis_follows_authorship_helpers() {
        assert!(Turn::user("x").emphasized);
        assert!(!Turn::assistant("x").emphasized);
        assert_eq!(Turn::user("x").side, Side::Right);
        assert_eq!(Turn::assistant("x").side, Side::Left);
    }
}
