// Per-frame input dispatch with a directional cooldown

use crate::input::types::FrameInput;
use crate::nav::NavCommand;

/// Turns one frame of input into navigation commands.
///
/// Held directions repeat at most once per cooldown window; accept and
/// cancel fire on release and ignore the cooldown.
#[derive(Debug)]
pub struct InputDispatcher {
    cooldown: u32,
    window: u32,
}

impl InputDispatcher {
    pub fn new(window: u32) -> Self {
        Self {
            cooldown: 0,
            window,
        }
    }

    /// Call exactly once per rendered frame
    pub fn update(&mut self, input: &FrameInput) -> Vec<NavCommand> {
        let mut commands = Vec::new();

        if self.cooldown > 0 {
            self.cooldown -= 1;
        }

        if input.held.down && self.cooldown == 0 {
            commands.push(NavCommand::MoveSelection(1));
            self.cooldown = self.window;
        }

        if input.held.up && self.cooldown == 0 {
            commands.push(NavCommand::MoveSelection(-1));
            self.cooldown = self.window;
        }

        if input.released.accept {
            commands.push(NavCommand::Activate);
        }

        if input.released.cancel {
            commands.push(NavCommand::Back);
        }

        commands
    }
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlayConfig;
    use crate::input::pure::ButtonTracker;
    use crate::input::types::PadState;
    use crate::nav::stack::tests::{MemLister, RecordingHost};
    use crate::nav::NavigationStack;

    fn held(state: PadState) -> FrameInput {
        FrameInput {
            held: state,
            released: PadState::default(),
        }
    }

    const DOWN: PadState = PadState {
        up: false,
        down: true,
        accept: false,
        cancel: false,
        toggle: false,
    };

    #[test]
    fn test_held_down_repeats_every_window() {
        let mut dispatcher = InputDispatcher::new(10);
        let mut fired = Vec::new();

        for frame in 0..35 {
            if !dispatcher.update(&held(DOWN)).is_empty() {
                fired.push(frame);
            }
        }
        assert_eq!(fired, vec![0, 10, 20, 30]);
    }

    #[test]
    fn test_cooldown_runs_out_while_idle() {
        let mut dispatcher = InputDispatcher::new(10);
        dispatcher.update(&held(DOWN));
        for _ in 0..10 {
            dispatcher.update(&FrameInput::default());
        }
        assert_eq!(dispatcher.cooldown, 0);
        assert_eq!(
            dispatcher.update(&held(DOWN)),
            vec![NavCommand::MoveSelection(1)]
        );
    }

    #[test]
    fn test_down_wins_when_both_held() {
        let mut dispatcher = InputDispatcher::new(10);
        let both = PadState {
            up: true,
            ..DOWN
        };
        assert_eq!(
            dispatcher.update(&held(both)),
            vec![NavCommand::MoveSelection(1)]
        );
    }

    #[test]
    fn test_accept_and_cancel_ignore_cooldown() {
        let mut dispatcher = InputDispatcher::new(10);
        dispatcher.update(&held(DOWN));
        assert!(dispatcher.cooldown > 0);

        let frame = FrameInput {
            held: DOWN,
            released: PadState {
                accept: true,
                cancel: true,
                ..Default::default()
            },
        };
        assert_eq!(
            dispatcher.update(&frame),
            vec![NavCommand::Activate, NavCommand::Back]
        );
    }

    #[test]
    fn test_held_accept_activates_once() {
        let mut dispatcher = InputDispatcher::new(10);
        let mut tracker = ButtonTracker::default();
        let pressed = PadState {
            accept: true,
            ..Default::default()
        };

        let mut activations = 0;
        for frame in 0..40 {
            let state = if frame < 30 { pressed } else { PadState::default() };
            let commands = dispatcher.update(&tracker.update(state));
            activations += commands
                .iter()
                .filter(|c| **c == NavCommand::Activate)
                .count();
        }
        assert_eq!(activations, 1);
    }

    #[test]
    fn test_four_downs_then_accept_quits() {
        let config = OverlayConfig::default();
        let lister = MemLister::default();
        let mut host = RecordingHost {
            session_running: true,
            ..Default::default()
        };
        let mut stack = NavigationStack::new(crate::menu::build_main_menu(true, &config));
        let mut dispatcher = InputDispatcher::new(config.input_cooldown_frames);
        let mut tracker = ButtonTracker::default();

        let accept = PadState {
            accept: true,
            ..Default::default()
        };
        // Four repeats of a held down, then a tap of accept
        let mut script = vec![DOWN; 31];
        script.extend([PadState::default(), accept, accept, PadState::default()]);
        script.extend([PadState::default(); 5]);

        for state in script {
            for command in dispatcher.update(&tracker.update(state)) {
                stack.apply(command, &lister, &mut host, &config);
            }
        }

        assert_eq!(stack.current().selected_child().unwrap().label, "Quit");
        assert_eq!(host.quits, 1);
    }
}
