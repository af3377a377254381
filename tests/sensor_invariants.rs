//! Property tests over random operation sequences.

mod common;

use common::*;
use kbdrag::sensor::WINDOW_BINDINGS;
use kbdrag::{Axis, SensorContext, WindowEvent};
use proptest::prelude::*;
use ratatui::crossterm::event::KeyCode;
use std::time::Instant;

#[derive(Debug, Clone)]
enum Op {
    Key {
        code: KeyCode,
        can_lift: bool,
        axis: Option<Axis>,
    },
    Window(WindowEvent),
    Flush,
    Kill,
}

fn key_code() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Char(' ')),
        Just(KeyCode::Esc),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Left),
        Just(KeyCode::Right),
        Just(KeyCode::Tab),
        Just(KeyCode::Enter),
        any::<char>().prop_map(KeyCode::Char),
    ]
}

fn axis() -> impl Strategy<Value = Option<Axis>> {
    prop_oneof![
        Just(None),
        Just(Some(Axis::Vertical)),
        Just(Some(Axis::Horizontal)),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (key_code(), any::<bool>(), axis())
            .prop_map(|(code, can_lift, axis)| Op::Key { code, can_lift, axis }),
        1 => prop_oneof![Just(WindowEvent::Resize), Just(WindowEvent::Scroll)].prop_map(Op::Window),
        2 => Just(Op::Flush),
        1 => Just(Op::Kill),
    ]
}

fn is_move(call: Call) -> bool {
    matches!(
        call,
        Call::Forward | Call::Backward | Call::CrossForward | Call::CrossBackward
    )
}

proptest! {
    #[test]
    fn state_and_listeners_stay_consistent(ops in prop::collection::vec(op(), 0..64)) {
        let (mut sensor, window) = setup();

        for op in ops {
            let was_dragging = sensor.is_dragging();
            let calls_before = sensor.callbacks().calls.len();

            match op {
                Op::Key { code, can_lift, axis } => {
                    let context = SensorContext::new(can_lift, axis);
                    let disposition = sensor.on_key_down(&key(code), context);
                    // Every key is swallowed while dragging.
                    if was_dragging {
                        prop_assert!(disposition.is_suppressed());
                    }
                }
                Op::Window(event) => fire(&window, &mut sensor, event),
                Op::Flush => {
                    sensor.flush_frame(Instant::now());
                }
                Op::Kill => {
                    sensor.kill();
                    prop_assert_eq!(sensor.callbacks().calls.len(), calls_before);
                }
            }

            prop_assert_eq!(sensor.is_dragging(), sensor.is_capturing());
            let expected = if sensor.is_dragging() { WINDOW_BINDINGS.len() } else { 0 };
            prop_assert_eq!(window.listener_count(), expected);

            // Movement only reaches the engine while a drag is active.
            if let Some(last) = sensor.callbacks().calls.last().copied() {
                if sensor.callbacks().calls.len() > calls_before && is_move(last) {
                    prop_assert!(sensor.is_dragging());
                }
            }
        }
    }

    #[test]
    fn lifecycle_calls_alternate(ops in prop::collection::vec(op(), 0..64)) {
        let (mut sensor, window) = setup();

        for op in ops {
            match op {
                Op::Key { code, can_lift, axis } => {
                    sensor.on_key_down(&key(code), SensorContext::new(can_lift, axis));
                }
                Op::Window(event) => fire(&window, &mut sensor, event),
                Op::Flush => {
                    sensor.flush_frame(Instant::now());
                }
                Op::Kill => sensor.kill(),
            }
        }

        // Between two lifts there is at most one drop or cancel, never both.
        let mut open = false;
        for call in &sensor.callbacks().calls {
            match call {
                Call::Lift => {
                    open = true;
                }
                Call::Drop | Call::Cancel => {
                    prop_assert!(open);
                    open = false;
                }
                _ => prop_assert!(open),
            }
        }
    }

    #[test]
    fn kill_twice_equals_kill_once(ops in prop::collection::vec(op(), 0..32)) {
        let (mut once, window_once) = setup();
        let (mut twice, window_twice) = setup();

        for op in ops {
            for (sensor, window) in [(&mut once, &window_once), (&mut twice, &window_twice)] {
                match op.clone() {
                    Op::Key { code, can_lift, axis } => {
                        sensor.on_key_down(&key(code), SensorContext::new(can_lift, axis));
                    }
                    Op::Window(event) => fire(window, sensor, event),
                    Op::Flush | Op::Kill => {}
                }
            }
        }

        once.kill();
        twice.kill();
        twice.kill();

        prop_assert_eq!(once.is_dragging(), twice.is_dragging());
        prop_assert_eq!(window_once.listener_count(), window_twice.listener_count());
        prop_assert_eq!(&once.callbacks().calls, &twice.callbacks().calls);
    }
}
