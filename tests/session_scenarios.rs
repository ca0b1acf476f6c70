use std::time::Duration;

use fretdrill::{
    render_marker, render_shape, theory::shape_for, Command, Input, Marker, Position, Root,
    Session, SessionConfig, SessionState, TimerMode, Tonality,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

fn seeded(mode: TimerMode, seed: u64) -> Session {
    let config = SessionConfig::new(60, mode).unwrap();
    Session::with_rng(config, StdRng::seed_from_u64(seed))
}

#[test]
fn timed_loop_from_defaults() {
    let mut session = seeded(TimerMode::Dual, 42);
    assert_eq!(session.state().position.number(), 1);
    assert_eq!(session.state().tonality, Tonality::Major);
    assert_eq!(session.state().root, Root::C);

    session.command(Command::Start);
    assert_ne!(session.state().position.number(), 1);
    assert_eq!(session.state().seconds_remaining, 60);

    for elapsed in 1..60u64 {
        session.advance_to(secs(elapsed));
        assert_eq!(u64::from(session.state().seconds_remaining), 60 - elapsed);
    }

    let before_restart = session.state().position;
    session.advance_to(secs(60));
    assert_eq!(session.state().seconds_remaining, 60);
    assert_ne!(session.state().position, before_restart);
    assert!(session.is_running());
    assert_eq!(session.draws(), 2);

    session.advance_to(secs(61));
    assert_eq!(session.state().seconds_remaining, 59);
}

#[test]
fn long_run_keeps_one_draw_per_minute() {
    for mode in [TimerMode::Dual, TimerMode::Single] {
        let mut session = seeded(mode, 3);
        session.command(Command::Start);
        session.advance_to(secs(60 * 10 + 30));
        assert_eq!(session.draws(), 11, "{mode}");
        assert_eq!(session.state().seconds_remaining, 30, "{mode}");
    }
}

#[test]
fn position_always_changes_across_many_draws() {
    let mut session = seeded(TimerMode::Single, 11);
    session.command(Command::Start);
    let mut last = session.state().position;
    for minute in 1..=200u64 {
        session.advance_to(secs(minute * 60));
        let now = session.state().position;
        assert_ne!(now, last, "minute {minute}");
        last = now;
    }
}

#[test]
fn stop_while_idle_is_a_no_op() {
    let mut session = seeded(TimerMode::Dual, 1);
    session.command(Command::Stop);
    session.command(Command::Stop);
    assert_eq!(*session.state(), SessionState::default());
    assert_eq!(session.active_timers(), 0);
}

#[test]
fn stop_after_ticks_resets_countdown() {
    let mut session = seeded(TimerMode::Dual, 1);
    session.command(Command::Start);
    session.advance_to(secs(25));
    assert_eq!(session.state().seconds_remaining, 35);

    let selection = *session.state();
    session.command(Command::Stop);
    let state = session.state();
    assert_eq!(state.seconds_remaining, 60);
    assert!(!state.is_running);
    assert_eq!(state.position, selection.position);
    assert_eq!(state.root, selection.root);
    assert_eq!(state.tonality, selection.tonality);
}

#[test]
fn selection_drives_rendered_labels() {
    let mut session = seeded(TimerMode::Dual, 5);
    session.apply(Input::SetTonality(Tonality::Minor));
    session.apply(Input::SetPentatonic(true));
    session.apply(Input::SetPosition(Position::new(1).unwrap()));

    let state = session.state();
    let row = shape_for(state.position).string(1).unwrap();
    let labels: Vec<Option<&str>> = row
        .iter()
        .map(|&m| render_marker(m, state.tonality, state.pentatonic))
        .collect();
    // "7" is dropped before minor translation could turn it into "2"
    assert_eq!(labels, vec![None, None, Some("b3"), None, Some("4")]);

    let shape = render_shape(state.position, state.tonality, state.pentatonic);
    assert_eq!(shape.strings[0].frets.map(|f| f.label), [None, None, Some("b3"), None, Some("4")]);
}

#[test]
fn minor_roots_highlight_the_sixth_degree() {
    for position in Position::ALL {
        let shape = render_shape(position, Tonality::Minor, false);
        let markers: Vec<Marker> = shape_for(position).markers().collect();
        let frets = shape.strings.iter().flat_map(|s| s.frets.iter());
        for (fret, marker) in frets.zip(markers) {
            assert_eq!(fret.is_root, marker.code() == "6", "position {position}");
            if fret.is_root {
                assert_eq!(fret.label, Some("1"));
            }
        }
    }
}
