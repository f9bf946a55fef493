//! Exclusive playback across a registry of simulated players

use proptest::prelude::*;
use stagelight::media::{
    Glyph, MediaError, MediaHandle, PlaybackError, PlayerRegistry, SessionId, SimulatedMedia,
};

fn registry(lengths: &[f64]) -> PlayerRegistry {
    let mut players = PlayerRegistry::new();
    for (i, length) in lengths.iter().enumerate() {
        players.register(format!("Mix {i}"), Box::new(SimulatedMedia::new(*length)));
    }
    players
}

/// Every session's flag, glyph and handle agree, and at most one plays.
fn assert_consistent(players: &PlayerRegistry) {
    let playing = players.sessions().iter().filter(|s| s.is_playing()).count();
    assert!(playing <= 1, "{playing} sessions playing");

    for session in players.sessions() {
        assert_eq!(session.is_playing(), !session.handle().is_paused());
        let glyph = if session.is_playing() {
            Glyph::Pause
        } else {
            Glyph::Play
        };
        assert_eq!(session.display().glyph, glyph);
        let percent = session.display().progress_percent;
        assert!((0.0..=100.0).contains(&percent), "{percent}");
    }
}

#[test]
fn playing_one_stops_the_other() {
    let mut players = registry(&[60.0, 60.0]);
    let (a, b) = (SessionId(0), SessionId(1));

    players.play(b).unwrap();
    players.play(a).unwrap();

    assert!(players.get(a).unwrap().is_playing());
    assert!(!players.get(b).unwrap().is_playing());
    assert_eq!(players.get(b).unwrap().display().glyph, Glyph::Play);
    assert_eq!(players.playing(), Some(a));
}

#[test]
fn playing_twice_is_idempotent() {
    let mut players = registry(&[60.0]);
    let a = SessionId(0);

    players.play(a).unwrap();
    players.advance(5.0);
    players.play(a).unwrap();

    assert!(players.get(a).unwrap().is_playing());
    assert_eq!(players.get(a).unwrap().handle().position(), 5.0);
}

#[test]
fn clip_end_resets_display() {
    let mut players = registry(&[10.0]);
    let a = SessionId(0);

    players.play(a).unwrap();
    players.advance(12.0);

    let session = players.get(a).unwrap();
    assert!(!session.is_playing());
    assert_eq!(session.display().progress_percent, 0.0);
    assert_eq!(session.handle().position(), 0.0);
    assert_eq!(session.display().time_text, "0:00 / 0:10");
}

#[test]
fn refused_start_reports_and_keeps_others_stopped() {
    let mut players = PlayerRegistry::new();
    let a = players.register("Mix A", Box::new(SimulatedMedia::new(60.0)));
    let b = players.register(
        "Mix B",
        Box::new(SimulatedMedia::new(60.0).refusing(MediaError::Unavailable("404".into()))),
    );

    players.play(a).unwrap();
    let err = players.play(b).unwrap_err();

    assert_eq!(
        err,
        PlaybackError::StartRefused {
            id: b,
            source: MediaError::Unavailable("404".into()),
        }
    );
    assert_eq!(players.playing(), None);
    assert_consistent(&players);
}

#[test]
fn seek_before_metadata_is_ignored() {
    let mut players = PlayerRegistry::new();
    let a = players.register(
        "Slow",
        Box::new(SimulatedMedia::new(120.0).with_metadata_delay(1.0)),
    );

    assert!(!players.seek(a, 0.5).unwrap());
    assert_eq!(players.get(a).unwrap().display().time_text, "0:00 / 0:00");

    players.advance(1.0);
    assert_eq!(players.get(a).unwrap().display().time_text, "0:00 / 2:00");
    assert!(players.seek(a, 0.5).unwrap());
    players.pump();
    assert_eq!(players.get(a).unwrap().display().progress_percent, 50.0);
}

#[derive(Debug, Clone)]
enum Op {
    Toggle(usize),
    Play(usize),
    Pause(usize),
    Seek(usize, f64),
    Advance(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..3usize).prop_map(Op::Toggle),
        (0..3usize).prop_map(Op::Play),
        (0..3usize).prop_map(Op::Pause),
        (0..3usize, -0.5..1.5f64).prop_map(|(i, f)| Op::Seek(i, f)),
        (0.0..30.0f64).prop_map(Op::Advance),
    ]
}

proptest! {
    #[test]
    fn any_gesture_sequence_keeps_playback_exclusive(ops in prop::collection::vec(op(), 1..60)) {
        let mut players = registry(&[20.0, 45.5, 90.0]);
        for op in ops {
            match op {
                Op::Toggle(i) => players.toggle(SessionId(i)).unwrap(),
                Op::Play(i) => players.play(SessionId(i)).unwrap(),
                Op::Pause(i) => players.pause(SessionId(i)).unwrap(),
                Op::Seek(i, f) => {
                    players.seek(SessionId(i), f).unwrap();
                }
                Op::Advance(dt) => {
                    players.advance(dt);
                }
            }
            players.pump();
            assert_consistent(&players);
        }
    }

    #[test]
    fn toggle_twice_restores_state(first in 0..3usize, target in 0..3usize) {
        let mut players = registry(&[20.0, 20.0, 20.0]);
        players.play(SessionId(first)).unwrap();
        let before: Vec<bool> = players.sessions().iter().map(|s| s.is_playing()).collect();

        players.toggle(SessionId(target)).unwrap();
        players.toggle(SessionId(target)).unwrap();

        let target_playing = players.get(SessionId(target)).unwrap().is_playing();
        prop_assert_eq!(target_playing, before[target]);
    }
}
