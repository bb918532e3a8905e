//! Tests for the round controller.

use noughts_session::{ClickResponse, Session, SessionConfig, StatusMessages, init_tracing};
use noughts_tictactoe::{Mark, MoveError, Outcome};
use std::io::Write;

fn seeded(seed: u64) -> Session {
    Session::new(&SessionConfig::default().with_seed(seed))
}

/// Clicks the first open cell until the round ends.
fn play_out(session: &mut Session) -> Outcome {
    loop {
        let index = session
            .game()
            .board()
            .empty_cells()
            .next()
            .expect("an ongoing round has a free cell");
        match session.click(index).expect("free cell is playable") {
            ClickResponse::Played(report) if report.game_over() => return report.outcome,
            ClickResponse::Played(_) => {}
            ClickResponse::Restarted => panic!("round restarted while ongoing"),
        }
    }
}

#[test]
fn test_tracing_init_is_idempotent() {
    let config = SessionConfig::from_toml_str("log_filter = \"noughts_session=debug\"")
        .expect("valid config");
    let _ = config.init_tracing();
    assert!(!config.init_tracing());
    assert!(!init_tracing("debug"));
}

#[test]
fn test_center_opening() {
    let mut session = seeded(1);
    let report = session.play_user_move(4).expect("center is free");

    let reply = report.computer_move.expect("round continues after one move");
    assert_ne!(reply, 4);
    assert_eq!(report.outcome, Outcome::Ongoing);
    assert_eq!(session.game().move_count(), 2);
    assert!(!session.game().is_over());
    assert_eq!(session.game().board().cell_at(4).mark(), Some(Mark::Cross));
}

#[test]
fn test_same_seed_same_replies() {
    let mut a = seeded(77);
    let mut b = seeded(77);
    for index in [4, 0, 8, 2, 6] {
        let ra = a.play_user_move(index);
        let rb = b.play_user_move(index);
        assert_eq!(ra, rb);
        if ra.map(|r| r.game_over()).unwrap_or(true) {
            break;
        }
    }
}

#[test]
fn test_rounds_end_with_matching_status() {
    let messages = StatusMessages::default();
    for seed in 0..20 {
        let mut session = seeded(seed);
        let outcome = play_out(&mut session);
        let expected = match outcome {
            Outcome::Won(Mark::Cross) => messages.user_won(),
            Outcome::Won(Mark::Circle) => messages.computer_won(),
            Outcome::Tie => messages.tie(),
            Outcome::Ongoing => panic!("play_out returned an open round"),
        };
        assert_eq!(session.status_text(), expected);
    }
}

#[test]
fn test_click_after_game_over_restarts() {
    let mut session = seeded(5);
    play_out(&mut session);

    assert_eq!(session.play_user_move(0), Err(MoveError::GameOver));
    assert_eq!(session.click(0), Ok(ClickResponse::Restarted));
    assert_eq!(session.rounds_completed(), 1);
    assert_eq!(session.game().move_count(), 0);
    assert_eq!(session.status_text(), StatusMessages::default().ongoing());
    assert!(session.cell_labels().iter().enumerate().all(|(i, l)| *l == (i + 1).to_string()));
}

#[test]
fn test_restart_mid_round_is_not_counted() {
    let mut session = seeded(9);
    session.play_user_move(4).expect("center is free");
    session.restart();
    assert_eq!(session.rounds_completed(), 0);
    assert_eq!(session.game().move_count(), 0);
}

#[test]
fn test_messages_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
seed = 4
log_filter = "noughts_tictactoe=debug"

[messages]
ongoing = "Go."
"#
    )
    .expect("write config");

    let config = SessionConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.seed(), &Some(4));
    assert_eq!(config.log_filter(), "noughts_tictactoe=debug");

    let session = Session::new(&config);
    assert_eq!(session.status_text(), "Go.");
}
