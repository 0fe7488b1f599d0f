mod helpers;

use helpers::{run_with_input, EnvGuard};
use serial_test::serial;

fn final_stacks(stdout: &str) -> Vec<u32> {
    let tail = stdout.split("Final stacks:").nth(1).expect("final stacks block");
    tail.lines()
        .filter_map(|line| line.rsplit(": ").next()?.trim().parse().ok())
        .collect()
}

#[test]
#[serial]
fn folding_every_hand_conserves_chips() {
    let _env = EnvGuard::clean();
    let input = "fold\n".repeat(10);
    let res = run_with_input(
        &["play", "--hands", "2", "--seed", "5", "--stack", "100"],
        &input,
    );
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("play: hands=2 seed=5 opponents=1 ai=baseline"));
    assert!(res.stdout.contains("=== Hand 1 ==="));
    // heads-up the dealer posts the small blind and acts first, so hand 1 opens
    // with the human's fold
    assert!(res.stdout.contains("hero folds"));
    assert!(res.stdout.contains("baseline-1 (P1) wins 15"));
    assert!(res.stdout.contains("Hands played: 2"));
    let stacks = final_stacks(&res.stdout);
    assert_eq!(stacks.len(), 2);
    assert_eq!(stacks.iter().sum::<u32>(), 200);
}

#[test]
#[serial]
fn table_is_rendered_from_the_human_seat() {
    let _env = EnvGuard::clean();
    let res = run_with_input(&["play", "--seed", "9", "--opponents", "2"], "fold\nfold\n");
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("Hand #1  Pre-flop  Pot: 15  Bet: 10"));
    assert!(res.stdout.contains("> P0 hero"));
    assert!(res.stdout.contains("[?? ??]"));
    assert!(res.stdout.contains("Your action (raise N/call/fold, q to quit): "));
}

#[test]
#[serial]
fn illegal_input_reprompts() {
    let _env = EnvGuard::clean();
    let res = run_with_input(&["play", "--seed", "1"], "dance\ncheck\nbet\nfold\n");
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stderr.contains("Error: unknown action \"dance\""));
    assert!(res.stderr.contains("Error: cannot check facing a bet of 5"));
    assert!(res.stderr.contains("Error: bet requires an amount"));
    assert!(res.stdout.contains("hero folds"));
}

#[test]
#[serial]
fn quit_ends_the_session_cleanly() {
    let _env = EnvGuard::clean();
    let res = run_with_input(&["play", "--hands", "5", "--seed", "2"], "q\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Quit after 0 hands"));
}

#[test]
#[serial]
fn closed_input_is_an_interruption() {
    let _env = EnvGuard::clean();
    let res = run_with_input(&["play", "--seed", "2"], "");
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("Interrupted"));
}

#[test]
#[serial]
fn bad_arguments_fail_before_dealing() {
    let _env = EnvGuard::clean();
    let res = run_with_input(&["play", "--hands", "0"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("hands must be >= 1"));

    let res = run_with_input(&["play", "--ai", "oracle"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("oracle"));
    assert!(!res.stdout.contains("=== Hand"));

    let res = run_with_input(&["play", "--opponents", "0"], "");
    assert_eq!(res.exit_code, 2);
}

#[test]
#[serial]
fn history_is_appended_to_file() {
    let _env = EnvGuard::clean();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("hands.txt");
    let path_str = path.to_string_lossy().to_string();

    for _ in 0..2 {
        let res = run_with_input(
            &["play", "--seed", "4", "--stack", "100", "--history", path_str.as_str()],
            "fold\n",
        );
        assert_eq!(res.exit_code, 0, "{}", res.stderr);
    }

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("% ") && lines[0].ends_with(" seed=4"));
    assert_eq!(lines[1], "#1 P0_100 P1_100 D0 P0_sb5 P1_bb10 P0_f |W_P1+15");
    assert_eq!(lines[1], lines[3]);
}

#[test]
#[serial]
fn history_path_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("env-hands.txt");
    let path_str = path.to_string_lossy().to_string();
    let _env = EnvGuard::apply(&[("HOLDEM_HISTORY", path_str.as_str()), ("HOLDEM_STACK", "50")]);

    let res = run_with_input(&["play", "--seed", "8"], "fold\n");
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("#1 P0_50 P1_50 D0 P0_sb5 P1_bb10 P0_f |W_P1+15\n"));
}
