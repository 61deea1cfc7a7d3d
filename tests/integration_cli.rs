// Drives the compiled binary end-to-end over piped stdin. HOME is pointed
// at a temp directory so the config, high-score db, and results log stay
// out of the real user profile.

use assert_cmd::Command;
use tempfile::TempDir;

fn sandboxed_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chalkspell").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_DATA_HOME")
        .env_remove("XDG_STATE_HOME");
    cmd
}

#[test]
fn list_characters_prints_the_roster() {
    let home = TempDir::new().unwrap();
    let assert = sandboxed_command(&home)
        .arg("--list-characters")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("mario"));
    assert!(stdout.contains("pikachu"));
}

#[test]
fn single_round_session_completes() {
    let home = TempDir::new().unwrap();
    let assert = sandboxed_command(&home)
        .args(["--roster", "mario", "--rounds", "1", "--case-mode", "upper"])
        .write_stdin("mario\n")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("How do you spell... mario?"));
    assert!(stdout.contains("Character 1/1"));
    assert!(stdout.contains("CORRECT! Round score:"));
    assert!(stdout.contains("GAME COMPLETE! Final score:"));
    assert!(stdout.contains("NEW HIGH SCORE!"));
}

#[test]
fn wrong_streak_surfaces_a_hint() {
    let home = TempDir::new().unwrap();
    let assert = sandboxed_command(&home)
        .args(["--roster", "mario", "--rounds", "1", "--case-mode", "upper"])
        .write_stdin("xxx\nmario\n")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("wrong letter, try again"));
    assert!(stdout.contains("hint: the next letter is 'M'"));
    assert!(stdout.contains("GAME COMPLETE!"));
}

#[test]
fn closing_stdin_abandons_the_session() {
    let home = TempDir::new().unwrap();
    let assert = sandboxed_command(&home)
        .args(["--roster", "mario", "--rounds", "1"])
        .write_stdin("ma")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(!stdout.contains("GAME COMPLETE"));
}

#[test]
fn high_score_survives_between_runs() {
    let home = TempDir::new().unwrap();

    sandboxed_command(&home)
        .args(["--roster", "mario", "--rounds", "1", "--case-mode", "upper"])
        .write_stdin("mario\n")
        .assert()
        .success();

    // Second run reports the stored best before playing.
    let assert = sandboxed_command(&home)
        .args(["--roster", "mario", "--rounds", "1", "--case-mode", "upper"])
        .write_stdin("mario\n")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Best score so far:"));
}
