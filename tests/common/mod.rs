use assert_cmd::Command;

pub fn moodjournal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodjournal").unwrap();
    cmd.env_remove("MOODJOURNAL_ROOT");
    cmd
}
