use assert_cmd::Command;

pub fn backfill_cmd() -> Command {
    let mut cmd = Command::cargo_bin("backfill").unwrap();
    cmd.env_remove("BACKFILL_CONFIG");
    cmd.env_remove("BACKFILL_LOG");
    cmd
}

#[allow(dead_code)]
pub const CALENDAR: &str = r#"<svg width="722" height="112">
  <rect class="day" data-count="0" data-date="2023-12-30"/>
  <rect class="day" data-count="7" data-date="2023-12-31"/>
  <rect class="day" data-count="2" data-date="2024-01-01"/>
</svg>
"#;
