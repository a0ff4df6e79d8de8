use predicates::prelude::*;
use std::fs;

use olc_testkit::{ORDER_ID, OTHER_ORDER_ID};

/// A legacy event for the watched order is normalized and triggers a refetch.
#[allow(deprecated)]
#[test]
fn event_watch_refetches_matching_order() -> anyhow::Result<()> {
    let mut cmd = assert_cmd::Command::cargo_bin("olc")?;
    cmd.args(["event", "-", "--watch", ORDER_ID])
        .write_stdin(format!(r#"{{"type":"rider_assigned","job_id":"{ORDER_ID}"}}"#));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("type=dispatch_driver_assigned\n"))
        .stdout(predicate::str::contains("refresh=true\n"))
        .stdout(predicate::str::contains(format!("decision=refetch:{ORDER_ID}")));
    Ok(())
}

/// Events addressed to a different order are ignored for the watched screen.
#[allow(deprecated)]
#[test]
fn event_watch_ignores_other_order() -> anyhow::Result<()> {
    let mut cmd = assert_cmd::Command::cargo_bin("olc")?;
    cmd.args(["event", "-", "--watch", ORDER_ID])
        .write_stdin(format!(r#"{{"type":"order_updated","order_id":"{OTHER_ORDER_ID}"}}"#));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("decision=ignore:other_order"));
    Ok(())
}

/// Replay summarizes every line; the malformed one is reported, not fatal.
#[allow(deprecated)]
#[test]
fn replay_reports_totals_and_bad_lines() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("events.ndjson");
    fs::write(&path, olc_testkit::event_log_ndjson())?;

    let mut cmd = assert_cmd::Command::cargo_bin("olc")?;
    cmd.arg("replay").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("line=1 type=order_created"))
        .stdout(predicate::str::contains("line=12 error="))
        .stdout(predicate::str::contains("events=10 refresh=9 ignored=1 errors=1"));
    Ok(())
}

/// `replay.only_refresh` from config drops ignored events from the listing.
#[allow(deprecated)]
#[test]
fn replay_only_refresh_from_config() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let log = dir.path().join("events.ndjson");
    fs::write(&log, olc_testkit::event_log_ndjson())?;
    let cfg = dir.path().join("olc.yaml");
    fs::write(&cfg, "replay:\n  only_refresh: true\n")?;

    let mut cmd = assert_cmd::Command::cargo_bin("olc")?;
    cmd.arg("--config").arg(&cfg).arg("replay").arg(&log);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chat_message_created").not())
        .stdout(predicate::str::contains("events=10 refresh=9 ignored=1 errors=1"));
    Ok(())
}

/// `--only-refresh=false` switches off `replay.only_refresh` from config.
#[allow(deprecated)]
#[test]
fn replay_flag_overrides_config_only_refresh() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let log = dir.path().join("events.ndjson");
    fs::write(&log, olc_testkit::event_log_ndjson())?;
    let cfg = dir.path().join("olc.yaml");
    fs::write(&cfg, "replay:\n  only_refresh: true\n")?;

    let mut cmd = assert_cmd::Command::cargo_bin("olc")?;
    cmd.arg("--config")
        .arg(&cfg)
        .arg("replay")
        .arg(&log)
        .arg("--only-refresh=false");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("line=11 type=chat_message_created"));
    Ok(())
}

/// A bare `--only-refresh` turns the filter on without any config.
#[allow(deprecated)]
#[test]
fn replay_bare_only_refresh_flag_filters() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let log = dir.path().join("events.ndjson");
    fs::write(&log, olc_testkit::event_log_ndjson())?;

    let mut cmd = assert_cmd::Command::cargo_bin("olc")?;
    cmd.arg("replay").arg(&log).arg("--only-refresh");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chat_message_created").not())
        .stdout(predicate::str::contains("line=1 type=order_created"));
    Ok(())
}
