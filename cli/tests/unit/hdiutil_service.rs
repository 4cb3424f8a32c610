//! End-to-end tests of the `Hdiutil` client over both execution strategies,
//! with the process runner and scripting bridge replaced by doubles.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use hdiutil::application::services::{BridgedExecutor, DirectExecutor, Executor};
use hdiutil::domain::options::{
    AttachOption, ConvertOption, CreateOption, FileSystem, ImageFormat, InfoOption, Size,
};
use hdiutil::domain::{ExecutionMode, UnsupportedVerb};
use hdiutil::{Hdiutil, HdiutilConfig, HdiutilError};

use crate::mocks::{
    MissingBinary, NoBridge, RecordingBridge, RecordingRunner, err_output, ok_output,
};

const BINARY: &str = "/usr/bin/hdiutil";

fn direct(runner: RecordingRunner) -> Hdiutil<DirectExecutor<RecordingRunner>> {
    Hdiutil::new(DirectExecutor::new(runner, BINARY, false))
}

fn bridged(bridge: RecordingBridge) -> Hdiutil<BridgedExecutor<RecordingBridge>> {
    Hdiutil::new(BridgedExecutor::new(bridge, BINARY, false))
}

// ── Direct mode ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn direct_attach_spawns_binary_with_tokens() {
    let client = direct(RecordingRunner::replying(
        "/dev/disk4\tGUID_partition_scheme\t\n/dev/disk4s1\tApple_HFS\t/Volumes/Data\n",
    ));

    let out = client
        .attach(
            Path::new("/tmp/data.dmg"),
            vec![AttachOption::ReadOnly, AttachOption::Verify(false)],
        )
        .await
        .expect("attach");

    assert_eq!(out.device_node, "/dev/disk4");
    assert_eq!(out.mount_point, PathBuf::from("/Volumes/Data"));

    let calls = client.executor().runner_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, BINARY);
    assert_eq!(calls[0].1, ["attach", "/tmp/data.dmg", "-readonly", "-noverify"]);
}

#[tokio::test]
async fn direct_passes_paths_with_spaces_as_single_tokens() {
    let client = direct(RecordingRunner::replying("created: /tmp/My Image.dmg\n"));

    let out = client
        .create(
            Path::new("My Image.dmg"),
            Some(Path::new("/tmp")),
            vec![CreateOption::Size(Size::Megabytes(10))],
        )
        .await
        .expect("create");

    assert_eq!(out.image_path, PathBuf::from("/tmp/My Image.dmg"));
    assert_eq!(
        client.executor().runner_args(),
        ["create", "/tmp/My Image.dmg", "-size", "10m"]
    );
}

#[tokio::test]
async fn direct_stderr_wins_over_stdout() {
    let mut output = ok_output(b"/dev/disk2\t/Volumes/x\n");
    output.stderr = b"hdiutil: attach: warning\n".to_vec();
    let client = direct(RecordingRunner::new(output));

    let err = client.attach(Path::new("a.dmg"), vec![]).await.unwrap_err();
    match err {
        HdiutilError::Process(Some(text)) => assert_eq!(text, "hdiutil: attach: warning\n"),
        other => panic!("expected Process, got {other:?}"),
    }
}

#[tokio::test]
async fn direct_failure_carries_stderr_text() {
    let client = direct(RecordingRunner::new(err_output(
        b"hdiutil: detach failed - No such file or directory\n",
    )));

    let err = client.detach("disk9", false).await.unwrap_err();
    assert_eq!(err.code(), "process_error");
    assert_eq!(
        err.to_string(),
        "Process error: hdiutil: detach failed - No such file or directory"
    );
}

#[tokio::test]
async fn direct_ignores_exit_status_when_stderr_is_empty() {
    let mut output = err_output(b"");
    output.stdout = b"\"disk2\" ejected.\n".to_vec();
    let client = direct(RecordingRunner::new(output));

    let out = client.detach("disk2", true).await.expect("detach");
    assert_eq!(out, "\"disk2\" ejected.\n");
    assert_eq!(client.executor().runner_args(), ["detach", "disk2", "-force"]);
}

#[tokio::test]
async fn direct_spawn_failure_is_unexpected() {
    let client = Hdiutil::new(DirectExecutor::new(MissingBinary, BINARY, false));
    let err = client.info(vec![]).await.unwrap_err();
    assert!(matches!(err, HdiutilError::Unexpected(ref msg) if msg.contains("failed to spawn")));
}

#[tokio::test]
async fn direct_convert_puts_format_and_output_first_and_image_last() {
    let client = direct(RecordingRunner::replying(""));

    client
        .convert(
            Path::new("in.dmg"),
            ImageFormat::Udzo,
            Path::new("out.dmg"),
            vec![
                ConvertOption::Overwrite,
                ConvertOption::ImageKey("zlib-level".into(), "9".into()),
            ],
        )
        .await
        .expect("convert");

    assert_eq!(
        client.executor().runner_args(),
        [
            "convert",
            "-format",
            "UDZO",
            "-o",
            "out.dmg",
            "-ov",
            "-imagekey",
            "zlib-level=9",
            "in.dmg"
        ]
    );
}

#[tokio::test]
async fn direct_create_with_unparseable_reply_is_invalid_output() {
    let client = direct(RecordingRunner::replying("done\n"));
    let err = client
        .create(Path::new("x.dmg"), None, vec![CreateOption::Fs(FileSystem::Apfs)])
        .await
        .unwrap_err();
    assert!(matches!(err, HdiutilError::InvalidOutput { verb: "create", .. }));
}

// ── Bridged mode ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn bridged_wraps_display_form_in_shell_script() {
    let client = bridged(RecordingBridge::replying("framework : 1.0"));

    let out = client.info(vec![InfoOption::Simplified]).await.expect("info");
    assert_eq!(out, "framework : 1.0");

    let scripts = client.executor().bridge_scripts();
    assert_eq!(
        scripts,
        [format!("do shell script \"\\\"{BINARY}\\\" info -s\"")]
    );
}

#[tokio::test]
async fn bridged_escapes_quoted_arguments_for_the_script_literal() {
    let client = bridged(RecordingBridge::replying("disk3\t\t/Volumes/a\n"));

    client
        .attach(Path::new("/tmp/a b.dmg"), vec![AttachOption::NoBrowse])
        .await
        .expect("attach");

    assert_eq!(
        client.executor().bridge_scripts(),
        [format!(
            "do shell script \"\\\"{BINARY}\\\" attach \\\"/tmp/a b.dmg\\\" -nobrowse\""
        )]
    );
}

#[tokio::test]
async fn bridged_create_changes_into_destination_first() {
    let client = bridged(RecordingBridge::replying("created: /out/new.dmg"));

    let out = client
        .create(Path::new("new.dmg"), Some(Path::new("/out")), vec![])
        .await
        .expect("create");
    assert_eq!(out.image_path, PathBuf::from("/out/new.dmg"));

    let scripts = client.executor().bridge_scripts();
    assert_eq!(scripts.len(), 1);
    assert!(
        scripts[0].starts_with("do shell script \"cd \\\"/out\\\" && \\\"/usr/bin/hdiutil\\\" create "),
        "unexpected script: {}",
        scripts[0]
    );
}

#[tokio::test]
async fn bridged_create_with_relative_destination_stays_in_place() {
    let client = bridged(RecordingBridge::replying("created: out/new.dmg"));

    let out = client
        .create(Path::new("new.dmg"), Some(Path::new("out")), vec![])
        .await
        .expect("create");
    assert_eq!(out.image_path, PathBuf::from("out/new.dmg"));

    assert_eq!(
        client.executor().bridge_scripts(),
        [format!(
            "do shell script \"\\\"{BINARY}\\\" create \\\"out/new.dmg\\\"\""
        )]
    );
}

#[tokio::test]
async fn bridged_create_with_absolute_image_ignores_destination() {
    let client = bridged(RecordingBridge::replying("created: /data/new.dmg"));

    client
        .create(Path::new("/data/new.dmg"), Some(Path::new("/out")), vec![])
        .await
        .expect("create");

    let scripts = client.executor().bridge_scripts();
    assert!(
        scripts[0].ends_with(&format!("\\\"{BINARY}\\\" create \\\"/data/new.dmg\\\"\"")),
        "unexpected script: {}",
        scripts[0]
    );
}

#[tokio::test]
async fn bridged_failure_without_text_is_process_nil() {
    let client = bridged(RecordingBridge::failing());
    let err = client.detach("disk2", false).await.unwrap_err();
    assert_eq!(err.to_string(), "Process error: nil");
}

// ── Strategy selection ───────────────────────────────────────────────────────

#[tokio::test]
async fn executor_from_config_uses_direct_by_default() {
    let config = HdiutilConfig::default();
    let executor = Executor::from_config(&config, RecordingRunner::replying("ok"), NoBridge);
    assert_eq!(executor.mode(), ExecutionMode::Direct);

    let client = Hdiutil::new(executor);
    assert_eq!(client.help().await.expect("help"), "ok");
}

#[tokio::test]
async fn executor_from_config_honours_bridged_mode() {
    let config = HdiutilConfig {
        mode: ExecutionMode::Bridged,
        ..HdiutilConfig::default()
    };
    let executor = Executor::from_config(
        &config,
        MissingBinary,
        RecordingBridge::replying("usage"),
    );
    assert_eq!(executor.mode(), ExecutionMode::Bridged);

    let client = Hdiutil::new(executor);
    assert_eq!(client.help().await.expect("help"), "usage");
}

#[test]
fn every_unsupported_verb_is_unimplemented() {
    let client = direct(RecordingRunner::replying(""));
    for verb in UnsupportedVerb::ALL {
        let err = client.unsupported(verb).unwrap_err();
        assert_eq!(err.code(), "unimplemented");
    }
    assert!(client.executor().runner_calls().is_empty());
}

// ── Accessors over the executor doubles ──────────────────────────────────────

trait RunnerCalls {
    fn runner_calls(&self) -> Vec<(String, Vec<String>)>;
    fn runner_args(&self) -> Vec<String>;
}

impl RunnerCalls for DirectExecutor<RecordingRunner> {
    fn runner_calls(&self) -> Vec<(String, Vec<String>)> {
        self.runner().calls()
    }

    fn runner_args(&self) -> Vec<String> {
        self.runner().single_args()
    }
}

trait BridgeScripts {
    fn bridge_scripts(&self) -> Vec<String>;
}

impl BridgeScripts for BridgedExecutor<RecordingBridge> {
    fn bridge_scripts(&self) -> Vec<String> {
        self.bridge().scripts()
    }
}
