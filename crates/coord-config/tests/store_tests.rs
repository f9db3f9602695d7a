use coord_config::{ConfigStore, PersistedKey, TemporaryKey};
use coord_fs::{RobustnessConfig, io};
use coord_test_utils::{ScratchDir, assert_equal, assert_error_contains};
use fs2::FileExt;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CapturedLog {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[fixture]
fn scratch() -> ScratchDir {
    ScratchDir::new()
}

#[rstest]
fn test_persisted_common_usage(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    let mut cfg = ConfigStore::new(&path);
    cfg.load_persisted().unwrap();
    assert_equal("", cfg.get(PersistedKey::EnablePersonalFeatures));
    assert_equal("", cfg.get(PersistedKey::FilepathPython));
    assert_equal("", cfg.get(PersistedKey::FilepathTrash));
    cfg.set(PersistedKey::EnablePersonalFeatures, "data=with=equals=")
        .unwrap();
    cfg.set(PersistedKey::FilepathPython, " data\twith\t tabs")
        .unwrap();

    // from memory
    assert_equal("data=with=equals=", cfg.get(PersistedKey::EnablePersonalFeatures));
    assert_equal(" data\twith\t tabs", cfg.get(PersistedKey::FilepathPython));
    assert_equal("", cfg.get(PersistedKey::FilepathTrash));

    // from disk
    let mut cfg = ConfigStore::new(&path);
    cfg.load_persisted().unwrap();
    assert_equal("data=with=equals=", cfg.get(PersistedKey::EnablePersonalFeatures));
    assert_equal(" data\twith\t tabs", cfg.get(PersistedKey::FilepathPython));
    assert_equal("", cfg.get(PersistedKey::FilepathTrash));
}

#[rstest]
fn test_persisted_bools(scratch: ScratchDir) {
    let mut cfg = ConfigStore::new(scratch.file("testbools.ini"));
    assert_equal(false, cfg.get_bool(PersistedKey::EnablePersonalFeatures));
    cfg.set_bool(PersistedKey::EnablePersonalFeatures, true).unwrap();
    assert_equal(true, cfg.get_bool(PersistedKey::EnablePersonalFeatures));
    cfg.set_bool(PersistedKey::EnablePersonalFeatures, false).unwrap();
    assert_equal(false, cfg.get_bool(PersistedKey::EnablePersonalFeatures));
}

#[rstest]
#[case::carriage_return("data\rnewline")]
#[case::line_feed("data\nnewline")]
#[case::crlf("data\r\nnewline")]
fn test_newlines_are_rejected(scratch: ScratchDir, #[case] value: &str) {
    let path = scratch.file("test.ini");
    let mut cfg = ConfigStore::new(&path);
    cfg.set(PersistedKey::FilepathPython, "before").unwrap();
    let on_disk = fs::read_to_string(&path).unwrap();

    assert_error_contains(cfg.set(PersistedKey::FilepathPython, value), "cannot contain newline");

    assert_eq!(cfg.get(PersistedKey::FilepathPython), "before");
    assert_eq!(fs::read_to_string(&path).unwrap(), on_disk);
}

#[rstest]
fn test_rejected_first_set_creates_no_file(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    let mut cfg = ConfigStore::new(&path);

    assert_error_contains(cfg.set(PersistedKey::FilepathTrash, "a\nb"), "cannot contain newline");

    assert!(!path.exists());
}

#[rstest]
fn test_in_memory(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    let mut cfg = ConfigStore::new(&path);
    assert_equal("", cfg.get_temporary(TemporaryKey::SuppressDialogs));
    cfg.set_temporary(TemporaryKey::SuppressDialogs, "data=with=equals=")
        .unwrap();
    assert_equal("data=with=equals=", cfg.get_temporary(TemporaryKey::SuppressDialogs));
    cfg.set_temporary(TemporaryKey::SuppressDialogs, "").unwrap();
    assert_equal("", cfg.get_temporary(TemporaryKey::SuppressDialogs));
    assert!(!path.exists());
}

#[rstest]
fn test_namespaces_are_independent(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    let mut cfg = ConfigStore::new(&path);
    cfg.set_temporary(TemporaryKey::SuppressDialogs, "true").unwrap();
    cfg.set(PersistedKey::FilepathTrash, "trash").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "FilepathTrash=trash\n");

    let mut reloaded = ConfigStore::new(&path);
    reloaded.load_persisted().unwrap();
    assert_eq!(reloaded.get_temporary(TemporaryKey::SuppressDialogs), "");
    assert_eq!(cfg.get_temporary(TemporaryKey::SuppressDialogs), "true");
}

#[rstest]
fn test_get_does_not_reread_disk(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    let mut cfg = ConfigStore::new(&path);
    cfg.set(PersistedKey::FilepathPython, "mine").unwrap();

    fs::write(&path, "FilepathPython=external\n").unwrap();

    assert_eq!(cfg.get(PersistedKey::FilepathPython), "mine");
    cfg.load_persisted().unwrap();
    assert_eq!(cfg.get(PersistedKey::FilepathPython), "external");
}

#[rstest]
fn test_load_replaces_previous_state(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    let mut cfg = ConfigStore::new(&path);
    cfg.set(PersistedKey::FilepathPython, "py").unwrap();

    fs::remove_file(&path).unwrap();
    cfg.load_persisted().unwrap();

    assert_eq!(cfg.get(PersistedKey::FilepathPython), "");
    assert_eq!(cfg.entries().count(), 0);
}

#[rstest]
fn test_malformed_lines_are_skipped(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    fs::write(
        &path,
        "garbage without separator\nFilepathPython=py\n=no key\nFilepathTrash=t\n",
    )
    .unwrap();

    let mut cfg = ConfigStore::new(&path);
    cfg.load_persisted().unwrap();

    assert_eq!(cfg.get(PersistedKey::FilepathPython), "py");
    assert_eq!(cfg.get(PersistedKey::FilepathTrash), "t");
}

#[rstest]
fn test_malformed_lines_warn_once_per_load(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    fs::write(&path, "first bad line\nsecond bad line\nFilepathPython=py\n").unwrap();

    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let mut cfg = ConfigStore::new(&path);
    tracing::subscriber::with_default(subscriber, || cfg.load_persisted().unwrap());

    let output = log.text();
    assert_eq!(output.matches("WARN").count(), 1, "{output}");
    assert!(output.contains("skipped=2"), "{output}");
    assert_eq!(cfg.get(PersistedKey::FilepathPython), "py");
}

#[rstest]
fn test_line_that_is_not_utf8_is_skipped(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    fs::write(&path, b"FilepathPython=py\nFilepathTrash=C:\\M\xfcll\n").unwrap();

    let mut cfg = ConfigStore::new(&path);
    cfg.load_persisted().unwrap();

    assert_eq!(cfg.get(PersistedKey::FilepathPython), "py");
    assert_eq!(cfg.get(PersistedKey::FilepathTrash), "");
}

#[rstest]
fn test_set_after_undecodable_line_keeps_other_entries(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    fs::write(
        &path,
        b"FilepathPython=py\nFilepathTrash=C:\\M\xfcll\nFilepathExifTool=exif\nFutureSetting=1\n",
    )
    .unwrap();

    let mut cfg = ConfigStore::new(&path);
    cfg.load_persisted().unwrap();
    cfg.set_bool(PersistedKey::EnablePersonalFeatures, true).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "EnablePersonalFeatures=true\nFilepathPython=py\nFilepathExifTool=exif\nFutureSetting=1\n"
    );
}

#[rstest]
fn test_unrecognized_keys_survive_rewrite(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    fs::write(&path, "FutureSetting=keep me\nFilepathPython=old\n").unwrap();

    let mut cfg = ConfigStore::new(&path);
    cfg.load_persisted().unwrap();
    assert_eq!(
        cfg.unrecognized(),
        &[("FutureSetting".to_string(), "keep me".to_string())]
    );
    cfg.set(PersistedKey::FilepathPython, "new").unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "FilepathPython=new\nFutureSetting=keep me\n"
    );
}

#[rstest]
fn test_entries_are_in_key_order(scratch: ScratchDir) {
    let mut cfg = ConfigStore::new(scratch.file("test.ini"));
    cfg.set(PersistedKey::FilepathExifTool, "exiftool").unwrap();
    cfg.set(PersistedKey::EnablePersonalFeatures, "true").unwrap();

    let entries: Vec<_> = cfg.entries().collect();
    assert_eq!(
        entries,
        vec![
            (PersistedKey::EnablePersonalFeatures, "true"),
            (PersistedKey::FilepathExifTool, "exiftool"),
        ]
    );
}

#[rstest]
fn test_set_creates_missing_parent_directory(scratch: ScratchDir) {
    let path = scratch.path().join("settings").join("options.ini");
    let mut cfg = ConfigStore::new(&path);

    cfg.set(PersistedKey::FilepathWebp, r"C:\Program Files\libwebp\bin\cwebp.exe")
        .unwrap();

    assert!(path.is_file());
}

#[cfg(unix)]
#[rstest]
fn test_unreadable_file_is_an_error(scratch: ScratchDir) {
    // A directory at the file's path cannot be read as text
    let path = scratch.file("test.ini");
    fs::create_dir(&path).unwrap();

    let mut cfg = ConfigStore::new(&path);
    assert!(cfg.load_persisted().is_err());
}

#[rstest]
fn test_failed_write_leaves_memory_unchanged(scratch: ScratchDir) {
    // A regular file where the parent directory should be
    fs::write(scratch.file("blocker"), "").unwrap();
    let mut cfg = ConfigStore::new(scratch.path().join("blocker").join("test.ini"));

    let result = cfg.set(PersistedKey::FilepathMozJpeg, "cjpeg.exe");

    assert!(matches!(result, Err(coord_config::Error::Fs(_))));
    assert_eq!(cfg.get(PersistedKey::FilepathMozJpeg), "");
}

#[rstest]
fn test_lock_timeout_leaves_memory_and_disk_unchanged(scratch: ScratchDir) {
    let path = scratch.file("test.ini");
    let robustness = RobustnessConfig {
        lock_timeout: Duration::from_millis(200),
        enable_fsync: false,
    };
    let mut cfg = ConfigStore::with_robustness(&path, robustness);
    cfg.set(PersistedKey::FilepathPython, "before").unwrap();

    // Another writer holds the lock for the whole attempt
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(io::lock_path(&path))
        .unwrap();
    lock_file.lock_exclusive().unwrap();

    let result = cfg.set(PersistedKey::FilepathPython, "after");

    assert!(matches!(
        result,
        Err(coord_config::Error::Fs(coord_fs::Error::LockFailed { .. }))
    ));
    assert_eq!(cfg.get(PersistedKey::FilepathPython), "before");
    assert_eq!(fs::read_to_string(&path).unwrap(), "FilepathPython=before\n");

    drop(lock_file);
}
