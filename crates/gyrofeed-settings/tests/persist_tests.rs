//! Filesystem behaviour of the settings channel.

use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use gyrofeed_core::{SensorRecord, ServicePort, SettingsTarget};
use gyrofeed_errors::{ErrorCategory, FeedError};
use gyrofeed_settings::{PersisterOptions, SettingsFilePersister, read_settings};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn test_fresh_path_holds_exact_document() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gyro_settings.xml");

    SettingsFilePersister::new().persist(
        &path,
        &SensorRecord::new(0.1, 0.2, 0.3),
        ServicePort::new(12345)?,
    )?;

    let expected = "<?xml version='1.0' encoding='utf-8' standalone='yes' ?>\n\
<map>\n    <float name=\"x\" value=\"0.100000\" />\n    <float name=\"y\" value=\"0.200000\" />\n    <float name=\"z\" value=\"0.300000\" />\n    <int name=\"socket_port\" value=\"12345\" />\n</map>";
    assert_eq!(fs::read_to_string(&path)?, expected);
    Ok(())
}

#[test]
fn test_persist_is_idempotent() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gyro_settings.xml");
    let persister = SettingsFilePersister::new();
    let record = SensorRecord::new(-1.25, 3.5, 0.0);

    persister.persist(&path, &record, ServicePort::DEFAULT)?;
    let first = fs::read(&path)?;
    persister.persist(&path, &record, ServicePort::DEFAULT)?;
    let second = fs::read(&path)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_overwrite_leaves_only_latest_record() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gyro_settings.xml");
    let persister = SettingsFilePersister::new();

    persister.persist(&path, &SensorRecord::new(9.0, 9.0, 9.0), ServicePort::new(1111)?)?;
    persister.persist(&path, &SensorRecord::new(1.0, 2.0, 3.0), ServicePort::new(2222)?)?;

    let stored = read_settings(&path)?;
    assert_eq!(stored.record, SensorRecord::new(1.0, 2.0, 3.0));
    assert_eq!(stored.port.get(), 2222);

    let text = fs::read_to_string(&path)?;
    assert!(!text.contains("9.000000"));
    assert!(!text.contains("1111"));
    assert_eq!(text.matches("<float").count(), 3);
    assert_eq!(text.matches("<int").count(), 1);
    Ok(())
}

#[test]
fn test_unrelated_keys_are_dropped() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gyro_settings.xml");
    fs::write(
        &path,
        "<?xml version='1.0' encoding='utf-8' standalone='yes' ?>\n<map>\n    <string name=\"theme\">dark</string>\n</map>",
    )?;

    SettingsFilePersister::new().persist(&path, &SensorRecord::default(), ServicePort::DEFAULT)?;

    assert!(!fs::read_to_string(&path)?.contains("theme"));
    Ok(())
}

#[test]
fn test_no_temporary_file_is_left_behind() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gyro_settings.xml");
    SettingsFilePersister::new().persist(&path, &SensorRecord::default(), ServicePort::DEFAULT)?;

    let names: Vec<String> = fs::read_dir(dir.path())?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    assert_eq!(names, vec!["gyro_settings.xml".to_string()]);
    Ok(())
}

#[test]
fn test_concurrent_persists_keep_file_whole() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = Arc::new(dir.path().join("gyro_settings.xml"));
    let records = [
        SensorRecord::new(-11111.0, -22222.0, -33333.0),
        SensorRecord::new(1.0, 2.0, 3.0),
    ];

    for _ in 0..100 {
        let barrier = Arc::new(Barrier::new(records.len()));
        let writers: Vec<_> = records
            .iter()
            .map(|&record| {
                let barrier = Arc::clone(&barrier);
                let path = Arc::clone(&path);
                thread::spawn(move || {
                    barrier.wait();
                    SettingsFilePersister::new().persist(&path, &record, ServicePort::DEFAULT)
                })
            })
            .collect();

        for writer in writers {
            writer.join().map_err(|_| "writer thread panicked")??;
        }

        let stored = read_settings(&path)?;
        assert!(records.contains(&stored.record), "{:?}", stored.record);
    }

    let entries = fs::read_dir(dir.path())?.count();
    assert_eq!(entries, 1, "temporary files left behind");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_atomic_replace_keeps_existing_mode() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gyro_settings.xml");
    let persister = SettingsFilePersister::new();

    persister.persist(&path, &SensorRecord::default(), ServicePort::DEFAULT)?;
    assert_eq!(fs::metadata(&path)?.permissions().mode() & 0o777, 0o644);

    fs::set_permissions(&path, fs::Permissions::from_mode(0o664))?;
    persister.persist(&path, &SensorRecord::new(1.0, 2.0, 3.0), ServicePort::DEFAULT)?;
    assert_eq!(fs::metadata(&path)?.permissions().mode() & 0o777, 0o664);
    Ok(())
}

#[test]
fn test_missing_parent_is_unavailable() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing").join("gyro_settings.xml");

    for atomic_writes in [true, false] {
        let persister = SettingsFilePersister::with_options(PersisterOptions {
            atomic_writes,
            sync: true,
        });
        let err = match persister.persist(&path, &SensorRecord::default(), ServicePort::DEFAULT) {
            Err(e) => e,
            Ok(()) => return Err("persist into a missing directory should fail".into()),
        };
        assert!(matches!(err, FeedError::PersistenceUnavailable { .. }), "{err}");
        assert_eq!(err.category(), ErrorCategory::Persistence);
    }
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_directory_target_is_unavailable() -> TestResult {
    let dir = tempfile::tempdir()?;
    let result =
        SettingsFilePersister::new().persist(dir.path(), &SensorRecord::default(), ServicePort::DEFAULT);
    assert!(matches!(result, Err(FeedError::PersistenceUnavailable { .. })));
    Ok(())
}

#[test]
fn test_persist_to_target() -> TestResult {
    let dir = tempfile::tempdir()?;
    let target = SettingsTarget::new(dir.path().join("prefs.xml"), ServicePort::new(4242)?)?;

    SettingsFilePersister::new().persist_to(&target, &SensorRecord::new(0.5, -0.5, 1.5))?;

    let stored = read_settings(target.path())?;
    assert_eq!(stored.port, target.port());
    assert_eq!(stored.record, SensorRecord::new(0.5, -0.5, 1.5));
    Ok(())
}

#[test]
fn test_read_missing_file_is_unreadable() -> TestResult {
    let dir = tempfile::tempdir()?;
    let result = read_settings(&dir.path().join("absent.xml"));
    assert!(matches!(result, Err(FeedError::SettingsUnreadable { .. })));
    Ok(())
}

#[test]
fn test_read_garbage_is_malformed() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gyro_settings.xml");
    fs::write(&path, "x=1\ny=2\n")?;
    let result = read_settings(&path);
    assert!(matches!(result, Err(FeedError::MalformedSettings { .. })));
    Ok(())
}
