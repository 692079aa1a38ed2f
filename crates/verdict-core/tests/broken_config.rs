//! Runs in its own test binary: the default reporter reads `VERDICT_CONFIG`
//! once per process.

use std::fs;
use std::io;
use std::panic;
use std::sync::{Arc, Mutex};

use tempfile::tempdir;
use tracing::Level;
use verdict_core::{enforce, AssertionFailure, CONFIG_ENV};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn malformed_config_falls_back_to_default_text_render() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("verdict.toml");
    fs::write(&path, "format = [not toml\n").unwrap();
    std::env::set_var(CONFIG_ENV, &path);

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let payload = tracing::subscriber::with_default(subscriber, || {
        panic::catch_unwind(|| {
            enforce(Err(AssertionFailure::new("verdict.true", "false is Falsy")));
        })
        .unwrap_err()
    });

    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.starts_with("false is Falsy\n  location: "));
    assert!(message.contains("broken_config.rs"));
    assert!(!message.starts_with('{'));

    let logs = captured.contents();
    assert!(logs.contains("falling back to the default report policy"));
    assert!(logs.contains("verdict.config.parse"));
    assert_eq!(logs.matches("assertion failed").count(), 1);
    assert!(logs.contains("code=\"verdict.true\"") || logs.contains("code=verdict.true"));

    std::env::remove_var(CONFIG_ENV);
}
