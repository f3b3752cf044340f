//! Resolution emits tracing events without leaking values

use std::io::Write;
use std::sync::{Arc, Mutex};

use envget::{MapEnv, Resolver};
use envget_test_utils::SecretDir;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_source_is_logged_but_value_is_not() {
    let secrets = SecretDir::new();
    let env = secrets.env_with_file("DB_PASSWORD_FILE", "db_password", "hunter2");

    let output = capture(|| {
        let password = Resolver::with_env(env).resolve("DB_PASSWORD", String::new());
        assert_eq!(password, "hunter2");
    });

    assert!(output.contains("resolved configuration value"));
    assert!(output.contains("DB_PASSWORD_FILE"));
    assert!(!output.contains("hunter2"));
}

#[test]
fn test_unreadable_path_is_traced() {
    let secrets = SecretDir::new();
    let env = MapEnv::new()
        .with("TOKEN_FILE", secrets.missing("token").display().to_string())
        .with("TOKEN", "abc");

    let output = capture(|| {
        Resolver::with_env(env).resolve("TOKEN", String::new());
    });

    assert!(output.contains("path not readable"));
    assert!(output.contains("variable TOKEN"));
}
