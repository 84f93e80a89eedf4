#![allow(clippy::unwrap_used, clippy::expect_used, unsafe_code)]

//! `Load` through the C ABI when the host already installed a subscriber.
//!
//! Kept in its own test binary: it owns the process-wide subscriber.

use std::ffi::CString;
use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use calculator_ffi::load;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_load_writes_to_host_subscriber() {
    let logs = CapturedLogs::default();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .init();

    let first = CString::new("0000000000001A2B").unwrap();
    let second = CString::new("not a pointer").unwrap();
    unsafe {
        load(first.as_ptr());
        load(second.as_ptr());
    }

    let captured = logs.contents();
    assert!(
        captured.contains("The parameter string was 0000000000001A2B."),
        "captured: {captured}"
    );
    assert!(captured.contains("decoded host entry parameter"));
    // The library's own sink declined to replace ours and said so through it.
    assert!(captured.contains("host subscriber already installed, keeping it"));
    assert!(captured.contains("The parameter string was not a pointer."));
}
