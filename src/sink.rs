use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

/// Receives each finished, decorated line
pub type LogFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Writes each line to stderr
pub fn console() -> LogFn {
    Arc::new(|line| {
        let mut stderr = io::stderr().lock();
        // Logging must never fail the caller
        let _ = writeln!(stderr, "{}", line);
    })
}

/// Writes each line to `writer`, flushing after every line
pub fn stream<W: Write + Send + 'static>(writer: W) -> LogFn {
    let writer = Mutex::new(writer);
    Arc::new(move |line| {
        let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    })
}

pub fn from_fn<F: Fn(&str) + Send + Sync + 'static>(f: F) -> LogFn {
    Arc::new(f)
}

/// An in-memory [Write] whose clones all append to the same buffer
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_writes_lines_test() {
        let buffer = SharedBuffer::default();
        let log = stream(buffer.clone());
        log("first");
        log("second");
        assert_eq!(buffer.contents(), "first\nsecond\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn stream_swallows_errors_test() {
        let log = stream(BrokenPipe);
        log("ignored");
    }

    #[test]
    fn from_fn_test() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        let log = from_fn(move |line| captured.lock().unwrap().push(line.to_string()));
        log("hello");
        assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
    }
}
