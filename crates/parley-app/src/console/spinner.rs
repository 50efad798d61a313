use std::io::{self, Write};
use std::time::Duration;

use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(90);

/// Animated "waiting" line on stderr. Dropping it stops the animation and
/// clears the line.
pub struct Spinner {
    task: JoinHandle<()>,
}

impl Spinner {
    /// Must be called from inside the tokio runtime.
    pub fn start(label: &'static str) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(FRAME_INTERVAL);
            for frame in FRAMES.iter().cycle() {
                ticker.tick().await;
                let mut err = io::stderr().lock();
                let _ = write!(err, "\r{frame} {label}");
                let _ = err.flush();
            }
        });
        Self { task }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.task.abort();
        let mut err = io::stderr().lock();
        let _ = write!(err, "\r\x1b[2K");
        let _ = err.flush();
    }
}
