use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

// ---------------------------------------------------------------------------
// Background file reading with stale-completion guard
// ---------------------------------------------------------------------------

/// Result of one background read.
#[derive(Debug)]
pub struct ReadCompletion {
    pub generation: u64,
    pub path: PathBuf,
    pub result: io::Result<String>,
}

/// Reads files as text on worker threads and hands completions back to the
/// UI thread.
///
/// Every [`FileReader::start`] bumps a generation counter; completions from
/// earlier generations are dropped in [`FileReader::poll`], so the most
/// recently selected file always wins no matter which read finishes first.
pub struct FileReader {
    tx: mpsc::Sender<ReadCompletion>,
    rx: mpsc::Receiver<ReadCompletion>,
    generation: u64,
    in_flight: bool,
}

impl Default for FileReader {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            generation: 0,
            in_flight: false,
        }
    }
}

impl FileReader {
    /// Begin reading `path` in the background. Returns the new generation.
    pub fn start(&mut self, path: &Path) -> u64 {
        self.generation += 1;
        self.in_flight = true;

        let generation = self.generation;
        let path = path.to_path_buf();
        let tx = self.tx.clone();
        log::info!("Reading {} (request #{generation})", path.display());

        thread::spawn(move || {
            let result = std::fs::read_to_string(&path);
            // Fails only once the app has shut down.
            let _ = tx.send(ReadCompletion {
                generation,
                path,
                result,
            });
        });

        generation
    }

    /// Whether the latest requested read has not completed yet.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Drain finished reads, returning the completion of the current
    /// generation if it has arrived.
    pub fn poll(&mut self) -> Option<ReadCompletion> {
        let mut latest = None;
        while let Ok(done) = self.rx.try_recv() {
            if let Some(current) = self.accept(done) {
                latest = Some(current);
            }
        }
        latest
    }

    fn accept(&mut self, done: ReadCompletion) -> Option<ReadCompletion> {
        if done.generation != self.generation {
            log::warn!(
                "Discarding stale read of {} (request #{}, current #{})",
                done.path.display(),
                done.generation,
                self.generation
            );
            return None;
        }
        self.in_flight = false;
        Some(done)
    }

    /// Block until the current read completes. Test helper.
    #[cfg(test)]
    fn wait(&mut self) -> ReadCompletion {
        use std::time::Duration;
        loop {
            let done = self
                .rx
                .recv_timeout(Duration::from_secs(5))
                .expect("read did not complete");
            if let Some(current) = self.accept(done) {
                return current;
            }
        }
    }
}
