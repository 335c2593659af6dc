use crate::config::EvolutionConfig;
use crate::engines::generation::{
    CancellationFlag, ChannelProgressCallback, EvolutionEngine, ProgressMessage,
};
use crate::error::QuadgaError;
use crate::types::RunResult;
use std::sync::mpsc::{channel, Receiver};
use std::thread::{self, JoinHandle};

/// Result from a background run
pub type EvolutionResult = Result<RunResult, QuadgaError>;

/// Runs the engine on its own thread so a front end can poll progress
pub struct EvolutionRunner {
    handle: Option<JoinHandle<EvolutionResult>>,
    progress_rx: Receiver<ProgressMessage>,
    cancel_flag: CancellationFlag,
}

impl EvolutionRunner {
    /// Validate the configuration and start the run in a background thread
    pub fn start(config: EvolutionConfig) -> Result<Self, QuadgaError> {
        let engine = EvolutionEngine::new(config)?;
        let cancel_flag = engine.cancellation_flag();
        let (progress_tx, progress_rx) = channel();

        let handle = thread::Builder::new()
            .name("quadga-evolution".to_string())
            .spawn(move || engine.run(ChannelProgressCallback::new(progress_tx)))?;

        Ok(Self {
            handle: Some(handle),
            progress_rx,
            cancel_flag,
        })
    }

    /// Poll for progress updates (non-blocking)
    pub fn poll_progress(&self) -> Option<ProgressMessage> {
        self.progress_rx.try_recv().ok()
    }

    /// Results once the run has finished; `None` while it is still going
    pub fn try_get_results(&mut self) -> Option<EvolutionResult> {
        let handle = self.handle.take()?;
        if handle.is_finished() {
            Some(Self::join(handle))
        } else {
            self.handle = Some(handle);
            None
        }
    }

    /// Block until the run finishes
    pub fn wait(mut self) -> EvolutionResult {
        match self.handle.take() {
            Some(handle) => Self::join(handle),
            None => Err(QuadgaError::Configuration(
                "Results were already collected".to_string(),
            )),
        }
    }

    /// Ask the run to stop before its next generation
    pub fn cancel(&self) {
        self.cancel_flag.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn join(handle: JoinHandle<EvolutionResult>) -> EvolutionResult {
        handle.join().unwrap_or_else(|_| {
            Err(QuadgaError::Configuration(
                "Evolution thread panicked".to_string(),
            ))
        })
    }
}
