pub mod genome;
pub mod operators;
pub mod history;
pub mod evolution_engine;
pub mod progress;

pub use genome::{Coefficient, Genome};
pub use history::RunHistory;
pub use evolution_engine::{CancellationFlag, EvolutionEngine, NoopProgress, ProgressCallback};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
