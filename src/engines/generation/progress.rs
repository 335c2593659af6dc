use super::evolution_engine::ProgressCallback;
use crate::types::BestPerformer;
use std::sync::mpsc::Sender;

pub struct ConsoleProgressCallback {
    total_generations: usize,
}

impl ConsoleProgressCallback {
    pub fn new(total_generations: usize) -> Self {
        Self { total_generations }
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {}/{} starting", generation + 1, self.total_generations);
    }

    fn on_population_evaluated(&mut self, generation: usize, admissible: usize, total: usize) {
        if admissible < total {
            log::debug!(
                "Generation {}: {} of {} genomes inadmissible",
                generation + 1,
                total - admissible,
                total
            );
        }
    }

    fn on_generation_complete(&mut self, generation: usize, best: &BestPerformer) {
        println!(
            "Generation {}/{} complete. Best fitness: {:.4}, genome: {}",
            generation + 1,
            self.total_generations,
            best.fitness,
            best.genome
        );
    }
}

/// For front ends polling a run on another thread
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    PopulationEvaluated { generation: usize, admissible: usize, total: usize },
    GenerationComplete { generation: usize, best: BestPerformer },
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_population_evaluated(&mut self, generation: usize, admissible: usize, total: usize) {
        let _ = self.sender.send(ProgressMessage::PopulationEvaluated {
            generation,
            admissible,
            total,
        });
    }

    fn on_generation_complete(&mut self, generation: usize, best: &BestPerformer) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best: *best,
        });
    }
}
