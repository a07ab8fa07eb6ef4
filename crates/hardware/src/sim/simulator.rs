//! Simulator: owns the CPU and everything watching it.
//!
//! The core knows nothing about statistics or tracing sinks. The simulator
//! ticks it and hands the resulting snapshot to the built-in statistics and
//! any attached observers, in attachment order.

use std::fmt;

use super::observer::Observer;
use crate::common::error::Result;
use crate::config::Config;
use crate::core::Cpu;
use crate::stats::SimStats;

/// Top-level simulator: CPU state plus observers.
pub struct Simulator {
    /// The modelled core.
    pub cpu: Cpu,
    /// Statistics gathered from every cycle.
    pub stats: SimStats,
    observers: Vec<Box<dyn Observer>>,
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .field("stats", &self.stats)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Simulator {
    /// Creates a simulator around a freshly reset core.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            stats: SimStats::default(),
            observers: Vec::new(),
        }
    }

    /// Attaches an observer that will see every subsequent cycle.
    pub fn attach(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Loads a program into instruction memory and resets the pipeline.
    ///
    /// # Errors
    ///
    /// Returns `SimError::ProgramTooLarge` if the program exceeds instruction
    /// memory.
    pub fn load_program(&mut self, program: &[u32]) -> Result<()> {
        self.cpu.imem.load(program)?;
        self.cpu.reset();
        Ok(())
    }

    /// Advances the simulator by one clock cycle.
    pub fn tick(&mut self) {
        self.cpu.tick();
        let snapshot = self.cpu.last_cycle();
        self.stats.on_cycle(snapshot);
        for observer in &mut self.observers {
            observer.on_cycle(snapshot);
        }
    }

    /// Runs exactly `cycles` clock cycles.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.tick();
        }
        self.finish(cycles);
    }

    /// Runs until the core is idle or `max_cycles` have elapsed.
    ///
    /// Returns the number of cycles executed.
    pub fn run_until_idle(&mut self, max_cycles: u64) -> u64 {
        let mut executed = 0;
        while executed < max_cycles && !self.cpu.is_idle() {
            self.tick();
            executed += 1;
        }
        if !self.cpu.is_idle() {
            tracing::warn!(max_cycles, pc = self.cpu.pc(), "cycle limit reached before idle");
        }
        self.finish(executed);
        executed
    }

    fn finish(&mut self, cycles: u64) {
        tracing::info!(
            cycles,
            retired = self.stats.instructions_retired,
            "simulation finished"
        );
        self.stats.on_finish(cycles);
        for observer in &mut self.observers {
            observer.on_finish(cycles);
        }
    }
}
