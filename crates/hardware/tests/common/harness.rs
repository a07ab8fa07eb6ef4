use rvpipe_core::Simulator;
use rvpipe_core::config::Config;
use rvpipe_core::core::Cpu;
use rvpipe_core::core::cpu::CycleSnapshot;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        Self {
            sim: Simulator::new(config),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load a program at address 0 and reset the pipeline.
    pub fn load_program(mut self, instructions: &[u32]) -> Self {
        self.sim.load_program(instructions).unwrap();
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Preload data memory words.
    pub fn poke_words(&mut self, addr: u32, words: &[u32]) {
        self.sim.cpu.dmem.write_words(addr, words);
    }

    /// Read `count` data memory words.
    pub fn peek_words(&self, addr: u32, count: usize) -> Vec<u32> {
        self.sim.cpu.dmem.dump(addr, count)
    }

    /// Run the CPU for a specific number of cycles.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.sim.tick();
        }
    }

    /// Run until the pipeline drains; panics if it does not within `max` cycles.
    pub fn run_to_idle(&mut self, max: u64) -> u64 {
        let ran = self.sim.run_until_idle(max);
        assert!(self.sim.cpu.is_idle(), "pipeline still busy after {max} cycles");
        ran
    }

    /// Tick once and return what the core observed.
    pub fn step(&mut self) -> CycleSnapshot {
        self.sim.tick();
        *self.sim.cpu.last_cycle()
    }

    /// Tick `cycles` times, collecting every snapshot.
    pub fn trace(&mut self, cycles: u64) -> Vec<CycleSnapshot> {
        (0..cycles).map(|_| self.step()).collect()
    }
}
