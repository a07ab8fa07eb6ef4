//! RV32I pipeline simulator CLI.
//!
//! This binary provides a single entry point for the pipeline model. It performs:
//! 1. **Run:** Load a hex program, clock the core for a fixed number of cycles
//!    or until it drains, then optionally print registers, memory and statistics.
//! 2. **Snapshots:** Stream every cycle's observable state as JSON lines.
//! 3. **Disassembly:** List a hex program with addresses and mnemonics.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rvpipe_core::Config;
use rvpipe_core::Simulator;
use rvpipe_core::core::cpu::CycleSnapshot;
use rvpipe_core::isa::disasm::disassemble;
use rvpipe_core::sim::Observer;
use rvpipe_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "rvpipe",
    author,
    version,
    about = "Cycle-accurate 5-stage RV32I pipeline simulator",
    long_about = "Run a hex program image on a classic IF/ID/EX/MEM/WB pipeline.\n\nExamples:\n  rvpipe run fib.hex --stats --dump-mem 0x1000 11\n  rvpipe run fib.hex --cycles 40 --trace\n  rvpipe disasm fib.hex"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image.
    Run {
        /// Hex program (one word per line, or objcopy verilog bytes).
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Run exactly this many cycles instead of waiting for the pipeline to drain.
        #[arg(long)]
        cycles: Option<u64>,

        /// Log every stage of every cycle.
        #[arg(long)]
        trace: bool,

        /// Print performance statistics when done.
        #[arg(long)]
        stats: bool,

        /// Print the register file when done.
        #[arg(long)]
        dump_regs: bool,

        /// Print WORDS data memory words starting at ADDR when done.
        #[arg(long, num_args = 2, value_names = ["ADDR", "WORDS"])]
        dump_mem: Option<Vec<String>>,

        /// Write one JSON cycle snapshot per line to this file.
        #[arg(long)]
        snapshots: Option<PathBuf>,
    },

    /// Disassemble a program image.
    Disasm {
        /// Hex program to list.
        program: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_tracing(trace);

    let result = match cli.command {
        Commands::Run {
            program,
            config,
            cycles,
            trace,
            stats,
            dump_regs,
            dump_mem,
            snapshots,
        } => cmd_run(&RunArgs {
            program,
            config,
            cycles,
            trace,
            stats,
            dump_regs,
            dump_mem,
            snapshots,
        }),
        Commands::Disasm { program } => cmd_disasm(&program),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the log subscriber; `--trace` overrides `RUST_LOG`.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

struct RunArgs {
    program: PathBuf,
    config: Option<PathBuf>,
    cycles: Option<u64>,
    trace: bool,
    stats: bool,
    dump_regs: bool,
    dump_mem: Option<Vec<String>>,
    snapshots: Option<PathBuf>,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Loads the program, runs it, and prints whatever was asked for.
fn cmd_run(args: &RunArgs) -> CliResult<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.trace {
        config.general.trace_instructions = true;
    }

    let dump_mem = match args.dump_mem.as_deref() {
        Some([addr, words]) => Some((parse_number(addr)?, parse_number(words)? as usize)),
        _ => None,
    };

    let program = loader::load_hex_file(&args.program)?;
    let mut sim = Simulator::new(&config);
    sim.load_program(&program)?;

    if let Some(path) = &args.snapshots {
        let file = File::create(path).map_err(|e| format!("{}: {e}", path.display()))?;
        sim.attach(Box::new(SnapshotWriter::new(BufWriter::new(file))));
    }

    match args.cycles {
        Some(n) => sim.run(n),
        None => {
            let ran = sim.run_until_idle(config.general.max_cycles);
            println!("[*] Pipeline drained after {ran} cycles");
        }
    }

    if args.dump_regs {
        sim.cpu.regs.dump();
    }
    if let Some((addr, count)) = dump_mem {
        for line in format_mem_dump(addr, &sim.cpu.dmem.dump(addr, count)) {
            println!("{line}");
        }
    }
    if args.stats {
        sim.stats.print();
    }
    Ok(())
}

/// Renders `address: word (signed)` lines; addresses wrap at 4 GiB like the data port.
fn format_mem_dump(addr: u32, words: &[u32]) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let at = addr.wrapping_add((i as u32).wrapping_mul(4));
            format!("{at:#010x}: {word:#010x} ({})", *word as i32)
        })
        .collect()
}

/// Prints `address: word  mnemonic` for every word of a program.
fn cmd_disasm(path: &PathBuf) -> CliResult<()> {
    let program = loader::load_hex_file(path)?;
    for (i, word) in program.iter().enumerate() {
        println!("{:#06x}: {word:08x}  {}", i * 4, disassemble(*word));
    }
    Ok(())
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
fn parse_number(text: &str) -> CliResult<u32> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid number `{text}`: {e}").into())
}

/// Streams cycle snapshots as JSON lines.
///
/// Write failures are logged once and further output is dropped.
struct SnapshotWriter<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> SnapshotWriter<W> {
    const fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    fn write(&mut self, snapshot: &CycleSnapshot) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> Observer for SnapshotWriter<W> {
    fn on_cycle(&mut self, snapshot: &CycleSnapshot) {
        if self.failed {
            return;
        }
        if let Err(e) = self.write(snapshot) {
            tracing::error!(error = %e, "failed to write cycle snapshot");
            self.failed = true;
        }
    }

    fn on_finish(&mut self, _cycles: u64) {
        if let Err(e) = self.out.flush() {
            tracing::error!(error = %e, "failed to flush cycle snapshots");
        }
    }
}
