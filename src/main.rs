//! VM Translator - Main Entry Point
//!
//! Usage: vm-translator <backing_store> <input_file>
//!
//! Arguments:
//!   backing_store - Binary file holding 256-byte pages
//!   input_file    - One decimal logical address per line
//!
//! Per-address translations and the run summary go to stdout. Diagnostics go
//! to stderr; set RUST_LOG=debug to see TLB hits and page faults.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use vm_translator::io::{read_addresses, write_report};
use vm_translator::{BackingStore, VmManager};

/// Command-line configuration
#[derive(Debug, Parser)]
#[command(
    name = "vm-translator",
    version,
    about = "Translates logical addresses through a TLB and a demand-paged page table"
)]
struct Config {
    /// Backing store file (pages of 256 bytes)
    backing_store: PathBuf,

    /// File containing logical addresses, one per line
    input_file: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();

    // Run the translator and handle any errors
    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Main logic separated from main() for cleaner error handling
fn run(config: &Config) -> anyhow::Result<()> {
    // Step 1: Open the backing store
    let mut store = BackingStore::open(&config.backing_store)?;
    let pages = store.pages().context("sizing backing store")?;
    log::info!(
        "backing store {}: {} pages",
        config.backing_store.display(),
        pages
    );

    // Step 2: Read logical addresses
    let inputs = read_addresses(&config.input_file)?;
    log::info!("logical addresses to translate: {}", inputs.len());

    // Step 3: Translate each address in input order
    let mut vm = VmManager::new(store);
    let translations = vm.run(inputs).context("translation aborted")?;

    if vm.stats().errors > 0 {
        log::warn!("{} input(s) skipped", vm.stats().errors);
    }

    // Step 4: Report
    let stdout = io::stdout();
    write_report(BufWriter::new(stdout.lock()), &translations, vm.stats())?;

    Ok(())
}
