use anyhow::Result;
use clap::{Parser, ValueEnum};

use corefit::algo::Policy;
use corefit::{sim, workload};
use panel::*;

/// A placement-policy playground for contiguous-memory partitioning
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Comma-separated partition sizes
    #[arg(short, long, default_value = "100,500,200,300,600,400")]
    partitions: String,

    /// Inline process requests, as comma-separated name:size pairs
    #[arg(long, default_value = "p1:312,p2:196,p3:80,p4:486")]
    #[arg(conflicts_with_all = ["input", "synth"])]
    procs:      String,

    /// Path to a name,size CSV of process requests (header skipped)
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    #[arg(conflicts_with = "synth")]
    input:      Option<PathBuf>,

    /// Allocation policy
    #[arg(value_enum, default_value = "all")]
    fit:        Fit,

    /// Synthesize this many random requests instead of reading any
    #[arg(long)]
    synth:      Option<usize>,

    /// Seed for request synthesis
    #[arg(long, default_value_t = 0)]
    seed:       u64,

    /// Largest size a synthesized request may have
    #[arg(long, default_value_t = 600)]
    max_size:   usize,

    /// Emit the report as pretty-printed JSON instead of tables
    #[arg(long)]
    json:       bool,

    /// Render the final layouts to this PNG
    #[arg(long, value_parser = clap::value_parser!(PathBuf))]
    plot:       Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Fit {
    /// First fit
    First,
    /// Best fit
    Best,
    /// Worst fit
    Worst,
    /// All three policies, each on a fresh layout
    All,
}

fn main() -> Result<()> {
    let cli = Args::parse();

    let sizes = parse_sizes(&cli.partitions)?;
    let requests = if let Some(n) = cli.synth {
        workload::synth(n, cli.max_size, cli.seed)
    } else if let Some(ref path) = cli.input {
        read_procs_csv(path)?
    } else {
        parse_procs(&cli.procs)?
    };

    // Everything below the gatekeeper assumes validated input.
    let load = workload::init(sizes, requests)?;

    let runs = match cli.fit {
        Fit::First  => vec![sim::run(Policy::FirstFit, &load.sizes, &load.requests)],
        Fit::Best   => vec![sim::run(Policy::BestFit, &load.sizes, &load.requests)],
        Fit::Worst  => vec![sim::run(Policy::WorstFit, &load.sizes, &load.requests)],
        Fit::All    => sim::run_all(&load.sizes, &load.requests),
    };

    if cli.json {
        println!("{}", emit_json(&runs)?);
    } else {
        for res in &runs {
            print_report(res);
        }
    }

    if let Some(ref target) = cli.plot {
        plot::plot_layouts(&runs, target);
    }

    Ok(())
}
