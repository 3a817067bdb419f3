//! Input parsing and output rendering for `fitsim`. Everything here
//! sits *outside* the computational boundary: raw text goes in,
//! validated workloads go down to `corefit`, and finished runs come
//! back up to be printed, serialized or plotted.

pub use std::fs::File;
pub use std::io::{BufRead, BufReader};
pub use std::path::{Path, PathBuf};

use anyhow::{Error, Result};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use corefit::sim::RunResult;
use corefit::utils::*;

/// Parses the comma-separated partition field, e.g.
/// `100,500,200,300,600,400`. Blank entries are skipped, so a
/// trailing comma does no harm.
pub fn parse_sizes(raw: &str) -> Result<Vec<Units>> {
    let mut res = vec![];
    for tok in raw.split(',') {
        let tok = tok.trim();
        if tok.is_empty() {
            continue;
        }
        match tok.parse::<Units>() {
            Ok(v) => res.push(v),
            Err(_) => {
                return Err(Error::msg(format!("Invalid partition size: {tok:?}")));
            }
        }
    }

    Ok(res)
}

/// Parses inline process requests, as comma-separated `name:size`
/// pairs, e.g. `p1:312,p2:196`.
pub fn parse_procs(raw: &str) -> Result<Vec<Request>> {
    let mut res = vec![];
    for tok in raw.split(',') {
        let tok = tok.trim();
        if tok.is_empty() {
            continue;
        }
        match tok.split_once(':') {
            Some((name, size)) => {
                let size = size.trim().parse::<Units>().map_err(|_| {
                    Error::msg(format!("Invalid process size: {tok:?}"))
                })?;
                res.push(Request::new(name.trim(), size));
            }
            None => {
                return Err(Error::msg(format!("Expected name:size, got {tok:?}")));
            }
        }
    }

    Ok(res)
}

/// Reads process requests from a `name,size` CSV file.
pub fn read_procs_csv(path: &Path) -> Result<Vec<Request>> {
    let fd = File::open(path)?;
    let reader = BufReader::new(fd);
    let mut res = vec![];
    for line in reader.lines()
        // First line is the header!
        .skip(1) {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once(',') {
            Some((name, size)) => {
                let size = size.trim().parse::<Units>().map_err(|_| {
                    Error::msg(format!("Error while parsing CSV: {line:?}"))
                })?;
                res.push(Request::new(name.trim(), size));
            }
            None => {
                return Err(Error::msg(format!("Error while parsing CSV: {line:?}")));
            }
        }
    }

    Ok(res)
}

/// Prints one policy's report the way the original interactive tool
/// displayed it: the partition table, the waiting line, then the
/// derived metrics.
pub fn print_report(res: &RunResult) {
    let snap = res.metrics();
    println!("---{}---", res.policy.label());
    println!("#\tSize\tProcess");
    for (idx, part) in res.partitions.iter().enumerate() {
        let occupant = match part.occupant() {
            Some(name) => name.as_ref(),
            None => "-",
        };
        println!("{}\t{}\t{}", idx + 1, part.size(), occupant);
    }
    let waiting = if res.waiting.is_empty() {
        String::from("-")
    } else {
        res.waiting.iter().join(", ")
    };
    println!("Waiting:\t{}", waiting);
    println!(
        "Utilization:\t{:.2}%\nFree:\t\t{} units in {} holes (largest: {})\nHoles examined:\t{}\n",
        snap.utilization, snap.free, snap.num_holes, snap.largest_hole, res.holes_examined
    );
}

/// One partition row of the machine-readable report.
#[derive(Serialize, Debug)]
pub struct PartitionRow {
    pub size:       Units,
    pub process:    Option<String>,
}

/// The machine-readable mirror of a [RunResult], flattened together
/// with its metrics so downstream tooling needs a single document.
#[derive(Serialize, Debug)]
pub struct RunReport {
    pub policy:         String,
    pub partitions:     Vec<PartitionRow>,
    pub waiting:        Vec<String>,
    pub placements:     IndexMap<String, usize>,
    pub utilization:    f64,
    pub free:           Units,
    pub num_holes:      usize,
    pub largest_hole:   Units,
    pub holes_examined: usize,
}

impl RunReport {
    pub fn new(res: &RunResult) -> Self {
        let snap = res.metrics();
        Self {
            policy:         res.policy.label().to_string(),
            partitions:     res
                .partitions
                .iter()
                .map(|p| PartitionRow {
                    size:       p.size(),
                    process:    p.occupant().map(|n| n.to_string()),
                })
                .collect(),
            waiting:        res.waiting.iter().map(|n| n.to_string()).collect(),
            placements:     res
                .placements
                .iter()
                .map(|(n, i)| (n.to_string(), *i))
                .collect(),
            utilization:    snap.utilization,
            free:           snap.free,
            num_holes:      snap.num_holes,
            largest_hole:   snap.largest_hole,
            holes_examined: res.holes_examined,
        }
    }
}

pub fn emit_json(runs: &[RunResult]) -> Result<String> {
    let reports: Vec<RunReport> = runs.iter().map(RunReport::new).collect();

    Ok(serde_json::to_string_pretty(&reports)?)
}

pub mod plot {
    use corefit::sim::RunResult;
    use plotters::prelude::*;
    use std::path::Path;

    // Vertical span of one policy band, with a gap before the next.
    const ROW_SPAN: usize = 10;
    const BAR_HEIGHT: usize = 8;

    /// Renders the final layouts into one image, a horizontal band
    /// per run over the shared address space: occupied partitions
    /// filled, holes hollow.
    pub fn plot_layouts(runs: &[RunResult], f: &Path) {
        assert!(!runs.is_empty(), "Nothing to plot.");
        let total = runs[0].total_memory();
        let backend =
            BitMapBackend::new(f, (1280, 160 * runs.len() as u32)).into_drawing_area();
        backend.fill(&WHITE).unwrap();
        let backend = backend.margin(10u32, 10u32, 10u32, 10u32);

        let mut chart = ChartBuilder::on(&backend)
            .x_label_area_size(20u32)
            .y_label_area_size(60u32)
            .build_cartesian_2d(0..total + 1, 0..runs.len() * ROW_SPAN)
            .unwrap();

        chart
            .configure_mesh()
            .x_labels(10)
            .disable_y_mesh()
            .draw()
            .unwrap();

        for (row, res) in runs.iter().enumerate() {
            chart.draw_series(create_series(res, row)).unwrap();
        }
    }

    fn create_series(res: &RunResult, row: usize) -> Vec<Rectangle<(usize, usize)>> {
        let mut bars: Vec<Rectangle<(usize, usize)>> = Vec::new();

        let lower_y = row * ROW_SPAN;
        let upper_y = lower_y + BAR_HEIGHT;
        let mut offset = 0;
        for part in &res.partitions {
            let left_x = offset;
            let right_x = offset + part.size();
            offset = right_x;
            if !part.is_free() {
                bars.push(Rectangle::new(
                    [(left_x, upper_y), (right_x, lower_y)],
                    ShapeStyle {
                        color: BLACK.mix(0.35),
                        filled: true,
                        stroke_width: 0,
                    },
                ));
            }
            bars.push(Rectangle::new(
                [(left_x, upper_y), (right_x, lower_y)],
                ShapeStyle {
                    color: BLACK.into(),
                    filled: false,
                    stroke_width: 1,
                },
            ));
        }

        bars
    }
}
