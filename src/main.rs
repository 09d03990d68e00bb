// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Knotwork CLI entrypoint.
//!
//! Reads a `.knt` diagram file, traces it, and prints a summary by default,
//! or the full trace / directed map / strand layout with a mode flag.

use std::error::Error;

use serde::Serialize;

use knotwork::layout::{layout_knot, LayoutOptions, StrandLayout};
use knotwork::model::{Knot, Layer, Step, Visit};
use knotwork::query;
use knotwork::render::render_leads_directed;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <file.knt>             summary of leads and crossings\n  {program} <file.knt> --json      full trace as JSON\n  {program} <file.knt> --directed  all leads drawn as direction glyphs\n  {program} <file.knt> --layout    3D polyline vertices/edges as JSON"
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Summary,
    Json,
    Directed,
    Layout,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Options {
    path: Option<String>,
    mode: Mode,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<Options, ()> {
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "--json" | "--directed" | "--layout" => {
                if options.mode != Mode::Summary {
                    return Err(());
                }
                options.mode = match arg.as_str() {
                    "--json" => Mode::Json,
                    "--directed" => Mode::Directed,
                    _ => Mode::Layout,
                };
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.path.is_some() {
                    return Err(());
                }
                options.path = Some(arg);
            }
        }
    }

    if options.path.is_none() {
        return Err(());
    }

    Ok(options)
}

#[derive(Debug, Serialize)]
struct StepReport {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    depth: i32,
    name: String,
}

impl StepReport {
    fn new(step: &Step) -> Self {
        let (dx, dy) = step.dir().offset();
        Self {
            x: step.at().x(),
            y: step.at().y(),
            dx,
            dy,
            depth: step.layer().depth(),
            name: step.name().to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
struct LeadReport {
    name: String,
    steps: Vec<StepReport>,
}

#[derive(Debug, Serialize)]
struct VisitReport {
    lead: usize,
    dx: i32,
    dy: i32,
    depth: i32,
}

impl VisitReport {
    fn new(visit: &Visit) -> Self {
        let (dx, dy) = visit.dir().offset();
        Self { lead: visit.lead(), dx, dy, depth: visit.layer().depth() }
    }
}

#[derive(Debug, Serialize)]
struct CrossingReport {
    x: i32,
    y: i32,
    visits: Vec<VisitReport>,
}

#[derive(Debug, Serialize)]
struct TraceReport {
    leads: Vec<LeadReport>,
    crossings: Vec<CrossingReport>,
    underpasses: Vec<[i32; 2]>,
}

impl TraceReport {
    fn new(knot: &Knot) -> Self {
        let leads = knot
            .leads()
            .iter()
            .map(|lead| LeadReport {
                name: lead.name().to_owned(),
                steps: lead.steps().iter().map(StepReport::new).collect(),
            })
            .collect();

        let crossings = knot
            .crossings()
            .iter()
            .filter(|(_, visits)| visits.len() > 1)
            .map(|(at, visits)| CrossingReport {
                x: at.x(),
                y: at.y(),
                visits: visits.iter().map(VisitReport::new).collect(),
            })
            .collect();

        let underpasses = knot.underpasses().iter().map(|at| [at.x(), at.y()]).collect();

        Self { leads, crossings, underpasses }
    }
}

#[derive(Debug, Serialize)]
struct LayoutReport {
    vertices: Vec<[f64; 3]>,
    edges: Vec<[usize; 2]>,
}

impl LayoutReport {
    fn new(layout: &StrandLayout) -> Self {
        Self {
            vertices: layout.vertices().iter().map(|v| [v.x, v.y, v.z]).collect(),
            edges: layout.edges().iter().map(|&(a, b)| [a, b]).collect(),
        }
    }
}

fn print_summary(knot: &Knot) {
    let crossings = query::crossing_points(knot);
    println!("{} lead(s), {} crossing(s)", knot.leads().len(), crossings.len());
    for (index, lead) in knot.leads().iter().enumerate() {
        let name = if lead.name().is_empty() { "(unnamed)" } else { lead.name() };
        let start = lead.first().map(Step::at);
        match start {
            Some(start) => println!("  lead {index}: {name}, {} steps from {start}", lead.len()),
            None => println!("  lead {index}: {name}, empty"),
        }
    }
    for at in crossings {
        let under = knot
            .crossings()
            .visits(at)
            .iter()
            .find(|visit| visit.layer() == Layer::Under)
            .map(Visit::lead);
        match under {
            Some(lead) => println!("  crossing at {at}: lead {lead} passes under"),
            None => println!("  crossing at {at}"),
        }
    }
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let path = options.path.as_deref().unwrap_or_default();
    let text = std::fs::read_to_string(path)?;

    let knot = Knot::parse(&text).map_err(|err| format!("parse fault at {}:\n{err}", err.at()))?;

    if knot.leads().is_empty() {
        return Err("no strands found in diagram".into());
    }

    match options.mode {
        Mode::Summary => print_summary(&knot),
        Mode::Json => println!("{}", serde_json::to_string_pretty(&TraceReport::new(&knot))?),
        Mode::Directed => println!("{}", render_leads_directed(&knot)),
        Mode::Layout => {
            let layout = layout_knot(&knot, &LayoutOptions::default());
            println!("{}", serde_json::to_string_pretty(&LayoutReport::new(&layout))?);
        }
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "knotwork".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("knotwork: {err}");
        std::process::exit(1);
    }
}
