use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use geometria::plane::rand::{draw_shape, ReplayToken, SampleCfg};
use geometria::plane::{Line, Shape, ShapeKind};
use restaurant::sample_menu;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod checkout;
mod input;
mod provenance;
mod report;

use report::{LineReport, ShapeReport};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Inspect plane shapes and run the restaurant order demo")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Validate one shape and print its metrics as JSON
    Shape {
        /// rectangle, square, triangle, equilateral, isosceles, scalene, right-triangle
        #[arg(long)]
        kind: ShapeKind,
        #[arg(long)]
        regular: bool,
        /// Vertices as `x,y` pairs separated by spaces or `;`
        #[arg(long)]
        vertices: String,
    },
    /// Print length, slope, and axis crossings of a segment
    Line {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Evaluate a CSV of shapes (kind, regular, vertices) and write JSON results
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Draw reproducible random shapes of one kind
    Sample {
        #[arg(long)]
        kind: ShapeKind,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: u64,
    },
    /// Build an order from the sample menu and optionally pay for it
    Order {
        /// `name=quantity`, repeatable
        #[arg(long = "add", required = true)]
        items: Vec<String>,
        /// `card:<number>:<cvv>` or `cash:<amount>`
        #[arg(long)]
        pay: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Shape {
            kind,
            regular,
            vertices,
        } => shape(kind, regular, &vertices),
        Action::Line { from, to } => line(&from, &to),
        Action::Run { input, out } => run(input, out),
        Action::Sample { kind, seed, count } => sample(kind, seed, count),
        Action::Order { items, pay } => order(&items, pay.as_deref()),
        Action::Report => report(),
    }
}

fn shape(kind: ShapeKind, regular: bool, vertices: &str) -> Result<()> {
    let vertices = input::parse_vertices(vertices)?;
    let shape = Shape::new(kind, regular, vertices).with_context(|| format!("building {kind}"))?;
    tracing::info!(%kind, "shape");
    println!("{}", serde_json::to_string_pretty(&ShapeReport::from(&shape))?);
    Ok(())
}

fn line(from: &str, to: &str) -> Result<()> {
    let l = Line::new(input::parse_point(from)?, input::parse_point(to)?);
    println!("{}", serde_json::to_string_pretty(&LineReport::from(&l))?);
    Ok(())
}

fn run(input: PathBuf, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "run");
    let reports = batch::run(&input, &out)?;
    let summary = provenance::RunSummary::from_reports(&input, &reports);
    tracing::info!(rows = summary.rows, rejected = summary.rejected, "run_done");
    provenance::write_sidecar(&out, summary)?;
    Ok(())
}

fn sample(kind: ShapeKind, seed: u64, count: u64) -> Result<()> {
    tracing::info!(%kind, seed, count, "sample");
    let shapes = (0..count)
        .map(|index| {
            draw_shape(kind, SampleCfg::default(), ReplayToken::new(seed, index))
                .map(|s| ShapeReport::from(&s))
                .ok_or_else(|| anyhow!("no valid {kind} for seed {seed}, index {index}"))
        })
        .collect::<Result<Vec<_>>>()?;
    println!("{}", serde_json::to_string_pretty(&shapes)?);
    Ok(())
}

fn order(items: &[String], pay: Option<&str>) -> Result<()> {
    let order = checkout::build_order(items, &sample_menu())?;
    let total = order.total_price();
    println!("Order:\n{order}");
    println!("Total Price: ${total:.2}");
    if let Some(pay) = pay {
        let method = checkout::payment_method(pay)?;
        println!("{}", method.pay(total));
    }
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::Sidecar::new(serde_json::json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
