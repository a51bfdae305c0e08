use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use corridor::geom2::{GeomCfg, Segment};
use corridor::reach::{interval_range, reachability, Reachability};
use nalgebra::Vector2;
use std::io::Read;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "corridor")]
#[command(about = "Edge reachability from a moving interval and a directional cone")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate one scenario: twelve floats in the order
    /// I1x I1y I2x I2y ax ay bx by e1x e1y e2x e2y
    Eval {
        /// Read the values from this file instead of stdin
        #[arg(long)]
        input: Option<String>,
        /// Emit a single JSON object instead of diagnostic text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Eval { input, json } => eval(input, json),
    }
}

/// One parsed evaluator input.
struct Scenario {
    interval: Segment,
    a: Vector2<f64>,
    b: Vector2<f64>,
    edge: Segment,
}

fn parse_scenario(text: &str) -> Result<Scenario> {
    let mut vals = Vec::with_capacity(12);
    for tok in text.split_whitespace() {
        let v: f64 = tok
            .parse()
            .with_context(|| format!("not a number: {tok:?}"))?;
        vals.push(v);
    }
    if vals.len() != 12 {
        bail!("expected 12 values, got {}", vals.len());
    }
    Ok(Scenario {
        interval: Segment::from_coords(vals[0], vals[1], vals[2], vals[3]),
        a: Vector2::new(vals[4], vals[5]),
        b: Vector2::new(vals[6], vals[7]),
        edge: Segment::from_coords(vals[8], vals[9], vals[10], vals[11]),
    })
}

fn read_input(input: Option<String>) -> Result<String> {
    match input {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn seg_json(s: &Segment) -> serde_json::Value {
    serde_json::json!({ "p1": [s.p1.x, s.p1.y], "p2": [s.p2.x, s.p2.y] })
}

fn eval(input: Option<String>, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let sc = parse_scenario(&text)?;
    let cfg = GeomCfg::default();

    // Canonicalize up front so the diagnostic range matches what the
    // evaluator decides on.
    let interval = sc.interval.canonical();
    let edge = sc.edge.canonical();
    tracing::debug!(?interval, ?edge, "canonical inputs");

    let ir = interval_range(interval, sc.a, sc.b, edge, cfg)
        .context("projecting the cone onto the edge line")?;
    let res = reachability(interval, sc.a, sc.b, edge, cfg).context("evaluating reachability")?;

    if json {
        let result = match &res {
            Reachability::Unreachable => serde_json::json!("unreachable"),
            Reachability::Reachable(r) => serde_json::json!({ "reachable": seg_json(r) }),
        };
        let doc = serde_json::json!({
            "interval_range": seg_json(&ir),
            "edge": seg_json(&edge),
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!(
        "interval range is ({}, {}) to ({}, {})",
        ir.p1.x, ir.p1.y, ir.p2.x, ir.p2.y
    );
    println!(
        "edge is ({}, {}) to ({}, {})",
        edge.p1.x, edge.p1.y, edge.p2.x, edge.p2.y
    );
    match res {
        Reachability::Unreachable => println!("the edge is unreachable"),
        Reachability::Reachable(r) => println!(
            "the edge from ({}, {}) to ({}, {}) is reachable from ({}, {}) to ({}, {})",
            edge.p1.x, edge.p1.y, edge.p2.x, edge.p2.y, r.p1.x, r.p1.y, r.p2.x, r.p2.y
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_twelve_floats_in_fixed_order() {
        let sc = parse_scenario("0 0 0 10  1 1 1 -1  10 -10 10 10").unwrap();
        assert_eq!(sc.interval, Segment::from_coords(0.0, 0.0, 0.0, 10.0));
        assert_eq!(sc.a, Vector2::new(1.0, 1.0));
        assert_eq!(sc.b, Vector2::new(1.0, -1.0));
        assert_eq!(sc.edge, Segment::from_coords(10.0, -10.0, 10.0, 10.0));
    }

    #[test]
    fn rejects_wrong_counts_and_junk() {
        assert!(parse_scenario("1 2 3").is_err());
        assert!(parse_scenario("0 0 0 10 1 1 1 -1 10 -10 10 pear").is_err());
    }

    #[test]
    fn reads_values_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.txt");
        std::fs::write(&path, "0 0 0 10 1 1 1 -1 10 -10 10 10").unwrap();
        let text = read_input(Some(path.to_string_lossy().into_owned())).unwrap();
        assert!(parse_scenario(&text).is_ok());
    }
}
