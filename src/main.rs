use std::io::{self, BufRead, Write};

use anyhow::Result;
use rustc_hash::FxHashMap;
use schedsim::sim::{self, PolicyRun, workload};
use schedsim::{Metrics, Policy, Process, Schedule};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        println!("1) small fixed workload");
        println!("2) large seeded workload");
        println!("3) edge-case workloads");
        println!("q) quit");
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        match line?.trim() {
            "1" => compare(&workload::small_synthetic())?,
            "2" => compare(&workload::large_synthetic(12, 42))?,
            "3" => edge_case_report(),
            "q" | "Q" => break,
            other => println!("unknown choice: {other:?}"),
        }
    }
    Ok(())
}

fn compare(procs: &[Process]) -> Result<()> {
    let runs = sim::run_all(procs)?;
    for policy in Policy::ALL {
        let run = &runs[&policy];
        print_schedule(&run.schedule);
        print_metrics(&run.metrics);
    }
    plot_comparison(&runs);
    Ok(())
}

fn edge_case_report() {
    for (name, procs) in workload::edge_cases() {
        println!("\n--- {name} ---");
        for policy in Policy::ALL {
            match policy.run(&procs).and_then(|s| {
                let metrics = s.metrics()?;
                Ok((s, metrics))
            }) {
                Ok((schedule, metrics)) => {
                    print_schedule(&schedule);
                    print_metrics(&metrics);
                }
                Err(err) => println!("{policy}: {err}"),
            }
        }
    }
}

fn print_schedule(schedule: &Schedule) {
    println!("\n== {} ==", schedule.policy);
    println!(
        "{:>4} {:>8} {:>6} {:>6} {:>7} {:>5} {:>11}",
        "pid", "arrival", "burst", "start", "finish", "wait", "turnaround"
    );
    for proc in &schedule.procs {
        println!(
            "{:>4} {:>8} {:>6} {:>6} {:>7} {:>5} {:>11}",
            proc.pid,
            proc.arrival,
            proc.burst,
            proc.start.unwrap_or_default(),
            proc.finish.unwrap_or_default(),
            proc.waiting().unwrap_or_default(),
            proc.turnaround().unwrap_or_default(),
        );
    }
}

fn print_metrics(metrics: &Metrics) {
    for (name, value) in metrics.entries() {
        println!("{name:>11}: {value:.3}");
    }
}

fn plot_comparison(runs: &FxHashMap<Policy, PolicyRun>) {
    const WIDTH: f64 = 40.0;
    let charts: [(&str, fn(&Metrics) -> f64); 2] = [
        ("AWT", |m| m.avg_waiting),
        ("ATT", |m| m.avg_turnaround),
    ];

    for (label, value_of) in charts {
        let max = Policy::ALL
            .iter()
            .map(|policy| value_of(&runs[policy].metrics))
            .fold(f64::EPSILON, f64::max);

        println!("\n{label} comparison");
        for policy in Policy::ALL {
            let value = value_of(&runs[&policy].metrics);
            let bar = "#".repeat((value / max * WIDTH).round() as usize);
            println!("{policy:>5} | {bar} {value:.2}");
        }
    }
}
