//! linqrs CLI: demonstration driver for the query operators.

use clap::{Parser, Subcommand};
use linqrs_core::config::{JoinStrategy, QueryConfig};
use linqrs_core::plan::Plan;
use linqrs_operators::{from, Query};

#[derive(Parser)]
#[command(name = "linqrs")]
#[command(about = "Composable deferred and eager query operators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the operator walkthrough and print the results
    Demo {
        /// Comma-separated input numbers
        #[arg(long, value_delimiter = ',', default_value = "1,3,5,2,8,6,7,4,10,9")]
        numbers: Vec<i64>,

        /// Threshold used by the filter and count steps
        #[arg(long, default_value_t = 5)]
        threshold: i64,

        /// Join strategy (overrides LINQRS_JOIN_STRATEGY)
        #[arg(long)]
        join_strategy: Option<JoinStrategy>,
    },

    /// Show the plan of a filter/select/take pipeline without running it
    Explain {
        /// Comma-separated input numbers
        #[arg(long, value_delimiter = ',', default_value = "1,3,5,2,8,6,7,4,10,9")]
        numbers: Vec<i64>,

        /// Threshold used by the filter stage
        #[arg(long, default_value_t = 5)]
        threshold: i64,

        /// Prefix limit
        #[arg(long, default_value_t = 3)]
        take: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            numbers,
            threshold,
            join_strategy,
        } => {
            let config = resolve_config(QueryConfig::from_env(), join_strategy);
            if let Err(e) = run_demo(&numbers, threshold, &config) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Explain {
            numbers,
            threshold,
            take,
        } => {
            if let Err(e) = explain_pipeline(&numbers, threshold, take) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// CLI flags take priority over the environment.
fn resolve_config(mut config: QueryConfig, join_strategy: Option<JoinStrategy>) -> QueryConfig {
    if let Some(strategy) = join_strategy {
        config.join_strategy = strategy;
    }
    config
}

fn render<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_demo(
    numbers: &[i64],
    threshold: i64,
    config: &QueryConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let src = from(numbers);

    let filtered = src.filter(|n| **n > threshold).cloned().to_sequence_with(config);
    println!("Numbers greater than {}: {}", threshold, render(&filtered));

    let squared = src.select(|n| n * n).to_sequence_with(config);
    println!("Squares of numbers: {}", render(&squared));

    let sorted: Vec<i64> = src.order_by(|n| **n).into_iter().copied().collect();
    println!("Numbers sorted in ascending order: {}", render(&sorted));

    println!("Sum: {}", src.sum::<i64>());
    println!("Min: {}", linqrs_operators::min(&src)?);
    println!("Max: {}", linqrs_operators::max(&src)?);
    println!(
        "Count greater than {}: {}",
        threshold,
        src.count_where(|n| **n > threshold)
    );

    let people = [
        ("Alice", 30),
        ("Bob", 25),
        ("Charlie", 35),
        ("Alice", 40),
        ("Eve", 28),
    ];
    let unique: Vec<String> = from(people.as_slice())
        .distinct_by(|p| p.0)
        .iter()
        .map(|p| format!("{}({})", p.0, p.1))
        .collect();
    println!("People distinct by name: {}", unique.join(" "));

    let depts = [(1, "Engineering"), (2, "Sales")];
    let staff = [(1, "Ann"), (1, "Ben"), (3, "Cid")];
    let pairs = from(depts.as_slice()).join_with(
        config,
        &staff.as_slice(),
        |d| d.0,
        |s| s.0,
        |d, s| format!("{}:{}", d.1, s.1),
    );
    println!(
        "Department staff ({} join): {}",
        config.join_strategy,
        pairs.join(" ")
    );

    Ok(())
}

/// One numbered line per stage; stages without a known length say so.
fn stage_lines(plan: &Plan) -> Vec<String> {
    plan.stages
        .iter()
        .enumerate()
        .map(|(i, stage)| match stage.known_len {
            Some(_) => format!("{}. {}", i + 1, stage),
            None => format!("{}. {} (length unknown)", i + 1, stage),
        })
        .collect()
}

fn explain_pipeline(
    numbers: &[i64],
    threshold: i64,
    take: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = from(numbers)
        .filter(|n| **n > threshold)
        .select(|n| n * n)
        .take(take);
    let plan = pipeline.explain();

    println!("Pipeline Plan");
    println!("=============");
    println!();
    println!("{}", plan);
    println!();
    println!("Stages:");
    for line in stage_lines(&plan) {
        println!("  {}", line);
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
