use clap::Parser;
use harmony_env::get_records_dir;
use harmony_search::{
    HSConfig, HSReport, harmony_search,
    function_registry::{FunctionRegistry, RegisteredFunction},
    run_recorded_harmony_search,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "run_hs",
    about = "Run Harmony Search on a registered objective function"
)]
struct Cli {
    /// Name of the objective function to optimize (use --list-functions to see available options)
    #[arg(long)]
    function: Option<String>,

    /// JSON configuration file; command line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Total number of improvisations, shared by all workers
    #[arg(long)]
    max_imp: Option<usize>,

    /// Harmony memory size
    #[arg(long)]
    hms: Option<usize>,

    /// Harmony memory considering rate in [0, 1]
    #[arg(long)]
    hmcr: Option<f64>,

    /// Pitch adjusting rate in [0, 1]
    #[arg(long)]
    par: Option<f64>,

    /// Maximum pitch adjustment proportion for continuous parameters
    #[arg(long)]
    mpap: Option<f64>,

    /// Maximum pitch adjustment index for discrete parameters
    #[arg(long)]
    mpai: Option<usize>,

    /// Maximize the objective (overrides the function's direction)
    #[arg(long, conflicts_with = "minimize")]
    maximize: bool,

    /// Minimize the objective (overrides the function's direction)
    #[arg(long)]
    minimize: bool,

    /// Number of parallel workers (defaults to the number of logical CPUs)
    #[arg(long)]
    workers: Option<usize>,

    /// Optional random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Record per-worker histories to CSV
    #[arg(long)]
    record: bool,

    /// History sampling period in improvisations (with --record)
    #[arg(long)]
    history_every: Option<usize>,

    /// Output directory for CSV files (defaults to $HARMONY_DIR/data_generated/records)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// List all available functions and exit
    #[arg(long)]
    list_functions: bool,
}

fn list_available_functions(registry: &FunctionRegistry) {
    println!("Available functions:");
    for (name, function) in registry.iter() {
        let direction = if function.maximize { "max" } else { "min" };
        println!("  {name:<20} [{direction}] {}", function.description);
    }
}

/// Parse a JSON configuration; `maximize` falls back to the function's
/// direction when the file does not set it.
fn config_from_json(text: &str, default_maximize: bool) -> serde_json::Result<HSConfig> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let has_direction = value.get("maximize").is_some();
    let mut config: HSConfig = serde_json::from_value(value)?;
    if !has_direction {
        config.maximize = default_maximize;
    }
    Ok(config)
}

fn build_config(args: &Cli, function: &RegisteredFunction) -> Result<HSConfig, String> {
    let mut config = match &args.config {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| config_from_json(&text, function.maximize).map_err(|e| e.to_string()))
            .map_err(|e| format!("cannot load {}: {e}", path.display()))?,
        None => HSConfig { maximize: function.maximize, ..HSConfig::default() },
    };
    if args.maximize {
        config.maximize = true;
    }
    if args.minimize {
        config.maximize = false;
    }
    if let Some(v) = args.max_imp {
        config.max_imp = v;
    }
    if let Some(v) = args.hms {
        config.hms = v;
    }
    if let Some(v) = args.hmcr {
        config.hmcr = v;
    }
    if let Some(v) = args.par {
        config.par = v;
    }
    if let Some(v) = args.mpap {
        config.mpap = v;
    }
    if let Some(v) = args.mpai {
        config.mpai = v;
    }
    if let Some(v) = args.workers {
        config.num_workers = v;
    }
    if let Some(v) = args.seed {
        config.seed = Some(v);
    }
    if let Some(v) = args.history_every {
        config.history_every = v;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn print_report(name: &str, report: &HSReport) {
    println!("Function:        {name}");
    println!("Best fitness:    {:.10}", report.best_fitness);
    println!("Best harmony:    {:?}", report.best_harmony.to_vec());
    println!("Found by worker: {}", report.best_worker);
    println!("Evaluations:     {}", report.nfev);
    println!("Elapsed:         {:.3} s", report.elapsed.as_secs_f64());
    for worker in &report.workers {
        println!(
            "  worker {:>3}: improvisations={:>7} accepted={:>6} best={:.10}",
            worker.best.worker, worker.improvisations, worker.accepted, worker.best.fitness
        );
    }
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let registry = FunctionRegistry::new();

    if args.list_functions {
        list_available_functions(&registry);
        return;
    }

    let function_name = match &args.function {
        Some(name) => name.trim().to_string(),
        None => {
            eprintln!("Error: --function must be provided unless --list-functions is used.");
            process::exit(2);
        }
    };

    let function = match registry.get(&function_name) {
        Some(function) => function,
        None => {
            eprintln!(
                "Error: function '{function_name}' not found. Use --list-functions to inspect available names."
            );
            process::exit(2);
        }
    };

    let config = build_config(&args, function).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(2);
    });

    let objective = function.objective.as_ref();
    let result = if args.record {
        let output_dir = match &args.output_dir {
            Some(dir) => dir.clone(),
            None => get_records_dir().unwrap_or_else(|err| {
                eprintln!("Error: {err}");
                process::exit(1);
            }),
        };
        run_recorded_harmony_search(&function_name, objective, config, &output_dir).map(
            |(report, paths)| {
                for path in &paths {
                    println!("History saved to {}", path.display());
                }
                report
            },
        )
    } else {
        harmony_search(objective, config)
    };

    match result {
        Ok(report) => print_report(&function_name, &report),
        Err(err) => {
            log::error!("harmony search failed: {err}");
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
