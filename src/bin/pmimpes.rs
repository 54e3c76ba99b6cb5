use pmimpes::prelude::*;
use structopt::StructOpt;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pmimpes",
    about = "Checks a decoupled two-phase problem definition and summarizes its boundary conditions"
)]
struct Options {
    /// JSON configuration file (the tutorial configuration is used if omitted)
    #[structopt(short, long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[structopt(short, long, default_value = "info")]
    log_level: String,

    /// Prints the configuration
    #[structopt(short, long)]
    print_config: bool,

    /// Classifies all boundary faces and prints a summary
    #[structopt(short, long)]
    scan: bool,

    /// Writes the configuration to a JSON file
    #[structopt(short, long)]
    write_config: Option<String>,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // logging
    let level = match options.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|_| "cannot set the logger")?;

    // configuration
    let config = match &options.config {
        Some(path) => ProblemConfig::read_json(path)?,
        None => ProblemConfig::new(),
    };
    if options.print_config {
        println!("{}", config);
    }
    if let Some(path) = &options.write_config {
        config.write_json(path)?;
        println!("configuration written to {}", path);
    }

    // problem
    let problem = TutorialProblem::new(&config)?;
    if options.scan {
        let scan = Validator::scan_boundary(&problem)?;
        println!("{}", scan);
    }

    // message
    let x = config.grid.bbox_min();
    let state = problem.reference_state_at(x);
    let thin_line = format!("{:─^1$}", "", 50);
    println!("{}", thin_line);
    println!("problem '{}' is ready", problem.name());
    println!("T = {:?} K, p_ref = {:?} Pa", state.temperature, state.pressure);
    println!("{}", thin_line);
    Ok(())
}
