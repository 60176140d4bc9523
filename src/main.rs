mod points_import;
mod progress_bar;
mod report;
mod tour_io;

use std::{error::Error, path::PathBuf, time::Instant};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tour_search::{algs::AnnealingConfig, Algorithm};

use points_import::import_points;
use progress_bar::BarProgress;
use report::Report;
use tour_io::export_tour;

/// Finds a short open path through a set of named points.
#[derive(Parser)]
#[clap(name = "salesman")]
struct Cli {
    /// File with one `name,x,y` record per line
    #[clap(parse(from_os_str))]
    filename: PathBuf,

    /// One of nearest_n, 2opt, brute, sim, nearest_i
    #[clap(short, long, default_value = "nearest_n")]
    algo: Algorithm,

    /// Seed for simulated annealing
    #[clap(short, long)]
    seed: Option<u64>,

    /// Export the tour as `name,x,y` records
    #[clap(short, long, parse(from_os_str))]
    write_tour: Option<PathBuf>,

    #[clap(long, default_value = "info")]
    log_level: log::LevelFilter,

    /// Hide the progress bar
    #[clap(short, long)]
    quiet: bool,
}

fn set_up_logging(level: log::LevelFilter) -> Result<(), fern::InitError> {
    std::fs::create_dir_all("logs")?;
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date}][{level}] {message}",
                date = chrono::Local::now().format("%H:%M:%S"),
                level = record.level(),
                message = message
            ));
        })
        .level(level)
        .chain(fern::log_file(format!(
            "logs/{}.log",
            chrono::Local::now().format("%d%m%Y-%H%M")
        ))?)
        .apply()?;

    log::info!("Logger set up!");

    Ok(())
}

fn run(cli: &Cli, start: Instant) -> Result<(), Box<dyn Error>> {
    let points = import_points(&cli.filename)?;
    log::info!(
        "Imported {} points from {}.",
        points.len(),
        cli.filename.display()
    );

    let config = AnnealingConfig::default();
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut progress = BarProgress::for_algorithm(cli.algo, points.len(), &config, cli.quiet);
    let mut strategy = cli.algo.into_strategy(rng, config);
    log::info!("Solving with {}.", cli.algo);
    let result = strategy.solve(&points, &mut progress);
    progress.finish();
    let tour = result?;

    if let Some(path) = &cli.write_tour {
        export_tour(path, &tour, &points)?;
        log::info!("Tour written to {}.", path.display());
    }

    print!("{}", Report::new(&tour, &points, start.elapsed()));
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let cli = Cli::parse();
    set_up_logging(cli.log_level)?;

    if let Err(e) = run(&cli, start) {
        log::error!("{}", e);
        eprintln!("Please check your input: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
