use std::{io, process::ExitCode};

use clap::Parser;
use rawview::{cli::Args, simulator::SimulatorViewer};

fn main() -> ExitCode {
    let args = Args::parse();
    log_init(args.log_level());

    let mut viewer = SimulatorViewer::new(args.scale);
    match rawview::cli::run(&args, &mut io::stdout(), &mut viewer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err}");
            log::debug!("{err:?}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn log_init(filter: log::LevelFilter) {
    use simplelog::*;
    let term = TermLogger::new(
        filter,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    if CombinedLogger::init(vec![term]).is_err() {
        eprintln!("logger already initialized");
    }
}
