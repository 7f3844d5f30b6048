use barweather::cli::Cli;
use barweather::config::{ConfigLoader, InitResult};
use barweather::core::StatusProvider;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    barweather::logging::init();
    barweather::logging::install_panic_hook();
    let cli = Cli::parse_args();

    if cli.init {
        return match ConfigLoader::init(cli.config.as_deref()) {
            Ok(InitResult::Created(path)) => {
                println!("Created config at {}", path.display());
                ExitCode::SUCCESS
            }
            Ok(InitResult::AlreadyExists(path)) => {
                println!("Config already exists at {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to initialize config: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    if cli.check {
        return match ConfigLoader::check(cli.config.as_deref()) {
            Ok(_) => {
                println!("Configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Configuration invalid: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    if cli.print_config {
        return match ConfigLoader::load(cli.config.as_deref()).and_then(|c| c.to_toml()) {
            Ok(content) => {
                print!("{}", content);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    // Status mode touches no files and always exits 0
    StatusProvider::new().status().emit(&mut io::stdout().lock());
    ExitCode::SUCCESS
}
