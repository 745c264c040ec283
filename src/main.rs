use colored::Colorize;
use env_logger::Env;
use log::debug;

use xcvt::{cli, execute, render};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e.to_string().red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        println!("{}", render::usage());
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    load_dotenv();

    let cli = cli::parse_from(std::env::args_os())?;

    // Default level depends on --debug; RUST_LOG overrides both
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    let format = cli.output_format();
    let request = cli.into_request()?;
    debug!("{request:?}");

    let output = execute(&request, format)?;
    println!("{output}");
    Ok(())
}

// `.env` from the working directory, else next to the executable.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let p = dir.join(".env");
            if p.exists() {
                let _ = dotenvy::from_path(&p);
            }
        }
    }
}
