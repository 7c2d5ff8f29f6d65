//! The `satview` binary.

use satview::plugins::mathml::MathmlAdapter;
use satview::{format_content, format_solution, MathSolution, Options, Plugins};

use std::error::Error;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EXIT_PARSE_CONFIG: i32 = 2;

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(
    after_help = "By default, satview will attempt to read command-line options from a config file specified by --config-file.  This behaviour can be disabled by passing --config-file none.  It is not an error if the config file does not exist.\n\nSet RUST_LOG (e.g. RUST_LOG=debug) to see rendering diagnostics on stderr."
)]
struct Cli {
    /// File(s) to render; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Option<Vec<PathBuf>>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// Treat the input as a solution payload (JSON) from the solving backend
    #[arg(short, long)]
    solution: bool,

    /// Original problem text shown above a solution
    #[arg(long, value_name = "FILE", requires = "solution")]
    problem: Option<PathBuf>,

    /// Present content that is exactly one math expression as display math
    #[arg(long)]
    display_mode: bool,

    /// Class attribute for the span wrapping rendered content
    #[arg(long = "class", value_name = "CLASS")]
    class_name: Option<String>,

    /// Class attribute for the marker shown in place of math that fails to typeset
    #[arg(long, value_name = "CLASS")]
    error_class: Option<String>,

    /// How math is typeset
    #[arg(short, long, value_enum, default_value_t = Typesetter::Mathml)]
    typesetter: Typesetter,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Typesetter {
    /// Emit the LaTeX source for a client-side typesetter
    None,
    /// Convert to MathML
    Mathml,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut cli = Cli::parse();

    if cli.config_file != "none" {
        if let Ok(config_args) = fs::read_to_string(&cli.config_file) {
            debug!(path = %cli.config_file, "read config file");
            let mut args = std::env::args_os().collect::<Vec<_>>();
            match shell_words::split(&config_args) {
                Ok(words) => {
                    args.splice(1..1, words.into_iter().map(OsString::from));
                }
                Err(e) => {
                    eprintln!("failed to parse {}: {}", cli.config_file, e);
                    std::process::exit(EXIT_PARSE_CONFIG);
                }
            }
            cli = Cli::parse_from(args);
        }
    }

    let mut options = Options::default();
    options.parse.display_mode = cli.display_mode;
    options.render.class_name = cli.class_name.clone();
    options.render.error_class = cli.error_class.clone();

    let adapter = MathmlAdapter::new();
    let mut plugins = Plugins::default();
    if cli.typesetter == Typesetter::Mathml {
        plugins.render.typesetter = Some(&adapter);
    }

    let input = read_input(cli.files.as_deref())?;

    let mut out = String::with_capacity(input.len() * 2);
    if cli.solution {
        let solution = MathSolution::from_json(&input)?;
        let problem = match cli.problem {
            Some(ref path) => Some(fs::read_to_string(path)?),
            None => None,
        };
        format_solution(&solution, problem.as_deref(), &options, &plugins, &mut out)?;
    } else {
        format_content(Some(&input), &options, &plugins, &mut out)?;
        out.push('\n');
    }

    match cli.output {
        Some(ref path) => fs::write(path, out)?,
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(out.as_bytes())?;
            lock.flush()?;
        }
    }

    Ok(())
}

fn read_input(files: Option<&[PathBuf]>) -> io::Result<String> {
    let mut s = String::with_capacity(2048);
    match files {
        None => {
            io::stdin().read_to_string(&mut s)?;
        }
        Some(paths) => {
            for path in paths {
                s.push_str(&fs::read_to_string(path)?);
            }
        }
    }
    Ok(s)
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> String {
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("satview") {
        if let Ok(path) = xdg_dirs.place_config_file("config") {
            if let Some(path_str) = path.to_str() {
                return path_str.into();
            }
        }
    }

    "none".into()
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> String {
    "none".into()
}
