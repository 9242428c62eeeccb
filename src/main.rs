//! Pythagoras Tutor CLI
//!
//! Usage:
//!   pythagoras-tutor [OPTIONS] [PROBLEM]
//!
//! Options:
//!   -m, --mode <MODE>        Side to solve for (c, a or b)
//!   -a, -b, -c <VALUE>       Known side lengths
//!   -f, --format <FORMAT>    markdown, svg or json
//!   -o, --output <FILE>      Write to a file instead of stdout
//!   -s, --stylesheet <FILE>  Stylesheet file for the diagram palette (TOML format)
//!   --about                  Show background on the theorem
//!   -v, --verbose            More logging (repeat for debug output)
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::{warn, Level};

use pythagoras_tutor::{
    parse_request, solve_request_with_config, Report, Side, SolveMode, SolveRequest, Stylesheet,
    TutorConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Step-by-step derivation
    Markdown,
    /// Labelled triangle diagram
    Svg,
    /// Full report
    Json,
}

#[derive(Parser)]
#[command(name = "pythagoras-tutor")]
#[command(about = "Solve right triangles step by step with the Pythagorean theorem")]
struct Cli {
    /// Problem statement such as "a = 3, b = 4, c = ?" (reads from stdin if piped)
    problem: Option<String>,

    /// Side to solve for: c (hypotenuse), a or b
    #[arg(short, long)]
    mode: Option<SolveMode>,

    /// Length of leg a
    #[arg(short)]
    a: Option<f64>,

    /// Length of leg b
    #[arg(short)]
    b: Option<f64>,

    /// Length of the hypotenuse c
    #[arg(short)]
    c: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stylesheet file for the diagram palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Show background on the Pythagorean theorem
    #[arg(long)]
    about: bool,

    /// Increase logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn value(&self, side: Side) -> Option<f64> {
        match side {
            Side::A => self.a,
            Side::B => self.b,
            Side::C => self.c,
        }
    }

    fn has_values(&self) -> bool {
        self.mode.is_some() || Side::ALL.iter().any(|&side| self.value(side).is_some())
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();

    if cli.about {
        print_about();
        return;
    }

    // Nothing to solve and nothing piped in: show intro help
    if cli.problem.is_none() && !cli.has_values() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let request = if cli.problem.is_some() || !cli.has_values() {
        request_from_statement(&cli)
    } else {
        request_from_values(&cli)
    };

    let config = TutorConfig::new().with_stylesheet(stylesheet);
    let report = solve_request_with_config(&request, &config);

    let output = match render(&report, cli.format, &config) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, output) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", output.trim_end()),
    }
}

fn request_from_statement(cli: &Cli) -> SolveRequest {
    let source = match &cli.problem {
        Some(problem) => problem.clone(),
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match parse_request(&source) {
        Ok(request) => request,
        Err(errors) => {
            for error in &errors {
                eprint!("{}", error.format(&source, "problem"));
            }
            std::process::exit(1);
        }
    }
}

fn request_from_values(cli: &Cli) -> SolveRequest {
    let mode = cli.mode.unwrap_or(SolveMode::SolveC);
    let unknown = mode.unknown();
    if cli.value(unknown).is_some() {
        warn!("ignoring -{} since {} is being solved for", unknown, unknown);
    }

    let (first_side, second_side) = mode.inputs();
    let (first_default, second_default) = mode.defaults();
    let first = cli.value(first_side).unwrap_or(first_default);
    let second = cli.value(second_side).unwrap_or(second_default);

    match SolveRequest::from_values(mode, first, second) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn render(
    report: &Report,
    format: OutputFormat,
    config: &TutorConfig,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Markdown => report.to_markdown(),
        OutputFormat::Svg => report.to_svg(&config.svg, &config.stylesheet),
        OutputFormat::Json => report.to_json()?,
    })
}

fn print_intro() {
    println!(
        r#"Pythagoras Tutor - Solve right triangles step by step

In a right triangle, the square of the hypotenuse is equal to the sum of
the squares of the other two sides:

    a^2 + b^2 = c^2

where a and b are the legs and c is the hypotenuse.

USAGE:
    pythagoras-tutor [OPTIONS] [PROBLEM]
    echo 'b = 4, c = 5, a = ?' | pythagoras-tutor

OPTIONS:
    -m, --mode         Side to solve for: c, a or b (default c)
    -a, -b, -c         Known side lengths (at least 0.1)
    -f, --format       markdown, svg or json
    -o, --output       Write to a file
    -s, --stylesheet   Custom diagram palette (TOML file)
    --about            Background on the theorem
    -v, --verbose      More logging
    -h, --help         Print help

QUICK START:
    pythagoras-tutor 'a = 3, b = 4, c = ?'
    pythagoras-tutor --mode a -b 4 -c 5 --format svg > triangle.svg

Without values, each mode uses the 3-4-5 triangle."#
    );
}

fn print_about() {
    println!(
        r#"THE PYTHAGOREAN THEOREM
=======================

WHAT IT SAYS
------------
The Pythagorean theorem is a fundamental relation in Euclidean geometry:
in a right triangle, the square of the length of the hypotenuse equals the
sum of the squares of the lengths of the other two sides (the legs).

    a^2 + b^2 = c^2

PRACTICAL APPLICATIONS
----------------------
- Architecture and construction
- Navigation
- Cartography
- Physics
- Engineering
- Graphic design

HISTORY
-------
The theorem is named after the Greek mathematician Pythagoras (570-495 BC),
although there is evidence that earlier civilisations such as the
Babylonians and the Chinese already knew the relation."#
    );
}
