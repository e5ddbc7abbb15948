use clap::{Parser, Subcommand};
use env_logger::{Env, WriteStyle};
use sqft::config::{Config, OutputFormat};
use sqft::parser;
use sqft::session::{self, ConvertError, DisplayState, Session};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "sqft")]
#[command(about = "Convert square inches to square feet", long_about = None, version)]
struct Cli {
    /// Config file (default: sqft.toml in the current directory, if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a quantity of square inches to square feet
    Convert {
        /// Square inches, e.g. 144, 144.5, "144 1/2", 289/2
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        input: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the exact fraction a quantity parses to
    Parse {
        /// Square inches, e.g. 144, 144.5, "144 1/2", 289/2
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        input: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read quantities from stdin, one per line (:clear resets, :quit exits)
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::discover(cli.config.as_deref(), ".") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .write_style(WriteStyle::Never)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let result = match cli.command {
        Commands::Convert { input, json } => convert_quantity(&input.join(" "), output(&config, json)),
        Commands::Parse { input, json } => parse_quantity(&input.join(" "), output(&config, json)),
        Commands::Interactive => run_interactive(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn output(config: &Config, json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        config.output
    }
}

fn notice_error(error: ConvertError) -> Box<dyn std::error::Error> {
    let notice = error.notice();
    format!("{}: {}", notice.title, notice.message).into()
}

fn convert_quantity(input: &str, output: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = session::convert_text(input).map_err(notice_error)?;

    match output {
        OutputFormat::Text => {
            println!("{}", conversion.summary);
            println!("{}", conversion.detail);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&conversion)?),
    }

    Ok(())
}

fn parse_quantity(input: &str, output: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parser::parse_with_rule(input)
        .map_err(|e| notice_error(ConvertError::from(e)))?;

    match output {
        OutputFormat::Text => {
            println!("Rule: {}", parsed.rule);
            println!("Square inches: {}", parsed.quantity);
            match parsed.quantity.to_f64() {
                Some(value) => println!("Decimal: {}", value),
                None => println!("Decimal: (out of range)"),
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
    }

    Ok(())
}

fn run_interactive(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    let stdin = std::io::stdin();

    print_state(session.state(), config.output)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":q" => break,
            ":clear" => {
                session.clear();
            }
            _ if config.live => {
                if session.update_input(&line).is_none() {
                    continue;
                }
            }
            _ => {
                session.set_input(&line);
                let _ = session.submit();
            }
        }
        print_state(session.state(), config.output)?;
    }

    Ok(())
}

fn print_state(state: &DisplayState, output: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        OutputFormat::Text => {
            println!("{}", state.summary);
            println!("{}", state.detail);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(state)?),
    }
    Ok(())
}
