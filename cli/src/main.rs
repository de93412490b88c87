use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use descent_json::{ParseOptions, TrailingContent, Value};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "jsonrd",
    version,
    about = "Parse JSON with the descent_json recursive-descent parser"
)]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Indentation size of the printed tree; 0 prints it on one line.
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Also parse with serde_json and fail if the trees differ.
    #[arg(long)]
    check: bool,

    /// Maximum nesting depth of arrays and objects.
    #[arg(long = "max-depth", value_name = "number", default_value_t = descent_json::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Disable the nesting depth limit.
    #[arg(long = "no-depth-limit", conflicts_with = "max_depth")]
    no_depth_limit: bool,

    /// Ignore anything after the top-level value instead of rejecting it.
    #[arg(long = "allow-trailing")]
    allow_trailing: bool,
}

impl Args {
    fn parse_options(&self) -> ParseOptions {
        let max_depth = if self.no_depth_limit {
            None
        } else {
            Some(self.max_depth)
        };
        let trailing = if self.allow_trailing {
            TrailingContent::Ignore
        } else {
            TrailingContent::Reject
        };
        ParseOptions::new()
            .with_max_depth(max_depth)
            .with_trailing(trailing)
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let input = read_input(args.input.as_deref())?;
    let options = args.parse_options();

    let value = descent_json::parse_with_options(&input, &options).map_err(|err| {
        match err.location(&input) {
            Some(location) => format!(
                "{err} at line {}, column {}",
                location.line, location.column
            ),
            None => err.to_string(),
        }
    })?;
    tracing::info!(kind = value.type_name(), "parsed input");

    if args.check {
        check_against_reference(&input, &value)?;
        eprintln!("✔ Matches reference parser");
    }

    with_output_writer(args.output.as_deref(), |writer| {
        write_json(writer, value, args.indent)
    })
}

fn check_against_reference(input: &str, value: &Value) -> Result<(), Box<dyn Error>> {
    let reference: serde_json::Value = serde_json::from_str(input)
        .map_err(|err| format!("reference parser rejected input: {err}"))?;
    if Value::from(reference) != *value {
        return Err("parsed tree differs from reference parser".into());
    }
    Ok(())
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json(writer: &mut dyn Write, value: Value, indent: usize) -> Result<(), Box<dyn Error>> {
    let value = serde_json::Value::from(value);
    if indent == 0 {
        serde_json::to_writer(writer, &value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}
