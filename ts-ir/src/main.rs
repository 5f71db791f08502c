use clap::Parser;
use std::fs::write as write_file;
use std::io::Read;
use std::process::exit;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ts_ir::{convert_declarations, convert_typescript_file, Conversion, Options};

/// Convert typescript declarations into a class/method/type intermediate representation.
#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
    /// Typescript declaration file (e.g. ./types/my-lib.d.ts), or - to read from stdin.
    #[clap(name = "input-path")]
    ts_input_file_path: String,

    /// Output file. Writes to stdout if not specified.
    #[clap(short = 'o', long = "output", name = "output-path")]
    output_path: Option<String>,

    /// Output format: json or text.
    #[clap(long, default_value = "json")]
    format: OutputFormat,

    /// Increase diagnostic output. Pass twice or more to also dump the parsed syntax tree.
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(format!("unknown format {}, expected json or text", s)),
        }
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(conversion: &Conversion, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(conversion) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("Failed to serialize output: {}", err);
                exit(3);
            }
        },
        OutputFormat::Text => {
            let mut lines: Vec<String> = conversion
                .warnings
                .iter()
                .map(|w| format!("// warning: {}", w))
                .collect();
            lines.extend(conversion.classes.iter().map(ToString::to_string));
            lines.join("\n\n")
        }
    }
}

fn main() {
    let args = Args::parse();

    init_tracing(args.verbose);

    let options = Options::default().with_verbosity(args.verbose);

    let conversion = if args.ts_input_file_path == "-" {
        let mut ts = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut ts) {
            eprintln!("Failed to read stdin: {}", err);
            exit(1);
        }
        convert_declarations(&options.with_file_name("<stdin>"), &ts)
    } else {
        match convert_typescript_file(&args.ts_input_file_path, options) {
            Ok(conversion) => conversion,
            Err(err) => {
                eprintln!("{}", err);
                exit(1);
            }
        }
    };

    info!(
        classes = conversion.classes.len(),
        warnings = conversion.warnings.len(),
        "converted {}",
        args.ts_input_file_path
    );

    let output = render(&conversion, args.format);

    if let Some(out_path) = args.output_path {
        if let Err(err) = write_file(&out_path, output) {
            eprintln!("Failed to write file {}: {}", out_path, err);
            exit(2);
        }
    } else {
        println!("{}", output);
    }
}
