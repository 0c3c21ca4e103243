use alarm_script_gen::config::{ConfigFile, GenerateConfig, OperationsSource, Overrides};
use alarm_script_gen::output::CopyOutcome;
use alarm_script_gen::{AddressType, Result, build, expand, output};

use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "alarm-script-gen")]
#[command(about = "PLC alarm-logging script generator", long_about = None)]
struct Cli {
    /// Log debug detail to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the alarm script for a machine's operations.
    Generate {
        /// JSON config file; flags override its fields.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Machine name prefix, e.g. AS33PerfTest.
        #[arg(short, long)]
        machine: Option<String>,

        /// Type for addresses written without a prefix.
        #[arg(short = 't', long, value_enum, ignore_case = true)]
        default_type: Option<TypeArg>,

        /// File with one `OpName: addresses` per line (`-` for stdin).
        #[arg(long, conflicts_with = "op")]
        ops: Option<String>,

        /// A single `OpName: addresses` line; may be repeated.
        #[arg(long)]
        op: Vec<String>,

        /// Write the script to this file instead of stdout.
        #[arg(short = 'o', long, conflicts_with_all = ["out_dir", "copy"])]
        out: Option<PathBuf>,

        /// Save as `<machine>.txt` (or alarm_script.txt) in this directory.
        #[arg(long, conflicts_with = "copy")]
        out_dir: Option<PathBuf>,

        /// Copy the script to the clipboard (stdout if no clipboard is available).
        #[arg(short, long)]
        copy: bool,

        /// Exit with an error if any address entry was skipped.
        #[arg(long)]
        strict: bool,
    },

    /// Expand an address list and print one address per line.
    Expand {
        /// Comma-separated addresses, e.g. "CIO4012-4019, W4021, 4030".
        spec: String,

        #[arg(short = 't', long, value_enum, ignore_case = true, default_value_t = TypeArg::Cio)]
        default_type: TypeArg,

        /// Print {"tokens": [...], "invalid": [...]} as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TypeArg {
    Cio,
    W,
    D,
    H,
}

impl From<TypeArg> for AddressType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Cio => AddressType::Cio,
            TypeArg::W => AddressType::W,
            TypeArg::D => AddressType::D,
            TypeArg::H => AddressType::H,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Generate {
            config,
            machine,
            default_type,
            ops,
            op,
            out,
            out_dir,
            copy,
            strict,
        } => {
            // 1) Resolve inputs: flags > config file > defaults.
            let file = match &config {
                Some(path) => ConfigFile::load(path)?,
                None => ConfigFile::default(),
            };
            let operations = match (ops, op.is_empty()) {
                (Some(path), _) => Some(OperationsSource::File(path)),
                (None, false) => Some(OperationsSource::Lines(op)),
                (None, true) => None,
            };
            let cfg = GenerateConfig::resolve(
                file,
                Overrides {
                    machine_name: machine,
                    default_type: default_type.map(AddressType::from),
                    operations,
                },
            )?;

            // 2) Build.
            let generated = build(&cfg.machine_name, &cfg.operations, cfg.default_type);
            output::report_diagnostics(&generated.diagnostics);
            if strict && !generated.is_clean() {
                bail!(
                    "{} operation line(s) had invalid address entries",
                    generated.diagnostics.len()
                );
            }

            // 3) Emit.
            match (out, out_dir) {
                _ if copy => {
                    if output::copy_to_clipboard(&generated.text)? == CopyOutcome::Clipboard {
                        eprintln!("Script copied to clipboard");
                    }
                }
                (Some(path), _) => {
                    output::write_to(&path, &generated.text)?;
                    eprintln!("Wrote {}", path.display());
                }
                (None, Some(dir)) => {
                    let path = output::write_download(&dir, &cfg.machine_name, &generated.text)?;
                    eprintln!("Wrote {}", path.display());
                }
                (None, None) => output::print(&generated.text)?,
            }
        }
        Commands::Expand {
            spec,
            default_type,
            json,
        } => {
            let expansion = expand(&spec, default_type.into());
            if json {
                output::print(&serde_json::to_string_pretty(&expansion)?)?;
            } else {
                if let Some(warning) = expansion.warning() {
                    tracing::warn!("{}", warning);
                }
                let lines: Vec<String> = expansion.tokens.iter().map(|t| t.to_string()).collect();
                output::print(&lines.join("\n"))?;
            }
        }
    }

    Ok(())
}
