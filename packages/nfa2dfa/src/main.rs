use std::io::Read;

use clap::Parser;
use nfa2dfa_lib::{
    automaton::{Automaton, SerializableAutomaton, dfa::DFA},
    config::{ConverterConfig, LoggerConfig, OutputFormat},
};

#[derive(Parser, Debug)]
#[command(name = "nfa2dfa")]
#[command(version = "0.1")]
#[command(about = "Convert an encoded NFA into an equivalent DFA", long_about = None)]
struct Args {
    /// The encoded automaton, e.g. `0 1/a/0,a,1;0,,1/0/1`. Read from stdin
    /// when neither this nor `--file` is given.
    encoding: Option<String>,

    /// Read the encoded automaton from a file.
    #[arg(short, long, conflicts_with = "encoding")]
    file: Option<String>,

    /// A TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Overrides the output format of the configuration.
    #[arg(long)]
    format: Option<OutputFormat>,
}

fn init_logging(config: &LoggerConfig) {
    if !*config.get_enabled() {
        return;
    }

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(*config.get_log_level()))
        .with_writer(std::io::stderr)
        .init();
}

fn read_encoding(args: &Args) -> anyhow::Result<String> {
    if let Some(encoding) = &args.encoding {
        return Ok(encoding.clone());
    }

    if let Some(file) = &args.file {
        return Ok(std::fs::read_to_string(file)?);
    }

    let mut encoding = String::new();
    std::io::stdin().read_to_string(&mut encoding)?;
    Ok(encoding)
}

fn render(dfa: &DFA, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Encoding => dfa.encode(),
        OutputFormat::SetNotation => dfa.to_set_notation(),
        OutputFormat::Graphviz => dfa.to_graphviz(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&SerializableAutomaton::from(dfa.as_automaton()))?
        }
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ConverterConfig::from_optional_file(args.config.as_ref())?;
    if let Some(format) = args.format {
        config.set_format(format);
    }

    init_logging(config.get_logger());

    let encoding = read_encoding(&args)?;
    let mut nfa = Automaton::parse(encoding.trim())?;
    tracing::info!("Read NFA with {} states", nfa.state_count());

    if *config.get_remove_unreachable() {
        nfa = nfa.remove_unreachable();
    }

    let mut dfa = nfa.to_dfa_with(config.get_subset_construction());
    if *config.get_canonicalize() {
        dfa = dfa.canonicalize();
    }
    tracing::info!("Built DFA with {} states", dfa.state_count());

    println!("{}", render(&dfa, *config.get_format())?.trim_end());

    Ok(())
}
