use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use odia_morph::archive::load_inventory;
use odia_morph::MorphTables;
use odia_protocol::SuffixInventory;
use odia_ssf::{annotate_path, Annotator, LtProcAnalyzer, Numbering};
use odia_translit::WxTransliterator;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Adds morphological feature structures to POS-tagged Odia SSF files"
)]
struct Cli {
    /// Input file, or a directory of files
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output file, or the output directory when the input is a directory
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Compiled lttoolbox automaton for Odia
    #[arg(short, long, value_name = "FILE")]
    dict: PathBuf,

    /// 1 when data lines are chunk-numbered (`1.2`), 0 for sentence-numbered
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    chunk: u8,

    /// Analyzer executable
    #[arg(long, value_name = "PROGRAM", default_value = "lt-proc")]
    lt_proc: PathBuf,

    /// Suffix inventory compiled by `suffix-compiler`; built-in tables otherwise
    #[arg(long, value_name = "FILE")]
    tables: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let inventory = match &cli.tables {
        Some(path) => {
            let bytes =
                fs::read(path).with_context(|| format!("reading suffix tables {:?}", path))?;
            load_inventory(&bytes).with_context(|| format!("loading suffix tables {:?}", path))?
        }
        None => SuffixInventory::default(),
    };
    info!(
        "suffix inventory v{}: {} plural oblique, {} plural direct, {} singular oblique",
        inventory.version,
        inventory.plural_oblique.len(),
        inventory.plural_direct.len(),
        inventory.singular_oblique.len()
    );
    let tables = MorphTables::compile(&inventory)?;

    let analyzer = LtProcAnalyzer::new(&cli.lt_proc, &cli.dict)?;
    let translit = WxTransliterator::new();
    let numbering = Numbering::from_chunk_flag(cli.chunk == 1);
    let mut annotator = Annotator::new(analyzer, &translit, &tables, numbering);

    let files = annotate_path(&mut annotator, &cli.input, &cli.output)
        .with_context(|| format!("annotating {:?}", cli.input))?;
    info!("{} file(s) written to {:?}", files, cli.output);
    Ok(())
}
