use clap::{Parser, Subcommand};
use odia_morph::MorphTables;
use odia_protocol::SuffixInventory;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Compiles JSON suffix inventories to rkyv binary")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// JSON inventory -> rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Writes the built-in inventory as JSON, as a starting point for edits
    Dump {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Compile { input, output } => compile(input, output),
        Command::Dump { output } => {
            let json = serde_json::to_string_pretty(&SuffixInventory::default())?;
            fs::write(&output, json)?;
            println!("Built-in inventory written to {:?}", output);
            Ok(())
        }
    }
}

fn compile(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    println!("Reading JSON from {:?}...", input);
    let input_data = fs::read_to_string(&input)?;
    let inventory: SuffixInventory = serde_json::from_str(&input_data)?;

    // Reject tables the annotator could not compile.
    MorphTables::compile(&inventory)?;

    println!(
        "Compiling inventory v{} ({} plural oblique, {} plural direct, {} singular oblique)...",
        inventory.version,
        inventory.plural_oblique.len(),
        inventory.plural_direct.len(),
        inventory.singular_oblique.len()
    );

    let mut serializer = AllocSerializer::<4096>::default();
    serializer
        .serialize_value(&inventory)
        .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {:?}", e))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(&output, bytes)?;

    println!("Binary written to {:?}", output);
    Ok(())
}
