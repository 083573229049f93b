//! floatkv CLI
//!
//! Prepares and inspects file-backed EEPROM images on a host machine.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use floatkv::{Config, FileStore, FloatKeyContainer, InsertOutcome, OverflowPolicy};
use tracing_subscriber::{fmt, EnvFilter};

/// Table type stored in CLI images: i32 keys scaled by 1000, i64 values, 64 slots
type Table = FloatKeyContainer<i32, i64, 64, 1000>;

/// floatkv CLI
#[derive(Parser, Debug)]
#[command(name = "floatkv-cli")]
#[command(about = "Inspect and edit floatkv EEPROM images")]
#[command(version)]
struct Args {
    /// Image file
    #[arg(short, long)]
    image: PathBuf,

    /// Base address of the table inside the image
    #[arg(short, long, default_value = "0")]
    base: usize,

    /// What to do when inserting into a full table
    #[arg(short, long, value_enum, default_value = "reject")]
    policy: Policy,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create (or overwrite) the image with an empty table
    Init,

    /// Insert a key-value pair
    Insert {
        /// The key to insert
        #[arg(allow_negative_numbers = true)]
        key: f64,

        /// The value to store
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Get the value of the nearest key
    Get {
        /// The key to look up
        #[arg(allow_negative_numbers = true)]
        key: f64,
    },

    /// Overwrite the value of the nearest key
    Set {
        /// The key to look up
        #[arg(allow_negative_numbers = true)]
        key: f64,

        /// The new value
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Show the index and stored key nearest to a key
    Find {
        /// The key to look up
        #[arg(allow_negative_numbers = true)]
        key: f64,
    },

    /// Print every live entry
    Dump,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Policy {
    Reject,
    EvictHighest,
    EvictLowest,
}

impl From<Policy> for OverflowPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Reject => OverflowPolicy::Reject,
            Policy::EvictHighest => OverflowPolicy::EvictHighest,
            Policy::EvictLowest => OverflowPolicy::EvictLowest,
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,floatkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("floatkv CLI v{}", floatkv::VERSION);

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> floatkv::Result<()> {
    let config = Config::builder()
        .overflow_policy(args.policy.into())
        .build();
    let mut table = Table::with_config(config);

    if let Commands::Init = args.command {
        return init(&table, &args.image, args.base);
    }

    let mut store = FileStore::open(&args.image)?;
    table.load(&mut store, args.base)?;

    match args.command {
        Commands::Init => {}
        Commands::Insert { key, value } => {
            match table.insert(key, value)? {
                InsertOutcome::Inserted { index } => println!("inserted at {}", index),
                InsertOutcome::Evicted { index, key, value } => {
                    println!("inserted at {}, evicted {} => {}", index, key, value)
                }
                InsertOutcome::Discarded => println!("discarded"),
            }
            table.save(&mut store, args.base)?;
            store.sync()?;
        }
        Commands::Get { key } => {
            println!("{}", table.get(key)?);
        }
        Commands::Set { key, value } => {
            let index = table.set(key, value)?;
            table.save(&mut store, args.base)?;
            store.sync()?;
            println!("updated {}", index);
        }
        Commands::Find { key } => {
            let (index, stored, value) = table.nearest(key)?;
            println!("{} {} {}", index, stored, value);
        }
        Commands::Dump => {
            println!("{}/{} entries", table.len(), table.capacity());
            for (index, (key, value)) in table.iter().enumerate() {
                println!("{:>4} {:>12} {}", index, key, value);
            }
        }
    }

    Ok(())
}

/// Write an erased image just large enough for one table at `base`
fn init(table: &Table, image: &Path, base: usize) -> floatkv::Result<()> {
    let size = Table::LAYOUT.end(base)?;
    let mut store = FileStore::create(image, size)?;
    table.save(&mut store, base)?;
    store.sync()?;

    tracing::info!(
        "Initialized {} ({} bytes, table at {:#x})",
        image.display(),
        size,
        base
    );
    Ok(())
}
