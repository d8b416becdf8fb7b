use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "invedit")]
#[command(about = "Player inventory editor for NBT save files", long_about = None)]
pub struct Cli {
    /// JSON file overriding field names and valid slots
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the items in a save file
    #[command(visible_alias = "s")]
    Show {
        /// Path to the save file
        input: PathBuf,

        /// Print the inventory as JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump the whole tag tree of a save file
    #[command(visible_alias = "t")]
    Tree {
        /// Path to the save file
        input: PathBuf,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Put an item stack into a slot and save the file
    Set {
        /// Path to the save file
        input: PathBuf,

        #[arg(long)]
        slot: u8,

        /// Item id
        #[arg(long)]
        id: i16,

        /// Stack size, at least 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..))]
        count: u8,

        #[arg(long, default_value_t = 0)]
        damage: i16,
    },

    /// Empty a slot and save the file
    Clear {
        /// Path to the save file
        input: PathBuf,

        #[arg(long)]
        slot: u8,
    },

    /// Create a save file with an empty inventory
    New {
        /// Path of the file to create
        output: PathBuf,
    },

    /// Copy the inventory of one save file into another
    Copy {
        /// Save file to read the inventory from
        input: PathBuf,

        /// Save file to write the inventory into, created if missing
        output: PathBuf,
    },
}
