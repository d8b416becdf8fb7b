use std::{error::Error, path::Path};

use invedit::{read_document, EditorConfig, InventoryFile, Item, LoadOutcome, SaveOutcome};
use nbt::NbtPrettyPrinter;

type CommandResult = Result<(), Box<dyn Error>>;

fn open(input: &Path, config: &EditorConfig) -> Result<InventoryFile, Box<dyn Error>> {
    let (file, report) = InventoryFile::open(input, config)?;
    for warning in &report.warnings {
        eprintln!("{}", warning);
    }
    match report.outcome {
        LoadOutcome::NoEntity => eprintln!("No {} entity found.", config.layout.player),
        LoadOutcome::NoInventory => eprintln!("{} has no inventory.", config.layout.player),
        LoadOutcome::Loaded { .. } => {}
    }
    Ok(file)
}

fn save(file: &mut InventoryFile, output: &Path, config: &EditorConfig) -> CommandResult {
    match file.save(output, config)? {
        SaveOutcome::Saved { items } => println!("Saved {} stacks to {}.", items, output.display()),
        SaveOutcome::NoTargetEntity => {
            return Err(format!("{} has no {} entity", output.display(), config.layout.player).into())
        }
    }
    Ok(())
}

pub fn show(input: &Path, config: &EditorConfig, json: bool) -> CommandResult {
    let file = open(input, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(file.inventory())?);
        return Ok(());
    }
    for item in file.inventory().items() {
        println!(
            "{:>3}: id {:<5} x{:<3} damage {}",
            item.slot, item.id, item.count, item.damage
        );
    }
    Ok(())
}

pub fn tree(input: &Path, json: bool) -> CommandResult {
    let nbt = read_document(input)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&nbt)?);
        return Ok(());
    }
    let mut out = String::new();
    nbt.visit(&mut NbtPrettyPrinter::new(&mut out, 2))?;
    print!("{}", out);
    Ok(())
}

pub fn set(
    input: &Path,
    config: &EditorConfig,
    slot: u8,
    id: i16,
    count: u8,
    damage: i16,
) -> CommandResult {
    let mut file = open(input, config)?;
    file.inventory_mut()
        .set_item(Item::new(id, count, slot, damage))?;
    save(&mut file, input, config)
}

pub fn clear(input: &Path, config: &EditorConfig, slot: u8) -> CommandResult {
    let mut file = open(input, config)?;
    file.inventory_mut().take_item(slot)?;
    save(&mut file, input, config)
}

pub fn new(output: &Path, config: &EditorConfig) -> CommandResult {
    if output.exists() {
        return Err(format!("{} already exists", output.display()).into());
    }
    let mut file = InventoryFile::new(&config.slots);
    save(&mut file, output, config)
}

pub fn copy(input: &Path, output: &Path, config: &EditorConfig) -> CommandResult {
    let mut file = open(input, config)?;
    save(&mut file, output, config)
}
