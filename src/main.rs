use std::io::{self, BufRead, Write};

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};

use ai_chef::extract::strip_markers;
use ai_chef::model::{DEPARTMENTS, MEDIAS, METHODS, STYLES, YEARS};
use ai_chef::{
    generate_recipes, quick_recipe, AppConfig, ChefError, Confirmation, GenerationRequest,
    LocalStore, RemoveOutcome, SaveOutcome, SheetRelay,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "AI-assisted recipe generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate three candidate recipes from your ingredients
    Generate {
        /// Your name, recorded with the submission
        #[arg(long)]
        submitter: String,
        #[arg(long, default_value = "year-1", value_parser = PossibleValuesParser::new(YEARS.to_vec()))]
        year: String,
        #[arg(long, default_value = "computer-tech", value_parser = PossibleValuesParser::new(DEPARTMENTS.to_vec()))]
        department: String,
        /// Ingredients and seasonings you have, free text
        #[arg(long)]
        ingredients: String,
        #[arg(long, default_value = "fry", value_parser = PossibleValuesParser::new(METHODS.to_vec()))]
        method: String,
        #[arg(long, default_value = "oil", value_parser = PossibleValuesParser::new(MEDIAS.to_vec()))]
        media: String,
        #[arg(long, default_value = "thai", value_parser = PossibleValuesParser::new(STYLES.to_vec()))]
        style: String,
        /// Pick candidate N (1-based): relay it to the shared sheet and save locally
        #[arg(long)]
        pick: Option<usize>,
    },
    /// Look up a single recipe by dish name
    Quick {
        /// Dish name, e.g. "tom yum soup"
        name: String,
        /// Save the result to your personal list
        #[arg(long)]
        save: bool,
    },
    /// Manage your locally saved recipes
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },
    /// Show the shared spreadsheet listing
    Cloud,
}

#[derive(Subcommand, Debug)]
enum SavedCommand {
    /// List saved recipes, most recent first
    List,
    /// Remove the recipe at the given index (asks for confirmation)
    Remove { index: usize },
}

/// y/N prompt on stdin, gating removals.
struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => matches!(line.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ChefError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        Command::Generate {
            submitter,
            year,
            department,
            ingredients,
            method,
            media,
            style,
            pick,
        } => {
            let request = GenerationRequest {
                submitter,
                year,
                department,
                ingredients,
                method,
                media,
                style,
            };
            let candidates = generate_recipes(&config, &request).await?;

            for (i, recipe) in candidates.iter().enumerate() {
                println!("--- Option {} ---", i + 1);
                println!("{}", recipe.title);
                println!("Ingredients: {}", recipe.ingredients);
                println!("Steps: {}\n", recipe.instructions);
            }

            if let Some(n) = pick {
                let chosen = candidates
                    .get(n.wrapping_sub(1))
                    .ok_or(ChefError::InvalidIndex(n))?;

                // The relay is best effort; the local save happens either way.
                let relay = SheetRelay::new(&config)?;
                match relay.submit(chosen).await {
                    Ok(_) => println!("Dispatched \"{}\" to the shared sheet.", chosen.title),
                    Err(e) => eprintln!("Relay failed ({e}); saving locally anyway."),
                }

                let mut store = LocalStore::open(&config.store_path);
                match store.save(chosen.clone())? {
                    SaveOutcome::Saved => println!("Saved to your personal list."),
                    SaveOutcome::AlreadySaved => println!("You already saved this recipe."),
                }
            }
        }

        Command::Quick { name, save } => {
            let recipe = quick_recipe(&config, &name).await?;
            println!("{}\n", recipe.title);
            println!("{}", strip_markers(&recipe.instructions).trim());

            if save {
                let mut store = LocalStore::open(&config.store_path);
                match store.save(recipe)? {
                    SaveOutcome::Saved => println!("\nSaved to your personal list."),
                    SaveOutcome::AlreadySaved => println!("\nYou already saved this recipe."),
                }
            }
        }

        Command::Saved { command } => {
            let mut store = LocalStore::open(&config.store_path);
            match command {
                SavedCommand::List => {
                    if store.is_empty() {
                        println!("No saved recipes yet.");
                    }
                    for (i, recipe) in store.recipes().iter().enumerate() {
                        println!(
                            "[{}] {} - by {} ({})",
                            i,
                            recipe.title,
                            recipe.submitter,
                            recipe.timestamp.as_deref().unwrap_or("-")
                        );
                    }
                }
                SavedCommand::Remove { index } => {
                    match store.remove(index, &StdinConfirmation)? {
                        RemoveOutcome::Removed => println!("Removed."),
                        RemoveOutcome::Declined => println!("Kept."),
                    }
                }
            }
        }

        Command::Cloud => {
            let relay = SheetRelay::new(&config)?;
            let entries = relay.fetch_entries().await?;
            if entries.is_empty() {
                println!("The shared listing is empty.");
            }
            for recipe in &entries {
                println!(
                    "{} | {} | {}/{} | {} | {}",
                    recipe.timestamp.as_deref().unwrap_or("-"),
                    recipe.submitter,
                    recipe.year,
                    recipe.department,
                    recipe.title,
                    recipe.style
                );
            }
        }
    }

    Ok(())
}
