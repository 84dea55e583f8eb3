use clap::{Parser, ValueEnum};
use log::{debug, info, warn};

use cocktail_finder::pairings::{
    render_beer_lists, render_beer_pairings, render_wine_lists, render_wine_pairings,
};
use cocktail_finder::render::{render_page, render_text};
use cocktail_finder::{
    load_beers_or_log, load_wines_or_log, Category, Command, DataLoader, Finder, FinderConfig,
    MatchMode,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL or directory holding the JSON data files
    source: Option<String>,

    /// Category to browse (cocktails or mocktails)
    #[arg(long)]
    category: Option<Category>,

    /// Ingredient to filter by, may be repeated
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,

    /// How several ingredients combine (any, all or only)
    #[arg(long)]
    mode: Option<MatchMode>,

    /// Open the detail view for this drink
    #[arg(long)]
    drink: Option<String>,

    /// Show food pairings for this beer
    #[arg(long)]
    beer: Option<String>,

    /// Show food pairings for this wine, or the first red wine when no name is given
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    wine: Option<String>,

    #[arg(long, value_enum, default_value = "html")]
    format: Format,
}

impl Args {
    /// The command sequence a user would click through for these arguments.
    fn commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();
        if let Some(category) = self.category {
            commands.push(Command::SwitchCategory(category));
        }
        if let Some(mode) = self.mode {
            commands.push(Command::SetMatchMode(mode));
        }
        for ingredient in &self.ingredients {
            commands.push(Command::AddIngredient(ingredient.clone()));
        }
        if let Some(drink) = &self.drink {
            commands.push(Command::SelectDrink(drink.clone()));
        }
        commands
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = FinderConfig::load()?;
    if let Some(source) = &args.source {
        config.data.source = source.clone();
    }
    debug!("{:#?}", config);

    let loader = DataLoader::from_config(&config)?;
    info!("Reading data from {}", loader.source());
    let mut finder = Finder::new(config.default_category, config.default_match_mode);
    finder.install_catalog(loader.load_catalog_or_fallback().await);

    for command in args.commands() {
        finder.dispatch(command);
    }

    if let Some(name) = &args.drink {
        if finder.detail().is_none() {
            warn!("No {} named '{}'", finder.category(), name);
        }
    }

    match args.format {
        Format::Html => println!("{}", render_page(&finder)),
        Format::Text => print!("{}", render_text(&finder)),
    }

    if let Some(name) = &args.beer {
        if let Some(beers) = load_beers_or_log(&loader).await {
            let beer = beers.find(name);
            println!(
                "{}",
                render_beer_lists(&beers, beer.map(|b| b.name.as_str()))
            );
            match beer {
                Some(beer) => println!("<div id=\"pairingsBox\">{}</div>", render_beer_pairings(beer)),
                None => warn!("No beer named '{}'", name),
            }
        }
    }

    if let Some(name) = &args.wine {
        if let Some(wines) = load_wines_or_log(&loader).await {
            let wine = if name.is_empty() {
                wines.initial_selection()
            } else {
                wines.find(name)
            };
            println!(
                "{}",
                render_wine_lists(&wines, wine.map(|w| w.name.as_str()))
            );
            match wine {
                Some(wine) => println!(
                    "<div id=\"winePairingsBox\">{}</div>",
                    render_wine_pairings(wine)
                ),
                None => warn!("No wine named '{}'", name),
            }
        }
    }

    Ok(())
}
