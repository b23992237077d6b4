use clap::{Parser, Subcommand};
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use seafood_catalog::render::{render_catalog, render_detail};
use seafood_catalog::views::{CatalogMsg, DetailMsg};
use seafood_catalog::{
    client_from_config, App, LinkOpener, RecipeSource, Route, SystemLinkOpener,
};

#[derive(Parser)]
#[command(name = "seafood-catalog", version, about = "Browse seafood recipes from TheMealDB")]
struct Cli {
    /// Command used to open links (defaults to the platform opener)
    #[arg(long, global = true, default_value = "")]
    opener: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the catalog
    List {
        /// Only show recipes whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Print one recipe
    Show {
        meal_id: String,
        /// Open the recipe video after printing it
        #[arg(long)]
        open_video: bool,
    },
    /// Interactive catalog and detail screens
    Browse,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let client = client_from_config()?;
    let opener = SystemLinkOpener {
        command: cli.opener,
    };
    let mut app = App::new(client, opener);

    match cli.command {
        Command::List { search } => {
            app.start();
            app.settle().await;
            if let Some(query) = search {
                app.dispatch_catalog(CatalogMsg::QueryChanged(query));
            }
            print!("{}", render_catalog(app.catalog()));
        }
        Command::Show {
            meal_id,
            open_video,
        } => {
            app.dispatch_catalog(CatalogMsg::Select { meal_id });
            app.settle().await;
            if let Some(detail) = app.detail() {
                print!("{}", render_detail(detail));
            }
            if open_video {
                app.dispatch_detail(DetailMsg::OpenVideo);
            }
        }
        Command::Browse => browse(&mut app).await?,
    }

    Ok(())
}

const BROWSE_HELP: &str =
    "/text filter | <n> open | r refresh | t retry | v video | b back | q quit";

/// Redraws after every keystroke and every fetch result, so the loading and
/// refreshing states show up while requests are out.
async fn browse<S, L>(app: &mut App<S, L>) -> Result<(), Box<dyn std::error::Error>>
where
    S: RecipeSource + 'static,
    L: LinkOpener,
{
    app.start();
    redraw(app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_input(app, line.trim()) {
                    break;
                }
            }
            applied = app.process_next() => {
                if !applied {
                    break;
                }
            }
        }
        redraw(app);
    }

    info!("Leaving browser");
    Ok(())
}

/// Returns `false` when the user asked to quit
fn handle_input<S, L>(app: &mut App<S, L>, input: &str) -> bool
where
    S: RecipeSource + 'static,
    L: LinkOpener,
{
    debug!("Input: {:?}", input);

    match (app.route().clone(), input) {
        (_, "q") => return false,
        (_, "?") | (_, "h") => println!("{}", BROWSE_HELP),
        (Route::Catalog, "r") => app.dispatch_catalog(CatalogMsg::Refresh),
        (Route::Catalog, "t") => app.dispatch_catalog(CatalogMsg::Retry),
        (Route::Catalog, query) if query.starts_with('/') => {
            app.dispatch_catalog(CatalogMsg::QueryChanged(query[1..].to_string()))
        }
        (Route::Catalog, number) => {
            let selected = number
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| app.catalog().visible().get(i).map(|r| r.id.clone()));
            match selected {
                Some(meal_id) => app.dispatch_catalog(CatalogMsg::Select { meal_id }),
                None => println!("{}", BROWSE_HELP),
            }
        }
        (Route::Detail { .. }, "v") => app.dispatch_detail(DetailMsg::OpenVideo),
        (Route::Detail { .. }, "b") => {
            app.back();
        }
        (Route::Detail { .. }, _) => println!("{}", BROWSE_HELP),
    }
    true
}

fn redraw<S, L>(app: &App<S, L>)
where
    S: RecipeSource + 'static,
    L: LinkOpener,
{
    match app.detail() {
        Some(detail) => print!("{}", render_detail(detail)),
        None => print!("{}", render_catalog(app.catalog())),
    }
}
