use clap::{Parser, Subcommand};
use common::{
    models::{PlayerDraft, PlayerId},
    utils::init_tracing,
};
use roster::{
    shell::{self, OutputFormat},
    Action, Config, Controller, Gesture, HttpPlayerService,
};
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[clap(author, version, about = "Puppy Bowl roster client", long_about = None)]
struct Cli {
    /// Base location of the player service, e.g. https://host/api/<cohort>
    #[clap(long, global = true)]
    api_url: Option<String>,

    #[clap(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every player on the roster
    List,

    /// Show one player's card
    Show { id: String },

    /// Add a puppy, then show the roster
    Add {
        #[clap(long)]
        name: String,
        #[clap(long)]
        breed: String,
        #[clap(long)]
        image_url: String,
    },

    /// Remove a player, then show the roster
    Remove { id: String },

    /// Interactive session over stdin
    Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }

    let service = HttpPlayerService::from_config(&config)?;
    info!(base_url = service.base_url(), "Using player service");

    let mut controller = Controller::new(service);
    controller.init().await;

    match cli.command {
        Commands::List => {}
        Commands::Show { id } => controller.perform(Action::ShowDetail(PlayerId::new(id))).await,
        Commands::Add {
            name,
            breed,
            image_url,
        } => {
            controller.fill_form(&PlayerDraft::new(name, breed, image_url));
            controller.dispatch(Gesture::Submit).await;
        }
        Commands::Remove { id } => controller.perform(Action::Delete(PlayerId::new(id))).await,
        Commands::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            return shell::run(&mut controller, stdin, &mut stdout, cli.format).await;
        }
    }

    println!("{}", shell::present(&controller, cli.format));
    Ok(())
}
