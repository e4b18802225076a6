use std::io::Write;

use clap::ValueEnum;
use common::models::PlayerDraft;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::{
    controller::{Controller, Gesture},
    render::{self, ALL_BUTTON, DELETE_BUTTON, INFO_BUTTON},
    service::PlayerService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored outline of the players region
    Text,
    /// The whole page as HTML
    Html,
}

pub fn present<S: PlayerService>(controller: &Controller<S>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render::outline(controller.document()),
        OutputFormat::Html => controller.document().to_html(),
    }
}

const HELP: &str = "\
commands:
  info <id>                 show one player's card
  delete <id>               remove a player from the roster
  back                      back to all players
  add <name> <breed> <url>  fill in the form and submit it
  show                      print the current view
  html                      print the page as HTML
  help                      this message
  quit                      leave";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Info(String),
    Delete(String),
    Back,
    Add(PlayerDraft),
    Show,
    Html,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<ShellCommand, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["info", id] => Ok(ShellCommand::Info(id.to_string())),
            ["delete", id] => Ok(ShellCommand::Delete(id.to_string())),
            ["back"] => Ok(ShellCommand::Back),
            ["add", name, breed, url] => Ok(ShellCommand::Add(PlayerDraft::new(*name, *breed, *url))),
            ["show"] => Ok(ShellCommand::Show),
            ["html"] => Ok(ShellCommand::Html),
            ["help"] | ["?"] => Ok(ShellCommand::Help),
            ["quit"] | ["exit"] => Ok(ShellCommand::Quit),
            [command, ..] => Err(format!("don't know how to '{}', try 'help'", command)),
            [] => Err(String::new()),
        }
    }
}

/// Reads one command per line and runs it against the controller until the
/// input ends or `quit` is read.
pub async fn run<S, R, W>(
    controller: &mut Controller<S>,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    S: PlayerService,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{}", present(controller, format))?;
    writeln!(output, "type 'help' for commands")?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(message) if message.is_empty() => continue,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        let shown = match command {
            ShellCommand::Info(id) => controller.click(INFO_BUTTON, Some(&id)).await,
            ShellCommand::Delete(id) => controller.click(DELETE_BUTTON, Some(&id)).await,
            ShellCommand::Back => controller.click(ALL_BUTTON, None).await,
            ShellCommand::Add(draft) => {
                controller.fill_form(&draft) && controller.dispatch(Gesture::Submit).await
            }
            ShellCommand::Show => true,
            ShellCommand::Html => {
                writeln!(output, "{}", present(controller, OutputFormat::Html))?;
                continue;
            }
            ShellCommand::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            ShellCommand::Quit => break,
        };

        if shown {
            writeln!(output, "{}", present(controller, format))?;
        } else {
            writeln!(output, "nothing like that on screen")?;
        }
    }

    info!("Leaving the roster shell");
    Ok(())
}
