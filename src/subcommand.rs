use {
  super::*,
  clap::builder::{
    styling::{AnsiColor, Effects},
    Styles,
  },
  tokio::runtime::Runtime,
};

mod fetch;
mod server;

#[derive(Parser)]
#[command(
  version,
  styles = Styles::styled()
    .header(AnsiColor::Green.on_default() | Effects::BOLD)
    .usage(AnsiColor::Green.on_default() | Effects::BOLD)
    .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
    .placeholder(AnsiColor::Cyan.on_default()))
]
pub(crate) enum Subcommand {
  Fetch(fetch::Fetch),
  Server(server::Server),
}

impl Subcommand {
  pub(crate) fn run(self) -> Result {
    match self {
      Self::Fetch(fetch) => fetch.run(),
      Self::Server(server) => server.run(),
    }
  }
}
