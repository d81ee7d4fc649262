#![allow(clippy::result_large_err)]

use {
  self::{
    api::Api,
    envelope::{Control, Envelope, ErrorEnvelope},
    error::Error,
    form::FormSpec,
    marker::Marker,
    page::{Notification, Page},
    subcommand::Subcommand,
    templates::ConsoleHtml,
    view::{Kind, View},
  },
  boilerplate::Boilerplate,
  clap::Parser,
  libc::EXIT_FAILURE,
  reqwest::{Method, StatusCode, Url},
  serde::Deserialize,
  serde_json::{Map, Value},
  snafu::{ErrorCompat, OptionExt, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    io,
    net::SocketAddr,
    process,
    sync::{Arc, Mutex},
  },
  strum::IntoStaticStr,
};


#[cfg(test)]
use test::*;

mod api;
mod envelope;
mod error;
mod form;
mod marker;
mod page;
mod subcommand;
mod templates;
mod view;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(err) = Subcommand::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}
