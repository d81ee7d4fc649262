use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub(crate) enum Error {
  #[snafu(display("response has no `{relation}` control"))]
  ControlMissing {
    backtrace: Option<Backtrace>,
    relation: String,
  },
  #[snafu(display("deserializing response from {url} failed"))]
  Deserialize {
    backtrace: Option<Backtrace>,
    source: serde_json::Error,
    url: Url,
  },
  #[snafu(display("the {view} view has no form"))]
  Form {
    backtrace: Option<Backtrace>,
    view: View,
  },
  #[snafu(display("invalid href `{href}`"))]
  Href {
    backtrace: Option<Backtrace>,
    href: String,
  },
  #[snafu(display("invalid `Location` header in response from {url}"))]
  Location {
    backtrace: Option<Backtrace>,
    source: reqwest::header::ToStrError,
    url: Url,
  },
  #[snafu(display("unsupported form method `{method}`"))]
  Method {
    backtrace: Option<Backtrace>,
    method: String,
  },
  #[snafu(display("`{field}` must be a number, not `{value}`"))]
  Number {
    backtrace: Option<Backtrace>,
    field: String,
    value: String,
  },
  #[snafu(display("failed to open `{url}`"))]
  Open {
    backtrace: Option<Backtrace>,
    source: io::Error,
    url: String,
  },
  #[snafu(display("no relation `{relation}` leads out of the {view} view"))]
  Relation {
    backtrace: Option<Backtrace>,
    relation: String,
    view: View,
  },
  #[snafu(display("request to {url} failed"))]
  Request {
    backtrace: Option<Backtrace>,
    source: reqwest::Error,
    url: Url,
  },
  #[snafu(display("I/O error initializing async runtime"))]
  Runtime {
    backtrace: Option<Backtrace>,
    source: io::Error,
  },
  #[snafu(display("control has no form schema"))]
  SchemaMissing { backtrace: Option<Backtrace> },
  #[snafu(display("I/O error serving on {address}"))]
  Serve {
    address: SocketAddr,
    backtrace: Option<Backtrace>,
    source: io::Error,
  },
  #[snafu(display("response from {url} failed with {status}"))]
  Status {
    backtrace: Option<Backtrace>,
    message: Option<String>,
    status: StatusCode,
    url: Url,
  },
}

impl Error {
  pub(crate) fn report(&self) {
    eprintln!("error: {self}");

    for (i, err) in self.iter_chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {err}");
    }

    if let Some(backtrace) = self.backtrace() {
      if backtrace.status() == BacktraceStatus::Captured {
        eprintln!();
        eprintln!("backtrace:");
        eprintln!("{backtrace}");
      }
    }
  }

  pub(crate) fn message(&self) -> String {
    match self {
      Self::Status {
        message: Some(message),
        ..
      } => message.clone(),
      _ => self.to_string(),
    }
  }
}
