use {
  super::*,
  axum::{
    extract::{Extension, Form, Query},
    routing::{get, post},
    Router,
  },
};

#[derive(Parser)]
pub(crate) struct Server {
  #[arg(long, help = "Listen on <ADDRESS> for incoming requests.")]
  address: SocketAddr,
  #[arg(long, help = "Browse the catalog API rooted at <URL>.")]
  api: Url,
  #[arg(long, help = "Open console in browser.")]
  open: bool,
}

pub(crate) struct Console {
  api: Api,
  marker: Mutex<Option<Marker>>,
}

#[derive(Deserialize)]
pub(crate) struct Browse {
  url: String,
  view: View,
}

#[derive(Deserialize)]
pub(crate) struct Submit {
  method: String,
  url: String,
  view: View,
}

#[derive(Deserialize)]
pub(crate) struct Delete {
  url: String,
}

impl Console {
  pub(crate) fn new(api: Api) -> Self {
    Self {
      api,
      marker: Mutex::new(None),
    }
  }

  pub(crate) async fn browse(&self, view: View, url: &str) -> Result<Page> {
    let envelope = self.api.fetch(url).await?;

    let page = Page::render(view, &envelope)?;

    if view.marks() {
      *self.marker.lock().unwrap() = Some(Marker {
        href: url.into(),
        view,
      });
    }

    Ok(page)
  }

  pub(crate) async fn submit(
    &self,
    view: View,
    url: &str,
    method: &str,
    values: &BTreeMap<String, String>,
  ) -> Result<Page> {
    let method = if method.eq_ignore_ascii_case("post") {
      Method::POST
    } else if method.eq_ignore_ascii_case("put") {
      Method::PUT
    } else {
      return error::Method { method }.fail();
    };

    let kind = view.kind().context(error::Form { view })?;

    let payload = form::payload(kind, &method, values)?;

    let location = self.api.submit(url, method.clone(), &payload).await?;

    let target = match location {
      Some(location) => location,
      None if method == Method::PUT => url.into(),
      None => return Ok(Page::message("Successful")),
    };

    let envelope = self.api.fetch(&target).await?;

    let mut page = Page::render(view, &envelope)?;

    page.notification = Some(Notification::success("Successful"));

    Ok(page)
  }

  pub(crate) async fn delete(&self, url: &str) -> Result<Page> {
    self.api.delete(url).await?;

    let marker = self.marker.lock().unwrap().clone();

    let (view, href) = match marker {
      Some(marker) => (marker.view, marker.href),
      None => (View::Entrypoint, String::new()),
    };

    let envelope = self.api.fetch(&href).await?;

    let mut page = Page::render(view, &envelope)?;

    page.notification = Some(Notification::success("Successful"));

    Ok(page)
  }

  #[cfg(test)]
  pub(crate) fn marker(&self) -> Option<Marker> {
    self.marker.lock().unwrap().clone()
  }
}

impl Server {
  pub(crate) fn run(self) -> Result {
    let console = Arc::new(Console::new(Api::new(self.api)));

    if self.open {
      let url = format!("http://{}/", self.address);
      open::that(&url).context(error::Open { url: &url })?;
    }

    log::info!("listening on {}", self.address);

    Runtime::new().context(error::Runtime)?.block_on(async {
      axum_server::Server::bind(self.address)
        .serve(Self::router(console).into_make_service())
        .await
        .context(error::Serve {
          address: self.address,
        })
    })?;

    Ok(())
  }

  fn router(console: Arc<Console>) -> Router {
    Router::new()
      .route("/", get(Self::root))
      .route("/browse", get(Self::browse))
      .route("/submit", post(Self::submit))
      .route("/delete", post(Self::delete))
      .layer(Extension(console))
  }

  async fn root(Extension(console): Extension<Arc<Console>>) -> ConsoleHtml {
    Self::respond(console.browse(View::Entrypoint, "").await)
  }

  async fn browse(
    Extension(console): Extension<Arc<Console>>,
    Query(query): Query<Browse>,
  ) -> ConsoleHtml {
    Self::respond(console.browse(query.view, &query.url).await)
  }

  async fn submit(
    Extension(console): Extension<Arc<Console>>,
    Query(query): Query<Submit>,
    Form(values): Form<BTreeMap<String, String>>,
  ) -> ConsoleHtml {
    Self::respond(
      console
        .submit(query.view, &query.url, &query.method, &values)
        .await,
    )
  }

  async fn delete(
    Extension(console): Extension<Arc<Console>>,
    Query(query): Query<Delete>,
  ) -> ConsoleHtml {
    Self::respond(console.delete(&query.url).await)
  }

  fn respond(result: Result<Page>) -> ConsoleHtml {
    ConsoleHtml {
      page: result.unwrap_or_else(|error| {
        log::warn!("{error}");
        Page::failure(&error)
      }),
    }
  }
}
