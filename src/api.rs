use {super::*, bytes::Bytes, reqwest::header};

pub(crate) struct Api {
  base: Url,
  client: reqwest::Client,
}

impl Api {
  const ACCEPT: &'static str = "application/vnd.mason+json, application/json";

  pub(crate) fn new(base: Url) -> Self {
    Self {
      base,
      client: reqwest::Client::new(),
    }
  }

  fn url(&self, href: &str) -> Result<Url> {
    self.base.join(href).ok().context(error::Href { href })
  }

  pub(crate) async fn fetch(&self, href: &str) -> Result<Envelope> {
    let url = self.url(href)?;

    log::debug!("GET {url}");

    let response = self
      .client
      .get(url.clone())
      .header(header::ACCEPT, Self::ACCEPT)
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let body = Self::body(url.clone(), response).await?;

    serde_json::from_slice(&body).context(error::Deserialize { url })
  }

  pub(crate) async fn submit(
    &self,
    href: &str,
    method: Method,
    payload: &Map<String, Value>,
  ) -> Result<Option<String>> {
    let url = self.url(href)?;

    log::info!("{method} {url}");

    let response = self
      .client
      .request(method, url.clone())
      .header(header::CONTENT_TYPE, "application/json")
      .body(Value::Object(payload.clone()).to_string())
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let location = response
      .headers()
      .get(header::LOCATION)
      .map(|location| location.to_str().map(str::to_owned))
      .transpose()
      .context(error::Location { url: url.clone() })?;

    Self::body(url, response).await?;

    Ok(location)
  }

  pub(crate) async fn delete(&self, href: &str) -> Result {
    let url = self.url(href)?;

    log::info!("DELETE {url}");

    let response = self
      .client
      .delete(url.clone())
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    Self::body(url, response).await?;

    Ok(())
  }

  async fn body(url: Url, response: reqwest::Response) -> Result<Bytes> {
    let status = response.status();

    let body = response
      .bytes()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    if status.is_success() {
      Ok(body)
    } else {
      error::Status {
        message: serde_json::from_slice::<ErrorEnvelope>(&body)
          .ok()
          .map(|envelope| envelope.error.message),
        status,
        url,
      }
      .fail()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test(flavor = "multi_thread")]
  async fn fetch_parses_the_envelope() {
    let stub = stub();

    let api = Api::new(stub.url.clone());

    let envelope = api.fetch("").await.unwrap();

    assert!(envelope.controls.contains_key("mt:all-movies"));

    let movies = api.fetch("/api/movies/").await.unwrap();

    assert_eq!(movies.items.len(), 2);
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn fetch_surfaces_the_server_error_message() {
    let stub = stub();

    let api = Api::new(stub.url.clone());

    let error = api.fetch("/api/movies/nope/").await.unwrap_err();

    assert_matches!(
      &error,
      Error::Status { status, message: Some(message), .. }
      if *status == StatusCode::NOT_FOUND && message == "Movie not found",
    );

    assert_eq!(error.message(), "Movie not found");
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn fetch_reports_malformed_bodies() {
    let stub = stub();

    let api = Api::new(stub.url.clone());

    assert_matches!(
      api.fetch("/garbage").await.unwrap_err(),
      Error::Deserialize { .. },
    );
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn submit_returns_the_location_of_a_created_resource() {
    let stub = stub();

    let api = Api::new(stub.url.clone());

    let mut payload = Map::new();
    payload.insert("title".into(), Value::String("Alien".into()));

    let location = api
      .submit("/api/genres/horror/movies/", Method::POST, &payload)
      .await
      .unwrap();

    let location = location.unwrap();

    assert!(location.starts_with("/api/movies/"), "{location}");

    let created = api.fetch(&location).await.unwrap();

    assert_eq!(created.text("title"), "Alien");
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn update_returns_no_location() {
    let stub = stub();

    let api = Api::new(stub.url.clone());

    let mut payload = Map::new();
    payload.insert("title".into(), Value::String("The Avengers".into()));
    payload.insert("genre".into(), Value::String("action".into()));

    let location = api
      .submit("/api/movies/m1/", Method::PUT, &payload)
      .await
      .unwrap();

    assert_eq!(location, None);
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn delete_removes_the_resource() {
    let stub = stub();

    let api = Api::new(stub.url.clone());

    api.delete("/api/movies/m1/").await.unwrap();

    assert_matches!(
      api.fetch("/api/movies/m1/").await.unwrap_err(),
      Error::Status { status, .. }
      if status == StatusCode::NOT_FOUND,
    );
  }

  #[test]
  fn hrefs_are_joined_against_the_base() {
    let api = Api::new("http://127.0.0.1:5000/api/".parse().unwrap());

    assert_eq!(
      api.url("/api/movies/m1/").unwrap().as_str(),
      "http://127.0.0.1:5000/api/movies/m1/"
    );

    assert_eq!(api.url("").unwrap().as_str(), "http://127.0.0.1:5000/api/");
  }
}
