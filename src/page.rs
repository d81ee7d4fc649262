use super::*;

const GENRE_COLUMNS: &[&str] = &["Name"];
const MOVIE_COLUMNS: &[&str] = &["Title", "Actors", "Release Date", "Score", "Genre"];
const SERIES_COLUMNS: &[&str] = &["Title", "Actors", "Release Date", "Score", "Seasons", "Genre"];

#[derive(Debug, Default)]
pub(crate) struct Page {
  pub(crate) columns: &'static [&'static str],
  pub(crate) form: Option<FormSpec>,
  pub(crate) links: Vec<NavLink>,
  pub(crate) notification: Option<Notification>,
  pub(crate) rows: Vec<Row>,
  pub(crate) title: String,
}

#[derive(Debug)]
pub(crate) struct NavLink {
  pub(crate) href: String,
  pub(crate) label: String,
  pub(crate) view: View,
}

impl NavLink {
  pub(crate) fn target(&self) -> String {
    format!(
      "/browse?view={}&url={}",
      self.view,
      urlencoding::encode(&self.href)
    )
  }
}

#[derive(Debug)]
pub(crate) struct Row {
  pub(crate) cells: Vec<String>,
  pub(crate) href: String,
  pub(crate) view: View,
}

impl Row {
  pub(crate) fn target(&self) -> String {
    format!(
      "/browse?view={}&url={}",
      self.view,
      urlencoding::encode(&self.href)
    )
  }
}

#[derive(Debug, PartialEq)]
pub(crate) struct Notification {
  pub(crate) error: bool,
  pub(crate) message: String,
}

impl Notification {
  pub(crate) fn success(message: &str) -> Self {
    Self {
      error: false,
      message: message.into(),
    }
  }

  pub(crate) fn error(message: String) -> Self {
    Self {
      error: true,
      message,
    }
  }
}

impl Page {
  pub(crate) fn render(view: View, envelope: &Envelope) -> Result<Self> {
    match view {
      View::Entrypoint => Self::entrypoint(envelope),
      View::Movies => Self::movies(envelope),
      View::MoviesByGenre => Self::movies_by_genre(envelope),
      View::MovieItem => Self::movie_item(envelope),
      View::Series => Self::series(envelope),
      View::SeriesByGenre => Self::series_by_genre(envelope),
      View::SeriesItem => Self::series_item(envelope),
      View::Genres => Self::genres(envelope),
      View::GenreItem => Self::genre_item(envelope),
    }
  }

  pub(crate) fn failure(error: &Error) -> Self {
    Self {
      notification: Some(Notification::error(error.message())),
      title: "Movie Tracker".into(),
      ..Self::default()
    }
  }

  pub(crate) fn message(message: &str) -> Self {
    Self {
      notification: Some(Notification::success(message)),
      title: "Movie Tracker".into(),
      ..Self::default()
    }
  }

  fn entrypoint(envelope: &Envelope) -> Result<Self> {
    Ok(Self {
      links: vec![
        link(View::Entrypoint, envelope, "mt:all-movies", "all movies")?,
        link(View::Entrypoint, envelope, "mt:all-series", "all series")?,
        link(View::Entrypoint, envelope, "mt:all-genres", "all genres")?,
      ],
      title: "Movie Tracker".into(),
      ..Self::default()
    })
  }

  fn movies(envelope: &Envelope) -> Result<Self> {
    Ok(Self {
      columns: MOVIE_COLUMNS,
      links: vec![link(View::Movies, envelope, "mt:all-genres", "all genres")?],
      rows: rows(View::Movies, Kind::Movie, envelope)?,
      title: "All movies".into(),
      ..Self::default()
    })
  }

  fn movies_by_genre(envelope: &Envelope) -> Result<Self> {
    Ok(Self {
      columns: MOVIE_COLUMNS,
      form: Some(FormSpec::new(
        envelope.control("mt:add-movie")?,
        View::MovieItem,
        None,
      )?),
      links: vec![link(View::MoviesByGenre, envelope, "up", "genre")?],
      rows: rows(View::MoviesByGenre, Kind::Movie, envelope)?,
      title: format!("{} movies", capitalize(&envelope.text("name"))),
      ..Self::default()
    })
  }

  fn movie_item(envelope: &Envelope) -> Result<Self> {
    Ok(Self {
      form: Some(FormSpec::new(
        envelope.control("edit")?,
        View::MovieItem,
        Some(envelope),
      )?),
      links: vec![
        link(View::MovieItem, envelope, "collection", "all movies")?,
        link(View::MovieItem, envelope, "mt:movies-by-genre", "movies in genre")?,
      ],
      title: envelope.text("title"),
      ..Self::default()
    })
  }

  fn series(envelope: &Envelope) -> Result<Self> {
    Ok(Self {
      columns: SERIES_COLUMNS,
      links: vec![link(View::Series, envelope, "mt:all-genres", "all genres")?],
      rows: rows(View::Series, Kind::Series, envelope)?,
      title: "All series".into(),
      ..Self::default()
    })
  }

  fn series_by_genre(envelope: &Envelope) -> Result<Self> {
    Ok(Self {
      columns: SERIES_COLUMNS,
      form: Some(FormSpec::new(
        envelope.control("mt:add-series")?,
        View::SeriesItem,
        None,
      )?),
      links: vec![link(View::SeriesByGenre, envelope, "up", "genre")?],
      rows: rows(View::SeriesByGenre, Kind::Series, envelope)?,
      title: format!("{} series", capitalize(&envelope.text("name"))),
      ..Self::default()
    })
  }

  fn series_item(envelope: &Envelope) -> Result<Self> {
    Ok(Self {
      form: Some(FormSpec::new(
        envelope.control("edit")?,
        View::SeriesItem,
        Some(envelope),
      )?),
      links: vec![
        link(View::SeriesItem, envelope, "collection", "all series")?,
        link(View::SeriesItem, envelope, "mt:series-by-genre", "series in genre")?,
      ],
      title: envelope.text("title"),
      ..Self::default()
    })
  }

  fn genres(envelope: &Envelope) -> Result<Self> {
    Ok(Self {
      columns: GENRE_COLUMNS,
      links: vec![
        link(View::Genres, envelope, "mt:all-movies", "all movies")?,
        link(View::Genres, envelope, "mt:all-series", "all series")?,
      ],
      rows: rows(View::Genres, Kind::Genre, envelope)?,
      title: "All genres".into(),
      ..Self::default()
    })
  }

  fn genre_item(envelope: &Envelope) -> Result<Self> {
    Ok(Self {
      links: vec![
        link(View::GenreItem, envelope, "up", "all genres")?,
        link(View::GenreItem, envelope, "mt:movies-by-genre", "movies in genre")?,
        link(View::GenreItem, envelope, "mt:series-by-genre", "series in genre")?,
      ],
      title: capitalize(&envelope.text("name")),
      ..Self::default()
    })
  }
}

fn link(view: View, envelope: &Envelope, relation: &str, label: &str) -> Result<NavLink> {
  let target = view
    .follow(relation)
    .context(error::Relation { relation, view })?;

  Ok(NavLink {
    href: envelope.control(relation)?.href.clone(),
    label: label.into(),
    view: target,
  })
}

fn rows(view: View, kind: Kind, envelope: &Envelope) -> Result<Vec<Row>> {
  let target = view.follow("self").context(error::Relation {
    relation: "self",
    view,
  })?;

  let mut rows = Vec::new();

  for item in &envelope.items {
    rows.push(Row {
      cells: cells(kind, item),
      href: item.control("self")?.href.clone(),
      view: target,
    });
  }

  Ok(rows)
}

fn cells(kind: Kind, item: &Envelope) -> Vec<String> {
  match kind {
    Kind::Movie => vec![
      item.text("title"),
      item.text("actors"),
      item.text("release_date"),
      item.text("score"),
      item.text("genre"),
    ],
    Kind::Series => vec![
      item.text("title"),
      item.text("actors"),
      item.text("release_date"),
      item.text("score"),
      item.text("seasons"),
      item.text("genre"),
    ],
    Kind::Genre => vec![capitalize(&item.text("name"))],
  }
}

fn capitalize(text: &str) -> String {
  let mut chars = text.chars();

  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}
