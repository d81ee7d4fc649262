use super::*;

#[derive(Copy, Clone, Debug, Deserialize, Eq, IntoStaticStr, PartialEq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub(crate) enum View {
  Entrypoint,
  Movies,
  MoviesByGenre,
  MovieItem,
  Series,
  SeriesByGenre,
  SeriesItem,
  Genres,
  GenreItem,
}

impl View {
  pub(crate) fn name(self) -> &'static str {
    self.into()
  }

  pub(crate) fn follow(self, relation: &str) -> Option<Self> {
    match (self, relation) {
      (Self::Entrypoint, "mt:all-movies") => Some(Self::Movies),
      (Self::Entrypoint, "mt:all-series") => Some(Self::Series),
      (Self::Entrypoint, "mt:all-genres") => Some(Self::Genres),
      (Self::Movies, "mt:all-genres") => Some(Self::Genres),
      (Self::Movies, "self") => Some(Self::MovieItem),
      (Self::MoviesByGenre, "up") => Some(Self::GenreItem),
      (Self::MoviesByGenre, "self") => Some(Self::MovieItem),
      (Self::MovieItem, "collection") => Some(Self::Movies),
      (Self::MovieItem, "mt:movies-by-genre") => Some(Self::MoviesByGenre),
      (Self::Series, "mt:all-genres") => Some(Self::Genres),
      (Self::Series, "self") => Some(Self::SeriesItem),
      (Self::SeriesByGenre, "up") => Some(Self::GenreItem),
      (Self::SeriesByGenre, "self") => Some(Self::SeriesItem),
      (Self::SeriesItem, "collection") => Some(Self::Series),
      (Self::SeriesItem, "mt:series-by-genre") => Some(Self::SeriesByGenre),
      (Self::Genres, "mt:all-movies") => Some(Self::Movies),
      (Self::Genres, "mt:all-series") => Some(Self::Series),
      (Self::Genres, "self") => Some(Self::GenreItem),
      (Self::GenreItem, "up") => Some(Self::Genres),
      (Self::GenreItem, "mt:movies-by-genre") => Some(Self::MoviesByGenre),
      (Self::GenreItem, "mt:series-by-genre") => Some(Self::SeriesByGenre),
      _ => None,
    }
  }

  pub(crate) fn kind(self) -> Option<Kind> {
    match self {
      Self::Entrypoint => None,
      Self::Movies | Self::MoviesByGenre | Self::MovieItem => Some(Kind::Movie),
      Self::Series | Self::SeriesByGenre | Self::SeriesItem => Some(Kind::Series),
      Self::Genres | Self::GenreItem => Some(Kind::Genre),
    }
  }

  pub(crate) fn marks(self) -> bool {
    matches!(
      self,
      Self::Movies | Self::MoviesByGenre | Self::Series | Self::SeriesByGenre
    )
  }
}

impl Display for View {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Kind {
  Genre,
  Movie,
  Series,
}
