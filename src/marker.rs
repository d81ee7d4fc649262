use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Marker {
  pub(crate) href: String,
  pub(crate) view: View,
}
