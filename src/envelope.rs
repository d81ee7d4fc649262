use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
  #[serde(rename = "@controls", default)]
  pub(crate) controls: BTreeMap<String, Control>,
  #[serde(default)]
  pub(crate) items: Vec<Envelope>,
  #[serde(rename = "@namespaces", default)]
  pub(crate) namespaces: BTreeMap<String, Namespace>,
  #[serde(flatten)]
  pub(crate) fields: Map<String, Value>,
}

impl Envelope {
  pub(crate) fn control(&self, relation: &str) -> Result<&Control> {
    self
      .controls
      .get(relation)
      .context(error::ControlMissing { relation })
  }

  pub(crate) fn text(&self, field: &str) -> String {
    match self.fields.get(field) {
      None | Some(Value::Null) => String::new(),
      Some(Value::String(text)) => text.clone(),
      Some(value) => value.to_string(),
    }
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Namespace {
  pub(crate) name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Control {
  pub(crate) href: String,
  #[serde(default)]
  pub(crate) method: Option<String>,
  #[serde(default)]
  pub(crate) title: Option<String>,
  #[serde(default)]
  pub(crate) schema: Option<Schema>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Schema {
  #[serde(default)]
  pub(crate) properties: Map<String, Value>,
  #[serde(default)]
  pub(crate) required: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
  #[serde(rename = "@error")]
  pub(crate) error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
  #[serde(rename = "@message")]
  pub(crate) message: String,
}
