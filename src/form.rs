use super::*;

#[derive(Debug)]
pub(crate) struct FormSpec {
  pub(crate) deletable: bool,
  pub(crate) fields: Vec<Field>,
  pub(crate) href: String,
  pub(crate) method: String,
  pub(crate) view: View,
}

#[derive(Debug)]
pub(crate) struct Field {
  pub(crate) label: String,
  pub(crate) name: String,
  pub(crate) required: bool,
  pub(crate) value: String,
}

impl FormSpec {
  pub(crate) fn new(control: &Control, view: View, values: Option<&Envelope>) -> Result<Self> {
    let schema = control.schema.as_ref().context(error::SchemaMissing)?;

    let mut fields = Vec::new();

    for (name, property) in &schema.properties {
      fields.push(Field {
        label: property
          .get("description")
          .and_then(Value::as_str)
          .unwrap_or(name)
          .into(),
        name: name.clone(),
        required: schema.required.iter().any(|required| required == name),
        value: values
          .map(|envelope| envelope.text(name))
          .unwrap_or_default(),
      });
    }

    let method = control.method.clone().unwrap_or_else(|| "GET".into());

    Ok(Self {
      deletable: method.eq_ignore_ascii_case("put"),
      fields,
      href: control.href.clone(),
      method,
      view,
    })
  }

  pub(crate) fn target(&self) -> String {
    format!(
      "/submit?view={}&method={}&url={}",
      self.view,
      self.method,
      urlencoding::encode(&self.href),
    )
  }

  pub(crate) fn delete_target(&self) -> String {
    format!("/delete?url={}", urlencoding::encode(&self.href))
  }
}

pub(crate) fn payload(
  kind: Kind,
  method: &Method,
  values: &BTreeMap<String, String>,
) -> Result<Map<String, Value>> {
  let mut payload = Map::new();

  for (field, value) in values {
    if value.is_empty() {
      continue;
    }

    if field == "genre" && *method != Method::PUT {
      continue;
    }

    let value = match field.as_str() {
      "score" => number(field, value)?,
      "seasons" if kind == Kind::Series => Value::from(
        value
          .parse::<i64>()
          .ok()
          .context(error::Number { field, value })?,
      ),
      _ => Value::String(value.clone()),
    };

    payload.insert(field.clone(), value);
  }

  Ok(payload)
}

fn number(field: &str, value: &str) -> Result<Value> {
  value
    .parse::<f64>()
    .ok()
    .and_then(serde_json::Number::from_f64)
    .map(Value::Number)
    .context(error::Number { field, value })
}
