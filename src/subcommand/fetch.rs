use super::*;

#[derive(Parser)]
pub(crate) struct Fetch {
  #[arg(long, help = "Fetch from the catalog API rooted at <URL>.")]
  api: Url,
  #[arg(help = "Fetch <PATH>, relative to the API root.")]
  path: Option<String>,
}

impl Fetch {
  pub(crate) fn run(self) -> Result {
    let api = Api::new(self.api);

    let envelope = Runtime::new()
      .context(error::Runtime)?
      .block_on(api.fetch(self.path.as_deref().unwrap_or_default()))?;

    for (prefix, namespace) in &envelope.namespaces {
      println!("@{prefix}: {}", namespace.name);
    }

    for name in envelope.fields.keys() {
      println!("{name}: {}", envelope.text(name));
    }

    for (relation, control) in &envelope.controls {
      let method = control.method.as_deref().unwrap_or("GET");

      match &control.title {
        Some(title) => println!("{relation}: {method} {} ({title})", control.href),
        None => println!("{relation}: {method} {}", control.href),
      }
    }

    if !envelope.items.is_empty() {
      println!("items: {}", envelope.items.len());
    }

    Ok(())
  }
}
