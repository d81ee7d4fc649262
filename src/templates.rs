use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "console.html")]
pub(crate) struct ConsoleHtml {
  pub(crate) page: Page,
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::page::{NavLink, Row},
  };

  fn html(page: Page) -> String {
    ConsoleHtml { page }.to_string()
  }

  #[test]
  fn error_notifications_render_verbatim_in_an_error_element() {
    let rendered = html(Page::failure(
      &error::Status {
        message: Some("Movie not found".to_string()),
        status: StatusCode::NOT_FOUND,
        url: "http://127.0.0.1/api/movies/x/".parse::<Url>().unwrap(),
      }
      .build(),
    ));

    assert!(
      rendered.contains(r#"<p class="error">Movie not found</p>"#),
      "{rendered}",
    );
  }

  #[test]
  fn success_notifications_render_in_a_message_element() {
    let rendered = html(Page::message("Successful"));

    assert!(
      rendered.contains(r#"<p class="msg">Successful</p>"#),
      "{rendered}",
    );
  }

  #[test]
  fn field_values_are_escaped() {
    let page = Page {
      rows: vec![Row {
        cells: vec!["<script>alert(1)</script>".into()],
        href: "/api/movies/m1/".into(),
        view: View::MovieItem,
      }],
      columns: &["Title"],
      title: "All movies".into(),
      ..Page::default()
    };

    let rendered = html(page);

    assert!(!rendered.contains("<script>alert(1)</script>"), "{rendered}");
    assert!(
      rendered.contains("&lt;script&gt;alert(1)&lt;/script&gt;"),
      "{rendered}",
    );
  }

  #[test]
  fn navigation_links_route_through_the_console() {
    let page = Page {
      links: vec![NavLink {
        href: "/api/movies/".into(),
        label: "all movies".into(),
        view: View::Movies,
      }],
      title: "Movie Tracker".into(),
      ..Page::default()
    };

    let rendered = html(page);

    assert!(
      rendered.contains(r#"<a href="/browse?view=movies&amp;url=%2Fapi%2Fmovies%2F">all movies</a>"#),
      "{rendered}",
    );
  }

  #[test]
  fn tables_render_a_header_and_one_row_per_item() {
    let page = Page {
      columns: &["Title", "Actors"],
      rows: vec![
        Row {
          cells: vec!["The Avengers".into(), "Robert Downey Jr.".into()],
          href: "/api/movies/m1/".into(),
          view: View::MovieItem,
        },
        Row {
          cells: vec!["Sherlock Holmes".into(), "Robert Downey Jr.".into()],
          href: "/api/movies/m2/".into(),
          view: View::MovieItem,
        },
      ],
      title: "All movies".into(),
      ..Page::default()
    };

    let rendered = html(page);

    assert_eq!(rendered.matches("<th>").count(), 3);
    assert_eq!(rendered.matches("<tr>").count(), 3);
    assert!(rendered.contains(">show</a>"), "{rendered}");
  }

  #[test]
  fn forms_render_labeled_inputs_and_a_delete_action_for_edits() {
    let control: Control = serde_json::from_value(serde_json::json!({
      "href": "/api/movies/m1/",
      "method": "PUT",
      "schema": {
        "properties": {
          "title": {"description": "Movie name"},
          "score": {"description": "IMDb score of the movie"}
        },
        "required": ["title"]
      }
    }))
    .unwrap();

    let envelope: Envelope = serde_json::from_value(serde_json::json!({
      "title": "The Avengers",
      "score": 8.0
    }))
    .unwrap();

    let page = Page {
      form: Some(FormSpec::new(&control, View::MovieItem, Some(&envelope)).unwrap()),
      title: "The Avengers".into(),
      ..Page::default()
    };

    let rendered = html(page);

    assert!(rendered.contains("<label>Movie name</label>"), "{rendered}");
    assert!(
      rendered.contains(r#"<input type="text" name="title" value="The Avengers" required>"#),
      "{rendered}",
    );
    assert!(
      rendered.contains(r#"<input type="text" name="score" value="8.0">"#),
      "{rendered}",
    );
    assert!(
      rendered.contains(r#"action="/delete?url=%2Fapi%2Fmovies%2Fm1%2F""#),
      "{rendered}",
    );
  }

  #[test]
  fn empty_pages_render_no_table_header_or_form() {
    let rendered = html(Page {
      title: "Movie Tracker".into(),
      ..Page::default()
    });

    assert!(!rendered.contains("<th>"));
    assert!(!rendered.contains("<form"));
    assert!(rendered.contains(r#"<h1><a href="/">Movie Tracker</a></h1>"#));
  }
}
