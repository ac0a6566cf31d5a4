//! Plain-text transforms for user-generated content.
//!
//! Posting descriptions arrive as possibly HTML-bearing strings; anything
//! embedded in structured data or meta tags must be reduced to plain text
//! first. The scanner here is a hand-written character walk — the inputs are
//! small and the rules simple enough that a regex would add nothing.

/// Strip all `<...>` tags from `input`, collapse whitespace runs to single
/// spaces, and trim the ends.
///
/// Tag boundaries act as separators, so `a<br>b` becomes `a b`. A stray `>`
/// outside any tag is dropped rather than passed through: the output is
/// guaranteed to contain neither `<` nor `>`. Total — never fails, any
/// input yields a (possibly empty) string.
pub fn strip_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut in_tag = false;

  for c in input.chars() {
    match c {
      '<' => {
        in_tag = true;
        out.push(' ');
      }
      '>' => {
        in_tag = false;
        out.push(' ');
      }
      _ if in_tag => {}
      c => out.push(c),
    }
  }

  collapse_whitespace(&out)
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(input: &str) -> String {
  input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape `&`, `<`, `>`, and `"` for safe interpolation into HTML text and
/// attribute positions.
pub fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for c in input.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      c => out.push(c),
    }
  }
  out
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tags_are_removed() {
    assert_eq!(
      strip_html("<p>Busy salon seeks a <b>nail artist</b></p>"),
      "Busy salon seeks a nail artist"
    );
  }

  #[test]
  fn tag_boundaries_separate_words() {
    assert_eq!(strip_html("line one<br>line two"), "line one line two");
  }

  #[test]
  fn whitespace_runs_collapse() {
    assert_eq!(strip_html("  chair \n\n rental\t available "), "chair rental available");
  }

  #[test]
  fn output_never_contains_angle_brackets() {
    for input in [
      "<div class=\"x\">text</div>",
      "broken < tag",
      "stray > bracket",
      "a <b>b</b> > c < d",
    ] {
      let out = strip_html(input);
      assert!(!out.contains('<'), "got {out:?} for {input:?}");
      assert!(!out.contains('>'), "got {out:?} for {input:?}");
    }
  }

  #[test]
  fn plain_text_passes_through() {
    assert_eq!(strip_html("no markup here"), "no markup here");
  }

  #[test]
  fn empty_input_yields_empty_output() {
    assert_eq!(strip_html(""), "");
    assert_eq!(strip_html("<p></p>"), "");
  }

  #[test]
  fn escape_html_covers_the_reserved_set() {
    assert_eq!(
      escape_html(r#"Cuts & "Color" <fast>"#),
      "Cuts &amp; &quot;Color&quot; &lt;fast&gt;"
    );
  }
}
