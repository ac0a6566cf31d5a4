//! Location slug normalization.
//!
//! Collapses the textual variants of a place name ("Saint Louis, MO",
//! "st louis mo", "St. Louis MO") to one canonical, URL-safe slug. Two inputs
//! that normalize to the same slug refer to the same canonical resource.

/// Whole-token alias contractions applied during normalization.
///
/// The substitution is unconditional: a place literally named "Saint" would
/// be rewritten too. Extend the table here if that ever needs a curated
/// exception list.
pub const ALIASES: &[(&str, &str)] = &[("saint", "st"), ("fort", "ft")];

/// Normalize a free-form city/state string into a canonical slug.
///
/// Lowercases, treats every non-alphanumeric character as a separator,
/// applies the whole-token [`ALIASES`] contractions, and joins the remaining
/// tokens with single dashes. Total and idempotent:
/// `normalize(normalize(s)) == normalize(s)` for every `s`, and empty input
/// yields an empty slug.
pub fn normalize(input: &str) -> String {
  let lowered = input.to_lowercase();
  lowered
    .split(|c: char| !c.is_alphanumeric())
    .filter(|token| !token.is_empty())
    .map(resolve_alias)
    .collect::<Vec<_>>()
    .join("-")
}

/// Whole-token lookup against [`ALIASES`]; partial matches ("saintly") are
/// left alone.
fn resolve_alias(token: &str) -> &str {
  for (alias, canonical) in ALIASES {
    if token == *alias {
      return canonical;
    }
  }
  token
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn saint_contracts_to_st() {
    assert_eq!(normalize("saint louis mo"), "st-louis-mo");
    assert_eq!(normalize("Saint Paul, MN"), "st-paul-mn");
  }

  #[test]
  fn fort_contracts_to_ft() {
    assert_eq!(normalize("fort worth tx"), "ft-worth-tx");
    assert_eq!(normalize("Fort Lauderdale, FL"), "ft-lauderdale-fl");
  }

  #[test]
  fn whitespace_runs_collapse_to_single_dash() {
    assert_eq!(normalize("Los  Angeles  CA"), "los-angeles-ca");
    assert_eq!(normalize("  New   York , NY  "), "new-york-ny");
  }

  #[test]
  fn punctuation_acts_as_separator() {
    assert_eq!(normalize("St. Louis, MO"), "st-louis-mo");
    assert_eq!(normalize("Winston-Salem, NC"), "winston-salem-nc");
  }

  #[test]
  fn partial_token_is_not_aliased() {
    assert_eq!(normalize("saintly springs"), "saintly-springs");
    assert_eq!(normalize("fortuna ca"), "fortuna-ca");
  }

  #[test]
  fn empty_and_separator_only_inputs_yield_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("  ,.- "), "");
  }

  #[test]
  fn idempotent() {
    for input in [
      "Saint Louis, MO",
      "fort worth tx",
      "Los  Angeles  CA",
      "already-canonical-slug",
      "",
      "Winston-Salem, NC",
    ] {
      let once = normalize(input);
      assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
    }
  }
}
