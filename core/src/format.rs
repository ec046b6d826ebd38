// storefront/src/format.rs

//! Display helpers shared by every view: prices, truncation, star ratings,
//! category labels, count badges, and input sanitizing.

/// `$` followed by the amount with two decimals.
pub fn format_price(price: f64) -> String {
  format!("${:.2}", price)
}

/// Cuts `text` to `max_chars` characters and appends `...` when it was longer.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }
  let mut out: String = text.chars().take(max_chars).collect();
  out.push_str("...");
  out
}

/// Upper-cases the first character: `"jewelery"` becomes `"Jewelery"`.
pub fn category_label(category: &str) -> String {
  let mut chars = category.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Badge text for a count; `None` hides the badge.
pub fn badge_label(count: u64) -> Option<String> {
  (count > 0).then(|| count.to_string())
}

/// Escapes `&`, `<` and `>` so user input can be echoed into markup.
pub fn sanitize_input(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for c in input.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      other => out.push(other),
    }
  }
  out
}

pub const MAX_STARS: u8 = 5;

/// A rating rounded to the nearest half star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
  pub full: u8,
  pub half: u8,
  pub empty: u8,
}

impl StarRating {
  pub fn from_rate(rate: f64) -> Self {
    let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, f64::from(MAX_STARS)) };
    let rounded = (rate * 2.0).round() / 2.0;
    let full = rounded.floor() as u8;
    let half = u8::from(rounded - rounded.floor() >= 0.5);
    Self {
      full,
      half,
      empty: MAX_STARS - full - half,
    }
  }

  pub fn render(&self) -> String {
    let mut out = String::new();
    out.extend(std::iter::repeat('★').take(self.full as usize));
    out.extend(std::iter::repeat('½').take(self.half as usize));
    out.extend(std::iter::repeat('☆').take(self.empty as usize));
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prices_have_two_decimals() {
    assert_eq!(format_price(10.0), "$10.00");
    assert_eq!(format_price(109.95), "$109.95");
    assert_eq!(format_price(0.0), "$0.00");
  }

  #[test]
  fn truncation_counts_characters() {
    assert_eq!(truncate_text("short", 20), "short");
    assert_eq!(truncate_text("Mens Casual Premium Slim Fit T-Shirts", 20), "Mens Casual Premium ...");
    assert_eq!(truncate_text("ééééé", 2), "éé...");
  }

  #[test]
  fn star_rating_rounds_to_half() {
    assert_eq!(StarRating::from_rate(3.9), StarRating { full: 4, half: 0, empty: 1 });
    assert_eq!(StarRating::from_rate(3.3), StarRating { full: 3, half: 1, empty: 1 });
    assert_eq!(StarRating::from_rate(7.0), StarRating { full: 5, half: 0, empty: 0 });
    assert_eq!(StarRating::from_rate(2.4).render(), "★★½☆☆");
  }

  #[test]
  fn labels_and_badges() {
    assert_eq!(category_label("men's clothing"), "Men's clothing");
    assert_eq!(category_label(""), "");
    assert_eq!(badge_label(0), None);
    assert_eq!(badge_label(3), Some("3".to_string()));
  }

  #[test]
  fn sanitize_escapes_markup() {
    assert_eq!(sanitize_input("a<b>&c"), "a&lt;b&gt;&amp;c");
  }
}
