//! Lexical helpers: number words, plurals, articles and list joining.

const ONES: [&str; 19] = [
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = ["twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];

/// Convert a number word from "one" to "ninety-nine" into its value.
pub fn lexical_number_to_digits(word: &str) -> Option<u32> {
    let word = word.to_lowercase();
    let ones = |w: &str| ONES.iter().position(|o| *o == w).map(|i| i as u32 + 1);
    let tens = |w: &str| TENS.iter().position(|t| *t == w).map(|i| (i as u32 + 2) * 10);

    if let Some(value) = ones(&word).or_else(|| tens(&word)) {
        return Some(value);
    }
    let (high, low) = word.split_once('-')?;
    let low = ones(low).filter(|v| *v < 10)?;
    Some(tens(high)? + low)
}

/// Parse a digit string or a number word.
pub fn parse_count(word: &str) -> Option<u32> {
    if word.chars().all(|c| c.is_ascii_digit()) && !word.is_empty() {
        word.parse().ok()
    } else {
        lexical_number_to_digits(word)
    }
}

pub fn is_plural(word: &str) -> bool {
    word.len() > 1 && word.ends_with('s')
}

/// Drop one trailing "s".
pub fn singularize(title: &str) -> &str {
    title.strip_suffix('s').unwrap_or(title)
}

/// Title with an "s" appended when `quantity` isn't one.
pub fn pluralize(title: &str, quantity: u32) -> String {
    if quantity == 1 {
        title.to_string()
    } else {
        format!("{title}s")
    }
}

pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// "a sword", "3 gold coins".
pub fn quantified(title: &str, quantity: u32) -> String {
    if quantity == 1 {
        format!("{} {title}", indefinite_article(title))
    } else {
        format!("{quantity} {}", pluralize(title, quantity))
    }
}

/// Join words as "a", "a and b", or "a, b and c".
pub fn join_with_conjunction<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();
            format!("{} {conjunction} {}", head.join(", "), last.as_ref())
        },
    }
}
