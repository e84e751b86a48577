//! `commands::quantity` module
//!
//! Reads a quantity and an item title out of argument tokens, for the commands
//! that move or consume items.

use crate::lexical::{is_plural, parse_count, singularize};
use crate::outcome::{Outcome, StackSource};

/// How many items a command asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedQuantity {
    Exact(u32),
    /// Everything available, settled once the source is known.
    All,
    Invalid,
}

/// What a plural noun with no quantifier means to the calling command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarePlural {
    /// "DRINK health potions": all of them.
    MeansAll,
    /// "DROP coins": how many?
    Unclear,
}

/// Split tokens into a quantity and a singular item title.
///
/// - a count ("3", "three") must agree in number with the noun that follows
/// - "a"/"an" means one, and needs a singular noun
/// - "the" with a plural noun means all of them, with a singular noun one
/// - a bare singular noun means one
/// - a bare plural noun is settled by `bare_plural`
pub fn parse_quantity(tokens: &[String], bare_plural: BarePlural) -> (ParsedQuantity, String) {
    let Some((first, rest)) = tokens.split_first() else {
        return (ParsedQuantity::Invalid, String::new());
    };
    let noun_is_plural = |words: &[String]| words.last().is_some_and(|w| is_plural(w));
    let title = |words: &[String], plural: bool| {
        let joined = words.join(" ");
        if plural {
            singularize(&joined).to_string()
        } else {
            joined
        }
    };

    if let Some(count) = parse_count(first) {
        if rest.is_empty() {
            return (ParsedQuantity::Invalid, String::new());
        }
        let plural = noun_is_plural(rest);
        let agrees = match count {
            0 => false,
            1 => !plural,
            _ => plural,
        };
        let quantity = if agrees {
            ParsedQuantity::Exact(count)
        } else {
            ParsedQuantity::Invalid
        };
        return (quantity, title(rest, plural));
    }

    match first.as_str() {
        "a" | "an" if !rest.is_empty() => {
            let plural = noun_is_plural(rest);
            let quantity = if plural {
                ParsedQuantity::Invalid
            } else {
                ParsedQuantity::Exact(1)
            };
            (quantity, title(rest, plural))
        },
        "the" if !rest.is_empty() => {
            let plural = noun_is_plural(rest);
            let quantity = if plural {
                ParsedQuantity::All
            } else {
                ParsedQuantity::Exact(1)
            };
            (quantity, title(rest, plural))
        },
        _ => {
            let plural = noun_is_plural(tokens);
            let quantity = match (plural, bare_plural) {
                (false, _) => ParsedQuantity::Exact(1),
                (true, BarePlural::MeansAll) => ParsedQuantity::All,
                (true, BarePlural::Unclear) => ParsedQuantity::Invalid,
            };
            (quantity, title(tokens, plural))
        },
    }
}

/// Settle a parsed quantity against what is actually available.
pub fn settle_quantity(
    quantity: ParsedQuantity,
    title: &str,
    available: u32,
    source: StackSource,
) -> Result<u32, Outcome> {
    match quantity {
        ParsedQuantity::Invalid => Err(Outcome::QuantityUnclear),
        ParsedQuantity::All => Ok(available),
        ParsedQuantity::Exact(requested) if requested > available => Err(Outcome::QuantityExceedsAvailable {
            title: title.to_string(),
            requested,
            available,
            source,
        }),
        ParsedQuantity::Exact(requested) => Ok(requested),
    }
}
