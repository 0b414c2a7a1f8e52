//! Locale-style string collation.
//!
//! Three passes, like a UCA collator at default strength: base letters
//! first (case and accents ignored), then accents, then case with lowercase
//! ahead of uppercase. Whitespace sorts before punctuation, punctuation
//! before digits, digits before letters. Exact code-point order breaks any
//! remaining tie so the result is a total order.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Punct,
    Digit,
    Letter,
}

#[derive(Debug, Clone, Copy)]
struct Weight {
    class: Class,
    base: char,
    accented: bool,
    upper: bool,
}

fn weigh(c: char) -> Weight {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let base = strip_accent(lower);
    let class = if c.is_whitespace() {
        Class::Space
    } else if c.is_numeric() {
        Class::Digit
    } else if c.is_alphabetic() {
        Class::Letter
    } else {
        Class::Punct
    };
    Weight {
        class,
        base,
        accented: base != lower,
        upper: c.is_uppercase(),
    }
}

fn strip_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Compare two strings the way a user expects a name column to sort.
pub fn collate(a: &str, b: &str) -> Ordering {
    let wa: Vec<Weight> = a.chars().map(weigh).collect();
    let wb: Vec<Weight> = b.chars().map(weigh).collect();

    let primary = |w: &Weight| (w.class, w.base);
    wa.iter()
        .map(primary)
        .cmp(wb.iter().map(primary))
        .then_with(|| wa.iter().map(|w| w.accented).cmp(wb.iter().map(|w| w.accented)))
        .then_with(|| wa.iter().map(|w| w.upper).cmp(wb.iter().map(|w| w.upper)))
        .then_with(|| a.cmp(b))
}
