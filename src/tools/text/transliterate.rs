//! Arabic ⇄ Latin transliteration.
//!
//! The Latin side is a simplified scheme without diacritics: emphatic
//! consonants share a letter with their plain counterparts, so the
//! Latin→Arabic direction is lossy.

use crate::tools::{require_input, ToolResult};

named_options! {
    /// Transliteration direction.
    pub enum Direction {
        /// Arabic script to Latin letters
        ArabicToLatin => "arabic-to-latin",
        /// Latin letters to Arabic script
        LatinToArabic => "latin-to-arabic",
        /// Remove vowel marks, keep the letters
        StripHarakat => "strip-harakat",
    }
}

const FATHATAN: char = '\u{064B}';
const DAMMATAN: char = '\u{064C}';
const KASRATAN: char = '\u{064D}';
const FATHA: char = '\u{064E}';
const DAMMA: char = '\u{064F}';
const KASRA: char = '\u{0650}';
const SHADDA: char = '\u{0651}';
const SUKUN: char = '\u{0652}';
const SUPERSCRIPT_ALEF: char = '\u{0670}';
const TATWEEL: char = '\u{0640}';
const ALEF: char = 'ا';

/// True for the vowel marks removed by [`Direction::StripHarakat`].
pub fn is_harakah(c: char) -> bool {
    matches!(c, FATHATAN..=SUKUN | SUPERSCRIPT_ALEF)
}

fn arabic_letter(c: char) -> Option<&'static str> {
    let latin = match c {
        'ا' | 'أ' | 'ى' | 'ة' => "a",
        'آ' => "aa",
        'إ' => "i",
        'ء' | 'ؤ' | 'ئ' => "'",
        'ب' => "b",
        'ت' | 'ط' => "t",
        'ث' => "th",
        'ج' => "j",
        'ح' | 'ه' => "h",
        'خ' => "kh",
        'د' | 'ض' => "d",
        'ذ' => "dh",
        'ر' => "r",
        'ز' | 'ظ' => "z",
        'س' | 'ص' => "s",
        'ش' => "sh",
        'ع' => "`",
        'غ' => "gh",
        'ف' => "f",
        'ق' => "q",
        'ك' => "k",
        'ل' => "l",
        'م' => "m",
        'ن' => "n",
        'و' => "w",
        'ي' => "y",
        '،' => ",",
        '؟' => "?",
        '؛' => ";",
        _ => return None,
    };
    Some(latin)
}

fn arabic_to_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Latin rendering of the most recent consonant and the output offset
    // right after it. Shadda doubles it there, ahead of any vowel mark.
    let mut last_consonant: Option<(&'static str, usize)> = None;
    let mut previous: Option<char> = None;

    for c in text.chars() {
        match c {
            FATHA => out.push('a'),
            DAMMA => out.push('u'),
            KASRA => out.push('i'),
            FATHATAN => out.push_str("an"),
            DAMMATAN => out.push_str("un"),
            KASRATAN => out.push_str("in"),
            SHADDA => {
                if let Some((consonant, end)) = last_consonant.take() {
                    out.insert_str(end, consonant);
                }
            }
            SUKUN | TATWEEL => {}
            SUPERSCRIPT_ALEF => out.push('a'),
            // a written alef after fathatan or fatha carries no extra sound
            ALEF if matches!(previous, Some(FATHATAN | FATHA)) => {}
            _ => match arabic_letter(c) {
                Some(latin) => {
                    out.push_str(latin);
                    last_consonant = Some((latin, out.len()));
                }
                None => {
                    out.push(c);
                    last_consonant = None;
                }
            },
        }
        previous = Some(c);
    }
    out
}

const LATIN_DIGRAPHS: [(&str, char); 5] = [
    ("sh", 'ش'),
    ("kh", 'خ'),
    ("th", 'ث'),
    ("dh", 'ذ'),
    ("gh", 'غ'),
];

fn latin_letter(c: char) -> Option<char> {
    let arabic = match c {
        'a' | 'e' => 'ا',
        'b' | 'p' => 'ب',
        't' => 'ت',
        'j' | 'g' => 'ج',
        'h' => 'ه',
        'd' => 'د',
        'r' => 'ر',
        'z' => 'ز',
        's' | 'c' => 'س',
        'f' | 'v' => 'ف',
        'q' => 'ق',
        'k' => 'ك',
        'l' => 'ل',
        'm' => 'م',
        'n' => 'ن',
        'w' | 'u' | 'o' => 'و',
        'y' | 'i' => 'ي',
        '\'' => 'ء',
        '`' => 'ع',
        ',' => '،',
        '?' => '؟',
        ';' => '؛',
        _ => return None,
    };
    Some(arabic)
}

fn latin_to_arabic(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len() * 2);
    let mut rest = lower.as_str();

    while let Some(c) = rest.chars().next() {
        if let Some((digraph, arabic)) = LATIN_DIGRAPHS.iter().find(|(d, _)| rest.starts_with(d)) {
            out.push(*arabic);
            rest = &rest[digraph.len()..];
            continue;
        }
        match c {
            'x' => out.push_str("كس"),
            _ => out.push(latin_letter(c).unwrap_or(c)),
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Transliterates `text` in the given direction. Characters without a
/// mapping pass through unchanged.
///
/// ```
/// use utilkit::tools::text::transliterate::{transliterate, Direction};
///
/// let latin = transliterate("مُحَمَّد", Direction::ArabicToLatin).unwrap();
/// assert_eq!(latin, "muhammad");
/// ```
pub fn transliterate(text: &str, direction: Direction) -> ToolResult<String> {
    require_input(text, "Text")?;

    Ok(match direction {
        Direction::ArabicToLatin => arabic_to_latin(text),
        Direction::LatinToArabic => latin_to_arabic(text),
        Direction::StripHarakat => text
            .chars()
            .filter(|&c| !is_harakah(c) && c != TATWEEL)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, direction: Direction) -> String {
        transliterate(text, direction).unwrap()
    }

    #[test]
    fn test_arabic_to_latin_with_harakat() {
        assert_eq!(run("مَرْحَبًا", Direction::ArabicToLatin), "marhaban");
        assert_eq!(run("مُحَمَّد", Direction::ArabicToLatin), "muhammad");
        assert_eq!(run("كِتَاب", Direction::ArabicToLatin), "kitab");
    }

    #[test]
    fn test_shadda_doubles_consonant_before_vowel() {
        // fatha then shadda, and shadda then fatha
        assert_eq!(run("\u{0645}\u{064E}\u{0651}", Direction::ArabicToLatin), "mma");
        assert_eq!(run("\u{0645}\u{0651}\u{064E}", Direction::ArabicToLatin), "mma");
        assert_eq!(run("\u{0651}", Direction::ArabicToLatin), "");
    }

    #[test]
    fn test_arabic_to_latin_passthrough() {
        assert_eq!(run("سلام 123!", Direction::ArabicToLatin), "slam 123!");
    }

    #[test]
    fn test_latin_to_arabic_digraphs() {
        assert_eq!(run("Shams", Direction::LatinToArabic), "شامس");
        assert_eq!(run("khubz", Direction::LatinToArabic), "خوبز");
    }

    #[test]
    fn test_strip_harakat() {
        assert_eq!(run("مُحَمَّد", Direction::StripHarakat), "محمد");
        assert_eq!(run("abc", Direction::StripHarakat), "abc");
    }

    #[test]
    fn test_is_harakah() {
        assert!(is_harakah(FATHA));
        assert!(is_harakah(SUPERSCRIPT_ALEF));
        assert!(!is_harakah('م'));
    }
}
