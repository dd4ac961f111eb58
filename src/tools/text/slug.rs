//! URL slug generator.

use crate::tools::{require_input, ToolError, ToolResult};

/// Default word separator.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Slug options.
#[derive(Debug, Clone)]
pub struct SlugOptions {
    /// Placed between words; must not contain letters or digits
    pub separator: String,
    /// Lowercase the result
    pub lowercase: bool,
    /// Cut the slug at this many characters, never mid-separator
    pub max_length: Option<usize>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            lowercase: true,
            max_length: None,
        }
    }
}

/// ASCII replacement for common Latin letters with diacritics.
fn fold(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'æ' => "ae",
        'Æ' => "AE",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'ď' | 'đ' | 'ð' => "d",
        'Ď' | 'Đ' | 'Ð' => "D",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => "E",
        'ğ' => "g",
        'Ğ' => "G",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'Į' | 'İ' => "I",
        'ł' => "l",
        'Ł' => "L",
        'ñ' | 'ń' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => "O",
        'œ' => "oe",
        'Œ' => "OE",
        'ř' => "r",
        'Ř' => "R",
        'ś' | 'š' | 'ş' => "s",
        'Ś' | 'Š' | 'Ş' => "S",
        'ß' => "ss",
        'ť' | 'ţ' => "t",
        'Ť' | 'Ţ' => "T",
        'þ' => "th",
        'Þ' => "TH",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' | 'Ÿ' => "Y",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        _ => return None,
    };
    Some(folded)
}

/// Turns `text` into a URL slug: diacritics folded to ASCII, every run of
/// other characters collapsed into one separator, no leading or trailing
/// separator.
///
/// ```
/// use utilkit::tools::text::slug::{slugify, SlugOptions};
///
/// let slug = slugify("Crème Brûlée: 10 Tips!", &SlugOptions::default()).unwrap();
/// assert_eq!(slug, "creme-brulee-10-tips");
/// ```
pub fn slugify(text: &str, options: &SlugOptions) -> ToolResult<String> {
    require_input(text, "Text")?;
    let separator = options.separator.as_str();
    if separator.is_empty() || separator.chars().any(char::is_alphanumeric) {
        return Err(ToolError::invalid_option(format!(
            "separator '{separator}' must be non-empty and contain no letters or digits"
        )));
    }

    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if let Some(ascii) = fold(c) {
            current.push_str(ascii);
        } else if c.is_ascii_alphanumeric() {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    if words.is_empty() {
        return Err(ToolError::malformed("text has no letters or digits to slug"));
    }

    let mut slug = String::new();
    for word in &words {
        let candidate_len = if slug.is_empty() {
            word.len()
        } else {
            slug.len() + separator.len() + word.len()
        };
        if options.max_length.is_some_and(|max| candidate_len > max) {
            if slug.is_empty() {
                // first word alone is too long; cut inside it
                slug = word.chars().take(options.max_length.unwrap_or(0)).collect();
            }
            break;
        }
        if !slug.is_empty() {
            slug.push_str(separator);
        }
        slug.push_str(word);
    }

    if options.lowercase {
        slug = slug.to_lowercase();
    }
    if slug.is_empty() {
        return Err(ToolError::invalid_option("max length leaves an empty slug"));
    }
    Ok(slug)
}
