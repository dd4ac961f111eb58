//! Text transforms: reversing, case changes, line cleanup, counting,
//! diffing, slugs, transliteration, Morse and character codes.

pub mod ascii;
pub mod case;
pub mod counter;
pub mod diff;
pub mod duplicates;
pub mod morse;
pub mod reverse;
pub mod slug;
pub mod sort;
pub mod transliterate;
