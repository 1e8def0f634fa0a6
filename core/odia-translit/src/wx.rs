use crate::Transliterator;

const HALANT: char = '\u{0b4d}';
const NUKTA: char = '\u{0b3c}';

/// Consonant letters and their WX spelling. Two-letter spellings are tried
/// before single letters when reading WX.
const CONSONANTS: &[(char, &str)] = &[
    ('କ', "k"), ('ଖ', "K"), ('ଗ', "g"), ('ଘ', "G"), ('ଙ', "f"),
    ('ଚ', "c"), ('ଛ', "C"), ('ଜ', "j"), ('ଝ', "J"), ('ଞ', "F"),
    ('ଟ', "t"), ('ଠ', "T"), ('ଡ', "d"), ('ଢ', "D"), ('ଣ', "N"),
    ('ତ', "w"), ('ଥ', "W"), ('ଦ', "x"), ('ଧ', "X"), ('ନ', "n"),
    ('ପ', "p"), ('ଫ', "P"), ('ବ', "b"), ('ଭ', "B"), ('ମ', "m"),
    ('ଯ', "y"), ('ର', "r"), ('ଲ', "l"), ('ଳ', "lY"), ('ଵ', "v"),
    ('ୱ', "V"), ('ଶ', "S"), ('ଷ', "R"), ('ସ', "s"), ('ହ', "h"),
    ('ୟ', "Y"),
];

/// Precomposed nukta letters; written back in decomposed form.
const NUKTA_CONSONANTS: &[(char, &str)] = &[('\u{0b5c}', "dZ"), ('\u{0b5d}', "DZ")];

struct Vowel {
    independent: char,
    sign: Option<char>,
    wx: char,
}

const VOWELS: &[Vowel] = &[
    Vowel { independent: 'ଅ', sign: None, wx: 'a' },
    Vowel { independent: 'ଆ', sign: Some('ା'), wx: 'A' },
    Vowel { independent: 'ଇ', sign: Some('ି'), wx: 'i' },
    Vowel { independent: 'ଈ', sign: Some('ୀ'), wx: 'I' },
    Vowel { independent: 'ଉ', sign: Some('ୁ'), wx: 'u' },
    Vowel { independent: 'ଊ', sign: Some('ୂ'), wx: 'U' },
    Vowel { independent: 'ଋ', sign: Some('ୃ'), wx: 'q' },
    Vowel { independent: 'ୠ', sign: Some('ୄ'), wx: 'Q' },
    Vowel { independent: 'ଌ', sign: Some('\u{0b62}'), wx: 'L' },
    Vowel { independent: 'ଏ', sign: Some('େ'), wx: 'e' },
    Vowel { independent: 'ଐ', sign: Some('ୈ'), wx: 'E' },
    Vowel { independent: 'ଓ', sign: Some('ୋ'), wx: 'o' },
    Vowel { independent: 'ଔ', sign: Some('ୌ'), wx: 'O' },
];

/// Chandrabindu, anusvara, visarga and a free-standing nukta.
const SIGNS: &[(char, char)] = &[('ଁ', 'z'), ('ଂ', 'M'), ('ଃ', 'H'), (NUKTA, 'Z')];

/// Odia ↔ WX converter following the ISCII-derived WX scheme: consonants
/// carry an implicit `a`, dependent vowel signs replace it, and halant
/// suppresses it.
///
/// Characters outside the table (digits, Latin text, punctuation) pass
/// through unchanged in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct WxTransliterator;

impl WxTransliterator {
    pub fn new() -> Self {
        Self
    }

    fn consonant_wx(c: char) -> Option<&'static str> {
        CONSONANTS
            .iter()
            .chain(NUKTA_CONSONANTS)
            .find(|(native, _)| *native == c)
            .map(|(_, wx)| *wx)
    }

    /// Longest consonant spelling starting at `chars[i]`.
    fn consonant_at(chars: &[char], i: usize) -> Option<(char, usize)> {
        let mut best: Option<(char, usize)> = None;
        for (native, wx) in CONSONANTS {
            let width = wx.chars().count();
            let matches = chars.len() >= i + width
                && wx.chars().zip(&chars[i..i + width]).all(|(a, b)| a == *b);
            if matches && best.map_or(true, |(_, w)| width > w) {
                best = Some((*native, width));
            }
        }
        best
    }
}

impl Transliterator for WxTransliterator {
    fn to_working(&self, native: &str) -> String {
        let mut out = String::with_capacity(native.len());
        // The last letter was a consonant still carrying its inherent vowel.
        let mut pending = false;

        for c in native.chars() {
            if let Some(wx) = Self::consonant_wx(c) {
                if pending {
                    out.push('a');
                }
                out.push_str(wx);
                pending = true;
            } else if c == NUKTA && pending {
                out.push('Z');
            } else if c == HALANT {
                pending = false;
            } else if let Some(vowel) = VOWELS.iter().find(|v| v.sign == Some(c)) {
                out.push(vowel.wx);
                pending = false;
            } else {
                if pending {
                    out.push('a');
                    pending = false;
                }
                if let Some(vowel) = VOWELS.iter().find(|v| v.independent == c) {
                    out.push(vowel.wx);
                } else if let Some((_, wx)) = SIGNS.iter().find(|(sign, _)| *sign == c) {
                    out.push(*wx);
                } else {
                    out.push(c);
                }
            }
        }
        if pending {
            out.push('a');
        }
        out
    }

    fn to_native(&self, working: &str) -> String {
        let chars: Vec<char> = working.chars().collect();
        let mut out = String::with_capacity(working.len() * 3);
        let mut after_consonant = false;
        let mut i = 0;

        while i < chars.len() {
            if let Some((native, width)) = Self::consonant_at(&chars, i) {
                if after_consonant {
                    out.push(HALANT);
                }
                out.push(native);
                i += width;
                if chars.get(i) == Some(&'Z') {
                    out.push(NUKTA);
                    i += 1;
                }
                after_consonant = true;
                continue;
            }

            let c = chars[i];
            i += 1;
            if let Some(vowel) = VOWELS.iter().find(|v| v.wx == c) {
                if !after_consonant {
                    out.push(vowel.independent);
                } else if let Some(sign) = vowel.sign {
                    out.push(sign);
                }
                after_consonant = false;
                continue;
            }

            if after_consonant {
                out.push(HALANT);
                after_consonant = false;
            }
            match SIGNS.iter().find(|(_, wx)| *wx == c) {
                Some((sign, _)) => out.push(*sign),
                None => out.push(c),
            }
        }
        if after_consonant {
            out.push(HALANT);
        }
        out
    }
}
