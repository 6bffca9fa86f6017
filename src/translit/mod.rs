//! Script conversion between the romanizations and Devanagari.
//!
//! The engine itself works in Czech-scientific romanization; these pure
//! functions convert its output (and any other text) between that
//! convention, IAST, Devanagari, and two simplified Czech renderings for
//! reading. Conversions between non-IAST scripts route through IAST.

mod tables;

use std::fmt;
use std::str::FromStr;

use tables::{
    ANUSVARA, AVAGRAHA, CZECH_V_TO_IAST, DEVA_CONSONANTS, DEVA_VOWELS, IAST_TO_CZECH_F,
    IAST_TO_CZECH_L, IAST_TO_CZECH_V, VIRAMA, VISARGA,
};

/// Script/romanization conventions the converter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Czech-scientific romanization (the engine's working convention).
    CzechScientific,
    Iast,
    Devanagari,
    /// Czech phonetic rendering, one-way target.
    CzechPhonetic,
    /// Czech literary rendering, one-way target.
    CzechLiterary,
}

impl Script {
    pub fn name(self) -> &'static str {
        match self {
            Script::CzechScientific => "czech",
            Script::Iast => "iast",
            Script::Devanagari => "deva",
            Script::CzechPhonetic => "czech-phonetic",
            Script::CzechLiterary => "czech-literary",
        }
    }
}

impl FromStr for Script {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "czech" | "cz" => Ok(Script::CzechScientific),
            "iast" => Ok(Script::Iast),
            "deva" | "devanagari" => Ok(Script::Devanagari),
            "czech-phonetic" | "czf" => Ok(Script::CzechPhonetic),
            "czech-literary" | "czl" => Ok(Script::CzechLiterary),
            other => Err(format!("unknown script {other:?}")),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert between two scripts, routing through IAST.
///
/// `None` when the source script cannot be read back (the phonetic and
/// literary renderings are lossy one-way targets).
pub fn convert(text: &str, from: Script, to: Script) -> Option<String> {
    if from == to {
        return Some(text.to_string());
    }
    let iast = match from {
        Script::CzechScientific => czech_v_to_iast(text),
        Script::Iast => text.to_string(),
        Script::Devanagari => deva_to_iast(text),
        Script::CzechPhonetic | Script::CzechLiterary => return None,
    };
    Some(match to {
        Script::Iast => iast,
        Script::CzechScientific => iast_to_czech_v(&iast),
        Script::Devanagari => iast_to_deva(&iast),
        Script::CzechPhonetic => iast_to_czech_f(&iast),
        Script::CzechLiterary => iast_to_czech_l(&iast),
    })
}

fn apply_table(text: &str, table: &[(&str, &str)]) -> String {
    let mut out = text.to_string();
    for (from, to) in table {
        out = out.replace(from, to);
    }
    out
}

pub fn iast_to_czech_v(text: &str) -> String {
    apply_table(text, IAST_TO_CZECH_V)
}

pub fn czech_v_to_iast(text: &str) -> String {
    apply_table(text, CZECH_V_TO_IAST)
}

pub fn iast_to_czech_f(text: &str) -> String {
    apply_table(text, IAST_TO_CZECH_F)
}

pub fn iast_to_czech_l(text: &str) -> String {
    apply_table(text, IAST_TO_CZECH_L)
}

pub fn czech_v_to_deva(text: &str) -> String {
    iast_to_deva(&czech_v_to_iast(text))
}

fn consonant(tok: &str) -> Option<&'static str> {
    DEVA_CONSONANTS
        .iter()
        .find(|(iast, _)| *iast == tok)
        .map(|(_, deva)| *deva)
}

fn vowel(tok: &str) -> Option<(&'static str, &'static str)> {
    DEVA_VOWELS
        .iter()
        .find(|(iast, _, _)| *iast == tok)
        .map(|(_, indep, sign)| (*indep, *sign))
}

/// IAST → Devanagari.
///
/// Tokenizes IAST longest-first (aspirate digraphs, `ai`/`au`), then runs
/// the usual abugida bookkeeping: a consonant followed by a vowel takes the
/// vowel sign (none for the inherent `a`), a consonant followed by anything
/// else takes a virama, a vowel with no preceding consonant is written with
/// its independent letter.
pub fn iast_to_deva(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut pending_consonant = false;
    let mut i = 0;

    while i < chars.len() {
        let mut matched = false;
        for len in (1..=2.min(chars.len() - i)).rev() {
            let tok: String = chars[i..i + len].iter().collect();
            if let Some(deva) = consonant(&tok) {
                if pending_consonant {
                    out.push(VIRAMA);
                }
                out.push_str(deva);
                pending_consonant = true;
                i += len;
                matched = true;
                break;
            }
            if let Some((indep, sign)) = vowel(&tok) {
                if pending_consonant {
                    out.push_str(sign);
                    pending_consonant = false;
                } else {
                    out.push_str(indep);
                }
                i += len;
                matched = true;
                break;
            }
        }
        if matched {
            continue;
        }

        // Not a phoneme. Close any open consonant cluster, then pass the
        // character through (mapping the combining signs).
        if pending_consonant {
            out.push(VIRAMA);
            pending_consonant = false;
        }
        match chars[i] {
            'ṃ' => out.push(ANUSVARA),
            'ḥ' => out.push(VISARGA),
            'ʼ' => out.push(AVAGRAHA),
            other => out.push(other),
        }
        i += 1;
    }

    if pending_consonant {
        out.push(VIRAMA);
    }
    out
}

/// Devanagari → IAST. A consonant with no following vowel sign or virama
/// carries the inherent `a`.
pub fn deva_to_iast(text: &str) -> String {
    let mut out = String::new();
    let mut pending: Option<&'static str> = None;

    let flush_with_a = |out: &mut String, pending: &mut Option<&'static str>| {
        if let Some(p) = pending.take() {
            out.push_str(p);
            out.push('a');
        }
    };

    for c in text.chars() {
        let tok = c.to_string();
        if let Some((iast, _)) = DEVA_CONSONANTS.iter().find(|(_, deva)| **deva == tok) {
            flush_with_a(&mut out, &mut pending);
            pending = Some(iast);
        } else if c == VIRAMA {
            if let Some(p) = pending.take() {
                out.push_str(p);
            }
        } else if let Some((iast, _, _)) = DEVA_VOWELS.iter().find(|(_, _, sign)| **sign == tok) {
            // A vowel sign attaches to the pending consonant.
            if let Some(p) = pending.take() {
                out.push_str(p);
            }
            out.push_str(iast);
        } else if let Some((iast, _, _)) = DEVA_VOWELS.iter().find(|(_, indep, _)| **indep == tok) {
            flush_with_a(&mut out, &mut pending);
            out.push_str(iast);
        } else {
            flush_with_a(&mut out, &mut pending);
            match c {
                ANUSVARA => out.push('ṃ'),
                VISARGA => out.push('ḥ'),
                AVAGRAHA => out.push('ʼ'),
                other => out.push(other),
            }
        }
    }
    flush_with_a(&mut out, &mut pending);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn czech_iast_roundtrip_sentence() {
        assert_eq!(czech_v_to_iast("naró gaččhati"), "naro gacchati");
        assert_eq!(iast_to_czech_v("naro gacchati"), "naró gaččhati");
    }

    #[test]
    fn czech_to_iast_digraphs() {
        assert_eq!(czech_v_to_iast("džñána"), "jñāna");
        assert_eq!(czech_v_to_iast("jóga"), "yoga");
        assert_eq!(czech_v_to_iast("fala"), "phala");
    }

    #[test]
    fn iast_to_czech_digraphs() {
        assert_eq!(iast_to_czech_v("yoga"), "jóga");
        assert_eq!(iast_to_czech_v("jaya"), "džaja");
        assert_eq!(iast_to_czech_v("phala"), "fala");
    }

    #[test]
    fn deva_basic_syllables() {
        assert_eq!(iast_to_deva("ka"), "क");
        assert_eq!(iast_to_deva("kā"), "का");
        assert_eq!(iast_to_deva("ki"), "कि");
        assert_eq!(iast_to_deva("k"), "क्");
    }

    #[test]
    fn deva_independent_vs_sign() {
        // Word-initial vowel uses the independent letter, post-consonant
        // vowels the sign.
        assert_eq!(iast_to_deva("atra"), "अत्र");
        assert_eq!(iast_to_deva("agni"), "अग्नि");
    }

    #[test]
    fn deva_aspirates_and_diphthongs() {
        assert_eq!(iast_to_deva("bhai"), "भै");
        assert_eq!(iast_to_deva("dha"), "ध");
        assert_eq!(iast_to_deva("gacchati"), "गच्छति");
    }

    #[test]
    fn deva_signs() {
        assert_eq!(iast_to_deva("naraḥ"), "नरः");
        assert_eq!(iast_to_deva("kiṃ"), "किं");
        assert_eq!(iast_to_deva("soʼpi"), "सोऽपि");
    }

    #[test]
    fn deva_roundtrip() {
        for text in ["naraḥ gacchati", "atra", "soʼpi", "dharma", "kiṃ"] {
            assert_eq!(deva_to_iast(&iast_to_deva(text)), text, "roundtrip {text}");
        }
    }

    #[test]
    fn literary_flattens_diacritics() {
        assert_eq!(iast_to_czech_l("ṣaṭ"), "šat");
        assert_eq!(iast_to_czech_l("naraḥ"), "narah");
    }

    #[test]
    fn convert_routes_through_iast() {
        assert_eq!(
            convert("naró gaččhati", Script::CzechScientific, Script::Devanagari).unwrap(),
            "नरो गच्छति"
        );
        assert!(convert("x", Script::CzechPhonetic, Script::Iast).is_none());
        assert_eq!(convert("x", Script::Iast, Script::Iast).unwrap(), "x");
    }

    #[test]
    fn script_parsing() {
        assert_eq!("iast".parse::<Script>().unwrap(), Script::Iast);
        assert_eq!("cz".parse::<Script>().unwrap(), Script::CzechScientific);
        assert!("klingon".parse::<Script>().is_err());
    }
}
