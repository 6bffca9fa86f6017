//! Transliteration tables.
//!
//! The Czech tables are ordered replacement chains: each pair is applied to
//! the whole string in sequence, and the order is semantic (digraphs before
//! their single-letter parts, and replacements that produce letters a later
//! pair would touch come after that pair). Identity pairs from the source
//! tables are omitted.

/// IAST → Czech-scientific. `j`/`y` swap first so the freshly produced `j`s
/// survive, then aspirate digraphs before bare letters.
pub(super) const IAST_TO_CZECH_V: &[(&str, &str)] = &[
    ("jh", "džh"),
    ("jñ", "džñ"),
    ("j", "dž"),
    ("y", "j"),
    ("ch", "čh"),
    ("ph", "f"),
    ("ā", "á"),
    ("ī", "í"),
    ("ū", "ú"),
    ("e", "é"),
    ("o", "ó"),
    ("c", "č"),
];

/// Czech-scientific → IAST. `j` → `y` must run before `dž` → `j`.
pub(super) const CZECH_V_TO_IAST: &[(&str, &str)] = &[
    ("j", "y"),
    ("džñ", "jñ"),
    ("džh", "jh"),
    ("dž", "j"),
    ("čh", "ch"),
    ("f", "ph"),
    ("á", "ā"),
    ("í", "ī"),
    ("ú", "ū"),
    ("é", "e"),
    ("ó", "o"),
    ("č", "c"),
];

/// IAST → Czech phonetic (reading aid). `jñ` detours through a placeholder
/// so the `j` → `dž` pass cannot touch it.
pub(super) const IAST_TO_CZECH_F: &[(&str, &str)] = &[
    ("jñ", "gx"),
    ("j", "dž"),
    ("gx", "gj"),
    ("y", "j"),
    ("ch", "čh"),
    ("c", "č"),
    ("ph", "f"),
    ("ṅ", "ng"),
    ("ñ", "ň"),
    ("ī", "í"),
    ("ṛ", "ṛi"),
    ("ṝ", "ṝí"),
    ("ā", "á"),
    ("ū", "ú"),
    ("e", "é"),
    ("o", "ó"),
];

/// IAST → Czech literary (simplified for casual reading; diacritic stacks
/// flattened, avagraha dropped).
pub(super) const IAST_TO_CZECH_L: &[(&str, &str)] = &[
    ("jñ", "gx"),
    ("j", "dž"),
    ("gx", "gj"),
    ("y", "j"),
    ("ch", "čh"),
    ("c", "č"),
    ("ph", "f"),
    ("ṅ", "ng"),
    ("ñ", "ň"),
    ("ṇ", "n"),
    ("ī", "í"),
    ("ṛ", "ri"),
    ("ṝ", "rí"),
    ("ā", "á"),
    ("ū", "ú"),
    ("e", "é"),
    ("o", "ó"),
    ("ḷ", "l"),
    ("ḹ", "ĺ"),
    ("ṃ", "m"),
    ("ḥ", "h"),
    ("ṭ", "t"),
    ("ḍ", "d"),
    ("ś", "š"),
    ("ṣ", "š"),
    ("ʼ", ""),
];

/// IAST consonants and their Devanagari letters.
pub(super) const DEVA_CONSONANTS: &[(&str, &str)] = &[
    ("kh", "ख"),
    ("gh", "घ"),
    ("ch", "छ"),
    ("jh", "झ"),
    ("ṭh", "ठ"),
    ("ḍh", "ढ"),
    ("th", "थ"),
    ("dh", "ध"),
    ("ph", "फ"),
    ("bh", "भ"),
    ("k", "क"),
    ("g", "ग"),
    ("ṅ", "ङ"),
    ("c", "च"),
    ("j", "ज"),
    ("ñ", "ञ"),
    ("ṭ", "ट"),
    ("ḍ", "ड"),
    ("ṇ", "ण"),
    ("t", "त"),
    ("d", "द"),
    ("n", "न"),
    ("p", "प"),
    ("b", "ब"),
    ("m", "म"),
    ("y", "य"),
    ("r", "र"),
    ("l", "ल"),
    ("v", "व"),
    ("ś", "श"),
    ("ṣ", "ष"),
    ("s", "स"),
    ("h", "ह"),
];

/// IAST vowels: (iast, independent letter, vowel sign). The inherent `a`
/// has an empty sign.
pub(super) const DEVA_VOWELS: &[(&str, &str, &str)] = &[
    ("ai", "ऐ", "ै"),
    ("au", "औ", "ौ"),
    ("a", "अ", ""),
    ("ā", "आ", "ा"),
    ("i", "इ", "ि"),
    ("ī", "ई", "ी"),
    ("u", "उ", "ु"),
    ("ū", "ऊ", "ू"),
    ("ṛ", "ऋ", "ृ"),
    ("ṝ", "ॠ", "ॄ"),
    ("ḷ", "ऌ", "ॢ"),
    ("ḹ", "ॡ", "ॣ"),
    ("e", "ए", "े"),
    ("o", "ओ", "ो"),
];

pub(super) const VIRAMA: char = '्';
pub(super) const ANUSVARA: char = 'ं';
pub(super) const VISARGA: char = 'ः';
pub(super) const AVAGRAHA: char = 'ऽ';
