//! Rule-based English lemmatizer.
//!
//! Maps inflected word forms to their dictionary base form ("running" → "run",
//! "studies" → "study", "found" → "find"). An irregular-form table is consulted
//! first, then ordered suffix rules handle regular plurals and -ing/-ed verb
//! forms, restoring doubled consonants and a trailing "e" where the stem shape
//! calls for it.
//!
//! This is intentionally small: enough linguistic normalization that
//! "lost backpacks" and "lose backpack" land on the same terms, not a full
//! morphological analyzer.

use std::collections::HashMap;

/// English lemmatizer with an irregular table and suffix rules.
///
/// Input words are expected to be lowercased already (the tokenizer does
/// this). Words of length ≤ 2 pass through untouched.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    /// Create a lemmatizer with the built-in English rules.
    pub fn new() -> Self {
        let irregular: HashMap<&'static str, &'static str> = [
            ("lost", "lose"),
            ("found", "find"),
            ("left", "leave"),
            ("stolen", "steal"),
            ("stole", "steal"),
            ("taken", "take"),
            ("took", "take"),
            ("gone", "go"),
            ("went", "go"),
            ("seen", "see"),
            ("saw", "see"),
            ("given", "give"),
            ("gave", "give"),
            ("gotten", "get"),
            ("got", "get"),
            ("kept", "keep"),
            ("held", "hold"),
            ("worn", "wear"),
            ("wore", "wear"),
            ("broken", "break"),
            ("broke", "break"),
            ("brought", "bring"),
            ("bought", "buy"),
            ("forgotten", "forget"),
            ("forgot", "forget"),
            ("fallen", "fall"),
            ("fell", "fall"),
            ("ran", "run"),
            ("came", "come"),
            ("made", "make"),
            ("said", "say"),
            ("told", "tell"),
            ("children", "child"),
            ("men", "man"),
            ("women", "woman"),
            ("feet", "foot"),
            ("teeth", "tooth"),
            ("mice", "mouse"),
            ("lying", "lie"),
            ("dying", "die"),
        ]
        .into_iter()
        .collect();
        Self { irregular }
    }

    /// Lemmatize a single lowercased word.
    pub fn lemma(&self, word: &str) -> String {
        if word.len() <= 2 {
            return word.to_string();
        }
        if let Some(&base) = self.irregular.get(word) {
            return base.to_string();
        }

        // Regular plurals
        if word.ends_with("sses") {
            return word[..word.len() - 2].to_string();
        }
        if let Some(stem) = word.strip_suffix("ies") {
            // "studies" → "study", but "ties" → "tie"
            return if word.len() > 4 {
                format!("{stem}y")
            } else {
                format!("{stem}ie")
            };
        }
        if let Some(stem) = word.strip_suffix("es") {
            if stem.ends_with('s')
                || stem.ends_with('x')
                || stem.ends_with('z')
                || stem.ends_with("ch")
                || stem.ends_with("sh")
            {
                return stem.to_string();
            }
        }
        if word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return word[..word.len() - 1].to_string();
        }

        // -ing verb forms
        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ing") {
                return Self::restore_stem(word, stem);
            }
        }

        // -ed verb forms
        if let Some(stem) = word.strip_suffix("ied") {
            return if word.len() > 4 {
                format!("{stem}y")
            } else {
                format!("{stem}ie")
            };
        }
        if word.len() > 3 {
            if let Some(stem) = word.strip_suffix("ed") {
                return Self::restore_stem(word, stem);
            }
        }

        word.to_string()
    }

    /// Repair a stem left after removing "-ing"/"-ed": undouble the final
    /// consonant ("runn" → "run") or restore a dropped "e" ("skat" → "skate").
    fn restore_stem(word: &str, stem: &str) -> String {
        if !stem.chars().any(Self::is_vowel) {
            // "sing", "bring": the ending is part of the word itself
            return word.to_string();
        }
        if Self::ends_double_consonant(stem) && !matches!(stem.chars().last(), Some('l' | 's' | 'z'))
        {
            // Drop one char, not one byte: the doubled letter may be multi-byte
            let mut chars = stem.chars();
            chars.next_back();
            return chars.as_str().to_string();
        }
        if Self::measure(stem) == 1 && Self::ends_cvc(stem) {
            return format!("{stem}e");
        }
        stem.to_string()
    }

    /// Check if a character is a vowel (a, e, i, o, u).
    fn is_vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
    }

    /// Number of vowel→consonant transitions, a rough syllable count.
    fn measure(word: &str) -> usize {
        let mut count = 0;
        let mut prev_is_vowel = false;
        for c in word.chars() {
            let is_vowel = Self::is_vowel(c);
            if !is_vowel && prev_is_vowel {
                count += 1;
            }
            prev_is_vowel = is_vowel;
        }
        count
    }

    /// Check if the word ends with a doubled consonant (e.g. "runn", "stopp").
    fn ends_double_consonant(word: &str) -> bool {
        let mut chars = word.chars().rev();
        match (chars.next(), chars.next()) {
            (Some(a), Some(b)) => a == b && !Self::is_vowel(a),
            _ => false,
        }
    }

    /// Check if the word ends consonant-vowel-consonant, with the final
    /// consonant not w, x, or y. Such stems usually dropped an "e".
    fn ends_cvc(word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < 3 {
            return false;
        }
        let [first, middle, last] = [
            chars[chars.len() - 3],
            chars[chars.len() - 2],
            chars[chars.len() - 1],
        ];
        !Self::is_vowel(last)
            && Self::is_vowel(middle)
            && !Self::is_vowel(first)
            && !matches!(last, 'w' | 'x' | 'y')
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_forms() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("lost"), "lose");
        assert_eq!(lemmatizer.lemma("found"), "find");
        assert_eq!(lemmatizer.lemma("stolen"), "steal");
        assert_eq!(lemmatizer.lemma("children"), "child");
    }

    #[test]
    fn plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("backpacks"), "backpack");
        assert_eq!(lemmatizer.lemma("keys"), "key");
        assert_eq!(lemmatizer.lemma("glasses"), "glass");
        assert_eq!(lemmatizer.lemma("watches"), "watch");
        assert_eq!(lemmatizer.lemma("boxes"), "box");
        assert_eq!(lemmatizer.lemma("studies"), "study");
        assert_eq!(lemmatizer.lemma("ties"), "tie");
    }

    #[test]
    fn ing_forms() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("running"), "run");
        assert_eq!(lemmatizer.lemma("walking"), "walk");
        assert_eq!(lemmatizer.lemma("skating"), "skate");
        assert_eq!(lemmatizer.lemma("studying"), "study");
        // No vowel left in the stem: not an inflection
        assert_eq!(lemmatizer.lemma("bring"), "bring");
    }

    #[test]
    fn ed_forms() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("jumped"), "jump");
        assert_eq!(lemmatizer.lemma("stopped"), "stop");
        assert_eq!(lemmatizer.lemma("hoped"), "hope");
        assert_eq!(lemmatizer.lemma("studied"), "study");
        assert_eq!(lemmatizer.lemma("visited"), "visit");
    }

    #[test]
    fn non_ascii_words() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("café"), "café");
        assert_eq!(lemmatizer.lemma("cafés"), "café");
        // Undoubling a multi-byte letter must split on the char boundary
        assert_eq!(lemmatizer.lemma("saééed"), "saé");
    }

    #[test]
    fn words_left_alone() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("library"), "library");
        assert_eq!(lemmatizer.lemma("blue"), "blue");
        assert_eq!(lemmatizer.lemma("miss"), "miss");
        assert_eq!(lemmatizer.lemma("bus"), "bus");
        assert_eq!(lemmatizer.lemma("is"), "is");
        assert_eq!(lemmatizer.lemma(""), "");
    }
}
