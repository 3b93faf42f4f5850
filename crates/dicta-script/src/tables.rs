use lazy_static::lazy_static;
use std::collections::HashMap;

// Keys are kept in \u{XXXX} form for readability against the font specs.

lazy_static! {
    /// Glyph tables for legacy phonetic fonts. A character typeset with
    /// one of these fonts means the codepoint is a private glyph index,
    /// not the letter it collides with.
    pub static ref FONT_CONV: HashMap<&'static str, HashMap<char, &'static str>> = {
        let mut fonts = HashMap::new();

        let mut lingua = HashMap::new();
        lingua.insert('\u{0026}', "u\u{032f}");
        lingua.insert('\u{0032}', "i\u{032e}");
        lingua.insert('\u{0038}', "u\u{0307}");
        lingua.insert('\u{0040}', "i\u{032f}");
        lingua.insert('\u{041a}', "\u{0259}\u{0311}");
        lingua.insert('\u{042b}', "o\u{032d}");
        lingua.insert('\u{0446}', "e\u{032e}");
        lingua.insert('\u{045c}', "c\u{030c}\u{0301}");
        fonts.insert("Lingua", lingua);

        let mut fu = HashMap::new();
        fu.insert('\u{00b9}', "i\u{032f}");
        fonts.insert("1 FU", fu);

        fonts
    };

    /// Cyrillic lookalikes that appear inside Latin-script text.
    pub static ref LATN_CONV: HashMap<char, &'static str> = {
        let mut table = HashMap::new();
        table.insert('\u{0430}', "\u{0061}"); // a
        table.insert('\u{0438}', "\u{0075}"); // u
        table.insert('\u{043f}', "\u{006e}"); // n
        table.insert('\u{0445}', "\u{0078}"); // x
        table.insert('\u{0448}', "\u{026f}"); // ɯ
        table.insert('\u{04e8}', "\u{019f}"); // Ɵ
        table.insert('\u{04e9}', "\u{0275}"); // ɵ
        table
    };

    /// Latin lookalikes and precomposed accents inside Cyrillic text.
    pub static ref CYRL_CONV: HashMap<char, &'static str> = {
        let mut table = HashMap::new();
        table.insert('\u{00e1}', "\u{0430}\u{0301}"); // а́
        table.insert('\u{00e9}', "\u{0435}\u{0301}"); // е́
        table.insert('\u{00f3}', "\u{043e}\u{0301}"); // о́
        table.insert('\u{00ff}', "\u{04f1}"); // ӱ
        table.insert('\u{0275}', "\u{04e9}"); // ө
        table.insert('\u{0063}', "\u{0441}");
        table
    };

    /// Substitutions applied regardless of the detected script.
    pub static ref ALWAYS_CONV: HashMap<char, &'static str> = {
        let mut table = HashMap::new();
        table.insert('\u{0473}', "\u{04e9}"); // ө
        table
    };
}
