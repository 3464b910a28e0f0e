//! Word tokenization and counting.
//!
//! A token is a maximal run of non-whitespace characters. It counts as a word
//! when it holds at least one character from a fixed table of word characters
//! (letters and digits of most scripts plus a few numeral-like symbols). The
//! table is explicit so results never depend on the locale or on the Unicode
//! version shipped with the standard library.

/// Column at which block text is considered to wrap when computing text density.
pub const WRAP_COLUMN: usize = 80;

/// Inclusive code point ranges of word characters, sorted and disjoint.
static WORD_CHAR_RANGES: &[(u32, u32)] = &[
    (0x0030, 0x0039), (0x0041, 0x005A), (0x0061, 0x007A), (0x00AA, 0x00AA), (0x00B2, 0x00B3),
    (0x00B5, 0x00B5), (0x00B9, 0x00BA), (0x00BC, 0x00BE), (0x00C0, 0x00D6), (0x00D8, 0x00F6),
    (0x00F8, 0x0236), (0x0250, 0x02C1), (0x02C6, 0x02D1), (0x02E0, 0x02E4), (0x02EE, 0x02EE),
    (0x037A, 0x037A), (0x0386, 0x0386), (0x0388, 0x038A), (0x038C, 0x038C), (0x038E, 0x03A1),
    (0x03A3, 0x03CE), (0x03D0, 0x03F5), (0x03F7, 0x03FB), (0x0400, 0x0481), (0x048A, 0x04CE),
    (0x04D0, 0x04F5), (0x04F8, 0x04F9), (0x0500, 0x050F), (0x0531, 0x0556), (0x0559, 0x0559),
    (0x0561, 0x0587), (0x05D0, 0x05EA), (0x05F0, 0x05F2), (0x0621, 0x063A), (0x0640, 0x064A),
    (0x0660, 0x0669), (0x066E, 0x066F), (0x0671, 0x06D3), (0x06D5, 0x06D5), (0x06E5, 0x06E6),
    (0x06EE, 0x06FC), (0x06FF, 0x06FF), (0x0710, 0x0710), (0x0712, 0x072F), (0x074D, 0x074F),
    (0x0780, 0x07A5), (0x07B1, 0x07B1), (0x0904, 0x0939), (0x093D, 0x093D), (0x0950, 0x0950),
    (0x0958, 0x0961), (0x0966, 0x096F), (0x0985, 0x098C), (0x098F, 0x0990), (0x0993, 0x09A8),
    (0x09AA, 0x09B0), (0x09B2, 0x09B2), (0x09B6, 0x09B9), (0x09BD, 0x09BD), (0x09DC, 0x09DD),
    (0x09DF, 0x09E1), (0x09E6, 0x09F1), (0x09F4, 0x09F9), (0x0A05, 0x0A0A), (0x0A0F, 0x0A10),
    (0x0A13, 0x0A28), (0x0A2A, 0x0A30), (0x0A32, 0x0A33), (0x0A35, 0x0A36), (0x0A38, 0x0A39),
    (0x0A59, 0x0A5C), (0x0A5E, 0x0A5E), (0x0A66, 0x0A6F), (0x0A72, 0x0A74), (0x0A85, 0x0A8D),
    (0x0A8F, 0x0A91), (0x0A93, 0x0AA8), (0x0AAA, 0x0AB0), (0x0AB2, 0x0AB3), (0x0AB5, 0x0AB9),
    (0x0ABD, 0x0ABD), (0x0AD0, 0x0AD0), (0x0AE0, 0x0AE1), (0x0AE6, 0x0AEF), (0x0B05, 0x0B0C),
    (0x0B0F, 0x0B10), (0x0B13, 0x0B28), (0x0B2A, 0x0B30), (0x0B32, 0x0B33), (0x0B35, 0x0B39),
    (0x0B3D, 0x0B3D), (0x0B5C, 0x0B5D), (0x0B5F, 0x0B61), (0x0B66, 0x0B6F), (0x0B71, 0x0B71),
    (0x0B83, 0x0B83), (0x0B85, 0x0B8A), (0x0B8E, 0x0B90), (0x0B92, 0x0B95), (0x0B99, 0x0B9A),
    (0x0B9C, 0x0B9C), (0x0B9E, 0x0B9F), (0x0BA3, 0x0BA4), (0x0BA8, 0x0BAA), (0x0BAE, 0x0BB5),
    (0x0BB7, 0x0BB9), (0x0BE7, 0x0BF2), (0x0C05, 0x0C0C), (0x0C0E, 0x0C10), (0x0C12, 0x0C28),
    (0x0C2A, 0x0C33), (0x0C35, 0x0C39), (0x0C60, 0x0C61), (0x0C66, 0x0C6F), (0x0C85, 0x0C8C),
    (0x0C8E, 0x0C90), (0x0C92, 0x0CA8), (0x0CAA, 0x0CB3), (0x0CB5, 0x0CB9), (0x0CBD, 0x0CBD),
    (0x0CDE, 0x0CDE), (0x0CE0, 0x0CE1), (0x0CE6, 0x0CEF), (0x0D05, 0x0D0C), (0x0D0E, 0x0D10),
    (0x0D12, 0x0D28), (0x0D2A, 0x0D39), (0x0D60, 0x0D61), (0x0D66, 0x0D6F), (0x0D85, 0x0D96),
    (0x0D9A, 0x0DB1), (0x0DB3, 0x0DBB), (0x0DBD, 0x0DBD), (0x0DC0, 0x0DC6), (0x0E01, 0x0E30),
    (0x0E32, 0x0E33), (0x0E40, 0x0E46), (0x0E50, 0x0E59), (0x0E81, 0x0E82), (0x0E84, 0x0E84),
    (0x0E87, 0x0E88), (0x0E8A, 0x0E8A), (0x0E8D, 0x0E8D), (0x0E94, 0x0E97), (0x0E99, 0x0E9F),
    (0x0EA1, 0x0EA3), (0x0EA5, 0x0EA5), (0x0EA7, 0x0EA7), (0x0EAA, 0x0EAB), (0x0EAD, 0x0EB0),
    (0x0EB2, 0x0EB3), (0x0EBD, 0x0EBD), (0x0EC0, 0x0EC4), (0x0EC6, 0x0EC6), (0x0ED0, 0x0ED9),
    (0x0EDC, 0x0EDD), (0x0F00, 0x0F00), (0x0F20, 0x0F33), (0x0F40, 0x0F47), (0x0F49, 0x0F6A),
    (0x0F88, 0x0F8B), (0x1000, 0x1021), (0x1023, 0x1027), (0x1029, 0x102A), (0x1040, 0x1049),
    (0x1050, 0x1055), (0x10A0, 0x10C5), (0x10D0, 0x10F8), (0x1100, 0x1159), (0x115F, 0x11A2),
    (0x11A8, 0x11F9), (0x1200, 0x1206), (0x1208, 0x1246), (0x1248, 0x1248), (0x124A, 0x124D),
    (0x1250, 0x1256), (0x1258, 0x1258), (0x125A, 0x125D), (0x1260, 0x1286), (0x1288, 0x1288),
    (0x128A, 0x128D), (0x1290, 0x12AE), (0x12B0, 0x12B0), (0x12B2, 0x12B5), (0x12B8, 0x12BE),
    (0x12C0, 0x12C0), (0x12C2, 0x12C5), (0x12C8, 0x12CE), (0x12D0, 0x12D6), (0x12D8, 0x12EE),
    (0x12F0, 0x130E), (0x1310, 0x1310), (0x1312, 0x1315), (0x1318, 0x131E), (0x1320, 0x1346),
    (0x1348, 0x135A), (0x1369, 0x137C), (0x13A0, 0x13F4), (0x1401, 0x166C), (0x166F, 0x1676),
    (0x1681, 0x169A), (0x16A0, 0x16EA), (0x16EE, 0x16F0), (0x1700, 0x170C), (0x170E, 0x1711),
    (0x1720, 0x1731), (0x1740, 0x1751), (0x1760, 0x176C), (0x176E, 0x1770), (0x1780, 0x17B3),
    (0x17D7, 0x17D7), (0x17DC, 0x17DC), (0x17E0, 0x17E9), (0x17F0, 0x17F9), (0x1810, 0x1819),
    (0x1820, 0x1877), (0x1880, 0x18A8), (0x1900, 0x191C), (0x1946, 0x196D), (0x1970, 0x1974),
    (0x1D00, 0x1D6B), (0x1E00, 0x1E9B), (0x1EA0, 0x1EF9), (0x1F00, 0x1F15), (0x1F18, 0x1F1D),
    (0x1F20, 0x1F45), (0x1F48, 0x1F4D), (0x1F50, 0x1F57), (0x1F59, 0x1F59), (0x1F5B, 0x1F5B),
    (0x1F5D, 0x1F5D), (0x1F5F, 0x1F7D), (0x1F80, 0x1FB4), (0x1FB6, 0x1FBC), (0x1FBE, 0x1FBE),
    (0x1FC2, 0x1FC4), (0x1FC6, 0x1FCC), (0x1FD0, 0x1FD3), (0x1FD6, 0x1FDB), (0x1FE0, 0x1FEC),
    (0x1FF2, 0x1FF4), (0x1FF6, 0x1FFC), (0x2070, 0x2071), (0x2074, 0x2079), (0x207F, 0x2089),
    (0x2102, 0x2102), (0x2107, 0x2107), (0x210A, 0x2113), (0x2115, 0x2115), (0x2119, 0x211D),
    (0x2124, 0x2124), (0x2126, 0x2126), (0x2128, 0x2128), (0x212A, 0x212D), (0x212F, 0x2131),
    (0x2133, 0x2139), (0x213D, 0x213F), (0x2145, 0x2149), (0x2153, 0x2183), (0x2460, 0x249B),
    (0x24EA, 0x24FF), (0x2776, 0x2793), (0x3005, 0x3007), (0x3021, 0x3029), (0x3031, 0x3035),
    (0x3038, 0x303C), (0x3041, 0x3096), (0x309D, 0x309F), (0x30A1, 0x30FA), (0x30FC, 0x30FF),
    (0x3105, 0x312C), (0x3131, 0x318E), (0x3192, 0x3195), (0x31A0, 0x31B7), (0x31F0, 0x31FF),
    (0x3220, 0x3229), (0x3251, 0x325F), (0x3280, 0x3289), (0x32B1, 0x32BF), (0x3400, 0x4DB5),
    (0x4E00, 0x9FA5), (0xA000, 0xA48C), (0xAC00, 0xD7A3), (0xF900, 0xFA2D), (0xFA30, 0xFA6A),
    (0xFB00, 0xFB06), (0xFB13, 0xFB17), (0xFB1D, 0xFB1D), (0xFB1F, 0xFB28), (0xFB2A, 0xFB36),
    (0xFB38, 0xFB3C), (0xFB3E, 0xFB3E), (0xFB40, 0xFB41), (0xFB43, 0xFB44), (0xFB46, 0xFBB1),
    (0xFBD3, 0xFD3D), (0xFD50, 0xFD8F), (0xFD92, 0xFDC7), (0xFDF0, 0xFDFB), (0xFE70, 0xFE74),
    (0xFE76, 0xFEFC), (0xFF10, 0xFF19), (0xFF21, 0xFF3A), (0xFF41, 0xFF5A), (0xFF66, 0xFFBE),
    (0xFFC2, 0xFFC7), (0xFFCA, 0xFFCF), (0xFFD2, 0xFFD7), (0xFFDA, 0xFFDC),
];

/// Returns true if `c` belongs to the word-character table.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    let cp = u32::from(c);
    WORD_CHAR_RANGES
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Whitespace as browsers split text: ASCII whitespace, NBSP, the Unicode
/// space separators, line and paragraph separators and the BOM.
#[inline]
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Returns true if `text` is empty or holds only whitespace.
#[inline]
#[must_use]
pub fn is_all_whitespace(text: &str) -> bool {
    text.chars().all(is_whitespace)
}

/// Returns true if `token` contains at least one word character.
#[inline]
#[must_use]
pub fn is_word(token: &str) -> bool {
    token.chars().any(is_word_char)
}

/// Splits `text` into whitespace-separated tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_whitespace).filter(|t| !t.is_empty())
}

/// Counts the words in `text`.
///
/// # Example
///
/// ```rust
/// use rs_distiller::words::count_words;
///
/// assert_eq!(count_words("1/2 cups flour"), 3);
/// assert_eq!(count_words("  -@# ';]"), 0);
/// ```
#[must_use]
pub fn count_words(text: &str) -> usize {
    tokens(text).filter(|t| is_word(t)).count()
}

/// Lays words out on lines of [`WRAP_COLUMN`] characters.
///
/// Text density is the average number of words per wrapped line, excluding
/// the last (partial) line once the text wraps at least once.
#[derive(Debug, Clone)]
pub struct LineWrapper {
    line_length: isize,
    words: usize,
    words_on_line: usize,
    wrapped_lines: usize,
}

impl Default for LineWrapper {
    fn default() -> Self {
        Self {
            // The first word is not preceded by a space.
            line_length: -1,
            words: 0,
            words_on_line: 0,
            wrapped_lines: 0,
        }
    }
}

impl LineWrapper {
    /// Places a word of `len` characters.
    pub fn push_word(&mut self, len: usize) {
        let len = len as isize;
        self.words += 1;
        self.words_on_line += 1;
        self.line_length += len + 1;
        if self.line_length > WRAP_COLUMN as isize {
            self.wrapped_lines += 1;
            self.line_length = len;
            self.words_on_line = 1;
        }
    }

    /// Returns `(words_in_wrapped_lines, wrapped_lines)`.
    #[must_use]
    pub fn finish(&self) -> (usize, usize) {
        if self.wrapped_lines == 0 {
            (self.words, 1)
        } else {
            (self.words - self.words_on_line, self.wrapped_lines)
        }
    }
}
