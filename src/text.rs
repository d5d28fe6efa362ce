//! Accent stripping for Vietnamese text.
//!
//! Used to build search-friendly and URL-friendly titles. Only the letters
//! in [`ACCENT_TABLE`] are touched; every other character passes through.

/// Each row starts with a base letter followed by its accented variants.
const ACCENT_TABLE: &[&str] = &[
    "aàảãáạăằẳẵắặâầẩẫấậ",
    "AÀẢÃÁẠĂẰẲẴẮẶÂẦẨẪẤẬ",
    "dđ",
    "DĐ",
    "eèẻẽéẹêềểễếệ",
    "EÈẺẼÉẸÊỀỂỄẾỆ",
    "iìỉĩíị",
    "IÌỈĨÍỊ",
    "oòỏõóọôồổỗốộơờởỡớợ",
    "OÒỎÕÓỌÔỒỔỖỐỘƠỜỞỠỚỢ",
    "uùủũúụưừửữứự",
    "UÙỦŨÚỤƯỪỬỮỨỰ",
    "yỳỷỹýỵ",
    "YỲỶỸÝỴ",
];

/// Base letter for an accented character, if it has one.
fn base_letter(c: char) -> Option<char> {
    if c.is_ascii() {
        return None;
    }
    ACCENT_TABLE.iter().find_map(|row| {
        let mut chars = row.chars();
        let base = chars.next()?;
        chars.any(|accented| accented == c).then_some(base)
    })
}

/// Replace accented Vietnamese letters with their base ASCII letter.
///
/// ```
/// use playbar::text::remove_accents;
///
/// assert_eq!(remove_accents("Tiếng Việt"), "Tieng Viet");
/// assert_eq!(remove_accents("Đà Nẵng"), "Da Nang");
/// ```
pub fn remove_accents(input: &str) -> String {
    input
        .chars()
        .map(|c| base_letter(c).unwrap_or(c))
        .collect()
}
