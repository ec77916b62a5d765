use widechar_width::classify;

/// Width of `c`: 1 or 2, or a negative value for characters whose width
/// depends on the renderer (-1 nonprint, -2 combining, -3 ambiguous,
/// -4 private use, -5 unassigned, -6 widened in Unicode 9, -7 noncharacter).
#[unsafe(no_mangle)]
pub extern "C" fn widechar_wcwidth(c: u32) -> i32 {
    classify(c).code()
}

/// Number of columns `c` occupies, resolving every category to 0, 1 or 2.
#[unsafe(no_mangle)]
pub extern "C" fn widechar_column_width(c: u32, unicode_9: bool) -> u8 {
    let width = classify(c);
    if unicode_9 {
        width.width_unicode_9_or_later()
    } else {
        width.width_unicode_8_or_earlier()
    }
}
