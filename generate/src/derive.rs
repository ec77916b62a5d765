use crate::error::GenerateError;
use crate::parse::{self, Ucd};
use widechar_width::{Range, Table};

const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Unassigned codepoints in these blocks default to East Asian Wide.
const DEFAULT_WIDE: [Range; 5] = [
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFAFF),
    (0x20000, 0x2FFFD),
    (0x30000, 0x3FFFD),
];

const REGIONAL_INDICATORS: Range = (0x1F1E6, 0x1F1FF);

// High private use surrogates stay surrogates, to agree with wcwidth9.
const PRIVATE_USE: [Range; 3] = [(0xE000, 0xF8FF), (0xF0000, 0xFFFFD), (0x100000, 0x10FFFD)];

const SURROGATES: Range = (0xD800, 0xDFFF);

// Hangul medial vowels and final consonants. A decomposed syllable is
// drawn 2 columns wide in total, so the trailing jamo must count as 0.
const HANGUL_JAMO: [Range; 2] = [(0x1160, 0x11FF), (0xD7B0, 0xD7FF)];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Category {
    /// Cn
    Unassigned,
    /// Co
    PrivateUse,
    /// Cs
    Surrogate,
    /// FDD0..FDEF and the last two codepoints of every plane.
    NonCharacter,
    /// Cc, Cf, Zl, Zp
    Control,
    /// Mn, Mc, Me
    Mark,
    Graphic,
}

impl Category {
    fn from_abbreviation(gc: &str) -> Self {
        match gc {
            "Cn" => Category::Unassigned,
            "Co" => Category::PrivateUse,
            "Cs" => Category::Surrogate,
            "Cc" | "Cf" | "Zl" | "Zp" => Category::Control,
            "Mn" | "Mc" | "Me" => Category::Mark,
            _ => Category::Graphic,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Width {
    Narrow,
    Wide,
    Ambiguous,
    WidenedIn9,
}

#[derive(Copy, Clone, Debug)]
pub struct CodePoint {
    pub category: Category,
    pub width: Option<Width>,
}

impl CodePoint {
    fn belongs_to(&self, table: Table, cp: u32) -> bool {
        match table {
            Table::Ascii => (0x20..0x7F).contains(&cp),
            Table::PrivateUse => self.category == Category::PrivateUse,
            Table::NonPrint => matches!(self.category, Category::Control | Category::Surrogate),
            Table::NonCharacter => self.category == Category::NonCharacter,
            Table::Combining => self.category == Category::Mark,
            Table::CombiningLetters => in_ranges(&HANGUL_JAMO, cp),
            Table::DoubleWide => self.width == Some(Width::Wide),
            Table::Ambiguous => self.width == Some(Width::Ambiguous),
            Table::Unassigned => self.category == Category::Unassigned,
            Table::WidenedIn9 => self.width == Some(Width::WidenedIn9),
        }
    }
}

/// Category and width of every codepoint from U+0000 through U+10FFFF.
pub fn codepoints(ucd: &Ucd) -> Result<Vec<CodePoint>, GenerateError> {
    let mut cps = vec![
        CodePoint {
            category: Category::Unassigned,
            width: None,
        };
        MAX_CODEPOINT as usize + 1
    ];
    set_general_categories(&ucd.unicode_data, &mut cps)?;
    set_east_asian_widths(&ucd.east_asian_width, &mut cps)?;
    set_emoji_widths(&ucd.emoji_data, &mut cps)?;
    set_hardcoded_ranges(&mut cps);
    Ok(cps)
}

fn set_general_categories(contents: &str, cps: &mut [CodePoint]) -> Result<(), GenerateError> {
    for (lo, hi, gc) in parse::general_categories(contents)? {
        let category = Category::from_abbreviation(gc);
        for cp in codepoint_slice(cps, lo, hi) {
            cp.category = category;
        }
    }
    Ok(())
}

fn set_east_asian_widths(contents: &str, cps: &mut [CodePoint]) -> Result<(), GenerateError> {
    for line in parse::property_lines(parse::EAST_ASIAN_WIDTH, contents)? {
        let width = match line.value {
            "A" => Width::Ambiguous,
            "F" | "W" => Width::Wide,
            _ => Width::Narrow,
        };
        for cp in codepoint_slice(cps, line.lo, line.hi) {
            cp.width = Some(width);
        }
    }
    for &(lo, hi) in &DEFAULT_WIDE {
        for cp in codepoint_slice(cps, lo, hi) {
            if cp.width.is_none() {
                cp.width = Some(Width::Wide);
            }
        }
    }
    Ok(())
}

// Only emoji presentation matters; text-presentation emoji keep their East
// Asian width. Emoji 3.0 shipped with Unicode 9.
fn set_emoji_widths(contents: &str, cps: &mut [CodePoint]) -> Result<(), GenerateError> {
    for line in parse::property_lines(parse::EMOJI_DATA, contents)? {
        if line.value != "Emoji_Presentation" {
            continue;
        }
        let width = if parse::emoji_version(line.comment) >= (3, 0) {
            Width::Wide
        } else {
            Width::WidenedIn9
        };
        for cp in line.lo..=line.hi.min(MAX_CODEPOINT) {
            if in_ranges(&[REGIONAL_INDICATORS], cp) {
                continue;
            }
            cps[cp as usize].width = Some(width);
        }
    }
    Ok(())
}

fn set_hardcoded_ranges(cps: &mut [CodePoint]) {
    for &(lo, hi) in &PRIVATE_USE {
        for cp in codepoint_slice(cps, lo, hi) {
            cp.category = Category::PrivateUse;
        }
    }
    for cp in codepoint_slice(cps, SURROGATES.0, SURROGATES.1) {
        cp.category = Category::Surrogate;
    }
    for (lo, hi) in noncharacters() {
        for cp in codepoint_slice(cps, lo, hi) {
            cp.category = Category::NonCharacter;
        }
    }
}

fn noncharacters() -> impl Iterator<Item = Range> {
    let planes = (0..=16).map(|plane| {
        let last = 0x10000 * plane + 0xFFFE;
        (last, last + 1)
    });
    Some((0xFDD0, 0xFDEF)).into_iter().chain(planes)
}

/// Every codepoint as a singleton range in each table it belongs to.
/// Coalescing is left to [`crate::build::build`].
pub fn raw_tables(cps: &[CodePoint]) -> Vec<(Table, Vec<Range>)> {
    let mut raw: Vec<(Table, Vec<Range>)> =
        Table::ALL.iter().map(|&table| (table, Vec::new())).collect();
    for (cp, point) in (0u32..).zip(cps) {
        for (table, ranges) in &mut raw {
            if point.belongs_to(*table, cp) {
                ranges.push((cp, cp));
            }
        }
    }
    raw
}

fn codepoint_slice(cps: &mut [CodePoint], lo: u32, hi: u32) -> &mut [CodePoint] {
    let end = cps.len().min(hi as usize + 1);
    let start = end.min(lo as usize);
    &mut cps[start..end]
}

fn in_ranges(ranges: &[Range], cp: u32) -> bool {
    ranges.iter().any(|&(lo, hi)| lo <= cp && cp <= hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build;

    const UNICODE_DATA: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING GRAVE;;;;
1160;HANGUL JUNGSEONG FILLER;Lo;0;L;;;;;N;;;;;
200B;ZERO WIDTH SPACE;Cf;0;BN;;;;;N;;;;;
231A;WATCH;So;0;ON;;;;;N;;;;;
3042;HIRAGANA LETTER A;Lo;0;L;;;;;N;;;;;
4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
E000;<Private Use, First>;Co;0;L;;;;;N;;;;;
F8FF;<Private Use, Last>;Co;0;L;;;;;N;;;;;
1F1E6;REGIONAL INDICATOR SYMBOL LETTER A;So;0;L;;;;;N;;;;;
1F923;ROLLING ON THE FLOOR LAUGHING;So;0;ON;;;;;N;;;;;
";

    const EAST_ASIAN_WIDTH: &str = "\
0000;N
0041;Na
0300;A
1160;N
200B;N
231A;N
3042;W
4E00..9FFF;W
E000..F8FF;A
1F1E6;N
1F923;W
";

    const EMOJI_DATA: &str = "\
231A..231B    ; Emoji_Presentation   # E0.6   [2] (⌚..⌛)    watch..hourglass done
1F1E6..1F1FF  ; Emoji_Presentation   # E0.0  [26] (🇦..🇿)    regional indicator symbol letter a..regional indicator symbol letter z
1F923         ; Emoji_Presentation   # E3.0   [1] (🤣)       rolling on the floor laughing
0041          ; Emoji_Component      # E0.0   [1] (A)
";

    fn sample() -> Vec<CodePoint> {
        let ucd = Ucd {
            unicode_data: UNICODE_DATA.to_owned(),
            east_asian_width: EAST_ASIAN_WIDTH.to_owned(),
            emoji_data: EMOJI_DATA.to_owned(),
        };
        codepoints(&ucd).unwrap()
    }

    #[test]
    fn categories() {
        let cps = sample();
        assert_eq!(cps[0x0000].category, Category::Control);
        assert_eq!(cps[0x0041].category, Category::Graphic);
        assert_eq!(cps[0x0300].category, Category::Mark);
        assert_eq!(cps[0x200B].category, Category::Control);
        assert_eq!(cps[0x6000].category, Category::Graphic);
        assert_eq!(cps[0x0378].category, Category::Unassigned);
        assert_eq!(cps[0xD800].category, Category::Surrogate);
        assert_eq!(cps[0xF0000].category, Category::PrivateUse);
        assert_eq!(cps[0xFDD0].category, Category::NonCharacter);
        assert_eq!(cps[0x10FFFF].category, Category::NonCharacter);
        assert_eq!(cps[0x10FFFD].category, Category::PrivateUse);
    }

    #[test]
    fn widths() {
        let cps = sample();
        assert_eq!(cps[0x0041].width, Some(Width::Narrow));
        assert_eq!(cps[0x0300].width, Some(Width::Ambiguous));
        assert_eq!(cps[0x3042].width, Some(Width::Wide));
        // Unlisted but inside a block that defaults to wide.
        assert_eq!(cps[0x3400].width, Some(Width::Wide));
        assert_eq!(cps[0x3FFFD].width, Some(Width::Wide));
        assert_eq!(cps[0x3FFFE].width, None);
        assert_eq!(cps[0x0378].width, None);
    }

    #[test]
    fn emoji_presentation() {
        let cps = sample();
        assert_eq!(cps[0x231A].width, Some(Width::WidenedIn9));
        // Listed in emoji-data.txt but not in UnicodeData.txt.
        assert_eq!(cps[0x231B].width, Some(Width::WidenedIn9));
        assert_eq!(cps[0x1F923].width, Some(Width::Wide));
        assert_eq!(cps[0x1F1E6].width, Some(Width::Narrow));
        assert_eq!(cps[0x1F1FF].width, None);
    }

    #[test]
    fn tables() {
        let tables = build(raw_tables(&sample())).unwrap();
        assert_eq!(tables.table_for(Table::Ascii), [(0x20, 0x7E)]);
        assert_eq!(tables.table_for(Table::PrivateUse)[0], (0xE000, 0xF8FF));
        assert_eq!(
            tables.table_for(Table::CombiningLetters),
            [(0x1160, 0x11FF), (0xD7B0, 0xD7FF)],
        );
        assert_eq!(tables.table_for(Table::NonCharacter).len(), 18);
        assert_eq!(tables.table_for(Table::WidenedIn9), [(0x231A, 0x231B)]);

        let set = tables.as_set();
        assert_eq!(set.classify(0x41), widechar_width::WcWidth::One);
        assert_eq!(set.classify(0x200B), widechar_width::WcWidth::NonPrint);
        assert_eq!(set.classify(0x300), widechar_width::WcWidth::Combining);
        assert_eq!(set.classify(0x1160), widechar_width::WcWidth::Combining);
        assert_eq!(set.classify(0x3042), widechar_width::WcWidth::Two);
        assert_eq!(set.classify(0x4E00), widechar_width::WcWidth::Two);
        assert_eq!(set.classify(0x3400), widechar_width::WcWidth::Two);
        assert_eq!(set.classify(0xE000), widechar_width::WcWidth::PrivateUse);
        assert_eq!(set.classify(0x0378), widechar_width::WcWidth::Unassigned);
        assert_eq!(set.classify(0x231A), widechar_width::WcWidth::WidenedIn9);
        assert_eq!(set.classify(0xFFFF), widechar_width::WcWidth::NonCharacter);
    }

    #[test]
    fn noncharacter_ranges() {
        let ranges: Vec<Range> = noncharacters().collect();
        assert_eq!(ranges.len(), 18);
        assert_eq!(ranges[0], (0xFDD0, 0xFDEF));
        assert_eq!(ranges[1], (0xFFFE, 0xFFFF));
        assert_eq!(ranges[17], (0x10FFFE, 0x10FFFF));
    }
}
