use crate::WcWidth;

/// Inclusive range of codepoints, `lo <= hi`.
pub type Range = (u32, u32);

/// Identifies one of the range tables consulted by [`TableSet::classify`].
///
/// Variants are declared in precedence order: when a codepoint appears in
/// more than one table, the table declared first decides its width.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Table {
    Ascii,
    PrivateUse,
    NonPrint,
    NonCharacter,
    Combining,
    CombiningLetters,
    DoubleWide,
    Ambiguous,
    Unassigned,
    WidenedIn9,
}

impl Table {
    pub const COUNT: usize = 10;

    /// Every table, in the order they are probed.
    pub const ALL: [Table; Table::COUNT] = [
        Table::Ascii,
        Table::PrivateUse,
        Table::NonPrint,
        Table::NonCharacter,
        Table::Combining,
        Table::CombiningLetters,
        Table::DoubleWide,
        Table::Ambiguous,
        Table::Unassigned,
        Table::WidenedIn9,
    ];

    /// The width reported for codepoints found in this table.
    pub const fn category(self) -> WcWidth {
        match self {
            Table::Ascii => WcWidth::One,
            Table::PrivateUse => WcWidth::PrivateUse,
            Table::NonPrint => WcWidth::NonPrint,
            Table::NonCharacter => WcWidth::NonCharacter,
            Table::Combining | Table::CombiningLetters => WcWidth::Combining,
            Table::DoubleWide => WcWidth::Two,
            Table::Ambiguous => WcWidth::Ambiguous,
            Table::Unassigned => WcWidth::Unassigned,
            Table::WidenedIn9 => WcWidth::WidenedIn9,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Table::Ascii => "ascii",
            Table::PrivateUse => "private",
            Table::NonPrint => "nonprint",
            Table::NonCharacter => "noncharacters",
            Table::Combining => "combining",
            Table::CombiningLetters => "combiningletters",
            Table::DoubleWide => "doublewide",
            Table::Ambiguous => "ambiguous",
            Table::Unassigned => "unassigned",
            Table::WidenedIn9 => "widenedin9",
        }
    }
}

/// A borrowed set of range tables, one per [`Table`].
///
/// Each table must be sorted by `lo` and contain no overlapping or adjacent
/// ranges. This is not checked here; a table violating it classifies some
/// codepoints wrongly but never panics.
#[derive(Copy, Clone, Debug)]
pub struct TableSet<'a> {
    tables: [&'a [Range]; Table::COUNT],
}

impl<'a> TableSet<'a> {
    /// Tables are given in the order of [`Table::ALL`].
    pub const fn new(tables: [&'a [Range]; Table::COUNT]) -> Self {
        TableSet { tables }
    }

    pub fn table_for(&self, table: Table) -> &'a [Range] {
        self.tables[table as usize]
    }

    /// Width category of `c`, from the first table in precedence order that
    /// contains it, or [`WcWidth::One`] if none does.
    pub fn classify(&self, c: u32) -> WcWidth {
        for table in Table::ALL {
            if contains(self.table_for(table), c) {
                return table.category();
            }
        }
        WcWidth::One
    }
}

/// Binary search for the first range whose upper bound is at least `c`.
fn contains(table: &[Range], c: u32) -> bool {
    let i = table.partition_point(|&(_, hi)| hi < c);
    match table.get(i) {
        Some(&(lo, _)) => lo <= c,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &[Range] = &[];

    fn set_with(table: Table, ranges: &'static [Range]) -> TableSet<'static> {
        let mut tables = [EMPTY; Table::COUNT];
        tables[table as usize] = ranges;
        TableSet::new(tables)
    }

    #[test]
    fn search_boundaries() {
        let table = &[(0x10, 0x10), (0x20, 0x2F), (0x40, 0x41)];
        assert!(!contains(table, 0x0F));
        assert!(contains(table, 0x10));
        assert!(!contains(table, 0x11));
        assert!(!contains(table, 0x1F));
        assert!(contains(table, 0x20));
        assert!(contains(table, 0x2F));
        assert!(!contains(table, 0x30));
        assert!(contains(table, 0x41));
        assert!(!contains(table, 0x42));
        assert!(!contains(table, u32::MAX));
    }

    #[test]
    fn search_empty_table() {
        assert!(!contains(EMPTY, 0));
        assert!(!contains(EMPTY, u32::MAX));
    }

    #[test]
    fn search_extremes() {
        let table = &[(0, 0), (u32::MAX, u32::MAX)];
        assert!(contains(table, 0));
        assert!(!contains(table, 1));
        assert!(!contains(table, u32::MAX - 1));
        assert!(contains(table, u32::MAX));
    }

    #[test]
    fn first_table_wins() {
        let mut tables = [EMPTY; Table::COUNT];
        tables[Table::Ambiguous as usize] = &[(0x100, 0x1FF)];
        tables[Table::Unassigned as usize] = &[(0x180, 0x2FF)];
        tables[Table::WidenedIn9 as usize] = &[(0x000, 0x3FF)];
        let set = TableSet::new(tables);
        assert_eq!(set.classify(0x100), WcWidth::Ambiguous);
        assert_eq!(set.classify(0x1FF), WcWidth::Ambiguous);
        assert_eq!(set.classify(0x200), WcWidth::Unassigned);
        assert_eq!(set.classify(0x0FF), WcWidth::WidenedIn9);
        assert_eq!(set.classify(0x300), WcWidth::WidenedIn9);
        assert_eq!(set.classify(0x400), WcWidth::One);
    }

    #[test]
    fn every_table_reports_its_category() {
        static RANGE: &[Range] = &[(0x41, 0x41)];
        for table in Table::ALL {
            let set = set_with(table, RANGE);
            assert_eq!(set.classify(0x41), table.category(), "{:?}", table);
            assert_eq!(set.classify(0x40), WcWidth::One, "{:?}", table);
            assert_eq!(set.classify(0x42), WcWidth::One, "{:?}", table);
        }
    }

    #[test]
    fn all_is_declaration_order() {
        for (i, table) in Table::ALL.iter().enumerate() {
            assert_eq!(*table as usize, i);
        }
    }
}
