use thiserror::Error;
use widechar_width::{Range, Table, TableSet};

#[derive(Error, Debug, Eq, PartialEq)]
pub enum BuildError {
    #[error("{} table has inverted range {lo:#06X}..{hi:#06X}", .table.name())]
    InvertedRange { table: Table, lo: u32, hi: u32 },

    #[error("{} table was supplied more than once", .0.name())]
    DuplicateTable(Table),
}

/// Range tables that are sorted, coalesced, and frozen.
#[derive(Debug)]
pub struct BuiltTables {
    tables: [Vec<Range>; Table::COUNT],
}

impl BuiltTables {
    pub fn table_for(&self, table: Table) -> &[Range] {
        &self.tables[table as usize]
    }

    pub fn as_set(&self) -> TableSet {
        TableSet::new(Table::ALL.map(|table| self.table_for(table)))
    }
}

/// Sort each table's ranges and merge the ones that overlap or touch.
/// Tables missing from `raw` are empty.
pub fn build<I>(raw: I) -> Result<BuiltTables, BuildError>
where
    I: IntoIterator<Item = (Table, Vec<Range>)>,
{
    let mut tables: [Option<Vec<Range>>; Table::COUNT] = Default::default();
    for (table, mut ranges) in raw {
        let slot = &mut tables[table as usize];
        if slot.is_some() {
            return Err(BuildError::DuplicateTable(table));
        }
        if let Some(&(lo, hi)) = ranges.iter().find(|(lo, hi)| lo > hi) {
            return Err(BuildError::InvertedRange { table, lo, hi });
        }
        ranges.sort_unstable();
        *slot = Some(coalesce(ranges));
    }
    Ok(BuiltTables {
        tables: tables.map(Option::unwrap_or_default),
    })
}

fn coalesce(sorted: Vec<Range>) -> Vec<Range> {
    let mut merged: Vec<Range> = Vec::with_capacity(sorted.len());
    for (lo, hi) in sorted {
        if let Some(last) = merged.last_mut() {
            if lo <= last.1.saturating_add(1) {
                last.1 = last.1.max(hi);
                continue;
            }
        }
        merged.push((lo, hi));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use widechar_width::WcWidth;

    fn assert_invariants(tables: &BuiltTables) {
        for table in Table::ALL {
            let ranges = tables.table_for(table);
            for &(lo, hi) in ranges {
                assert!(lo <= hi, "{:?}", table);
            }
            for pair in ranges.windows(2) {
                assert!(
                    pair[0].1.saturating_add(1) < pair[1].0,
                    "{:?}: {:X?}",
                    table,
                    pair,
                );
            }
        }
    }

    #[test]
    fn sorts_and_merges() {
        let ranges = vec![
            (0x30, 0x30),
            (0x10, 0x12),
            (0x13, 0x14),
            (0x11, 0x11),
            (0x20, 0x28),
            (0x25, 0x2A),
        ];
        let tables = build([(Table::DoubleWide, ranges)]).unwrap();
        assert_invariants(&tables);
        assert_eq!(
            tables.table_for(Table::DoubleWide),
            [(0x10, 0x14), (0x20, 0x2A), (0x30, 0x30)],
        );
        assert!(tables.table_for(Table::Ascii).is_empty());
    }

    #[test]
    fn merges_singletons_into_runs() {
        let singletons: Vec<Range> = (0x100..0x200)
            .chain(0x300..0x301)
            .map(|cp| (cp, cp))
            .rev()
            .collect();
        let tables = build([(Table::Unassigned, singletons)]).unwrap();
        assert_eq!(
            tables.table_for(Table::Unassigned),
            [(0x100, 0x1FF), (0x300, 0x300)],
        );
    }

    #[test]
    fn merges_at_top_of_u32() {
        let ranges = vec![(u32::MAX, u32::MAX), (0, u32::MAX)];
        let tables = build([(Table::Unassigned, ranges)]).unwrap();
        assert_eq!(tables.table_for(Table::Unassigned), [(0, u32::MAX)]);
    }

    #[test]
    fn rejects_inverted_range() {
        let err = build([(Table::Ambiguous, vec![(0x10, 0x20), (0x41, 0x40)])]).unwrap_err();
        assert_eq!(
            err,
            BuildError::InvertedRange {
                table: Table::Ambiguous,
                lo: 0x41,
                hi: 0x40,
            },
        );
        assert_eq!(err.to_string(), "ambiguous table has inverted range 0x0041..0x0040");
    }

    #[test]
    fn rejects_duplicate_table() {
        let err = build([
            (Table::Combining, vec![(0x300, 0x36F)]),
            (Table::Combining, vec![(0x483, 0x489)]),
        ])
        .unwrap_err();
        assert_eq!(err, BuildError::DuplicateTable(Table::Combining));
    }

    #[test]
    fn precedence_across_overlapping_tables() {
        let tables = build([
            (Table::Unassigned, vec![(0x3400, 0x4DBF)]),
            (Table::Ambiguous, vec![(0x4000, 0x4FFF)]),
            (Table::DoubleWide, vec![(0x3400, 0x3400)]),
            (Table::PrivateUse, vec![(0xE000, 0xF8FF)]),
        ])
        .unwrap();
        let set = tables.as_set();
        assert_eq!(set.classify(0x3400), WcWidth::Two);
        assert_eq!(set.classify(0x3401), WcWidth::Unassigned);
        assert_eq!(set.classify(0x4000), WcWidth::Ambiguous);
        assert_eq!(set.classify(0x4DBF), WcWidth::Ambiguous);
        assert_eq!(set.classify(0x4E00), WcWidth::Ambiguous);
        assert_eq!(set.classify(0x5000), WcWidth::One);
        assert_eq!(set.classify(0xE000), WcWidth::PrivateUse);
    }

    #[test]
    fn boundaries() {
        let tables = build([(Table::Combining, vec![(0x300, 0x36F)])]).unwrap();
        let set = tables.as_set();
        assert_eq!(set.classify(0x2FF), WcWidth::One);
        assert_eq!(set.classify(0x300), WcWidth::Combining);
        assert_eq!(set.classify(0x36F), WcWidth::Combining);
        assert_eq!(set.classify(0x370), WcWidth::One);
    }
}
