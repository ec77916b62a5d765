use roaring::RoaringBitmap;
use widechar_width::{Table, WcWidth, TABLES};

pub struct Reference {
    bitmaps: Vec<(Table, RoaringBitmap)>,
}

impl Reference {
    pub fn new() -> Self {
        let bitmaps = Table::ALL
            .iter()
            .map(|&table| {
                let mut bitmap = RoaringBitmap::new();
                for &(lo, hi) in TABLES.table_for(table) {
                    bitmap.insert_range(lo..=hi);
                }
                (table, bitmap)
            })
            .collect();
        Reference { bitmaps }
    }

    pub fn classify(&self, c: u32) -> WcWidth {
        for (table, bitmap) in &self.bitmaps {
            if bitmap.contains(c) {
                return table.category();
            }
        }
        WcWidth::One
    }
}
