use std::fmt;
use widechar_width::Range;

pub struct Output(String);

impl Output {
    pub fn new() -> Self {
        Output(String::new())
    }

    pub fn write_fmt(&mut self, arguments: fmt::Arguments) {
        // Writing into a String cannot fail.
        let _ = fmt::Write::write_fmt(&mut self.0, arguments);
    }

    /// Emit one `static NAME: [Range; N]` item, one range per line.
    pub fn table(&mut self, name: &str, doc: &str, ranges: &[Range]) {
        writeln!(self);
        writeln!(self, "/// {}", doc);
        writeln!(
            self,
            "pub(crate) static {}: [Range; {}] = [",
            name,
            ranges.len(),
        );
        for (lo, hi) in ranges {
            writeln!(self, "    (0x{:05X}, 0x{:05X}),", lo, hi);
        }
        writeln!(self, "];");
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_layout() {
        let mut out = Output::new();
        out.table("PRIVATE_USE", "Private use.", &[(0xE000, 0xF8FF), (0x100000, 0x10FFFD)]);
        let expected = "
/// Private use.
pub(crate) static PRIVATE_USE: [Range; 2] = [
    (0x0E000, 0x0F8FF),
    (0x100000, 0x10FFFD),
];
";
        assert_eq!(out.0, expected);
    }
}
