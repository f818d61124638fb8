use std::io::{self, Write};

use tabled::Table;
use tabled::settings::Style;

use crate::models::PriceSnapshotRow;

pub const SNAPSHOT_BANNER: &str = "===== Crypto Data =====";

/// Plain text table (header row + one line per asset, no index column)
pub fn snapshot_table(rows: &[PriceSnapshotRow]) -> String {
    Table::new(rows).with(Style::blank()).to_string()
}

/// Writes the banner, the "as of" line and the table, framed by blank lines.
pub fn print_snapshot<W: Write>(
    out: &mut W,
    rows: &[PriceSnapshotRow],
    as_of: &str,
) -> io::Result<()> {
    writeln!(out, "\n{}", SNAPSHOT_BANNER)?;
    writeln!(out, "Prices as of {}\n", as_of)?;
    writeln!(out, "{}\n", snapshot_table(rows))?;
    out.flush()
}
