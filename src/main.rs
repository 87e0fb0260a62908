mod data;

use std::path::Path;

use anyhow::{Context, Result};

use data::filter::filtered_indices;
use data::loader::load_csv;
use data::writer::write_csv;

/// Raw vgchartz export consumed by the filter.
const INPUT_PATH: &str = "dataset/vgchartz_3d.csv";
/// Destination for the rows that pass the filter.
const OUTPUT_PATH: &str = "dataset/vgchartz_3d_FILTERED.csv";

fn main() -> Result<()> {
    env_logger::init();

    let table =
        load_csv(Path::new(INPUT_PATH)).with_context(|| format!("loading {INPUT_PATH}"))?;
    log::info!("Loaded {} rows with columns {:?}", table.len(), table.header);

    let keep = filtered_indices(&table)?;
    log::info!("{} of {} rows pass the filter", keep.len(), table.len());

    // Stdout contract: exactly one integer line, the retained row count.
    println!("{}", keep.len());

    write_csv(Path::new(OUTPUT_PATH), &table, &keep)
        .with_context(|| format!("writing {OUTPUT_PATH}"))?;

    Ok(())
}
