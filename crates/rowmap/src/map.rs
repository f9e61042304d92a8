use rowmap_core::{Cursor, Error, Record, Result, ScanTargets};

/// Drains `cursor` into `out`, one `R` per row.
///
/// Each column is matched against `R`'s descriptor table by name; every
/// field mapped to that column becomes a scan target, in column order.
/// Fields the result set does not mention keep their `Default` value.
///
/// Stops at the first failure. Records mapped before it stay in `out`; the
/// failing row is discarded.
pub fn map_result<R, C>(cursor: &mut C, out: &mut Vec<R>) -> Result<()>
where
    R: Record,
    C: Cursor + ?Sized,
{
    let columns = cursor
        .columns()
        .map_err(|err| err.context(Error::column_retrieval()))?;

    // Column → field resolution depends only on the column set and the
    // record type, so it is done once for the whole result set.
    let targets: Vec<(usize, usize)> = columns
        .iter()
        .enumerate()
        .flat_map(|(column, name)| R::field_indices(name).map(move |field| (column, field)))
        .collect();

    tracing::debug!(
        record = R::NAME,
        columns = ?columns,
        targets = targets.len(),
        "mapping result set"
    );

    let mut row = 0;

    while cursor.advance().map_err(|err| scan_failed(err, row))? {
        let mut record = R::default();

        let mut scan_targets = ScanTargets::new(&mut record);
        for &(column, field) in &targets {
            scan_targets.push(column, field);
        }

        cursor
            .scan(&mut scan_targets)
            .map_err(|err| scan_failed(err, row))?;

        out.push(record);
        row += 1;
    }

    tracing::debug!(record = R::NAME, rows = row, "mapped result set");

    Ok(())
}

fn scan_failed(err: Error, row: usize) -> Error {
    if err.is_scan() {
        err
    } else {
        err.context(Error::scan(format!("row {row}")))
    }
}
