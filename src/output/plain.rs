use std::io::Write;

/// Writes `sums` as plain text, one per line.
///
/// A run with zero sums writes nothing, not even a newline.
pub fn write_plain<W>(out: &mut W, sums: &[i64])
where
    W: Write,
{
    write_plain_result(out, sums).expect("while writing output");
}

fn write_plain_result<W>(out: &mut W, sums: &[i64]) -> std::io::Result<()>
where
    W: Write,
{
    for sum in sums {
        writeln!(out, "{sum}")?;
    }
    Ok(())
}
