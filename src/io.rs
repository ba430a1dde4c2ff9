use crate::model::{AllocationInput, AllocationResult};
use anyhow::Context;
use csv::WriterBuilder;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Charge les paramètres depuis un JSON
/// `{"worker_count", "day_count", "max_rest_days"}` et les valide.
pub fn load_input_json<P: AsRef<Path>>(path: P) -> anyhow::Result<AllocationInput> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let input: AllocationInput = serde_json::from_slice(&data)
        .with_context(|| format!("parsing {}", path.display()))?;
    input.validate()?;
    Ok(input)
}

/// Export JSON du résultat (jolie mise en forme), écriture atomique.
pub fn export_result_json<P: AsRef<Path>>(
    path: P,
    result: &AllocationResult,
) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(result)?;
    write_atomic(path.as_ref(), &json)
}

/// Export CSV des objectifs par travailleur: header `worker,work_days,rest_days`
pub fn export_targets_csv<P: AsRef<Path>>(
    path: P,
    result: &AllocationResult,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut w = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    w.write_record(["worker", "work_days", "rest_days"])?;
    for t in result.targets() {
        w.write_record([
            t.worker.to_string(),
            t.work_days.to_string(),
            t.rest_days.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
