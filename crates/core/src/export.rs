use crate::model::*;

/// Human-readable report: one line per member, a blank line after each group.
pub fn to_text(groups: &[DuplicateGroup], mut w: impl std::io::Write) -> std::io::Result<()> {
    for g in groups {
        for m in g.members() {
            let s = &m.signature;
            writeln!(
                w,
                "[size = {}, files = {}, dirs = {}] {}",
                s.total_size, s.file_count, s.dir_count, m.path
            )?;
        }
        writeln!(w)?;
    }
    Ok(())
}

pub fn to_csv(groups: &[DuplicateGroup], mut w: impl std::io::Write) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(&mut w);
    writer.write_record(["group", "path", "size", "files", "dirs"])?;
    for (i, g) in groups.iter().enumerate() {
        for m in g.members() {
            writer.write_record([
                (i + 1).to_string(),
                m.path.clone(),
                m.signature.total_size.to_string(),
                m.signature.file_count.to_string(),
                m.signature.dir_count.to_string(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn to_json(groups: &[DuplicateGroup]) -> serde_json::Value {
    serde_json::json!({
        "groups": groups.iter().map(|g| serde_json::json!({
            "signature": g.signature(),
            "members": g.members(),
        })).collect::<Vec<_>>()
    })
}
