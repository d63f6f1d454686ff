use bytesize::ByteSize;

/// Running counters of a scan in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub files: u64,
    pub dirs: u64,
    pub bytes: u64,
    pub errors: u64,
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files, {} dirs, {}",
            self.files,
            self.dirs,
            ByteSize(self.bytes)
        )?;
        if self.errors > 0 {
            write!(f, ", {} unreadable", self.errors)?;
        }
        Ok(())
    }
}
