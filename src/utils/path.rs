//! Path utilities: expand `~` in user-supplied database paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/tmp/pain.sqlite"), PathBuf::from("/tmp/pain.sqlite"));
        assert_eq!(expand_tilde("pain.sqlite"), PathBuf::from("pain.sqlite"));
    }
}
