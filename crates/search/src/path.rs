use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the working directory and fold `.`/`..` lexically.
///
/// Symlinks are left alone and the path does not need to exist.
pub fn resolve_absolute(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    Ok(normalize_lexically(&joined))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
