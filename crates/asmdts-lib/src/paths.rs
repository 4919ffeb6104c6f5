//! File-naming rules for assemblies, type definitions, and loader modules.

use std::path::{Path, PathBuf};

/// Extensions accepted for input and reference assemblies.
pub const ASSEMBLY_EXTENSIONS: [&str; 2] = [".dll", ".exe"];

/// Extension of the file probed for a bare assembly name.
pub const SYSTEM_ASSEMBLY_EXTENSION: &str = ".dll";

/// Double extension required on type definition outputs.
pub const TYPEDEF_EXTENSION: &str = ".d.ts";

/// Extension of the loader module written next to the type definitions.
pub const LOADER_EXTENSION: &str = ".js";

/// Separator between entries of a list-valued option.
pub const LIST_SEPARATOR: char = ';';

/// Split a list-valued option, dropping empty entries.
///
/// Empty entries show up when build tools concatenate empty item lists,
/// e.g. `"a.dll;;b.dll"` or `";"`.
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(LIST_SEPARATOR).filter(|item| !item.is_empty())
}

pub fn has_assembly_extension(path: &Path) -> bool {
    ASSEMBLY_EXTENSIONS
        .iter()
        .any(|ext| ends_with_ignore_case(path, ext))
}

pub fn has_typedef_extension(path: &Path) -> bool {
    ends_with_ignore_case(path, TYPEDEF_EXTENSION)
}

/// A bare name like `System.Runtime`: no assembly extension and no directory part.
///
/// Bare names are looked up in the reference directories instead of being
/// read from disk as given.
pub fn is_bare_assembly_name(path: &Path) -> bool {
    let text = path.as_os_str().to_string_lossy();
    !has_assembly_extension(path) && !text.contains(['/', '\\'])
}

/// Loader module path for a type definitions path: `lib.d.ts` → `lib.js`.
pub fn loader_path(typedefs: &Path) -> PathBuf {
    let text = typedefs.as_os_str().to_string_lossy();
    if !has_typedef_extension(typedefs) {
        return typedefs.with_extension(&LOADER_EXTENSION[1..]);
    }
    let stem = &text[..text.len() - TYPEDEF_EXTENSION.len()];
    PathBuf::from(format!("{stem}{LOADER_EXTENSION}"))
}

/// File name used in diagnostics, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn ends_with_ignore_case(path: &Path, suffix: &str) -> bool {
    let text = path.as_os_str().to_string_lossy();
    let Some(start) = text.len().checked_sub(suffix.len()) else {
        return false;
    };
    text.is_char_boundary(start) && text[start..].eq_ignore_ascii_case(suffix)
}
