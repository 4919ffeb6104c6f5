//! Target framework resolution.
//!
//! Turns a target framework label and a list of targeting packs into the
//! reference directories that bare assembly names are searched in.
//!
//! Two layouts are supported:
//! - .NET Framework (`net4x`): a single system-wide reference assembly
//!   directory per framework version. Targeting packs do not apply.
//! - .NET (`netX.Y`): `<root>/packs/<pack>.Ref/<version>/ref/<tfm>` for each
//!   requested pack, newest version first. Packs requested later are searched
//!   before earlier ones so they override same-named assemblies.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::{DirectoryOrigin, ReferenceDirectory};
use crate::{Error, Result};

/// Targeting pack used when none is requested.
pub const DEFAULT_TARGETING_PACK: &str = "Microsoft.NETCore.App";

/// Label used for any host runtime with major version 4.
const LEGACY_BASELINE: &str = "net472";

const LEGACY_PREFIX: &str = "net4";

/// Major and minor version of a runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
}

impl RuntimeVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse `major.minor[.anything]`, e.g. a runtime directory name like `8.0.11`.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        Some(Self { major, minor })
    }
}

/// The target framework that reference assemblies are resolved for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformDescriptor {
    label: String,
    legacy: bool,
}

impl PlatformDescriptor {
    /// Descriptor for an explicit label. A platform suffix such as
    /// `-windows` is dropped.
    pub fn from_label(label: &str) -> Self {
        let label = label.split_once('-').map_or(label, |(base, _)| base);
        Self {
            label: label.to_owned(),
            legacy: label.starts_with(LEGACY_PREFIX),
        }
    }

    /// Descriptor matching the runtime this process executes on.
    pub fn from_runtime(version: RuntimeVersion) -> Self {
        if version.major == 4 {
            Self::from_label(LEGACY_BASELINE)
        } else {
            Self::from_label(&format!("net{}.{}", version.major, version.minor))
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    /// `net472` → `v4.7.2`.
    fn legacy_version_dir(&self) -> String {
        let digits: Vec<String> = self.label["net".len()..]
            .chars()
            .filter(char::is_ascii_digit)
            .map(String::from)
            .collect();
        format!("v{}", digits.join("."))
    }
}

/// Access to the host's runtime installation.
///
/// Everything resolution needs to know about the machine goes through this
/// trait, so tests can point it at a fake layout.
pub trait PlatformLocator {
    /// Version of the runtime this process executes on.
    fn runtime_version(&self) -> Option<RuntimeVersion>;

    /// Installation root of that runtime, the parent of `packs/`.
    fn platform_root(&self) -> Option<PathBuf>;

    /// Directory containing `Reference Assemblies/` for .NET Framework.
    fn legacy_reference_root(&self) -> Option<PathBuf>;
}

/// Locator for the runtime installation the tool is deployed into.
///
/// The runtime directory is the one holding the running executable, laid out
/// as `<root>/shared/<framework>/<version>/`.
#[derive(Clone, Debug, Default)]
pub struct HostLocator {
    runtime_dir: Option<PathBuf>,
}

impl HostLocator {
    pub fn detect() -> Self {
        let runtime_dir = std::env::current_exe()
            .and_then(|exe| exe.canonicalize())
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        debug!("runtime directory: {:?}", runtime_dir);
        Self { runtime_dir }
    }

    pub fn with_runtime_dir(runtime_dir: impl Into<PathBuf>) -> Self {
        Self {
            runtime_dir: Some(runtime_dir.into()),
        }
    }
}

impl PlatformLocator for HostLocator {
    fn runtime_version(&self) -> Option<RuntimeVersion> {
        let name = self.runtime_dir.as_deref()?.file_name()?;
        RuntimeVersion::parse(name.to_str()?)
    }

    fn platform_root(&self) -> Option<PathBuf> {
        // <root>/shared/<framework>/<version>
        self.runtime_dir
            .as_deref()?
            .ancestors()
            .nth(3)
            .map(Path::to_path_buf)
    }

    fn legacy_reference_root(&self) -> Option<PathBuf> {
        if cfg!(windows) {
            Some(PathBuf::from(r"C:\Program Files (x86)"))
        } else {
            None
        }
    }
}

/// Output of [`resolve_platform`].
#[derive(Clone, Debug)]
pub struct ResolvedPlatform {
    pub descriptor: PlatformDescriptor,
    /// Existing directories in search order.
    pub directories: Vec<ReferenceDirectory>,
}

/// Resolve the target framework and its reference directories.
pub fn resolve_platform(
    framework: Option<&str>,
    packs: &[String],
    locator: &dyn PlatformLocator,
) -> Result<ResolvedPlatform> {
    let descriptor = match framework {
        Some(label) => PlatformDescriptor::from_label(label),
        None => {
            let version = locator
                .runtime_version()
                .ok_or(Error::UnknownRuntimeVersion)?;
            PlatformDescriptor::from_runtime(version)
        }
    };
    debug!("target framework: {}", descriptor.label());

    let directories = if descriptor.is_legacy() {
        legacy_directories(&descriptor, packs, locator)
    } else {
        pack_directories(&descriptor, packs, locator)?
    };

    Ok(ResolvedPlatform {
        descriptor,
        directories,
    })
}

fn legacy_directories(
    descriptor: &PlatformDescriptor,
    packs: &[String],
    locator: &dyn PlatformLocator,
) -> Vec<ReferenceDirectory> {
    if !packs.is_empty() {
        info!("Ignoring target packs for .NET Framework target");
    }

    let Some(root) = locator.legacy_reference_root() else {
        debug!("no .NET Framework reference assemblies on this host");
        return Vec::new();
    };

    let dir = root
        .join("Reference Assemblies")
        .join("Microsoft")
        .join("Framework")
        .join(".NETFramework")
        .join(descriptor.legacy_version_dir());

    if dir.is_dir() {
        vec![ReferenceDirectory::new(dir, DirectoryOrigin::LegacyFramework)]
    } else {
        debug!("{} does not exist", dir.display());
        Vec::new()
    }
}

fn pack_directories(
    descriptor: &PlatformDescriptor,
    packs: &[String],
    locator: &dyn PlatformLocator,
) -> Result<Vec<ReferenceDirectory>> {
    let packs: Vec<&str> = if packs.is_empty() {
        vec![DEFAULT_TARGETING_PACK]
    } else {
        packs.iter().map(String::as_str).collect()
    };

    let Some(root) = locator.platform_root() else {
        warn!("cannot locate the runtime installation, targeting packs are not searched");
        return Ok(Vec::new());
    };

    let mut directories = Vec::new();
    for pack in packs {
        let pack_dir = root.join("packs").join(format!("{pack}.Ref"));
        if !pack_dir.is_dir() {
            debug!("targeting pack {} not found", pack_dir.display());
            continue;
        }

        // A pack without the requested framework contributes nothing.
        match newest_ref_dir(&pack_dir, descriptor.label())? {
            Some(dir) => {
                debug!("targeting pack {pack}: {}", dir.display());
                directories.push(ReferenceDirectory::new(dir, DirectoryOrigin::TargetingPack));
            }
            None => debug!("targeting pack {pack} has no ref/{}", descriptor.label()),
        }
    }

    // Later packs override earlier ones.
    directories.reverse();
    Ok(directories)
}

/// `ref/<label>` of the greatest version directory that has one.
///
/// Versions compare by directory name, ordinally.
fn newest_ref_dir(pack_dir: &Path, label: &str) -> Result<Option<PathBuf>> {
    let io_error = |source| Error::Io {
        path: pack_dir.to_path_buf(),
        source,
    };

    let mut versions = Vec::new();
    for entry in fs::read_dir(pack_dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            versions.push(path);
        }
    }
    versions.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

    Ok(versions
        .into_iter()
        .map(|version| version.join("ref").join(label))
        .find(|dir| dir.is_dir()))
}
