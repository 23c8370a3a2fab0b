//! Package records parsed from index filenames.

use crate::IndexError;
use serde::Serialize;
use std::fmt;

/// Tags assumed for source distributions, which install anywhere.
const SDIST_PYTHON_TAG: &str = "py3";
const SDIST_ABI_TAG: &str = "none";
pub(crate) const ANY_PLATFORM: &str = "any";

/// Distribution format of a package file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// Prebuilt `.whl` carrying python/abi/platform tags.
    Wheel,
    /// `.tar.gz` source distribution.
    Sdist,
}

impl PackageKind {
    pub const ALL: [PackageKind; 2] = [PackageKind::Wheel, PackageKind::Sdist];

    pub fn extension(self) -> &'static str {
        match self {
            PackageKind::Wheel => ".whl",
            PackageKind::Sdist => ".tar.gz",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PackageKind::Wheel => "wheel",
            PackageKind::Sdist => "sdist",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One package file listed by the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, schemars::JsonSchema)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    /// Interpreter tag, e.g. `cp38` or `py3`.
    pub python_tag: String,
    /// ABI tag, e.g. `none` or `cp38`.
    pub abi_tag: String,
    /// Platform tag, e.g. `any` or `linux_x86_64`.
    pub platform: String,
    pub kind: PackageKind,
}

impl PackageRecord {
    /// Parse a listing filename, extension included.
    ///
    /// Returns `None` when the extension is not a recognized package format.
    pub fn from_filename(filename: &str) -> Option<Result<Self, IndexError>> {
        PackageKind::ALL.into_iter().find_map(|kind| {
            let stem = filename.strip_suffix(kind.extension())?;
            Some(Self::parse(stem, kind).map_err(|reason| IndexError::Parse {
                filename: filename.to_string(),
                reason,
            }))
        })
    }

    /// Parse a filename stem whose extension has already been stripped.
    pub fn parse(stem: &str, kind: PackageKind) -> Result<Self, &'static str> {
        let record = match kind {
            PackageKind::Wheel => Self::parse_wheel(stem)?,
            PackageKind::Sdist => Self::parse_sdist(stem)?,
        };
        if record.name.is_empty() || record.version.is_empty() {
            return Err("empty name or version");
        }
        Ok(record)
    }

    /// `name-version-python-abi-platform`, split from the right so the four
    /// trailing tags are positional and the name keeps any remaining `-`.
    fn parse_wheel(stem: &str) -> Result<Self, &'static str> {
        let mut fields = stem.rsplitn(5, '-');
        let (Some(platform), Some(abi), Some(python), Some(version), Some(name)) = (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) else {
            return Err("expected name-version-python-abi-platform");
        };
        if [python, abi, platform].iter().any(|tag| tag.is_empty()) {
            return Err("empty compatibility tag");
        }
        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            python_tag: python.to_string(),
            abi_tag: abi.to_string(),
            platform: platform.to_string(),
            kind: PackageKind::Wheel,
        })
    }

    /// `name-version`; the version is the last `-` token.
    fn parse_sdist(stem: &str) -> Result<Self, &'static str> {
        let (name, version) = stem.rsplit_once('-').ok_or("expected name-version")?;
        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            python_tag: SDIST_PYTHON_TAG.to_string(),
            abi_tag: SDIST_ABI_TAG.to_string(),
            platform: ANY_PLATFORM.to_string(),
            kind: PackageKind::Sdist,
        })
    }

    /// True when the record installs on any platform.
    pub fn is_platform_independent(&self) -> bool {
        self.platform == ANY_PLATFORM
    }
}

impl fmt::Display for PackageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.name, self.version, self.python_tag, self.abi_tag, self.platform, self.kind
        )
    }
}
