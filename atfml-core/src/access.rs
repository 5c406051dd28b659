use std::fmt;

use crate::flags::AccessFlags;

/// Requested visibility of a class or member.
///
/// Variants are declared from weakest to strongest so the derived `Ord`
/// is the visibility ordering used by [`merge`](Self::merge):
///
/// ```
/// use atfml_core::AccessChange;
///
/// assert!(AccessChange::Public > AccessChange::Protected);
/// assert!(AccessChange::PackagePrivate > AccessChange::Private);
/// assert!(AccessChange::Private > AccessChange::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AccessChange {
    /// Leave the visibility alone.
    #[default]
    None,
    Private,
    PackagePrivate,
    Protected,
    Public,
}

impl AccessChange {
    /// All variants in ascending order.
    pub const ALL: [AccessChange; 5] = [
        Self::None,
        Self::Private,
        Self::PackagePrivate,
        Self::Protected,
        Self::Public,
    ];

    /// Combine two requests: the stronger visibility wins.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Keyword used for this visibility in FML access transformer files.
    ///
    /// [`None`](Self::None) is spelled as the empty string.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Private => "private",
            Self::PackagePrivate => "default",
            Self::Protected => "protected",
            Self::Public => "public",
        }
    }

    /// Inverse of [`keyword`](Self::keyword).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "default" => Some(Self::PackagePrivate),
            "private" => Some(Self::Private),
            "" => Some(Self::None),
            _ => None,
        }
    }

    /// Replace the visibility bits of `flags` with this visibility.
    pub fn apply(self, flags: AccessFlags) -> AccessFlags {
        let bit = match self {
            Self::None => return flags,
            Self::Private => AccessFlags::PRIVATE,
            Self::PackagePrivate => AccessFlags::empty(),
            Self::Protected => AccessFlags::PROTECTED,
            Self::Public => AccessFlags::PUBLIC,
        };
        flags.difference(AccessFlags::VISIBILITY) | bit
    }
}

impl fmt::Display for AccessChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Requested change of a boolean modifier such as `final`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModifierChange {
    /// Leave the modifier alone.
    #[default]
    None,
    Remove,
    Add,
}

impl ModifierChange {
    pub const ALL: [ModifierChange; 3] = [Self::None, Self::Remove, Self::Add];

    /// Combine two requests. `Remove` absorbs everything; once a modifier
    /// was asked to be stripped it is never added back.
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Remove, _) | (_, Self::Remove) => Self::Remove,
            (Self::Add, _) | (_, Self::Add) => Self::Add,
            (Self::None, Self::None) => Self::None,
        }
    }

    /// Set or clear `modifier` in `flags`.
    pub fn apply(self, flags: AccessFlags, modifier: AccessFlags) -> AccessFlags {
        match self {
            Self::None => flags,
            Self::Remove => flags.difference(modifier),
            Self::Add => flags.union(modifier),
        }
    }

    /// Sign character used in the `±f` suffix, if any.
    pub const fn sign(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Remove => Some('-'),
            Self::Add => Some('+'),
        }
    }
}

/// A visibility change paired with a `final` modifier change.
///
/// The default value is the identity transform, which changes nothing and
/// is neutral under [`merge`](Self::merge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccessTransform {
    pub access: AccessChange,
    pub final_change: ModifierChange,
}

impl AccessTransform {
    /// The identity transform.
    pub const EMPTY: Self = Self::new(AccessChange::None, ModifierChange::None);

    #[inline]
    pub const fn new(access: AccessChange, final_change: ModifierChange) -> Self {
        Self {
            access,
            final_change,
        }
    }

    /// A transform that only changes visibility.
    #[inline]
    pub const fn visibility(access: AccessChange) -> Self {
        Self::new(access, ModifierChange::None)
    }

    /// Combine two requests for the same target.
    ///
    /// Commutative and associative, with [`EMPTY`](Self::EMPTY) as identity,
    /// so the order in which requests are merged never matters.
    ///
    /// ```
    /// use atfml_core::{AccessChange, AccessTransform, ModifierChange};
    ///
    /// let a = AccessTransform::new(AccessChange::Protected, ModifierChange::Add);
    /// let b = AccessTransform::new(AccessChange::Public, ModifierChange::Remove);
    /// assert_eq!(
    ///     a.merge(b),
    ///     AccessTransform::new(AccessChange::Public, ModifierChange::Remove)
    /// );
    /// ```
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self::new(
            self.access.merge(other.access),
            self.final_change.merge(other.final_change),
        )
    }

    /// True for the identity transform.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Apply this transform to a set of access flags.
    pub fn apply(self, flags: AccessFlags) -> AccessFlags {
        self.final_change
            .apply(self.access.apply(flags), AccessFlags::FINAL)
    }
}

impl fmt::Display for AccessTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.access.keyword())?;
        if let Some(sign) = self.final_change.sign() {
            write!(f, "{sign}f")?;
        }
        Ok(())
    }
}
