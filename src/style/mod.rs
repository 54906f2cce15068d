//! Style composition: closed axis enums mapped to class tokens, joined in a
//! fixed order with conditional fragments and the caller's extra classes.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use leptos::logging::debug_warn;
use strum::VariantNames;
use tw_merge::tw_merge;

use crate::error::{UiError, UiResult};

/// One enumerated style dimension (variant, size, padding, ...).
///
/// Implementors are generated by [`style_axis!`], so the key domain, the
/// default key and the key → token table always come from one declaration.
pub trait StyleAxis: Copy + Default + FromStr + VariantNames + 'static {
    /// Axis name used in diagnostics.
    const NAME: &'static str;

    /// Class fragment for this key. May hold several space-separated classes.
    fn token(self) -> &'static str;

    /// Every key this axis accepts, in declaration order.
    fn domain() -> &'static [&'static str] {
        Self::VARIANTS
    }

    /// Resolves an optional string key. `None` yields the default key; a key
    /// outside the domain is rejected instead of rendering without styling.
    fn resolve(key: Option<&str>) -> UiResult<Self> {
        let Some(key) = key else {
            return Ok(Self::default());
        };
        key.parse::<Self>().map_err(|_| {
            debug_warn!("rejected {} key {:?}", Self::NAME, key);
            UiError::unknown_key(Self::NAME, key, Self::VARIANTS)
        })
    }
}

/// Declares a style axis enum together with its key → token table.
///
/// Keys are the lowercase variant names unless a variant overrides them with
/// `#[strum(serialize = "..")]` / `#[serde(rename = "..")]`. Mark the default
/// key with `#[default]`.
macro_rules! style_axis {
    (
        $(#[$enum_meta:meta])*
        $vis:vis enum $name:ident($axis:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Default,
            ::strum::Display,
            ::strum::AsRefStr,
            ::strum::EnumString,
            ::strum::VariantNames,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[strum(serialize_all = "lowercase")]
        #[serde(rename_all = "lowercase")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::style::StyleAxis for $name {
            const NAME: &'static str = $axis;

            fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

pub(crate) use style_axis;

/// A fragment that only joins the class list while its predicate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditional {
    active: bool,
    token: &'static str,
}

impl Conditional {
    pub const fn when(active: bool, token: &'static str) -> Self {
        Self { active, token }
    }

    /// Always contributes: `on` while `flag` holds, `off` otherwise.
    pub const fn either(flag: bool, on: &'static str, off: &'static str) -> Self {
        Self {
            active: true,
            token: if flag { on } else { off },
        }
    }

    pub fn fragment(self) -> Option<&'static str> {
        self.active.then_some(self.token)
    }
}

/// Final class string for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ComposedClass(String);

impl ComposedClass {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether a single class appears as a whole word.
    pub fn has_class(&self, class: &str) -> bool {
        self.0.split_whitespace().any(|c| c == class)
    }

    /// Opt-in Tailwind conflict resolution (later classes win). The composed
    /// string itself never drops anything.
    pub fn resolve_conflicts(&self) -> String {
        tw_merge!(self.0.as_str())
    }
}

impl Deref for ComposedClass {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ComposedClass {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComposedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ComposedClass> for String {
    fn from(class: ComposedClass) -> Self {
        class.0
    }
}

/// Joins `base`, then the axis tokens in the order given, then every active
/// conditional, then `extra`. Blank fragments are dropped and each fragment
/// is trimmed; `extra` is never filtered.
pub fn compose(
    base: &str,
    axes: &[&str],
    conditionals: &[Conditional],
    extra: &str,
) -> ComposedClass {
    let fragments = std::iter::once(base)
        .chain(axes.iter().copied())
        .chain(conditionals.iter().filter_map(|c| c.fragment()))
        .chain(std::iter::once(extra))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>();

    ComposedClass(fragments.join(" "))
}
