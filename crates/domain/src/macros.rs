//! Macro for wire-name conversions on domain enums
//!
//! Calendar statuses and commit modes travel as lowercase strings. This macro
//! generates the string table once and derives `as_str`, `Display`, `FromStr`
//! and an `ALL` slice from it.
//!
//! # Example
//!
//! ```rust
//! use talentbook_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Visibility {
//!     Public,
//!     Private,
//! }
//!
//! impl_wire_name_conversions!(Visibility {
//!     Public => "public",
//!     Private => "private",
//! });
//!
//! assert_eq!("PUBLIC".parse::<Visibility>().unwrap(), Visibility::Public);
//! ```

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a fieldless enum
///
/// Parsing trims surrounding whitespace and ignores ASCII case. Unknown values
/// produce [`TalentBookError::InvalidInput`](crate::errors::TalentBookError)
/// naming the enum.
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant),+];

            /// Wire representation of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = $crate::errors::TalentBookError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| {
                        $crate::errors::TalentBookError::InvalidInput(format!(
                            "invalid {}: {:?}",
                            stringify!($enum_name),
                            s
                        ))
                    })
            }
        }
    };
}
