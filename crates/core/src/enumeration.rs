//! Closed, named constant sets with id/name lookup.

use core::cmp::Ordering;

use crate::error::{DomainError, DomainResult};

/// A closed set of named members, each carrying a stable numeric id and a
/// display name. Implementations come from the [`crate::enumeration!`]
/// macro rather than being written by hand, so the member list and the
/// lookup tables can never drift apart.
pub trait Enumeration: Sized + Copy + PartialEq + 'static {
    fn id(&self) -> i32;

    fn name(&self) -> &'static str;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// Look a member up by id.
    fn from_value(id: i32) -> DomainResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|member| member.id() == id)
            .ok_or_else(|| {
                DomainError::lookup(format!(
                    "'{id}' is not a valid value in {}",
                    std::any::type_name::<Self>()
                ))
            })
    }

    /// Look a member up by exact display name.
    fn from_display_name(name: &str) -> DomainResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|member| member.name() == name)
            .ok_or_else(|| {
                DomainError::lookup(format!(
                    "'{name}' is not a valid display name in {}",
                    std::any::type_name::<Self>()
                ))
            })
    }

    /// Distance between two member ids. `abs_diff` keeps this total even
    /// for ids at the extremes of the `i32` range.
    fn absolute_difference(a: Self, b: Self) -> u32 {
        a.id().abs_diff(b.id())
    }

    /// Ordering by id.
    fn compare(a: Self, b: Self) -> Ordering {
        a.id().cmp(&b.id())
    }
}

/// Define an enumeration type: a plain Rust enum plus its [`Enumeration`]
/// impl, `Display` (the display name) and id-based ordering.
///
/// ```ignore
/// enumeration! {
///     pub enum OrderStatus {
///         Draft = (1, "Draft"),
///         Submitted = (2, "Submitted"),
///     }
/// }
/// ```
///
/// Member ids must be unique within the set; id-based `Ord` would otherwise
/// disagree with the derived `Eq`. Duplicates are rejected at compile time:
///
/// ```compile_fail
/// groundwork_core::enumeration! {
///     pub enum Clashing {
///         First = (1, "First"),
///         Second = (1, "Second"),
///     }
/// }
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($member:ident = ($id:expr, $display:expr)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($member),+
        }

        const _: () = {
            let ids: &[i32] = &[$($id),+];
            let mut i = 0;
            while i < ids.len() {
                let mut j = i + 1;
                while j < ids.len() {
                    assert!(ids[i] != ids[j], "duplicate enumeration member id");
                    j += 1;
                }
                i += 1;
            }
        };

        impl $crate::enumeration::Enumeration for $name {
            fn id(&self) -> i32 {
                match self {
                    $(Self::$member => $id),+
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$member => $display),+
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$member),+]
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::enumeration::Enumeration::name(self))
            }
        }

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(
                    &$crate::enumeration::Enumeration::id(self),
                    &$crate::enumeration::Enumeration::id(other),
                )
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::enumeration! {
        /// Lifecycle of a sample record.
        pub enum SampleStatus {
            Active = (1, "Active"),
            Inactive = (2, "Inactive"),
            Archived = (10, "Archived"),
        }
    }

    #[test]
    fn all_lists_members_in_declaration_order() {
        assert_eq!(
            SampleStatus::all(),
            &[SampleStatus::Active, SampleStatus::Inactive, SampleStatus::Archived]
        );
    }

    #[test]
    fn lookups_round_trip() {
        assert_eq!(SampleStatus::from_value(2).unwrap(), SampleStatus::Inactive);
        assert_eq!(
            SampleStatus::from_display_name("Archived").unwrap(),
            SampleStatus::Archived
        );
    }

    #[test]
    fn failed_value_lookup_names_the_type() {
        let err = SampleStatus::from_value(99).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("'99' is not a valid value in {}", std::any::type_name::<SampleStatus>())
        );
    }

    #[test]
    fn display_name_lookup_is_exact() {
        assert!(SampleStatus::from_display_name("active").is_err());
        let err = SampleStatus::from_display_name("gone").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "'gone' is not a valid display name in {}",
                std::any::type_name::<SampleStatus>()
            )
        );
    }

    #[test]
    fn ordering_and_distance_use_ids() {
        assert_eq!(
            Enumeration::compare(SampleStatus::Active, SampleStatus::Archived),
            Ordering::Less
        );
        assert!(SampleStatus::Active < SampleStatus::Archived);
        assert_eq!(
            SampleStatus::absolute_difference(SampleStatus::Archived, SampleStatus::Inactive),
            8
        );
    }

    #[test]
    fn display_shows_the_display_name() {
        assert_eq!(SampleStatus::Active.to_string(), "Active");
    }

    crate::enumeration! {
        enum Extreme {
            Lowest = (i32::MIN, "Lowest"),
            Highest = (i32::MAX, "Highest"),
        }
    }

    #[test]
    fn distance_is_total_across_the_whole_id_range() {
        assert_eq!(
            Extreme::absolute_difference(Extreme::Lowest, Extreme::Highest),
            u32::MAX
        );
        assert!(Extreme::Lowest < Extreme::Highest);
    }
}
