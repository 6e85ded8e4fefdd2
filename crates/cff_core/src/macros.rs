/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! Declarative macros used by the record types.

/// Generates a closed, string-backed value set.
///
/// The enum gets `ALL`, `as_str`, `Display`, a case-sensitive `FromStr`
/// that fails with [`UnknownValue`](crate::error::UnknownValue), and a
/// `Serialize` impl that writes the string form.
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($label:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $val:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member, in definition order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            #[doc = "Returns the string value associated with this variant."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $val, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownValue;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $val => Ok(Self::$variant), )+
                    _ => Err($crate::error::UnknownValue::new($label, s)),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

/// Generates person/entity views over a record's subject lists.
macro_rules! subject_views {
    ($ty:ty { $($list:ident => $persons:ident, $entities:ident;)+ }) => {
        impl $ty {
            $(
                pub fn $persons(&self) -> Vec<&$crate::subject::Person> {
                    $crate::subject::persons(&self.$list)
                }

                pub fn $entities(&self) -> Vec<&$crate::subject::Entity> {
                    $crate::subject::entities(&self.$list)
                }
            )+
        }
    };
}

/// Generates borrowing getters for a record's plain fields.
///
/// `str` fields are `Option<String>` and come back as `Option<&str>`;
/// `copy` fields are returned by value; `slice` fields are `Vec<T>` and
/// come back as `&[T]`; `opt` fields are `Option<T>` and come back as
/// `Option<&T>`.
macro_rules! getters {
    (@one str $field:ident $out:ty) => {
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }
    };
    (@one copy $field:ident $out:ty) => {
        pub fn $field(&self) -> $out {
            self.$field
        }
    };
    (@one slice $field:ident $out:ty) => {
        pub fn $field(&self) -> &[$out] {
            &self.$field
        }
    };
    (@one opt $field:ident $out:ty) => {
        pub fn $field(&self) -> Option<&$out> {
            self.$field.as_ref()
        }
    };
    ($ty:ty { $($kind:ident $field:ident: $out:ty),+ $(,)? }) => {
        impl $ty {
            $( getters!(@one $kind $field $out); )+
        }
    };
}
