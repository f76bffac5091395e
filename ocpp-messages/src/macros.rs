//! Declaration macro for protocol enumerations.

/// Declares a closed protocol enumeration together with its bidirectional
/// string table.
///
/// Every enumerator is listed next to its canonical wire token, which is
/// normative protocol vocabulary: `as_str` is total over the enumerators,
/// and `FromStr` is an exact, case-sensitive match that reports the
/// offending string on failure instead of synthesizing a fallback.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $($(#[$variant_meta])* #[serde(rename = $token)] $variant,)+
        }

        impl $name {
            /// Every enumerator, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Canonical protocol token for this enumerator.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownEnumerator;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    other => Err($crate::error::UnknownEnumerator::new(
                        stringify!($name),
                        other,
                    )),
                }
            }
        }
    };
}

/// Binds message structs to their protocol-defined type names.
macro_rules! message_types {
    ($($message:ident => $name:literal,)+) => {
        $(impl $crate::codec::Message for $message {
            const MESSAGE_TYPE: &'static str = $name;
        })+
    };
}

pub(crate) use message_types;
pub(crate) use wire_enum;
