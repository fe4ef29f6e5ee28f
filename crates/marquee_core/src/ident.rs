//! Closed identifier enumerations
//!
//! Caller configuration names themes, sizes, positions and shapes with
//! strings. Every such knob is parsed into an enum declared with
//! [`identifier_enum!`]; unknown strings resolve to the enum's default
//! variant instead of failing.

/// An enumeration with a stable string id per variant.
pub trait Identifier: Copy + Default + Sized + 'static {
    /// Human-readable name of the enumeration (used in diagnostics).
    const KIND: &'static str;

    /// Stable id for config/serialization.
    fn id(self) -> &'static str;

    /// Exact lookup by id.
    fn from_id(id: &str) -> Option<Self>;

    /// Full variant list, in declaration order.
    fn all() -> &'static [Self];

    /// Lenient lookup: ids are trimmed, lowercased and `-` is treated as `_`.
    /// Unknown ids resolve to the default variant.
    fn parse_or_default(id: &str) -> Self {
        if let Some(value) = Self::from_id(id) {
            return value;
        }
        let normalized = id.trim().to_ascii_lowercase().replace('-', "_");
        match Self::from_id(&normalized) {
            Some(value) => value,
            None => {
                let fallback = Self::default();
                tracing::debug!(
                    kind = Self::KIND,
                    id,
                    fallback = fallback.id(),
                    "unknown identifier, using default"
                );
                fallback
            }
        }
    }
}

/// Declare a closed identifier enumeration.
///
/// Generates the enum, its [`Identifier`] impl, `Default`, `Display`, and
/// lenient serde impls (unknown or `null` values deserialize to the default).
///
/// ```rust
/// marquee_core::identifier_enum! {
///     /// Corner of the screen.
///     pub enum Corner: "corner" {
///         TopLeft => "top_left",
///         BottomRight => "bottom_right",
///     }
///     default = BottomRight;
/// }
///
/// use marquee_core::Identifier;
/// assert_eq!(Corner::parse_or_default("top-left"), Corner::TopLeft);
/// assert_eq!(Corner::parse_or_default("nowhere"), Corner::BottomRight);
/// ```
///
/// [`Identifier`]: crate::Identifier
#[macro_export]
macro_rules! identifier_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $id:literal
            ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::Identifier for $name {
            const KIND: &'static str = $kind;

            fn id(self) -> &'static str {
                match self {
                    $($name::$variant => $id,)+
                }
            }

            fn from_id(id: &str) -> Option<Self> {
                match id {
                    $($id => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::Identifier::id(*self))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::Identifier::id(*self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw: Option<String> =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                Ok(match raw {
                    Some(id) => <$name as $crate::Identifier>::parse_or_default(&id),
                    None => <$name as Default>::default(),
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Identifier;

    crate::identifier_enum! {
        enum Flavor: "flavor" {
            Vanilla => "vanilla",
            DarkChocolate => "dark_chocolate",
        }
        default = Vanilla;
    }

    #[test]
    fn test_exact_and_normalized_lookup() {
        assert_eq!(Flavor::from_id("dark_chocolate"), Some(Flavor::DarkChocolate));
        assert_eq!(Flavor::from_id("Dark-Chocolate"), None);
        assert_eq!(
            Flavor::parse_or_default(" Dark-Chocolate "),
            Flavor::DarkChocolate
        );
    }

    #[test]
    fn test_unknown_falls_back_to_default() {
        assert_eq!(Flavor::parse_or_default("pistachio"), Flavor::Vanilla);
        assert_eq!(Flavor::parse_or_default(""), Flavor::Vanilla);
    }

    #[test]
    fn test_serde_is_lenient() {
        let parsed: Vec<Flavor> =
            serde_json::from_str(r#"["dark_chocolate", "mint", null]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Flavor::DarkChocolate, Flavor::Vanilla, Flavor::Vanilla]
        );
        assert_eq!(
            serde_json::to_string(&Flavor::DarkChocolate).unwrap(),
            "\"dark_chocolate\""
        );
    }

    #[test]
    fn test_all_ids_round_trip() {
        for flavor in Flavor::all() {
            assert_eq!(Flavor::from_id(flavor.id()), Some(*flavor));
        }
        assert_eq!(Flavor::DarkChocolate.to_string(), "dark_chocolate");
    }
}
