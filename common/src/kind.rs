//! Macros for defining kind enums.

/// Macro for defining a kind enum with a fixed set of string names.
///
/// The generated enum gets [`Display`] and [`FromStr`] implementations using
/// the provided names, and an `ALL` constant listing its variants in
/// declaration order.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = "cube",
///
///         #[doc = "A sphere"]
///         Sphere = "sphere",
///     }
/// }
///
/// assert_eq!(Kind::Sphere.to_string(), "sphere");
/// assert_eq!("cube".parse::<Kind>().ok(), Some(Kind::Cube));
/// assert_eq!(Kind::ALL, &[Kind::Cube, Kind::Sphere]);
/// ```
///
/// [`Display`]: std::fmt::Display
/// [`FromStr`]: std::str::FromStr
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        $(#[$attr:meta])*
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $(#[$variant_attr:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
        )]
        $(#[$attr])*
        pub enum $name {
            $(
                #[doc = $variant_doc]
                $(#[$variant_attr])*
                #[strum(serialize = $value)]
                $variant,
            )*
        }

        impl $name {
            /// All the variants, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the name of this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)*
                }
            }
        }
    };
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    define_kind! {
        #[doc = "Traffic light color."]
        enum Light {
            #[doc = "Stop."]
            Red = "red",

            #[doc = "Go."]
            Green = "green",
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!(Light::from_str("red").unwrap(), Light::Red);
        assert_eq!(Light::from_str("green").unwrap(), Light::Green);
        assert!(Light::from_str("Red").is_err());
        assert!(Light::from_str("amber").is_err());
    }

    #[test]
    fn displays_names() {
        assert_eq!(Light::Red.to_string(), "red");
        assert_eq!(Light::Green.as_str(), "green");
    }

    #[test]
    fn lists_variants_in_order() {
        assert_eq!(Light::ALL, &[Light::Red, Light::Green]);
    }
}
