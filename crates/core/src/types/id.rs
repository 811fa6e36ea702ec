//! Newtype IDs for type-safe entity references.
//!
//! Catalogue records live in an external document store that keys documents
//! by string, so IDs here wrap `String` rather than an integer. Generated IDs
//! follow the `<prefix>-<millis>-<hex6>` convention used by the existing
//! document data, which keeps newly written records interleaved with the
//! legacy ones.

/// Macro to define a type-safe ID wrapper around a document-store key.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Display`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
/// - `generate()`, which mints a fresh `<prefix>-<millis>-<hex6>` ID
///
/// # Example
///
/// ```rust
/// # use goalgrocer_core::define_id;
/// define_id!(WidgetId, "w");
///
/// let id = WidgetId::new("w-123");
/// assert_eq!(id.as_str(), "w-123");
///
/// let fresh = WidgetId::generate();
/// assert!(fresh.as_str().starts_with("w-"));
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing key.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh ID in the `<prefix>-<millis>-<hex6>` form.
            #[must_use]
            pub fn generate() -> Self {
                let millis = ::chrono::Utc::now().timestamp_millis();
                let suffix: u32 = ::rand::Rng::random_range(&mut ::rand::rng(), 0..0x0100_0000);
                Self(format!("{}-{millis}-{suffix:06x}", $prefix))
            }

            /// The underlying document-store key.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id!(UserId, "u");
define_id!(ProductId, "p");
define_id!(CategoryId, "cat");
define_id!(OrderId, "o");
