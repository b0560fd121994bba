//! Useful macros for declaring marked digests

#[macro_export]
/// Implement `serde::Serialize` and `serde::Deserialize` by passing through to the hex
/// representation of a `MarkedDigest`.
macro_rules! impl_hex_serde {
    ($item:ty) => {
        impl serde::Serialize for $item {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let s = $crate::hashes::MarkedDigest::to_hex(self);
                serializer.serialize_str(&s)
            }
        }

        impl<'de> serde::Deserialize<'de> for $item {
            fn deserialize<D>(deserializer: D) -> Result<$item, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s: String = serde::Deserialize::deserialize(deserializer)?;
                <$item as $crate::hashes::MarkedDigest>::from_hex(&s)
                    .map_err(|e| serde::de::Error::custom(e.to_string()))
            }
        }
    };
}

#[macro_export]
/// Wrap a fixed-length byte array in a marked digest newtype, and implement
/// `MarkedDigest`, conversions, hex `Debug` and hex serde for it.
macro_rules! mark_digest {
    (
        $(#[$outer:meta])*
        $name:ident, $len:expr
    ) => {
        $(#[$outer])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; $len]);

        impl $crate::hashes::MarkedDigest for $name {
            const LENGTH: usize = $len;
        }

        impl $name {
            /// Return the underlying digest bytes
            pub fn to_array(self) -> [u8; $len] {
                self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(buf: [u8; $len]) -> Self {
                Self(buf)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(digest: $name) -> Self {
                digest.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0[..]
            }
        }

        impl AsMut<[u8]> for $name {
            fn as_mut(&mut self) -> &mut [u8] {
                &mut self.0[..]
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(
                    f,
                    "{}({})",
                    stringify!($name),
                    $crate::hashes::MarkedDigest::to_hex(self)
                )
            }
        }

        $crate::impl_hex_serde!($name);
    };
}
