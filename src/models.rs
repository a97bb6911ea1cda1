//! Country data as returned by the REST Countries API.
//!
//! Only the fields the application reads are modelled; everything else in the
//! response is ignored. Object-valued maps (`languages`, `currencies`,
//! `nativeName`) keep document order because the first entry is significant.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

/// A country record.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub capital: Vec<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub population: Option<u64>,
    #[serde(default, deserialize_with = "ordered_entries")]
    pub languages: Vec<(String, String)>,
    #[serde(default, deserialize_with = "ordered_entries")]
    pub currencies: Vec<(String, Currency)>,
    #[serde(default)]
    pub alt_spellings: Vec<String>,
    pub cca2: Option<String>,
    pub cca3: Option<String>,
}

impl Country {
    /// The common English name, used for display and identity.
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn first_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: String,
    pub official: Option<String>,
    #[serde(default, deserialize_with = "ordered_entries")]
    pub native_name: Vec<(String, NativeName)>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct NativeName {
    pub official: Option<String>,
    pub common: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct Flags {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    pub symbol: Option<String>,
}

/// Deserializes a JSON object into `(key, value)` pairs in document order.
fn ordered_entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, T>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(EntriesVisitor(PhantomData))
}
