//! Address table shared by the scripts.
//!
//! The table is a flat JSON object, e.g. `{"token": "0x5FbD…", "staking": "0xe7f1…"}`,
//! written by hand after a deployment. Scripts accept either a literal address or
//! one of these names wherever an address is expected.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use alloy::primitives::Address;

pub const TOKEN: &str = "token";
pub const REWARD_TOKEN: &str = "reward_token";
pub const STAKING: &str = "staking";
pub const ROUTER: &str = "router";
pub const FACTORY: &str = "factory";
pub const PAIR: &str = "pair";

#[derive(Debug, thiserror::Error)]
pub enum AddressBookError {
    #[error("failed to read address book {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("malformed address book {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no address named `{name}` in {origin}")]
    Missing { name: String, origin: String },
}

#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    origin: Option<PathBuf>,
    entries: BTreeMap<String, Address>,
}

impl AddressBook {
    /// Load from a JSON file. A missing file is an empty book.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AddressBookError> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %path.display(),
                    "no address book, only literal addresses resolve"
                );
                return Ok(Self {
                    origin: Some(path.to_path_buf()),
                    ..Self::default()
                });
            }
            Err(source) => {
                return Err(AddressBookError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let mut book = Self::from_json(&json).map_err(|source| AddressBookError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        book.origin = Some(path.to_path_buf());
        Ok(book)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, Address> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }

    pub fn insert(&mut self, name: &str, address: Address) {
        self.entries.insert(name.to_ascii_lowercase(), address);
    }

    pub fn get(&self, name: &str) -> Result<Address, AddressBookError> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| AddressBookError::Missing {
                name: name.to_string(),
                origin: self.origin_label(),
            })
    }

    /// A literal `0x…` address, or the address registered under that name.
    pub fn resolve(&self, name_or_address: &str) -> Result<Address, AddressBookError> {
        if let Ok(address) = name_or_address.parse::<Address>() {
            return Ok(address);
        }
        self.get(name_or_address)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        self.entries.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn origin_label(&self) -> String {
        self.origin
            .as_ref()
            .map_or_else(|| "address book".to_string(), |p| p.display().to_string())
    }
}

impl FromIterator<(String, Address)> for AddressBook {
    fn from_iter<I: IntoIterator<Item = (String, Address)>>(iter: I) -> Self {
        let mut book = Self::default();
        for (name, address) in iter {
            book.insert(&name, address);
        }
        book
    }
}
