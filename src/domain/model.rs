use crate::domain::ports::{AddressRecord, PersonRecord};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A street-and-number pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Address {
    pub street: String,
    pub number: String,
}

impl Address {
    pub fn new(street: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
        }
    }
}

impl AddressRecord for Address {
    fn street(&self) -> &str {
        &self.street
    }

    fn number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.street, self.number)
    }
}

/// A person with one primary address, plus secondary addresses and aliases
/// kept in the order they were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Person {
    pub name: String,
    pub surname: String,
    pub address: Address,
    #[serde(default)]
    pub other_addresses: Vec<Address>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            address,
            other_addresses: Vec::new(),
            aliases: Vec::new(),
        }
    }

    pub fn with_other_addresses(mut self, other_addresses: Vec<Address>) -> Self {
        self.other_addresses = other_addresses;
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }
}

impl PersonRecord for Person {
    type Address = Address;

    fn name(&self) -> &str {
        &self.name
    }

    fn surname(&self) -> &str {
        &self.surname
    }

    fn address(&self) -> &Address {
        &self.address
    }

    fn other_addresses(&self) -> &[Address] {
        &self.other_addresses
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }
}
