/// Read accessors for an address record: a street name and a house number,
/// both kept as text since house numbers may carry suffixes ("42b").
pub trait AddressRecord {
    fn street(&self) -> &str;

    fn number(&self) -> &str;

    /// Street and number joined by a single space. Recomputed from the
    /// current field values on every call; implementations must not cache it.
    fn full_address(&self) -> String {
        format!("{} {}", self.street(), self.number())
    }
}

/// Read accessors for a person record. Any type exposing them qualifies,
/// whatever its backing representation.
pub trait PersonRecord {
    type Address: AddressRecord;

    fn name(&self) -> &str;

    fn surname(&self) -> &str;

    /// The single primary address.
    fn address(&self) -> &Self::Address;

    /// Secondary addresses, in the order they were supplied. May be empty.
    fn other_addresses(&self) -> &[Self::Address];

    /// Alternate names, in the order they were supplied. May be empty.
    fn aliases(&self) -> &[String];
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RawAddress {
        street: &'static str,
        number: &'static str,
    }

    impl AddressRecord for RawAddress {
        fn street(&self) -> &str {
            self.street
        }

        fn number(&self) -> &str {
            self.number
        }
    }

    #[test]
    fn test_full_address_joins_with_single_space() {
        let addr = RawAddress {
            street: "Main St",
            number: "42",
        };
        assert_eq!(addr.full_address(), "Main St 42");
    }

    #[test]
    fn test_full_address_keeps_leading_space_for_empty_street() {
        let addr = RawAddress {
            street: "",
            number: "5",
        };
        assert_eq!(addr.full_address(), " 5");
    }

    #[test]
    fn test_full_address_keeps_trailing_space_for_empty_number() {
        let addr = RawAddress {
            street: "5th Ave",
            number: "",
        };
        assert_eq!(addr.full_address(), "5th Ave ");
    }

    #[test]
    fn test_full_address_is_idempotent() {
        let addr = RawAddress {
            street: "Baker Street",
            number: "221b",
        };
        let first = addr.full_address();
        for _ in 0..3 {
            assert_eq!(addr.full_address(), first);
        }
    }
}
