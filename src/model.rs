//! Plain records with nested, possibly absent, sub-records.
//!
//! Each record offers two kinds of accessor for a field that may be missing:
//! a plain one returning `Option<&T>` (the nullable form) and an `optional_*`
//! one returning an [`Optional`]. The first composes with
//! [`Optional::map_nullable`], the second with [`Optional::flat_map`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Optional;

/// A state, the innermost level of an address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    name: String,
    code: Option<u32>,
}

/// A postal address, which may or may not know its state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address {
    street: String,
    number: u32,
    state: Option<State>,
}

/// A person, who may or may not have an address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Person {
    name: String,
    email: String,
    address: Option<Address>,
}

/// Render a nullable field the way the records print absent fields.
struct Nullable<'a, T>(Option<&'a T>);

impl<T: fmt::Display> fmt::Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => fmt::Display::fmt(v, f),
            None => f.write_str("null"),
        }
    }
}

impl State {
    /// Create a new `State`.
    pub fn new(name: impl Into<String>, code: Option<u32>) -> Self {
        State {
            name: name.into(),
            code,
        }
    }

    /// The state's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The state's code, if known.
    pub fn code(&self) -> Option<u32> {
        self.code
    }

    /// _
    pub fn optional_name(&self) -> Optional<&str> {
        Optional::present(self.name.as_str())
    }

    /// _
    pub fn optional_code(&self) -> Optional<u32> {
        Optional::of_nullable(self.code)
    }

    /// _
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// _
    pub fn set_code(&mut self, code: Option<u32>) {
        self.code = code;
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "State [name={}, code={}]",
            self.name,
            Nullable(self.code.as_ref())
        )
    }
}

impl Address {
    /// Create a new `Address`.
    pub fn new(street: impl Into<String>, number: u32, state: Option<State>) -> Self {
        Address {
            street: street.into(),
            number,
            state,
        }
    }

    /// The street name.
    pub fn street(&self) -> &str {
        &self.street
    }

    /// The house number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The state, if known. This is the nullable accessor.
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    /// _
    pub fn optional_street(&self) -> Optional<&str> {
        Optional::present(self.street.as_str())
    }

    /// _
    pub fn optional_number(&self) -> Optional<u32> {
        Optional::present(self.number)
    }

    /// The state, if known, as an [`Optional`].
    pub fn optional_state(&self) -> Optional<&State> {
        Optional::of_nullable(self.state.as_ref())
    }

    /// _
    pub fn set_street(&mut self, street: impl Into<String>) {
        self.street = street.into();
    }

    /// _
    pub fn set_number(&mut self, number: u32) {
        self.number = number;
    }

    /// _
    pub fn set_state(&mut self, state: Option<State>) {
        self.state = state;
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Address [street={}, number={}, state={}]",
            self.street,
            self.number,
            Nullable(self.state.as_ref())
        )
    }
}

impl Person {
    /// Create a new `Person`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: Option<Address>,
    ) -> Self {
        Person {
            name: name.into(),
            email: email.into(),
            address,
        }
    }

    /// The person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The address, if known. This is the nullable accessor.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// _
    pub fn optional_name(&self) -> Optional<&str> {
        Optional::present(self.name.as_str())
    }

    /// _
    pub fn optional_email(&self) -> Optional<&str> {
        Optional::present(self.email.as_str())
    }

    /// The address, if known, as an [`Optional`].
    pub fn optional_address(&self) -> Optional<&Address> {
        Optional::of_nullable(self.address.as_ref())
    }

    /// _
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// _
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// _
    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = address;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person [name={}, email={}, address={}]",
            self.name,
            self.email,
            Nullable(self.address.as_ref())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, Person, State};
    use crate::Optional;

    #[test]
    fn test_display_nested() {
        let state = State::new("State1", Some(12345));
        let address = Address::new("Street1", 55, Some(state));
        let person = Person::new("Fulano", "fulano@email.es", Some(address));
        assert_eq!(
            person.to_string(),
            "Person [name=Fulano, email=fulano@email.es, address=Address [street=Street1, \
             number=55, state=State [name=State1, code=12345]]]"
        );
    }

    #[test]
    fn test_display_null_fields() {
        let person = Person::new("Fulano", "fulano@email.es", None);
        assert_eq!(
            person.to_string(),
            "Person [name=Fulano, email=fulano@email.es, address=null]"
        );
        let state = State::new("State1", None);
        assert_eq!(state.to_string(), "State [name=State1, code=null]");
    }

    #[test]
    fn test_accessor_pairs_agree() {
        let mut address = Address::new("Street1", 55, None);
        assert_eq!(address.state(), None);
        assert!(address.optional_state().is_empty());

        address.set_state(Some(State::new("State1", Some(1))));
        assert_eq!(
            Optional::of_nullable(address.state()),
            address.optional_state()
        );
        assert_eq!(address.optional_street(), Optional::present("Street1"));
        assert_eq!(address.optional_number(), Optional::present(55));
    }

    #[test]
    fn test_setters() {
        let mut person = Person::new("Fulano", "fulano@email.es", None);
        person.set_name("Mengano");
        person.set_email("mengano@email.es");
        person.set_address(Some(Address::new("Street2", 1, None)));
        assert_eq!(person.name(), "Mengano");
        assert_eq!(person.optional_email(), Optional::present("mengano@email.es"));
        assert_eq!(
            person.optional_address().map(Address::street),
            Optional::present("Street2")
        );

        let mut state = State::new("State1", Some(1));
        state.set_name("State2");
        state.set_code(None);
        assert_eq!(state.optional_name(), Optional::present("State2"));
        assert!(state.optional_code().is_empty());
        assert_eq!(state.code(), None);
    }
}
