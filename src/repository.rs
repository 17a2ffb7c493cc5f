//! Hard-coded [`Person`] fixtures at each level of nesting.

use crate::model::{Address, Person, State};

/// Builds the fixture records. Every call returns fresh, independently owned
/// values, so a caller may mutate what it gets back.
#[derive(Debug, Default, Clone, Copy)]
pub struct PersonRepository {}

impl PersonRepository {
    /// Create a new `PersonRepository`.
    pub fn new() -> Self {
        PersonRepository {}
    }

    fn state(&self) -> State {
        State::new("State1", Some(12345))
    }

    fn address_with_state_null(&self) -> Address {
        Address::new("Street1", 55, None)
    }

    fn address(&self) -> Address {
        let mut address = self.address_with_state_null();
        address.set_state(Some(self.state()));
        address
    }

    /// A person with no address at all.
    pub fn person_with_address_null(&self) -> Person {
        tracing::debug!(fixture = "person_with_address_null", "building fixture");
        Person::new("Fulano", "fulano@email.es", None)
    }

    /// A person with an address, but no state on that address.
    pub fn person_with_state_null(&self) -> Person {
        tracing::debug!(fixture = "person_with_state_null", "building fixture");
        let mut person = self.person_with_address_null();
        person.set_address(Some(self.address_with_state_null()));
        person
    }

    /// A person with every level populated: the state code is `12345`.
    pub fn person_test(&self) -> Person {
        tracing::debug!(fixture = "person_test", "building fixture");
        let mut person = self.person_with_address_null();
        person.set_address(Some(self.address()));
        person
    }
}

#[cfg(test)]
mod tests {
    use super::PersonRepository;

    #[test]
    fn test_fixture_nesting() {
        let _ = tracing_subscriber::fmt::try_init();
        let repo = PersonRepository::new();

        assert!(repo.person_with_address_null().address().is_none());

        let person = repo.person_with_state_null();
        let address = person.address().expect("address is populated");
        assert_eq!(address.street(), "Street1");
        assert!(address.state().is_none());

        let person = repo.person_test();
        let state = person
            .address()
            .and_then(|a| a.state())
            .expect("state is populated");
        assert_eq!(state.name(), "State1");
        assert_eq!(state.code(), Some(12345));
    }

    #[test]
    fn test_fixtures_are_independent() {
        let repo = PersonRepository::new();
        let mut a = repo.person_test();
        a.set_name("Modified Name");
        assert_eq!(repo.person_test().name(), "Fulano");
    }
}
