//! # Customer
//!
//! Identity fields plus the one account created alongside them.

use crate::account::Account;
use crate::types::StorePolicy;
use crate::validation::{validate_customer_name, ValidationResult};

/// A store customer.
///
/// The account is created in the constructor and can be borrowed but never
/// swapped out.
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    /// Free-form contact details (email, phone).
    contact: String,
    /// Stored for future loyalty pricing; no logic reads it yet.
    loyalty_member: bool,
    account: Account,
}

impl Customer {
    /// Creates a non-loyalty customer with a fresh account.
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> ValidationResult<Self> {
        Customer::with_loyalty(name, contact, false)
    }

    pub fn with_loyalty(
        name: impl Into<String>,
        contact: impl Into<String>,
        loyalty_member: bool,
    ) -> ValidationResult<Self> {
        Customer::with_policy(name, contact, loyalty_member, StorePolicy::default())
    }

    /// Creates a customer whose account enforces `policy`.
    pub fn with_policy(
        name: impl Into<String>,
        contact: impl Into<String>,
        loyalty_member: bool,
        policy: StorePolicy,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_customer_name(&name)?;

        Ok(Customer {
            name,
            contact: contact.into(),
            loyalty_member,
            account: Account::with_policy(policy),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn is_loyalty_member(&self) -> bool {
        self.loyalty_member
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_account_created() {
        let customer = Customer::new("Maryam", "maryam@example.com").unwrap();

        assert_eq!(customer.name(), "Maryam");
        assert_eq!(customer.contact(), "maryam@example.com");
        assert!(!customer.is_loyalty_member());
        assert!(customer.account().cart().is_empty());
        assert!(customer.account().orders().is_empty());
    }

    #[test]
    fn test_customer_loyalty_flag() {
        let customer = Customer::with_loyalty("Maryam", "maryam@example.com", true).unwrap();
        assert!(customer.is_loyalty_member());
    }

    #[test]
    fn test_customer_requires_name() {
        assert!(Customer::new("  ", "nobody@example.com").is_err());
    }

    #[test]
    fn test_customer_policy_reaches_account() {
        let policy = StorePolicy {
            allow_empty_checkout: false,
            ..StorePolicy::default()
        };
        let customer = Customer::with_policy("Maryam", "", false, policy).unwrap();
        assert!(!customer.account().policy().allow_empty_checkout);
    }
}
