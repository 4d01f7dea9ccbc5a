//! [`ActorEntity`] implementation for [`Customer`].

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Registers a customer. Name must be non-blank and email must contain `@`.
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CustomerError::ValidationError("name is required".into()));
        }
        let email = params.email.trim();
        if !email.contains('@') {
            return Err(CustomerError::ValidationError(format!(
                "invalid email: {email}"
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id,
            name: name.to_string(),
            email: email.to_lowercase(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_normalizes_email() {
        let customer = Customer::from_create_params(
            CustomerId(1),
            CustomerCreate {
                name: " Alice ".into(),
                email: "Alice@Example.com".into(),
            },
        )
        .unwrap();
        assert_eq!(customer.name, "Alice");
        assert_eq!(customer.email, "alice@example.com");
        assert_eq!(customer.created_at, customer.updated_at);
    }

    #[test]
    fn test_create_rejects_bad_email() {
        let result = Customer::from_create_params(
            CustomerId(1),
            CustomerCreate {
                name: "Alice".into(),
                email: "nope".into(),
            },
        );
        assert!(matches!(result, Err(CustomerError::ValidationError(_))));
    }
}
