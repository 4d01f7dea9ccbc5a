//! # Order Creation
//!
//! Validates an order request against customer and product records, deducts the
//! ordered quantities from stock and persists the order.
//!
//! ## Flow
//!
//! 1. Customer lookup
//! 2. Request shape checks (non-empty, no repeated product)
//! 3. One bulk product lookup
//! 4. Per product: quantity and stock checks, the new stock level, the order line
//! 5. Stock write (one conditional batch), then order write
//!
//! The two writes are not linked. When the order write fails, the stock stays
//! decremented and the failure is logged at `error` level.

use crate::config::LinePricing;
use crate::model::{
    CustomerId, Order, OrderCreate, OrderProduct, Product, ProductId, ProductQuantityUpdate,
    RequestedProduct,
};
use crate::repositories::{CustomersRepository, OrdersRepository, ProductsRepository};
use crate::services::CreateOrderError;
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, error, info, instrument, warn};

/// Creates orders on top of the three repository capabilities.
#[derive(Clone)]
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
    pricing: LinePricing,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomersRepository,
    P: ProductsRepository,
    O: OrdersRepository,
{
    pub fn new(customers: C, products: P, orders: O, pricing: LinePricing) -> Self {
        Self {
            customers,
            products,
            orders,
            pricing,
        }
    }

    /// Places an order for `customer_id`.
    ///
    /// # Errors
    /// - `NotFound` for an unknown customer, or a stocked product no line asks for
    /// - `InvalidInput` for an empty list, a repeated or unknown product, or a zero quantity
    /// - `InsufficientStock` when a line asks for more than is in stock
    /// - `Repository` when a lookup or write fails, including a stock conflict with a
    ///   concurrent order
    #[instrument(skip(self, customer_id, requested), fields(customer_id = %customer_id, lines = requested.len()))]
    pub async fn execute(
        &self,
        customer_id: CustomerId,
        requested: Vec<RequestedProduct>,
    ) -> Result<Order, CreateOrderError> {
        let customer = self
            .customers
            .find_by_id(&customer_id)
            .await?
            .ok_or_else(|| CreateOrderError::NotFound("customer".into()))?;

        check_request(&requested)?;

        let stocked = self.products.find_all_by_id(&requested).await?;
        if stocked.len() < requested.len() {
            warn!(
                requested = requested.len(),
                found = stocked.len(),
                "Unknown product in list"
            );
            return Err(CreateOrderError::InvalidInput("unknown product in list".into()));
        }

        let mut updates = Vec::with_capacity(stocked.len());
        let mut lines = Vec::with_capacity(stocked.len());
        for product in &stocked {
            let (update, line) = self.plan_line(product, &requested)?;
            updates.push(update);
            lines.push(line);
        }
        debug!(?updates, "Stock updates planned");

        let product_ids: Vec<ProductId> = updates.iter().map(|u| u.id.clone()).collect();
        self.products.update_quantity(updates).await?;

        let order = self
            .orders
            .create(OrderCreate {
                customer,
                products: lines,
            })
            .await
            .map_err(|e| {
                error!(
                    %customer_id,
                    ?product_ids,
                    error = %e,
                    "Order write failed after stock was decremented"
                );
                e
            })?;

        info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    fn plan_line(
        &self,
        product: &Product,
        requested: &[RequestedProduct],
    ) -> Result<(ProductQuantityUpdate, OrderProduct), CreateOrderError> {
        let quantity = requested
            .iter()
            .find(|line| line.id == product.id)
            .map(|line| line.quantity)
            .ok_or_else(|| CreateOrderError::NotFound("ordered product".into()))?;

        if quantity == 0 {
            return Err(CreateOrderError::InvalidInput(format!(
                "quantity for {} must be greater than zero",
                product.id
            )));
        }

        let remaining = product.quantity.checked_sub(quantity).ok_or_else(|| {
            warn!(product_id = %product.id, requested = quantity, available = product.quantity, "Insufficient stock");
            CreateOrderError::InsufficientStock {
                product_id: product.id.clone(),
                requested: quantity,
                available: product.quantity,
            }
        })?;

        let price = match self.pricing {
            LinePricing::Unit => product.price,
            LinePricing::Extended => product
                .price
                .checked_mul(Decimal::from(quantity))
                .ok_or_else(|| {
                    CreateOrderError::InvalidInput(format!("line price overflows for {}", product.id))
                })?,
        };

        Ok((
            ProductQuantityUpdate {
                id: product.id.clone(),
                quantity: remaining,
                expected: product.quantity,
            },
            OrderProduct {
                product_id: product.id.clone(),
                price,
                quantity,
            },
        ))
    }
}

fn check_request(requested: &[RequestedProduct]) -> Result<(), CreateOrderError> {
    if requested.is_empty() {
        return Err(CreateOrderError::InvalidInput("order has no products".into()));
    }
    let mut seen = HashSet::new();
    if !requested.iter().all(|line| seen.insert(&line.id)) {
        return Err(CreateOrderError::InvalidInput("duplicate product in list".into()));
    }
    Ok(())
}
