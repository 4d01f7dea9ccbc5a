use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::config::ServiceConfig;
use crate::model::{CustomerId, Order, RequestedProduct};
use crate::services::{CreateOrderError, CreateOrderService};
use tracing::{error, info};

/// [`CreateOrderService`] backed by the in-process resource actors.
pub type ActorOrderService = CreateOrderService<CustomerClient, ProductClient, OrderClient>;

/// The runtime orchestrator for the order service.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Handing the actor clients to [`CreateOrderService`]
///
/// # Architecture
///
/// - **Customer Actor**: customer records
/// - **Product Actor**: products and their stock levels
/// - **Order Actor**: placed orders
///
/// # Example
///
/// ```rust
/// use order_service::config::ServiceConfig;
/// use order_service::lifecycle::OrderSystem;
/// use order_service::model::{CustomerCreate, ProductCreate, RequestedProduct};
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new(&ServiceConfig::default());
///
///     let customer = system
///         .customer_client
///         .create_customer(CustomerCreate {
///             name: "Alice".to_string(),
///             email: "alice@example.com".to_string(),
///         })
///         .await?;
///     let product = system
///         .product_client
///         .create_product(ProductCreate {
///             name: "Widget".to_string(),
///             price: Decimal::new(10, 0),
///             quantity: 5,
///         })
///         .await?;
///
///     let order = system
///         .create_order(customer.id, vec![RequestedProduct::new(product.id, 3)])
///         .await?;
///     assert_eq!(order.products[0].quantity, 3);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Customer actor
    pub customer_client: CustomerClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    orders: ActorOrderService,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates and initializes a new `OrderSystem` with all actors running.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &ServiceConfig) -> Self {
        let (customer_actor, customer_client) = crate::customer_actor::new(config.channel_buffer);
        let (product_actor, product_client) = crate::product_actor::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_buffer);

        let customer_handle = tokio::spawn(customer_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        let orders = CreateOrderService::new(
            customer_client.clone(),
            product_client.clone(),
            order_client.clone(),
            config.line_pricing,
        );

        info!(
            channel_buffer = config.channel_buffer,
            line_pricing = %config.line_pricing,
            "Order system started"
        );

        Self {
            customer_client,
            product_client,
            order_client,
            orders,
            handles: vec![customer_handle, product_handle, order_handle],
        }
    }

    /// Places an order. See [`CreateOrderService::execute`].
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        products: Vec<RequestedProduct>,
    ) -> Result<Order, CreateOrderError> {
        self.orders.execute(customer_id, products).await
    }

    /// The order service, for callers that run it on their own tasks.
    pub fn order_service(&self) -> ActorOrderService {
        self.orders.clone()
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops every client this system owns and waits for the actor tasks to finish.
    ///
    /// # Errors
    /// `Err(String)` if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the senders makes each actor's `recv()` return `None`
        let Self {
            customer_client,
            product_client,
            order_client,
            orders,
            handles,
        } = self;
        drop(orders);
        drop(order_client);
        drop(customer_client);
        drop(product_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
