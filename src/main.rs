use order_service::config::ServiceConfig;
use order_service::lifecycle::{setup_tracing, OrderSystem};
use order_service::model::{CustomerCreate, ProductCreate, RequestedProduct};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServiceConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting order service demo");

    let system = OrderSystem::new(&config);

    let span = tracing::info_span!("seeding");
    let (customer, keyboard, mouse) = async {
        let customer = system
            .customer_client
            .create_customer(CustomerCreate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;
        let keyboard = system
            .product_client
            .create_product(ProductCreate {
                name: "Keyboard".to_string(),
                price: Decimal::new(4999, 2),
                quantity: 5,
            })
            .await
            .map_err(|e| e.to_string())?;
        let mouse = system
            .product_client
            .create_product(ProductCreate {
                name: "Mouse".to_string(),
                price: Decimal::new(1950, 2),
                quantity: 2,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((customer, keyboard, mouse))
    }
    .instrument(span)
    .await?;

    info!(customer_id = %customer.id, "Customer and products seeded");

    let requests = vec![
        vec![
            RequestedProduct::new(keyboard.id.clone(), 3),
            RequestedProduct::new(mouse.id.clone(), 1),
        ],
        // Only one mouse left after the first order
        vec![RequestedProduct::new(mouse.id.clone(), 2)],
    ];

    for products in requests {
        let span = tracing::info_span!("order_processing");
        let result = system
            .create_order(customer.id.clone(), products)
            .instrument(span)
            .await;

        match result {
            Ok(order) => info!(
                order_id = %order.id,
                lines = order.products.len(),
                "Order processed successfully"
            ),
            Err(e) => error!(error = %e, status = e.status_code(), "Order processing failed"),
        }
    }

    let remaining = system
        .product_client
        .check_stock(keyboard.id.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id = %keyboard.id, remaining, "Stock after orders");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
