use smartpay::config::{init_tracing, GatewayEnvironment};
use smartpay::{AppError, Config, CreditCard, PaymentGateway, SmartpayGateway, TransactionOptions};

/// Card the Smartpay test environment always authorises
const SANDBOX_CARD: &str = "4111111111111111";

// Sandbox smoke check: one zero-value verify with the configured credentials
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration
    let config = Config::from_env()?;
    init_tracing(&config.app.log_level);
    config.validate()?;

    tracing::info!("Starting Barclaycard Smartpay smoke check");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Endpoint: {}", config.smartpay.endpoint());

    if config.smartpay.environment == GatewayEnvironment::Live {
        return Err(AppError::configuration(
            "Refusing to run the smoke check against the live environment",
        ));
    }

    let gateway = SmartpayGateway::new(config.smartpay)?;
    let card = CreditCard::new(SANDBOX_CARD, 3, 2030, "737");
    let options = TransactionOptions::default()
        .with_order_id("smoke-check")
        .with_description("Smartpay smoke check");

    let response = gateway.verify(&card, &options).await?;
    tracing::info!(
        success = response.success,
        message = %response.message,
        authorization = ?response.authorization,
        "Smoke check finished"
    );

    if response.success {
        Ok(())
    } else {
        Err(AppError::gateway(format!(
            "Smoke check failed: {}",
            response.message
        )))
    }
}
