// Test Helper Modules for Smartpay gateway tests
//
// Offline tests run the real SmartpayGateway against a wiremock server that
// replays Smartpay replies. Remote tests use the same fixtures against the
// Smartpay test environment when SMARTPAY_* credentials are configured.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;
//
// Example:
//   #[tokio::test]
//   async fn test_purchase() {
//       let smartpay = MockSmartpay::start().await;
//       smartpay.mount_happy_path().await;
//
//       let gateway = smartpay.gateway();
//       let response = gateway
//           .purchase(AMOUNT, &SmartpayFixtures::credit_card(), &SmartpayFixtures::options())
//           .await
//           .unwrap();
//
//       assert_success(&response);
//   }

#![allow(dead_code)]

pub mod smartpay_sandbox;

// Re-export commonly used types and functions
pub use assertions::*;
pub use smartpay_sandbox::*;
pub use test_data::*;
