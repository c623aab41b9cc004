pub mod address;
pub mod avs_result;
pub mod credit_card;
pub mod gateway_response;
pub mod options;

pub use address::{Address, StandardAddress, StructuredAddress};
pub use avs_result::AvsResult;
pub use credit_card::CreditCard;
pub use gateway_response::{GatewayResponse, ResponseChain};
pub use options::TransactionOptions;
