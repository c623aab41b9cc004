pub mod models;
pub mod services;

pub use models::{
    Address, AvsResult, CreditCard, GatewayResponse, ResponseChain, StandardAddress,
    StructuredAddress, TransactionOptions,
};
pub use services::{
    HttpTransport, PaymentGateway, RawResponse, RecordingTransport, SmartpayGateway, Transport,
};
