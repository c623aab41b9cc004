pub mod gateway_trait;
pub mod scrubber;
pub mod smartpay;
pub mod smartpay_codec;
pub mod transport;

pub use gateway_trait::PaymentGateway;
pub use smartpay::SmartpayGateway;
pub use transport::{HttpTransport, RawResponse, RecordingTransport, Transport};
