pub mod ddb;
pub mod events;
pub mod factory;
pub mod sns;

#[derive(Debug, PartialEq)]
pub(crate) enum GatewayPublisherVia {
    Sns,
    LocalDynamoDB,
}
