use futures::future::BoxFuture;
use thiserror::Error;

pub mod twilio_gateway;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("could not reach messaging provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("messaging provider rejected the message with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Outbound side of the relay: something that can deliver a text message.
pub trait MessagingGateway: Send + Sync {
    fn send<'a>(
        &'a self,
        from: &'a str,
        to: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, Result<(), GatewayError>>;
}
