use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;
use crate::config::Config;
use crate::gateways::{GatewayError, MessagingGateway};

pub struct TwilioGateway {
    client: Client,
    api_url: String,
    account_sid: String,
    auth_token: String,
}

#[derive(Deserialize, Debug)]
struct TwilioErrorBody {
    message: String,
}

#[derive(Deserialize, Debug)]
struct TwilioMessage {
    sid: String,
}

impl TwilioGateway {
    pub fn new(
        client: Client,
        config: &Config,
    ) -> Self {
        Self {
            client,
            api_url: config.twilio_api_url.trim_end_matches('/').to_string(),
            account_sid: config.twilio_sid.clone(),
            auth_token: config.twilio_token.clone(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_url, self.account_sid
        )
    }

    async fn create_message(
        &self,
        from: &str,
        to: &str,
        body: &str,
    ) -> Result<(), GatewayError> {
        let response = self.client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("From", from), ("To", to), ("Body", body)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TwilioErrorBody>(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        match response.json::<TwilioMessage>().await {
            Ok(created) => info!("Twilio accepted message {}", created.sid),
            Err(_) => info!("Twilio accepted message"),
        }
        Ok(())
    }
}

impl MessagingGateway for TwilioGateway {
    fn send<'a>(
        &'a self,
        from: &'a str,
        to: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, Result<(), GatewayError>> {
        self.create_message(from, to, body).boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::{SocketAddr, TcpListener};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use axum::extract::Path;
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Extension, Form, Json, Router};
    use serde_json::json;
    use super::*;

    #[derive(Clone, Debug)]
    struct ReceivedMessage {
        account: String,
        authorization: Option<String>,
        form: HashMap<String, String>,
    }

    type Inbox = Arc<Mutex<Vec<ReceivedMessage>>>;

    async fn accept_message(
        Extension(inbox): Extension<Inbox>,
        Path(account): Path<String>,
        headers: HeaderMap,
        Form(form): Form<HashMap<String, String>>,
    ) -> impl IntoResponse {
        inbox.lock().unwrap().push(ReceivedMessage {
            account,
            authorization: headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
            form,
        });
        (StatusCode::CREATED, Json(json!({ "sid": "SM123", "status": "queued" })))
    }

    async fn reject_message() -> impl IntoResponse {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "code": 21211, "message": "The 'To' number is not a valid phone number." })),
        )
    }

    fn start_mock_twilio(handler: Router) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(handler.into_make_service())
                .await
                .unwrap();
        });
        addr
    }

    fn test_config(api_url: String) -> Config {
        Config {
            twilio_sid: "AC123".to_string(),
            twilio_token: "secret".to_string(),
            twilio_from: "whatsapp:+14155238886".to_string(),
            owner_phone: "whatsapp:+905550000000".to_string(),
            port: 0,
            public_dir: PathBuf::from("public"),
            twilio_api_url: api_url,
        }
    }

    #[tokio::test]
    async fn posts_form_encoded_message_with_basic_auth() {
        let inbox: Inbox = Arc::default();
        let addr = start_mock_twilio(
            Router::new()
                .route("/2010-04-01/Accounts/:account/Messages.json", post(accept_message))
                .layer(Extension(inbox.clone())),
        );
        let gateway = TwilioGateway::new(Client::new(), &test_config(format!("http://{}/", addr)));

        gateway
            .send("whatsapp:+14155238886", "whatsapp:+905550000000", "Merhaba & <hoş geldin>")
            .await
            .unwrap();

        let received = inbox.lock().unwrap().clone();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].account, "AC123");
        assert!(received[0].authorization.as_deref().unwrap().starts_with("Basic "));
        assert_eq!(received[0].form["From"], "whatsapp:+14155238886");
        assert_eq!(received[0].form["To"], "whatsapp:+905550000000");
        assert_eq!(received[0].form["Body"], "Merhaba & <hoş geldin>");
    }

    #[tokio::test]
    async fn provider_errors_surface_as_rejections() {
        let addr = start_mock_twilio(
            Router::new().route("/2010-04-01/Accounts/:account/Messages.json", post(reject_message)),
        );
        let gateway = TwilioGateway::new(Client::new(), &test_config(format!("http://{}", addr)));

        let err = gateway.send("whatsapp:+1", "nope", "body").await.unwrap_err();

        match err {
            GatewayError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "The 'To' number is not a valid phone number.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_transport_error() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let gateway = TwilioGateway::new(Client::new(), &test_config(format!("http://{}", addr)));

        let err = gateway.send("whatsapp:+1", "whatsapp:+2", "body").await.unwrap_err();

        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
