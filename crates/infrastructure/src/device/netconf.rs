use super::DeviceQuery;
use async_trait::async_trait;
use mwcheck_domain::DomainError;
use russh::client::{self, Msg};
use russh::{Channel, ChannelMsg, Disconnect};
use russh_keys::key;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, info};

const FRAME_DELIMITER: &[u8] = b"]]>]]>";

const HELLO: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    r#"<hello xmlns="urn:ietf:params:xml:ns:netconf:base:1.0">"#,
    "<capabilities>",
    "<capability>urn:ietf:params:xml:ns:netconf:base:1.0</capability>",
    "</capabilities>",
    "</hello>",
    "]]>]]>"
);

/// Connection settings for one device session. Credentials live only
/// for the duration of the invocation.
#[derive(Clone)]
pub struct SessionSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub request_pause: Duration,
    pub connect_timeout: Duration,
}

struct AcceptingHandler;

#[async_trait]
impl client::Handler for AcceptingHandler {
    type Error = russh::Error;

    // Maintenance targets are operator-supplied; host keys are not
    // pinned.
    async fn check_server_key(
        &mut self,
        _server_public_key: &key::PublicKey,
    ) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

/// NETCONF-over-SSH session speaking base-1.0 framing.
///
/// Each [`fetch`](Self::fetch) call opens a fresh connection, runs its
/// queries sequentially with a pause between requests, and disconnects.
pub struct NetconfSession {
    settings: SessionSettings,
}

impl NetconfSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self { settings }
    }

    pub async fn fetch(
        &self,
        queries: &[DeviceQuery],
    ) -> Result<Vec<(DeviceQuery, String)>, DomainError> {
        let settings = &self.settings;
        info!(host = %settings.host, port = settings.port, "connecting to device");

        let config = Arc::new(client::Config::default());
        let mut handle = timeout(
            settings.connect_timeout,
            client::connect(
                config,
                (settings.host.as_str(), settings.port),
                AcceptingHandler,
            ),
        )
        .await
        .map_err(|_| {
            DomainError::Device(format!("connection to {} timed out", settings.host))
        })?
        .map_err(|e| DomainError::Device(format!("connect to {}: {e}", settings.host)))?;

        let authenticated = handle
            .authenticate_password(&settings.username, &settings.password)
            .await
            .map_err(|e| DomainError::Device(format!("authentication: {e}")))?;
        if !authenticated {
            return Err(DomainError::Device(format!(
                "device {} rejected the credentials",
                settings.host
            )));
        }

        let mut channel = handle
            .channel_open_session()
            .await
            .map_err(|e| DomainError::Device(format!("open channel: {e}")))?;
        channel
            .request_subsystem(true, "netconf")
            .await
            .map_err(|e| DomainError::Device(format!("netconf subsystem: {e}")))?;

        channel
            .data(HELLO.as_bytes())
            .await
            .map_err(|e| DomainError::Device(format!("send hello: {e}")))?;
        // The server hello only needs to be consumed.
        read_frame(&mut channel).await?;

        let mut responses = Vec::with_capacity(queries.len());
        for query in queries {
            sleep(settings.request_pause).await;
            debug!(query = query.name(), "sending RPC");
            let rpc = format!("<rpc>{}</rpc>]]>]]>", query.rpc_body());
            channel
                .data(rpc.as_bytes())
                .await
                .map_err(|e| DomainError::Device(format!("send rpc: {e}")))?;
            let reply = read_frame(&mut channel).await?;
            responses.push((*query, reply));
        }

        let _ = channel.eof().await;
        let _ = handle
            .disconnect(Disconnect::ByApplication, "", "en")
            .await;

        Ok(responses)
    }
}

/// Reads channel data until the base-1.0 frame delimiter and returns
/// the frame body.
async fn read_frame(channel: &mut Channel<Msg>) -> Result<String, DomainError> {
    let mut buffer: Vec<u8> = Vec::new();
    loop {
        if let Some(end) = buffer
            .windows(FRAME_DELIMITER.len())
            .position(|window| window == FRAME_DELIMITER)
        {
            return Ok(String::from_utf8_lossy(&buffer[..end]).into_owned());
        }

        match channel.wait().await {
            Some(ChannelMsg::Data { data }) => buffer.extend_from_slice(&data),
            Some(ChannelMsg::Eof) | Some(ChannelMsg::Close) | None => {
                return Err(DomainError::Device(
                    "device closed the session mid-reply".to_string(),
                ));
            }
            Some(_) => {}
        }
    }
}
