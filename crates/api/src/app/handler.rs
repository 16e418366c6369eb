//! Commands and the generic command handler.
//!
//! A [`Command`] carries the request DTO and a one-shot reply sink. The
//! [`CommandHandler`] runs the use case exactly once and sends exactly one
//! [`ApiResponse`] into the sink, whatever happens:
//!
//! | outcome | log | reply |
//! |---|---|---|
//! | `Ok(Ok(value))` | verbose | success |
//! | `Ok(Err(domain failure))` | error | translated category |
//! | `Err(unexpected)` or panic | error | opaque generic failure |

use std::sync::Arc;

use tokio::sync::oneshot;

use hireboard_core::{DomainFailure, UseCase};
use hireboard_observability::Logger;

use super::dto::IntoPayload;
use super::response::ApiResponse;
use super::translate::TranslateFailure;

/// Inbound command: the DTO plus the sink the single reply goes to.
#[derive(Debug)]
pub struct Command<D> {
    pub dto: D,
    pub reply: oneshot::Sender<ApiResponse>,
}

impl<D> Command<D> {
    pub fn new(dto: D) -> (Self, oneshot::Receiver<ApiResponse>) {
        let (reply, receiver) = oneshot::channel();
        (Self { dto, reply }, receiver)
    }
}

pub struct CommandHandler<U> {
    name: &'static str,
    use_case: Arc<U>,
    logger: Arc<dyn Logger>,
}

impl<U> Clone for CommandHandler<U> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            use_case: Arc::clone(&self.use_case),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<U> CommandHandler<U>
where
    U: UseCase + 'static,
    U::Error: TranslateFailure,
    U::Response: IntoPayload,
{
    pub fn new(name: &'static str, use_case: U, logger: Arc<dyn Logger>) -> Self {
        Self {
            name,
            use_case: Arc::new(use_case),
            logger,
        }
    }

    /// Handle one command. Never fails; the reply is the only output.
    pub async fn execute(&self, command: Command<U::Request>) {
        let Command { dto, reply } = command;
        let response = self.run(dto).await;
        if reply.send(response).is_err() {
            tracing::debug!(command = self.name, "caller went away before the reply");
        }
    }

    /// Build a command for `dto`, handle it, and wait for its reply.
    pub async fn dispatch(&self, dto: U::Request) -> ApiResponse {
        let (command, receiver) = Command::new(dto);
        self.execute(command).await;
        receiver.await.unwrap_or_else(|_| ApiResponse::unexpected())
    }

    async fn run(&self, dto: U::Request) -> ApiResponse {
        let use_case = Arc::clone(&self.use_case);
        // A panic inside the use case surfaces as a JoinError instead of
        // unwinding through the transport.
        let joined = tokio::spawn(async move { use_case.execute(dto).await }).await;

        match joined {
            Ok(Ok(Ok(value))) => {
                self.logger.verbose(&format!("{} succeeded", self.name));
                ApiResponse::success(value.into_payload())
            }
            Ok(Ok(Err(failure))) => {
                self.logger
                    .error(&format!("{} failed: {}: {}", self.name, failure.code(), failure));
                failure.to_response()
            }
            Ok(Err(err)) => {
                self.logger
                    .error(&format!("{} failed unexpectedly: {err:#}", self.name));
                ApiResponse::unexpected()
            }
            Err(join_err) => {
                self.logger
                    .error(&format!("{} aborted: {join_err}", self.name));
                ApiResponse::unexpected()
            }
        }
    }
}
