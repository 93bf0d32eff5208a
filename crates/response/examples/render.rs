use http::StatusCode;
use micro_response::{RedirectResponse, ResponseModel, ServerIdent};
use serde::Serialize;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Serialize)]
struct User {
    id: u64,
    name: &'static str,
    roles: Vec<&'static str>,
}

async fn render<W: AsyncWrite + Unpin>(response: &ResponseModel, out: &mut W) -> io::Result<()> {
    let content = response.content();
    let status = response.status();
    out.write_all(format!("{} {}\r\n", status.as_str(), response.reason_phrase()).as_bytes()).await?;

    for (name, value) in &response.headers() {
        out.write_all(name.as_str().as_bytes()).await?;
        out.write_all(b": ").await?;
        out.write_all(value.as_bytes()).await?;
        out.write_all(b"\r\n").await?;
    }
    out.write_all(format!("content-length: {}\r\n\r\n", content.len()).as_bytes()).await?;

    if let Some(step) = content.write_step() {
        step.write_to_async(&mut *out).await?;
    }
    out.write_all(b"\r\n\r\n").await?;
    out.flush().await
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).with_writer(io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match ServerIdent::new("render-demo", env!("CARGO_PKG_VERSION")) {
        Ok(ident) => {
            if ident.install().is_err() {
                error!("server ident already installed");
            }
        }
        Err(e) => error!(cause = %e, "invalid server ident"),
    }

    let user = User { id: 7, name: "zava", roles: vec!["admin", "writer"] };
    let mut responses = vec![
        ResponseModel::text(StatusCode::OK, "hello world"),
        ResponseModel::html(StatusCode::NOT_FOUND, "<h1>nothing here</h1>"),
        ResponseModel::error("something went wrong"),
    ];

    match ResponseModel::json(StatusCode::CREATED, &user) {
        Ok(response) => responses.push(response),
        Err(e) => error!(cause = %e, "failed to build json response"),
    }

    match RedirectResponse::new("/login") {
        Ok(redirect) => responses.push(redirect.into()),
        Err(e) => error!(cause = %e, "invalid redirect location"),
    }

    let mut stdout = tokio::io::stdout();
    for response in &responses {
        info!(status = response.status().as_u16(), category = %response.category(), "rendering response");
        if let Err(e) = render(response, &mut stdout).await {
            error!(cause = %e, "failed to render response");
            return;
        }
    }
}
