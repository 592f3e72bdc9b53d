//! HTTP front end serving the signature and crash pages.
//!
//! Every request opens its own [`Database`], runs one query and one render on
//! a blocking thread, then drops both.

use anyhow::{Context, Result};
use crashsig_index::Database;
use crashsig_types::{BucketId, SignatureFilter};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::{CACHE_CONTROL, CONTENT_TYPE, LOCATION};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::presentation::SignatureListRenderer;
use crate::presentation::presenters;
use crate::presentation::routes::{Page, RouteTable, Routes};
use crate::presentation::view_models::ListScope;
use crate::presentation::views::html;

const HTML_MIME: &str = "text/html; charset=utf-8";
const TEXT_MIME: &str = "text/plain; charset=utf-8";

/// Read-only state shared by all connections.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db_path: PathBuf,
    pub routes: RouteTable,
    /// Owner of the watched listing
    pub user: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub location: Option<String>,
    pub body: String,
}

impl Reply {
    fn html(body: String) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: HTML_MIME,
            location: None,
            body,
        }
    }

    fn text(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            content_type: TEXT_MIME,
            location: None,
            body: format!("{}\n", body),
        }
    }

    fn redirect(location: String) -> Self {
        Self {
            status: StatusCode::FOUND,
            content_type: TEXT_MIME,
            location: Some(location),
            body: String::new(),
        }
    }
}

/// Answer one request. Synchronous: touches the database.
pub fn respond(state: &AppState, method: &Method, path: &str) -> Reply {
    if method != Method::GET {
        return Reply::text(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    let Some(page) = state.routes.resolve(path) else {
        debug!(%path, "no route");
        return Reply::text(StatusCode::NOT_FOUND, "Not found");
    };

    if page == Page::Index {
        return Reply::redirect(state.routes.crashes());
    }

    match render_page(state, page) {
        Ok(Some(body)) => Reply::html(body),
        Ok(None) => Reply::text(StatusCode::NOT_FOUND, "Not found"),
        Err(e) => {
            error!(%path, "failed to render page: {:#}", e);
            Reply::text(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// `Ok(None)` when the page refers to a signature that does not exist, or to
/// an optimization that is not pending.
fn render_page(state: &AppState, page: Page) -> Result<Option<String>> {
    let db = Database::open(&state.db_path)?;

    let (title, body) = match page {
        Page::Index => return Ok(None),
        Page::Signatures(scope) => {
            let filter = match scope {
                ListScope::Unreported => SignatureFilter::Unreported,
                ListScope::All => SignatureFilter::All,
                ListScope::Watched => SignatureFilter::Watched {
                    user: state.user.clone(),
                },
            };
            let entries = db.list_signatures(&filter)?;
            let body = SignatureListRenderer::new(state.routes.clone())
                .render_scope(&entries, scope)?;
            ("Signatures".to_string(), body)
        }
        Page::SignatureView(id) | Page::SignatureOptimize(id) => {
            let Some(bucket) = db.get_bucket(id)? else {
                return Ok(None);
            };
            if matches!(page, Page::SignatureOptimize(_)) && bucket.optimized_signature.is_none() {
                return Ok(None);
            }
            let crash_count = db.count_bucket_crashes(id)?;
            let view_model =
                presenters::present_signature_detail(&bucket, crash_count, &state.routes);
            (signature_title(id), html::signature_detail(&view_model)?)
        }
        Page::SignatureLinkBug(id) => {
            let Some(bucket) = db.get_bucket(id)? else {
                return Ok(None);
            };
            let providers = db
                .list_bug_providers()?
                .into_iter()
                .map(|p| p.hostname)
                .collect();
            let view_model = presenters::present_link_bug(&bucket, providers, &state.routes);
            (signature_title(id), html::link_bug(&view_model)?)
        }
        Page::Crashes => {
            let crashes = db.list_unbucketed_crashes()?;
            let view_model = presenters::present_crash_list(&crashes);
            ("Crashes".to_string(), html::crash_list(&view_model)?)
        }
    };

    Ok(Some(html::page(&title, &body)?))
}

fn signature_title(id: BucketId) -> String {
    format!("Signature {}", id)
}

fn into_response(reply: Reply) -> std::result::Result<Response<Full<Bytes>>, hyper::http::Error> {
    let mut builder = Response::builder()
        .status(reply.status)
        .header(CONTENT_TYPE, reply.content_type)
        .header(CACHE_CONTROL, "no-cache");
    if let Some(location) = reply.location {
        builder = builder.header(LOCATION, location);
    }
    builder.body(Full::from(reply.body))
}

async fn handle(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> std::result::Result<Response<Full<Bytes>>, hyper::http::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let reply = match tokio::task::spawn_blocking(move || respond(&state, &method, &path)).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("request task failed: {e}");
            Reply::text(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    };

    into_response(reply)
}

/// Bind and serve until the process is interrupted.
pub async fn serve(state: AppState, bind_address: &str, port: u16) -> Result<()> {
    let ip_addr: IpAddr = bind_address
        .parse()
        .with_context(|| format!("Invalid bind address: {bind_address}"))?;
    if !ip_addr.is_loopback() {
        warn!("Server is binding to {bind_address} instead of localhost");
        warn!("Pages are served unauthenticated; anyone who can reach the port can read them");
    }

    let addr = SocketAddr::new(ip_addr, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        "Serving signatures on http://{addr}{}",
        state.routes.signatures_unreported()
    );

    let state = Arc::new(state);
    loop {
        let (stream, peer) = listener.accept().await?;
        debug!(%peer, "accepted connection");
        let io = TokioIo::new(stream);

        let state = state.clone();
        tokio::task::spawn(async move {
            let service = service_fn(move |req| handle(state.clone(), req));
            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                error!("server error: {e}");
            }
        });
    }
}
