// Local HTTP server standing in for the content API and the GitHub endpoints.
use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::Mutex;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

#[derive(Clone)]
struct StubRoute {
    status: u16,
    body: String,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path_and_query: String,
    headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }
}

type Recorded = Mutex<Vec<RecordedRequest>>;

#[derive(Default)]
pub struct StubBackendBuilder {
    routes: HashMap<String, StubRoute>,
}

impl StubBackendBuilder {
    /// Registers a canned response for an exact path + query string.
    pub fn json(mut self, path_and_query: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            path_and_query.to_string(),
            StubRoute {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub async fn start(self) -> StubBackend {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub backend");
        let addr = listener.local_addr().expect("stub backend address");

        let routes = web::Data::new(self.routes);
        let recorded: web::Data<Recorded> = web::Data::new(Mutex::new(Vec::new()));
        let recorded_for_server = recorded.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(routes.clone())
                .app_data(recorded_for_server.clone())
                .default_service(web::to(serve_stub))
        })
        .workers(1)
        .listen(listener)
        .expect("listen on stub backend socket")
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        StubBackend {
            addr,
            handle,
            recorded,
        }
    }
}

pub struct StubBackend {
    addr: SocketAddr,
    handle: ServerHandle,
    recorded: web::Data<Recorded>,
}

impl StubBackend {
    pub fn builder() -> StubBackendBuilder {
        StubBackendBuilder::default()
    }

    /// Base URL with the `/api` prefix the content API uses.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Bare origin, for clients whose paths start at the root.
    pub fn origin(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn serve_stub(
    req: HttpRequest,
    routes: web::Data<HashMap<String, StubRoute>>,
    recorded: web::Data<Recorded>,
) -> HttpResponse {
    let key = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string());

    let headers = req
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    recorded.lock().unwrap().push(RecordedRequest {
        path_and_query: key.clone(),
        headers,
    });

    match routes.get(&key) {
        Some(route) => HttpResponse::build(
            StatusCode::from_u16(route.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .content_type("application/json")
        .body(route.body.clone()),
        None => HttpResponse::NotFound()
            .content_type("application/json")
            .body(r#"{"message":"Not Found"}"#),
    }
}
