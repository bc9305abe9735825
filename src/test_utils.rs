#[cfg(test)]
pub mod test_helpers {
    use std::io::{BufRead, BufReader, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::api::{ApiRequest, ApiResponse};
    use crate::app::App;
    use crate::config::Config;

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    /// App wired to in-memory channels
    ///
    /// The receiver sees every request the app issues; the sender injects
    /// worker responses.
    pub struct TestApp {
        pub app: App,
        pub requests: UnboundedReceiver<ApiRequest>,
        pub responses: Sender<ApiResponse>,
        pub start: Instant,
    }

    impl TestApp {
        pub fn new() -> Self {
            let (request_tx, requests) = unbounded_channel();
            let (responses, response_rx) = mpsc::channel();
            let app = App::new(&Config::default(), request_tx, response_rx);
            Self {
                app,
                requests,
                responses,
                start: Instant::now(),
            }
        }

        pub fn at(&self, ms: u64) -> Instant {
            self.start + Duration::from_millis(ms)
        }

        pub fn type_str(&mut self, text: &str, at_ms: u64) {
            let now = self.at(at_ms);
            for ch in text.chars() {
                self.app.handle_key(key(KeyCode::Char(ch)), now);
            }
        }

        pub fn press(&mut self, code: KeyCode, at_ms: u64) {
            let now = self.at(at_ms);
            self.app.handle_key(key(code), now);
        }

        pub fn tick(&mut self, at_ms: u64) {
            let now = self.at(at_ms);
            self.app.tick(now);
        }

        pub fn drain_requests(&mut self) -> Vec<ApiRequest> {
            let mut out = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                out.push(request);
            }
            out
        }
    }

    /// Canned reply from a [`TestServer`]
    pub struct CannedResponse {
        pub status: &'static str,
        pub body: String,
        pub delay: Duration,
    }

    impl CannedResponse {
        pub fn ok(body: &str) -> Self {
            Self {
                status: "200 OK",
                body: body.to_string(),
                delay: Duration::ZERO,
            }
        }

        pub fn status(status: &'static str) -> Self {
            Self {
                status,
                body: String::new(),
                delay: Duration::ZERO,
            }
        }

        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    /// Minimal HTTP/1.1 server on an ephemeral localhost port
    ///
    /// Every connection is answered by `handler`, which sees the request line
    /// (`GET /api/search?query=dune HTTP/1.1`). Request lines are recorded.
    pub struct TestServer {
        pub base_url: String,
        pub requests: Arc<Mutex<Vec<String>>>,
    }

    impl TestServer {
        pub fn start<F>(handler: F) -> Self
        where
            F: Fn(&str) -> CannedResponse + Send + Sync + 'static,
        {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let base_url = format!("http://{}", listener.local_addr().unwrap());
            let requests = Arc::new(Mutex::new(Vec::new()));
            let handler = Arc::new(handler);

            let recorded = Arc::clone(&requests);
            std::thread::spawn(move || {
                for stream in listener.incoming().flatten() {
                    let handler = Arc::clone(&handler);
                    let recorded = Arc::clone(&recorded);
                    std::thread::spawn(move || serve_connection(stream, &*handler, &recorded));
                }
            });

            Self { base_url, requests }
        }

        pub fn request_lines(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    fn serve_connection(
        stream: TcpStream,
        handler: &dyn Fn(&str) -> CannedResponse,
        recorded: &Mutex<Vec<String>>,
    ) {
        let mut reader = BufReader::new(match stream.try_clone() {
            Ok(s) => s,
            Err(_) => return,
        });

        let mut request_line = String::new();
        if reader.read_line(&mut request_line).is_err() {
            return;
        }
        let request_line = request_line.trim_end().to_string();

        // Drain headers
        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) if line == "\r\n" || line == "\n" => break,
                Ok(_) => continue,
                Err(_) => return,
            }
        }

        recorded.lock().unwrap().push(request_line.clone());
        let canned = handler(&request_line);
        if !canned.delay.is_zero() {
            std::thread::sleep(canned.delay);
        }

        let mut stream = stream;
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            canned.status,
            canned.body.len(),
            canned.body
        );
        let _ = stream.write_all(reply.as_bytes());
        let _ = stream.flush();
    }

    /// Wait for the next worker response
    pub fn recv_response(rx: &Receiver<ApiResponse>) -> ApiResponse {
        rx.recv_timeout(Duration::from_secs(5))
            .expect("worker did not respond within timeout")
    }
}
