// crates/ttt-server/tests/end_to_end.rs
use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use ttt_server::server;

const READ_TIMEOUT: Duration = Duration::from_secs(2);

struct TestClient {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    async fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.expect("connect");
        let (read, writer) = stream.into_split();
        TestClient {
            lines: BufReader::new(read).lines(),
            writer,
        }
    }

    async fn send(&mut self, line: &str) {
        self.writer
            .write_all(format!("{}\n", line).as_bytes())
            .await
            .expect("write");
    }

    /// Next line from the server, or `None` on EOF.
    async fn recv(&mut self) -> Option<String> {
        timeout(READ_TIMEOUT, self.lines.next_line())
            .await
            .expect("timed out waiting for server")
            .expect("read")
    }

    /// True once the server has closed the connection (EOF or reset).
    async fn closed(&mut self) -> bool {
        let next = timeout(READ_TIMEOUT, self.lines.next_line())
            .await
            .expect("timed out waiting for close");
        matches!(next, Ok(None) | Err(_))
    }

    async fn expect(&mut self, expected: &str) {
        assert_eq!(self.recv().await.as_deref(), Some(expected));
    }
}

async fn start_server(max_clients: usize) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(server::serve(listener, max_clients));
    addr
}

#[tokio::test]
async fn two_players_join_move_and_query() {
    let addr = start_server(16).await;
    let mut a = TestClient::connect(addr).await;
    let mut b = TestClient::connect(addr).await;

    a.send("JOIN|abc").await;
    a.expect("JOINED").await;
    b.send("JOIN|abc").await;
    b.expect("JOINED").await;

    a.send("CHANGE|0,0").await;
    a.expect("REFRESH").await;
    a.expect("RESULT|2").await;
    b.expect("REFRESH").await;

    b.send("CHANGE|0,0").await;
    b.expect("REFRESH").await;
    b.expect("RESULT|0").await;
    a.expect("REFRESH").await;

    b.send("QUERY|0,0").await;
    b.expect("POINT|0,0|1").await;
    a.send("QUERY|0,0").await;
    a.expect("POINT|0,0|1").await;
}

#[tokio::test]
async fn third_joiner_gets_lobby_full() {
    let addr = start_server(16).await;
    let mut a = TestClient::connect(addr).await;
    let mut b = TestClient::connect(addr).await;
    let mut c = TestClient::connect(addr).await;

    a.send("JOIN|full").await;
    a.expect("JOINED").await;
    b.send("JOIN|full").await;
    b.expect("JOINED").await;
    c.send("JOIN|full").await;
    c.expect("ERROR|lobby full").await;
}

#[tokio::test]
async fn malformed_lines_get_no_reply() {
    let addr = start_server(16).await;
    let mut a = TestClient::connect(addr).await;

    a.send("HELLO").await;
    a.send("CHANGE|x,y").await;
    a.send("").await;
    a.send("JOIN|solo").await;
    a.expect("JOINED").await;

    a.send("QUERY|1,1\r").await;
    a.expect("POINT|1,1|0").await;
}

#[tokio::test]
async fn disconnect_notifies_the_opponent() {
    let addr = start_server(16).await;
    let mut a = TestClient::connect(addr).await;
    let mut b = TestClient::connect(addr).await;

    a.send("JOIN|gone").await;
    a.expect("JOINED").await;
    b.send("JOIN|gone").await;
    b.expect("JOINED").await;

    drop(a);
    b.expect("LEFT").await;

    b.send("CHANGE|1,1").await;
    b.expect("ERROR|lobby closed").await;

    b.send("JOIN|again").await;
    b.expect("JOINED").await;
}

#[tokio::test]
async fn connections_over_the_limit_are_dropped() {
    let addr = start_server(1).await;
    let mut a = TestClient::connect(addr).await;
    a.send("JOIN|limit").await;
    a.expect("JOINED").await;

    let mut b = TestClient::connect(addr).await;
    assert!(b.closed().await);
}

#[tokio::test]
async fn overlong_line_closes_the_connection() {
    let addr = start_server(16).await;
    let mut a = TestClient::connect(addr).await;

    a.send(&"A".repeat(4096)).await;
    assert!(a.closed().await);
}
