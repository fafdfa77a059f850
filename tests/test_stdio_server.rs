//! End-to-end tests driving the MCP server over an in-memory stdio pipe
//!
//! The server reads newline-delimited JSON-RPC from one end of a duplex
//! stream while the test plays the MCP client on the other end.


use safe_mcp::StdioTransport;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines, ReadHalf, WriteHalf};
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use test_helpers::{api_path, mcp_server};

struct TestClient {
    writer: WriteHalf<DuplexStream>,
    lines: Lines<BufReader<ReadHalf<DuplexStream>>>,
}

impl TestClient {
    async fn send(&mut self, frame: &str) {
        self.send_bytes(frame.as_bytes()).await;
    }

    async fn send_bytes(&mut self, frame: &[u8]) {
        self.writer.write_all(frame).await.unwrap();
        self.writer.write_all(b"\n").await.unwrap();
        self.writer.flush().await.unwrap();
    }

    async fn request(&mut self, message: Value) -> Value {
        self.send(&message.to_string()).await;
        self.next_response().await
    }

    async fn next_response(&mut self) -> Value {
        let line = timeout(Duration::from_secs(5), self.lines.next_line())
            .await
            .expect("timed out waiting for a response")
            .unwrap()
            .expect("server closed the stream");
        serde_json::from_str(&line).unwrap()
    }
}

fn start(
    mock_server: &MockServer,
) -> (TestClient, JoinHandle<Result<(), safe_mcp::TransportError>>) {
    let (client_end, server_end) = tokio::io::duplex(64 * 1024);
    let (server_reader, server_writer) = tokio::io::split(server_end);
    let (client_reader, client_writer) = tokio::io::split(client_end);

    let server = mcp_server(mock_server);
    let handle = tokio::spawn(async move {
        let mut transport = StdioTransport::new(server_reader, server_writer);
        server.serve(&mut transport).await
    });

    let client = TestClient {
        writer: client_writer,
        lines: BufReader::new(client_reader).lines(),
    };
    (client, handle)
}

#[tokio::test]
async fn test_full_session_over_stdio() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/multisig-transactions/0xfeed/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "safeTxHash": "0xfeed",
            "isExecuted": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (mut client, handle) = start(&mock_server);

    let response = client
        .request(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "test-client", "version": "0.1.0"}
            }
        }))
        .await;
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(response["result"]["serverInfo"]["name"], "safe-mcp");

    // Notifications get no reply; the next line read must answer id 2
    client
        .send(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await;

    let response = client
        .request(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}))
        .await;
    assert_eq!(response["id"], 2);
    let names: Vec<&str> = response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["getSafeTransactions", "getMultisigTransaction", "decodeTransactionData"]
    );

    let response = client
        .request(json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {
                "name": "getMultisigTransaction",
                "arguments": {"safeTxHash": "0xfeed"}
            }
        }))
        .await;
    assert_eq!(response["id"], 3);
    assert_eq!(
        response["result"],
        json!({
            "content": [{
                "type": "text",
                "text": "{\n  \"safeTxHash\": \"0xfeed\",\n  \"isExecuted\": true\n}"
            }]
        })
    );

    drop(client);
    let result = timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop at end of input")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_errors_are_reported_on_the_wire() {
    let mock_server = MockServer::start().await;
    let (mut client, _handle) = start(&mock_server);

    client.send("{not json").await;
    let response = client.next_response().await;
    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["error"]["code"], -32700);

    let response = client
        .request(json!({"jsonrpc": "2.0", "id": "a", "method": "resources/list"}))
        .await;
    assert_eq!(response["id"], "a");
    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["message"], "Method not found: resources/list");

    let response = client
        .request(json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "getSafeTransactions", "arguments": {}}
        }))
        .await;
    assert_eq!(response["id"], 7);
    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(
        response["error"]["message"],
        "Missing required argument: address"
    );
    assert!(response.get("result").is_none());

    let response = client
        .request(json!({
            "jsonrpc": "2.0",
            "id": 8,
            "method": "tools/call",
            "params": {"name": "sendTransaction", "arguments": {}}
        }))
        .await;
    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["message"], "Unknown tool: sendTransaction");
}

#[tokio::test]
async fn test_blank_lines_are_ignored() {
    let mock_server = MockServer::start().await;
    let (mut client, _handle) = start(&mock_server);

    client.send("").await;
    client.send("   ").await;

    let response = client
        .request(json!({"jsonrpc": "2.0", "id": 42, "method": "ping"}))
        .await;
    assert_eq!(response["id"], 42);
    assert_eq!(response["result"], json!({}));
}

#[tokio::test]
async fn test_invalid_utf8_line_keeps_server_running() {
    let mock_server = MockServer::start().await;
    let (mut client, handle) = start(&mock_server);

    client.send_bytes(b"\xff\xfe{\"jsonrpc\":\"2.0\"}").await;
    let response = client.next_response().await;
    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["error"]["code"], -32700);

    let response = client
        .request(json!({"jsonrpc": "2.0", "id": 9, "method": "ping"}))
        .await;
    assert_eq!(response["id"], 9);
    assert_eq!(response["result"], json!({}));
    assert!(!handle.is_finished());
}
