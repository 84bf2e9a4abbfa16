use std::env;
use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;
use ttt_protocol::{format_input, parse_input_line, parse_output_line};

#[tokio::main]
async fn main() -> Result<()> {
    // Where to connect: env override or default.
    let addr = env::var("TTT_CLIENT_ADDR").unwrap_or_else(|_| "127.0.0.1:5500".to_string());

    println!("Connecting to {}...", addr);
    let stream = TcpStream::connect(&addr).await?;
    let (read_half, mut write_half) = stream.into_split();
    let mut responses = BufReader::new(read_half).lines();
    println!("Connected.");
    println!("Type commands like:");
    println!("  JOIN|abc");
    println!("  CHANGE|1,1");
    println!("  QUERY|1,1");
    println!("Type 'quit' or 'exit' to leave.\n");

    let stdin = io::stdin();

    loop {
        // Prompt
        print!(">> ");
        io::stdout().flush()?;

        let mut line = String::new();
        let n = stdin.read_line(&mut line)?;
        if n == 0 {
            // EOF
            println!("\nEOF on stdin, exiting client.");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            println!("Exiting client.");
            break;
        }

        // The server ignores malformed lines silently, so check locally.
        let input_msg = match parse_input_line(trimmed) {
            Some(m) => m,
            None => {
                eprintln!("Could not parse line as a command. Check the format.");
                continue;
            }
        };

        write_half
            .write_all(format!("{}\n", format_input(&input_msg)).as_bytes())
            .await?;

        // Now read back all responses that arrive shortly after.
        // We'll keep reading lines until a small timeout occurs
        // with no more data.
        loop {
            match timeout(Duration::from_millis(100), responses.next_line()).await {
                Ok(Ok(Some(reply))) => match parse_output_line(&reply) {
                    Some(msg) => println!("<< {}    {:?}", reply, msg),
                    None => println!("<< {}", reply),
                },
                Ok(Ok(None)) => {
                    println!("Server closed the connection.");
                    return Ok(());
                }
                Ok(Err(e)) => {
                    eprintln!("Read error: {:?}", e);
                    return Ok(());
                }
                // Timed out waiting for next response → assume we're done for this command.
                Err(_) => break,
            }
        }
    }

    Ok(())
}
