use anyhow::Result;
use vfs_null::NullStreamHandler;
use vfs_stream::{LockKind, Stream, Whence};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<()> {
    NullStreamHandler::register_default()?;
    println!("Registered the `null` scheme");

    let mut stream = Stream::open("null://sink", "w+")?;

    let written = stream.write(b"Content")?;
    println!("Wrote 7 bytes, {} accepted", written);

    stream.seek(0, Whence::Start)?;
    println!("Position after rewind: {}", stream.tell());

    let data = stream.read(1024)?;
    println!(
        "Read back {} bytes, eof = {}",
        data.len(),
        stream.eof()
    );

    match stream.lock(LockKind::Exclusive) {
        Ok(()) => println!("Lock acquired (unexpected)"),
        Err(e) => println!("Lock refused: {}", e),
    }

    match stream.truncate(0) {
        Ok(()) => println!("Truncated (unexpected)"),
        Err(e) => println!("Truncate diagnosed: {}", e),
    }

    stream.close()?;
    println!("Stream closed");
    Ok(())
}
